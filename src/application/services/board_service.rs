//! Board and invite operations.

use serde_json::json;
use std::sync::Arc;
use tracing::info;
use uuid::Uuid;
use validator::Validate;

use crate::application::requests::{
    BoardRequest, BoardsRequest, CreateBoardRequest, CreateInviteRequest, DeleteBoardRequest,
    DeleteInviteRequest, EditBoardRequest, EditBoardUserRequest, InvitesRequest,
    RemoveUserRequest, RequestContext, RespondToInviteRequest,
};
use crate::domain::entities::{Action, Board, Invite, InviteResponse, Role};
use crate::domain::repositories::{AuthorizationStore, BoardDataStore};
use crate::error::AppError;

/// Facade exposing every board operation.
///
/// Each operation requires an authenticated caller in the [`RequestContext`]
/// and consults the bound [`AuthorizationStore`] before touching board state.
/// Safe for concurrent use as long as the datastore and policy are.
pub struct BoardApplicationService {
    data_store: Arc<dyn BoardDataStore>,
    authorization: Arc<dyn AuthorizationStore>,
}

impl BoardApplicationService {
    pub fn new(
        data_store: Arc<dyn BoardDataStore>,
        authorization: Arc<dyn AuthorizationStore>,
    ) -> Self {
        Self {
            data_store,
            authorization,
        }
    }

    pub fn data_store(&self) -> &Arc<dyn BoardDataStore> {
        &self.data_store
    }

    pub fn authorization(&self) -> &Arc<dyn AuthorizationStore> {
        &self.authorization
    }

    /// Creates a board owned by the caller.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] for an empty or oversized name or description.
    pub async fn create_board(
        &self,
        ctx: &RequestContext,
        req: CreateBoardRequest,
    ) -> Result<Board, AppError> {
        let user_id = caller(ctx)?;
        req.validate()?;

        let board = Board::new(req.name, req.description, user_id);
        self.data_store.create_board(&board).await?;

        info!(board_id = %board.id, user_id, "board created");
        Ok(board)
    }

    /// Deletes a board and its invites. Owner only.
    pub async fn delete_board(
        &self,
        ctx: &RequestContext,
        req: DeleteBoardRequest,
    ) -> Result<(), AppError> {
        let user_id = caller(ctx)?;
        self.ensure(user_id, req.board_id, Action::DeleteBoard)
            .await?;

        if !self.data_store.delete_board(req.board_id).await? {
            return Err(board_not_found(req.board_id));
        }

        info!(board_id = %req.board_id, user_id, "board deleted");
        Ok(())
    }

    /// Renames a board or changes its description.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if neither field is present or a field is invalid.
    pub async fn edit_board(
        &self,
        ctx: &RequestContext,
        req: EditBoardRequest,
    ) -> Result<Board, AppError> {
        let user_id = caller(ctx)?;
        req.validate()?;
        if req.name.is_none() && req.description.is_none() {
            return Err(AppError::bad_request(
                "Nothing to update",
                json!({ "reason": "name or description required" }),
            ));
        }
        self.ensure(user_id, req.board_id, Action::EditBoard).await?;

        let editor = user_id.to_string();
        self.data_store
            .modify_board(
                req.board_id,
                Box::new(move |board: &mut Board| {
                    if let Some(name) = req.name {
                        board.name = name;
                    }
                    if let Some(description) = req.description {
                        board.description = Some(description);
                    }
                    board.touch(&editor);
                    Ok(())
                }),
            )
            .await
    }

    pub async fn board(&self, ctx: &RequestContext, req: BoardRequest) -> Result<Board, AppError> {
        let user_id = caller(ctx)?;
        self.ensure(user_id, req.board_id, Action::ViewBoard).await?;
        self.load_board(req.board_id).await
    }

    /// Lists the boards the caller is a member of, newest first.
    pub async fn boards(
        &self,
        ctx: &RequestContext,
        _req: BoardsRequest,
    ) -> Result<Vec<Board>, AppError> {
        let user_id = caller(ctx)?;
        self.data_store.boards_for_user(user_id).await
    }

    /// Creates an invite. Owner only.
    ///
    /// # Errors
    ///
    /// - [`AppError::Validation`] if the invite would grant the owner role
    /// - [`AppError::Conflict`] if the targeted user is already a member
    pub async fn create_invite(
        &self,
        ctx: &RequestContext,
        req: CreateInviteRequest,
    ) -> Result<Invite, AppError> {
        let user_id = caller(ctx)?;
        self.ensure(user_id, req.board_id, Action::CreateInvite)
            .await?;
        reject_owner_role(req.role)?;

        if let Some(target) = req.user_id.as_deref() {
            let board = self.load_board(req.board_id).await?;
            if board.is_member(target) {
                return Err(AppError::conflict(
                    "User is already a member of this board",
                    json!({ "board_id": req.board_id, "user_id": target }),
                ));
            }
        }

        let invite = Invite::new(req.board_id, req.user_id, req.role, user_id);
        self.data_store.create_invite(&invite).await?;

        info!(board_id = %invite.board_id, invite_id = %invite.id, user_id, "invite created");
        Ok(invite)
    }

    /// Accepts or declines an invite.
    ///
    /// No board permission is required: the invite itself is the grant.
    /// Targeted invites are consumed by either answer; link invites stay
    /// until deleted or expired.
    ///
    /// # Errors
    ///
    /// - [`AppError::NotFound`] if the invite does not exist or has expired
    /// - [`AppError::Forbidden`] if the invite targets another user
    /// - [`AppError::Conflict`] when accepting as an existing member
    pub async fn respond_to_invite(
        &self,
        ctx: &RequestContext,
        req: RespondToInviteRequest,
    ) -> Result<(), AppError> {
        let user_id = caller(ctx)?;

        let invite = self
            .data_store
            .invite(req.board_id, req.invite_id)
            .await?
            .filter(|invite| !invite.is_expired())
            .ok_or_else(|| {
                AppError::not_found(
                    "Invite not found",
                    json!({ "board_id": req.board_id, "invite_id": req.invite_id }),
                )
            })?;

        if !invite.is_addressed_to(user_id) {
            return Err(AppError::forbidden(
                "Invite is addressed to another user",
                json!({ "invite_id": invite.id }),
            ));
        }

        if req.response == InviteResponse::Accept {
            let member = user_id.to_string();
            let role = invite.role;
            self.data_store
                .modify_board(
                    invite.board_id,
                    Box::new(move |board: &mut Board| {
                        if board.add_user(&member, role) {
                            Ok(())
                        } else {
                            Err(AppError::conflict(
                                "User is already a member of this board",
                                json!({ "board_id": board.id, "user_id": member }),
                            ))
                        }
                    }),
                )
                .await?;
            info!(board_id = %invite.board_id, user_id, role = %invite.role, "invite accepted");
        }

        if invite.user_id.is_some() {
            self.data_store
                .delete_invite(invite.board_id, invite.id)
                .await?;
        }
        Ok(())
    }

    /// Deletes an invite. Owner only.
    pub async fn delete_invite(
        &self,
        ctx: &RequestContext,
        req: DeleteInviteRequest,
    ) -> Result<(), AppError> {
        let user_id = caller(ctx)?;
        self.ensure(user_id, req.board_id, Action::DeleteInvite)
            .await?;

        if !self
            .data_store
            .delete_invite(req.board_id, req.invite_id)
            .await?
        {
            return Err(AppError::not_found(
                "Invite not found",
                json!({ "board_id": req.board_id, "invite_id": req.invite_id }),
            ));
        }
        Ok(())
    }

    /// Lists the open invites of a board. Owner only; expired invites are skipped.
    pub async fn invites(
        &self,
        ctx: &RequestContext,
        req: InvitesRequest,
    ) -> Result<Vec<Invite>, AppError> {
        let user_id = caller(ctx)?;
        self.ensure(user_id, req.board_id, Action::ViewInvites)
            .await?;

        let invites = self.data_store.invites(req.board_id).await?;
        Ok(invites.into_iter().filter(|i| !i.is_expired()).collect())
    }

    /// Removes a member from a board.
    ///
    /// Members may remove themselves; removing someone else needs the
    /// owner role. The owner can never be removed. Callers who cannot see
    /// the board are refused before membership is checked.
    pub async fn remove_user(
        &self,
        ctx: &RequestContext,
        req: RemoveUserRequest,
    ) -> Result<(), AppError> {
        let user_id = caller(ctx)?;
        let action = if req.user_id == user_id {
            Action::ViewBoard
        } else {
            Action::RemoveUser
        };
        self.ensure(user_id, req.board_id, action).await?;

        let removed = req.user_id.clone();
        self.data_store
            .modify_board(
                req.board_id,
                Box::new(move |board: &mut Board| {
                    match board.role_of(&removed) {
                        None => return Err(member_not_found(board.id, &removed)),
                        Some(Role::Owner) => {
                            return Err(AppError::conflict(
                                "The board owner cannot be removed",
                                json!({ "board_id": board.id, "user_id": removed }),
                            ));
                        }
                        Some(_) => {}
                    }
                    board.remove_user(&removed);
                    Ok(())
                }),
            )
            .await?;

        info!(board_id = %req.board_id, removed = %req.user_id, user_id, "user removed");
        Ok(())
    }

    /// Changes a member's role. Owner only; the owner's own role is fixed.
    pub async fn edit_board_user(
        &self,
        ctx: &RequestContext,
        req: EditBoardUserRequest,
    ) -> Result<Board, AppError> {
        let user_id = caller(ctx)?;
        self.ensure(user_id, req.board_id, Action::EditBoardUser)
            .await?;
        reject_owner_role(req.role)?;

        self.data_store
            .modify_board(
                req.board_id,
                Box::new(move |board: &mut Board| {
                    match board.role_of(&req.user_id) {
                        None => return Err(member_not_found(board.id, &req.user_id)),
                        Some(Role::Owner) => {
                            return Err(AppError::conflict(
                                "The owner's role cannot be changed",
                                json!({ "board_id": board.id, "user_id": req.user_id }),
                            ));
                        }
                        Some(_) => {}
                    }
                    board.set_role(&req.user_id, req.role);
                    Ok(())
                }),
            )
            .await
    }

    async fn load_board(&self, board_id: Uuid) -> Result<Board, AppError> {
        self.data_store
            .board(board_id)
            .await?
            .ok_or_else(|| board_not_found(board_id))
    }

    async fn ensure(&self, user_id: &str, board_id: Uuid, action: Action) -> Result<(), AppError> {
        if self
            .authorization
            .authorize(user_id, board_id, action)
            .await?
        {
            Ok(())
        } else {
            Err(AppError::forbidden(
                "Forbidden",
                json!({ "board_id": board_id, "action": action }),
            ))
        }
    }
}

fn caller(ctx: &RequestContext) -> Result<&str, AppError> {
    ctx.user_id().ok_or_else(|| {
        AppError::unauthorized(
            "Unauthorized",
            json!({ "reason": "request carries no user identity" }),
        )
    })
}

fn reject_owner_role(role: Role) -> Result<(), AppError> {
    if role == Role::Owner {
        return Err(AppError::bad_request(
            "Owner role cannot be granted",
            json!({ "role": role }),
        ));
    }
    Ok(())
}

fn board_not_found(board_id: Uuid) -> AppError {
    AppError::not_found("Board not found", json!({ "board_id": board_id }))
}

fn member_not_found(board_id: Uuid, user_id: &str) -> AppError {
    AppError::not_found(
        "User is not a member of this board",
        json!({ "board_id": board_id, "user_id": user_id }),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::repositories::{MockAuthorizationStore, MockBoardDataStore};
    use crate::infrastructure::authorization::DefaultAuthorizationStore;
    use crate::infrastructure::persistence::InMemoryBoardDataStore;
    use chrono::{Duration, Utc};

    fn in_memory_service() -> BoardApplicationService {
        let store: Arc<dyn BoardDataStore> = Arc::new(InMemoryBoardDataStore::new());
        let policy = Arc::new(DefaultAuthorizationStore::new(store.clone()));
        BoardApplicationService::new(store, policy)
    }

    async fn board_owned_by(service: &BoardApplicationService, owner: &str) -> Board {
        service
            .create_board(
                &RequestContext::for_user(owner),
                CreateBoardRequest {
                    name: "Reading list".to_string(),
                    description: None,
                },
            )
            .await
            .unwrap()
    }

    async fn add_member(service: &BoardApplicationService, board: &Board, user: &str, role: Role) {
        let invite = service
            .create_invite(
                &RequestContext::for_user(&board.created_by),
                CreateInviteRequest {
                    board_id: board.id,
                    user_id: Some(user.to_string()),
                    role,
                },
            )
            .await
            .unwrap();
        service
            .respond_to_invite(
                &RequestContext::for_user(user),
                RespondToInviteRequest {
                    board_id: board.id,
                    invite_id: invite.id,
                    response: InviteResponse::Accept,
                },
            )
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn test_anonymous_caller_is_unauthorized() {
        let service = in_memory_service();

        let result = service
            .boards(&RequestContext::anonymous(), BoardsRequest::default())
            .await;

        assert!(matches!(result, Err(AppError::Unauthorized { .. })));
    }

    #[tokio::test]
    async fn test_create_board_validates_before_storing() {
        let mock_auth = MockAuthorizationStore::new();
        let mut mock_store = MockBoardDataStore::new();
        mock_store.expect_create_board().times(0);

        let service = BoardApplicationService::new(Arc::new(mock_store), Arc::new(mock_auth));
        let result = service
            .create_board(
                &RequestContext::for_user("alice"),
                CreateBoardRequest {
                    name: String::new(),
                    description: None,
                },
            )
            .await;

        assert!(matches!(result, Err(AppError::Validation { .. })));
    }

    #[tokio::test]
    async fn test_denied_action_never_reaches_store() {
        let mut mock_auth = MockAuthorizationStore::new();
        mock_auth
            .expect_authorize()
            .withf(|user, _, action| user.to_string() == "bob" && *action == Action::DeleteBoard)
            .times(1)
            .returning(|_, _, _| Ok(false));
        let mut mock_store = MockBoardDataStore::new();
        mock_store.expect_delete_board().times(0);

        let service = BoardApplicationService::new(Arc::new(mock_store), Arc::new(mock_auth));
        let result = service
            .delete_board(
                &RequestContext::for_user("bob"),
                DeleteBoardRequest {
                    board_id: Uuid::new_v4(),
                },
            )
            .await;

        assert!(matches!(result, Err(AppError::Forbidden { .. })));
    }

    #[tokio::test]
    async fn test_delete_missing_board_is_not_found() {
        let mut mock_auth = MockAuthorizationStore::new();
        mock_auth
            .expect_authorize()
            .returning(|_, _, _| Ok(true));
        let mut mock_store = MockBoardDataStore::new();
        mock_store
            .expect_delete_board()
            .times(1)
            .returning(|_| Ok(false));

        let service = BoardApplicationService::new(Arc::new(mock_store), Arc::new(mock_auth));
        let result = service
            .delete_board(
                &RequestContext::for_user("alice"),
                DeleteBoardRequest {
                    board_id: Uuid::new_v4(),
                },
            )
            .await;

        assert!(matches!(result, Err(AppError::NotFound { .. })));
    }

    #[tokio::test]
    async fn test_create_and_list_boards() {
        let service = in_memory_service();
        let board = board_owned_by(&service, "alice").await;

        let alice = service
            .boards(&RequestContext::for_user("alice"), BoardsRequest::default())
            .await
            .unwrap();
        let bob = service
            .boards(&RequestContext::for_user("bob"), BoardsRequest::default())
            .await
            .unwrap();

        assert_eq!(alice.len(), 1);
        assert_eq!(alice[0].id, board.id);
        assert!(bob.is_empty());
    }

    #[tokio::test]
    async fn test_edit_board_requires_editor() {
        let service = in_memory_service();
        let board = board_owned_by(&service, "alice").await;
        add_member(&service, &board, "viewer", Role::Viewer).await;
        add_member(&service, &board, "editor", Role::Editor).await;

        let edit = |name: &str| EditBoardRequest {
            board_id: board.id,
            name: Some(name.to_string()),
            description: None,
        };

        let denied = service
            .edit_board(&RequestContext::for_user("viewer"), edit("nope"))
            .await;
        assert!(matches!(denied, Err(AppError::Forbidden { .. })));

        let edited = service
            .edit_board(&RequestContext::for_user("editor"), edit("Renamed"))
            .await
            .unwrap();
        assert_eq!(edited.name, "Renamed");
        assert_eq!(edited.modified_by, "editor");
    }

    #[tokio::test]
    async fn test_edit_board_without_fields_is_rejected() {
        let service = in_memory_service();
        let board = board_owned_by(&service, "alice").await;

        let result = service
            .edit_board(
                &RequestContext::for_user("alice"),
                EditBoardRequest {
                    board_id: board.id,
                    name: None,
                    description: None,
                },
            )
            .await;

        assert!(matches!(result, Err(AppError::Validation { .. })));
    }

    #[tokio::test]
    async fn test_non_member_cannot_view_board() {
        let service = in_memory_service();
        let board = board_owned_by(&service, "alice").await;

        let result = service
            .board(
                &RequestContext::for_user("mallory"),
                BoardRequest { board_id: board.id },
            )
            .await;

        assert!(matches!(result, Err(AppError::Forbidden { .. })));
    }

    #[tokio::test]
    async fn test_invite_accept_adds_member_and_consumes_invite() {
        let service = in_memory_service();
        let board = board_owned_by(&service, "alice").await;

        add_member(&service, &board, "bob", Role::Editor).await;

        let stored = service
            .board(
                &RequestContext::for_user("bob"),
                BoardRequest { board_id: board.id },
            )
            .await
            .unwrap();
        assert_eq!(stored.role_of("bob"), Some(Role::Editor));

        let invites = service
            .invites(
                &RequestContext::for_user("alice"),
                InvitesRequest { board_id: board.id },
            )
            .await
            .unwrap();
        assert!(invites.is_empty());
    }

    #[tokio::test]
    async fn test_targeted_invite_rejects_other_users() {
        let service = in_memory_service();
        let board = board_owned_by(&service, "alice").await;
        let invite = service
            .create_invite(
                &RequestContext::for_user("alice"),
                CreateInviteRequest {
                    board_id: board.id,
                    user_id: Some("bob".to_string()),
                    role: Role::Viewer,
                },
            )
            .await
            .unwrap();

        let result = service
            .respond_to_invite(
                &RequestContext::for_user("carol"),
                RespondToInviteRequest {
                    board_id: board.id,
                    invite_id: invite.id,
                    response: InviteResponse::Accept,
                },
            )
            .await;

        assert!(matches!(result, Err(AppError::Forbidden { .. })));
    }

    #[tokio::test]
    async fn test_link_invite_survives_responses() {
        let service = in_memory_service();
        let board = board_owned_by(&service, "alice").await;
        let invite = service
            .create_invite(
                &RequestContext::for_user("alice"),
                CreateInviteRequest {
                    board_id: board.id,
                    user_id: None,
                    role: Role::Viewer,
                },
            )
            .await
            .unwrap();

        for (user, response) in [
            ("bob", InviteResponse::Accept),
            ("carol", InviteResponse::Decline),
            ("dave", InviteResponse::Accept),
        ] {
            service
                .respond_to_invite(
                    &RequestContext::for_user(user),
                    RespondToInviteRequest {
                        board_id: board.id,
                        invite_id: invite.id,
                        response,
                    },
                )
                .await
                .unwrap();
        }

        let stored = service.data_store().board(board.id).await.unwrap().unwrap();
        assert!(stored.is_member("bob"));
        assert!(!stored.is_member("carol"));
        assert!(stored.is_member("dave"));

        let invites = service
            .invites(
                &RequestContext::for_user("alice"),
                InvitesRequest { board_id: board.id },
            )
            .await
            .unwrap();
        assert_eq!(invites.len(), 1);
    }

    #[tokio::test]
    async fn test_accepting_as_member_conflicts() {
        let service = in_memory_service();
        let board = board_owned_by(&service, "alice").await;
        let invite = service
            .create_invite(
                &RequestContext::for_user("alice"),
                CreateInviteRequest {
                    board_id: board.id,
                    user_id: None,
                    role: Role::Viewer,
                },
            )
            .await
            .unwrap();

        let result = service
            .respond_to_invite(
                &RequestContext::for_user("alice"),
                RespondToInviteRequest {
                    board_id: board.id,
                    invite_id: invite.id,
                    response: InviteResponse::Accept,
                },
            )
            .await;

        assert!(matches!(result, Err(AppError::Conflict { .. })));
    }

    #[tokio::test]
    async fn test_expired_invite_is_not_found() {
        let mut mock_store = MockBoardDataStore::new();
        let board_id = Uuid::new_v4();
        let mut invite = Invite::new(board_id, None, Role::Viewer, "alice");
        invite.expires_at = Utc::now() - Duration::minutes(1);
        let invite_id = invite.id;
        mock_store
            .expect_invite()
            .times(1)
            .returning(move |_, _| Ok(Some(invite.clone())));
        mock_store.expect_modify_board().times(0);

        let service = BoardApplicationService::new(
            Arc::new(mock_store),
            Arc::new(MockAuthorizationStore::new()),
        );
        let result = service
            .respond_to_invite(
                &RequestContext::for_user("bob"),
                RespondToInviteRequest {
                    board_id,
                    invite_id,
                    response: InviteResponse::Accept,
                },
            )
            .await;

        assert!(matches!(result, Err(AppError::NotFound { .. })));
    }

    #[tokio::test]
    async fn test_invite_cannot_grant_owner() {
        let service = in_memory_service();
        let board = board_owned_by(&service, "alice").await;

        let result = service
            .create_invite(
                &RequestContext::for_user("alice"),
                CreateInviteRequest {
                    board_id: board.id,
                    user_id: Some("bob".to_string()),
                    role: Role::Owner,
                },
            )
            .await;

        assert!(matches!(result, Err(AppError::Validation { .. })));
    }

    #[tokio::test]
    async fn test_invite_for_existing_member_conflicts() {
        let service = in_memory_service();
        let board = board_owned_by(&service, "alice").await;
        add_member(&service, &board, "bob", Role::Viewer).await;

        let result = service
            .create_invite(
                &RequestContext::for_user("alice"),
                CreateInviteRequest {
                    board_id: board.id,
                    user_id: Some("bob".to_string()),
                    role: Role::Editor,
                },
            )
            .await;

        assert!(matches!(result, Err(AppError::Conflict { .. })));
    }

    #[tokio::test]
    async fn test_delete_invite() {
        let service = in_memory_service();
        let board = board_owned_by(&service, "alice").await;
        let invite = service
            .create_invite(
                &RequestContext::for_user("alice"),
                CreateInviteRequest {
                    board_id: board.id,
                    user_id: None,
                    role: Role::Viewer,
                },
            )
            .await
            .unwrap();
        let req = || DeleteInviteRequest {
            board_id: board.id,
            invite_id: invite.id,
        };

        service
            .delete_invite(&RequestContext::for_user("alice"), req())
            .await
            .unwrap();
        let again = service
            .delete_invite(&RequestContext::for_user("alice"), req())
            .await;

        assert!(matches!(again, Err(AppError::NotFound { .. })));
    }

    #[tokio::test]
    async fn test_member_can_leave_but_owner_cannot() {
        let service = in_memory_service();
        let board = board_owned_by(&service, "alice").await;
        add_member(&service, &board, "bob", Role::Viewer).await;

        service
            .remove_user(
                &RequestContext::for_user("bob"),
                RemoveUserRequest {
                    board_id: board.id,
                    user_id: "bob".to_string(),
                },
            )
            .await
            .unwrap();

        let owner_leaves = service
            .remove_user(
                &RequestContext::for_user("alice"),
                RemoveUserRequest {
                    board_id: board.id,
                    user_id: "alice".to_string(),
                },
            )
            .await;
        assert!(matches!(owner_leaves, Err(AppError::Conflict { .. })));

        let stored = service.data_store().board(board.id).await.unwrap().unwrap();
        assert!(!stored.is_member("bob"));
    }

    #[tokio::test]
    async fn test_only_owner_removes_others() {
        let service = in_memory_service();
        let board = board_owned_by(&service, "alice").await;
        add_member(&service, &board, "bob", Role::Editor).await;
        add_member(&service, &board, "carol", Role::Viewer).await;

        let denied = service
            .remove_user(
                &RequestContext::for_user("bob"),
                RemoveUserRequest {
                    board_id: board.id,
                    user_id: "carol".to_string(),
                },
            )
            .await;
        assert!(matches!(denied, Err(AppError::Forbidden { .. })));

        service
            .remove_user(
                &RequestContext::for_user("alice"),
                RemoveUserRequest {
                    board_id: board.id,
                    user_id: "carol".to_string(),
                },
            )
            .await
            .unwrap();

        let missing = service
            .remove_user(
                &RequestContext::for_user("alice"),
                RemoveUserRequest {
                    board_id: board.id,
                    user_id: "carol".to_string(),
                },
            )
            .await;
        assert!(matches!(missing, Err(AppError::NotFound { .. })));
    }

    #[tokio::test]
    async fn test_non_member_leaving_is_forbidden() {
        let service = in_memory_service();
        let board = board_owned_by(&service, "alice").await;

        let result = service
            .remove_user(
                &RequestContext::for_user("mallory"),
                RemoveUserRequest {
                    board_id: board.id,
                    user_id: "mallory".to_string(),
                },
            )
            .await;

        assert!(matches!(result, Err(AppError::Forbidden { .. })));
    }

    /// Datastore whose reads take a while, so overlapping requests
    /// interleave between reading and writing a board.
    struct SlowReads(InMemoryBoardDataStore);

    #[async_trait::async_trait]
    impl BoardDataStore for SlowReads {
        fn kind(&self) -> crate::domain::repositories::DataStoreKind {
            self.0.kind()
        }
        async fn create_board(&self, board: &Board) -> Result<(), AppError> {
            self.0.create_board(board).await
        }
        async fn board(&self, board_id: Uuid) -> Result<Option<Board>, AppError> {
            let board = self.0.board(board_id).await;
            tokio::time::sleep(std::time::Duration::from_millis(50)).await;
            board
        }
        async fn boards_for_user(&self, user_id: &str) -> Result<Vec<Board>, AppError> {
            self.0.boards_for_user(user_id).await
        }
        async fn modify_board(
            &self,
            board_id: Uuid,
            mutation: crate::domain::repositories::BoardMutation,
        ) -> Result<Board, AppError> {
            self.0.modify_board(board_id, mutation).await
        }
        async fn delete_board(&self, board_id: Uuid) -> Result<bool, AppError> {
            self.0.delete_board(board_id).await
        }
        async fn create_invite(&self, invite: &Invite) -> Result<(), AppError> {
            self.0.create_invite(invite).await
        }
        async fn invite(&self, board_id: Uuid, invite_id: Uuid) -> Result<Option<Invite>, AppError> {
            self.0.invite(board_id, invite_id).await
        }
        async fn invites(&self, board_id: Uuid) -> Result<Vec<Invite>, AppError> {
            self.0.invites(board_id).await
        }
        async fn delete_invite(&self, board_id: Uuid, invite_id: Uuid) -> Result<bool, AppError> {
            self.0.delete_invite(board_id, invite_id).await
        }
    }

    #[tokio::test]
    async fn test_overlapping_accepts_keep_every_member() {
        let store: Arc<dyn BoardDataStore> = Arc::new(SlowReads(InMemoryBoardDataStore::new()));
        let policy = Arc::new(DefaultAuthorizationStore::new(store.clone()));
        let service = BoardApplicationService::new(store, policy);
        let board = board_owned_by(&service, "alice").await;
        let invite = service
            .create_invite(
                &RequestContext::for_user("alice"),
                CreateInviteRequest {
                    board_id: board.id,
                    user_id: None,
                    role: Role::Viewer,
                },
            )
            .await
            .unwrap();
        let (board_id, invite_id) = (board.id, invite.id);

        let accept = |user: &'static str| {
            let service = &service;
            async move {
                service
                    .respond_to_invite(
                        &RequestContext::for_user(user),
                        RespondToInviteRequest {
                            board_id,
                            invite_id,
                            response: InviteResponse::Accept,
                        },
                    )
                    .await
            }
        };
        let (bob, carol) = tokio::join!(accept("bob"), accept("carol"));
        bob.unwrap();
        carol.unwrap();

        let stored = service.data_store().board(board.id).await.unwrap().unwrap();
        assert_eq!(stored.users.len(), 3);
        assert!(stored.is_member("bob"));
        assert!(stored.is_member("carol"));
    }

    #[tokio::test]
    async fn test_overlapping_edits_keep_both_changes() {
        let store: Arc<dyn BoardDataStore> = Arc::new(SlowReads(InMemoryBoardDataStore::new()));
        let policy = Arc::new(DefaultAuthorizationStore::new(store.clone()));
        let service = BoardApplicationService::new(store, policy);
        let board = board_owned_by(&service, "alice").await;
        add_member(&service, &board, "bob", Role::Viewer).await;
        let alice = RequestContext::for_user("alice");

        let (renamed, promoted) = tokio::join!(
            service.edit_board(
                &alice,
                EditBoardRequest {
                    board_id: board.id,
                    name: Some("Renamed".to_string()),
                    description: None,
                },
            ),
            service.edit_board_user(
                &alice,
                EditBoardUserRequest {
                    board_id: board.id,
                    user_id: "bob".to_string(),
                    role: Role::Editor,
                },
            ),
        );
        renamed.unwrap();
        promoted.unwrap();

        let stored = service.data_store().board(board.id).await.unwrap().unwrap();
        assert_eq!(stored.name, "Renamed");
        assert_eq!(stored.role_of("bob"), Some(Role::Editor));
    }

    #[tokio::test]
    async fn test_edit_board_user_role() {
        let service = in_memory_service();
        let board = board_owned_by(&service, "alice").await;
        add_member(&service, &board, "bob", Role::Viewer).await;

        let updated = service
            .edit_board_user(
                &RequestContext::for_user("alice"),
                EditBoardUserRequest {
                    board_id: board.id,
                    user_id: "bob".to_string(),
                    role: Role::Editor,
                },
            )
            .await
            .unwrap();
        assert_eq!(updated.role_of("bob"), Some(Role::Editor));

        let demote_owner = service
            .edit_board_user(
                &RequestContext::for_user("alice"),
                EditBoardUserRequest {
                    board_id: board.id,
                    user_id: "alice".to_string(),
                    role: Role::Viewer,
                },
            )
            .await;
        assert!(matches!(demote_owner, Err(AppError::Conflict { .. })));
    }

    #[tokio::test]
    async fn test_delete_board_by_owner() {
        let service = in_memory_service();
        let board = board_owned_by(&service, "alice").await;

        service
            .delete_board(
                &RequestContext::for_user("alice"),
                DeleteBoardRequest { board_id: board.id },
            )
            .await
            .unwrap();

        let result = service
            .board(
                &RequestContext::for_user("alice"),
                BoardRequest { board_id: board.id },
            )
            .await;
        assert!(matches!(result, Err(AppError::NotFound { .. })));
    }
}
