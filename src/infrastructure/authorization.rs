//! Authorization policies.

use async_trait::async_trait;
use serde_json::json;
use std::sync::Arc;
use tracing::debug;
use uuid::Uuid;

use crate::domain::entities::Action;
use crate::domain::repositories::{AuthorizationStore, BoardDataStore};
use crate::error::AppError;

/// Policy derived from board membership stored in a [`BoardDataStore`].
///
/// A caller may perform an action when they are a member of the board and
/// their role permits it (see [`crate::domain::entities::Role::permits`]).
pub struct DefaultAuthorizationStore {
    data_store: Arc<dyn BoardDataStore>,
}

impl DefaultAuthorizationStore {
    pub fn new(data_store: Arc<dyn BoardDataStore>) -> Self {
        Self { data_store }
    }

    /// The datastore this policy reads memberships from.
    pub fn data_store(&self) -> &Arc<dyn BoardDataStore> {
        &self.data_store
    }
}

#[async_trait]
impl AuthorizationStore for DefaultAuthorizationStore {
    async fn authorize(
        &self,
        user_id: &str,
        board_id: Uuid,
        action: Action,
    ) -> Result<bool, AppError> {
        let board = self.data_store.board(board_id).await?.ok_or_else(|| {
            AppError::not_found("Board not found", json!({ "board_id": board_id }))
        })?;

        let allowed = board
            .role_of(user_id)
            .is_some_and(|role| role.permits(action));

        debug!(%board_id, user_id, ?action, allowed, "authorization decision");
        Ok(allowed)
    }
}

/// Policy that allows every action. Meant for trusted internal callers and tests.
#[derive(Debug, Default, Clone, Copy)]
pub struct PermissiveAuthorizationStore;

#[async_trait]
impl AuthorizationStore for PermissiveAuthorizationStore {
    async fn authorize(&self, _: &str, _: Uuid, _: Action) -> Result<bool, AppError> {
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::{Board, Role};
    use crate::domain::repositories::MockBoardDataStore;
    use crate::infrastructure::persistence::InMemoryBoardDataStore;

    #[tokio::test]
    async fn test_member_role_decides() {
        let store = Arc::new(InMemoryBoardDataStore::new());
        let mut board = Board::new("b".to_string(), None, "alice");
        board.add_user("bob", Role::Viewer);
        store.create_board(&board).await.unwrap();

        let policy = DefaultAuthorizationStore::new(store);

        assert!(
            policy
                .authorize("alice", board.id, Action::DeleteBoard)
                .await
                .unwrap()
        );
        assert!(
            policy
                .authorize("bob", board.id, Action::ViewBoard)
                .await
                .unwrap()
        );
        assert!(
            !policy
                .authorize("bob", board.id, Action::EditBoard)
                .await
                .unwrap()
        );
    }

    #[tokio::test]
    async fn test_non_member_is_denied() {
        let store = Arc::new(InMemoryBoardDataStore::new());
        let board = Board::new("b".to_string(), None, "alice");
        store.create_board(&board).await.unwrap();

        let policy = DefaultAuthorizationStore::new(store);

        assert!(
            !policy
                .authorize("mallory", board.id, Action::ViewBoard)
                .await
                .unwrap()
        );
    }

    #[tokio::test]
    async fn test_unknown_board_is_not_found() {
        let mut mock_store = MockBoardDataStore::new();
        mock_store
            .expect_board()
            .times(1)
            .returning(|_| Ok(None));

        let policy = DefaultAuthorizationStore::new(Arc::new(mock_store));
        let result = policy
            .authorize("alice", Uuid::new_v4(), Action::ViewBoard)
            .await;

        assert!(matches!(result, Err(AppError::NotFound { .. })));
    }

    #[tokio::test]
    async fn test_permissive_allows_everything() {
        let policy = PermissiveAuthorizationStore;
        assert!(
            policy
                .authorize("anyone", Uuid::new_v4(), Action::DeleteBoard)
                .await
                .unwrap()
        );
    }
}
