//! Typed requests accepted by [`crate::application::services::BoardApplicationService`].

use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::domain::entities::{InviteResponse, Role};

/// Caller identity attached to every operation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequestContext {
    user_id: Option<String>,
}

impl RequestContext {
    pub fn anonymous() -> Self {
        Self { user_id: None }
    }

    pub fn for_user(user_id: impl Into<String>) -> Self {
        Self {
            user_id: Some(user_id.into()),
        }
    }

    pub fn user_id(&self) -> Option<&str> {
        self.user_id.as_deref()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateBoardRequest {
    #[validate(length(min = 1, max = 100))]
    pub name: String,
    #[validate(length(max = 500))]
    pub description: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeleteBoardRequest {
    pub board_id: Uuid,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct EditBoardRequest {
    pub board_id: Uuid,
    #[validate(length(min = 1, max = 100))]
    pub name: Option<String>,
    #[validate(length(max = 500))]
    pub description: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BoardRequest {
    pub board_id: Uuid,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BoardsRequest {}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateInviteRequest {
    pub board_id: Uuid,
    /// Target user; `None` creates a link invite.
    pub user_id: Option<String>,
    pub role: Role,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RespondToInviteRequest {
    pub board_id: Uuid,
    pub invite_id: Uuid,
    pub response: InviteResponse,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeleteInviteRequest {
    pub board_id: Uuid,
    pub invite_id: Uuid,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InvitesRequest {
    pub board_id: Uuid,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RemoveUserRequest {
    pub board_id: Uuid,
    pub user_id: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EditBoardUserRequest {
    pub board_id: Uuid,
    pub user_id: String,
    pub role: Role,
}
