//! DTOs for invites.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::entities::{Invite, InviteResponse, Role};

/// `POST /boards/{board_id}/invites` body. Omit `user_id` for a link invite.
#[derive(Debug, Deserialize)]
pub struct CreateInviteBody {
    pub user_id: Option<String>,
    pub role: Role,
}

/// `POST /boards/{board_id}/invites/{invite_id}` body.
#[derive(Debug, Deserialize)]
pub struct RespondToInviteBody {
    pub response: InviteResponse,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct InviteItem {
    pub id: Uuid,
    pub board_id: Uuid,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
    pub role: Role,
    pub created_by: String,
    pub created_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct InviteListResponse {
    pub items: Vec<InviteItem>,
}

impl From<Invite> for InviteItem {
    fn from(i: Invite) -> Self {
        Self {
            id: i.id,
            board_id: i.board_id,
            user_id: i.user_id,
            role: i.role,
            created_by: i.created_by,
            created_at: i.created_at,
            expires_at: i.expires_at,
        }
    }
}
