//! Invite entity: a pending membership offer for a board.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::role::Role;

/// How long an invite stays valid after creation.
pub const INVITE_TTL_DAYS: i64 = 7;

/// A pending membership offer.
///
/// When `user_id` is `None` the invite is a link invite that anyone holding
/// its id may accept until it is deleted or expires.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Invite {
    pub id: Uuid,
    pub board_id: Uuid,
    pub user_id: Option<String>,
    pub role: Role,
    pub created_by: String,
    pub created_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
}

impl Invite {
    pub fn new(board_id: Uuid, user_id: Option<String>, role: Role, created_by: &str) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            board_id,
            user_id,
            role,
            created_by: created_by.to_string(),
            created_at: now,
            expires_at: now + Duration::days(INVITE_TTL_DAYS),
        }
    }

    pub fn is_expired(&self) -> bool {
        Utc::now() >= self.expires_at
    }

    /// Returns true if `user_id` may respond to this invite.
    pub fn is_addressed_to(&self, user_id: &str) -> bool {
        self.user_id.as_deref().is_none_or(|target| target == user_id)
    }
}

/// Answer to an invite.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InviteResponse {
    Accept,
    Decline,
}
