//! DTOs for boards and board members.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::entities::{Board, BoardUser, Role};

/// `POST /boards` body.
#[derive(Debug, Deserialize)]
pub struct CreateBoardBody {
    pub name: String,
    pub description: Option<String>,
}

/// `PATCH /boards/{board_id}` body. Absent fields are left unchanged.
#[derive(Debug, Default, Deserialize)]
pub struct EditBoardBody {
    pub name: Option<String>,
    pub description: Option<String>,
}

/// `PATCH /boards/{board_id}/users/{user_id}` body.
#[derive(Debug, Deserialize)]
pub struct EditBoardUserBody {
    pub role: Role,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct BoardUserItem {
    pub user_id: String,
    pub role: Role,
    pub added_at: DateTime<Utc>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct BoardItem {
    pub id: Uuid,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
    pub created_by: String,
    pub modified_at: DateTime<Utc>,
    pub modified_by: String,
    pub users: Vec<BoardUserItem>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct BoardListResponse {
    pub items: Vec<BoardItem>,
}

impl From<BoardUser> for BoardUserItem {
    fn from(u: BoardUser) -> Self {
        Self {
            user_id: u.user_id,
            role: u.role,
            added_at: u.added_at,
        }
    }
}

impl From<Board> for BoardItem {
    fn from(b: Board) -> Self {
        Self {
            id: b.id,
            name: b.name,
            description: b.description,
            created_at: b.created_at,
            created_by: b.created_by,
            modified_at: b.modified_at,
            modified_by: b.modified_by,
            users: b.users.into_iter().map(Into::into).collect(),
        }
    }
}
