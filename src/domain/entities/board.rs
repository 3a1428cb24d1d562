//! Board entity and its member list.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::role::Role;

/// A member of a board.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoardUser {
    pub user_id: String,
    pub role: Role,
    pub added_at: DateTime<Utc>,
}

/// A board together with its members.
///
/// Stored as a single document: the member list lives inside the board so
/// that role lookups need exactly one read.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Board {
    pub id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
    pub created_by: String,
    pub modified_at: DateTime<Utc>,
    pub modified_by: String,
    pub users: Vec<BoardUser>,
}

impl Board {
    /// Creates a board owned by `owner`.
    pub fn new(name: String, description: Option<String>, owner: &str) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            name,
            description,
            created_at: now,
            created_by: owner.to_string(),
            modified_at: now,
            modified_by: owner.to_string(),
            users: vec![BoardUser {
                user_id: owner.to_string(),
                role: Role::Owner,
                added_at: now,
            }],
        }
    }

    /// Returns the member entry for `user_id`, if any.
    pub fn user(&self, user_id: &str) -> Option<&BoardUser> {
        self.users.iter().find(|u| u.user_id == user_id)
    }

    pub fn role_of(&self, user_id: &str) -> Option<Role> {
        self.user(user_id).map(|u| u.role)
    }

    pub fn is_member(&self, user_id: &str) -> bool {
        self.user(user_id).is_some()
    }

    /// Adds a member. Returns false if the user is already a member.
    pub fn add_user(&mut self, user_id: &str, role: Role) -> bool {
        if self.is_member(user_id) {
            return false;
        }
        self.users.push(BoardUser {
            user_id: user_id.to_string(),
            role,
            added_at: Utc::now(),
        });
        true
    }

    /// Removes a member. Returns false if the user was not a member.
    pub fn remove_user(&mut self, user_id: &str) -> bool {
        let before = self.users.len();
        self.users.retain(|u| u.user_id != user_id);
        self.users.len() != before
    }

    /// Changes a member's role. Returns false if the user is not a member.
    pub fn set_role(&mut self, user_id: &str, role: Role) -> bool {
        match self.users.iter_mut().find(|u| u.user_id == user_id) {
            Some(user) => {
                user.role = role;
                true
            }
            None => false,
        }
    }

    /// Records who modified the board and when.
    pub fn touch(&mut self, user_id: &str) {
        self.modified_at = Utc::now();
        self.modified_by = user_id.to_string();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_board_has_single_owner() {
        let board = Board::new("Reading list".to_string(), None, "alice");

        assert_eq!(board.users.len(), 1);
        assert_eq!(board.role_of("alice"), Some(Role::Owner));
        assert_eq!(board.created_by, "alice");
        assert_eq!(board.created_at, board.modified_at);
    }

    #[test]
    fn test_add_user_rejects_duplicates() {
        let mut board = Board::new("b".to_string(), None, "alice");

        assert!(board.add_user("bob", Role::Viewer));
        assert!(!board.add_user("bob", Role::Editor));
        assert_eq!(board.role_of("bob"), Some(Role::Viewer));
    }

    #[test]
    fn test_remove_and_set_role() {
        let mut board = Board::new("b".to_string(), None, "alice");
        board.add_user("bob", Role::Viewer);

        assert!(board.set_role("bob", Role::Editor));
        assert_eq!(board.role_of("bob"), Some(Role::Editor));

        assert!(board.remove_user("bob"));
        assert!(!board.remove_user("bob"));
        assert!(!board.set_role("bob", Role::Viewer));
        assert!(!board.is_member("bob"));
    }
}
