//! Board roles and the actions they permit.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Membership role of a user on a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Owner,
    Editor,
    Viewer,
}

/// Board-scoped action checked by an authorization policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Action {
    ViewBoard,
    EditBoard,
    DeleteBoard,
    CreateInvite,
    DeleteInvite,
    ViewInvites,
    RemoveUser,
    EditBoardUser,
}

impl Role {
    /// Returns true if a member holding this role may perform `action`.
    ///
    /// | action                         | owner | editor | viewer |
    /// |--------------------------------|-------|--------|--------|
    /// | view board                     | yes   | yes    | yes    |
    /// | edit board                     | yes   | yes    |        |
    /// | everything else                | yes   |        |        |
    pub fn permits(self, action: Action) -> bool {
        match action {
            Action::ViewBoard => true,
            Action::EditBoard => matches!(self, Role::Owner | Role::Editor),
            Action::DeleteBoard
            | Action::CreateInvite
            | Action::DeleteInvite
            | Action::ViewInvites
            | Action::RemoveUser
            | Action::EditBoardUser => self == Role::Owner,
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Role::Owner => "owner",
            Role::Editor => "editor",
            Role::Viewer => "viewer",
        };
        f.write_str(s)
    }
}
