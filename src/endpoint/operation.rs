//! The fixed set of board operations exposed as endpoints.

use std::fmt;

/// One of the eleven board operations.
///
/// The string form is the endpoint name used to build middleware chains and
/// to tag log records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    CreateBoard,
    DeleteBoard,
    EditBoard,
    GetBoard,
    GetBoards,
    CreateInvite,
    RespondToInvite,
    DeleteInvite,
    GetInvites,
    RemoveUser,
    EditBoardUser,
}

impl Operation {
    pub const ALL: [Operation; 11] = [
        Operation::CreateBoard,
        Operation::DeleteBoard,
        Operation::EditBoard,
        Operation::GetBoard,
        Operation::GetBoards,
        Operation::CreateInvite,
        Operation::RespondToInvite,
        Operation::DeleteInvite,
        Operation::GetInvites,
        Operation::RemoveUser,
        Operation::EditBoardUser,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Operation::CreateBoard => "createBoard",
            Operation::DeleteBoard => "deleteBoard",
            Operation::EditBoard => "editBoard",
            Operation::GetBoard => "getBoard",
            Operation::GetBoards => "getBoards",
            Operation::CreateInvite => "createInvite",
            Operation::RespondToInvite => "respondToInvite",
            Operation::DeleteInvite => "deleteInvite",
            Operation::GetInvites => "getInvites",
            Operation::RemoveUser => "removeUser",
            Operation::EditBoardUser => "editBoardUser",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
