//! Request and response envelopes carried through endpoints.
//!
//! Endpoints and middlewares are uniform over operations, so every typed
//! request and result is wrapped in one enum variant.

use serde_json::json;

use crate::application::requests::{
    BoardRequest, BoardsRequest, CreateBoardRequest, CreateInviteRequest, DeleteBoardRequest,
    DeleteInviteRequest, EditBoardRequest, EditBoardUserRequest, InvitesRequest,
    RemoveUserRequest, RespondToInviteRequest,
};
use crate::domain::entities::{Board, Invite};
use crate::endpoint::Operation;
use crate::error::AppError;

#[derive(Debug, Clone)]
pub enum EndpointRequest {
    CreateBoard(CreateBoardRequest),
    DeleteBoard(DeleteBoardRequest),
    EditBoard(EditBoardRequest),
    GetBoard(BoardRequest),
    GetBoards(BoardsRequest),
    CreateInvite(CreateInviteRequest),
    RespondToInvite(RespondToInviteRequest),
    DeleteInvite(DeleteInviteRequest),
    GetInvites(InvitesRequest),
    RemoveUser(RemoveUserRequest),
    EditBoardUser(EditBoardUserRequest),
}

impl EndpointRequest {
    /// The operation this request belongs to.
    pub fn operation(&self) -> Operation {
        match self {
            EndpointRequest::CreateBoard(_) => Operation::CreateBoard,
            EndpointRequest::DeleteBoard(_) => Operation::DeleteBoard,
            EndpointRequest::EditBoard(_) => Operation::EditBoard,
            EndpointRequest::GetBoard(_) => Operation::GetBoard,
            EndpointRequest::GetBoards(_) => Operation::GetBoards,
            EndpointRequest::CreateInvite(_) => Operation::CreateInvite,
            EndpointRequest::RespondToInvite(_) => Operation::RespondToInvite,
            EndpointRequest::DeleteInvite(_) => Operation::DeleteInvite,
            EndpointRequest::GetInvites(_) => Operation::GetInvites,
            EndpointRequest::RemoveUser(_) => Operation::RemoveUser,
            EndpointRequest::EditBoardUser(_) => Operation::EditBoardUser,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum EndpointResponse {
    Board(Board),
    Boards(Vec<Board>),
    Invite(Invite),
    Invites(Vec<Invite>),
    Empty,
}

impl EndpointResponse {
    pub fn into_board(self) -> Result<Board, AppError> {
        match self {
            EndpointResponse::Board(board) => Ok(board),
            other => Err(unexpected("board", &other)),
        }
    }

    pub fn into_boards(self) -> Result<Vec<Board>, AppError> {
        match self {
            EndpointResponse::Boards(boards) => Ok(boards),
            other => Err(unexpected("boards", &other)),
        }
    }

    pub fn into_invite(self) -> Result<Invite, AppError> {
        match self {
            EndpointResponse::Invite(invite) => Ok(invite),
            other => Err(unexpected("invite", &other)),
        }
    }

    pub fn into_invites(self) -> Result<Vec<Invite>, AppError> {
        match self {
            EndpointResponse::Invites(invites) => Ok(invites),
            other => Err(unexpected("invites", &other)),
        }
    }

    pub fn into_empty(self) -> Result<(), AppError> {
        match self {
            EndpointResponse::Empty => Ok(()),
            other => Err(unexpected("empty", &other)),
        }
    }

    fn kind(&self) -> &'static str {
        match self {
            EndpointResponse::Board(_) => "board",
            EndpointResponse::Boards(_) => "boards",
            EndpointResponse::Invite(_) => "invite",
            EndpointResponse::Invites(_) => "invites",
            EndpointResponse::Empty => "empty",
        }
    }
}

fn unexpected(expected: &str, got: &EndpointResponse) -> AppError {
    AppError::internal(
        "Unexpected endpoint response",
        json!({ "expected": expected, "got": got.kind() }),
    )
}
