//! The endpoint set: every board operation bound to the application service
//! and wrapped in its middleware chain.

use serde_json::json;
use std::sync::Arc;

use crate::application::services::BoardApplicationService;
use crate::endpoint::chain::{self, MiddlewareChain, MiddlewareChainBuilder};
use crate::endpoint::{Endpoint, EndpointRequest, EndpointResponse, EndpointResult, Operation};
use crate::endpoint::RequestContext;
use crate::error::AppError;

/// One middleware chain per operation.
#[derive(Clone, Default)]
pub struct Middlewares {
    pub create_board: MiddlewareChain,
    pub delete_board: MiddlewareChain,
    pub edit_board: MiddlewareChain,
    pub board: MiddlewareChain,
    pub boards: MiddlewareChain,
    pub create_invite: MiddlewareChain,
    pub respond_to_invite: MiddlewareChain,
    pub delete_invite: MiddlewareChain,
    pub invites: MiddlewareChain,
    pub remove_user: MiddlewareChain,
    pub edit_board_user: MiddlewareChain,
}

impl Middlewares {
    /// Builds the chain of every operation under its endpoint name.
    pub fn build(builder: &MiddlewareChainBuilder<'_>) -> Self {
        Self {
            create_board: builder.build(Operation::CreateBoard.name()),
            delete_board: builder.build(Operation::DeleteBoard.name()),
            edit_board: builder.build(Operation::EditBoard.name()),
            board: builder.build(Operation::GetBoard.name()),
            boards: builder.build(Operation::GetBoards.name()),
            create_invite: builder.build(Operation::CreateInvite.name()),
            respond_to_invite: builder.build(Operation::RespondToInvite.name()),
            delete_invite: builder.build(Operation::DeleteInvite.name()),
            invites: builder.build(Operation::GetInvites.name()),
            remove_user: builder.build(Operation::RemoveUser.name()),
            edit_board_user: builder.build(Operation::EditBoardUser.name()),
        }
    }

    pub fn get(&self, operation: Operation) -> &MiddlewareChain {
        match operation {
            Operation::CreateBoard => &self.create_board,
            Operation::DeleteBoard => &self.delete_board,
            Operation::EditBoard => &self.edit_board,
            Operation::GetBoard => &self.board,
            Operation::GetBoards => &self.boards,
            Operation::CreateInvite => &self.create_invite,
            Operation::RespondToInvite => &self.respond_to_invite,
            Operation::DeleteInvite => &self.delete_invite,
            Operation::GetInvites => &self.invites,
            Operation::RemoveUser => &self.remove_user,
            Operation::EditBoardUser => &self.edit_board_user,
        }
    }
}

/// All eleven decorated board endpoints. Created once, never mutated.
#[derive(Clone, Debug)]
pub struct EndpointSet {
    pub create_board: Endpoint,
    pub delete_board: Endpoint,
    pub edit_board: Endpoint,
    pub board: Endpoint,
    pub boards: Endpoint,
    pub create_invite: Endpoint,
    pub respond_to_invite: Endpoint,
    pub delete_invite: Endpoint,
    pub invites: Endpoint,
    pub remove_user: Endpoint,
    pub edit_board_user: Endpoint,
}

impl EndpointSet {
    pub fn new(service: Arc<BoardApplicationService>, middlewares: &Middlewares) -> Self {
        let make = |operation: Operation| {
            chain::apply(middlewares.get(operation), bind(service.clone(), operation))
        };

        Self {
            create_board: make(Operation::CreateBoard),
            delete_board: make(Operation::DeleteBoard),
            edit_board: make(Operation::EditBoard),
            board: make(Operation::GetBoard),
            boards: make(Operation::GetBoards),
            create_invite: make(Operation::CreateInvite),
            respond_to_invite: make(Operation::RespondToInvite),
            delete_invite: make(Operation::DeleteInvite),
            invites: make(Operation::GetInvites),
            remove_user: make(Operation::RemoveUser),
            edit_board_user: make(Operation::EditBoardUser),
        }
    }

    pub fn get(&self, operation: Operation) -> &Endpoint {
        match operation {
            Operation::CreateBoard => &self.create_board,
            Operation::DeleteBoard => &self.delete_board,
            Operation::EditBoard => &self.edit_board,
            Operation::GetBoard => &self.board,
            Operation::GetBoards => &self.boards,
            Operation::CreateInvite => &self.create_invite,
            Operation::RespondToInvite => &self.respond_to_invite,
            Operation::DeleteInvite => &self.delete_invite,
            Operation::GetInvites => &self.invites,
            Operation::RemoveUser => &self.remove_user,
            Operation::EditBoardUser => &self.edit_board_user,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (Operation, &Endpoint)> + '_ {
        Operation::ALL.into_iter().map(move |op| (op, self.get(op)))
    }
}

/// Turns one application service method into an undecorated endpoint.
fn bind(service: Arc<BoardApplicationService>, operation: Operation) -> Endpoint {
    Endpoint::new(move |ctx, req| {
        let service = service.clone();
        async move { invoke(&service, operation, ctx, req).await }
    })
}

async fn invoke(
    service: &BoardApplicationService,
    operation: Operation,
    ctx: RequestContext,
    req: EndpointRequest,
) -> EndpointResult {
    if req.operation() != operation {
        return Err(AppError::internal(
            "Request does not match endpoint",
            json!({ "endpoint": operation.name(), "request": req.operation().name() }),
        ));
    }

    match req {
        EndpointRequest::CreateBoard(r) => service
            .create_board(&ctx, r)
            .await
            .map(EndpointResponse::Board),
        EndpointRequest::DeleteBoard(r) => service
            .delete_board(&ctx, r)
            .await
            .map(|()| EndpointResponse::Empty),
        EndpointRequest::EditBoard(r) => service
            .edit_board(&ctx, r)
            .await
            .map(EndpointResponse::Board),
        EndpointRequest::GetBoard(r) => service.board(&ctx, r).await.map(EndpointResponse::Board),
        EndpointRequest::GetBoards(r) => service
            .boards(&ctx, r)
            .await
            .map(EndpointResponse::Boards),
        EndpointRequest::CreateInvite(r) => service
            .create_invite(&ctx, r)
            .await
            .map(EndpointResponse::Invite),
        EndpointRequest::RespondToInvite(r) => service
            .respond_to_invite(&ctx, r)
            .await
            .map(|()| EndpointResponse::Empty),
        EndpointRequest::DeleteInvite(r) => service
            .delete_invite(&ctx, r)
            .await
            .map(|()| EndpointResponse::Empty),
        EndpointRequest::GetInvites(r) => service
            .invites(&ctx, r)
            .await
            .map(EndpointResponse::Invites),
        EndpointRequest::RemoveUser(r) => service
            .remove_user(&ctx, r)
            .await
            .map(|()| EndpointResponse::Empty),
        EndpointRequest::EditBoardUser(r) => service
            .edit_board_user(&ctx, r)
            .await
            .map(EndpointResponse::Board),
    }
}
