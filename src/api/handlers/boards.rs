//! Handlers for board endpoints.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use uuid::Uuid;

use crate::api::dto::board::{BoardItem, BoardListResponse, CreateBoardBody, EditBoardBody};
use crate::api::extract::Caller;
use crate::api::routes::HttpState;
use crate::application::requests::{
    BoardRequest, BoardsRequest, CreateBoardRequest, DeleteBoardRequest, EditBoardRequest,
};
use crate::endpoint::EndpointRequest;
use crate::error::AppError;

/// Creates a board owned by the caller.
///
/// # Endpoint
///
/// `POST /boards`
///
/// # Errors
///
/// Returns 400 if the name is empty or too long.
/// Returns 401 without a user header.
pub async fn create_board_handler(
    State(state): State<HttpState>,
    Caller(ctx): Caller,
    Json(body): Json<CreateBoardBody>,
) -> Result<(StatusCode, Json<BoardItem>), AppError> {
    let board = state
        .endpoints
        .create_board
        .call(
            ctx,
            EndpointRequest::CreateBoard(CreateBoardRequest {
                name: body.name,
                description: body.description,
            }),
        )
        .await?
        .into_board()?;

    Ok((StatusCode::CREATED, Json(board.into())))
}

/// Lists the caller's boards.
///
/// # Endpoint
///
/// `GET /boards`
pub async fn get_boards_handler(
    State(state): State<HttpState>,
    Caller(ctx): Caller,
) -> Result<Json<BoardListResponse>, AppError> {
    let boards = state
        .endpoints
        .boards
        .call(ctx, EndpointRequest::GetBoards(BoardsRequest::default()))
        .await?
        .into_boards()?;

    Ok(Json(BoardListResponse {
        items: boards.into_iter().map(Into::into).collect(),
    }))
}

/// # Endpoint
///
/// `GET /boards/{board_id}`
///
/// # Errors
///
/// Returns 403 if the caller is not a member.
/// Returns 404 if the board does not exist.
pub async fn get_board_handler(
    State(state): State<HttpState>,
    Caller(ctx): Caller,
    Path(board_id): Path<Uuid>,
) -> Result<Json<BoardItem>, AppError> {
    let board = state
        .endpoints
        .board
        .call(ctx, EndpointRequest::GetBoard(BoardRequest { board_id }))
        .await?
        .into_board()?;

    Ok(Json(board.into()))
}

/// Renames a board or changes its description.
///
/// # Endpoint
///
/// `PATCH /boards/{board_id}`
pub async fn edit_board_handler(
    State(state): State<HttpState>,
    Caller(ctx): Caller,
    Path(board_id): Path<Uuid>,
    Json(body): Json<EditBoardBody>,
) -> Result<Json<BoardItem>, AppError> {
    let board = state
        .endpoints
        .edit_board
        .call(
            ctx,
            EndpointRequest::EditBoard(EditBoardRequest {
                board_id,
                name: body.name,
                description: body.description,
            }),
        )
        .await?
        .into_board()?;

    Ok(Json(board.into()))
}

/// Deletes a board together with its invites.
///
/// # Endpoint
///
/// `DELETE /boards/{board_id}`
pub async fn delete_board_handler(
    State(state): State<HttpState>,
    Caller(ctx): Caller,
    Path(board_id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    state
        .endpoints
        .delete_board
        .call(ctx, EndpointRequest::DeleteBoard(DeleteBoardRequest { board_id }))
        .await?
        .into_empty()?;

    Ok(StatusCode::NO_CONTENT)
}
