//! Handlers for board membership endpoints.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use uuid::Uuid;

use crate::api::dto::board::{BoardItem, EditBoardUserBody};
use crate::api::extract::Caller;
use crate::api::routes::HttpState;
use crate::application::requests::{EditBoardUserRequest, RemoveUserRequest};
use crate::endpoint::EndpointRequest;
use crate::error::AppError;

/// Removes a member. Members may remove themselves.
///
/// # Endpoint
///
/// `DELETE /boards/{board_id}/users/{user_id}`
///
/// # Errors
///
/// Returns 404 if the user is not a member.
/// Returns 409 when targeting the owner.
pub async fn remove_user_handler(
    State(state): State<HttpState>,
    Caller(ctx): Caller,
    Path((board_id, user_id)): Path<(Uuid, String)>,
) -> Result<StatusCode, AppError> {
    state
        .endpoints
        .remove_user
        .call(
            ctx,
            EndpointRequest::RemoveUser(RemoveUserRequest { board_id, user_id }),
        )
        .await?
        .into_empty()?;

    Ok(StatusCode::NO_CONTENT)
}

/// Changes a member's role.
///
/// # Endpoint
///
/// `PATCH /boards/{board_id}/users/{user_id}`
pub async fn edit_board_user_handler(
    State(state): State<HttpState>,
    Caller(ctx): Caller,
    Path((board_id, user_id)): Path<(Uuid, String)>,
    Json(body): Json<EditBoardUserBody>,
) -> Result<Json<BoardItem>, AppError> {
    let board = state
        .endpoints
        .edit_board_user
        .call(
            ctx,
            EndpointRequest::EditBoardUser(EditBoardUserRequest {
                board_id,
                user_id,
                role: body.role,
            }),
        )
        .await?
        .into_board()?;

    Ok(Json(board.into()))
}
