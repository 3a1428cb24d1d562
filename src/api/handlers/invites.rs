//! Handlers for invite endpoints.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use uuid::Uuid;

use crate::api::dto::invite::{
    CreateInviteBody, InviteItem, InviteListResponse, RespondToInviteBody,
};
use crate::api::extract::Caller;
use crate::api::routes::HttpState;
use crate::application::requests::{
    CreateInviteRequest, DeleteInviteRequest, InvitesRequest, RespondToInviteRequest,
};
use crate::endpoint::EndpointRequest;
use crate::error::AppError;

/// Creates an invite for a user, or a link invite when `user_id` is omitted.
///
/// # Endpoint
///
/// `POST /boards/{board_id}/invites`
///
/// # Errors
///
/// Returns 400 for the owner role.
/// Returns 403 unless the caller owns the board.
/// Returns 409 if the user is already a member.
pub async fn create_invite_handler(
    State(state): State<HttpState>,
    Caller(ctx): Caller,
    Path(board_id): Path<Uuid>,
    Json(body): Json<CreateInviteBody>,
) -> Result<(StatusCode, Json<InviteItem>), AppError> {
    let invite = state
        .endpoints
        .create_invite
        .call(
            ctx,
            EndpointRequest::CreateInvite(CreateInviteRequest {
                board_id,
                user_id: body.user_id,
                role: body.role,
            }),
        )
        .await?
        .into_invite()?;

    Ok((StatusCode::CREATED, Json(invite.into())))
}

/// Lists open invites of a board.
///
/// # Endpoint
///
/// `GET /boards/{board_id}/invites`
pub async fn get_invites_handler(
    State(state): State<HttpState>,
    Caller(ctx): Caller,
    Path(board_id): Path<Uuid>,
) -> Result<Json<InviteListResponse>, AppError> {
    let invites = state
        .endpoints
        .invites
        .call(ctx, EndpointRequest::GetInvites(InvitesRequest { board_id }))
        .await?
        .into_invites()?;

    Ok(Json(InviteListResponse {
        items: invites.into_iter().map(Into::into).collect(),
    }))
}

/// Accepts or declines an invite.
///
/// # Endpoint
///
/// `POST /boards/{board_id}/invites/{invite_id}`
///
/// ```json
/// { "response": "accept" }
/// ```
pub async fn respond_to_invite_handler(
    State(state): State<HttpState>,
    Caller(ctx): Caller,
    Path((board_id, invite_id)): Path<(Uuid, Uuid)>,
    Json(body): Json<RespondToInviteBody>,
) -> Result<StatusCode, AppError> {
    state
        .endpoints
        .respond_to_invite
        .call(
            ctx,
            EndpointRequest::RespondToInvite(RespondToInviteRequest {
                board_id,
                invite_id,
                response: body.response,
            }),
        )
        .await?
        .into_empty()?;

    Ok(StatusCode::NO_CONTENT)
}

/// # Endpoint
///
/// `DELETE /boards/{board_id}/invites/{invite_id}`
pub async fn delete_invite_handler(
    State(state): State<HttpState>,
    Caller(ctx): Caller,
    Path((board_id, invite_id)): Path<(Uuid, Uuid)>,
) -> Result<StatusCode, AppError> {
    state
        .endpoints
        .delete_invite
        .call(
            ctx,
            EndpointRequest::DeleteInvite(DeleteInviteRequest {
                board_id,
                invite_id,
            }),
        )
        .await?
        .into_empty()?;

    Ok(StatusCode::NO_CONTENT)
}
