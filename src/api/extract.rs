//! Caller identity extraction.

use axum::{extract::FromRequestParts, http::request::Parts};
use serde_json::json;

use crate::api::routes::HttpState;
use crate::application::requests::RequestContext;
use crate::error::AppError;

/// The [`RequestContext`] of the caller, read from the configured user header.
///
/// A missing or blank header yields an anonymous context; rejecting
/// anonymous callers is left to the endpoint's auth middleware.
#[derive(Debug, Clone)]
pub struct Caller(pub RequestContext);

impl FromRequestParts<HttpState> for Caller {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &HttpState,
    ) -> Result<Self, Self::Rejection> {
        let Some(value) = parts.headers.get(&state.user_header) else {
            return Ok(Caller(RequestContext::anonymous()));
        };

        let user_id = value.to_str().map_err(|_| {
            AppError::bad_request(
                "Invalid user header",
                json!({ "header": state.user_header.as_str() }),
            )
        })?;

        let user_id = user_id.trim();
        if user_id.is_empty() {
            return Ok(Caller(RequestContext::anonymous()));
        }
        Ok(Caller(RequestContext::for_user(user_id)))
    }
}
