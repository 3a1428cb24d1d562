//! Authentication guard for endpoints.

use serde_json::json;

use crate::endpoint::{Endpoint, Middleware};
use crate::error::AppError;

/// Rejects requests whose context carries no user identity.
///
/// Intended as the component's auth middleware: identity is established by
/// the transport (see [`crate::api::ServerOption::UserHeader`]) and enforced here,
/// before any board permission is checked by the application service.
#[derive(Debug, Default, Clone, Copy)]
pub struct RequireUser;

impl Middleware for RequireUser {
    fn name(&self) -> &str {
        "require_user"
    }

    fn wrap(&self, next: Endpoint) -> Endpoint {
        Endpoint::new(move |ctx, req| {
            let next = next.clone();
            async move {
                if ctx.user_id().is_none() {
                    return Err(AppError::unauthorized(
                        "Unauthorized",
                        json!({ "reason": "missing user identity" }),
                    ));
                }
                next.call(ctx, req).await
            }
        })
    }
}
