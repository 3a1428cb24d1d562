//! Rate limiting for endpoints using a token bucket.

use governor::{DefaultDirectRateLimiter, Quota, RateLimiter};
use serde_json::json;
use std::num::NonZeroU32;
use std::sync::Arc;

use crate::endpoint::{Endpoint, Middleware};
use crate::error::AppError;

/// Token-bucket limiter shared by every endpoint it wraps.
///
/// One instance placed in the component's generic middlewares limits the
/// aggregate request rate across all operations.
///
/// Requests over the limit fail with [`AppError::TooManyRequests`] without
/// reaching the inner endpoint.
#[derive(Clone)]
pub struct RateLimit {
    limiter: Arc<DefaultDirectRateLimiter>,
}

impl RateLimit {
    pub fn new(per_second: NonZeroU32, burst: NonZeroU32) -> Self {
        let quota = Quota::per_second(per_second).allow_burst(burst);
        Self {
            limiter: Arc::new(RateLimiter::direct(quota)),
        }
    }
}

impl Middleware for RateLimit {
    fn name(&self) -> &str {
        "rate_limit"
    }

    fn wrap(&self, next: Endpoint) -> Endpoint {
        let limiter = self.limiter.clone();
        Endpoint::new(move |ctx, req| {
            let next = next.clone();
            let limiter = limiter.clone();
            // Quota is taken on first poll, not when the future is built.
            async move {
                if limiter.check().is_err() {
                    return Err(AppError::too_many_requests(
                        "Too many requests",
                        json!({ "operation": req.operation().name() }),
                    ));
                }
                next.call(ctx, req).await
            }
        })
    }
}
