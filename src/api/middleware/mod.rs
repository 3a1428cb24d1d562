//! HTTP middleware. Endpoint-level concerns (auth, rate limiting, error
//! logging) live in [`crate::endpoint::middleware`] instead.

pub mod tracing;
