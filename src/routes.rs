//! Top-level router: board endpoints plus the health check.
//!
//! # Route Structure
//!
//! - `GET /health`  - Datastore health check (public)
//! - `/boards/*`    - Board, invite and membership operations, see
//!   [`crate::api::register_http_handlers`]
//!
//! Trailing slashes are trimmed before routing.

use axum::Router;
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

use crate::api::{self, ServerOption};
use crate::component::Component;

/// Builds the application router for `component`.
pub fn app_router(component: &Component, options: &[ServerOption]) -> NormalizePath<Router> {
    let router = component
        .register_http_handlers(Router::new(), options)
        .merge(api::health_routes(component.data_store().clone()));

    NormalizePathLayer::trim_trailing_slash().layer(router)
}
