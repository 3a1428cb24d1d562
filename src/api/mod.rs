//! HTTP transport for the boards endpoints.
//!
//! Translates HTTP requests into [`crate::endpoint::EndpointRequest`]s,
//! invokes the decorated endpoints and renders their results as JSON.
//!
//! # Modules
//!
//! - [`dto`] - request bodies and response payloads
//! - [`extract`] - caller identity extraction
//! - [`handlers`] - one handler per operation, plus health
//! - [`middleware`] - HTTP-level layers (request tracing)
//! - [`routes`] - route table and server options

pub mod dto;
pub mod extract;
pub mod handlers;
pub mod middleware;
pub mod routes;

pub use routes::{DEFAULT_USER_HEADER, HttpState, ServerOption, health_routes, register_http_handlers};
