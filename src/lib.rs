//! # linkboards
//!
//! Shared link boards with invites and per-board roles, served over HTTP
//! with Axum and stored in memory or PostgreSQL.
//!
//! ## Architecture
//!
//! - **Domain Layer** ([`domain`]) - Boards, invites, roles, and the datastore / policy traits
//! - **Application Layer** ([`application`]) - The board service and its request types
//! - **Infrastructure Layer** ([`infrastructure`]) - Datastores and authorization policies
//! - **Endpoint Layer** ([`endpoint`]) - Operations as decorated endpoints and their middleware chains
//! - **Component** ([`component`]) - Assembles all of the above from one configuration
//! - **API Layer** ([`api`]) - HTTP handlers, DTOs and route table
//!
//! ## Quick Start
//!
//! ```bash
//! cargo run -- --in-memory
//!
//! curl -X POST localhost:3000/boards -H 'x-user-id: alice' \
//!      -H 'content-type: application/json' -d '{"name":"Reading list"}'
//! ```
//!
//! ## Embedding
//!
//! ```rust,ignore
//! use linkboards::prelude::*;
//!
//! let component = Component::new(&ComponentConfig {
//!     use_in_memory_data_store: true,
//!     ..Default::default()
//! })?;
//! let router = component.register_http_handlers(axum::Router::new(), &[]);
//! ```
//!
//! ## Configuration
//!
//! The server binary reads its settings from environment variables via
//! [`config::Config`].

pub mod api;
pub mod application;
pub mod component;
pub mod domain;
pub mod endpoint;
pub mod error;
pub mod infrastructure;
pub mod logging;

pub mod config;
pub mod server;

pub mod routes;

pub use error::AppError;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::api::ServerOption;
    pub use crate::application::requests::RequestContext;
    pub use crate::application::services::BoardApplicationService;
    pub use crate::component::{Component, ComponentConfig, DurableStoreConfig};
    pub use crate::domain::entities::{Board, Invite, InviteResponse, Role};
    pub use crate::endpoint::{Endpoint, EndpointRequest, EndpointResponse, Middleware};
    pub use crate::error::AppError;
    pub use crate::logging::Logger;
}
