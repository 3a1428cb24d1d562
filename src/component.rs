//! The boards component: datastore, authorization policy, application
//! service and decorated endpoints assembled from one [`ComponentConfig`].
//!
//! Construction runs in a fixed order and fails fast:
//!
//! 1. select the datastore ([`select_data_store`])
//! 2. resolve the authorization policy ([`resolve_authorization`])
//! 3. bind the application service
//! 4. build one middleware chain per operation and assemble the endpoints
//!
//! Only the first step can fail. A built [`Component`] is immutable and can
//! be shared across request tasks.

use axum::Router;
use serde_json::json;
use sqlx::PgPool;
use std::sync::Arc;
use tracing::debug;

use crate::api::{self, ServerOption};
use crate::application::services::BoardApplicationService;
use crate::domain::repositories::{AuthorizationStore, BoardDataStore};
use crate::endpoint::{EndpointSet, Middleware, MiddlewareChainBuilder, Middlewares};
use crate::error::AppError;
use crate::infrastructure::authorization::DefaultAuthorizationStore;
use crate::infrastructure::persistence::{InMemoryBoardDataStore, PgBoardDataStore};
use crate::logging::Logger;

/// Component identifier used to tag endpoint logs.
pub const COMPONENT: &str = "boards";

/// Connection settings for the durable (PostgreSQL) datastore.
#[derive(Debug, Clone, Default)]
pub struct DurableStoreConfig {
    /// Pool the datastore runs on. `None` is a configuration error.
    pub client: Option<PgPool>,
}

/// Everything the component needs to assemble itself.
#[derive(Clone, Default)]
pub struct ComponentConfig {
    pub logger: Option<Logger>,
    /// Takes precedence over `durable_store`.
    pub use_in_memory_data_store: bool,
    pub durable_store: Option<DurableStoreConfig>,
    /// Explicit policy; when absent a [`DefaultAuthorizationStore`] over the
    /// selected datastore is used.
    pub authorization_store: Option<Arc<dyn AuthorizationStore>>,
    /// Generic middlewares, outermost first.
    pub middlewares: Vec<Arc<dyn Middleware>>,
    pub auth_middleware: Option<Arc<dyn Middleware>>,
    /// Error logging is added only when this is set and `logger` is present.
    pub use_logging_middleware: bool,
}

/// Picks exactly one datastore.
///
/// # Errors
///
/// Returns [`AppError::InvalidArgument`] when no backend is selected, or when
/// the durable backend is selected without a client.
pub fn select_data_store(config: &ComponentConfig) -> Result<Arc<dyn BoardDataStore>, AppError> {
    if config.use_in_memory_data_store {
        return Ok(Arc::new(InMemoryBoardDataStore::new()));
    }

    match &config.durable_store {
        Some(DurableStoreConfig { client: Some(pool) }) => {
            Ok(Arc::new(PgBoardDataStore::new(pool.clone())))
        }
        Some(DurableStoreConfig { client: None }) => Err(AppError::invalid_argument(
            "invalid datastore config, client is nil",
            json!({ "field": "durable_store.client" }),
        )),
        None => Err(AppError::invalid_argument(
            "no datastore configured",
            json!({}),
        )),
    }
}

/// Returns the explicit policy unchanged, or a default policy reading
/// memberships from `data_store`.
pub fn resolve_authorization(
    explicit: Option<&Arc<dyn AuthorizationStore>>,
    data_store: &Arc<dyn BoardDataStore>,
) -> Arc<dyn AuthorizationStore> {
    match explicit {
        Some(policy) => policy.clone(),
        None => Arc::new(DefaultAuthorizationStore::new(data_store.clone())),
    }
}

/// The assembled boards component.
pub struct Component {
    application_service: Arc<BoardApplicationService>,
    data_store: Arc<dyn BoardDataStore>,
    endpoints: EndpointSet,
}

impl Component {
    /// Builds the component.
    ///
    /// # Errors
    ///
    /// Fails with [`AppError::InvalidArgument`] if no datastore can be selected;
    /// see [`select_data_store`].
    pub fn new(config: &ComponentConfig) -> Result<Self, AppError> {
        let data_store = select_data_store(config)?;
        let authorization = resolve_authorization(config.authorization_store.as_ref(), &data_store);
        let application_service = Arc::new(BoardApplicationService::new(
            data_store.clone(),
            authorization,
        ));

        let builder = MiddlewareChainBuilder::new(
            COMPONENT,
            &config.middlewares,
            config.auth_middleware.as_ref(),
            config.use_logging_middleware,
            config.logger.as_ref(),
        );
        let endpoints = EndpointSet::new(application_service.clone(), &Middlewares::build(&builder));

        debug!(
            component = COMPONENT,
            data_store = %data_store.kind(),
            explicit_authorization = config.authorization_store.is_some(),
            "component assembled"
        );

        Ok(Self {
            application_service,
            data_store,
            endpoints,
        })
    }

    /// The application service, for direct in-process calls.
    pub fn application_service(&self) -> &Arc<BoardApplicationService> {
        &self.application_service
    }

    /// The selected datastore, for maintenance tasks such as migrations.
    pub fn data_store(&self) -> &Arc<dyn BoardDataStore> {
        &self.data_store
    }

    pub fn endpoints(&self) -> &EndpointSet {
        &self.endpoints
    }

    /// Mounts the board routes on `router` and returns it.
    ///
    /// Meant to be called once per router during startup. Registering the
    /// same component twice on one router panics in axum on the duplicate
    /// routes.
    pub fn register_http_handlers(&self, router: Router, options: &[ServerOption]) -> Router {
        api::register_http_handlers(router, self.endpoints.clone(), options)
    }
}
