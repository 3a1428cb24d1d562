//! HTTP server initialization and runtime setup.
//!
//! Handles the database pool, migrations, component assembly and the Axum
//! server lifecycle.

use anyhow::{Context, Result};
use axum::ServiceExt;
use axum::extract::Request;
use sqlx::postgres::PgPoolOptions;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use crate::api::ServerOption;
use crate::component::{Component, ComponentConfig, DurableStoreConfig};
use crate::config::{Config, DataStoreChoice};
use crate::endpoint::Middleware;
use crate::endpoint::middleware::{Metrics, RateLimit, RequireUser};
use crate::infrastructure::persistence::PgBoardDataStore;
use crate::logging::Logger;
use crate::routes::app_router;

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - PostgreSQL connection pool and migrations (postgres datastore only)
/// - The boards component with metrics, rate limiting, `RequireUser` and
///   endpoint error logging
/// - Axum HTTP server with graceful shutdown on Ctrl+C / SIGTERM
///
/// # Errors
///
/// Returns an error if:
/// - Database connection or migration fails
/// - Component construction fails
/// - Server bind fails
pub async fn run(config: Config) -> Result<()> {
    let durable_store = match config.data_store {
        DataStoreChoice::Postgres => Some(connect_durable_store(&config).await?),
        DataStoreChoice::Memory => None,
    };

    let component = Component::new(&component_config(&config, durable_store))?;
    tracing::info!(data_store = %component.data_store().kind(), "Boards component ready");

    let options = [
        ServerOption::UserHeader(config.user_header_name()?),
        ServerOption::Tracing,
    ];
    let app = app_router(&component, &options);

    let addr: SocketAddr = config.listen_addr.parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(listener, ServiceExt::<Request>::into_make_service(app))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

/// Component configuration for the server binary.
pub fn component_config(
    config: &Config,
    durable_store: Option<DurableStoreConfig>,
) -> ComponentConfig {
    let mut middlewares: Vec<Arc<dyn Middleware>> = vec![Arc::new(Metrics)];
    if let Some((per_second, burst)) = config.rate_limit() {
        middlewares.push(Arc::new(RateLimit::new(per_second, burst)));
    }

    ComponentConfig {
        logger: Some(Logger::current()),
        use_in_memory_data_store: config.data_store == DataStoreChoice::Memory,
        durable_store,
        authorization_store: None,
        middlewares,
        auth_middleware: Some(Arc::new(RequireUser)),
        use_logging_middleware: config.endpoint_logging,
    }
}

async fn connect_durable_store(config: &Config) -> Result<DurableStoreConfig> {
    let url = config
        .database_url
        .as_deref()
        .context("DATABASE_URL is required for the postgres datastore")?;

    let pool = PgPoolOptions::new()
        .max_connections(config.db_max_connections)
        .acquire_timeout(Duration::from_secs(config.db_connect_timeout))
        .connect(url)
        .await
        .context("Failed to connect to database")?;
    tracing::info!("Connected to database");

    PgBoardDataStore::new(pool.clone())
        .migrate()
        .await
        .context("Failed to migrate")?;
    tracing::info!("Migrations applied");

    Ok(DurableStoreConfig { client: Some(pool) })
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl+C: {e}");
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => tracing::error!("Failed to listen for SIGTERM: {e}"),
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}
