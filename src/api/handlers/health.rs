//! Handler for the health check endpoint.

use axum::{Json, extract::State, http::StatusCode};
use std::sync::Arc;
use uuid::Uuid;

use crate::api::dto::health::{CheckStatus, HealthChecks, HealthResponse};
use crate::domain::repositories::BoardDataStore;

/// Returns service health.
///
/// # Endpoint
///
/// `GET /health`
///
/// # Response Codes
///
/// - **200 OK**: datastore reachable
/// - **503 Service Unavailable**: datastore lookup failed
///
/// ```json
/// {
///   "status": "healthy",
///   "version": "0.1.0",
///   "checks": { "data_store": { "status": "ok", "message": "postgres" } }
/// }
/// ```
pub async fn health_handler(
    State(data_store): State<Arc<dyn BoardDataStore>>,
) -> Result<Json<HealthResponse>, (StatusCode, Json<HealthResponse>)> {
    let check = check_data_store(data_store.as_ref()).await;
    let healthy = check.status == "ok";

    let response = HealthResponse {
        status: if healthy { "healthy" } else { "degraded" }.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        checks: HealthChecks { data_store: check },
    };

    if healthy {
        Ok(Json(response))
    } else {
        Err((StatusCode::SERVICE_UNAVAILABLE, Json(response)))
    }
}

/// Looks up a board that never exists; any error means the backend is unreachable.
async fn check_data_store(data_store: &dyn BoardDataStore) -> CheckStatus {
    match data_store.board(Uuid::nil()).await {
        Ok(_) => CheckStatus {
            status: "ok".to_string(),
            message: Some(data_store.kind().to_string()),
        },
        Err(e) => CheckStatus {
            status: "error".to_string(),
            message: Some(format!("{} error: {}", data_store.kind(), e)),
        },
    }
}
