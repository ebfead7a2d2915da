//! Handler for health check endpoint.

use axum::{Json, extract::State, http::StatusCode};

use crate::api::dto::health::{CheckStatus, HealthChecks, HealthResponse};
use crate::state::AppState;

/// Returns service health status with component checks.
///
/// # Endpoint
///
/// `GET /health`
///
/// # Response Codes
///
/// - **200 OK**: All components healthy
/// - **503 Service Unavailable**: The database check failed
///
/// # Response
///
/// ```json
/// {
///   "status": "healthy",
///   "version": "0.1.0",
///   "checks": {
///     "database": { "status": "ok", "message": "Connected, 42 visited links stored" }
///   }
/// }
/// ```
pub async fn health_handler(
    State(state): State<AppState>,
) -> Result<Json<HealthResponse>, (StatusCode, Json<HealthResponse>)> {
    let response = HealthResponse::from_checks(HealthChecks {
        database: check_database(&state).await,
    });

    if response.is_healthy() {
        Ok(Json(response))
    } else {
        Err((StatusCode::SERVICE_UNAVAILABLE, Json(response)))
    }
}

/// Checks database connectivity by counting stored links.
async fn check_database(state: &AppState) -> CheckStatus {
    match state.visit_service.total_links().await {
        Ok(total) => CheckStatus::ok(format!("Connected, {} visited links stored", total)),
        Err(e) => CheckStatus::error(format!("Database error: {}", e)),
    }
}
