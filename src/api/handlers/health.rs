//! Handlers for the welcome and health check endpoints.

use axum::{Json, extract::State, http::StatusCode};
use serde_json::{Value, json};

use crate::api::dto::health::{CheckStatus, HealthChecks, HealthResponse};
use crate::state::AppState;

/// Welcome payload.
///
/// # Endpoint
///
/// `GET /`
pub async fn root_handler() -> Json<Value> {
    Json(json!({ "message": "Hello World" }))
}

/// Returns service health status.
///
/// # Endpoint
///
/// `GET /health`
///
/// # Response Codes
///
/// - **200 OK**: Database reachable
/// - **503 Service Unavailable**: Database check failed
pub async fn health_handler(
    State(state): State<AppState>,
) -> Result<Json<HealthResponse>, (StatusCode, Json<HealthResponse>)> {
    let db_check = check_database(&state).await;
    let healthy = db_check.status == "ok";

    let response = HealthResponse {
        status: if healthy { "healthy" } else { "degraded" }.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        checks: HealthChecks { database: db_check },
    };

    if healthy {
        Ok(Json(response))
    } else {
        Err((StatusCode::SERVICE_UNAVAILABLE, Json(response)))
    }
}

/// Checks database connectivity with a trivial query.
async fn check_database(state: &AppState) -> CheckStatus {
    match sqlx::query("SELECT 1").execute(state.db.as_ref()).await {
        Ok(_) => CheckStatus {
            status: "ok".to_string(),
            message: Some(format!(
                "Connected, {} pooled connections",
                state.db.size()
            )),
        },
        Err(e) => {
            tracing::warn!(error = %e, "Health check: database unreachable");
            CheckStatus {
                status: "error".to_string(),
                message: Some(format!("Database error: {}", e)),
            }
        }
    }
}
