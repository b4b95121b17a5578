use crate::AppState;

use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;

/// Body of `GET /`, polled by uptime monitors.
pub const HEALTH_BODY: &str = "OK v1";

/// GET / - Liveness check
pub async fn health() -> Response {
    (StatusCode::OK, HEALTH_BODY).into_response()
}

/// GET /health - Version and store backend
pub async fn health_check(State(state): State<AppState>) -> Response {
    let health = json!({
        "status": "healthy",
        "version": env!("CARGO_PKG_VERSION"),
        "store": state.store.backend_name(),
        "timestamp": chrono::Utc::now().to_rfc3339(),
    });

    (StatusCode::OK, Json(health)).into_response()
}
