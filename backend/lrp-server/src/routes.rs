use crate::{AppState, health, list_requisitions, pages, submit_action};

use axum::{
    Router,
    routing::{get, post},
};
use tower_http::cors::{Any, CorsLayer};

/// Build the application router with all endpoints
pub fn build_router(state: AppState) -> Router {
    Router::new()
        // Health check endpoints
        .route("/", get(health::health))
        .route("/health", get(health::health_check))
        // Operator pages
        .route("/portal", get(pages::portal))
        .route("/dashboard", get(pages::dashboard))
        // JSON API
        .route("/requisitions", get(list_requisitions))
        .route("/action", post(submit_action))
        // Add shared state
        .with_state(state)
        // CORS middleware (portal may be hosted elsewhere)
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
}
