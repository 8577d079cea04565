//! API route configuration.

use crate::api::handlers::{create_handler, health_handler, redirect_handler, stats_handler};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

/// All service routes, without middleware.
///
/// # Endpoints
///
/// - `POST /create`        - Register a mapping
/// - `GET  /health`        - Health check: database, cache, click queue
/// - `GET  /stats/{code}`  - Mapping with its click count
/// - `GET  /{code}`        - Redirect to the long URL
///
/// Static segments win over `/{code}`, which is why `create`, `health` and
/// `stats` are reserved codes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/create", post(create_handler))
        .route("/health", get(health_handler))
        .route("/stats/{code}", get(stats_handler))
        .route("/{code}", get(redirect_handler))
}
