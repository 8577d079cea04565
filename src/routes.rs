//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `POST /create`       - Register a mapping
//! - `GET  /{code}`       - Short link redirect
//! - `GET  /stats/{code}` - Mapping with click count
//! - `GET  /health`       - Health check: DB, cache, click queue
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **CORS** - Configured browser origins, `GET`/`POST` only
//! - **Path normalization** - Trailing slash handling

use crate::api;
use crate::api::middleware::tracing;
use crate::state::AppState;
use axum::Router;
use tower::Layer;
use tower_http::cors::CorsLayer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// Constructs the application router with all routes and middleware.
pub fn app_router(state: AppState, cors: CorsLayer) -> NormalizePath<Router> {
    let router = api::routes::routes()
        .with_state(state)
        .layer(cors)
        .layer(tracing::layer());

    NormalizePathLayer::trim_trailing_slash().layer(router)
}
