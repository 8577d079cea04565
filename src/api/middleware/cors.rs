//! CORS middleware for browser front-ends.

use anyhow::{Context, Result};
use axum::http::{HeaderValue, Method, header::CONTENT_TYPE};
use tower_http::cors::{AllowOrigin, CorsLayer};

/// Builds the CORS layer from the configured origins.
///
/// Only `GET` and `POST` with a `Content-Type` header are allowed. A `*` entry
/// allows any origin; otherwise each entry must be a valid header value.
///
/// # Errors
///
/// Returns an error if an origin cannot be used as a header value.
pub fn layer(allowed_origins: &[String]) -> Result<CorsLayer> {
    let cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([CONTENT_TYPE]);

    if allowed_origins.iter().any(|o| o == "*") {
        tracing::warn!("CORS configured with wildcard (*), any origin is allowed");
        return Ok(cors.allow_origin(AllowOrigin::any()));
    }

    let origins = allowed_origins
        .iter()
        .map(|origin| {
            origin
                .parse::<HeaderValue>()
                .with_context(|| format!("Invalid CORS origin '{}'", origin))
        })
        .collect::<Result<Vec<_>>>()?;

    tracing::info!(origins = ?allowed_origins, "CORS enabled");

    Ok(cors.allow_origin(AllowOrigin::list(origins)))
}
