//! Handler for short URL redirect.

use axum::{
    extract::{Path, State},
    http::{HeaderValue, StatusCode, header},
    response::{IntoResponse, Response},
};

use crate::error::AppError;
use crate::state::AppState;

/// Redirects a short code to its long URL.
///
/// # Endpoint
///
/// `GET /{code}`
///
/// Resolution is delegated to [`crate::application::services::Resolver`]:
/// cache first, store on miss, background backfill, asynchronous click
/// counting.
///
/// # Errors
///
/// - 400 `Invalid data in cache.` if the cached payload carries no usable URL
/// - 400 `Short url doesn't exist!` if the code is unknown
/// - 500 `Internal server error` on store failures
pub async fn redirect_handler(
    Path(code): Path<String>,
    State(state): State<AppState>,
) -> Result<Response, AppError> {
    let long_url = state.resolver.resolve(&code).await?;

    // Cached payloads with control characters are already rejected as corrupt,
    // so only a store row written outside the registrar can fail here.
    let location = HeaderValue::from_str(&long_url).map_err(|_| {
        AppError::TransientAdapterFailure(format!("stored URL for {code} is not a valid header"))
    })?;

    Ok((StatusCode::TEMPORARY_REDIRECT, [(header::LOCATION, location)]).into_response())
}
