//! Handler for mapping creation.

use axum::{Json, extract::State};
use validator::Validate;

use crate::api::dto::create::{CreateRequest, CreateResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Creates a mapping for a long URL.
///
/// # Endpoint
///
/// `POST /create`
///
/// # Request Body
///
/// ```json
/// { "shortUrl": "abc123", "url": "example.com" }
/// ```
///
/// `shortUrl` is optional; a random 6-character code is generated when it is
/// missing or empty. `https://` is prepended to `url` when it has no scheme.
///
/// # Response
///
/// ```json
/// {
///   "data": {
///     "short_url": "abc123",
///     "long_url": "https://example.com",
///     "clicks": 0,
///     "created_at": "2025-06-01T12:00:00Z"
///   }
/// }
/// ```
///
/// # Errors
///
/// - 400 `Original url is not a valid url.`
/// - 400 `Short url not available!`
/// - 400 on DTO validation failures
/// - 500 on store failures
pub async fn create_handler(
    State(state): State<AppState>,
    Json(payload): Json<CreateRequest>,
) -> Result<Json<CreateResponse>, AppError> {
    payload.validate()?;

    let mapping = state
        .registrar
        .register(payload.short_url, &payload.url)
        .await?;

    Ok(Json(CreateResponse { data: mapping }))
}
