//! Handler for per-mapping click counts.

use axum::{
    Json,
    extract::{Path, State},
};

use crate::api::dto::create::CreateResponse;
use crate::error::AppError;
use crate::state::AppState;

/// Returns a mapping with its current click count.
///
/// # Endpoint
///
/// `GET /stats/{code}`
///
/// Reads the durable store directly; the cache holds no click counts. The
/// count lags redirects by however long the click queue takes to drain.
///
/// # Errors
///
/// Returns 400 `Short url doesn't exist!` if the code is unknown.
pub async fn stats_handler(
    Path(code): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<CreateResponse>, AppError> {
    let mapping = state.registrar.get_mapping(&code).await?;
    Ok(Json(CreateResponse { data: mapping }))
}
