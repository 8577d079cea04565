//! Application error taxonomy and its HTTP representation.
//!
//! Every failure the core can produce is a variant of [`AppError`]. The
//! [`IntoResponse`] implementation decides which outcomes are user-facing
//! (`400`) and which are internal (`500`), and keeps internal details out of
//! response bodies.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use validator::ValidationErrors;

use crate::domain::repositories::StoreError;

/// JSON body returned for every error response.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
}

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// The long URL could not be parsed as an absolute URL with a host.
    #[error("Original url is not a valid url.")]
    InvalidUrl,

    /// The requested short code is taken or reserved.
    #[error("Short url not available!")]
    CodeUnavailable,

    /// No unused short code was found within the configured attempts.
    #[error("Failed to generate a unique short url after {attempts} attempts")]
    GenerationExhausted { attempts: usize },

    /// The durable store rejected the insert.
    #[error("{0}")]
    StoreWriteFailed(String),

    #[error("Short url doesn't exist!")]
    NotFound,

    /// The cache returned a payload that carries no URL.
    #[error("Invalid data in cache.")]
    CorruptCacheEntry,

    /// Unexpected store or cache failure.
    #[error("Adapter failure: {0}")]
    TransientAdapterFailure(String),

    /// Request body failed DTO validation.
    #[error("{0}")]
    Validation(String),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::InvalidUrl
            | AppError::CodeUnavailable
            | AppError::NotFound
            | AppError::CorruptCacheEntry
            | AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::GenerationExhausted { .. }
            | AppError::StoreWriteFailed(_)
            | AppError::TransientAdapterFailure(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Message safe to show to API clients.
    ///
    /// Transient adapter failures collapse into a generic message; the detail is
    /// only logged.
    pub fn public_message(&self) -> String {
        match self {
            AppError::TransientAdapterFailure(_) => "Internal server error".to_string(),
            other => other.to_string(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();

        if status.is_server_error() {
            tracing::error!(error = %self, "Request failed");
        }

        let body = ErrorBody {
            error: self.public_message(),
        };

        (status, Json(body)).into_response()
    }
}

impl From<StoreError> for AppError {
    fn from(e: StoreError) -> Self {
        match e {
            StoreError::Conflict => AppError::CodeUnavailable,
            StoreError::Unavailable(message) | StoreError::Backend(message) => {
                AppError::TransientAdapterFailure(message)
            }
        }
    }
}

impl From<ValidationErrors> for AppError {
    fn from(errors: ValidationErrors) -> Self {
        let message = errors
            .field_errors()
            .into_iter()
            .map(|(field, errs)| {
                let reason = errs
                    .iter()
                    .find_map(|e| e.message.as_ref().map(|m| m.to_string()))
                    .unwrap_or_else(|| "is invalid".to_string());
                format!("{field} {reason}")
            })
            .collect::<Vec<_>>()
            .join("; ");

        AppError::Validation(message)
    }
}
