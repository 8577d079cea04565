//! DTOs for the mapping creation endpoint.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;
use validator::Validate;

use crate::domain::entities::Mapping;

/// Characters a requested short code may contain. Empty means "generate one".
static SHORT_CODE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9A-Za-z_-]*$").unwrap());

/// Request to create a mapping.
///
/// ```json
/// { "shortUrl": "abc123", "url": "example.com" }
/// ```
#[derive(Debug, Deserialize, Validate)]
pub struct CreateRequest {
    /// Optional requested short code; generated when absent or empty.
    #[serde(default, rename = "shortUrl", alias = "short_url")]
    #[validate(length(max = 64, message = "must be at most 64 characters"))]
    #[validate(regex(
        path = *SHORT_CODE_REGEX,
        message = "may only contain letters, digits, '-' and '_'"
    ))]
    pub short_url: Option<String>,

    /// Long URL; `https://` is prepended when it has no scheme.
    #[validate(length(max = 2048, message = "must be at most 2048 characters"))]
    pub url: String,
}

/// Successful creation response.
#[derive(Debug, Serialize)]
pub struct CreateResponse {
    pub data: Mapping,
}
