//! Mapping entity: a short code bound to a long URL.

use chrono::{DateTime, Utc};
use serde::Serialize;

/// A persisted short code to long URL mapping.
///
/// Created exactly once by the registrar and never updated afterwards, except
/// for `clicks`, which only grows through increments issued after successful
/// resolutions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, sqlx::FromRow)]
pub struct Mapping {
    #[serde(rename = "short_url")]
    #[sqlx(rename = "short_url")]
    pub short_code: String,
    pub long_url: String,
    pub clicks: i64,
    pub created_at: DateTime<Utc>,
}

impl Mapping {
    pub fn new(short_code: String, long_url: String, clicks: i64, created_at: DateTime<Utc>) -> Self {
        Self {
            short_code,
            long_url,
            clicks,
            created_at,
        }
    }
}
