//! Decoding of cached payloads.
//!
//! A cache entry may hold a bare URL string or a JSON record carrying a
//! `long_url` (or `longUrl`) field. Writers in this service always store the
//! record form; the bare form is still accepted on read.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::service::{CacheError, CacheResult};

/// Structured cache record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CachedRecord {
    #[serde(alias = "longUrl")]
    pub long_url: String,
}

/// A decoded cache entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CachedValue {
    RawString(String),
    StructuredRecord(CachedRecord),
}

impl CachedValue {
    /// Decodes a stored payload.
    ///
    /// Returns `Ok(None)` for an empty payload, which counts as a miss. A
    /// payload that is valid JSON but neither a string nor an object with a
    /// non-empty string `long_url` / `longUrl` yields
    /// [`CacheError::CorruptEntry`]. Text that is not JSON at all is taken as
    /// a bare URL. A URL containing control characters can never be sent as a
    /// `Location` header and is corrupt as well.
    pub fn decode(payload: &str) -> CacheResult<Option<Self>> {
        let value = Self::decode_shape(payload)?;

        match value {
            Some(value) if value.long_url().chars().any(char::is_control) => {
                Err(CacheError::CorruptEntry(payload.to_string()))
            }
            value => Ok(value),
        }
    }

    fn decode_shape(payload: &str) -> CacheResult<Option<Self>> {
        if payload.is_empty() {
            return Ok(None);
        }

        let value = match serde_json::from_str::<Value>(payload) {
            Ok(value) => value,
            Err(_) => return Ok(Some(CachedValue::RawString(payload.to_string()))),
        };

        match value {
            Value::String(s) if s.is_empty() => Ok(None),
            Value::String(s) => Ok(Some(CachedValue::RawString(s))),
            Value::Object(mut fields) => match fields
                .remove("long_url")
                .or_else(|| fields.remove("longUrl"))
            {
                Some(Value::String(long_url)) if !long_url.is_empty() => {
                    Ok(Some(CachedValue::StructuredRecord(CachedRecord { long_url })))
                }
                _ => Err(CacheError::CorruptEntry(payload.to_string())),
            },
            _ => Err(CacheError::CorruptEntry(payload.to_string())),
        }
    }

    /// Encodes a URL in the record form used for backfill.
    pub fn encode(long_url: &str) -> CacheResult<String> {
        serde_json::to_string(&CachedRecord {
            long_url: long_url.to_string(),
        })
        .map_err(|e| CacheError::OperationError(e.to_string()))
    }

    pub fn long_url(&self) -> &str {
        match self {
            CachedValue::RawString(url) => url,
            CachedValue::StructuredRecord(record) => &record.long_url,
        }
    }

    pub fn into_long_url(self) -> String {
        match self {
            CachedValue::RawString(url) => url,
            CachedValue::StructuredRecord(record) => record.long_url,
        }
    }
}
