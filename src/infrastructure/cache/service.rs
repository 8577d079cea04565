//! Cache service trait and error types.

use async_trait::async_trait;

use super::value::CachedValue;

/// Errors that can occur during cache operations.
#[derive(Debug, Clone, thiserror::Error)]
pub enum CacheError {
    #[error("Cache connection error: {0}")]
    ConnectionError(String),

    #[error("Cache operation error: {0}")]
    OperationError(String),

    /// The entry exists but carries no usable URL.
    #[error("Corrupt cache entry: {0}")]
    CorruptEntry(String),
}

/// Result type for cache operations.
pub type CacheResult<T> = Result<T, CacheError>;

/// Trait for caching short code to URL mappings.
///
/// The cache is a disposable projection of the durable store. A miss is
/// always a valid answer, and callers treat connection and operation errors
/// as misses. Only [`CacheError::CorruptEntry`] has a meaning of its own.
///
/// # Implementations
///
/// - [`crate::infrastructure::cache::RedisCache`] - Redis-backed cache with TTL support
/// - [`crate::infrastructure::cache::NullCache`] - No-op implementation for disabled caching
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CacheService: Send + Sync {
    /// Retrieves and decodes the cached value for a short code.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(value))` on cache hit
    /// - `Ok(None)` on cache miss
    ///
    /// # Errors
    ///
    /// [`CacheError::CorruptEntry`] when the stored payload has neither
    /// accepted shape; connection or operation errors otherwise.
    async fn get(&self, short_code: &str) -> CacheResult<Option<CachedValue>>;

    /// Stores the URL for a short code in record form.
    async fn set(&self, short_code: &str, long_url: &str) -> CacheResult<()>;

    /// Checks if the cache backend is healthy.
    async fn health_check(&self) -> bool;
}
