//! No-op cache implementation for disabled caching.

use super::service::{CacheResult, CacheService};
use super::value::CachedValue;
use async_trait::async_trait;
use tracing::debug;

/// A cache implementation that does nothing.
///
/// Used when Redis is not configured or cannot be reached at startup. Every
/// lookup is a miss, so every resolution goes to the durable store.
pub struct NullCache;

impl NullCache {
    pub fn new() -> Self {
        debug!("Using NullCache (caching disabled)");
        Self
    }
}

impl Default for NullCache {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CacheService for NullCache {
    async fn get(&self, _short_code: &str) -> CacheResult<Option<CachedValue>> {
        Ok(None)
    }

    async fn set(&self, _short_code: &str, _long_url: &str) -> CacheResult<()> {
        Ok(())
    }

    async fn health_check(&self) -> bool {
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_null_cache_always_misses() {
        let cache = NullCache::new();
        cache.set("abc123", "https://example.com").await.unwrap();
        assert!(cache.get("abc123").await.unwrap().is_none());
        assert!(cache.health_check().await);
    }
}
