//! Caching layer for fast redirect lookups.
//!
//! Provides a [`CacheService`] trait with two implementations:
//! - [`RedisCache`] - Production Redis-backed cache
//! - [`NullCache`] - No-op implementation for disabled caching
//!
//! Stored payloads are decoded into [`CachedValue`] here, at the adapter
//! boundary, so callers never inspect raw cache text.

mod null_cache;
mod redis_cache;
mod service;
mod value;

pub use null_cache::NullCache;
pub use redis_cache::RedisCache;
pub use service::{CacheError, CacheResult, CacheService};
pub use value::{CachedRecord, CachedValue};

#[cfg(test)]
pub use service::MockCacheService;
