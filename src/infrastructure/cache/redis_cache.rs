//! Redis-backed cache implementation.

use super::service::{CacheError, CacheResult, CacheService};
use super::value::CachedValue;
use async_trait::async_trait;
use redis::{AsyncCommands, Client, aio::ConnectionManager};
use tracing::{debug, info};

/// Redis cache for redirect lookups.
///
/// Connections are multiplexed through a `ConnectionManager`, which reconnects
/// on its own. Errors are returned to the caller, which decides whether they
/// matter.
pub struct RedisCache {
    client: ConnectionManager,
    ttl_seconds: u64,
    key_prefix: String,
}

impl RedisCache {
    /// Connects to Redis and validates the connection with a PING.
    ///
    /// # Arguments
    ///
    /// - `redis_url` - Redis connection string (e.g., `"redis://localhost:6379"`)
    /// - `ttl_seconds` - expiry applied to every entry written by [`CacheService::set`]
    ///
    /// # Errors
    ///
    /// Returns [`CacheError::ConnectionError`] if the URL is invalid, the connection cannot
    /// be established, or the PING fails.
    pub async fn connect(redis_url: &str, ttl_seconds: u64) -> CacheResult<Self> {
        info!("Connecting to Redis");

        let client = Client::open(redis_url).map_err(|e| {
            CacheError::ConnectionError(format!("Failed to create Redis client: {}", e))
        })?;

        let manager = ConnectionManager::new(client).await.map_err(|e| {
            CacheError::ConnectionError(format!("Failed to connect to Redis: {}", e))
        })?;

        let mut test_conn = manager.clone();
        test_conn
            .ping::<()>()
            .await
            .map_err(|e| CacheError::ConnectionError(format!("Redis PING failed: {}", e)))?;

        info!("Connected to Redis");

        Ok(Self {
            client: manager,
            ttl_seconds,
            key_prefix: "url:".to_string(),
        })
    }

    fn build_key(&self, short_code: &str) -> String {
        format!("{}{}", self.key_prefix, short_code)
    }
}

#[async_trait]
impl CacheService for RedisCache {
    async fn get(&self, short_code: &str) -> CacheResult<Option<CachedValue>> {
        let key = self.build_key(short_code);
        let mut conn = self.client.clone();

        let payload = conn
            .get::<_, Option<String>>(&key)
            .await
            .map_err(|e| CacheError::OperationError(format!("GET {}: {}", key, e)))?;

        match payload {
            Some(payload) => {
                let value = CachedValue::decode(&payload)?;
                debug!(short_code, hit = value.is_some(), "Cache lookup");
                Ok(value)
            }
            None => {
                debug!(short_code, "Cache MISS");
                Ok(None)
            }
        }
    }

    async fn set(&self, short_code: &str, long_url: &str) -> CacheResult<()> {
        let key = self.build_key(short_code);
        let payload = CachedValue::encode(long_url)?;
        let mut conn = self.client.clone();

        conn.set_ex::<_, _, ()>(&key, payload, self.ttl_seconds)
            .await
            .map_err(|e| CacheError::OperationError(format!("SET {}: {}", key, e)))?;

        debug!(short_code, ttl_seconds = self.ttl_seconds, "Cache SET");
        Ok(())
    }

    async fn health_check(&self) -> bool {
        let mut conn = self.client.clone();
        conn.ping::<()>().await.is_ok()
    }
}
