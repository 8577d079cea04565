//! Repository trait for short code mappings.

use crate::domain::entities::Mapping;
use async_trait::async_trait;

/// Errors raised by the durable store.
#[derive(Debug, Clone, thiserror::Error)]
pub enum StoreError {
    /// A unique constraint on the short code rejected the write.
    #[error("short code already exists")]
    Conflict,

    /// No connection could be obtained, so nothing was sent to the store.
    #[error("store unavailable: {0}")]
    Unavailable(String),

    #[error("store error: {0}")]
    Backend(String),
}

impl StoreError {
    /// Whether the operation is known not to have reached the store.
    ///
    /// Only such failures are safe to retry for non-idempotent writes like
    /// click increments.
    pub fn is_retryable(&self) -> bool {
        matches!(self, StoreError::Unavailable(_))
    }
}

impl From<sqlx::Error> for StoreError {
    fn from(e: sqlx::Error) -> Self {
        if let Some(db) = e.as_database_error()
            && db.is_unique_violation()
        {
            return StoreError::Conflict;
        }

        if matches!(e, sqlx::Error::PoolTimedOut | sqlx::Error::PoolClosed) {
            return StoreError::Unavailable(e.to_string());
        }

        StoreError::Backend(e.to_string())
    }
}

pub type StoreResult<T> = Result<T, StoreError>;

/// Durable store of mappings, keyed by short code.
///
/// The store is the only authority on short code uniqueness: `insert` must
/// report a uniqueness violation as [`StoreError::Conflict`] even when an
/// earlier `exists` call returned `false`.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgMappingRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MappingRepository: Send + Sync {
    /// Returns whether a mapping with this short code exists.
    async fn exists(&self, code: &str) -> StoreResult<bool>;

    /// Fetches the mapping for a short code.
    ///
    /// Returns `Ok(None)` when no row matches.
    async fn lookup(&self, code: &str) -> StoreResult<Option<Mapping>>;

    /// Inserts a new mapping with zero clicks and returns the stored row.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Conflict`] if the short code is already taken.
    async fn insert(&self, code: &str, long_url: &str) -> StoreResult<Mapping>;

    /// Adds one to the click count and returns the new count.
    async fn increment_clicks(&self, code: &str) -> StoreResult<i64>;

    /// Round-trips to the store; used by health checks.
    async fn ping(&self) -> StoreResult<()>;
}
