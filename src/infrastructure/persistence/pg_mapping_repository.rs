//! PostgreSQL implementation of the mapping repository.

use async_trait::async_trait;
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::Mapping;
use crate::domain::repositories::{MappingRepository, StoreResult};

/// PostgreSQL repository for mapping storage and retrieval.
///
/// Short code uniqueness is backed by the `urls_short_url_key` constraint, so
/// a racing insert surfaces as [`crate::domain::repositories::StoreError::Conflict`].
pub struct PgMappingRepository {
    pool: Arc<PgPool>,
}

impl PgMappingRepository {
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl MappingRepository for PgMappingRepository {
    async fn exists(&self, code: &str) -> StoreResult<bool> {
        let exists = sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS (SELECT 1 FROM urls WHERE short_url = $1)",
        )
        .bind(code)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(exists)
    }

    async fn lookup(&self, code: &str) -> StoreResult<Option<Mapping>> {
        let row = sqlx::query_as::<_, Mapping>(
            r#"
            SELECT short_url, long_url, clicks, created_at
            FROM urls
            WHERE short_url = $1
            LIMIT 1
            "#,
        )
        .bind(code)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row)
    }

    async fn insert(&self, code: &str, long_url: &str) -> StoreResult<Mapping> {
        let row = sqlx::query_as::<_, Mapping>(
            r#"
            INSERT INTO urls (short_url, long_url)
            VALUES ($1, $2)
            RETURNING short_url, long_url, clicks, created_at
            "#,
        )
        .bind(code)
        .bind(long_url)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(row)
    }

    async fn increment_clicks(&self, code: &str) -> StoreResult<i64> {
        let clicks = sqlx::query_scalar::<_, i64>(
            "UPDATE urls SET clicks = clicks + 1 WHERE short_url = $1 RETURNING clicks",
        )
        .bind(code)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(clicks)
    }

    async fn ping(&self) -> StoreResult<()> {
        sqlx::query("SELECT 1").execute(self.pool.as_ref()).await?;
        Ok(())
    }
}
