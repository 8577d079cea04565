//! Short code resolution service.

use std::sync::Arc;

use tokio::sync::mpsc::{self, error::TrySendError};
use tracing::{debug, warn};

use crate::domain::click_event::ClickEvent;
use crate::domain::repositories::MappingRepository;
use crate::error::AppError;
use crate::infrastructure::cache::{CacheError, CacheService};

/// Resolves short codes to long URLs, cache first.
///
/// # Request Flow
///
/// 1. Check the cache
/// 2. On a hit, count the click and return; the store is not consulted
/// 3. On a miss, query the store
/// 4. On a store hit, backfill the cache in the background, count the click and return
///
/// The cache is never authoritative. Cache read failures other than a corrupt
/// payload degrade to a miss. Backfill and click counting are best-effort;
/// their failures are logged and never reach the caller.
pub struct Resolver {
    repository: Arc<dyn MappingRepository>,
    cache: Arc<dyn CacheService>,
    click_sender: mpsc::Sender<ClickEvent>,
}

impl Resolver {
    pub fn new(
        repository: Arc<dyn MappingRepository>,
        cache: Arc<dyn CacheService>,
        click_sender: mpsc::Sender<ClickEvent>,
    ) -> Self {
        Self {
            repository,
            cache,
            click_sender,
        }
    }

    /// Returns the long URL for `code`.
    ///
    /// Nothing is dispatched before the URL is known, so a resolution dropped
    /// mid-flight leaves no click and no backfill behind.
    ///
    /// # Errors
    ///
    /// - [`AppError::CorruptCacheEntry`] if the cache holds a payload without a URL
    /// - [`AppError::NotFound`] if neither cache nor store know the code
    /// - [`AppError::TransientAdapterFailure`] if the store lookup fails
    pub async fn resolve(&self, code: &str) -> Result<String, AppError> {
        match self.cache.get(code).await {
            Ok(Some(value)) => {
                debug!(code, "Cache HIT");
                let long_url = value.into_long_url();
                self.record_click(code);
                return Ok(long_url);
            }
            Ok(None) => debug!(code, "Cache MISS"),
            Err(CacheError::CorruptEntry(payload)) => {
                warn!(code, payload = %payload, "Corrupt cache entry");
                return Err(AppError::CorruptCacheEntry);
            }
            Err(e) => warn!(code, error = %e, "Cache read failed, falling back to store"),
        }

        let mapping = self.repository.lookup(code).await?.ok_or(AppError::NotFound)?;

        self.backfill(code, &mapping.long_url);
        self.record_click(code);

        Ok(mapping.long_url)
    }

    /// Writes a store-sourced URL into the cache without waiting for it.
    fn backfill(&self, code: &str, long_url: &str) {
        let cache = self.cache.clone();
        let code = code.to_string();
        let long_url = long_url.to_string();

        tokio::spawn(async move {
            if let Err(e) = cache.set(&code, &long_url).await {
                warn!(code = %code, error = %e, "Cache backfill failed");
            }
        });
    }

    /// Queues a click for the background worker. A full or closed queue drops it.
    fn record_click(&self, code: &str) {
        match self.click_sender.try_send(ClickEvent::new(code)) {
            Ok(()) => {}
            Err(TrySendError::Full(event)) => {
                warn!(code = %event.code, "Click queue full, dropping click");
            }
            Err(TrySendError::Closed(event)) => {
                warn!(code = %event.code, "Click queue closed, dropping click");
            }
        }
    }
}
