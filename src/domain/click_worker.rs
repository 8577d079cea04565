//! Background worker that turns click events into click-count increments.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::{Semaphore, mpsc};
use tokio_retry::RetryIf;
use tokio_retry::strategy::{ExponentialBackoff, jitter};
use tracing::{debug, info, warn};

use crate::domain::click_event::ClickEvent;
use crate::domain::repositories::{MappingRepository, StoreError};

/// Retries after the first failed increment.
const MAX_RETRIES: usize = 3;

/// Consumes click events until the channel closes.
///
/// At most `concurrency` increments run at once. An increment that could not
/// reach the store is retried with exponential backoff; an event that still
/// fails is logged and discarded.
/// Errors never reach the request that produced the event.
///
/// Once every sender is dropped, the worker finishes the in-flight increments
/// and returns.
pub async fn run_click_worker(
    mut rx: mpsc::Receiver<ClickEvent>,
    repository: Arc<dyn MappingRepository>,
    concurrency: usize,
) {
    let permits = Arc::new(Semaphore::new(concurrency.max(1)));

    while let Some(event) = rx.recv().await {
        let Ok(permit) = permits.clone().acquire_owned().await else {
            break;
        };
        let repository = repository.clone();

        tokio::spawn(async move {
            record_click(repository.as_ref(), &event).await;
            drop(permit);
        });
    }

    // Waiting for every permit means all spawned increments have finished.
    // The semaphore is never closed, so acquiring cannot fail.
    permits.acquire_many(concurrency.max(1) as u32).await.ok();
    info!("Click worker stopped");
}

/// Applies one click. Failures are logged only.
///
/// Only [`StoreError::is_retryable`] failures are retried. Any other error may
/// come after the `UPDATE` committed, and retrying it could count one
/// resolution twice; such a click is dropped instead.
pub async fn record_click(repository: &dyn MappingRepository, event: &ClickEvent) {
    let strategy = ExponentialBackoff::from_millis(10)
        .max_delay(Duration::from_secs(1))
        .map(jitter)
        .take(MAX_RETRIES);

    let outcome = RetryIf::start(
        strategy,
        || repository.increment_clicks(&event.code),
        |e: &StoreError| e.is_retryable(),
    )
    .await;

    match outcome {
        Ok(clicks) => debug!(code = %event.code, clicks, "Click recorded"),
        Err(e) => warn!(code = %event.code, error = %e, "Dropping click"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::repositories::MockMappingRepository;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[tokio::test]
    async fn test_record_click_increments_once() {
        let mut repo = MockMappingRepository::new();
        repo.expect_increment_clicks()
            .withf(|code| code == "abc123")
            .times(1)
            .returning(|_| Ok(1));

        record_click(&repo, &ClickEvent::new("abc123")).await;
    }

    #[tokio::test]
    async fn test_record_click_retries_transient_failure() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = calls.clone();

        let mut repo = MockMappingRepository::new();
        repo.expect_increment_clicks().times(2).returning(move |_| {
            if counter.fetch_add(1, Ordering::SeqCst) == 0 {
                Err(StoreError::Unavailable("pool timed out".into()))
            } else {
                Ok(7)
            }
        });

        record_click(&repo, &ClickEvent::new("abc123")).await;
        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn test_record_click_gives_up_after_retries() {
        let mut repo = MockMappingRepository::new();
        repo.expect_increment_clicks()
            .times(MAX_RETRIES + 1)
            .returning(|_| Err(StoreError::Unavailable("pool closed".into())));

        record_click(&repo, &ClickEvent::new("abc123")).await;
    }

    #[tokio::test]
    async fn test_record_click_does_not_retry_ambiguous_failure() {
        let mut repo = MockMappingRepository::new();
        repo.expect_increment_clicks()
            .times(1)
            .returning(|_| Err(StoreError::Backend("connection reset".into())));

        record_click(&repo, &ClickEvent::new("abc123")).await;
    }

    #[tokio::test]
    async fn test_worker_drains_queue_and_stops() {
        let mut repo = MockMappingRepository::new();
        repo.expect_increment_clicks().times(3).returning(|_| Ok(1));

        let (tx, rx) = mpsc::channel(10);
        for code in ["a", "b", "c"] {
            tx.send(ClickEvent::new(code)).await.unwrap();
        }
        drop(tx);

        run_click_worker(rx, Arc::new(repo), 2).await;
    }
}
