#![allow(dead_code)]

use async_trait::async_trait;
use chrono::Utc;
use linkhop::domain::click_event::ClickEvent;
use linkhop::domain::entities::Mapping;
use linkhop::domain::repositories::{MappingRepository, StoreError, StoreResult};
use linkhop::infrastructure::cache::{CacheError, CacheResult, CacheService, CachedValue};
use linkhop::state::AppState;
use linkhop::utils::code_generator::RandomCodeGenerator;
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use tokio::sync::mpsc;

/// In-memory mapping store that counts calls per operation.
#[derive(Default)]
pub struct FakeStore {
    rows: Mutex<HashMap<String, Mapping>>,
    pub lookups: AtomicUsize,
    pub exists_checks: AtomicUsize,
    pub inserts: AtomicUsize,
    pub fail_reads: AtomicBool,
    pub fail_writes: AtomicBool,
}

impl FakeStore {
    pub fn seed(&self, code: &str, long_url: &str) {
        self.rows.lock().unwrap().insert(
            code.to_string(),
            Mapping::new(code.to_string(), long_url.to_string(), 0, Utc::now()),
        );
    }

    pub fn clicks(&self, code: &str) -> i64 {
        self.rows
            .lock()
            .unwrap()
            .get(code)
            .map(|m| m.clicks)
            .unwrap_or_default()
    }

    pub fn lookups(&self) -> usize {
        self.lookups.load(Ordering::SeqCst)
    }

    fn check_reads(&self) -> StoreResult<()> {
        if self.fail_reads.load(Ordering::SeqCst) {
            return Err(StoreError::Backend("connection refused".into()));
        }
        Ok(())
    }
}

#[async_trait]
impl MappingRepository for FakeStore {
    async fn exists(&self, code: &str) -> StoreResult<bool> {
        self.exists_checks.fetch_add(1, Ordering::SeqCst);
        self.check_reads()?;
        Ok(self.rows.lock().unwrap().contains_key(code))
    }

    async fn lookup(&self, code: &str) -> StoreResult<Option<Mapping>> {
        self.lookups.fetch_add(1, Ordering::SeqCst);
        self.check_reads()?;
        Ok(self.rows.lock().unwrap().get(code).cloned())
    }

    async fn insert(&self, code: &str, long_url: &str) -> StoreResult<Mapping> {
        self.inserts.fetch_add(1, Ordering::SeqCst);
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(StoreError::Backend("disk full".into()));
        }

        let mut rows = self.rows.lock().unwrap();
        if rows.contains_key(code) {
            return Err(StoreError::Conflict);
        }

        let mapping = Mapping::new(code.to_string(), long_url.to_string(), 0, Utc::now());
        rows.insert(code.to_string(), mapping.clone());
        Ok(mapping)
    }

    async fn increment_clicks(&self, code: &str) -> StoreResult<i64> {
        let mut rows = self.rows.lock().unwrap();
        let mapping = rows
            .get_mut(code)
            .ok_or_else(|| StoreError::Backend(format!("no mapping for {code}")))?;
        mapping.clicks += 1;
        Ok(mapping.clicks)
    }

    async fn ping(&self) -> StoreResult<()> {
        self.check_reads()
    }
}

/// In-memory cache holding raw payloads, decoded the same way Redis entries are.
#[derive(Default)]
pub struct FakeCache {
    entries: Mutex<HashMap<String, String>>,
    pub sets: AtomicUsize,
    pub unavailable: AtomicBool,
}

impl FakeCache {
    pub fn put_raw(&self, code: &str, payload: &str) {
        self.entries
            .lock()
            .unwrap()
            .insert(code.to_string(), payload.to_string());
    }

    pub fn raw(&self, code: &str) -> Option<String> {
        self.entries.lock().unwrap().get(code).cloned()
    }

    pub fn sets(&self) -> usize {
        self.sets.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl CacheService for FakeCache {
    async fn get(&self, short_code: &str) -> CacheResult<Option<CachedValue>> {
        if self.unavailable.load(Ordering::SeqCst) {
            return Err(CacheError::ConnectionError("connection refused".into()));
        }

        match self.raw(short_code) {
            Some(payload) => CachedValue::decode(&payload),
            None => Ok(None),
        }
    }

    async fn set(&self, short_code: &str, long_url: &str) -> CacheResult<()> {
        self.sets.fetch_add(1, Ordering::SeqCst);
        if self.unavailable.load(Ordering::SeqCst) {
            return Err(CacheError::ConnectionError("connection refused".into()));
        }

        self.put_raw(short_code, &CachedValue::encode(long_url)?);
        Ok(())
    }

    async fn health_check(&self) -> bool {
        !self.unavailable.load(Ordering::SeqCst)
    }
}

pub struct TestContext {
    pub state: AppState,
    pub clicks: mpsc::Receiver<ClickEvent>,
    pub store: Arc<FakeStore>,
    pub cache: Arc<FakeCache>,
}

impl TestContext {
    /// Collects the click events queued so far.
    pub fn drain_clicks(&mut self) -> Vec<ClickEvent> {
        let mut events = Vec::new();
        while let Ok(event) = self.clicks.try_recv() {
            events.push(event);
        }
        events
    }
}

pub fn create_test_state() -> TestContext {
    let store = Arc::new(FakeStore::default());
    let cache = Arc::new(FakeCache::default());
    let (tx, rx) = mpsc::channel(100);

    let state = AppState::new(
        store.clone(),
        cache.clone(),
        Arc::new(RandomCodeGenerator),
        tx,
        10,
    );

    TestContext {
        state,
        clicks: rx,
        store,
        cache,
    }
}

/// Lets spawned backfill tasks run on the current-thread test runtime.
pub async fn settle() {
    for _ in 0..10 {
        tokio::task::yield_now().await;
    }
}
