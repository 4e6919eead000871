//! Cached read-through fetcher.
//!
//! `fetch_with_cache` serves a fresh cache entry without calling the fetcher,
//! optionally serves a stale entry while a background task refreshes it, and
//! otherwise fetches, validates the `{code, data, message}` envelope and
//! commits the payload. A failed fetch never touches the cache.

use dashmap::{DashMap, DashSet};
use menuvault_domain::{validate, FetchError};
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::collections::VecDeque;
use std::future::Future;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::{debug, warn};

use super::clock::Clock;
use super::ttl_cache::TtlCache;

pub const DEFAULT_TTL: Duration = Duration::from_secs(5 * 60);

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FetchOptions {
    /// Overrides the orchestrator's default TTL.
    pub ttl: Option<Duration>,
    /// Skip the cache read; a successful fetch is still written back.
    pub force_refresh: bool,
    /// Serve an expired entry immediately and refresh it in the background.
    pub stale_while_revalidate: bool,
}

impl FetchOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_ttl(mut self, ttl: Duration) -> Self {
        self.ttl = Some(ttl);
        self
    }

    pub fn force_refresh(mut self, force: bool) -> Self {
        self.force_refresh = force;
        self
    }

    pub fn stale_while_revalidate(mut self, enabled: bool) -> Self {
        self.stale_while_revalidate = enabled;
        self
    }
}

/// Where the data in a [`FetchOutcome`] came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchOrigin {
    /// Fresh cache hit, no fetch performed.
    Cache,
    /// Expired entry served while a background refresh runs.
    Stale,
    /// The fetcher was invoked on the caller's path.
    Network,
}

impl FetchOrigin {
    pub fn as_str(&self) -> &'static str {
        match self {
            FetchOrigin::Cache => "cache",
            FetchOrigin::Stale => "stale",
            FetchOrigin::Network => "network",
        }
    }
}

/// Per-key loading/error state, observable through
/// [`FetchOrchestrator::subscribe`]. `loading` stays true until every
/// overlapping foreground fetch of the key has finished.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoadState {
    pub loading: bool,
    pub error: Option<FetchError>,
}

struct KeyState {
    sender: watch::Sender<LoadState>,
    fetching: usize,
}

impl KeyState {
    fn new() -> Self {
        Self {
            sender: watch::channel(LoadState::default()).0,
            fetching: 0,
        }
    }
}

/// Ends one foreground fetch of a key when dropped, so a cancelled caller
/// cannot leave the key marked as loading.
struct LoadingGuard<'a> {
    states: &'a DashMap<String, KeyState>,
    key: &'a str,
    error: Option<FetchError>,
}

impl Drop for LoadingGuard<'_> {
    fn drop(&mut self) {
        if let Some(mut slot) = self.states.get_mut(self.key) {
            slot.fetching = slot.fetching.saturating_sub(1);
            let state = LoadState {
                loading: slot.fetching > 0,
                error: self.error.take(),
            };
            slot.sender.send_replace(state);
        }
    }
}

#[derive(Debug)]
pub struct FetchOutcome<T> {
    /// Fetched or cached payload. On error: the previous payload for the key
    /// if one exists, otherwise `T::default()`.
    pub data: Arc<T>,
    /// False only when `data` is the `T::default()` placeholder because the
    /// fetch failed and nothing was cached for the key.
    pub has_data: bool,
    pub error: Option<FetchError>,
    pub origin: FetchOrigin,
    /// Background refresh started by this call (stale-while-revalidate only).
    /// Dropping it detaches the task.
    pub refresh: Option<RefreshHandle>,
}

impl<T> FetchOutcome<T> {
    pub fn is_ok(&self) -> bool {
        self.error.is_none()
    }
}

/// Handle to a detached stale-while-revalidate refresh.
#[derive(Debug)]
pub struct RefreshHandle {
    key: String,
    handle: JoinHandle<Result<(), FetchError>>,
}

impl RefreshHandle {
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Waits for the refresh to finish. The result is informational only;
    /// failures have already been logged and recorded.
    pub async fn wait(self) -> Result<(), FetchError> {
        match self.handle.await {
            Ok(result) => result,
            Err(join_err) => Err(FetchError::Transport(format!(
                "background refresh did not complete: {join_err}"
            ))),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RefreshFailure {
    pub key: String,
    pub error: FetchError,
}

/// Bounded log of background refresh failures.
#[derive(Debug)]
struct RefreshErrorSink {
    capacity: usize,
    recent: Mutex<VecDeque<RefreshFailure>>,
    total: AtomicU64,
}

impl RefreshErrorSink {
    fn new(capacity: usize) -> Self {
        Self {
            capacity,
            recent: Mutex::new(VecDeque::with_capacity(capacity)),
            total: AtomicU64::new(0),
        }
    }

    fn record(&self, key: &str, error: FetchError) {
        self.total.fetch_add(1, Ordering::Relaxed);
        if self.capacity == 0 {
            return;
        }
        let mut recent = self.recent.lock().unwrap_or_else(|e| e.into_inner());
        if recent.len() == self.capacity {
            recent.pop_front();
        }
        recent.push_back(RefreshFailure {
            key: key.to_string(),
            error,
        });
    }

    fn snapshot(&self) -> Vec<RefreshFailure> {
        let recent = self.recent.lock().unwrap_or_else(|e| e.into_inner());
        recent.iter().cloned().collect()
    }
}

/// Clears the in-flight marker even if the refresh task panics.
struct InFlightGuard {
    key: String,
    in_flight: Arc<DashSet<String>>,
}

impl Drop for InFlightGuard {
    fn drop(&mut self) {
        self.in_flight.remove(&self.key);
    }
}

pub struct FetchOrchestrator<T> {
    cache: Arc<TtlCache<T>>,
    clock: Arc<dyn Clock>,
    default_ttl: Duration,
    states: DashMap<String, KeyState>,
    in_flight: Arc<DashSet<String>>,
    refresh_errors: Arc<RefreshErrorSink>,
}

impl<T> FetchOrchestrator<T>
where
    T: DeserializeOwned + Default + Send + Sync + 'static,
{
    pub fn new(cache: Arc<TtlCache<T>>, clock: Arc<dyn Clock>) -> Self {
        Self {
            cache,
            clock,
            default_ttl: DEFAULT_TTL,
            states: DashMap::new(),
            in_flight: Arc::new(DashSet::new()),
            refresh_errors: Arc::new(RefreshErrorSink::new(32)),
        }
    }

    pub fn with_default_ttl(mut self, ttl: Duration) -> Self {
        self.default_ttl = ttl;
        self
    }

    pub fn with_refresh_error_capacity(mut self, capacity: usize) -> Self {
        self.refresh_errors = Arc::new(RefreshErrorSink::new(capacity));
        self
    }

    pub fn cache(&self) -> &Arc<TtlCache<T>> {
        &self.cache
    }

    pub fn default_ttl(&self) -> Duration {
        self.default_ttl
    }

    /// Watch the loading/error state of `key`.
    pub fn subscribe(&self, key: &str) -> watch::Receiver<LoadState> {
        self.states
            .entry(key.to_string())
            .or_insert_with(KeyState::new)
            .sender
            .subscribe()
    }

    /// Most recent background refresh failures, oldest first.
    pub fn recent_refresh_errors(&self) -> Vec<RefreshFailure> {
        self.refresh_errors.snapshot()
    }

    /// Total background refresh failures since start.
    pub fn failed_refreshes(&self) -> u64 {
        self.refresh_errors.total.load(Ordering::Relaxed)
    }

    pub async fn fetch_with_cache<F, Fut>(
        &self,
        key: &str,
        fetcher: F,
        options: FetchOptions,
    ) -> FetchOutcome<T>
    where
        F: FnOnce() -> Fut + Send + 'static,
        Fut: Future<Output = Result<Value, FetchError>> + Send + 'static,
    {
        let ttl = options.ttl.unwrap_or(self.default_ttl);

        if !options.force_refresh {
            if let Some(entry) = self.cache.get(key) {
                let now = self.clock.now();
                if entry.is_fresh(ttl, now) {
                    let age_ms = u64::try_from(entry.age(now).as_millis()).unwrap_or(u64::MAX);
                    debug!(key, age_ms, "Cache hit");
                    return FetchOutcome {
                        data: entry.payload,
                        has_data: true,
                        error: None,
                        origin: FetchOrigin::Cache,
                        refresh: None,
                    };
                }

                if options.stale_while_revalidate {
                    debug!(key, "Serving stale entry, refreshing in background");
                    let refresh = self.spawn_refresh(key, fetcher);
                    return FetchOutcome {
                        data: entry.payload,
                        has_data: true,
                        error: None,
                        origin: FetchOrigin::Stale,
                        refresh,
                    };
                }
            }
        }

        self.fetch_and_store(key, fetcher).await
    }

    async fn fetch_and_store<F, Fut>(&self, key: &str, fetcher: F) -> FetchOutcome<T>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<Value, FetchError>>,
    {
        let mut guard = self.begin_fetch(key);

        match fetch_validated::<T, _, _>(fetcher).await {
            Ok(payload) => {
                let data = self.cache.set(key, payload, self.clock.now());
                drop(guard);
                debug!(key, "Fetched and cached");
                FetchOutcome {
                    data,
                    has_data: true,
                    error: None,
                    origin: FetchOrigin::Network,
                    refresh: None,
                }
            }
            Err(error) => {
                warn!(key, error = %error, "Fetch failed, cache left untouched");
                guard.error = Some(error.clone());
                drop(guard);
                let previous = self.cache.get(key).map(|entry| entry.payload);
                let has_data = previous.is_some();
                FetchOutcome {
                    data: previous.unwrap_or_else(|| Arc::new(T::default())),
                    has_data,
                    error: Some(error),
                    origin: FetchOrigin::Network,
                    refresh: None,
                }
            }
        }
    }

    fn spawn_refresh<F, Fut>(&self, key: &str, fetcher: F) -> Option<RefreshHandle>
    where
        F: FnOnce() -> Fut + Send + 'static,
        Fut: Future<Output = Result<Value, FetchError>> + Send + 'static,
    {
        if !self.in_flight.insert(key.to_string()) {
            debug!(key, "Background refresh already in flight");
            return None;
        }

        let guard = InFlightGuard {
            key: key.to_string(),
            in_flight: Arc::clone(&self.in_flight),
        };
        let cache = Arc::clone(&self.cache);
        let clock = Arc::clone(&self.clock);
        let sink = Arc::clone(&self.refresh_errors);

        let handle = tokio::spawn(async move {
            match fetch_validated::<T, _, _>(fetcher).await {
                Ok(payload) => {
                    cache.set(&guard.key, payload, clock.now());
                    debug!(key = %guard.key, "Background refresh committed");
                    Ok(())
                }
                Err(error) => {
                    warn!(
                        key = %guard.key,
                        error = %error,
                        "Background refresh failed, keeping stale entry"
                    );
                    sink.record(&guard.key, error.clone());
                    Err(error)
                }
            }
        });

        Some(RefreshHandle {
            key: key.to_string(),
            handle,
        })
    }

    fn begin_fetch<'a>(&'a self, key: &'a str) -> LoadingGuard<'a> {
        let mut slot = self
            .states
            .entry(key.to_string())
            .or_insert_with(KeyState::new);
        slot.fetching += 1;
        slot.sender.send_replace(LoadState {
            loading: true,
            error: None,
        });

        LoadingGuard {
            states: &self.states,
            key,
            error: None,
        }
    }
}

async fn fetch_validated<T, F, Fut>(fetcher: F) -> Result<T, FetchError>
where
    T: DeserializeOwned + Default,
    F: FnOnce() -> Fut,
    Fut: Future<Output = Result<Value, FetchError>>,
{
    let body = fetcher().await?;
    Ok(validate::<T>(&body)?)
}
