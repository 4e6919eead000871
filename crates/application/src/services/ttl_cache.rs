use dashmap::DashMap;
use std::fmt;
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Last-known-good payload for a logical resource.
///
/// The payload is shared behind an `Arc`: readers get the same allocation
/// the cache holds and can never mutate it.
pub struct CacheEntry<T> {
    pub key: String,
    pub payload: Arc<T>,
    pub fetched_at: Instant,
}

impl<T> CacheEntry<T> {
    /// Fresh iff `now - fetched_at < ttl`.
    #[inline]
    pub fn is_fresh(&self, ttl: Duration, now: Instant) -> bool {
        now.saturating_duration_since(self.fetched_at) < ttl
    }

    pub fn age(&self, now: Instant) -> Duration {
        now.saturating_duration_since(self.fetched_at)
    }
}

impl<T> Clone for CacheEntry<T> {
    fn clone(&self) -> Self {
        Self {
            key: self.key.clone(),
            payload: Arc::clone(&self.payload),
            fetched_at: self.fetched_at,
        }
    }
}

impl<T> fmt::Debug for CacheEntry<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CacheEntry")
            .field("key", &self.key)
            .field("fetched_at", &self.fetched_at)
            .finish_non_exhaustive()
    }
}

/// Keyed store of last-known-good payloads.
///
/// Does not judge freshness on read; callers decide with
/// [`TtlCache::is_fresh`]. Concurrent writes to the same key are
/// last-write-wins.
pub struct TtlCache<T> {
    entries: DashMap<String, CacheEntry<T>>,
}

impl<T> TtlCache<T> {
    pub fn new() -> Self {
        Self {
            entries: DashMap::new(),
        }
    }

    /// Returns the entry for `key` whether fresh or stale.
    pub fn get(&self, key: &str) -> Option<CacheEntry<T>> {
        self.entries.get(key).map(|entry| entry.value().clone())
    }

    #[inline]
    pub fn is_fresh(entry: &CacheEntry<T>, ttl: Duration, now: Instant) -> bool {
        entry.is_fresh(ttl, now)
    }

    /// Stores `payload` under `key` with `fetched_at = now`, replacing any
    /// previous entry. Returns the shared handle that was stored.
    pub fn set(&self, key: &str, payload: T, now: Instant) -> Arc<T> {
        self.set_shared(key, Arc::new(payload), now)
    }

    pub fn set_shared(&self, key: &str, payload: Arc<T>, now: Instant) -> Arc<T> {
        self.entries.insert(
            key.to_string(),
            CacheEntry {
                key: key.to_string(),
                payload: Arc::clone(&payload),
                fetched_at: now,
            },
        );
        payload
    }

    /// Removes `key`. Returns whether an entry was present.
    pub fn invalidate(&self, key: &str) -> bool {
        self.entries.remove(key).is_some()
    }

    /// Removes every entry whose key starts with `prefix`; returns how many
    /// were removed.
    pub fn invalidate_by_prefix(&self, prefix: &str) -> usize {
        let matching: Vec<String> = self
            .entries
            .iter()
            .filter(|entry| entry.key().starts_with(prefix))
            .map(|entry| entry.key().clone())
            .collect();

        matching
            .iter()
            .filter(|key| self.entries.remove(key.as_str()).is_some())
            .count()
    }

    pub fn clear(&self) {
        self.entries.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sorted snapshot of the stored keys.
    pub fn keys(&self) -> Vec<String> {
        let mut keys: Vec<String> = self.entries.iter().map(|e| e.key().clone()).collect();
        keys.sort();
        keys
    }
}

impl<T> Default for TtlCache<T> {
    fn default() -> Self {
        Self::new()
    }
}
