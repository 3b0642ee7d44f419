//! Read-through TTL cache for GET responses.
//!
//! Every invalidation bumps a generation counter. A response fetched before
//! an invalidation is not stored afterwards, so an in-flight read cannot
//! resurrect data a mutation just dropped.

use async_lock::RwLock;
use std::collections::HashMap;
use std::time::{Duration, Instant};

/// Cached response body with its absolute expiry.
#[derive(Debug, Clone)]
struct CacheEntry {
    body: String,
    expires_at: Instant,
}

#[derive(Debug, Default)]
struct CacheState {
    generation: u64,
    entries: HashMap<String, CacheEntry>,
}

/// Response cache keyed by full request URL.
#[derive(Debug)]
pub struct ResponseCache {
    ttl: Duration,
    state: RwLock<CacheState>,
}

impl ResponseCache {
    pub fn new(ttl: Duration) -> Self {
        Self {
            ttl,
            state: RwLock::new(CacheState::default()),
        }
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Current generation; pass it to [`insert_if_current`](Self::insert_if_current).
    pub async fn generation(&self) -> u64 {
        self.state.read().await.generation
    }

    /// Cached body for `key`, if present and not yet expired.
    pub async fn get(&self, key: &str) -> Option<String> {
        let state = self.state.read().await;
        state
            .entries
            .get(key)
            .filter(|entry| entry.expires_at > Instant::now())
            .map(|entry| entry.body.clone())
    }

    pub async fn insert(&self, key: String, body: String) {
        let mut state = self.state.write().await;
        self.store(&mut state, key, body);
    }

    /// Store `body` only if nothing was invalidated since `generation` was read.
    ///
    /// Returns whether the entry was stored.
    pub async fn insert_if_current(&self, key: String, body: String, generation: u64) -> bool {
        let mut state = self.state.write().await;
        if state.generation != generation {
            return false;
        }
        self.store(&mut state, key, body);
        true
    }

    fn store(&self, state: &mut CacheState, key: String, body: String) {
        let now = Instant::now();
        state.entries.retain(|_, e| e.expires_at > now);
        state.entries.insert(
            key,
            CacheEntry {
                body,
                expires_at: now + self.ttl,
            },
        );
    }

    pub async fn invalidate(&self, key: &str) {
        let mut state = self.state.write().await;
        state.generation += 1;
        state.entries.remove(key);
    }

    /// Drop every entry whose key starts with `prefix`.
    pub async fn invalidate_prefix(&self, prefix: &str) {
        let mut state = self.state.write().await;
        state.generation += 1;
        state.entries.retain(|key, _| !key.starts_with(prefix));
    }

    pub async fn clear(&self) {
        let mut state = self.state.write().await;
        state.generation += 1;
        state.entries.clear();
    }
}
