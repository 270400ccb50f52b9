//! Shared Cache Module
//!
//! The public async facade over the inner store. Handles are cheap to clone
//! and safe to share across tasks.

use std::sync::Arc;

use serde_json::Value;
use tokio::sync::RwLock;
use tracing::debug;

use crate::cache::{ArtifactKey, ArtifactStore, CacheStats, StatsSnapshot};
use crate::config::CacheConfig;

// == Artifact Cache ==
/// Process-local keyed artifact cache.
///
/// Maps an opaque key to a previously computed payload so an upstream
/// pipeline can skip recomputation within one process lifetime. The cache is
/// explicitly constructed and passed by handle; cloning shares the same
/// underlying store. Nothing is persisted: the store is dropped with the
/// last handle.
///
/// A single `RwLock` guards the mapping, so a `set` that has returned is
/// visible to every subsequent `get` on any clone of the handle.
#[derive(Debug, Clone)]
pub struct ArtifactCache {
    /// Lock-guarded key-to-artifact mapping
    store: Arc<RwLock<ArtifactStore>>,
    /// Shared hit/miss/insert counters
    stats: Arc<CacheStats>,
    /// Options the cache was constructed with
    config: Arc<CacheConfig>,
}

impl ArtifactCache {
    // == Constructor ==
    /// Creates a new cache from the given configuration.
    ///
    /// Never fails: any `CacheConfig` value yields an empty cache where
    /// every key is initially absent.
    pub fn new(config: CacheConfig) -> Self {
        Self {
            store: Arc::new(RwLock::new(ArtifactStore::new())),
            stats: Arc::new(CacheStats::new()),
            config: Arc::new(config),
        }
    }

    // == With Defaults ==
    /// Creates a new cache with default configuration.
    pub fn with_defaults() -> Self {
        Self::new(CacheConfig::default())
    }

    // == Get ==
    /// Looks up the payload stored under `key`.
    ///
    /// Returns `None` when no entry exists. A miss is a normal in-band
    /// outcome, not an error, and the lookup never mutates the store.
    pub async fn get(&self, key: &ArtifactKey) -> Option<Value> {
        let store = self.store.read().await;
        match store.get(key) {
            Some(entry) => {
                self.stats.record_hit();
                debug!(namespace = self.namespace(), %key, "cache hit");
                Some(entry.value.clone())
            }
            None => {
                self.stats.record_miss();
                debug!(namespace = self.namespace(), %key, "cache miss");
                None
            }
        }
    }

    // == Set ==
    /// Inserts or overwrites the payload stored under `key`.
    ///
    /// Always succeeds: there is no capacity limit and the payload shape is
    /// not validated. By the time this returns, the write lock has been
    /// released and the entry is visible to subsequent `get` calls.
    pub async fn set(&self, key: impl Into<ArtifactKey>, value: Value) {
        let key = key.into();
        let replaced = {
            let mut store = self.store.write().await;
            store.insert(key.clone(), value)
        };
        self.stats.record_insert();
        debug!(namespace = self.namespace(), %key, replaced, "artifact stored");
    }

    // == Length ==
    /// Returns the current number of cached entries.
    pub async fn len(&self) -> usize {
        self.store.read().await.len()
    }

    // == Is Empty ==
    /// Returns true if the cache holds no entries.
    pub async fn is_empty(&self) -> bool {
        self.store.read().await.is_empty()
    }

    // == Stats ==
    /// Returns a point-in-time snapshot of the cache counters.
    pub async fn stats(&self) -> StatsSnapshot {
        let store = self.store.read().await;
        self.stats.snapshot(store.len())
    }

    // == Config ==
    /// Returns the configuration this cache was constructed with.
    pub fn config(&self) -> &CacheConfig {
        &self.config
    }

    /// Namespace label attached to log events.
    fn namespace(&self) -> &str {
        self.config.namespace.as_deref().unwrap_or("default")
    }
}

impl Default for ArtifactCache {
    fn default() -> Self {
        Self::with_defaults()
    }
}
