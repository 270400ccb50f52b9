//! Artifact Cache - a process-local keyed artifact cache
//!
//! Maps an opaque key to a previously computed payload so a server-rendered
//! page pipeline can skip recomputation within one process lifetime. Entries
//! are never evicted, expired or persisted; the store lives exactly as long
//! as the process.
//!
//! The cache is explicitly constructed and passed by handle (no module-level
//! global): create it at process start, clone the handle into whatever needs
//! it, and let it drop at process stop.
//!
//! # Example
//!
//! ```
//! use artifact_cache::{ArtifactCache, ArtifactKey, CacheConfig};
//! use serde_json::json;
//!
//! # tokio_test::block_on(async {
//! let cache = ArtifactCache::new(CacheConfig::default());
//!
//! let key = ArtifactKey::from_segments(["products", "en"]);
//! assert!(cache.get(&key).await.is_none());
//!
//! cache.set(key.clone(), json!({"items": ["ring", "necklace"]})).await;
//! assert!(cache.get(&key).await.is_some());
//! # });
//! ```

pub mod cache;
pub mod config;
pub mod error;

pub use cache::{ArtifactCache, ArtifactEntry, ArtifactKey, StatsSnapshot};
pub use config::CacheConfig;
pub use error::ConfigError;
