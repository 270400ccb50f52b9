//! Cache Module
//!
//! Provides the process-local keyed artifact cache: key and entry types,
//! the inner store, shared counters, and the async facade.

mod entry;
mod key;
mod shared;
mod stats;
mod store;


// Re-export public types
pub use entry::ArtifactEntry;
pub use key::ArtifactKey;
pub use shared::ArtifactCache;
pub use stats::{CacheStats, StatsSnapshot};
pub use store::ArtifactStore;
