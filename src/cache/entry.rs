//! Cache Entry Module
//!
//! Defines the structure for individual cached artifacts.

use chrono::{DateTime, Duration, Utc};
use serde_json::Value;

// == Artifact Entry ==
/// A single cached artifact with value and metadata.
///
/// The payload is caller-defined and opaque to the cache; the insertion
/// timestamp is observational metadata only and is never used to expire
/// the entry.
#[derive(Debug, Clone)]
pub struct ArtifactEntry {
    /// The stored payload
    pub value: Value,
    /// When this entry was inserted
    pub inserted_at: DateTime<Utc>,
}

impl ArtifactEntry {
    // == Constructor ==
    /// Creates a new entry stamped with the current time.
    pub fn new(value: Value) -> Self {
        Self {
            value,
            inserted_at: Utc::now(),
        }
    }

    // == Age ==
    /// Time elapsed since this entry was inserted.
    ///
    /// Useful for debugging and statistics; the cache never evicts based
    /// on age.
    pub fn age(&self) -> Duration {
        Utc::now() - self.inserted_at
    }
}
