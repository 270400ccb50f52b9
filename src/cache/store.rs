//! Cache Store Module
//!
//! Inner synchronous store: a plain HashMap from artifact key to entry.

use std::collections::HashMap;

use serde_json::Value;

use crate::cache::{ArtifactEntry, ArtifactKey};

// == Artifact Store ==
/// In-memory key-to-artifact mapping.
///
/// At most one entry is associated with a key at any time; an insert for an
/// existing key replaces its value. There is no capacity limit, no payload
/// validation and no eviction: entries live until the store is dropped.
#[derive(Debug, Default)]
pub struct ArtifactStore {
    /// Key-value storage
    entries: HashMap<ArtifactKey, ArtifactEntry>,
}

impl ArtifactStore {
    // == Constructor ==
    /// Creates an empty store.
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    // == Get ==
    /// Looks up an entry by key.
    ///
    /// Returns `None` for a key that was never inserted. A miss is a normal
    /// outcome, not a failure, and the lookup has no side effects.
    pub fn get(&self, key: &ArtifactKey) -> Option<&ArtifactEntry> {
        self.entries.get(key)
    }

    // == Insert ==
    /// Inserts or overwrites the entry for `key`.
    ///
    /// Always succeeds. Returns `true` when an existing entry was replaced
    /// (last write wins).
    pub fn insert(&mut self, key: ArtifactKey, value: Value) -> bool {
        self.entries.insert(key, ArtifactEntry::new(value)).is_some()
    }

    // == Length ==
    /// Returns the current number of entries in the store.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    // == Is Empty ==
    /// Returns true if the store holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_store_new() {
        let store = ArtifactStore::new();
        assert_eq!(store.len(), 0);
        assert!(store.is_empty());
    }

    #[test]
    fn test_store_insert_and_get() {
        let mut store = ArtifactStore::new();

        store.insert("products".into(), json!(["ring", "necklace"]));
        let entry = store.get(&"products".into()).unwrap();

        assert_eq!(entry.value, json!(["ring", "necklace"]));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_store_get_unknown_key() {
        let store = ArtifactStore::new();
        assert!(store.get(&"nonexistent".into()).is_none());
    }

    #[test]
    fn test_store_overwrite() {
        let mut store = ArtifactStore::new();

        let replaced = store.insert("page:home".into(), json!({"v": 1}));
        assert!(!replaced);

        let replaced = store.insert("page:home".into(), json!({"v": 2}));
        assert!(replaced);

        let entry = store.get(&"page:home".into()).unwrap();
        assert_eq!(entry.value, json!({"v": 2}));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_store_insert_idempotent() {
        let mut store = ArtifactStore::new();

        store.insert("k".into(), json!("v"));
        store.insert("k".into(), json!("v"));

        assert_eq!(store.get(&"k".into()).unwrap().value, json!("v"));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_store_null_value_is_present() {
        let mut store = ArtifactStore::new();

        store.insert("empty".into(), Value::Null);

        // Stored null is distinguishable from an absent entry
        let entry = store.get(&"empty".into());
        assert!(entry.is_some());
        assert!(entry.unwrap().value.is_null());
    }

    #[test]
    fn test_store_composite_keys_are_distinct() {
        let mut store = ArtifactStore::new();

        store.insert(
            ArtifactKey::from_segments(["products", "en"]),
            json!({"locale": "en"}),
        );
        store.insert(
            ArtifactKey::from_segments(["products", "fr"]),
            json!({"locale": "fr"}),
        );

        assert_eq!(store.len(), 2);
        let en = store.get(&ArtifactKey::from_segments(["products", "en"]));
        assert_eq!(en.unwrap().value["locale"], "en");
    }
}
