//! Configuration Module
//!
//! Handles the cache options structure and its construction paths.

use std::env;

use serde::Deserialize;
use serde_json::Value;

use crate::error::Result;

// == Cache Config ==
/// Cache configuration.
///
/// Every recognized option is enumerated as a field here; there is no
/// opaque options bag inside the cache. All options default to unset, and
/// constructing a cache from any `CacheConfig` value never fails.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct CacheConfig {
    /// Label attached to log events emitted by the cache, for telling
    /// multiple cache instances in one process apart
    pub namespace: Option<String>,
}

impl CacheConfig {
    /// Creates a new CacheConfig by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `ARTIFACT_CACHE_NAMESPACE` - Namespace label for log events (default: unset)
    pub fn from_env() -> Self {
        Self {
            namespace: env::var("ARTIFACT_CACHE_NAMESPACE")
                .ok()
                .filter(|v| !v.is_empty()),
        }
    }

    // == From Options ==
    /// Parses a raw JSON options bag into a CacheConfig.
    ///
    /// Policy for callers handing over free-form options: unknown fields are
    /// ignored, a recognized field with the wrong type is rejected, and
    /// `null` means no options at all.
    pub fn from_options(options: Value) -> Result<Self> {
        if options.is_null() {
            return Ok(Self::default());
        }
        Ok(serde_json::from_value(options)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_config_default() {
        let config = CacheConfig::default();
        assert!(config.namespace.is_none());
    }

    #[test]
    fn test_config_from_env_defaults() {
        // Clear any existing env var to test defaults
        env::remove_var("ARTIFACT_CACHE_NAMESPACE");

        let config = CacheConfig::from_env();
        assert!(config.namespace.is_none());
    }

    #[test]
    fn test_config_from_empty_options() {
        let config = CacheConfig::from_options(json!({})).unwrap();
        assert!(config.namespace.is_none());
    }

    #[test]
    fn test_config_from_null_options() {
        let config = CacheConfig::from_options(Value::Null).unwrap();
        assert!(config.namespace.is_none());
    }

    #[test]
    fn test_config_recognized_option() {
        let config = CacheConfig::from_options(json!({"namespace": "storefront"})).unwrap();
        assert_eq!(config.namespace.as_deref(), Some("storefront"));
    }

    #[test]
    fn test_config_unknown_options_are_ignored() {
        let config = CacheConfig::from_options(json!({
            "namespace": "pages",
            "maxEntries": 500,
            "flushOnDeploy": true
        }))
        .unwrap();
        assert_eq!(config.namespace.as_deref(), Some("pages"));
    }

    #[test]
    fn test_config_wrong_type_is_rejected() {
        let result = CacheConfig::from_options(json!({"namespace": 42}));
        assert!(result.is_err());
    }
}
