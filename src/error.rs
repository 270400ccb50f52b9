//! Error types for the artifact cache
//!
//! Provides unified error handling using thiserror.
//!
//! The cache operations themselves have no failure modes: `get` reports a
//! miss in-band as `None` and `set` always succeeds. The only fallible
//! surface is turning a raw options bag into a [`CacheConfig`].
//!
//! [`CacheConfig`]: crate::config::CacheConfig

use thiserror::Error;

// == Config Error Enum ==
/// Errors raised while parsing cache configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Options bag could not be deserialized (recognized field with the
    /// wrong type, or a malformed bag)
    #[error("Invalid cache options: {0}")]
    InvalidOptions(#[from] serde_json::Error),
}

// == Result Type Alias ==
/// Convenience Result type for configuration parsing.
pub type Result<T> = std::result::Result<T, ConfigError>;
