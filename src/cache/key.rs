//! Cache Key Module
//!
//! Defines the opaque lookup key used to address cached artifacts.

use std::fmt;

use serde::{Deserialize, Serialize};

// == Artifact Key ==
/// Opaque identifier for a cached artifact.
///
/// Keys are plain strings under the hood. Callers that derive keys from
/// several request parameters (route, locale, query string) should build
/// them with [`ArtifactKey::from_segments`] so the same parts always
/// produce the same key.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ArtifactKey(String);

impl ArtifactKey {
    // == Constructor ==
    /// Creates a key from a single string.
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    // == From Segments ==
    /// Builds a composite key by joining segments with `/`.
    ///
    /// # Example
    /// ```
    /// use artifact_cache::ArtifactKey;
    ///
    /// let key = ArtifactKey::from_segments(["products", "en", "page=2"]);
    /// assert_eq!(key.as_str(), "products/en/page=2");
    /// ```
    pub fn from_segments<I, S>(segments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let joined = segments
            .into_iter()
            .map(|s| s.as_ref().to_owned())
            .collect::<Vec<_>>()
            .join("/");
        Self(joined)
    }

    // == As Str ==
    /// Returns the key as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ArtifactKey {
    fn from(key: &str) -> Self {
        Self(key.to_owned())
    }
}

impl From<String> for ArtifactKey {
    fn from(key: String) -> Self {
        Self(key)
    }
}

impl fmt::Display for ArtifactKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
