#![forbid(unsafe_code)]

//! Dot-separated key paths.
//!
//! A [`KeyPath`] projects a structured item to a sub-value before comparison
//! or storage: `"grid.name"` applied to `{"grid": {"name": "utm32"}}` yields
//! `"utm32"`. Drop targets use this when configured to store a key of the
//! inserted object instead of the whole object.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A parsed dot-separated field path into a structured item.
///
/// Segments are plain object keys; there is no array-index or escape syntax.
/// An empty segment (from `"a..b"` or a leading/trailing dot) is kept as-is
/// and simply fails to match during projection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyPath {
    segments: Vec<String>,
}

impl KeyPath {
    /// Parse a key path from a dot-separated string.
    #[must_use]
    pub fn parse(path: &str) -> Self {
        Self {
            segments: path.split('.').map(str::to_owned).collect(),
        }
    }

    /// The individual path segments.
    #[must_use]
    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    /// Project a value through this path.
    ///
    /// Walks object fields segment by segment. Returns `None` as soon as a
    /// segment is missing or the current value is not an object, so a
    /// projected candidate with no such field compares unequal to everything.
    #[must_use]
    pub fn project<'v>(&self, value: &'v Value) -> Option<&'v Value> {
        let mut current = value;
        for segment in &self.segments {
            current = current.as_object()?.get(segment)?;
        }
        Some(current)
    }
}

impl From<&str> for KeyPath {
    fn from(path: &str) -> Self {
        Self::parse(path)
    }
}

impl std::fmt::Display for KeyPath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.segments.join("."))
    }
}
