#![forbid(unsafe_code)]

//! Gesture events delivered by the external pointer-interaction library.
//!
//! The visual drag/drop/sort mechanics live outside this workspace; the
//! library owning them reports semantic results — which element landed on
//! which target, and at which list indices a sort gesture started and ended.
//! Raw pointer positions are resolved to element identities by that library
//! before anything here runs, so the types in this module carry identity,
//! not coordinates.

use serde::{Deserialize, Serialize};

/// Class-style tag identifying a family of source palettes.
///
/// Drop targets use tags both to recognize palette-originated drags at all
/// and to restrict which palettes they accept from.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SourceTag(String);

impl SourceTag {
    /// Create a tag.
    #[must_use]
    pub fn new(tag: impl Into<String>) -> Self {
        Self(tag.into())
    }

    /// The tag as a string.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Parse a comma-separated tag list (the `accepts` attribute format).
    /// Empty entries are dropped; whitespace around entries is trimmed.
    #[must_use]
    pub fn parse_list(list: &str) -> Vec<Self> {
        list.split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(Self::new)
            .collect()
    }
}

impl From<&str> for SourceTag {
    fn from(tag: &str) -> Self {
        Self::new(tag)
    }
}

impl std::fmt::Display for SourceTag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// A drop reported onto a target collection.
///
/// `source_tag` is `None` when the dragged element did not come from any
/// palette (a foreign drop); `item_data` is `None` when no serialized item
/// was attached to it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DropEvent {
    source_tag: Option<SourceTag>,
    item_data: Option<String>,
}

impl DropEvent {
    /// A drop originating from a palette with the given tag.
    #[must_use]
    pub fn from_palette(tag: SourceTag, item_data: impl Into<String>) -> Self {
        Self {
            source_tag: Some(tag),
            item_data: Some(item_data.into()),
        }
    }

    /// A drop from outside any palette.
    #[must_use]
    pub fn foreign(item_data: Option<String>) -> Self {
        Self {
            source_tag: None,
            item_data,
        }
    }

    /// A palette-tagged drop with no attached item data.
    #[must_use]
    pub fn tagged_empty(tag: SourceTag) -> Self {
        Self {
            source_tag: Some(tag),
            item_data: None,
        }
    }

    /// The originating palette's tag, if any.
    #[must_use]
    pub fn source_tag(&self) -> Option<&SourceTag> {
        self.source_tag.as_ref()
    }

    /// The serialized item data attached to the dragged element, if any.
    #[must_use]
    pub fn item_data(&self) -> Option<&str> {
        self.item_data.as_deref()
    }
}
