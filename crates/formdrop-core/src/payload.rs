#![forbid(unsafe_code)]

//! Drag payload codec.
//!
//! Items travel between a source palette and a drop target as a string:
//! the palette serializes the item's data onto the dragged element at
//! drag-start, the target deserializes it on drop. The encoding is JSON, so
//! a decoded item compares structurally equal to the original.

use crate::event::{DropEvent, SourceTag};
use serde_json::Value;
use thiserror::Error;

/// Failure to decode dragged item data.
#[derive(Debug, Error)]
pub enum PayloadError {
    /// The attached data is not valid JSON.
    #[error("drag payload is not valid JSON: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// Serialize an item for attachment to a dragged element.
#[must_use]
pub fn encode(item: &Value) -> String {
    // Value-to-string serialization cannot fail.
    item.to_string()
}

/// Deserialize dragged item data.
pub fn decode(data: &str) -> Result<Value, PayloadError> {
    Ok(serde_json::from_str(data)?)
}

/// A palette's product at drag-start: the source tag plus the serialized
/// item data the drop target will decode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DragPayload {
    tag: SourceTag,
    data: String,
}

impl DragPayload {
    /// Build a payload for an item offered by a palette with `tag`.
    #[must_use]
    pub fn new(tag: SourceTag, item: &Value) -> Self {
        Self {
            tag,
            data: encode(item),
        }
    }

    /// The originating palette's tag.
    #[must_use]
    pub fn tag(&self) -> &SourceTag {
        &self.tag
    }

    /// The serialized item data.
    #[must_use]
    pub fn data(&self) -> &str {
        &self.data
    }

    /// Decode the carried item.
    pub fn item(&self) -> Result<Value, PayloadError> {
        decode(&self.data)
    }

    /// The drop event a pointer-interaction library would deliver when this
    /// payload lands on a target.
    #[must_use]
    pub fn into_event(self) -> DropEvent {
        DropEvent::from_palette(self.tag, self.data)
    }
}
