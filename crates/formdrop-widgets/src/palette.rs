#![forbid(unsafe_code)]

//! Source palette: the offering half of the drag-and-drop transfer.
//!
//! A [`SourcePalette`] serializes an item's data onto the dragged element
//! at drag-start and, once a drop target commits the item, releases it from
//! its own backing collection. All acceptance decisions live in the target;
//! the palette never checks duplicates.

use formdrop_core::field::FormBind;
use formdrop_core::{DragPayload, SourceTag};
use serde_json::Value;

/// A draggable item source tagged with a palette family.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourcePalette {
    tag: SourceTag,
}

impl SourcePalette {
    /// Create a palette with the given tag.
    #[must_use]
    pub fn new(tag: SourceTag) -> Self {
        Self { tag }
    }

    /// The palette's tag, matched against drop targets' accept lists.
    #[must_use]
    pub fn tag(&self) -> &SourceTag {
        &self.tag
    }

    /// Serialize an item for a drag gesture starting on it.
    #[must_use]
    pub fn drag_payload(&self, item: &Value) -> DragPayload {
        DragPayload::new(self.tag.clone(), item)
    }

    /// Release an item after a target committed it: remove the first
    /// structurally-equal element from the palette's backing collection,
    /// unsetting the field when the collection empties.
    ///
    /// A field holding no list (a static palette's placeholder) is left
    /// untouched.
    pub fn on_accepted(&self, item: &Value, field: &mut dyn FormBind) {
        let Some(Value::Array(items)) = field.value_mut() else {
            return;
        };
        let Some(position) = items.iter().position(|el| el == item) else {
            return;
        };
        items.remove(position);
        if items.is_empty() {
            field.commit(None);
        } else {
            field.notify_changed();
        }
    }
}
