#![forbid(unsafe_code)]

//! In-place reordering of a bound list.
//!
//! The pointer-interaction library reports a sort gesture as the dragged
//! row's index at drag-start and its index at drop; [`Sortable`] records
//! the former and splices the bound list when the latter arrives. The
//! standalone [`reorder`] and [`remove_at`] operations carry the actual
//! invariants:
//!
//! 1. Reordering preserves every element and the relative order of all
//!    elements but the moved one.
//! 2. `reorder(reorder(c, i, j), j, i)` restores the original list.
//! 3. Indices must be in bounds; violations panic (contract, not input).

use formdrop_core::REQUIRED;
use formdrop_core::field::FormBind;
use serde_json::Value;

/// Move the element at `from` to position `to` within the bound list.
///
/// After the splice the form is notified of the change, the field is
/// marked touched, and required validity is set (the list cannot be empty
/// here).
///
/// # Panics
///
/// Panics when the field is not bound to a list or either index is out of
/// bounds.
pub fn reorder(field: &mut dyn FormBind, from: usize, to: usize) {
    let Some(Value::Array(items)) = field.value_mut() else {
        panic!("sortable field is not bound to a list");
    };
    assert!(
        from < items.len() && to < items.len(),
        "reorder indices {from}->{to} out of bounds for list of {}",
        items.len()
    );
    let moved = items.remove(from);
    items.insert(to, moved);
    field.notify_changed();
    field.mark_touched();
    field.set_validity(REQUIRED, true);
}

/// Remove the element at `index` from the bound list.
///
/// When the list empties, the field is unset and required validity is
/// cleared.
///
/// # Panics
///
/// Panics when the field is not bound to a list or `index` is out of
/// bounds.
pub fn remove_at(field: &mut dyn FormBind, index: usize) {
    let Some(Value::Array(items)) = field.value_mut() else {
        panic!("sortable field is not bound to a list");
    };
    assert!(
        index < items.len(),
        "remove index {index} out of bounds for list of {}",
        items.len()
    );
    items.remove(index);
    if items.is_empty() {
        field.commit(None);
        field.set_validity(REQUIRED, false);
    } else {
        field.notify_changed();
    }
}

/// Gesture tracker pairing the library's drag-start index with its drop
/// index.
#[derive(Debug, Clone, Copy, Default)]
pub struct Sortable {
    drag_from: Option<usize>,
}

impl Sortable {
    /// Create an idle tracker.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record where a sort gesture picked its row up.
    pub fn drag_start(&mut self, index: usize) {
        self.drag_from = Some(index);
    }

    /// Complete the gesture at the drop index. Returns `false` (and leaves
    /// the list alone) when no drag-start was recorded.
    pub fn drag_end(&mut self, to: usize, field: &mut dyn FormBind) -> bool {
        let Some(from) = self.drag_from.take() else {
            return false;
        };
        reorder(field, from, to);
        true
    }

    /// Whether a gesture is in flight.
    #[must_use]
    pub const fn is_dragging(&self) -> bool {
        self.drag_from.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use formdrop_core::{FieldFlags, FormField};
    use serde_json::json;

    #[test]
    fn reorder_moves_forward() {
        let mut field = FormField::new("layers").with_value(json!(["a", "b", "c", "d"]));
        reorder(&mut field, 0, 2);
        assert_eq!(field.value(), Some(&json!(["b", "c", "a", "d"])));
    }

    #[test]
    fn reorder_moves_backward() {
        let mut field = FormField::new("layers").with_value(json!(["a", "b", "c", "d"]));
        reorder(&mut field, 3, 1);
        assert_eq!(field.value(), Some(&json!(["a", "d", "b", "c"])));
    }

    #[test]
    fn reorder_same_index_is_identity() {
        let mut field = FormField::new("layers").with_value(json!(["a", "b"]));
        reorder(&mut field, 1, 1);
        assert_eq!(field.value(), Some(&json!(["a", "b"])));
    }

    #[test]
    fn reorder_round_trip_restores_order() {
        let original = json!(["a", "b", "c", "d", "e"]);
        let mut field = FormField::new("layers").with_value(original.clone());
        reorder(&mut field, 1, 4);
        reorder(&mut field, 4, 1);
        assert_eq!(field.value(), Some(&original));
    }

    #[test]
    fn reorder_touches_and_satisfies_required() {
        let mut field = FormField::new("layers").with_value(json!(["a", "b"]));
        reorder(&mut field, 0, 1);
        assert!(field.flags().contains(FieldFlags::TOUCHED));
        assert_eq!(field.validity(REQUIRED), Some(true));
        assert_eq!(field.revision(), 1);
    }

    #[test]
    #[should_panic(expected = "out of bounds")]
    fn reorder_rejects_out_of_bounds() {
        let mut field = FormField::new("layers").with_value(json!(["a"]));
        reorder(&mut field, 0, 1);
    }

    #[test]
    #[should_panic(expected = "not bound to a list")]
    fn reorder_rejects_unbound_field() {
        let mut field = FormField::new("layers");
        reorder(&mut field, 0, 0);
    }

    #[test]
    fn remove_at_keeps_remaining_order() {
        let mut field = FormField::new("layers").with_value(json!(["a", "b", "c"]));
        remove_at(&mut field, 1);
        assert_eq!(field.value(), Some(&json!(["a", "c"])));
        assert!(field.is_valid());
    }

    #[test]
    fn remove_at_last_unsets_and_invalidates() {
        let mut field = FormField::new("layers").with_value(json!(["only"]));
        remove_at(&mut field, 0);
        assert_eq!(field.value(), None);
        assert_eq!(field.validity(REQUIRED), Some(false));
    }

    #[test]
    #[should_panic(expected = "out of bounds")]
    fn remove_at_rejects_out_of_bounds() {
        let mut field = FormField::new("layers").with_value(json!(["a"]));
        remove_at(&mut field, 1);
    }

    #[test]
    fn gesture_pairs_start_and_end() {
        let mut field = FormField::new("layers").with_value(json!([1, 2, 3]));
        let mut sortable = Sortable::new();
        sortable.drag_start(2);
        assert!(sortable.is_dragging());
        assert!(sortable.drag_end(0, &mut field));
        assert!(!sortable.is_dragging());
        assert_eq!(field.value(), Some(&json!([3, 1, 2])));
    }

    #[test]
    fn drag_end_without_start_is_noop() {
        let mut field = FormField::new("layers").with_value(json!([1, 2]));
        let mut sortable = Sortable::new();
        assert!(!sortable.drag_end(1, &mut field));
        assert_eq!(field.value(), Some(&json!([1, 2])));
    }
}
