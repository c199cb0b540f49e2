//! Property-based invariant tests for the sortable operations.
//!
//! These verify structural invariants that must hold for any valid inputs:
//!
//! 1. reorder preserves the multiset of elements.
//! 2. reorder(reorder(c, i, j), j, i) restores the original list.
//! 3. reorder keeps the relative order of all unmoved elements.
//! 4. remove_at shrinks the list by exactly one and drops the right element.
//! 5. Reordering never breaks required validity.

use formdrop_core::{FormBind, FormField, REQUIRED};
use formdrop_widgets::sortable::{remove_at, reorder};
use proptest::prelude::*;
use serde_json::{Value, json};

fn list_and_two_indices() -> impl Strategy<Value = (Vec<u32>, usize, usize)> {
    proptest::collection::vec(0u32..1000, 1..=30).prop_flat_map(|values| {
        let len = values.len();
        (Just(values), 0..len, 0..len)
    })
}

fn field_with(values: &[u32]) -> FormField {
    FormField::new("list").with_value(json!(values))
}

fn list_of(field: &FormField) -> Vec<Value> {
    field
        .value()
        .and_then(Value::as_array)
        .cloned()
        .unwrap_or_default()
}

proptest! {
    #[test]
    fn reorder_preserves_multiset((values, from, to) in list_and_two_indices()) {
        let mut field = field_with(&values);
        reorder(&mut field, from, to);

        let mut before: Vec<Value> = values.iter().map(|v| json!(v)).collect();
        let mut after = list_of(&field);
        before.sort_by_key(std::string::ToString::to_string);
        after.sort_by_key(std::string::ToString::to_string);
        prop_assert_eq!(before, after);
    }
}

proptest! {
    #[test]
    fn reorder_round_trip_is_identity((values, from, to) in list_and_two_indices()) {
        let mut field = field_with(&values);
        reorder(&mut field, from, to);
        reorder(&mut field, to, from);
        prop_assert_eq!(field.value(), Some(&json!(values)));
    }
}

proptest! {
    #[test]
    fn reorder_keeps_relative_order_of_rest((values, from, to) in list_and_two_indices()) {
        // Tag elements with their position so duplicates stay tellable apart.
        let tagged: Vec<Value> = values
            .iter()
            .enumerate()
            .map(|(i, v)| json!({"pos": i, "v": v}))
            .collect();
        let mut field = FormField::new("list").with_value(Value::Array(tagged.clone()));
        reorder(&mut field, from, to);

        let moved = &tagged[from];
        let rest_before: Vec<&Value> = tagged.iter().filter(|el| *el != moved).collect();
        let after = list_of(&field);
        let rest_after: Vec<&Value> = after.iter().filter(|el| *el != moved).collect();
        prop_assert_eq!(rest_before, rest_after);
    }
}

proptest! {
    #[test]
    fn remove_at_drops_exactly_one((values, index, _) in list_and_two_indices()) {
        let mut field = field_with(&values);
        remove_at(&mut field, index);

        if values.len() == 1 {
            prop_assert_eq!(field.value(), None);
        } else {
            let after = list_of(&field);
            prop_assert_eq!(after.len(), values.len() - 1);
            let mut expected: Vec<u32> = values.clone();
            expected.remove(index);
            prop_assert_eq!(after, expected.iter().map(|v| json!(v)).collect::<Vec<_>>());
        }
    }
}

proptest! {
    #[test]
    fn reorder_satisfies_required((values, from, to) in list_and_two_indices()) {
        let mut field = field_with(&values);
        reorder(&mut field, from, to);
        prop_assert_eq!(field.validity(REQUIRED), Some(true));
    }
}
