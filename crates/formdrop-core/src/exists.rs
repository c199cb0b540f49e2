#![forbid(unsafe_code)]

//! Duplicate detection for structured items.
//!
//! [`exists`] decides whether a candidate item is already present in a bound
//! collection, optionally projecting the candidate through a [`KeyPath`]
//! first. Drop targets run it against the current bound value to suppress
//! duplicate insertions.
//!
//! # Invariants
//!
//! 1. Pure predicate: no input is mutated.
//! 2. Only the candidate is projected; collection elements are compared as
//!    stored.
//! 3. An array candidate is checked element-wise; each element's membership
//!    is independent of its siblings.

use crate::keypath::KeyPath;
use serde_json::Value;

/// Whether `candidate` is already present in `collection`.
///
/// With a `key_path`, the candidate is projected before comparison; a
/// candidate the path does not reach is never considered present. When
/// `collection` is an array or object, membership is structural equality
/// against any element; a scalar collection is compared directly.
///
/// An array candidate reports `true` if *any* of its elements is present.
#[must_use]
pub fn exists(candidate: &Value, collection: &Value, key_path: Option<&KeyPath>) -> bool {
    if let Value::Array(elements) = candidate {
        return elements.iter().any(|el| exists(el, collection, key_path));
    }
    exists_scalar(candidate, collection, key_path)
}

/// Membership check for a single (non-array) candidate.
///
/// Used by drop targets that need the per-element answer while batching an
/// array drop, where [`exists`]'s any-element union is too coarse.
#[must_use]
pub fn exists_scalar(candidate: &Value, collection: &Value, key_path: Option<&KeyPath>) -> bool {
    let projected = match key_path {
        Some(path) => match path.project(candidate) {
            Some(value) => value,
            None => return false,
        },
        None => candidate,
    };

    match collection {
        Value::Array(elements) => elements.iter().any(|el| el == projected),
        Value::Object(fields) => fields.values().any(|el| el == projected),
        other => other == projected,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn present_in_array_collection() {
        let collection = json!([{"name": "osm"}, {"name": "dop"}]);
        assert!(exists(&json!({"name": "osm"}), &collection, None));
        assert!(!exists(&json!({"name": "aerial"}), &collection, None));
    }

    #[test]
    fn structural_equality_is_field_order_insensitive() {
        let collection = json!([{"a": 1, "b": 2}]);
        assert!(exists(&json!({"b": 2, "a": 1}), &collection, None));
    }

    #[test]
    fn scalar_collection_compares_directly() {
        let collection = json!("osm_cache");
        assert!(exists(&json!("osm_cache"), &collection, None));
        assert!(!exists(&json!("other"), &collection, None));
    }

    #[test]
    fn object_collection_checks_values() {
        let collection = json!({"first": "a", "second": "b"});
        assert!(exists(&json!("b"), &collection, None));
        assert!(!exists(&json!("first"), &collection, None));
    }

    #[test]
    fn key_path_projects_candidate_only() {
        let path = KeyPath::parse("name");
        let collection = json!(["osm", "dop"]);
        assert!(exists(
            &json!({"name": "osm", "url": "http://x"}),
            &collection,
            Some(&path)
        ));
        assert!(!exists(
            &json!({"name": "aerial", "url": "http://x"}),
            &collection,
            Some(&path)
        ));
    }

    #[test]
    fn unreachable_key_path_is_never_present() {
        let path = KeyPath::parse("missing");
        let collection = json!([{"missing": 1}]);
        assert!(!exists(&json!({"name": "osm"}), &collection, Some(&path)));
    }

    #[test]
    fn array_candidate_unions_membership() {
        let collection = json!([{"id": 1}]);
        assert!(exists(&json!([{"id": 1}, {"id": 2}]), &collection, None));
        assert!(!exists(&json!([{"id": 3}, {"id": 2}]), &collection, None));
    }

    #[test]
    fn empty_array_candidate_is_absent() {
        assert!(!exists(&json!([]), &json!([{"id": 1}]), None));
    }

    #[test]
    fn null_candidate_matches_null_element() {
        assert!(exists(&Value::Null, &json!([null]), None));
        assert!(!exists(&Value::Null, &json!([1, 2]), None));
    }
}
