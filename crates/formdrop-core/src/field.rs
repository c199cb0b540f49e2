#![forbid(unsafe_code)]

//! Form binding contract.
//!
//! Every formdrop component reads and writes one named field of a parent
//! form through [`FormBind`]: the current value, a dirty/touched bit set,
//! and named validity constraints. This trait is the only coupling to the
//! surrounding form framework; any reactive form abstraction can implement
//! it (subscribe-on-change = observe [`FormField::revision`],
//! commit-on-write = [`FormBind::commit`]).
//!
//! [`FormField`] is the reference implementation used by the widget tests
//! and by hosts without a form framework of their own.

use ahash::AHashMap;
use bitflags::bitflags;
use serde_json::Value;

bitflags! {
    /// Interaction flags for a form field.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct FieldFlags: u8 {
        /// The value was modified through the view since the last reset.
        const DIRTY = 1 << 0;
        /// The user interacted with the field at least once.
        const TOUCHED = 1 << 1;
    }
}

/// Whether a value counts as empty for required-field validation.
///
/// `Null`, the empty string, the empty array, and the empty object are
/// empty; numbers and booleans never are.
#[must_use]
pub fn is_empty(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::String(s) => s.is_empty(),
        Value::Array(a) => a.is_empty(),
        Value::Object(o) => o.is_empty(),
        Value::Bool(_) | Value::Number(_) => false,
    }
}

/// Binding to one named field of a parent form.
pub trait FormBind {
    /// The current bound value, if set.
    fn value(&self) -> Option<&Value>;

    /// Mutable access to the bound value for in-place splicing.
    fn value_mut(&mut self) -> Option<&mut Value>;

    /// Replace the bound value, marking the field dirty and signalling a
    /// re-render. `None` unsets the field.
    fn commit(&mut self, value: Option<Value>);

    /// Signal that the bound value was mutated in place and the view must
    /// re-render.
    fn notify_changed(&mut self);

    /// Mark the field as touched by user interaction.
    fn mark_touched(&mut self);

    /// Set or clear a named validity constraint (`true` = satisfied).
    fn set_validity(&mut self, constraint: &str, valid: bool);

    /// The recorded state of a named constraint, if it was ever set.
    fn validity(&self, constraint: &str) -> Option<bool>;
}

/// In-memory form field: the reference [`FormBind`] implementation.
#[derive(Debug, Clone, Default)]
pub struct FormField {
    name: String,
    form_name: Option<String>,
    value: Option<Value>,
    flags: FieldFlags,
    validity: AHashMap<String, bool>,
    revision: u64,
}

impl FormField {
    /// Create an unset field with the given name.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Attach the owning form's name, for hosts wiring several forms.
    #[must_use]
    pub fn form_name(mut self, form: impl Into<String>) -> Self {
        self.form_name = Some(form.into());
        self
    }

    /// Seed an initial value without marking the field dirty.
    #[must_use]
    pub fn with_value(mut self, value: Value) -> Self {
        self.value = Some(value);
        self
    }

    /// The field name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The owning form's name, if set.
    #[must_use]
    pub fn form(&self) -> Option<&str> {
        self.form_name.as_deref()
    }

    /// Current interaction flags.
    #[must_use]
    pub const fn flags(&self) -> FieldFlags {
        self.flags
    }

    /// Change counter; bumps on every commit or in-place change
    /// notification. Hosts poll this to know when to re-render.
    #[must_use]
    pub const fn revision(&self) -> u64 {
        self.revision
    }

    /// Whether every recorded validity constraint is satisfied.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.validity.values().all(|&v| v)
    }
}

impl FormBind for FormField {
    fn value(&self) -> Option<&Value> {
        self.value.as_ref()
    }

    fn value_mut(&mut self) -> Option<&mut Value> {
        self.value.as_mut()
    }

    fn commit(&mut self, value: Option<Value>) {
        self.value = value;
        self.flags |= FieldFlags::DIRTY;
        self.revision += 1;
    }

    fn notify_changed(&mut self) {
        self.revision += 1;
    }

    fn mark_touched(&mut self) {
        self.flags |= FieldFlags::TOUCHED;
    }

    fn set_validity(&mut self, constraint: &str, valid: bool) {
        self.validity.insert(constraint.to_owned(), valid);
    }

    fn validity(&self, constraint: &str) -> Option<bool> {
        self.validity.get(constraint).copied()
    }
}
