#![forbid(unsafe_code)]

//! Scratch-buffer editor for flat numeric lists.
//!
//! Scale and resolution fields are lists of numbers edited one input row at
//! a time. [`InputList`] keeps the raw row texts in a buffer separate from
//! the bound value and only writes through on [`commit`](InputList::commit):
//! empty rows are dropped, the values are sorted descending, and the bound
//! value is replaced only when the result actually differs.

use formdrop_core::field::FormBind;
use serde_json::{Number, Value};

/// Editor state for a bound numeric list.
#[derive(Debug, Clone, Default)]
pub struct InputList {
    entries: Vec<String>,
}

impl InputList {
    /// Create an empty editor.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The current row texts.
    #[must_use]
    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    /// Append a row.
    pub fn push_entry(&mut self, text: impl Into<String>) {
        self.entries.push(text.into());
    }

    /// Replace the text of row `index`.
    ///
    /// # Panics
    ///
    /// Panics when `index` is not an existing row.
    pub fn set_entry(&mut self, index: usize, text: impl Into<String>) {
        self.entries[index] = text.into();
    }

    /// Pull the bound value into the buffer when the two have diverged
    /// (the bound value changed behind the editor's back).
    pub fn sync(&mut self, field: &dyn FormBind) {
        let bound = bound_numbers(field);
        if self.parsed_entries().as_ref() != Some(&bound) {
            self.entries = bound.iter().map(|n| format_number(*n)).collect();
        }
    }

    /// Write the buffer through to the bound value.
    ///
    /// Empty rows are dropped, the remaining values sorted descending. A
    /// row that does not parse as a finite number blocks the commit (the
    /// user is still typing). Returns whether the bound value was updated;
    /// an unchanged result leaves the field untouched.
    pub fn commit(&mut self, field: &mut dyn FormBind) -> bool {
        let mut values = Vec::with_capacity(self.entries.len());
        for entry in self.entries.iter().filter(|e| !e.trim().is_empty()) {
            match entry.trim().parse::<f64>() {
                Ok(value) if value.is_finite() => values.push(value),
                _ => return false,
            }
        }
        values.sort_by(|a, b| b.total_cmp(a));
        if bound_numbers(field) == values {
            return false;
        }
        self.entries = values.iter().map(|n| format_number(*n)).collect();
        field.commit(Some(Value::Array(
            values.into_iter().filter_map(json_number).collect(),
        )));
        true
    }

    /// Remove row `index` from the buffer and the bound value, marking the
    /// field dirty.
    ///
    /// # Panics
    ///
    /// Panics when `index` is not an existing row.
    pub fn remove(&mut self, field: &mut dyn FormBind, index: usize) {
        self.entries.remove(index);
        let mut values = bound_numbers(field);
        if index < values.len() {
            values.remove(index);
        }
        field.commit(Some(Value::Array(
            values.into_iter().filter_map(json_number).collect(),
        )));
    }

    /// The numbers the buffer parses to, or `None` while any non-empty row
    /// is unparsed.
    fn parsed_entries(&self) -> Option<Vec<f64>> {
        self.entries
            .iter()
            .filter(|e| !e.trim().is_empty())
            .map(|e| e.trim().parse::<f64>().ok().filter(|v| v.is_finite()))
            .collect()
    }
}

/// The bound value as a list of numbers; non-numeric elements and
/// non-array values read as empty.
fn bound_numbers(field: &dyn FormBind) -> Vec<f64> {
    match field.value() {
        Some(Value::Array(items)) => items.iter().filter_map(Value::as_f64).collect(),
        _ => Vec::new(),
    }
}

fn json_number(value: f64) -> Option<Value> {
    Number::from_f64(value).map(Value::Number)
}

fn format_number(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        format!("{value}")
    }
}
