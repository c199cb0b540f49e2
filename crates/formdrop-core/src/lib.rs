#![forbid(unsafe_code)]

//! Core contracts for formdrop.
//!
//! This crate holds everything the stateful components in `formdrop-widgets`
//! agree on: the structured item model ([`serde_json::Value`]), dot-separated
//! [`keypath`] projection, the [`exists`] equality resolver used for duplicate
//! suppression, the [`field`] form binding contract, the string [`payload`]
//! codec attached to dragged elements, and the [`event`] types an external
//! pointer-interaction library delivers on drop.

pub mod event;
pub mod exists;
pub mod field;
pub mod keypath;
pub mod payload;

pub use event::{DropEvent, SourceTag};
pub use exists::exists;
pub use field::{FieldFlags, FormBind, FormField};
pub use keypath::KeyPath;
pub use payload::{DragPayload, PayloadError};

/// Validity constraint key for required fields.
///
/// The same key the surrounding form reads when deciding whether a required
/// field blocks submission.
pub const REQUIRED: &str = "required";
