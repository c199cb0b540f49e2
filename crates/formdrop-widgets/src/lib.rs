#![forbid(unsafe_code)]

//! Stateful form-editing components for formdrop.
//!
//! Each component binds one field of a parent form (via
//! [`formdrop_core::FormBind`]) and keeps it in sync with a drag-and-drop,
//! reorder, or show/hide gesture reported by the host's pointer-interaction
//! library:
//!
//! - [`droppable::DropTarget`] — accepts dragged items into a bound
//!   collection, with duplicate suppression and optional host confirmation.
//! - [`palette::SourcePalette`] — offers items for dragging and removes them
//!   from its own collection once a target commits them.
//! - [`sortable`] — in-place reordering of a bound list.
//! - [`toggler::ToggleGroup`] — grouped show/hide panels, independent or
//!   mutually exclusive.
//! - [`input_list::InputList`] — scratch-buffer editor for flat numeric
//!   lists (scales, resolutions).

pub mod droppable;
pub mod input_list;
pub mod palette;
pub mod sortable;
pub mod toggler;

pub use droppable::{DecisionGate, DropConfig, DropOutcome, DropTarget, IgnoreReason, Origin};
pub use input_list::InputList;
pub use palette::SourcePalette;
pub use sortable::Sortable;
pub use toggler::{ControlKind, Focusable, ToggleGroup, ToggleMode, TogglePanel, ToggleScope};
