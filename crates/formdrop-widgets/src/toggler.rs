#![forbid(unsafe_code)]

//! Toggle group: grouped show/hide panels.
//!
//! A [`ToggleGroup`] manages an append-only set of registered panels and an
//! open-index set under one of two display modes, fixed at construction:
//!
//! - [`ToggleMode::Independent`] — each toggle flips its own panel, any
//!   number may be open at once.
//! - [`ToggleMode::Exclusive`] — showing one panel hides every other; the
//!   open set never holds more than one index.
//!
//! When nothing has been toggled yet, the first registered panel reports
//! open. This assumes registration order matches display order; the host
//! controls both.

use std::collections::BTreeSet;

/// Display mode for a toggle group, fixed at construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ToggleMode {
    /// Panels show and hide independently; any number may be open.
    Independent,
    /// Showing a panel hides every other one.
    #[default]
    Exclusive,
}

/// What a registered element's toggle applies to: its own body or the
/// adjacent sibling element. Purely descriptive for the host; the group
/// tracks visibility the same way either way.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ToggleScope {
    /// The element toggles itself.
    #[default]
    SelfPanel,
    /// The element toggles its next sibling.
    NextSibling,
}

/// Kind of a focusable control inside a panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlKind {
    Text,
    TextArea,
    Select,
    Button,
    Checkbox,
    Radio,
}

impl ControlKind {
    /// Whether the focus helper may land on this control.
    #[must_use]
    pub const fn focusable(self) -> bool {
        !matches!(self, Self::Button | Self::Checkbox | Self::Radio)
    }
}

/// A focusable control descriptor inside a panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Focusable {
    /// The control's kind.
    pub kind: ControlKind,
    /// Whether the control itself is currently visible.
    pub visible: bool,
}

impl Focusable {
    /// Create a visible control descriptor.
    #[must_use]
    pub const fn new(kind: ControlKind) -> Self {
        Self {
            kind,
            visible: true,
        }
    }

    /// Create a hidden control descriptor.
    #[must_use]
    pub const fn hidden(kind: ControlKind) -> Self {
        Self {
            kind,
            visible: false,
        }
    }
}

/// A panel registered with a [`ToggleGroup`].
#[derive(Debug, Clone, Default)]
pub struct TogglePanel {
    scope: ToggleScope,
    has_indicator: bool,
    visible: bool,
    controls: Vec<Focusable>,
}

impl TogglePanel {
    /// A hidden panel toggling itself, no indicator icons, no controls.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set what the element's toggle applies to.
    #[must_use]
    pub fn scope(mut self, scope: ToggleScope) -> Self {
        self.scope = scope;
        self
    }

    /// Declare the paired indicator icons on the panel's control.
    #[must_use]
    pub fn with_indicator(mut self) -> Self {
        self.has_indicator = true;
        self
    }

    /// Set the panel's initial visibility.
    #[must_use]
    pub fn visible(mut self, visible: bool) -> Self {
        self.visible = visible;
        self
    }

    /// Declare the panel's focusable controls, in display order.
    #[must_use]
    pub fn controls(mut self, controls: Vec<Focusable>) -> Self {
        self.controls = controls;
        self
    }
}

#[derive(Debug, Clone)]
struct PanelState {
    panel: TogglePanel,
    visible: bool,
    indicator_swapped: bool,
}

/// Controller for a group of show/hide panels.
#[derive(Debug, Clone)]
pub struct ToggleGroup {
    mode: ToggleMode,
    panels: Vec<PanelState>,
    open: BTreeSet<usize>,
}

impl ToggleGroup {
    /// Create an empty group in the given mode.
    #[must_use]
    pub fn new(mode: ToggleMode) -> Self {
        Self {
            mode,
            panels: Vec::new(),
            open: BTreeSet::new(),
        }
    }

    /// The group's display mode.
    #[must_use]
    pub const fn mode(&self) -> ToggleMode {
        self.mode
    }

    /// Register a panel; returns the new panel count. Registration is
    /// append-only.
    pub fn register(&mut self, panel: TogglePanel) -> usize {
        let visible = panel.visible;
        self.panels.push(PanelState {
            panel,
            visible,
            indicator_swapped: false,
        });
        self.panels.len()
    }

    /// Number of registered panels.
    #[must_use]
    pub fn len(&self) -> usize {
        self.panels.len()
    }

    /// Whether no panel is registered yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.panels.is_empty()
    }

    /// Toggle the panel at `index` according to the group mode.
    ///
    /// # Panics
    ///
    /// Panics when `index` is not a registered panel.
    pub fn toggle(&mut self, index: usize) {
        assert!(
            index < self.panels.len(),
            "toggle index {index} out of bounds for {} panels",
            self.panels.len()
        );
        match self.mode {
            ToggleMode::Independent => self.toggle_independent(index),
            ToggleMode::Exclusive => self.show_exclusive(index),
        }
        #[cfg(feature = "tracing")]
        tracing::debug!(
            message = "toggler.toggle",
            index,
            mode = ?self.mode,
            open = self.open.len()
        );
    }

    fn toggle_independent(&mut self, index: usize) {
        let state = &mut self.panels[index];
        state.visible = !state.visible;
        if state.panel.has_indicator {
            state.indicator_swapped = !state.indicator_swapped;
        }
        if state.visible {
            self.open.insert(index);
        } else {
            self.open.remove(&index);
        }
    }

    fn show_exclusive(&mut self, index: usize) {
        for (i, state) in self.panels.iter_mut().enumerate() {
            state.visible = i == index;
        }
        self.open.clear();
        self.open.insert(index);
    }

    /// Whether the panel at `index` reports open. With an empty open set,
    /// only the first registered panel does (default-open-first policy).
    #[must_use]
    pub fn is_open(&self, index: usize) -> bool {
        if self.open.is_empty() {
            index == 0
        } else {
            self.open.contains(&index)
        }
    }

    /// The indices of currently open panels. Empty until the first toggle.
    #[must_use]
    pub fn open_indices(&self) -> &BTreeSet<usize> {
        &self.open
    }

    /// The tracked visibility of the panel at `index`.
    #[must_use]
    pub fn is_visible(&self, index: usize) -> bool {
        self.panels[index].visible
    }

    /// Whether the panel's indicator icon pair is currently swapped.
    #[must_use]
    pub fn indicator_swapped(&self, index: usize) -> bool {
        self.panels[index].indicator_swapped
    }

    /// What the registered element's toggle applies to.
    #[must_use]
    pub fn scope(&self, index: usize) -> ToggleScope {
        self.panels[index].panel.scope
    }

    /// The first control in the group that input focus may move to after a
    /// toggle: visible, inside a visible panel, and not a
    /// button/checkbox/radio. Returns `(panel index, control index)`.
    #[must_use]
    pub fn focus_target(&self) -> Option<(usize, usize)> {
        self.panels
            .iter()
            .enumerate()
            .filter(|(_, state)| state.visible)
            .find_map(|(panel_idx, state)| {
                state
                    .panel
                    .controls
                    .iter()
                    .position(|c| c.visible && c.kind.focusable())
                    .map(|control_idx| (panel_idx, control_idx))
            })
    }
}
