#![forbid(unsafe_code)]

//! Drop target: accepts dragged items into a bound collection.
//!
//! [`DropTarget`] is the receiving half of the palette-to-collection
//! transfer. On a drop it decodes the dragged payload, suppresses
//! duplicates against the current bound value, optionally hands the
//! decision to the host, and on acceptance commits the new items and tells
//! the originating palette to release them.
//!
//! # State Machine
//!
//! `Idle → EvaluatingDrop → {AwaitingDecision} → Committing → Idle`, or
//! `EvaluatingDrop → Reverting → Idle`. `EvaluatingDrop`, `Committing`, and
//! `Reverting` resolve within a single [`handle_drop`](DropTarget::handle_drop)
//! call; only `AwaitingDecision` persists across calls, until the host
//! resolves it with [`decide`](DropTarget::decide) — possibly on a later
//! turn of the event loop, after a confirmation dialog closes.
//!
//! # Invariants
//!
//! 1. An accepted drop never introduces a duplicate (per the equality
//!    resolver, under the configured key-path projection) into the bound
//!    collection, including duplicates within one dropped batch.
//! 2. A reverted or ignored drop performs no model mutation.
//! 3. The pending insertion set is empty whenever the target is idle.
//! 4. While a decision is pending, the bound collection belongs to the
//!    in-flight gesture: further drops are ignored, not queued.
//!
//! # Failure Modes
//!
//! - Missing or unparseable payload data degrades to a no-op ignore; the
//!   host sees "nothing happened".
//! - A decision the host never resolves leaves the target pending
//!   indefinitely; no timeout is imposed.

use crate::palette::SourcePalette;
use formdrop_core::exists::exists_scalar;
use formdrop_core::field::{FormBind, is_empty};
use formdrop_core::{DropEvent, KeyPath, REQUIRED, SourceTag, payload};
use serde_json::Value;

// ---------------------------------------------------------------------------
// Configuration
// ---------------------------------------------------------------------------

/// Configuration for a [`DropTarget`].
#[derive(Debug, Clone, Default)]
pub struct DropConfig {
    allow_array: bool,
    use_key: Option<KeyPath>,
    accepts: Vec<SourceTag>,
    insert_gate: bool,
    change_gate: bool,
    required: bool,
}

impl DropConfig {
    /// Start from the defaults: single-value mode, no projection, accept
    /// any palette, no decision gates, not required.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Accept multiple items into a bound list instead of a single value.
    #[must_use]
    pub fn allow_array(mut self, allow: bool) -> Self {
        self.allow_array = allow;
        self
    }

    /// Store a projected sub-value of each inserted item instead of the
    /// whole item. `path` is dot-separated.
    #[must_use]
    pub fn use_key_for_value(mut self, path: &str) -> Self {
        self.use_key = Some(KeyPath::parse(path));
        self
    }

    /// Restrict accepted palettes to a comma-separated tag list. An empty
    /// list accepts any palette-tagged drop.
    #[must_use]
    pub fn accepts(mut self, list: &str) -> Self {
        self.accepts = SourceTag::parse_list(list);
        self
    }

    /// Arm the insert decision gate: every drop with decodable data is
    /// handed to the host before duplicate checking.
    #[must_use]
    pub fn insert_gate(mut self, armed: bool) -> Self {
        self.insert_gate = armed;
        self
    }

    /// Arm the change decision gate: consulted only when the insert gate is
    /// absent and the drop would actually change the collection.
    #[must_use]
    pub fn change_gate(mut self, armed: bool) -> Self {
        self.change_gate = armed;
        self
    }

    /// Treat the bound field as required: valid only while its value is
    /// defined and non-empty.
    #[must_use]
    pub fn required(mut self, required: bool) -> Self {
        self.required = required;
        self
    }
}

// ---------------------------------------------------------------------------
// Outcomes
// ---------------------------------------------------------------------------

/// Which decision gate a pending drop is waiting on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecisionGate {
    /// Host decides before duplicate checking.
    Insert,
    /// Host decides after duplicate checking found new items.
    Change,
}

/// Why a drop was ignored without touching the model.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IgnoreReason {
    /// The dragged element did not come from any palette.
    ForeignSource,
    /// The palette's tag is not in the configured accept list.
    UnacceptedTag,
    /// No item data was attached to the dragged element.
    MissingData,
    /// The attached item data was not parseable.
    MalformedPayload,
    /// Another gesture is still awaiting a host decision.
    DecisionPending,
}

/// Result of a drop gesture or a decision resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropOutcome {
    /// Nothing happened; no model mutation, no visual revert needed.
    Ignored(IgnoreReason),
    /// The gesture is suspended on a host decision.
    Pending(DecisionGate),
    /// New items were merged into the bound collection.
    Committed {
        /// How many items were inserted.
        inserted: usize,
    },
    /// The drop was rejected; the host should visually return the dragged
    /// element to its origin. No model mutation occurred.
    Reverted,
}

/// Back-reference from a drop to the palette that offered the item, plus
/// the palette's own bound field, so a commit can release the item at its
/// origin.
pub struct Origin<'a> {
    /// The palette the dragged element came from.
    pub palette: &'a SourcePalette,
    /// The palette's backing collection.
    pub field: &'a mut dyn FormBind,
}

// ---------------------------------------------------------------------------
// DropTarget
// ---------------------------------------------------------------------------

/// A gesture suspended on a host decision.
#[derive(Debug, Clone)]
struct PendingDrop {
    gate: DecisionGate,
    /// The raw dropped item, as decoded from the payload.
    candidate: Value,
    /// Items that passed duplicate checking (change gate only; the insert
    /// gate re-checks at decision time).
    pending: Vec<Value>,
}

/// The receiving half of the drag-and-drop transfer protocol.
#[derive(Debug, Clone, Default)]
pub struct DropTarget {
    config: DropConfig,
    suspended: Option<PendingDrop>,
}

impl DropTarget {
    /// Create a drop target with the given configuration.
    #[must_use]
    pub fn new(config: DropConfig) -> Self {
        Self {
            config,
            suspended: None,
        }
    }

    /// The target's configuration.
    #[must_use]
    pub fn config(&self) -> &DropConfig {
        &self.config
    }

    /// Whether a gesture is suspended on a host decision.
    #[must_use]
    pub const fn is_pending(&self) -> bool {
        self.suspended.is_some()
    }

    /// The item the pending gesture dropped, for the host's confirmation
    /// dialog. `None` when idle.
    #[must_use]
    pub fn pending_item(&self) -> Option<&Value> {
        self.suspended.as_ref().map(|p| &p.candidate)
    }

    /// Process a drop reported by the pointer-interaction library.
    ///
    /// `origin` is the back-reference to the palette the element came from;
    /// pass `None` for static palettes with no backing collection.
    pub fn handle_drop(
        &mut self,
        event: &DropEvent,
        field: &mut dyn FormBind,
        origin: Option<Origin<'_>>,
    ) -> DropOutcome {
        if self.is_pending() {
            return self.ignore(IgnoreReason::DecisionPending);
        }
        let Some(tag) = event.source_tag() else {
            return self.ignore(IgnoreReason::ForeignSource);
        };
        if !self.config.accepts.is_empty() && !self.config.accepts.contains(tag) {
            return self.ignore(IgnoreReason::UnacceptedTag);
        }
        let Some(data) = event.item_data() else {
            return self.ignore(IgnoreReason::MissingData);
        };
        let candidate = match payload::decode(data) {
            Ok(item) => item,
            Err(_) => return self.ignore(IgnoreReason::MalformedPayload),
        };

        if self.config.insert_gate {
            self.suspended = Some(PendingDrop {
                gate: DecisionGate::Insert,
                candidate,
                pending: Vec::new(),
            });
            return DropOutcome::Pending(DecisionGate::Insert);
        }

        let pending = self.collect_new(&candidate, field);
        if pending.is_empty() {
            return DropOutcome::Reverted;
        }
        if self.config.change_gate {
            self.suspended = Some(PendingDrop {
                gate: DecisionGate::Change,
                candidate,
                pending,
            });
            return DropOutcome::Pending(DecisionGate::Change);
        }
        self.commit(&candidate, pending, field, origin)
    }

    /// Resolve a pending decision. `accept = false` reverts; on an idle
    /// target this is a no-op revert (idempotent cancellation).
    pub fn decide(
        &mut self,
        accept: bool,
        field: &mut dyn FormBind,
        origin: Option<Origin<'_>>,
    ) -> DropOutcome {
        let Some(PendingDrop {
            gate,
            candidate,
            pending,
        }) = self.suspended.take()
        else {
            return DropOutcome::Reverted;
        };
        if !accept {
            return DropOutcome::Reverted;
        }
        match gate {
            DecisionGate::Insert => {
                // Duplicate checking happens at decision time, against the
                // bound value as it is now.
                let pending = self.collect_new(&candidate, field);
                if pending.is_empty() {
                    DropOutcome::Reverted
                } else {
                    self.commit(&candidate, pending, field, origin)
                }
            }
            DecisionGate::Change => self.commit(&candidate, pending, field, origin),
        }
    }

    /// Remove an item from the bound collection, outside the drop machine.
    ///
    /// No-op when `item` is `None` or the field is unset. Array mode
    /// splices out the first structural match and unsets the field when the
    /// collection empties; single-value mode unsets outright.
    pub fn remove(&mut self, field: &mut dyn FormBind, item: Option<&Value>) {
        let Some(item) = item else { return };
        if field.value().is_none() {
            return;
        }
        if self.config.allow_array {
            let Some(Value::Array(mut items)) = field.value().cloned() else {
                return;
            };
            let Some(position) = items.iter().position(|el| el == item) else {
                return;
            };
            items.remove(position);
            #[cfg(feature = "tracing")]
            tracing::debug!(message = "droppable.remove", remaining = items.len());
            if items.is_empty() {
                field.commit(None);
            } else {
                field.commit(Some(Value::Array(items)));
            }
        } else {
            field.commit(None);
        }
        self.revalidate(field);
    }

    /// Toggle the required attribute at runtime and re-evaluate validity.
    pub fn set_required(&mut self, required: bool, field: &mut dyn FormBind) {
        self.config.required = required;
        if required {
            self.revalidate(field);
        } else {
            field.set_validity(REQUIRED, true);
        }
    }

    /// Re-evaluate required validity against the current bound value.
    pub fn revalidate(&self, field: &mut dyn FormBind) {
        if self.config.required {
            let valid = field.value().is_some_and(|v| !is_empty(v));
            field.set_validity(REQUIRED, valid);
        }
    }

    /// Items from `candidate` (one item, or each element of an array drop)
    /// that are not yet in the bound collection, projected through the
    /// configured key path. Duplicates within the batch are collapsed, and
    /// candidates the key path cannot reach are skipped, so nothing empty
    /// or doubled ever reaches the collection.
    fn collect_new(&self, candidate: &Value, field: &dyn FormBind) -> Vec<Value> {
        let elements = match candidate {
            Value::Array(elements) => elements.as_slice(),
            single => std::slice::from_ref(single),
        };
        let mut pending: Vec<Value> = Vec::new();
        for element in elements {
            let projected = match &self.config.use_key {
                Some(path) => match path.project(element) {
                    Some(value) => value.clone(),
                    None => continue,
                },
                None => element.clone(),
            };
            let in_bound = field
                .value()
                .is_some_and(|current| exists_scalar(&projected, current, None));
            if !in_bound && !pending.contains(&projected) {
                pending.push(projected);
            }
        }
        pending
    }

    /// Merge the pending insertion set into the bound collection and
    /// release the items at their origin palette.
    fn commit(
        &mut self,
        candidate: &Value,
        pending: Vec<Value>,
        field: &mut dyn FormBind,
        origin: Option<Origin<'_>>,
    ) -> DropOutcome {
        let inserted = pending.len();
        let merged = if self.config.allow_array {
            let mut items = match field.value().cloned() {
                Some(Value::Array(items)) => items,
                None => Vec::new(),
                Some(other) => panic!(
                    "array-mode drop target bound to non-array value: {other}"
                ),
            };
            items.extend(pending);
            Value::Array(items)
        } else {
            // Single-value mode accepts at most one item per drop.
            pending.into_iter().next().unwrap_or(Value::Null)
        };

        if let Some(origin) = origin {
            origin.palette.on_accepted(candidate, origin.field);
        }

        field.commit(Some(merged));
        self.revalidate(field);
        #[cfg(feature = "tracing")]
        tracing::debug!(
            message = "droppable.commit",
            inserted,
            array_mode = self.config.allow_array
        );
        DropOutcome::Committed { inserted }
    }

    fn ignore(&self, reason: IgnoreReason) -> DropOutcome {
        #[cfg(feature = "tracing")]
        tracing::trace!(message = "droppable.ignore", reason = ?reason);
        DropOutcome::Ignored(reason)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
