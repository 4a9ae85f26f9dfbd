//! Confirmation gate guarding destructive actions.

use crate::domain::types::EntityKey;

/// A destructive action awaiting explicit acknowledgment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingConfirmation {
    pub target_id: EntityKey,
    pub target_label: String,
}

/// Holds at most one pending confirmation. `confirm` hands the target back
/// exactly once; `cancel` drops it without side effects.
#[derive(Debug, Default)]
pub struct ConfirmationGate {
    pending: Option<PendingConfirmation>,
}

impl ConfirmationGate {
    pub fn new() -> Self {
        Self::default()
    }

    /// Opens the gate for the given target, replacing any previous request.
    pub fn open(&mut self, target_id: EntityKey, target_label: impl Into<String>) {
        self.pending = Some(PendingConfirmation {
            target_id,
            target_label: target_label.into(),
        });
    }

    pub fn is_open(&self) -> bool {
        self.pending.is_some()
    }

    pub fn pending(&self) -> Option<&PendingConfirmation> {
        self.pending.as_ref()
    }

    /// Closes the gate without acting.
    pub fn cancel(&mut self) {
        self.pending = None;
    }

    /// Takes the pending target, closing the gate. Returns `None` when
    /// nothing was pending, so a double confirm cannot act twice.
    pub fn confirm(&mut self) -> Option<PendingConfirmation> {
        self.pending.take()
    }
}
