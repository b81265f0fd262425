//! Pending-change store.

use std::collections::BTreeMap;

use borsh::{BorshDeserialize, BorshSerialize};
use stakewell_multisig_txs::actions::{ChangeAction, GovernedField};

/// A staged configuration change awaiting its cool-down.
#[derive(Clone, Debug, PartialEq, Eq, BorshSerialize, BorshDeserialize)]
pub struct PendingChange {
    action: ChangeAction,
    staged_at: u32,
}

impl PendingChange {
    pub fn new(action: ChangeAction, staged_at: u32) -> Self {
        Self { action, staged_at }
    }

    pub fn action(&self) -> &ChangeAction {
        &self.action
    }

    pub fn staged_at(&self) -> u32 {
        self.staged_at
    }

    /// Whether the cool-down has elapsed.
    pub fn is_mature(&self, now: u32, delay_secs: u32) -> bool {
        now.saturating_sub(self.staged_at) >= delay_secs
    }
}

/// At most one staged change per governed field.
///
/// A slot exists from the first authenticated change order until it commits
/// or is cancelled; while it exists, reads of the field surface the staged
/// value and its timestamp.
#[derive(Clone, Debug, Default, PartialEq, Eq, BorshSerialize, BorshDeserialize)]
pub struct PendingChanges {
    slots: BTreeMap<GovernedField, PendingChange>,
}

impl PendingChanges {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, field: GovernedField) -> Option<&PendingChange> {
        self.slots.get(&field)
    }

    /// Stage a change now, overwriting any previous slot for the field.
    pub fn stage(&mut self, action: ChangeAction, now: u32) {
        self.stage_at(action, now);
    }

    /// Stage a change with an explicit timestamp (bounce reconciliation).
    pub fn stage_at(&mut self, action: ChangeAction, staged_at: u32) {
        self.slots
            .insert(action.field(), PendingChange::new(action, staged_at));
    }

    /// Drop the slot for a field, returning what was staged.
    pub fn clear(&mut self, field: GovernedField) -> Option<PendingChange> {
        self.slots.remove(&field)
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&GovernedField, &PendingChange)> {
        self.slots.iter()
    }
}
