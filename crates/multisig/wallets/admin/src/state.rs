use borsh::{BorshDeserialize, BorshSerialize};
use stakewell_multisig_common::{OrderGate, OwnerSet, WalletConfigError};
use stakewell_multisig_txs::{
    actions::{ChangeAction, GovernedField},
    QueryId,
};
use stakewell_primitives::AccountAddress;

use crate::{pending::PendingChanges, AdminWalletParams};

/// Holds the state for the admin wallet: the shared authentication gate
/// plus the pending-change store.
#[derive(Clone, Debug, PartialEq, Eq, BorshSerialize, BorshDeserialize)]
pub struct AdminWalletState {
    gate: OrderGate,
    pending: PendingChanges,
    /// Address of the economic engine that receives committed changes and
    /// fund instructions.
    recipient: AccountAddress,
    /// Governance cool-down in seconds.
    update_delay_secs: u32,
}

impl AdminWalletState {
    /// Validate params and build a fresh wallet state.
    pub fn new(params: &AdminWalletParams) -> Result<Self, WalletConfigError> {
        Ok(Self {
            gate: OrderGate::new(&params.multisig)?,
            pending: PendingChanges::new(),
            recipient: params.multisig.recipient,
            update_delay_secs: params.update_delay_secs,
        })
    }

    /// The staged change and its timestamp for one governed field, if any.
    pub fn staged_change(&self, field: GovernedField) -> Option<(&ChangeAction, u32)> {
        self.pending
            .get(field)
            .map(|p| (p.action(), p.staged_at()))
    }

    /// All staged changes.
    pub fn pending(&self) -> &PendingChanges {
        &self.pending
    }

    /// Outstanding-confirmation count for one owner index.
    pub fn flood_count(&self, index: u8) -> u8 {
        self.gate.flood_count(index)
    }

    /// Whether a query id has already executed.
    pub fn is_completed(&self, query_id: QueryId) -> bool {
        self.gate.is_completed(query_id)
    }

    /// Confirmation count of an in-flight internal-channel order.
    pub fn confirmations(&self, query_id: QueryId) -> Option<u8> {
        self.gate.confirmations(query_id)
    }

    pub fn owners(&self) -> &OwnerSet {
        self.gate.owners()
    }

    pub fn threshold(&self) -> u8 {
        self.gate.threshold()
    }

    pub fn wallet_id(&self) -> u32 {
        self.gate.wallet_id()
    }

    pub fn recipient(&self) -> &AccountAddress {
        &self.recipient
    }

    pub fn update_delay_secs(&self) -> u32 {
        self.update_delay_secs
    }

    pub(crate) fn gate_mut(&mut self) -> &mut OrderGate {
        &mut self.gate
    }

    pub(crate) fn pending_mut(&mut self) -> &mut PendingChanges {
        &mut self.pending
    }
}
