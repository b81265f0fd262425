use borsh::{BorshDeserialize, BorshSerialize};
use stakewell_multisig_common::{
    MultisigParams, OrderGate, OwnerSet, WalletConfigError,
};
use stakewell_multisig_txs::QueryId;
use stakewell_primitives::AccountAddress;

/// Holds the state for the transaction wallet: just the shared
/// authentication gate and the treasury address.
#[derive(Clone, Debug, PartialEq, Eq, BorshSerialize, BorshDeserialize)]
pub struct TxnWalletState {
    gate: OrderGate,
    /// Address of the treasury that receives deposit instructions.
    recipient: AccountAddress,
}

impl TxnWalletState {
    /// Validate params and build a fresh wallet state.
    pub fn new(params: &MultisigParams) -> Result<Self, WalletConfigError> {
        Ok(Self {
            gate: OrderGate::new(params)?,
            recipient: params.recipient,
        })
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

    pub(crate) fn gate_mut(&mut self) -> &mut OrderGate {
        &mut self.gate
    }
}
