//! Outbound messages to collaborator contracts.

use arbitrary::Arbitrary;
use borsh::{BorshDeserialize, BorshSerialize};
use stakewell_multisig_txs::QueryId;
use stakewell_primitives::{AccountAddress, Buf32};

/// Opcode-tagged instruction sent to the economic engine.
#[derive(Clone, Debug, Eq, PartialEq, Arbitrary, BorshDeserialize, BorshSerialize)]
pub enum EngineMsg {
    /// Install a new admin multisig address.
    ChangeAdmin(AccountAddress),
    /// Install a new transaction multisig address.
    ChangeTransactionAdmin(AccountAddress),
    /// Install new content metadata.
    ChangeContent(Buf32),
    /// Install a new commission factor, in basis points.
    ChangeCommissionFactor(u16),
    /// Install a new commission payout address.
    ChangeCommissionAddress(AccountAddress),
    /// Install new engine code.
    UpgradeCode(Buf32),
    /// Pay out the accumulated commission.
    SendCommission,
    /// Move a token holding between accounts.
    TransferHolding {
        wallet: AccountAddress,
        dest: AccountAddress,
        amount: u64,
    },
    /// Plain value transfer returning the engine's remaining balance.
    ReturnBalance,
}

/// Instruction sent to the treasury for a validator-staking proxy deposit.
#[derive(Clone, Debug, Eq, PartialEq, Arbitrary, BorshDeserialize, BorshSerialize)]
pub enum TreasuryMsg {
    Deposit {
        validator_address: AccountAddress,
        reward_percent_bp: u16,
        max_holders: u32,
        min_validator_stake: u64,
        min_holder_stake: u64,
        wallet_id: u32,
        amount: u64,
    },
}

/// Sink for outbound messages.
///
/// Messages are one-way and asynchronous; a rejected message comes back as
/// a bounce carrying the same query id, which is how wallets correlate a
/// downstream failure with the order that caused it.
pub trait MsgRelayer<M> {
    fn relay_msg(&mut self, query_id: QueryId, recipient: AccountAddress, msg: M);
}

/// A relayer that records every message, for assertions in tests.
#[derive(Clone, Debug, Default)]
pub struct MockRelayer<M> {
    sent: Vec<(QueryId, AccountAddress, M)>,
}

impl<M> MockRelayer<M> {
    pub fn new() -> Self {
        Self { sent: Vec::new() }
    }

    pub fn messages(&self) -> &[(QueryId, AccountAddress, M)] {
        &self.sent
    }
}

impl<M> MsgRelayer<M> for MockRelayer<M> {
    fn relay_msg(&mut self, query_id: QueryId, recipient: AccountAddress, msg: M) {
        self.sent.push((query_id, recipient, msg));
    }
}
