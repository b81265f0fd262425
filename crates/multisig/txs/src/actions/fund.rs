use arbitrary::Arbitrary;
use borsh::{BorshDeserialize, BorshSerialize};
use stakewell_primitives::AccountAddress;

use super::decode_body;
use crate::{constants::OpType, errors::OrderParseError, sighash::Sighash};

/// A fund-movement instruction forwarded to the economic engine as soon as
/// the order authenticates. Not subject to the governance cool-down.
#[derive(Clone, Debug, Eq, PartialEq, Arbitrary, BorshDeserialize, BorshSerialize)]
pub enum FundAction {
    /// Pay out the accumulated commission to the commission address.
    SendCommission,
    /// Move a token holding between accounts.
    TransferHolding(TransferHoldingAction),
    /// Return the engine's remaining spendable balance.
    ReturnBalance,
}

impl FundAction {
    pub(crate) fn decode(op: OpType, body: &[u8]) -> Result<Self, OrderParseError> {
        match op {
            // Bodyless instructions carry no bytes at all.
            OpType::SendCommission if body.is_empty() => Ok(FundAction::SendCommission),
            OpType::ReturnBalance if body.is_empty() => Ok(FundAction::ReturnBalance),
            OpType::SendCommission | OpType::ReturnBalance => {
                Err(OrderParseError::MalformedBody(op))
            }
            OpType::TransferHolding => decode_body(op, body).map(FundAction::TransferHolding),
            other => Err(OrderParseError::UnsupportedOp(other)),
        }
    }
}

impl Sighash for FundAction {
    fn op_type(&self) -> OpType {
        match self {
            FundAction::SendCommission => OpType::SendCommission,
            FundAction::TransferHolding(_) => OpType::TransferHolding,
            FundAction::ReturnBalance => OpType::ReturnBalance,
        }
    }

    fn sighash_payload(&self) -> Vec<u8> {
        match self {
            FundAction::SendCommission | FundAction::ReturnBalance => Vec::new(),
            FundAction::TransferHolding(t) => borsh::to_vec(t).expect("borsh: vec write"),
        }
    }
}

/// Moves `amount` from a token-holding account to a destination account.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Arbitrary, BorshDeserialize, BorshSerialize)]
pub struct TransferHoldingAction {
    /// Token-holding account to draw from.
    wallet: AccountAddress,
    /// Destination account.
    dest: AccountAddress,
    /// Amount in base units.
    amount: u64,
}

impl TransferHoldingAction {
    pub fn new(wallet: AccountAddress, dest: AccountAddress, amount: u64) -> Self {
        Self {
            wallet,
            dest,
            amount,
        }
    }

    pub fn wallet(&self) -> &AccountAddress {
        &self.wallet
    }

    pub fn dest(&self) -> &AccountAddress {
        &self.dest
    }

    pub fn amount(&self) -> u64 {
        self.amount
    }
}
