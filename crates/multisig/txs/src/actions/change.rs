use arbitrary::Arbitrary;
use borsh::{BorshDeserialize, BorshSerialize};
use stakewell_primitives::{AccountAddress, Buf32};

use super::{decode_body, GovernedField};
use crate::{constants::OpType, errors::OrderParseError, sighash::Sighash};

/// A configuration change for one governed field of the economic engine.
///
/// The first authenticated instance stages the carried value; a later
/// authenticated instance for the same field commits it once the governance
/// cool-down has elapsed.
#[derive(Clone, Debug, Eq, PartialEq, Arbitrary, BorshDeserialize, BorshSerialize)]
pub enum ChangeAction {
    /// New admin multisig address.
    Admin(AccountAddress),
    /// New transaction multisig address.
    TransactionAdmin(AccountAddress),
    /// New content metadata reference.
    Content(Buf32),
    /// New commission factor, in basis points.
    CommissionFactor(u16),
    /// New commission payout address.
    CommissionAddress(AccountAddress),
    /// New economic-engine code reference.
    EngineCode(Buf32),
}

impl ChangeAction {
    /// The governed field this change targets.
    pub fn field(&self) -> GovernedField {
        match self {
            ChangeAction::Admin(_) => GovernedField::Admin,
            ChangeAction::TransactionAdmin(_) => GovernedField::TransactionAdmin,
            ChangeAction::Content(_) => GovernedField::Content,
            ChangeAction::CommissionFactor(_) => GovernedField::CommissionFactor,
            ChangeAction::CommissionAddress(_) => GovernedField::CommissionAddress,
            ChangeAction::EngineCode(_) => GovernedField::EngineCode,
        }
    }

    pub(crate) fn decode(op: OpType, body: &[u8]) -> Result<Self, OrderParseError> {
        match op {
            OpType::ChangeAdmin => decode_body(op, body).map(ChangeAction::Admin),
            OpType::ChangeTransactionAdmin => {
                decode_body(op, body).map(ChangeAction::TransactionAdmin)
            }
            OpType::ChangeContent => decode_body(op, body).map(ChangeAction::Content),
            OpType::ChangeCommissionFactor => {
                decode_body(op, body).map(ChangeAction::CommissionFactor)
            }
            OpType::ChangeCommissionAddress => {
                decode_body(op, body).map(ChangeAction::CommissionAddress)
            }
            OpType::UpgradeEngineCode => decode_body(op, body).map(ChangeAction::EngineCode),
            other => Err(OrderParseError::UnsupportedOp(other)),
        }
    }
}

impl Sighash for ChangeAction {
    fn op_type(&self) -> OpType {
        match self {
            ChangeAction::Admin(_) => OpType::ChangeAdmin,
            ChangeAction::TransactionAdmin(_) => OpType::ChangeTransactionAdmin,
            ChangeAction::Content(_) => OpType::ChangeContent,
            ChangeAction::CommissionFactor(_) => OpType::ChangeCommissionFactor,
            ChangeAction::CommissionAddress(_) => OpType::ChangeCommissionAddress,
            ChangeAction::EngineCode(_) => OpType::UpgradeEngineCode,
        }
    }

    fn sighash_payload(&self) -> Vec<u8> {
        match self {
            ChangeAction::Admin(addr)
            | ChangeAction::TransactionAdmin(addr)
            | ChangeAction::CommissionAddress(addr) => {
                borsh::to_vec(addr).expect("borsh: vec write")
            }
            ChangeAction::Content(r) | ChangeAction::EngineCode(r) => {
                borsh::to_vec(r).expect("borsh: vec write")
            }
            ChangeAction::CommissionFactor(bp) => borsh::to_vec(bp).expect("borsh: vec write"),
        }
    }
}
