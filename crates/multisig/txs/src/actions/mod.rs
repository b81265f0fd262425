use arbitrary::Arbitrary;
use borsh::{BorshDeserialize, BorshSerialize};

mod cancel;
mod change;
mod deposit;
mod fund;

pub use cancel::CancelAction;
pub use change::ChangeAction;
pub use deposit::DepositAction;
pub use fund::{FundAction, TransferHoldingAction};

use crate::{constants::OpType, errors::OrderParseError, sighash::Sighash};

/// A governed configuration field of the economic engine. Each field has at
/// most one staged change at a time.
#[derive(
    Clone,
    Copy,
    Debug,
    Eq,
    PartialEq,
    Ord,
    PartialOrd,
    Hash,
    Arbitrary,
    BorshDeserialize,
    BorshSerialize,
)]
pub enum GovernedField {
    Admin,
    TransactionAdmin,
    Content,
    CommissionFactor,
    CommissionAddress,
    EngineCode,
}

impl std::fmt::Display for GovernedField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GovernedField::Admin => write!(f, "admin"),
            GovernedField::TransactionAdmin => write!(f, "transaction_admin"),
            GovernedField::Content => write!(f, "content"),
            GovernedField::CommissionFactor => write!(f, "commission_factor"),
            GovernedField::CommissionAddress => write!(f, "commission_address"),
            GovernedField::EngineCode => write!(f, "engine_code"),
        }
    }
}

/// A high-level operation the admin wallet owners can authorize.
#[derive(Clone, Debug, Eq, PartialEq, Arbitrary, BorshDeserialize, BorshSerialize)]
pub enum AdminAction {
    /// Stage, or commit a previously staged, configuration change.
    Change(ChangeAction),
    /// Cancel a staged configuration change.
    Cancel(CancelAction),
    /// Forward a fund-movement instruction to the economic engine.
    Fund(FundAction),
}

impl AdminAction {
    /// Decode an admin action from canonical payload bytes (tag + body).
    pub fn decode(bytes: &[u8]) -> Result<Self, OrderParseError> {
        let (&tag, body) = bytes.split_first().ok_or(OrderParseError::EmptyPayload)?;
        let op = OpType::try_from(tag).map_err(OrderParseError::UnknownOp)?;
        match op {
            OpType::CancelChange => CancelAction::decode(body).map(AdminAction::Cancel),
            OpType::ChangeAdmin
            | OpType::ChangeTransactionAdmin
            | OpType::ChangeContent
            | OpType::ChangeCommissionFactor
            | OpType::ChangeCommissionAddress
            | OpType::UpgradeEngineCode => ChangeAction::decode(op, body).map(AdminAction::Change),
            OpType::SendCommission | OpType::TransferHolding | OpType::ReturnBalance => {
                FundAction::decode(op, body).map(AdminAction::Fund)
            }
            OpType::Deposit => Err(OrderParseError::UnsupportedOp(op)),
        }
    }
}

impl Sighash for AdminAction {
    fn op_type(&self) -> OpType {
        match self {
            AdminAction::Change(c) => c.op_type(),
            AdminAction::Cancel(c) => c.op_type(),
            AdminAction::Fund(a) => a.op_type(),
        }
    }

    fn sighash_payload(&self) -> Vec<u8> {
        match self {
            AdminAction::Change(c) => c.sighash_payload(),
            AdminAction::Cancel(c) => c.sighash_payload(),
            AdminAction::Fund(a) => a.sighash_payload(),
        }
    }
}

impl From<ChangeAction> for AdminAction {
    fn from(action: ChangeAction) -> Self {
        AdminAction::Change(action)
    }
}

impl From<CancelAction> for AdminAction {
    fn from(action: CancelAction) -> Self {
        AdminAction::Cancel(action)
    }
}

impl From<FundAction> for AdminAction {
    fn from(action: FundAction) -> Self {
        AdminAction::Fund(action)
    }
}

/// An operation the transaction wallet owners can authorize.
#[derive(Clone, Debug, Eq, PartialEq, Arbitrary, BorshDeserialize, BorshSerialize)]
pub enum TxnAction {
    /// Deposit treasury funds into a validator-staking proxy.
    Deposit(DepositAction),
}

impl TxnAction {
    /// Decode a transaction-wallet action from canonical payload bytes.
    pub fn decode(bytes: &[u8]) -> Result<Self, OrderParseError> {
        let (&tag, body) = bytes.split_first().ok_or(OrderParseError::EmptyPayload)?;
        let op = OpType::try_from(tag).map_err(OrderParseError::UnknownOp)?;
        match op {
            OpType::Deposit => DepositAction::decode(body).map(TxnAction::Deposit),
            other => Err(OrderParseError::UnsupportedOp(other)),
        }
    }
}

impl Sighash for TxnAction {
    fn op_type(&self) -> OpType {
        match self {
            TxnAction::Deposit(d) => d.op_type(),
        }
    }

    fn sighash_payload(&self) -> Vec<u8> {
        match self {
            TxnAction::Deposit(d) => d.sighash_payload(),
        }
    }
}

impl From<DepositAction> for TxnAction {
    fn from(action: DepositAction) -> Self {
        TxnAction::Deposit(action)
    }
}

/// Deserialize an action body, rejecting trailing bytes so the encoding
/// stays canonical.
pub(crate) fn decode_body<T: BorshDeserialize>(
    op: OpType,
    body: &[u8],
) -> Result<T, OrderParseError> {
    borsh::from_slice(body).map_err(|_| OrderParseError::MalformedBody(op))
}

#[cfg(test)]
mod tests {
    use stakewell_primitives::AccountAddress;

    use super::*;
    use crate::sighash::Sighash;

    #[test]
    fn test_admin_action_payload_roundtrip() {
        let actions = [
            AdminAction::Change(ChangeAction::Admin(AccountAddress::from([3; 32]))),
            AdminAction::Change(ChangeAction::CommissionFactor(450)),
            AdminAction::Cancel(CancelAction::new(GovernedField::EngineCode)),
            AdminAction::Fund(FundAction::SendCommission),
            AdminAction::Fund(FundAction::TransferHolding(TransferHoldingAction::new(
                AccountAddress::from([1; 32]),
                AccountAddress::from([2; 32]),
                1_000_000,
            ))),
        ];

        for action in actions {
            let bytes = action.encode_payload();
            let decoded = AdminAction::decode(&bytes).unwrap();
            assert_eq!(action, decoded);
        }
    }

    #[test]
    fn test_admin_action_rejects_unknown_tag() {
        assert_eq!(
            AdminAction::decode(&[0xEE]),
            Err(OrderParseError::UnknownOp(0xEE))
        );
    }

    #[test]
    fn test_admin_action_rejects_deposit_tag() {
        let deposit = TxnAction::Deposit(DepositAction::new(
            AccountAddress::from([9; 32]),
            500,
            100,
            10_000,
            100,
            5_000_000,
        ));
        let bytes = deposit.encode_payload();
        assert_eq!(
            AdminAction::decode(&bytes),
            Err(OrderParseError::UnsupportedOp(OpType::Deposit))
        );
    }

    #[test]
    fn test_txn_action_rejects_admin_tags() {
        let change = AdminAction::Change(ChangeAction::Admin(AccountAddress::from([3; 32])));
        let bytes = change.encode_payload();
        assert_eq!(
            TxnAction::decode(&bytes),
            Err(OrderParseError::UnsupportedOp(OpType::ChangeAdmin))
        );
    }

    #[test]
    fn test_decode_rejects_empty_payload() {
        assert_eq!(AdminAction::decode(&[]), Err(OrderParseError::EmptyPayload));
        assert_eq!(TxnAction::decode(&[]), Err(OrderParseError::EmptyPayload));
    }

    #[test]
    fn test_decode_rejects_trailing_bytes() {
        let action = AdminAction::Change(ChangeAction::CommissionFactor(450));
        let mut bytes = action.encode_payload();
        bytes.push(0);
        assert_eq!(
            AdminAction::decode(&bytes),
            Err(OrderParseError::MalformedBody(
                OpType::ChangeCommissionFactor
            ))
        );
    }
}
