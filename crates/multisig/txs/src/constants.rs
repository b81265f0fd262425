use std::fmt;

/// Order action types across both wallet variants.
///
/// This enum represents all valid action tags carried in an order payload.
/// Each variant corresponds to a specific operation with its associated u8
/// value. The admin wallet accepts the `0x0_`/`0x1_`/`0x2_` range, the
/// transaction wallet accepts `0x30`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum OpType {
    /// Cancel a staged configuration change.
    CancelChange = 0x00,
    /// Stage or commit a new admin address.
    ChangeAdmin = 0x10,
    /// Stage or commit a new transaction-admin address.
    ChangeTransactionAdmin = 0x11,
    /// Stage or commit new content metadata.
    ChangeContent = 0x12,
    /// Stage or commit a new commission factor.
    ChangeCommissionFactor = 0x13,
    /// Stage or commit a new commission address.
    ChangeCommissionAddress = 0x14,
    /// Stage or commit new economic-engine code.
    UpgradeEngineCode = 0x15,
    /// Instruct the economic engine to pay out accumulated commission.
    SendCommission = 0x20,
    /// Move a token holding between accounts.
    TransferHolding = 0x21,
    /// Return the remaining engine balance.
    ReturnBalance = 0x22,
    /// Deposit treasury funds into a validator-staking proxy.
    Deposit = 0x30,
}

impl From<OpType> for u8 {
    fn from(op: OpType) -> Self {
        op as u8
    }
}

impl TryFrom<u8> for OpType {
    type Error = u8;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0x00 => Ok(OpType::CancelChange),
            0x10 => Ok(OpType::ChangeAdmin),
            0x11 => Ok(OpType::ChangeTransactionAdmin),
            0x12 => Ok(OpType::ChangeContent),
            0x13 => Ok(OpType::ChangeCommissionFactor),
            0x14 => Ok(OpType::ChangeCommissionAddress),
            0x15 => Ok(OpType::UpgradeEngineCode),
            0x20 => Ok(OpType::SendCommission),
            0x21 => Ok(OpType::TransferHolding),
            0x22 => Ok(OpType::ReturnBalance),
            0x30 => Ok(OpType::Deposit),
            invalid => Err(invalid),
        }
    }
}

impl fmt::Display for OpType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OpType::CancelChange => write!(f, "CancelChange"),
            OpType::ChangeAdmin => write!(f, "ChangeAdmin"),
            OpType::ChangeTransactionAdmin => write!(f, "ChangeTransactionAdmin"),
            OpType::ChangeContent => write!(f, "ChangeContent"),
            OpType::ChangeCommissionFactor => write!(f, "ChangeCommissionFactor"),
            OpType::ChangeCommissionAddress => write!(f, "ChangeCommissionAddress"),
            OpType::UpgradeEngineCode => write!(f, "UpgradeEngineCode"),
            OpType::SendCommission => write!(f, "SendCommission"),
            OpType::TransferHolding => write!(f, "TransferHolding"),
            OpType::ReturnBalance => write!(f, "ReturnBalance"),
            OpType::Deposit => write!(f, "Deposit"),
        }
    }
}
