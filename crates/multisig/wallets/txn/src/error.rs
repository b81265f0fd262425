use stakewell_multisig_common::OrderError;
use stakewell_multisig_txs::OrderParseError;
use thiserror::Error;

/// Top-level error type for the transaction wallet.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TxnWalletError {
    /// The order failed authentication or a guard check.
    #[error(transparent)]
    Order(#[from] OrderError),

    /// The message or payload could not be decoded.
    #[error(transparent)]
    Parse(#[from] OrderParseError),
}

impl TxnWalletError {
    /// Stable numeric result code surfaced on the triggering message.
    pub fn code(&self) -> u32 {
        match self {
            TxnWalletError::Order(e) => e.code(),
            TxnWalletError::Parse(_) => 41,
        }
    }
}
