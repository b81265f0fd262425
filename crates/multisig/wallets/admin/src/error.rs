use stakewell_multisig_common::OrderError;
use stakewell_multisig_txs::{actions::GovernedField, OrderParseError};
use thiserror::Error;

/// Top-level error type for the admin wallet.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AdminWalletError {
    /// The order failed authentication or a guard check.
    #[error(transparent)]
    Order(#[from] OrderError),

    /// The message or payload could not be decoded.
    #[error(transparent)]
    Parse(#[from] OrderParseError),

    /// A commit was attempted before the governance cool-down elapsed.
    #[error(
        "update delay has not passed for {field}: staged at {staged_at}, now {now}, required \
         {required}s"
    )]
    UpdateDelayNotElapsed {
        field: GovernedField,
        staged_at: u32,
        now: u32,
        required: u32,
    },

    /// A cancel targeted a field with nothing staged.
    #[error("nothing staged for field {0}")]
    NothingStaged(GovernedField),
}

impl AdminWalletError {
    /// Stable numeric result code surfaced on the triggering message.
    pub fn code(&self) -> u32 {
        match self {
            AdminWalletError::Order(e) => e.code(),
            AdminWalletError::Parse(_) => 41,
            AdminWalletError::UpdateDelayNotElapsed { .. } => 42,
            AdminWalletError::NothingStaged(_) => 43,
        }
    }
}
