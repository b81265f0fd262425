//! Order authentication failures.

use stakewell_crypto::threshold_signature::ThresholdSignatureError;
use stakewell_multisig_txs::QueryId;
use stakewell_primitives::AccountAddress;
use thiserror::Error;

use crate::flood::FLOOD_MAX;

/// Everything that can abort an order before it reaches the dispatcher.
///
/// Every variant maps to a stable numeric result code (see [`Self::code`]);
/// the transport surfaces that code on the triggering message.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OrderError {
    /// The order was built for a different wallet id.
    #[error("wallet id mismatch: order carries {got}, this wallet is {expected}")]
    WalletIdMismatch { got: u32, expected: u32 },

    /// The order deadline is already in the past.
    #[error("stale deadline {deadline}, now {now}")]
    StaleDeadline { deadline: u32, now: u32 },

    /// The order deadline lies unreasonably far in the future.
    #[error("deadline {deadline} exceeds horizon of {horizon}s past {now}")]
    DeadlineTooFar {
        deadline: u32,
        now: u32,
        horizon: u32,
    },

    /// The query id was already executed; executing twice is impossible.
    #[error("query {0} has already been completed")]
    AlreadyCompleted(QueryId),

    /// The internal-channel sender is not a configured owner.
    #[error("sender address {0} not found in owner set")]
    SenderAddressNotFound(AccountAddress),

    /// This owner already confirmed this query; one owner cannot count
    /// twice toward quorum.
    #[error("owner {index} already signed this query")]
    AlreadySigned { index: u8 },

    /// A message for this query carries a different payload than the one
    /// being accumulated.
    #[error("payload does not match the confirmation in flight for query {0}")]
    PayloadMismatch(QueryId),

    /// The owner has too many outstanding partial confirmations.
    #[error("owner {index} exceeds flood limit of {max} outstanding confirmations")]
    FloodLimitExceeded { index: u8, max: u8 },

    /// External-channel signature set failed verification.
    #[error(transparent)]
    ThresholdSignature(#[from] ThresholdSignatureError),
}

impl OrderError {
    /// Stable numeric result code surfaced on the triggering message.
    pub fn code(&self) -> u32 {
        match self {
            OrderError::StaleDeadline { .. } | OrderError::DeadlineTooFar { .. } => 31,
            OrderError::AlreadyCompleted(_) => 32,
            OrderError::SenderAddressNotFound(_) => 33,
            OrderError::AlreadySigned { .. } => 34,
            OrderError::PayloadMismatch(_) => 35,
            OrderError::FloodLimitExceeded { .. } => 36,
            OrderError::ThresholdSignature(e) => match e {
                ThresholdSignatureError::InsufficientSignatures { .. } => 38,
                ThresholdSignatureError::DuplicateSignerIndex(_)
                | ThresholdSignatureError::SignerIndexOutOfBounds { .. } => 39,
                _ => 37,
            },
            OrderError::WalletIdMismatch { .. } => 40,
        }
    }
}

/// Convenience constructor for the flood-limit failure.
pub(crate) fn flood_limit_exceeded(index: u8) -> OrderError {
    OrderError::FloodLimitExceeded {
        index,
        max: FLOOD_MAX,
    }
}
