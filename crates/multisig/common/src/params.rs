//! Wallet configuration parameters.

use std::num::NonZero;

use serde::{Deserialize, Serialize};
use stakewell_crypto::threshold_signature::ThresholdSignatureError;
use stakewell_primitives::AccountAddress;
use thiserror::Error;

use crate::owners::{Owner, OwnerSet, OwnerSetError};

/// Default bound on how far in the future an order deadline may lie.
///
/// Orders whose deadline is further out than this are rejected outright, so
/// a signed bundle cannot be hoarded indefinitely before submission.
pub const DEFAULT_DEADLINE_HORIZON_SECS: u32 = 64 * 60 * 60;

/// Static configuration shared by both wallet variants, fixed at deploy.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MultisigParams {
    /// The owner table, ordered by signer index.
    pub owners: Vec<Owner>,

    /// How many distinct owners must confirm an order (k of n).
    pub threshold: NonZero<u8>,

    /// Id of this wallet; orders built for another wallet are rejected.
    pub wallet_id: u32,

    /// Recipient of outbound messages: the economic engine (admin variant)
    /// or the treasury (transaction variant).
    pub recipient: AccountAddress,

    /// Upper bound on how far in the future an order deadline may lie.
    pub deadline_horizon_secs: u32,
}

impl MultisigParams {
    pub fn new(
        owners: Vec<Owner>,
        threshold: NonZero<u8>,
        wallet_id: u32,
        recipient: AccountAddress,
    ) -> Self {
        Self {
            owners,
            threshold,
            wallet_id,
            recipient,
            deadline_horizon_secs: DEFAULT_DEADLINE_HORIZON_SECS,
        }
    }

    /// Validate the owner table.
    pub fn owner_set(&self) -> Result<OwnerSet, OwnerSetError> {
        OwnerSet::try_new(self.owners.clone())
    }
}

/// Errors raised when wallet parameters fail validation at construction.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WalletConfigError {
    /// The owner table is malformed.
    #[error("invalid owner set: {0}")]
    OwnerSet(#[from] OwnerSetError),

    /// The threshold does not fit the owner table.
    #[error("invalid threshold config: {0}")]
    Threshold(#[from] ThresholdSignatureError),
}
