//! Configuration types for threshold signing.

use std::{collections::HashSet, num::NonZero};

use arbitrary::Arbitrary;
use borsh::{BorshDeserialize, BorshSerialize};
use serde::{Deserialize, Serialize};

use super::ThresholdSignatureError;
use crate::keys::OwnerKey;

/// Maximum number of signers allowed in a threshold configuration.
///
/// This limit is derived from the signer index being a `u8` (0-255),
/// which allows for at most 256 unique signers.
pub const MAX_SIGNERS: usize = 256;

/// Configuration for a threshold signature authority.
///
/// Defines who can sign (`keys`) and how many must sign (`threshold`).
/// The key set is fixed for the lifetime of a wallet; there is no update
/// path. The threshold is stored as `NonZero<u8>` to enforce at the type
/// level that it can never be zero.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, BorshSerialize, BorshDeserialize)]
pub struct ThresholdConfig {
    /// Public keys of all authorized signers, ordered by signer index.
    keys: Vec<OwnerKey>,
    /// Minimum number of signatures required (always >= 1).
    threshold: NonZero<u8>,
}

impl ThresholdConfig {
    /// Create a new threshold configuration.
    ///
    /// # Errors
    ///
    /// Returns `ThresholdSignatureError` if:
    /// - `EmptyKeys`: The keys list is empty
    /// - `TooManySigners`: More keys than a `u8` index can address
    /// - `DuplicateMember`: The same key appears at two indices
    /// - `InvalidThreshold`: The threshold exceeds the total number of keys
    pub fn try_new(
        keys: Vec<OwnerKey>,
        threshold: NonZero<u8>,
    ) -> Result<Self, ThresholdSignatureError> {
        if keys.is_empty() {
            return Err(ThresholdSignatureError::EmptyKeys);
        }

        if keys.len() > MAX_SIGNERS {
            return Err(ThresholdSignatureError::TooManySigners { count: keys.len() });
        }

        let distinct: HashSet<&OwnerKey> = keys.iter().collect();
        if distinct.len() != keys.len() {
            return Err(ThresholdSignatureError::DuplicateMember);
        }

        if threshold.get() as usize > keys.len() {
            return Err(ThresholdSignatureError::InvalidThreshold {
                threshold: threshold.get(),
                total_keys: keys.len(),
            });
        }

        Ok(Self { keys, threshold })
    }

    /// Get the public keys.
    pub fn keys(&self) -> &[OwnerKey] {
        &self.keys
    }

    /// Get the threshold value.
    pub fn threshold(&self) -> u8 {
        self.threshold.get()
    }

    /// Get the number of authorized signers.
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    /// Check if there are no authorized signers.
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }
}

impl<'a> Arbitrary<'a> for ThresholdConfig {
    fn arbitrary(u: &mut arbitrary::Unstructured<'a>) -> arbitrary::Result<Self> {
        // Generate between 2 and 20 distinct keys; retry on the (unlikely)
        // collision by perturbing the first byte with the index.
        let keys_count = u.int_in_range(2..=20)?;
        let mut keys = Vec::with_capacity(keys_count);
        for i in 0..keys_count {
            let mut key: stakewell_primitives::Buf32 = Arbitrary::arbitrary(u)?;
            key.0[0] = i as u8;
            keys.push(OwnerKey::new(key));
        }

        let threshold_u8 = u.int_in_range(1..=keys_count as u8)?;
        let threshold = NonZero::new(threshold_u8).expect("threshold is always >= 1");

        ThresholdConfig::try_new(keys, threshold).map_err(|_| arbitrary::Error::IncorrectFormat)
    }
}
