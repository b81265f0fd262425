//! Owner key type.

use std::fmt;

use arbitrary::Arbitrary;
use borsh::{BorshDeserialize, BorshSerialize};
use ed25519_dalek::{SignatureError, VerifyingKey};
use serde::{Deserialize, Serialize};
use stakewell_primitives::Buf32;

/// Ed25519 public key of one wallet owner.
///
/// Stored as raw bytes; point validity is checked when the key is used for
/// verification, not at construction, so configs deserialized from untrusted
/// sources fail at signature-check time rather than load time.
#[derive(
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Arbitrary,
    BorshSerialize,
    BorshDeserialize,
    Serialize,
    Deserialize,
)]
pub struct OwnerKey(Buf32);

impl OwnerKey {
    pub fn new(inner: Buf32) -> Self {
        Self(inner)
    }

    pub fn inner(&self) -> &Buf32 {
        &self.0
    }

    /// Parse into a dalek verifying key, checking that the bytes encode a
    /// valid curve point.
    pub fn to_verifying_key(&self) -> Result<VerifyingKey, SignatureError> {
        VerifyingKey::from_bytes(self.0.as_bytes())
    }
}

impl From<VerifyingKey> for OwnerKey {
    fn from(key: VerifyingKey) -> Self {
        Self(Buf32::new(key.to_bytes()))
    }
}

impl From<Buf32> for OwnerKey {
    fn from(value: Buf32) -> Self {
        Self(value)
    }
}

impl fmt::Debug for OwnerKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.0, f)
    }
}

impl fmt::Display for OwnerKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}
