//! Error types for threshold signature operations.

use thiserror::Error;

/// Errors that can occur during threshold signature operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ThresholdSignatureError {
    /// Not enough signatures to meet the threshold.
    #[error("insufficient signatures: provided {provided}, required {required}")]
    InsufficientSignatures { provided: usize, required: usize },

    /// Invalid public key data.
    #[error("invalid public key at index {index}: {reason}")]
    InvalidPublicKey { index: usize, reason: String },

    /// Invalid threshold value.
    #[error("invalid threshold: {threshold} exceeds total keys {total_keys}")]
    InvalidThreshold { threshold: u8, total_keys: usize },

    /// The keys list is empty.
    #[error("keys cannot be empty")]
    EmptyKeys,

    /// More keys than a `u8` signer index can address.
    #[error("too many signers: {count} exceeds maximum 256")]
    TooManySigners { count: usize },

    /// The same key appears twice in the configuration.
    #[error("duplicate member key in configuration")]
    DuplicateMember,

    /// Signature verification failed.
    #[error("invalid signature at index {index}")]
    InvalidSignature { index: u8 },

    /// Duplicate signer index in signature set.
    #[error("duplicate signer index: {0}")]
    DuplicateSignerIndex(u8),

    /// Signer index out of bounds.
    #[error("signer index {index} out of bounds (max: {max})")]
    SignerIndexOutOfBounds { index: u8, max: usize },
}
