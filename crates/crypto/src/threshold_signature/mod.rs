//! Ed25519 signature set for threshold signatures (M-of-N).
//!
//! This module provides types and functions for verifying a set of
//! ed25519 signatures against a threshold configuration. Used by both
//! wallet variants to authenticate externally-submitted order bundles.

mod config;
mod errors;
mod signature;
mod verification;

pub use config::{ThresholdConfig, MAX_SIGNERS};
pub use errors::ThresholdSignatureError;
pub use signature::{IndexedSignature, SignatureSet};
pub use verification::verify_threshold_signatures;
