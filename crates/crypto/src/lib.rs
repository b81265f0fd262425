//! Cryptographic primitives for the Stakewell wallet contracts.
//!
//! The main export is the indexed threshold-signature machinery used to
//! authenticate externally-submitted order bundles against a fixed owner
//! key set.

pub mod keys;
pub mod threshold_signature;
