//! Ed25519-specific signature verification implementation.

use ed25519_dalek::Signature;

use crate::threshold_signature::{SignatureSet, ThresholdConfig, ThresholdSignatureError};

/// Verifies each ed25519 signature in the set against the corresponding
/// public key.
///
/// It assumes the SignatureSet has already been validated for duplicates.
pub(super) fn verify_ed25519_signatures(
    config: &ThresholdConfig,
    signatures: &SignatureSet,
    message_hash: &[u8; 32],
) -> Result<(), ThresholdSignatureError> {
    for indexed_sig in signatures.signatures() {
        // Check index is in bounds
        let index = indexed_sig.index() as usize;
        if index >= config.keys().len() {
            return Err(ThresholdSignatureError::SignerIndexOutOfBounds {
                index: indexed_sig.index(),
                max: config.keys().len(),
            });
        }

        // Parse the registered key for this slot
        let verifying_key = config.keys()[index].to_verifying_key().map_err(|e| {
            ThresholdSignatureError::InvalidPublicKey {
                index,
                reason: e.to_string(),
            }
        })?;

        let signature = Signature::from_bytes(indexed_sig.signature().as_bytes());

        // verify_strict rejects the malleable/small-order edge cases that
        // plain verify accepts.
        verifying_key
            .verify_strict(message_hash, &signature)
            .map_err(|_| ThresholdSignatureError::InvalidSignature {
                index: indexed_sig.index(),
            })?;
    }

    Ok(())
}
