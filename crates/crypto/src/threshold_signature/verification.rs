//! Signature verification for threshold signature sets.

use super::{IndexedSignature, SignatureSet, ThresholdConfig, ThresholdSignatureError};

mod ed25519;

/// Verifies a set of ed25519 signatures against a threshold configuration.
///
/// # Verification Steps
///
/// 1. Construct and validate a [`SignatureSet`] (checks for duplicate signer
///    indices)
/// 2. Check that the number of signatures meets the threshold
/// 3. For each signature, verify that:
///    - The signer index is within bounds
///    - The ed25519 signature is valid for the corresponding public key
///
/// A signature made by any key other than the one registered at its claimed
/// index cannot verify, so `k` entries from fewer than `k` distinct owners
/// always fail before the threshold count is honored.
///
/// # Returns
///
/// * `Ok(())` if all signatures are valid and threshold is met
/// * `Err(ThresholdSignatureError)` otherwise
pub fn verify_threshold_signatures(
    config: &ThresholdConfig,
    signatures: &[IndexedSignature],
    message_hash: &[u8; 32],
) -> Result<(), ThresholdSignatureError> {
    // Construct and validate SignatureSet (checks for duplicates)
    let signature_set = SignatureSet::new(signatures.to_vec())?;

    // Check threshold is met
    if signature_set.len() < config.threshold() as usize {
        return Err(ThresholdSignatureError::InsufficientSignatures {
            provided: signature_set.len(),
            required: config.threshold() as usize,
        });
    }

    // Delegate to ed25519-specific verification
    ed25519::verify_ed25519_signatures(config, &signature_set, message_hash)
}

#[cfg(test)]
mod tests {
    use std::num::NonZero;

    use ed25519_dalek::{Signer, SigningKey};

    use super::*;
    use crate::keys::OwnerKey;

    fn generate_keypair(seed: u8) -> (SigningKey, OwnerKey) {
        let sk = SigningKey::from_bytes(&[seed; 32]);
        let pk = OwnerKey::from(sk.verifying_key());
        (sk, pk)
    }

    fn sign(sk: &SigningKey, message_hash: &[u8; 32]) -> stakewell_primitives::Buf64 {
        sk.sign(message_hash).to_bytes().into()
    }

    #[test]
    fn test_verify_threshold_signatures_success() {
        let (sk1, pk1) = generate_keypair(1);
        let (sk2, pk2) = generate_keypair(2);
        let (_sk3, pk3) = generate_keypair(3);

        let config = ThresholdConfig::try_new(vec![pk1, pk2, pk3], NonZero::new(2).unwrap())
            .unwrap();

        let message_hash = [0xAB; 32];

        // Sign with keys 0 and 1
        let signatures = vec![
            IndexedSignature::new(0, sign(&sk1, &message_hash)),
            IndexedSignature::new(1, sign(&sk2, &message_hash)),
        ];

        let result = verify_threshold_signatures(&config, &signatures, &message_hash);
        assert!(result.is_ok());
    }

    #[test]
    fn test_verify_insufficient_signatures() {
        let (_sk1, pk1) = generate_keypair(1);
        let (sk2, pk2) = generate_keypair(2);
        let (_sk3, pk3) = generate_keypair(3);

        let config = ThresholdConfig::try_new(vec![pk1, pk2, pk3], NonZero::new(2).unwrap())
            .unwrap();

        let message_hash = [0xAB; 32];

        // Only sign with one key
        let signatures = vec![IndexedSignature::new(1, sign(&sk2, &message_hash))];

        let result = verify_threshold_signatures(&config, &signatures, &message_hash);
        assert!(matches!(
            result,
            Err(ThresholdSignatureError::InsufficientSignatures {
                provided: 1,
                required: 2,
            })
        ));
    }

    #[test]
    fn test_verify_invalid_signature() {
        let (sk1, pk1) = generate_keypair(1);
        let (sk2, pk2) = generate_keypair(2);

        let config = ThresholdConfig::try_new(vec![pk1, pk2], NonZero::new(2).unwrap()).unwrap();

        let message_hash = [0xAB; 32];
        let wrong_message_hash = [0xCD; 32];

        let signatures = vec![
            IndexedSignature::new(0, sign(&sk1, &message_hash)),
            IndexedSignature::new(1, sign(&sk2, &wrong_message_hash)),
        ];

        let result = verify_threshold_signatures(&config, &signatures, &message_hash);
        assert!(matches!(
            result,
            Err(ThresholdSignatureError::InvalidSignature { index: 1 })
        ));
    }

    #[test]
    fn test_verify_wrong_signer() {
        let (sk1, pk1) = generate_keypair(1);
        let (_sk2, pk2) = generate_keypair(2);

        let config = ThresholdConfig::try_new(vec![pk1, pk2], NonZero::new(2).unwrap()).unwrap();

        let message_hash = [0xAB; 32];

        // Both signatures from sk1, but one claims to be from index 1
        let signatures = vec![
            IndexedSignature::new(0, sign(&sk1, &message_hash)),
            IndexedSignature::new(1, sign(&sk1, &message_hash)),
        ];

        let result = verify_threshold_signatures(&config, &signatures, &message_hash);
        assert!(matches!(
            result,
            Err(ThresholdSignatureError::InvalidSignature { index: 1 })
        ));
    }

    #[test]
    fn test_verify_index_out_of_bounds() {
        let (sk1, pk1) = generate_keypair(1);
        let (sk2, pk2) = generate_keypair(2);

        let config = ThresholdConfig::try_new(vec![pk1, pk2], NonZero::new(2).unwrap()).unwrap();

        let message_hash = [0xAB; 32];

        let signatures = vec![
            IndexedSignature::new(0, sign(&sk1, &message_hash)),
            IndexedSignature::new(99, sign(&sk2, &message_hash)), // Out of bounds
        ];

        let result = verify_threshold_signatures(&config, &signatures, &message_hash);
        assert!(matches!(
            result,
            Err(ThresholdSignatureError::SignerIndexOutOfBounds { index: 99, .. })
        ));
    }

    #[test]
    fn test_verify_duplicate_signer_rejected() {
        let (sk1, pk1) = generate_keypair(1);
        let (_sk2, pk2) = generate_keypair(2);

        let config = ThresholdConfig::try_new(vec![pk1, pk2], NonZero::new(2).unwrap()).unwrap();

        let message_hash = [0xAB; 32];

        // Same signer index twice (should fail)
        let signatures = vec![
            IndexedSignature::new(0, sign(&sk1, &message_hash)),
            IndexedSignature::new(0, sign(&sk1, &message_hash)),
        ];

        let result = verify_threshold_signatures(&config, &signatures, &message_hash);
        assert!(matches!(
            result,
            Err(ThresholdSignatureError::DuplicateSignerIndex(0))
        ));
    }

    #[test]
    fn test_verify_exact_threshold_subsets() {
        // Every 2-subset of a 2-of-3 config must authenticate; every
        // 1-subset must not.
        let pairs: Vec<_> = (1..=3).map(generate_keypair).collect();
        let keys: Vec<_> = pairs.iter().map(|(_, pk)| *pk).collect();
        let config = ThresholdConfig::try_new(keys, NonZero::new(2).unwrap()).unwrap();

        let message_hash = [0x11; 32];

        for i in 0..3u8 {
            for j in 0..3u8 {
                if i == j {
                    continue;
                }
                let signatures = vec![
                    IndexedSignature::new(i, sign(&pairs[i as usize].0, &message_hash)),
                    IndexedSignature::new(j, sign(&pairs[j as usize].0, &message_hash)),
                ];
                assert!(
                    verify_threshold_signatures(&config, &signatures, &message_hash).is_ok(),
                    "subset ({i}, {j}) should authenticate"
                );
            }

            let singleton = vec![IndexedSignature::new(
                i,
                sign(&pairs[i as usize].0, &message_hash),
            )];
            assert!(
                verify_threshold_signatures(&config, &singleton, &message_hash).is_err(),
                "singleton {i} should not authenticate"
            );
        }
    }
}
