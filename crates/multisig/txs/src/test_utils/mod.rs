//! Helpers for constructing signed orders in tests.

use ed25519_dalek::{Signer, SigningKey};
use stakewell_crypto::{
    keys::OwnerKey,
    threshold_signature::{IndexedSignature, SignatureSet},
};
use stakewell_primitives::Buf32;

use crate::{
    envelope::{ExternalEnvelope, InternalEnvelope},
    query_id::QueryId,
    sighash::Sighash,
};

/// Deterministic signing keys for `count` owners, indexed by position.
pub fn signing_keys(count: usize) -> Vec<SigningKey> {
    (0..count)
        .map(|i| SigningKey::from_bytes(&[(i as u8) + 1; 32]))
        .collect()
}

/// Public owner keys corresponding to `keys`.
pub fn owner_keys(keys: &[SigningKey]) -> Vec<OwnerKey> {
    keys.iter()
        .map(|sk| OwnerKey::from(sk.verifying_key()))
        .collect()
}

/// Creates a SignatureSet for any order sighash.
///
/// # Arguments
/// * `privkeys` - Signing keys of all owners in the threshold config
/// * `signer_indices` - Indices of owners participating in this signature
/// * `sighash` - The message hash to sign
pub fn create_signature_set(
    privkeys: &[SigningKey],
    signer_indices: &[u8],
    sighash: Buf32,
) -> SignatureSet {
    let signatures: Vec<IndexedSignature> = signer_indices
        .iter()
        .map(|&index| {
            let sig = privkeys[index as usize].sign(sighash.as_slice());
            IndexedSignature::new(index, sig.to_bytes().into())
        })
        .collect();

    SignatureSet::new(signatures).expect("valid signature set")
}

/// Builds the encoded external-channel bundle for `action`, signed by the
/// given subset of owners.
pub fn create_external_order<A: Sighash>(
    privkeys: &[SigningKey],
    signer_indices: &[u8],
    action: &A,
    query_id: QueryId,
) -> Vec<u8> {
    let sighash = action.compute_sighash(query_id);
    let signatures = create_signature_set(privkeys, signer_indices, sighash);
    ExternalEnvelope::new(query_id, signatures, action.encode_payload()).encode()
}

/// Builds the encoded internal-channel message body for `action`.
pub fn create_internal_order<A: Sighash>(
    wallet_id: u32,
    query_id: QueryId,
    action: &A,
) -> Vec<u8> {
    InternalEnvelope::new(wallet_id, query_id, action.encode_payload()).encode()
}

#[cfg(test)]
mod tests {
    use std::num::NonZero;

    use stakewell_crypto::threshold_signature::{verify_threshold_signatures, ThresholdConfig};

    use super::*;
    use crate::actions::{AdminAction, FundAction};

    #[test]
    fn test_create_signature_set() {
        let privkeys = signing_keys(3);
        let config =
            ThresholdConfig::try_new(owner_keys(&privkeys), NonZero::new(2).unwrap()).unwrap();

        // Create signer indices (signers 0 and 2)
        let signer_indices = [0u8, 2u8];

        let action = AdminAction::Fund(FundAction::SendCommission);
        let sighash = action.compute_sighash(QueryId::pack(1, 2000));

        let signature_set = create_signature_set(&privkeys, &signer_indices, sighash);

        assert_eq!(signature_set.len(), 2);
        let indices: Vec<u8> = signature_set.indices().collect();
        assert_eq!(indices, vec![0, 2]);

        let res =
            verify_threshold_signatures(&config, signature_set.signatures(), sighash.as_bytes());
        assert!(res.is_ok());
    }

    #[test]
    fn test_external_order_roundtrip() {
        let privkeys = signing_keys(3);
        let action = AdminAction::Fund(FundAction::ReturnBalance);
        let query_id = QueryId::pack(1, 2000);

        let bytes = create_external_order(&privkeys, &[0, 1], &action, query_id);
        let env = ExternalEnvelope::decode(&bytes).unwrap();

        assert_eq!(env.query_id(), query_id);
        assert_eq!(env.signatures().len(), 2);
        assert_eq!(AdminAction::decode(env.payload()).unwrap(), action);
    }
}
