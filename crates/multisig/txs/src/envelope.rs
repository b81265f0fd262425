//! Inbound message envelopes for the two authentication channels.

use arbitrary::Arbitrary;
use borsh::{BorshDeserialize, BorshSerialize};
use stakewell_crypto::threshold_signature::SignatureSet;

use crate::{errors::OrderParseError, query_id::QueryId};

/// Internal-channel message body.
///
/// Trust derives from the ledger-verified sender address, which travels at
/// the transport layer and is passed to the wallet alongside these bytes.
#[derive(Clone, Debug, Eq, PartialEq, Arbitrary, BorshSerialize, BorshDeserialize)]
pub struct InternalEnvelope {
    wallet_id: u32,
    query_id: QueryId,
    payload: Vec<u8>,
}

impl InternalEnvelope {
    pub fn new(wallet_id: u32, query_id: QueryId, payload: Vec<u8>) -> Self {
        Self {
            wallet_id,
            query_id,
            payload,
        }
    }

    pub fn wallet_id(&self) -> u32 {
        self.wallet_id
    }

    pub fn query_id(&self) -> QueryId {
        self.query_id
    }

    pub fn payload(&self) -> &[u8] {
        &self.payload
    }

    pub fn encode(&self) -> Vec<u8> {
        borsh::to_vec(self).expect("borsh: vec write")
    }

    pub fn decode(bytes: &[u8]) -> Result<Self, OrderParseError> {
        borsh::from_slice(bytes).map_err(|_| OrderParseError::MalformedEnvelope)
    }
}

/// External-channel order bundle.
///
/// Self-authenticating: carries the full signature set over the order
/// sighash, so no trusted sender identity is required.
#[derive(Clone, Debug, Eq, PartialEq, Arbitrary, BorshSerialize, BorshDeserialize)]
pub struct ExternalEnvelope {
    query_id: QueryId,
    signatures: SignatureSet,
    payload: Vec<u8>,
}

impl ExternalEnvelope {
    pub fn new(query_id: QueryId, signatures: SignatureSet, payload: Vec<u8>) -> Self {
        Self {
            query_id,
            signatures,
            payload,
        }
    }

    pub fn query_id(&self) -> QueryId {
        self.query_id
    }

    pub fn signatures(&self) -> &SignatureSet {
        &self.signatures
    }

    pub fn payload(&self) -> &[u8] {
        &self.payload
    }

    pub fn encode(&self) -> Vec<u8> {
        borsh::to_vec(self).expect("borsh: vec write")
    }

    pub fn decode(bytes: &[u8]) -> Result<Self, OrderParseError> {
        borsh::from_slice(bytes).map_err(|_| OrderParseError::MalformedEnvelope)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_internal_envelope_roundtrip() {
        let env = InternalEnvelope::new(7, QueryId::pack(7, 1000), vec![0x20]);
        let decoded = InternalEnvelope::decode(&env.encode()).unwrap();
        assert_eq!(env, decoded);
    }

    #[test]
    fn test_external_envelope_roundtrip() {
        let env = ExternalEnvelope::new(QueryId::pack(7, 1000), SignatureSet::empty(), vec![0x20]);
        let decoded = ExternalEnvelope::decode(&env.encode()).unwrap();
        assert_eq!(env, decoded);
    }

    #[test]
    fn test_decode_rejects_garbage() {
        assert_eq!(
            InternalEnvelope::decode(&[1, 2, 3]),
            Err(OrderParseError::MalformedEnvelope)
        );
        assert_eq!(
            ExternalEnvelope::decode(&[1, 2, 3]),
            Err(OrderParseError::MalformedEnvelope)
        );
    }
}
