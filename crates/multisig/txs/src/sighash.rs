//! Canonical order hashing.

use sha2::{Digest, Sha256};
use stakewell_primitives::Buf32;

use crate::{constants::OpType, query_id::QueryId};

/// Domain separation prefix for order sighashes.
const SIGHASH_TAG: &[u8] = b"stakewell-order-v1";

/// Types that can produce the canonical preimage owners sign.
///
/// The sighash commits to the action tag, the action body and the query id,
/// so a signature is only ever valid for one exact order instance.
pub trait Sighash {
    /// The action tag of this payload.
    fn op_type(&self) -> OpType;

    /// The canonical body bytes of this payload, excluding the tag.
    fn sighash_payload(&self) -> Vec<u8>;

    /// Canonical payload cell bytes: the action tag followed by the body.
    fn encode_payload(&self) -> Vec<u8> {
        let body = self.sighash_payload();
        let mut out = Vec::with_capacity(1 + body.len());
        out.push(u8::from(self.op_type()));
        out.extend_from_slice(&body);
        out
    }

    /// Compute the 32-byte hash that owners sign for this order.
    fn compute_sighash(&self, query_id: QueryId) -> Buf32 {
        let mut hasher = Sha256::new();
        hasher.update(SIGHASH_TAG);
        hasher.update([u8::from(self.op_type())]);
        hasher.update(self.sighash_payload());
        hasher.update(query_id.as_u64().to_be_bytes());
        Buf32::new(hasher.finalize().into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Probe(OpType, Vec<u8>);

    impl Sighash for Probe {
        fn op_type(&self) -> OpType {
            self.0
        }

        fn sighash_payload(&self) -> Vec<u8> {
            self.1.clone()
        }
    }

    #[test]
    fn test_sighash_binds_query_id() {
        let probe = Probe(OpType::SendCommission, vec![]);
        let a = probe.compute_sighash(QueryId::pack(1, 100));
        let b = probe.compute_sighash(QueryId::pack(1, 101));
        assert_ne!(a, b);
    }

    #[test]
    fn test_sighash_binds_op_type() {
        let query_id = QueryId::pack(1, 100);
        let a = Probe(OpType::SendCommission, vec![]).compute_sighash(query_id);
        let b = Probe(OpType::ReturnBalance, vec![]).compute_sighash(query_id);
        assert_ne!(a, b);
    }

    #[test]
    fn test_sighash_binds_payload() {
        let query_id = QueryId::pack(1, 100);
        let a = Probe(OpType::ChangeContent, vec![1, 2, 3]).compute_sighash(query_id);
        let b = Probe(OpType::ChangeContent, vec![1, 2, 4]).compute_sighash(query_id);
        assert_ne!(a, b);
    }
}
