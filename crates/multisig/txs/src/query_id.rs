//! Query id packing.

use std::fmt;

use arbitrary::Arbitrary;
use borsh::{BorshDeserialize, BorshSerialize};

/// Identifier of one order: the owning wallet id in the high 32 bits and the
/// expiry deadline (unix seconds) in the low 32 bits.
///
/// An order is referenced by its query id for its whole lifecycle:
/// confirmation accumulation, replay protection and bounce correlation.
#[derive(
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Arbitrary,
    BorshSerialize,
    BorshDeserialize,
)]
pub struct QueryId(u64);

impl QueryId {
    /// Pack a wallet id and a deadline into a query id.
    pub fn pack(wallet_id: u32, deadline: u32) -> Self {
        Self(((wallet_id as u64) << 32) | deadline as u64)
    }

    /// The wallet id this order was built for.
    pub fn wallet_id(&self) -> u32 {
        (self.0 >> 32) as u32
    }

    /// Unix timestamp after which the order is no longer valid.
    pub fn deadline(&self) -> u32 {
        self.0 as u32
    }

    pub fn as_u64(&self) -> u64 {
        self.0
    }
}

impl From<u64> for QueryId {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

impl From<QueryId> for u64 {
    fn from(value: QueryId) -> Self {
        value.0
    }
}

impl fmt::Debug for QueryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "QueryId(wallet={}, deadline={})",
            self.wallet_id(),
            self.deadline()
        )
    }
}

impl fmt::Display for QueryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#018x}", self.0)
    }
}
