//! Address-quorum accumulator for the internal channel.

use std::collections::BTreeMap;

use bitvec::{order::Lsb0, vec::BitVec};
use borsh::{BorshDeserialize, BorshSerialize};
use stakewell_multisig_txs::QueryId;
use stakewell_primitives::Buf32;

use crate::errors::OrderError;

/// The in-flight confirmation state of one order: the sighash every
/// confirmation must match and the mask of owner indices that have
/// confirmed so far.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Confirmation {
    sighash: Buf32,
    mask: BitVec<u8, Lsb0>,
}

impl Confirmation {
    fn new(sighash: Buf32, owners_len: usize) -> Self {
        Self {
            sighash,
            mask: BitVec::repeat(false, owners_len),
        }
    }

    pub fn sighash(&self) -> &Buf32 {
        &self.sighash
    }

    /// Number of owners that have confirmed.
    pub fn count(&self) -> u8 {
        self.mask.count_ones() as u8
    }

    /// Indices of owners that have confirmed.
    pub fn contributors(&self) -> Vec<u8> {
        self.mask.iter_ones().map(|i| i as u8).collect()
    }

    fn is_set(&self, index: u8) -> bool {
        self.mask
            .get(index as usize)
            .map(|b| *b)
            .unwrap_or(false)
    }

    fn set(&mut self, index: u8) {
        if let Some(mut bit) = self.mask.get_mut(index as usize) {
            *bit = true;
        }
    }
}

impl BorshSerialize for Confirmation {
    fn serialize<W: std::io::Write>(&self, writer: &mut W) -> std::io::Result<()> {
        self.sighash.serialize(writer)?;
        (self.mask.len() as u32).serialize(writer)?;
        self.mask.as_raw_slice().to_vec().serialize(writer)
    }
}

impl BorshDeserialize for Confirmation {
    fn deserialize_reader<R: std::io::Read>(reader: &mut R) -> std::io::Result<Self> {
        let sighash = Buf32::deserialize_reader(reader)?;
        let bits = u32::deserialize_reader(reader)? as usize;
        let bytes = Vec::<u8>::deserialize_reader(reader)?;
        let mut mask = BitVec::<u8, Lsb0>::from_vec(bytes);
        if mask.len() < bits {
            return Err(std::io::Error::new(
                std::io::ErrorKind::InvalidData,
                "confirmation mask shorter than declared bit length",
            ));
        }
        mask.truncate(bits);
        Ok(Self { sighash, mask })
    }
}

/// Tracks partially-confirmed internal-channel orders, keyed by query id.
///
/// Confirmations for different query ids never mix; an entry lives until its
/// order reaches quorum or its deadline passes.
#[derive(Clone, Debug, Default, PartialEq, Eq, BorshSerialize, BorshDeserialize)]
pub struct ConfirmationLedger {
    entries: BTreeMap<u64, Confirmation>,
}

impl ConfirmationLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Check whether a confirmation by `index` would be acceptable, without
    /// recording anything.
    ///
    /// Returns the current confirmation count for the query.
    pub fn peek(&self, query_id: QueryId, sighash: &Buf32, index: u8) -> Result<u8, OrderError> {
        match self.entries.get(&query_id.as_u64()) {
            None => Ok(0),
            Some(entry) => {
                if entry.sighash() != sighash {
                    return Err(OrderError::PayloadMismatch(query_id));
                }
                if entry.is_set(index) {
                    return Err(OrderError::AlreadySigned { index });
                }
                Ok(entry.count())
            }
        }
    }

    /// Record a confirmation by `index`, creating the entry on first touch.
    ///
    /// Callers must have validated the confirmation with [`Self::peek`]
    /// first. Returns the new confirmation count.
    pub fn record(
        &mut self,
        query_id: QueryId,
        sighash: &Buf32,
        index: u8,
        owners_len: usize,
    ) -> u8 {
        let entry = self
            .entries
            .entry(query_id.as_u64())
            .or_insert_with(|| Confirmation::new(*sighash, owners_len));
        entry.set(index);
        entry.count()
    }

    /// Remove an entry (quorum reached), returning its contributors.
    pub fn take(&mut self, query_id: QueryId) -> Vec<u8> {
        self.entries
            .remove(&query_id.as_u64())
            .map(|e| e.contributors())
            .unwrap_or_default()
    }

    /// Current confirmation count for a query, if one is in flight.
    pub fn confirmations(&self, query_id: QueryId) -> Option<u8> {
        self.entries.get(&query_id.as_u64()).map(|e| e.count())
    }

    /// Drop entries whose deadline has passed, returning each dropped
    /// query id with its contributor indices so flood counts can be
    /// released.
    pub fn prune_expired(&mut self, now: u32) -> Vec<(QueryId, Vec<u8>)> {
        let expired: Vec<u64> = self
            .entries
            .keys()
            .copied()
            .filter(|id| QueryId::from(*id).deadline() <= now)
            .collect();

        expired
            .into_iter()
            .filter_map(|id| {
                self.entries
                    .remove(&id)
                    .map(|entry| (QueryId::from(id), entry.contributors()))
            })
            .collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
