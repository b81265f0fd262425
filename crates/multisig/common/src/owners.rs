//! Owner records.

use std::collections::HashSet;

use arbitrary::Arbitrary;
use borsh::{BorshDeserialize, BorshSerialize};
use serde::{Deserialize, Serialize};
use stakewell_crypto::{keys::OwnerKey, threshold_signature::MAX_SIGNERS};
use stakewell_primitives::AccountAddress;
use thiserror::Error;

/// One wallet owner: the key it signs external bundles with and the account
/// address its internal messages arrive from.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Arbitrary,
    BorshSerialize,
    BorshDeserialize,
    Serialize,
    Deserialize,
)]
pub struct Owner {
    pubkey: OwnerKey,
    address: AccountAddress,
}

impl Owner {
    pub fn new(pubkey: OwnerKey, address: AccountAddress) -> Self {
        Self { pubkey, address }
    }

    pub fn pubkey(&self) -> &OwnerKey {
        &self.pubkey
    }

    pub fn address(&self) -> &AccountAddress {
        &self.address
    }
}

/// Errors rejected at owner-set construction.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OwnerSetError {
    /// The owner list is empty.
    #[error("owner set cannot be empty")]
    Empty,

    /// More owners than a `u8` index can address.
    #[error("too many owners: {0} exceeds maximum 256")]
    TooMany(usize),

    /// The same public key appears for two owner indices.
    #[error("duplicate owner public key")]
    DuplicateKey,

    /// The same account address appears for two owner indices.
    #[error("duplicate owner address")]
    DuplicateAddress,
}

/// The fixed, ordered owner table of one wallet.
///
/// The position of an owner in the table is its signer index for the
/// lifetime of the wallet. Immutable after construction.
#[derive(Clone, Debug, PartialEq, Eq, BorshSerialize, BorshDeserialize)]
pub struct OwnerSet {
    owners: Vec<Owner>,
}

impl OwnerSet {
    /// Validate and build an owner set.
    pub fn try_new(owners: Vec<Owner>) -> Result<Self, OwnerSetError> {
        if owners.is_empty() {
            return Err(OwnerSetError::Empty);
        }
        if owners.len() > MAX_SIGNERS {
            return Err(OwnerSetError::TooMany(owners.len()));
        }

        let keys: HashSet<&OwnerKey> = owners.iter().map(Owner::pubkey).collect();
        if keys.len() != owners.len() {
            return Err(OwnerSetError::DuplicateKey);
        }

        let addrs: HashSet<&AccountAddress> = owners.iter().map(Owner::address).collect();
        if addrs.len() != owners.len() {
            return Err(OwnerSetError::DuplicateAddress);
        }

        Ok(Self { owners })
    }

    pub fn len(&self) -> usize {
        self.owners.len()
    }

    pub fn is_empty(&self) -> bool {
        self.owners.is_empty()
    }

    pub fn get(&self, index: u8) -> Option<&Owner> {
        self.owners.get(index as usize)
    }

    /// The signer index of the owner with the given account address.
    pub fn index_of_address(&self, address: &AccountAddress) -> Option<u8> {
        self.owners
            .iter()
            .position(|o| o.address() == address)
            .map(|i| i as u8)
    }

    /// Owner public keys ordered by signer index.
    pub fn keys(&self) -> Vec<OwnerKey> {
        self.owners.iter().map(|o| *o.pubkey()).collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Owner> {
        self.owners.iter()
    }
}

#[cfg(test)]
mod tests {
    use stakewell_primitives::Buf32;

    use super::*;

    fn make_owner(id: u8) -> Owner {
        Owner::new(
            OwnerKey::new(Buf32::new([id; 32])),
            AccountAddress::from([id.wrapping_add(0x80); 32]),
        )
    }

    #[test]
    fn test_owner_set_lookup() {
        let owners = vec![make_owner(1), make_owner(2), make_owner(3)];
        let set = OwnerSet::try_new(owners.clone()).unwrap();

        assert_eq!(set.len(), 3);
        assert_eq!(set.index_of_address(owners[1].address()), Some(1));
        assert_eq!(
            set.index_of_address(&AccountAddress::from([0xFF; 32])),
            None
        );
        assert_eq!(set.get(2), Some(&owners[2]));
        assert_eq!(set.get(3), None);
    }

    #[test]
    fn test_owner_set_rejects_empty() {
        assert_eq!(OwnerSet::try_new(vec![]), Err(OwnerSetError::Empty));
    }

    #[test]
    fn test_owner_set_rejects_duplicate_key() {
        let dup = Owner::new(*make_owner(1).pubkey(), *make_owner(2).address());
        let result = OwnerSet::try_new(vec![make_owner(1), dup]);
        assert_eq!(result, Err(OwnerSetError::DuplicateKey));
    }

    #[test]
    fn test_owner_set_rejects_duplicate_address() {
        let dup = Owner::new(*make_owner(2).pubkey(), *make_owner(1).address());
        let result = OwnerSet::try_new(vec![make_owner(1), dup]);
        assert_eq!(result, Err(OwnerSetError::DuplicateAddress));
    }
}
