//! Account address type.

use std::fmt;

use arbitrary::Arbitrary;
use borsh::{BorshDeserialize, BorshSerialize};
use serde::{Deserialize, Serialize};

use crate::buf::Buf32;

/// Address of a ledger account, such as an owner wallet, the economic engine
/// or the protocol treasury.
#[derive(
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Default,
    Arbitrary,
    BorshSerialize,
    BorshDeserialize,
    Serialize,
    Deserialize,
)]
pub struct AccountAddress(Buf32);

impl AccountAddress {
    pub fn new(inner: Buf32) -> Self {
        Self(inner)
    }

    pub fn inner(&self) -> &Buf32 {
        &self.0
    }

    pub fn as_slice(&self) -> &[u8] {
        self.0.as_slice()
    }
}

impl From<Buf32> for AccountAddress {
    fn from(value: Buf32) -> Self {
        Self(value)
    }
}

impl From<AccountAddress> for Buf32 {
    fn from(value: AccountAddress) -> Self {
        value.0
    }
}

impl From<[u8; 32]> for AccountAddress {
    fn from(data: [u8; 32]) -> Self {
        Self(Buf32::new(data))
    }
}

impl fmt::Debug for AccountAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.0, f)
    }
}

impl fmt::Display for AccountAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}
