//! Order and payload model for the Stakewell multisig wallets.
//!
//! An order is an action payload plus a query id carrying the wallet id and
//! an expiry deadline. Orders arrive through two channels: internal messages
//! from owner accounts and external self-authenticating bundles with an
//! embedded signature set. This crate defines the action records for both
//! wallet variants, the envelope codecs for both channels, and the canonical
//! sighash owners sign.

pub mod actions;
pub mod constants;
pub mod envelope;
pub mod errors;
pub mod query_id;
pub mod sighash;
pub mod test_utils;

pub use constants::OpType;
pub use errors::OrderParseError;
pub use query_id::QueryId;
pub use sighash::Sighash;
