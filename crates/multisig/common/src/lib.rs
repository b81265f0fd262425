//! Shared order-protocol engine for the Stakewell multisig wallets.
//!
//! Both wallet variants authenticate orders through the same machinery: a
//! replay/expiry guard, a per-owner flood guard, an address-quorum
//! accumulator for the internal channel and a threshold-signature check for
//! the external channel. The [`gate::OrderGate`] ties these together and
//! produces an [`gate::AuthenticatedOrder`] that a wallet dispatcher can act
//! on.

pub mod confirmations;
pub mod errors;
pub mod flood;
pub mod gate;
pub mod msgs;
pub mod owners;
pub mod params;
pub mod replay;

pub use errors::OrderError;
pub use gate::{Admittance, AuthenticatedOrder, HandleOutcome, OrderGate};
pub use msgs::{EngineMsg, MockRelayer, MsgRelayer, TreasuryMsg};
pub use owners::{Owner, OwnerSet};
pub use params::{MultisigParams, WalletConfigError, DEFAULT_DEADLINE_HORIZON_SECS};
