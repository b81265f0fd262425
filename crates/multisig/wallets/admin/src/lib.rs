//! Stakewell Admin Multisig
//!
//! The admin wallet governs the economic engine's configuration through
//! time-delayed, cancellable changes: an authenticated change order stages a
//! value, a second authenticated order for the same field commits it once
//! the governance cool-down has elapsed, and a cancel order drops it at any
//! point before commit. Fund-movement instructions (commission payout,
//! holding transfers, balance return) bypass the delay machine and forward
//! to the engine as soon as they authenticate.

mod error;
mod handler;
mod pending;
mod state;

use serde::{Deserialize, Serialize};
use stakewell_multisig_common::MultisigParams;

pub use error::AdminWalletError;
pub use handler::{handle_bounce, handle_external, handle_internal};
pub use pending::{PendingChange, PendingChanges};
pub use state::AdminWalletState;

/// Default governance cool-down before a staged change may commit.
///
/// A protocol constant in spirit, but kept configurable per deployment; the
/// only hard requirement is that it leaves owners a real window to cancel.
pub const DEFAULT_UPDATE_DELAY_SECS: u32 = 24 * 60 * 60;

/// Parameters for the admin wallet: the shared multisig configuration plus
/// the governance cool-down.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdminWalletParams {
    /// Owner table, threshold, wallet id and the economic-engine address.
    pub multisig: MultisigParams,

    /// Minimum seconds between staging a change and committing it.
    pub update_delay_secs: u32,
}

impl AdminWalletParams {
    pub fn new(multisig: MultisigParams) -> Self {
        Self {
            multisig,
            update_delay_secs: DEFAULT_UPDATE_DELAY_SECS,
        }
    }
}
