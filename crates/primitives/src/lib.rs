//! Generic data types shared across the Stakewell wallet crates.

pub mod addr;
pub mod buf;

pub use addr::AccountAddress;
pub use buf::{Buf32, Buf64};
