use arbitrary::Arbitrary;
use borsh::{BorshDeserialize, BorshSerialize};
use stakewell_primitives::AccountAddress;

use super::decode_body;
use crate::{constants::OpType, errors::OrderParseError, sighash::Sighash};

/// A treasury deposit into a validator-staking proxy.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Arbitrary, BorshDeserialize, BorshSerialize)]
pub struct DepositAction {
    /// Validator the proxy stakes for.
    validator_address: AccountAddress,
    /// Validator reward share, in basis points.
    reward_percent_bp: u16,
    /// Maximum number of distinct holders the proxy accepts.
    max_holders: u32,
    /// Minimum stake the validator itself must hold, in base units.
    min_validator_stake: u64,
    /// Minimum stake per holder, in base units.
    min_holder_stake: u64,
    /// Amount to deposit, in base units.
    amount: u64,
}

impl DepositAction {
    pub fn new(
        validator_address: AccountAddress,
        reward_percent_bp: u16,
        max_holders: u32,
        min_validator_stake: u64,
        min_holder_stake: u64,
        amount: u64,
    ) -> Self {
        Self {
            validator_address,
            reward_percent_bp,
            max_holders,
            min_validator_stake,
            min_holder_stake,
            amount,
        }
    }

    pub fn validator_address(&self) -> &AccountAddress {
        &self.validator_address
    }

    pub fn reward_percent_bp(&self) -> u16 {
        self.reward_percent_bp
    }

    pub fn max_holders(&self) -> u32 {
        self.max_holders
    }

    pub fn min_validator_stake(&self) -> u64 {
        self.min_validator_stake
    }

    pub fn min_holder_stake(&self) -> u64 {
        self.min_holder_stake
    }

    pub fn amount(&self) -> u64 {
        self.amount
    }

    pub(crate) fn decode(body: &[u8]) -> Result<Self, OrderParseError> {
        decode_body(OpType::Deposit, body)
    }
}

impl Sighash for DepositAction {
    fn op_type(&self) -> OpType {
        OpType::Deposit
    }

    fn sighash_payload(&self) -> Vec<u8> {
        borsh::to_vec(self).expect("borsh: vec write")
    }
}
