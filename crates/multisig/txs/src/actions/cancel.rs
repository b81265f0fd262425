use arbitrary::Arbitrary;
use borsh::{BorshDeserialize, BorshSerialize};

use super::{decode_body, GovernedField};
use crate::{constants::OpType, errors::OrderParseError, sighash::Sighash};

/// Cancels the staged change for one governed field without committing it.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Arbitrary, BorshDeserialize, BorshSerialize)]
pub struct CancelAction {
    /// Field whose staged change is to be dropped.
    field: GovernedField,
}

impl CancelAction {
    pub fn new(field: GovernedField) -> Self {
        CancelAction { field }
    }

    pub fn field(&self) -> GovernedField {
        self.field
    }

    pub(crate) fn decode(body: &[u8]) -> Result<Self, OrderParseError> {
        decode_body(OpType::CancelChange, body)
    }
}

impl Sighash for CancelAction {
    fn op_type(&self) -> OpType {
        OpType::CancelChange
    }

    fn sighash_payload(&self) -> Vec<u8> {
        borsh::to_vec(self).expect("borsh: vec write")
    }
}
