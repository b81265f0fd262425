use thiserror::Error;

use crate::constants::OpType;

/// Errors raised while decoding an order envelope or payload.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OrderParseError {
    /// The action payload carried no bytes at all.
    #[error("empty action payload")]
    EmptyPayload,

    /// The action tag is not recognized.
    #[error("unknown op tag {0:#04x}")]
    UnknownOp(u8),

    /// The action tag is recognized but not valid for this wallet variant.
    #[error("op {0} is not accepted by this wallet variant")]
    UnsupportedOp(OpType),

    /// The action body could not be deserialized for the given tag.
    #[error("malformed action body for op {0}")]
    MalformedBody(OpType),

    /// The message envelope could not be deserialized.
    #[error("malformed order envelope")]
    MalformedEnvelope,
}
