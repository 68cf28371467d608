//! # Error Types
//!
//! Errors raised by the codec. All of them are local input errors: nothing
//! in this crate touches the network.

use thiserror::Error;

/// Codec failures.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CodecError {
    /// Amount text could not be turned into base units.
    #[error("invalid amount {input:?}: {reason}")]
    InvalidAmount { input: String, reason: String },

    /// Name text is not a well-formed dotted name.
    #[error("invalid name {input:?}: {reason}")]
    InvalidName { input: String, reason: String },

    /// ABI return data is not a whole number of 32-byte words.
    #[error("malformed ABI data: {len} bytes is not a multiple of 32")]
    MalformedAbi { len: usize },

    /// ABI return data has fewer words than the call returns.
    #[error("short ABI data: expected {expected} words, got {actual}")]
    ShortAbi { expected: usize, actual: usize },
}

impl CodecError {
    pub(crate) fn amount(input: &str, reason: impl Into<String>) -> Self {
        Self::InvalidAmount {
            input: input.to_string(),
            reason: reason.into(),
        }
    }

    pub(crate) fn name(input: &str, reason: impl Into<String>) -> Self {
        Self::InvalidName {
            input: input.to_string(),
            reason: reason.into(),
        }
    }
}
