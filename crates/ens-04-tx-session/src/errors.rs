//! # Error Types

use shared_types::Address;
use thiserror::Error;

/// Errors building a transaction session.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    /// The wallet could not produce a signing credential.
    #[error("failed to obtain credentials for {address}: {reason}")]
    CredentialUnavailable { address: Address, reason: String },

    /// Gas price text did not parse as an amount.
    #[error("invalid gas price {input:?}: {reason}")]
    InvalidGasPrice { input: String, reason: String },

    /// Negative nonce other than the network sentinel.
    #[error("invalid nonce {0}: use -1 to let the network decide")]
    InvalidNonce(i64),
}

impl SessionError {
    /// Credential failure for `address`.
    pub fn unavailable(address: Address, reason: impl Into<String>) -> Self {
        Self::CredentialUnavailable {
            address,
            reason: reason.into(),
        }
    }
}
