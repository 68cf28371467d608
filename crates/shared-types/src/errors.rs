//! # Error Types
//!
//! Defines error types used across subsystems.

use thiserror::Error;

/// Errors reported by the ledger collaborator.
///
/// These are never retried or rewritten by the client: a rejection carries
/// the ledger's own reason verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LedgerError {
    /// The ledger refused the transaction or call.
    #[error("Rejected by ledger: {0}")]
    Rejected(String),

    /// The ledger could not be reached or returned an unreadable response.
    #[error("Network error: {0}")]
    Network(String),
}

/// Errors parsing textual value objects.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// Wrong number of bytes after hex decoding.
    #[error("Invalid length: expected {expected} bytes, got {actual}")]
    InvalidLength { expected: usize, actual: usize },

    /// Input is not valid hex.
    #[error("Invalid hex: {0}")]
    InvalidHex(String),
}
