//! # Error Types
//!
//! `AuctionError` wraps the errors of every subsystem the orchestrator calls
//! and classifies them into the `ErrorKind` taxonomy the CLI reports.

use ens_01_codec::CodecError;
use ens_02_state_oracle::OracleError;
use ens_03_commitment::CommitmentError;
use ens_04_tx_session::SessionError;
use shared_types::{Address, LedgerError};
use std::time::Duration;
use thiserror::Error;

/// Coarse error classes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Bad user input, rejected before anything was sent.
    InvalidInput,
    /// The name is not in a state that allows the operation.
    InvalidState,
    /// No signing credential for the account.
    CredentialUnavailable,
    /// The ledger refused the transaction.
    Rejected,
    /// The ledger could not be reached.
    NetworkError,
    /// The ledger did not answer within the submission timeout.
    SubmissionTimeout,
}

/// Orchestrator errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuctionError {
    /// Name or amount text was invalid.
    #[error(transparent)]
    Codec(#[from] CodecError),

    /// Registry read or state guard failed.
    #[error(transparent)]
    Oracle(#[from] OracleError),

    /// Sealed bid could not be built.
    #[error(transparent)]
    Commitment(#[from] CommitmentError),

    /// Session could not be built.
    #[error(transparent)]
    Session(#[from] SessionError),

    /// Submission failed at the ledger.
    #[error(transparent)]
    Ledger(#[from] LedgerError),

    /// Name is not eligible for this operation.
    #[error("invalid name {name}: {reason}")]
    InvalidName { name: String, reason: String },

    /// A bid amount of zero where a bid is required.
    #[error("bid amount must be greater than zero")]
    ZeroBid,

    /// The claimed bid does not match any sealed bid held by the registrar.
    #[error("no sealed bid matches the revealed amount and salt for {name}")]
    RevealMismatch { name: String },

    /// Registry has no owner for the name.
    #[error("owner is not set for {name}")]
    OwnerNotSet { name: String },

    /// Registry owner changed while the operation waited for its account.
    #[error("owner of {name} changed from {expected} to {actual}")]
    OwnerChanged {
        name: String,
        expected: Address,
        actual: Address,
    },

    /// Resolution target could not be turned into an address.
    #[error("failed to resolve {target}: {reason}")]
    InvalidAddress { target: String, reason: String },

    /// No answer from the ledger in time. The transaction may still land.
    #[error("submission timed out after {0:?}; the transaction may still be mined")]
    SubmissionTimeout(Duration),
}

impl AuctionError {
    /// Taxonomy class of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Codec(_)
            | Self::Commitment(_)
            | Self::InvalidName { .. }
            | Self::ZeroBid
            | Self::RevealMismatch { .. }
            | Self::InvalidAddress { .. } => ErrorKind::InvalidInput,
            Self::Oracle(OracleError::Ledger(e)) | Self::Ledger(e) => ledger_kind(e),
            Self::Oracle(_) | Self::OwnerNotSet { .. } | Self::OwnerChanged { .. } => {
                ErrorKind::InvalidState
            }
            Self::Session(SessionError::CredentialUnavailable { .. }) => {
                ErrorKind::CredentialUnavailable
            }
            Self::Session(_) => ErrorKind::InvalidInput,
            Self::SubmissionTimeout(_) => ErrorKind::SubmissionTimeout,
        }
    }
}

fn ledger_kind(err: &LedgerError) -> ErrorKind {
    match err {
        LedgerError::Rejected(_) => ErrorKind::Rejected,
        LedgerError::Network(_) => ErrorKind::NetworkError,
    }
}
