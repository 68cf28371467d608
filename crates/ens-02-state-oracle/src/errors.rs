//! # Error Types

use shared_types::LedgerError;
use thiserror::Error;

use crate::domain::LifecycleState;

/// Errors from registry reads and state guards.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OracleError {
    /// The name is not in the state the operation requires.
    #[error("{name} is {actual}, expected {expected}")]
    InvalidState {
        name: String,
        expected: LifecycleState,
        actual: LifecycleState,
    },

    /// The registrar reported a state code this client does not know.
    #[error("unknown registrar state code {0}")]
    UnknownState(u8),

    /// Nobody owns the top-level domain, so there is no registrar.
    #[error("no registrar for top-level domain {tld}")]
    NoRegistrar { tld: String },

    /// The registry has no resolver record for the name.
    #[error("no resolver for {name}")]
    NoResolver { name: String },

    /// The read itself failed.
    #[error(transparent)]
    Ledger(#[from] LedgerError),
}
