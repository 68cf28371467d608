//! # Error Types

use thiserror::Error;

/// Errors building a sealed bid.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommitmentError {
    /// A non-zero bid needs a salt to be revealable.
    #[error("salt is required for a sealed bid")]
    SaltRequired,

    /// More decoys than a single transaction should carry.
    #[error("too many decoys: {requested} > {max}")]
    TooManyDecoys { requested: usize, max: usize },
}
