//! # ENS-03 Commitment Engine
//!
//! **Subsystem ID:** 3
//!
//! ## Purpose
//!
//! Derives the sealed-bid commitment from (bidder, label hash, amount, salt),
//! hides it among zero-value decoy entries, and verifies claimed bids at
//! reveal time.
//!
//! ## Invariants
//!
//! | Invariant | Enforcement |
//! |-----------|-------------|
//! | mask >= amount | `Bid::with_mask`, `effective_mask` |
//! | zero amount is never sealed | `CommitmentEngine::build_commitment` |
//! | non-zero amount needs a salt | `CommitmentEngine::build_commitment` |
//! | real entry position is random | `CommitmentEngine::build_commitment` |

#![warn(clippy::all)]

pub mod domain;
pub mod engine;
pub mod errors;

pub use domain::{
    commitment_for, effective_mask, salt_hash, seal, verify_reveal, Bid, CommitmentEntry,
    SealedBid,
};
pub use engine::{CommitmentEngine, MAX_DECOYS};
pub use errors::CommitmentError;

/// Subsystem ID.
pub const SUBSYSTEM_ID: u8 = 3;
