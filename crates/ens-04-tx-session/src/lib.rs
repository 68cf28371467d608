//! # ENS-04 Transaction Session Builder
//!
//! **Subsystem ID:** 4
//!
//! ## Purpose
//!
//! Produces the signing context for one submission: resolved credential,
//! target contract, chain id, gas price, nonce override and attached value.
//!
//! ## Architecture
//!
//! ```text
//! TransactionConfig ──► SessionBuilder ──► WalletProvider (port)
//!                             │
//!                             ▼
//!                    TransactionSession ──attach_value──► AttachedValue (guard)
//! ```
//!
//! ## Concurrency
//!
//! `AccountLocks` hands out one async mutex per signing address. Callers
//! hold the guard from session construction until the ledger has answered.

#![warn(clippy::all)]

pub mod adapters;
pub mod domain;
pub mod errors;
pub mod locks;
pub mod ports;
pub mod service;

pub use adapters::InMemoryWallet;
pub use domain::{
    AttachedValue, NonceOverride, SigningCredential, TransactionConfig, TransactionSession,
    DEFAULT_CHAIN_ID, DEFAULT_GAS_PRICE, DEFAULT_SUBMIT_TIMEOUT, NETWORK_NONCE,
};
pub use errors::SessionError;
pub use locks::{AccountGuard, AccountLocks};
pub use ports::WalletProvider;
pub use service::SessionBuilder;

/// Subsystem ID.
pub const SUBSYSTEM_ID: u8 = 4;
