//! # ENS-05 Auction Orchestrator
//!
//! **Subsystem ID:** 5
//!
//! ## Purpose
//!
//! Sequences the sealed-bid auction for a name and the address record that
//! follows ownership. Each operation reads state fresh, builds what it needs
//! from the commitment engine and session builder, and submits one
//! transaction.
//!
//! ## State Machine
//!
//! ```text
//! ┌───────────┐ start_auction ┌─────────┐  (time)  ┌────────┐ reveal_bid ┌───────┐
//! │ Available │──────────────►│ Auction │─────────►│ Reveal │───────────►│ Owned │
//! └───────────┘               └─────────┘          └────────┘            └───────┘
//!                              place_bid                       finalize_auction,
//!                                                              set_address
//! Forbidden, Unavailable: dead ends
//! ```
//!
//! ## Operations
//!
//! | Operation | Requires | Call | Value |
//! |-----------|----------|------|-------|
//! | `start_auction` (bid 0) | Available | `startAuction` | 0 |
//! | `start_auction` (bid > 0) | Available | `startAuctionsAndBid` | mask |
//! | `place_bid` | Auction | `newBid` | mask |
//! | `reveal_bid` | Reveal | `unsealBid` | 0 |
//! | `finalize_auction` | Owned | `finalizeAuction` | 0 |
//! | `set_address` | Owned | `setAddr` (resolver) | 0 |
//!
//! ## Outbound Dependencies
//!
//! | Trait | Purpose |
//! |-------|---------|
//! | `RegistryReader` | State and record reads |
//! | `WalletProvider` | Signing credentials |
//! | `LedgerSubmitter` | Transaction submission |
//! | `NameResolver` | Address-or-name targets |

#![warn(clippy::all)]

pub mod adapters;
pub mod domain;
pub mod errors;
pub mod ports;
pub mod service;

pub use adapters::{InMemoryLedger, RegistryNameResolver, SubmittedTransaction};
pub use domain::{
    BidRequest, ContractCall, FinalizeRequest, RevealRequest, SetAddressRequest,
    StartAuctionRequest, DEFAULT_DECOYS,
};
pub use errors::{AuctionError, ErrorKind};
pub use ports::{AuctionApi, LedgerSubmitter, NameResolver};
pub use service::{submit_with_value, AuctionOrchestrator, MIN_LABEL_LENGTH};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::domain::*;
    pub use crate::errors::{AuctionError, ErrorKind};
    pub use crate::ports::{AuctionApi, LedgerSubmitter, NameResolver};
    pub use crate::service::AuctionOrchestrator;
    pub use ens_02_state_oracle::LifecycleState;
    pub use ens_04_tx_session::TransactionConfig;
}

/// Subsystem ID.
pub const SUBSYSTEM_ID: u8 = 5;
