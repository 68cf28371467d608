//! # ENS-02 State Oracle
//!
//! **Subsystem ID:** 2
//!
//! ## Purpose
//!
//! Queries registry and registrar contract state for a name and classifies it
//! into one of a fixed set of lifecycle states. Every mutating operation
//! guards on `require_state` immediately before it builds anything.
//!
//! ## Lifecycle
//!
//! ```text
//! Available ──► Auction ──► Reveal ──► Owned
//! Forbidden, Unavailable: dead ends
//! ```
//!
//! ## Outbound Dependencies
//!
//! | Trait | Purpose |
//! |-------|---------|
//! | `RegistryReader` | Confirmed-state reads (registry, registrar, resolver) |

#![warn(clippy::all)]

pub mod adapters;
pub mod domain;
pub mod errors;
pub mod ports;
pub mod service;

pub use adapters::InMemoryRegistry;
pub use domain::{AuctionEntry, LifecycleState};
pub use errors::OracleError;
pub use ports::RegistryReader;
pub use service::StateOracle;

/// Subsystem ID.
pub const SUBSYSTEM_ID: u8 = 2;
