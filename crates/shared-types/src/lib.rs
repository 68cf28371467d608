//! # Shared Types Crate
//!
//! This crate contains the value objects and ledger error type shared by the
//! ENS client subsystems.
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: All cross-subsystem types are defined here.
//! - **Opaque Ledger Errors**: `LedgerError` carries the ledger's own reason
//!   unmodified so callers can decide on retries with full knowledge.

pub mod entities;
pub mod errors;

pub use entities::*;
pub use errors::*;
