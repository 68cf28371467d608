//! # Adapters Layer
//!
//! - `memory`: in-memory ledger for tests and dry runs
//! - `resolver`: name resolution through the registry

pub mod memory;
pub mod resolver;

pub use memory::{InMemoryLedger, SubmittedTransaction};
pub use resolver::RegistryNameResolver;
