//! # Adapters Layer (Outer Hexagon)
//!
//! Concrete `RegistryReader` implementations living alongside the domain.
//! The JSON-RPC reader lives with the CLI.

pub mod memory;

pub use memory::*;
