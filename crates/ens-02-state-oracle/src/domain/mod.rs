//! # Domain Layer (Inner Hexagon)
//!
//! Lifecycle states and registrar entries. No I/O.

pub mod state;

pub use state::*;
