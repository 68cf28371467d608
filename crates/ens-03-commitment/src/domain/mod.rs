//! # Domain Layer (Inner Hexagon)
//!
//! Pure commitment arithmetic. No I/O, no randomness.

pub mod bid;
pub mod sealed;

pub use bid::*;
pub use sealed::*;
