//! # Domain Layer (Inner Hexagon)

pub mod calls;
pub mod requests;

pub use calls::ContractCall;
pub use requests::*;
