//! # Ports Layer (Middle Hexagon)
//!
//! - **Driven Ports (Outbound)**: `RegistryReader`

pub mod outbound;

pub use outbound::*;
