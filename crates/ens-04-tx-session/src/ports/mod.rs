//! # Ports Layer
//!
//! - `outbound`: Driven ports (SPI) this subsystem depends on

pub mod outbound;

pub use outbound::*;
