//! # Ports Layer
//!
//! - `inbound`: Driving port (API) this subsystem exposes
//! - `outbound`: Driven ports (SPI) this subsystem depends on

pub mod inbound;
pub mod outbound;

pub use inbound::*;
pub use outbound::*;
