//! # Domain Layer (Inner Hexagon)

pub mod config;
pub mod credential;
pub mod session;

pub use config::*;
pub use credential::*;
pub use session::*;
