//! # ENS-01 Codec - Unit/Identifier Codec
//!
//! **Subsystem ID:** 1
//! **Status:** Leaf (no I/O, no async)
//!
//! ## Purpose
//!
//! Converts human amount strings into integer base units, derives the
//! canonical identifiers of dotted names, and encodes the ABI words the
//! client exchanges with registry contracts.
//!
//! ## Components
//!
//! | Component | Location | Purpose |
//! |-----------|----------|---------|
//! | Amounts | `units.rs` | `parse_amount`, `format_amount` |
//! | Identifiers | `namehash.rs` | `Name`, `namehash`, `label_hash` |
//! | ABI | `abi.rs` | selectors, call encoding, word decoding |
//!
//! ## Usage Example
//!
//! ```ignore
//! use ens_01_codec::prelude::*;
//!
//! let bid = parse_amount("0.01 Ether")?;
//! let name = Name::parse("enstest.eth")?;
//! let node = name.node();
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod abi;
pub mod errors;
pub mod namehash;
pub mod units;

/// Convenient re-exports for common usage.
pub mod prelude {
    pub use crate::abi::{encode_call, selector, Token};
    pub use crate::errors::CodecError;
    pub use crate::namehash::{keccak256, label_hash, namehash, Name};
    pub use crate::units::{format_amount, parse_amount};
}

pub use errors::CodecError;
pub use namehash::{keccak256, label_hash, namehash, Name};
pub use units::{format_amount, parse_amount};

/// Subsystem ID.
pub const SUBSYSTEM_ID: u8 = 1;
