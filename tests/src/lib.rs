//! # ENS Auction Client Test Suite
//!
//! Cross-subsystem tests that wire every crate together over the in-memory
//! adapters, plus benchmarks for the hashing hot paths.
//!
//! ## Structure
//!
//! ```text
//! tests/
//! ├── src/integration/
//! │   ├── auction_flows.rs   # start → bid → reveal → finalize → set_address
//! │   └── concurrency.rs     # per-account serialisation
//! └── benches/
//!     └── commitment_benchmarks.rs
//! ```
//!
//! ## Running Tests
//!
//! ```bash
//! # All tests
//! cargo test -p ens-tests
//!
//! # By category
//! cargo test -p ens-tests integration::auction_flows::
//! cargo test -p ens-tests integration::concurrency::
//!
//! # Benchmarks
//! cargo bench -p ens-tests
//! ```

#![allow(dead_code)]

pub mod integration;
