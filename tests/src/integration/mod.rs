//! Cross-subsystem flows over the in-memory adapters.

pub mod auction_flows;
pub mod concurrency;
