//! # Operation Requests
//!
//! Inputs to the orchestrator operations. Amounts are already parsed; the
//! mask stays as raw text because an unusable mask falls back to the bid.

use ens_04_tx_session::TransactionConfig;
use shared_types::{Address, U256};

/// Default number of decoy entries sent with a new auction.
pub const DEFAULT_DECOYS: usize = 3;

/// Open an auction, optionally with a sealed bid.
#[derive(Debug, Clone)]
pub struct StartAuctionRequest {
    /// Dotted name, e.g. `enstest.eth`.
    pub name: String,
    /// Bidding account.
    pub bidder: Address,
    /// Bid amount; zero opens the auction without bidding.
    pub bid: U256,
    /// Raw mask text.
    pub mask: Option<String>,
    /// Salt for the sealed bid.
    pub salt: String,
    /// Number of decoy auctions opened alongside.
    pub decoys: usize,
    /// Transaction settings.
    pub config: TransactionConfig,
}

impl StartAuctionRequest {
    /// Request with no bid, mask or salt and the default decoy count.
    pub fn new(name: impl Into<String>, bidder: Address, config: TransactionConfig) -> Self {
        Self {
            name: name.into(),
            bidder,
            bid: U256::zero(),
            mask: None,
            salt: String::new(),
            decoys: DEFAULT_DECOYS,
            config,
        }
    }
}

/// Place a sealed bid on a running auction.
#[derive(Debug, Clone)]
pub struct BidRequest {
    /// Dotted name.
    pub name: String,
    /// Bidding account.
    pub bidder: Address,
    /// Bid amount.
    pub bid: U256,
    /// Raw mask text.
    pub mask: Option<String>,
    /// Salt for the sealed bid.
    pub salt: String,
    /// Transaction settings.
    pub config: TransactionConfig,
}

/// Reveal a previously placed bid.
#[derive(Debug, Clone)]
pub struct RevealRequest {
    /// Dotted name.
    pub name: String,
    /// Account that placed the bid.
    pub bidder: Address,
    /// Bid amount as sealed.
    pub bid: U256,
    /// Salt as sealed.
    pub salt: String,
    /// Transaction settings.
    pub config: TransactionConfig,
}

/// Finalize a won auction.
#[derive(Debug, Clone)]
pub struct FinalizeRequest {
    /// Dotted name.
    pub name: String,
    /// Winning account.
    pub winner: Address,
    /// Transaction settings.
    pub config: TransactionConfig,
}

/// Point a name at an address.
#[derive(Debug, Clone)]
pub struct SetAddressRequest {
    /// Dotted name.
    pub name: String,
    /// Address or name to resolve to.
    pub target: String,
    /// Transaction settings for the owner's account.
    pub config: TransactionConfig,
}
