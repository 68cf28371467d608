//! # Driving Ports (API - Inbound)

use async_trait::async_trait;
use ens_02_state_oracle::LifecycleState;
use shared_types::TxHash;

use crate::domain::{
    BidRequest, FinalizeRequest, RevealRequest, SetAddressRequest, StartAuctionRequest,
};
use crate::errors::AuctionError;

/// Operations on a name's auction and records.
#[async_trait]
pub trait AuctionApi: Send + Sync {
    /// Current lifecycle state of a name.
    async fn query_state(&self, name: &str) -> Result<LifecycleState, AuctionError>;

    /// Open an auction, optionally placing a sealed bid.
    async fn start_auction(&self, request: StartAuctionRequest) -> Result<TxHash, AuctionError>;

    /// Place a sealed bid on a running auction.
    async fn place_bid(&self, request: BidRequest) -> Result<TxHash, AuctionError>;

    /// Reveal a sealed bid.
    async fn reveal_bid(&self, request: RevealRequest) -> Result<TxHash, AuctionError>;

    /// Finalize a won auction.
    async fn finalize_auction(&self, request: FinalizeRequest) -> Result<TxHash, AuctionError>;

    /// Set the address record of an owned name.
    async fn set_address(&self, request: SetAddressRequest) -> Result<TxHash, AuctionError>;
}
