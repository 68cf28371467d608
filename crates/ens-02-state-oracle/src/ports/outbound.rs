//! # Driven Ports (SPI - Outbound)
//!
//! Read side of the ledger collaborator. Every method is a confirmed-state
//! read and must not mutate anything.

use async_trait::async_trait;
use shared_types::{Address, Hash, LedgerError};

use crate::domain::AuctionEntry;

/// Typed reads against the registry, registrar and resolver contracts.
///
/// ## Implementation Notes
///
/// A JSON-RPC adapter translates each method into an `eth_call` against the
/// given contract; test adapters answer from memory.
#[async_trait]
pub trait RegistryReader: Send + Sync {
    /// Owner record of a node in the registry (zero when unset).
    async fn owner(&self, node: Hash) -> Result<Address, LedgerError>;

    /// Resolver record of a node in the registry (zero when unset).
    async fn resolver(&self, node: Hash) -> Result<Address, LedgerError>;

    /// Auction entry for a label hash at the given registrar.
    async fn auction_entry(
        &self,
        registrar: Address,
        label_hash: Hash,
    ) -> Result<AuctionEntry, LedgerError>;

    /// Deed created for a sealed bid (zero when no such bid was placed).
    async fn sealed_bid_deed(
        &self,
        registrar: Address,
        bidder: Address,
        commitment: Hash,
    ) -> Result<Address, LedgerError>;

    /// Address record held by a resolver for a node (zero when unset).
    async fn resolved_address(&self, resolver: Address, node: Hash) -> Result<Address, LedgerError>;
}
