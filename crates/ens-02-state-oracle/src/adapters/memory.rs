//! # In-Memory Registry
//!
//! Registry, registrar and resolver state held in memory. Used by tests and
//! by the in-memory ledger of the auction subsystem.

use async_trait::async_trait;
use parking_lot::RwLock;
use shared_types::{Address, Hash, LedgerError};
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};

use crate::domain::{AuctionEntry, LifecycleState};
use crate::ports::RegistryReader;

#[derive(Debug, Default)]
struct Records {
    owners: HashMap<Hash, Address>,
    resolvers: HashMap<Hash, Address>,
    entries: HashMap<(Address, Hash), AuctionEntry>,
    sealed_bids: HashMap<(Address, Address, Hash), Address>,
    addresses: HashMap<(Address, Hash), Address>,
    unreachable: Option<String>,
}

/// In-memory registry for testing.
#[derive(Debug, Default)]
pub struct InMemoryRegistry {
    records: RwLock<Records>,
    reads: AtomicUsize,
}

impl InMemoryRegistry {
    /// Create a new empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the owner record of a node.
    pub fn set_owner(&self, node: Hash, owner: Address) {
        self.records.write().owners.insert(node, owner);
    }

    /// Set the resolver record of a node.
    pub fn set_resolver(&self, node: Hash, resolver: Address) {
        self.records.write().resolvers.insert(node, resolver);
    }

    /// Set the auction entry for a label hash.
    pub fn set_entry(&self, registrar: Address, label_hash: Hash, entry: AuctionEntry) {
        self.records.write().entries.insert((registrar, label_hash), entry);
    }

    /// Shortcut for an entry with no bids in the given state.
    pub fn set_state(&self, registrar: Address, label_hash: Hash, state: LifecycleState) {
        self.set_entry(registrar, label_hash, AuctionEntry::in_state(state));
    }

    /// Record a deed for a sealed bid.
    pub fn set_sealed_bid(&self, registrar: Address, bidder: Address, commitment: Hash, deed: Address) {
        self.records
            .write()
            .sealed_bids
            .insert((registrar, bidder, commitment), deed);
    }

    /// Set the address record a resolver holds for a node.
    pub fn set_address(&self, resolver: Address, node: Hash, address: Address) {
        self.records.write().addresses.insert((resolver, node), address);
    }

    /// Make every subsequent read fail with a network error.
    pub fn set_unreachable(&self, reason: Option<&str>) {
        self.records.write().unreachable = reason.map(str::to_string);
    }

    /// Number of reads served so far.
    #[must_use]
    pub fn read_count(&self) -> usize {
        self.reads.load(Ordering::SeqCst)
    }

    fn read<T>(&self, f: impl FnOnce(&Records) -> T) -> Result<T, LedgerError> {
        self.reads.fetch_add(1, Ordering::SeqCst);
        let records = self.records.read();
        if let Some(reason) = &records.unreachable {
            return Err(LedgerError::Network(reason.clone()));
        }
        Ok(f(&records))
    }
}

#[async_trait]
impl RegistryReader for InMemoryRegistry {
    async fn owner(&self, node: Hash) -> Result<Address, LedgerError> {
        self.read(|r| r.owners.get(&node).copied().unwrap_or_default())
    }

    async fn resolver(&self, node: Hash) -> Result<Address, LedgerError> {
        self.read(|r| r.resolvers.get(&node).copied().unwrap_or_default())
    }

    async fn auction_entry(
        &self,
        registrar: Address,
        label_hash: Hash,
    ) -> Result<AuctionEntry, LedgerError> {
        self.read(|r| {
            r.entries
                .get(&(registrar, label_hash))
                .copied()
                .unwrap_or_default()
        })
    }

    async fn sealed_bid_deed(
        &self,
        registrar: Address,
        bidder: Address,
        commitment: Hash,
    ) -> Result<Address, LedgerError> {
        self.read(|r| {
            r.sealed_bids
                .get(&(registrar, bidder, commitment))
                .copied()
                .unwrap_or_default()
        })
    }

    async fn resolved_address(&self, resolver: Address, node: Hash) -> Result<Address, LedgerError> {
        self.read(|r| r.addresses.get(&(resolver, node)).copied().unwrap_or_default())
    }
}
