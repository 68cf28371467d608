//! # Driven Ports (SPI - Outbound)

use async_trait::async_trait;
use ens_04_tx_session::TransactionSession;
use shared_types::{Address, LedgerError, TxHash};

use crate::domain::ContractCall;
use crate::errors::AuctionError;

/// Write side of the ledger collaborator.
///
/// Signs `call` with the session's credential, sends it to the session's
/// target with the session's attached value, and returns the transaction
/// hash once the ledger has accepted it. Rejections are returned verbatim.
#[async_trait]
pub trait LedgerSubmitter: Send + Sync {
    /// Submit one transaction.
    async fn submit(
        &self,
        session: &TransactionSession,
        call: &ContractCall,
    ) -> Result<TxHash, LedgerError>;
}

/// Name-resolution collaborator: "name or address" text to an address.
#[async_trait]
pub trait NameResolver: Send + Sync {
    /// Resolve `target`.
    async fn resolve(&self, target: &str) -> Result<Address, AuctionError>;
}
