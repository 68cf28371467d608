//! # Driven Ports (SPI - Outbound)

use async_trait::async_trait;
use shared_types::Address;

use crate::domain::SigningCredential;
use crate::errors::SessionError;

/// Wallet/account collaborator.
///
/// Given an address and the passphrase supplied for it, returns a credential
/// the ledger client can sign with, or `CredentialUnavailable`.
#[async_trait]
pub trait WalletProvider: Send + Sync {
    /// Resolve the signing credential for `address`.
    async fn resolve(
        &self,
        address: Address,
        passphrase: &str,
    ) -> Result<SigningCredential, SessionError>;
}
