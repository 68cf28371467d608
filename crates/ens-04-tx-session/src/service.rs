//! # Session Builder
//!
//! Turns an address plus a `TransactionConfig` into a `TransactionSession`:
//! resolves the credential through the wallet, parses the gas price and
//! interprets the nonce override.

use shared_types::Address;
use std::sync::Arc;
use tracing::debug;

use crate::domain::{TransactionConfig, TransactionSession};
use crate::errors::SessionError;
use crate::ports::WalletProvider;

/// Builds signing contexts through a wallet collaborator.
pub struct SessionBuilder<W: WalletProvider> {
    wallet: Arc<W>,
}

impl<W: WalletProvider> Clone for SessionBuilder<W> {
    fn clone(&self) -> Self {
        Self {
            wallet: Arc::clone(&self.wallet),
        }
    }
}

impl<W: WalletProvider> SessionBuilder<W> {
    /// Create a builder over a wallet.
    pub fn new(wallet: Arc<W>) -> Self {
        Self { wallet }
    }

    /// Build a session signing as `address` against `target`.
    ///
    /// Configuration is validated before the wallet is asked for anything.
    pub async fn build(
        &self,
        address: Address,
        target: Address,
        config: &TransactionConfig,
    ) -> Result<TransactionSession, SessionError> {
        let gas_price = config.gas_price_wei()?;
        let nonce = config.nonce_override()?;

        let credential = self.wallet.resolve(address, &config.passphrase).await?;
        debug!(
            from = %address,
            to = %target,
            chain_id = config.chain_id,
            ?nonce,
            "Built transaction session"
        );

        Ok(TransactionSession::new(
            credential,
            target,
            config.chain_id,
            gas_price,
            nonce,
        ))
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::InMemoryWallet;
    use crate::domain::NonceOverride;
    use shared_types::U256;

    const ACCOUNT: Address = Address::new([7; 20]);
    const TARGET: Address = Address::new([8; 20]);

    fn builder() -> SessionBuilder<InMemoryWallet> {
        let wallet = InMemoryWallet::new();
        wallet.add_account(ACCOUNT, "pw");
        SessionBuilder::new(Arc::new(wallet))
    }

    #[tokio::test]
    async fn test_build_with_defaults() {
        let config = TransactionConfig::with_passphrase("pw");
        let session = builder().build(ACCOUNT, TARGET, &config).await.unwrap();

        assert_eq!(session.from(), ACCOUNT);
        assert_eq!(session.target(), TARGET);
        assert_eq!(session.chain_id(), 1);
        assert_eq!(session.gas_price(), U256::from(4_000_000_000u64));
        assert_eq!(session.nonce(), NonceOverride::Network);
        assert!(session.value().is_zero());
    }

    #[tokio::test]
    async fn test_build_with_overrides() {
        let config = TransactionConfig {
            gas_price: "20 shannon".to_string(),
            nonce: 5,
            chain_id: 3,
            ..TransactionConfig::with_passphrase("pw")
        };
        let session = builder().build(ACCOUNT, TARGET, &config).await.unwrap();
        assert_eq!(session.gas_price(), U256::from(20_000_000_000u64));
        assert_eq!(session.nonce(), NonceOverride::Fixed(5));
        assert_eq!(session.chain_id(), 3);
    }

    #[tokio::test]
    async fn test_invalid_gas_price() {
        let config = TransactionConfig {
            gas_price: "lots".to_string(),
            ..TransactionConfig::with_passphrase("pw")
        };
        let err = builder().build(ACCOUNT, TARGET, &config).await.unwrap_err();
        assert!(matches!(err, SessionError::InvalidGasPrice { .. }));
    }

    #[tokio::test]
    async fn test_invalid_nonce() {
        let config = TransactionConfig {
            nonce: -5,
            ..TransactionConfig::with_passphrase("pw")
        };
        let err = builder().build(ACCOUNT, TARGET, &config).await.unwrap_err();
        assert_eq!(err, SessionError::InvalidNonce(-5));
    }

    #[tokio::test]
    async fn test_credential_unavailable() {
        let config = TransactionConfig::with_passphrase("wrong");
        let err = builder().build(ACCOUNT, TARGET, &config).await.unwrap_err();
        assert!(matches!(err, SessionError::CredentialUnavailable { .. }));
    }
}
