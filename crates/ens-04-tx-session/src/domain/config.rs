//! # Transaction Configuration
//!
//! Per-operation settings. Every operation receives its own copy, so two
//! operations running at once never see each other's passphrase or nonce.

use ens_01_codec::parse_amount;
use shared_types::U256;
use std::fmt;
use std::time::Duration;
use zeroize::Zeroizing;

use crate::errors::SessionError;

/// Default gas price text.
pub const DEFAULT_GAS_PRICE: &str = "4 GWei";

/// Nonce sentinel meaning "let the network decide".
pub const NETWORK_NONCE: i64 = -1;

/// Default chain id (mainnet).
pub const DEFAULT_CHAIN_ID: u64 = 1;

/// Default bound on a single submission.
pub const DEFAULT_SUBMIT_TIMEOUT: Duration = Duration::from_secs(60);

/// Settings for the transaction an operation submits.
#[derive(Clone)]
pub struct TransactionConfig {
    /// Passphrase unlocking the signing account.
    pub passphrase: Zeroizing<String>,
    /// Gas price as amount text, e.g. "4 GWei".
    pub gas_price: String,
    /// Nonce override; `NETWORK_NONCE` lets the network pick.
    pub nonce: i64,
    /// Chain id the transaction is signed for.
    pub chain_id: u64,
    /// Upper bound on waiting for the ledger to accept a submission.
    pub submit_timeout: Duration,
}

impl Default for TransactionConfig {
    fn default() -> Self {
        Self {
            passphrase: Zeroizing::new(String::new()),
            gas_price: DEFAULT_GAS_PRICE.to_string(),
            nonce: NETWORK_NONCE,
            chain_id: DEFAULT_CHAIN_ID,
            submit_timeout: DEFAULT_SUBMIT_TIMEOUT,
        }
    }
}

impl TransactionConfig {
    /// Config with the given passphrase and defaults elsewhere.
    pub fn with_passphrase(passphrase: impl Into<String>) -> Self {
        Self {
            passphrase: Zeroizing::new(passphrase.into()),
            ..Self::default()
        }
    }

    /// Gas price in base units.
    pub fn gas_price_wei(&self) -> Result<U256, SessionError> {
        parse_amount(&self.gas_price).map_err(|e| SessionError::InvalidGasPrice {
            input: self.gas_price.clone(),
            reason: e.to_string(),
        })
    }

    /// Nonce override this config asks for.
    pub fn nonce_override(&self) -> Result<NonceOverride, SessionError> {
        NonceOverride::from_raw(self.nonce)
    }

    /// Check the settings that need no collaborator.
    ///
    /// # Errors
    ///
    /// `InvalidGasPrice` or `InvalidNonce`.
    pub fn validate(&self) -> Result<(), SessionError> {
        self.gas_price_wei()?;
        self.nonce_override()?;
        Ok(())
    }
}

impl fmt::Debug for TransactionConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TransactionConfig")
            .field("passphrase", &"<redacted>")
            .field("gas_price", &self.gas_price)
            .field("nonce", &self.nonce)
            .field("chain_id", &self.chain_id)
            .field("submit_timeout", &self.submit_timeout)
            .finish()
    }
}

/// Nonce to sign with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NonceOverride {
    /// The network assigns the next nonce.
    Network,
    /// Explicit nonce.
    Fixed(u64),
}

impl NonceOverride {
    /// Interpret the raw nonce setting. `-1` defers to the network; any other
    /// negative value is invalid.
    pub fn from_raw(raw: i64) -> Result<Self, SessionError> {
        match raw {
            NETWORK_NONCE => Ok(Self::Network),
            n if n < 0 => Err(SessionError::InvalidNonce(raw)),
            n => Ok(Self::Fixed(n.unsigned_abs())),
        }
    }

    /// The explicit nonce, if any.
    pub fn fixed(self) -> Option<u64> {
        match self {
            Self::Network => None,
            Self::Fixed(n) => Some(n),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = TransactionConfig::default();
        assert_eq!(config.gas_price, "4 GWei");
        assert_eq!(config.nonce, -1);
        assert_eq!(config.chain_id, 1);
        assert!(config.passphrase.is_empty());
    }

    #[test]
    fn test_validate() {
        assert!(TransactionConfig::default().validate().is_ok());
        assert_eq!(
            TransactionConfig::default().gas_price_wei().unwrap(),
            U256::from(4_000_000_000u64)
        );

        let bad_gas = TransactionConfig {
            gas_price: "lots".to_string(),
            ..TransactionConfig::default()
        };
        assert!(matches!(
            bad_gas.validate(),
            Err(SessionError::InvalidGasPrice { .. })
        ));

        let bad_nonce = TransactionConfig {
            nonce: -3,
            ..TransactionConfig::default()
        };
        assert_eq!(bad_nonce.validate(), Err(SessionError::InvalidNonce(-3)));
    }

    #[test]
    fn test_nonce_sentinel() {
        assert_eq!(NonceOverride::from_raw(-1).unwrap(), NonceOverride::Network);
        assert_eq!(NonceOverride::from_raw(0).unwrap(), NonceOverride::Fixed(0));
        assert_eq!(NonceOverride::from_raw(17).unwrap().fixed(), Some(17));
    }

    #[test]
    fn test_other_negative_nonce_rejected() {
        assert_eq!(
            NonceOverride::from_raw(-2).unwrap_err(),
            SessionError::InvalidNonce(-2)
        );
    }

    #[test]
    fn test_debug_redacts_passphrase() {
        let config = TransactionConfig::with_passphrase("hunter2");
        assert!(!format!("{config:?}").contains("hunter2"));
    }
}
