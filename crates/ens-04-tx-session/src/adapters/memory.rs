//! # In-Memory Wallet

use async_trait::async_trait;
use parking_lot::RwLock;
use shared_types::Address;
use std::collections::HashMap;
use zeroize::Zeroizing;

use crate::domain::SigningCredential;
use crate::errors::SessionError;
use crate::ports::WalletProvider;

/// Wallet holding accounts and their passphrases in memory.
#[derive(Default)]
pub struct InMemoryWallet {
    accounts: RwLock<HashMap<Address, Zeroizing<String>>>,
}

impl InMemoryWallet {
    /// Create an empty wallet.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an account unlocked by `passphrase`.
    pub fn add_account(&self, address: Address, passphrase: impl Into<String>) {
        self.accounts
            .write()
            .insert(address, Zeroizing::new(passphrase.into()));
    }

    /// Whether the wallet holds `address`.
    pub fn contains(&self, address: &Address) -> bool {
        self.accounts.read().contains_key(address)
    }
}

#[async_trait]
impl WalletProvider for InMemoryWallet {
    async fn resolve(
        &self,
        address: Address,
        passphrase: &str,
    ) -> Result<SigningCredential, SessionError> {
        let accounts = self.accounts.read();
        match accounts.get(&address) {
            None => Err(SessionError::unavailable(address, "account not found")),
            Some(expected) if expected.as_str() != passphrase => {
                Err(SessionError::unavailable(address, "invalid passphrase"))
            }
            Some(_) => Ok(SigningCredential::new(address, passphrase)),
        }
    }
}
