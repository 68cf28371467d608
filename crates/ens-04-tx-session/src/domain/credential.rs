//! # Signing Credential

use shared_types::Address;
use std::fmt;
use zeroize::Zeroizing;

/// An unlocked account the ledger client can sign with.
#[derive(Clone, PartialEq, Eq)]
pub struct SigningCredential {
    address: Address,
    passphrase: Zeroizing<String>,
}

impl SigningCredential {
    /// Credential for `address` unlocked by `passphrase`.
    pub fn new(address: Address, passphrase: impl Into<String>) -> Self {
        Self {
            address,
            passphrase: Zeroizing::new(passphrase.into()),
        }
    }

    /// Signing account.
    pub fn address(&self) -> Address {
        self.address
    }

    /// Passphrase unlocking the account.
    pub fn passphrase(&self) -> &str {
        &self.passphrase
    }
}

impl fmt::Debug for SigningCredential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SigningCredential")
            .field("address", &self.address)
            .field("passphrase", &"<redacted>")
            .finish()
    }
}
