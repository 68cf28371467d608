//! # Transaction Session
//!
//! The signing context for one submission. The attached value only exists
//! while an `AttachedValue` guard is alive; when the guard drops the value
//! goes back to zero, whatever happened to the submission.

use ens_01_codec::format_amount;
use shared_types::{Address, U256};
use std::ops::Deref;

use super::config::NonceOverride;
use super::credential::SigningCredential;

/// Signing context for a single operation. Never persisted.
#[derive(Debug)]
pub struct TransactionSession {
    credential: SigningCredential,
    target: Address,
    chain_id: u64,
    gas_price: U256,
    nonce: NonceOverride,
    value: U256,
}

impl TransactionSession {
    pub(crate) fn new(
        credential: SigningCredential,
        target: Address,
        chain_id: u64,
        gas_price: U256,
        nonce: NonceOverride,
    ) -> Self {
        Self {
            credential,
            target,
            chain_id,
            gas_price,
            nonce,
            value: U256::zero(),
        }
    }

    /// Credential the transaction is signed with.
    pub fn credential(&self) -> &SigningCredential {
        &self.credential
    }

    /// Sending account.
    pub fn from(&self) -> Address {
        self.credential.address()
    }

    /// Contract the transaction is sent to.
    pub fn target(&self) -> Address {
        self.target
    }

    /// Chain id.
    pub fn chain_id(&self) -> u64 {
        self.chain_id
    }

    /// Gas price in base units.
    pub fn gas_price(&self) -> U256 {
        self.gas_price
    }

    /// Nonce override.
    pub fn nonce(&self) -> NonceOverride {
        self.nonce
    }

    /// Value currently attached.
    pub fn value(&self) -> U256 {
        self.value
    }

    /// Attach `value` for one submission. The returned guard derefs to the
    /// session and clears the value on drop.
    pub fn attach_value(&mut self, value: U256) -> AttachedValue<'_> {
        tracing::debug!(value = %format_amount(value), "Attaching value");
        self.value = value;
        AttachedValue { session: self }
    }
}

/// Scope during which a session carries a value.
#[derive(Debug)]
pub struct AttachedValue<'a> {
    session: &'a mut TransactionSession,
}

impl Deref for AttachedValue<'_> {
    type Target = TransactionSession;

    fn deref(&self) -> &TransactionSession {
        self.session
    }
}

impl Drop for AttachedValue<'_> {
    fn drop(&mut self) {
        self.session.value = U256::zero();
    }
}
