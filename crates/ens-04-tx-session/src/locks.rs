//! # Per-Account Locks
//!
//! Serialises session construction and submission for one signing address,
//! so two operations from the same account never race on the nonce the
//! network assigns. Different accounts proceed in parallel.

use parking_lot::Mutex;
use shared_types::Address;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::{Mutex as AsyncMutex, OwnedMutexGuard};
use tracing::trace;

type LockTable = Arc<Mutex<HashMap<Address, Arc<AsyncMutex<()>>>>>;

/// Async mutex per signing address. Entries live only while an operation
/// holds or waits for them.
#[derive(Debug, Default, Clone)]
pub struct AccountLocks {
    locks: LockTable,
}

impl AccountLocks {
    /// Create an empty lock table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Wait for exclusive use of `address`.
    pub async fn acquire(&self, address: Address) -> AccountGuard {
        let lock = {
            let mut locks = self.locks.lock();
            Arc::clone(locks.entry(address).or_default())
        };
        trace!(%address, "Waiting for account lock");
        AccountGuard {
            address,
            guard: Some(lock.lock_owned().await),
            locks: Arc::clone(&self.locks),
        }
    }

    /// Number of accounts currently held or waited on.
    pub fn len(&self) -> usize {
        self.locks.lock().len()
    }

    /// True when no account is held or waited on.
    pub fn is_empty(&self) -> bool {
        self.locks.lock().is_empty()
    }
}

/// Held while an operation owns its account.
#[derive(Debug)]
pub struct AccountGuard {
    address: Address,
    guard: Option<OwnedMutexGuard<()>>,
    locks: LockTable,
}

impl AccountGuard {
    /// Account this guard holds.
    pub fn address(&self) -> Address {
        self.address
    }
}

impl Drop for AccountGuard {
    fn drop(&mut self) {
        drop(self.guard.take());
        // Waiters clone the entry under the table lock, so a count of one
        // means nobody else wants this account.
        let mut locks = self.locks.lock();
        if locks
            .get(&self.address)
            .is_some_and(|lock| Arc::strong_count(lock) == 1)
        {
            locks.remove(&self.address);
        }
    }
}
