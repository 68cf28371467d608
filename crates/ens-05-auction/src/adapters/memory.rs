//! # In-Memory Ledger
//!
//! Records every submission together with the session it was signed in, and
//! applies accepted calls to an `InMemoryRegistry` so multi-step flows can
//! be driven without a node.

use async_trait::async_trait;
use ens_01_codec::keccak256;
use ens_02_state_oracle::{InMemoryRegistry, LifecycleState};
use ens_04_tx_session::{NonceOverride, TransactionSession};
use parking_lot::Mutex;
use shared_types::{Address, Hash, LedgerError, TxHash, U256};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tracing::debug;

use crate::domain::ContractCall;
use crate::ports::LedgerSubmitter;

/// One submission as the ledger saw it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmittedTransaction {
    /// Sending account.
    pub from: Address,
    /// Target contract.
    pub to: Address,
    /// Value attached at submission time.
    pub value: U256,
    /// Chain id.
    pub chain_id: u64,
    /// Gas price.
    pub gas_price: U256,
    /// Nonce override.
    pub nonce: NonceOverride,
    /// The call.
    pub call: ContractCall,
    /// Hash returned, `None` when rejected.
    pub tx_hash: Option<TxHash>,
}

#[derive(Debug, Default)]
struct Behaviour {
    reject: Option<String>,
    delay: Option<Duration>,
}

/// In-memory ledger for testing.
#[derive(Debug)]
pub struct InMemoryLedger {
    registry: Arc<InMemoryRegistry>,
    submitted: Mutex<Vec<SubmittedTransaction>>,
    behaviour: Mutex<Behaviour>,
    sequence: AtomicU64,
}

impl InMemoryLedger {
    /// Ledger applying accepted calls to `registry`.
    pub fn new(registry: Arc<InMemoryRegistry>) -> Self {
        Self {
            registry,
            submitted: Mutex::new(Vec::new()),
            behaviour: Mutex::new(Behaviour::default()),
            sequence: AtomicU64::new(0),
        }
    }

    /// Registry this ledger writes to.
    pub fn registry(&self) -> &Arc<InMemoryRegistry> {
        &self.registry
    }

    /// Reject every subsequent submission with `reason`, or accept again.
    pub fn set_reject(&self, reason: Option<&str>) {
        self.behaviour.lock().reject = reason.map(str::to_string);
    }

    /// Hold every subsequent submission for `delay` before answering.
    pub fn set_delay(&self, delay: Option<Duration>) {
        self.behaviour.lock().delay = delay;
    }

    /// All submissions so far, accepted or not.
    pub fn submissions(&self) -> Vec<SubmittedTransaction> {
        self.submitted.lock().clone()
    }

    /// Number of submissions so far.
    pub fn submission_count(&self) -> usize {
        self.submitted.lock().len()
    }

    /// Deed address for a sealed bid placed in `tx_hash`.
    fn deed_for(tx_hash: &TxHash) -> Address {
        let mut bytes = [0u8; 20];
        bytes.copy_from_slice(&tx_hash.as_bytes()[12..]);
        Address::new(bytes)
    }

    fn apply(&self, to: Address, from: Address, call: &ContractCall, tx_hash: &TxHash) {
        match call {
            ContractCall::StartAuction { label_hash } => {
                self.registry.set_state(to, *label_hash, LifecycleState::Auction);
            }
            ContractCall::StartAuctionsAndBid {
                label_hashes,
                sealed_bid,
            } => {
                for label_hash in label_hashes {
                    self.registry.set_state(to, *label_hash, LifecycleState::Auction);
                }
                self.registry
                    .set_sealed_bid(to, from, *sealed_bid, Self::deed_for(tx_hash));
            }
            ContractCall::NewBid { sealed_bid } => {
                self.registry
                    .set_sealed_bid(to, from, *sealed_bid, Self::deed_for(tx_hash));
            }
            ContractCall::SetAddr { node, address } => {
                self.registry.set_address(to, *node, *address);
            }
            // Phase changes after reveal are driven by time on a real chain
            ContractCall::UnsealBid { .. } | ContractCall::FinalizeAuction { .. } => {}
        }
    }
}

#[async_trait]
impl LedgerSubmitter for InMemoryLedger {
    async fn submit(
        &self,
        session: &TransactionSession,
        call: &ContractCall,
    ) -> Result<TxHash, LedgerError> {
        let (reject, delay) = {
            let behaviour = self.behaviour.lock();
            (behaviour.reject.clone(), behaviour.delay)
        };

        let mut record = SubmittedTransaction {
            from: session.from(),
            to: session.target(),
            value: session.value(),
            chain_id: session.chain_id(),
            gas_price: session.gas_price(),
            nonce: session.nonce(),
            call: call.clone(),
            tx_hash: None,
        };

        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }

        if let Some(reason) = reject {
            self.submitted.lock().push(record);
            return Err(LedgerError::Rejected(reason));
        }

        let seq = self.sequence.fetch_add(1, Ordering::SeqCst);
        let mut preimage = Vec::new();
        preimage.extend_from_slice(record.from.as_bytes());
        preimage.extend_from_slice(&seq.to_be_bytes());
        preimage.extend_from_slice(&call.encode());
        let tx_hash: Hash = keccak256(&preimage);

        self.apply(record.to, record.from, call, &tx_hash);
        record.tx_hash = Some(tx_hash);
        self.submitted.lock().push(record);

        debug!(call = call.name(), %tx_hash, "In-memory ledger accepted transaction");
        Ok(tx_hash)
    }
}
