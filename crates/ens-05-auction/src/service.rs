//! # Auction Orchestrator Service
//!
//! Drives a name through the sealed-bid auction and sets its address record.
//!
//! Every submitting operation follows the same sequence:
//!
//! 1. Validate the request locally (name shape, bid, salt, gas price, nonce)
//! 2. Take the signing account's lock
//! 3. Re-read the name's state and require the expected one
//! 4. Build the call (commitment for bids)
//! 5. Build the session, attach the value, submit within the timeout
//!
//! The attached value goes back to zero when step 5 finishes, whatever the
//! outcome. Dropping an operation before step 5 has no effect on the ledger;
//! once the transaction has been handed over it cannot be recalled.

use async_trait::async_trait;
use ens_01_codec::{format_amount, Name};
use ens_02_state_oracle::{LifecycleState, RegistryReader, StateOracle};
use ens_03_commitment::{
    commitment_for, effective_mask, salt_hash, Bid, CommitmentEngine, CommitmentError,
};
use ens_04_tx_session::{
    AccountLocks, SessionBuilder, TransactionConfig, TransactionSession, WalletProvider,
};
use rand::rngs::OsRng;
use rand::{CryptoRng, RngCore};
use shared_types::{Address, TxHash, U256};
use std::sync::Arc;
use std::time::Duration;
use tracing::{info, instrument, warn};

use crate::domain::{
    BidRequest, ContractCall, FinalizeRequest, RevealRequest, SetAddressRequest,
    StartAuctionRequest,
};
use crate::errors::AuctionError;
use crate::ports::{AuctionApi, LedgerSubmitter, NameResolver};

/// Shortest first label the registrar auctions.
pub const MIN_LABEL_LENGTH: usize = 7;

/// Attach `value` to `session`, submit `call`, and clear the value again.
///
/// # Errors
///
/// Ledger errors verbatim, or `SubmissionTimeout` when the ledger does not
/// answer within `timeout`. A timeout says nothing about whether the
/// transaction was mined.
pub async fn submit_with_value<L: LedgerSubmitter + ?Sized>(
    ledger: &L,
    session: &mut TransactionSession,
    call: &ContractCall,
    value: U256,
    timeout: Duration,
) -> Result<TxHash, AuctionError> {
    let attached = session.attach_value(value);
    match tokio::time::timeout(timeout, ledger.submit(&attached, call)).await {
        Ok(result) => Ok(result?),
        Err(_) => Err(AuctionError::SubmissionTimeout(timeout)),
    }
}

fn check_auction_name(name: &Name) -> Result<(), AuctionError> {
    if name.separator_count() != 1 {
        return Err(AuctionError::InvalidName {
            name: name.to_string(),
            reason: "name must have exactly one dot, e.g. example.eth".to_string(),
        });
    }
    if name.first_label().chars().count() < MIN_LABEL_LENGTH {
        return Err(AuctionError::InvalidName {
            name: name.to_string(),
            reason: format!("label must be at least {MIN_LABEL_LENGTH} characters"),
        });
    }
    Ok(())
}

fn salted_bid(
    name: &Name,
    bidder: Address,
    amount: U256,
    mask: Option<&str>,
    salt: &str,
) -> Result<Bid, AuctionError> {
    if salt.is_empty() {
        return Err(CommitmentError::SaltRequired.into());
    }
    let mask = effective_mask(amount, mask);
    Ok(Bid::new(bidder, name.label_hash(), amount, salt).with_mask(Some(mask)))
}

/// The auction state machine over its collaborators.
pub struct AuctionOrchestrator<R, W, L, N, G = OsRng>
where
    R: RegistryReader,
    W: WalletProvider,
    L: LedgerSubmitter,
    N: NameResolver,
    G: RngCore + CryptoRng + Send,
{
    oracle: StateOracle<R>,
    commitments: CommitmentEngine<G>,
    sessions: SessionBuilder<W>,
    ledger: Arc<L>,
    resolver: Arc<N>,
    locks: AccountLocks,
}

impl<R, W, L, N> AuctionOrchestrator<R, W, L, N, OsRng>
where
    R: RegistryReader,
    W: WalletProvider,
    L: LedgerSubmitter,
    N: NameResolver,
{
    /// Orchestrator drawing decoys from the OS generator.
    pub fn new(reader: Arc<R>, wallet: Arc<W>, ledger: Arc<L>, resolver: Arc<N>) -> Self {
        Self::with_engine(reader, wallet, ledger, resolver, CommitmentEngine::default())
    }
}

impl<R, W, L, N, G> AuctionOrchestrator<R, W, L, N, G>
where
    R: RegistryReader,
    W: WalletProvider,
    L: LedgerSubmitter,
    N: NameResolver,
    G: RngCore + CryptoRng + Send,
{
    /// Orchestrator with an explicit commitment engine.
    pub fn with_engine(
        reader: Arc<R>,
        wallet: Arc<W>,
        ledger: Arc<L>,
        resolver: Arc<N>,
        commitments: CommitmentEngine<G>,
    ) -> Self {
        Self {
            oracle: StateOracle::new(reader),
            commitments,
            sessions: SessionBuilder::new(wallet),
            ledger,
            resolver,
            locks: AccountLocks::new(),
        }
    }

    /// State oracle used for every guard.
    pub fn oracle(&self) -> &StateOracle<R> {
        &self.oracle
    }

    /// Per-account locks shared by all operations.
    pub fn locks(&self) -> &AccountLocks {
        &self.locks
    }

    async fn submit(
        &self,
        name: &Name,
        from: Address,
        target: Address,
        call: ContractCall,
        value: U256,
        config: &TransactionConfig,
    ) -> Result<TxHash, AuctionError> {
        let mut session = self.sessions.build(from, target, config).await?;
        let tx_hash = submit_with_value(
            self.ledger.as_ref(),
            &mut session,
            &call,
            value,
            config.submit_timeout,
        )
        .await
        .inspect_err(|e| {
            warn!(name = %name, call = call.name(), error = %e, "Submission failed");
        })?;

        info!(
            transaction_id = %tx_hash,
            network_id = session.chain_id(),
            name = %name,
            address = %from,
            call = call.name(),
            value = %format_amount(value),
            "Transaction submitted"
        );
        Ok(tx_hash)
    }
}

#[async_trait]
impl<R, W, L, N, G> AuctionApi for AuctionOrchestrator<R, W, L, N, G>
where
    R: RegistryReader,
    W: WalletProvider,
    L: LedgerSubmitter,
    N: NameResolver,
    G: RngCore + CryptoRng + Send,
{
    async fn query_state(&self, name: &str) -> Result<LifecycleState, AuctionError> {
        let name = Name::parse(name)?;
        Ok(self.oracle.query_state(&name).await?)
    }

    #[instrument(skip(self, request), fields(name = %request.name, bidder = %request.bidder))]
    async fn start_auction(&self, request: StartAuctionRequest) -> Result<TxHash, AuctionError> {
        let name = Name::parse(&request.name)?;
        check_auction_name(&name)?;
        let bid = if request.bid.is_zero() {
            None
        } else {
            Some(
                salted_bid(
                    &name,
                    request.bidder,
                    request.bid,
                    request.mask.as_deref(),
                    &request.salt,
                )?
                .with_decoys(request.decoys),
            )
        };
        request.config.validate()?;

        let _account = self.locks.acquire(request.bidder).await;
        let registrar = self.oracle.registrar_for(&name).await?;
        self.oracle
            .require_state_at(registrar, &name, LifecycleState::Available)
            .await?;

        let (call, value) = match bid {
            None => (
                ContractCall::StartAuction {
                    label_hash: name.label_hash(),
                },
                U256::zero(),
            ),
            Some(bid) => {
                let sealed = self
                    .commitments
                    .build_commitment(&bid)?
                    .ok_or(AuctionError::ZeroBid)?;
                info!(
                    name = %name,
                    bid = %format_amount(bid.amount()),
                    mask = %format_amount(bid.mask()),
                    entries = sealed.entries().len(),
                    "Sealed bid built"
                );
                (
                    ContractCall::StartAuctionsAndBid {
                        label_hashes: sealed.label_hashes(),
                        sealed_bid: sealed.commitment(),
                    },
                    bid.mask(),
                )
            }
        };

        self.submit(&name, request.bidder, registrar, call, value, &request.config)
            .await
    }

    #[instrument(skip(self, request), fields(name = %request.name, bidder = %request.bidder))]
    async fn place_bid(&self, request: BidRequest) -> Result<TxHash, AuctionError> {
        let name = Name::parse(&request.name)?;
        check_auction_name(&name)?;
        if request.bid.is_zero() {
            return Err(AuctionError::ZeroBid);
        }
        let bid = salted_bid(
            &name,
            request.bidder,
            request.bid,
            request.mask.as_deref(),
            &request.salt,
        )?;
        request.config.validate()?;

        let _account = self.locks.acquire(request.bidder).await;
        let registrar = self.oracle.registrar_for(&name).await?;
        self.oracle
            .require_state_at(registrar, &name, LifecycleState::Auction)
            .await?;

        let call = ContractCall::NewBid {
            sealed_bid: commitment_for(&bid),
        };
        self.submit(&name, request.bidder, registrar, call, bid.mask(), &request.config)
            .await
    }

    #[instrument(skip(self, request), fields(name = %request.name, bidder = %request.bidder))]
    async fn reveal_bid(&self, request: RevealRequest) -> Result<TxHash, AuctionError> {
        let name = Name::parse(&request.name)?;
        if request.bid.is_zero() {
            return Err(AuctionError::ZeroBid);
        }
        let bid = salted_bid(&name, request.bidder, request.bid, None, &request.salt)?;
        request.config.validate()?;

        let _account = self.locks.acquire(request.bidder).await;
        let registrar = self.oracle.registrar_for(&name).await?;
        self.oracle
            .require_state_at(registrar, &name, LifecycleState::Reveal)
            .await?;

        let commitment = commitment_for(&bid);
        if !self
            .oracle
            .sealed_bid_exists(registrar, request.bidder, commitment)
            .await?
        {
            warn!(name = %name, "No sealed bid matches the revealed values");
            return Err(AuctionError::RevealMismatch {
                name: name.to_string(),
            });
        }

        let call = ContractCall::UnsealBid {
            label_hash: name.label_hash(),
            value: bid.amount(),
            salt_hash: salt_hash(bid.salt()),
        };
        self.submit(&name, request.bidder, registrar, call, U256::zero(), &request.config)
            .await
    }

    #[instrument(skip(self, request), fields(name = %request.name, winner = %request.winner))]
    async fn finalize_auction(&self, request: FinalizeRequest) -> Result<TxHash, AuctionError> {
        let name = Name::parse(&request.name)?;
        request.config.validate()?;

        let _account = self.locks.acquire(request.winner).await;
        let registrar = self.oracle.registrar_for(&name).await?;
        self.oracle
            .require_state_at(registrar, &name, LifecycleState::Owned)
            .await?;

        let call = ContractCall::FinalizeAuction {
            label_hash: name.label_hash(),
        };
        self.submit(&name, request.winner, registrar, call, U256::zero(), &request.config)
            .await
    }

    #[instrument(skip(self, request), fields(name = %request.name, target = %request.target))]
    async fn set_address(&self, request: SetAddressRequest) -> Result<TxHash, AuctionError> {
        let name = Name::parse(&request.name)?;
        request.config.validate()?;

        let owner = self.oracle.owner_of(&name).await?;
        if owner.is_zero() {
            return Err(AuctionError::OwnerNotSet {
                name: name.to_string(),
            });
        }

        // Everything from the state guard to submission runs under the
        // owner's lock.
        let _account = self.locks.acquire(owner).await;
        self.oracle
            .require_state(&name, LifecycleState::Owned)
            .await?;
        let current = self.oracle.owner_of(&name).await?;
        if current != owner {
            return Err(AuctionError::OwnerChanged {
                name: name.to_string(),
                expected: owner,
                actual: current,
            });
        }
        let resolver = self.oracle.resolver_of(&name).await?;
        let address = self.resolver.resolve(&request.target).await?;

        let call = ContractCall::SetAddr {
            node: name.node(),
            address,
        };
        self.submit(&name, owner, resolver, call, U256::zero(), &request.config)
            .await
    }
}

// =============================================================================
// TESTS
// =============================================================================
