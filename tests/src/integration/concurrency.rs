//! # Concurrency
//!
//! Operations from one account are serialised; operations from different
//! accounts run side by side.

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::time::{Duration, Instant};

    use ens_01_codec::namehash;
    use ens_02_state_oracle::{InMemoryRegistry, StateOracle};
    use ens_04_tx_session::{InMemoryWallet, TransactionConfig};
    use ens_05_auction::{
        AuctionApi, AuctionOrchestrator, InMemoryLedger, RegistryNameResolver,
        StartAuctionRequest,
    };
    use shared_types::Address;

    const REGISTRAR: Address = Address::new([0x60; 20]);
    const ALICE: Address = Address::new([0xa1; 20]);
    const BOB: Address = Address::new([0xb0; 20]);
    const DELAY: Duration = Duration::from_millis(100);

    type Orchestrator = AuctionOrchestrator<
        InMemoryRegistry,
        InMemoryWallet,
        InMemoryLedger,
        RegistryNameResolver<InMemoryRegistry>,
    >;

    fn setup() -> (Arc<InMemoryLedger>, Arc<Orchestrator>) {
        let registry = Arc::new(InMemoryRegistry::new());
        registry.set_owner(namehash("eth"), REGISTRAR);
        let wallet = Arc::new(InMemoryWallet::new());
        wallet.add_account(ALICE, "pw");
        wallet.add_account(BOB, "pw");
        let ledger = Arc::new(InMemoryLedger::new(Arc::clone(&registry)));
        ledger.set_delay(Some(DELAY));
        let resolver = Arc::new(RegistryNameResolver::new(StateOracle::new(Arc::clone(
            &registry,
        ))));
        let ens = AuctionOrchestrator::new(registry, wallet, Arc::clone(&ledger), resolver);
        (ledger, Arc::new(ens))
    }

    fn start(ens: &Arc<Orchestrator>, name: &str, from: Address) -> tokio::task::JoinHandle<()> {
        let ens = Arc::clone(ens);
        let request =
            StartAuctionRequest::new(name, from, TransactionConfig::with_passphrase("pw"));
        tokio::spawn(async move {
            ens.start_auction(request).await.unwrap();
        })
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_same_account_submissions_are_serialised() {
        let (ledger, ens) = setup();
        let began = Instant::now();
        let a = start(&ens, "firstname.eth", ALICE);
        let b = start(&ens, "secondname.eth", ALICE);
        a.await.unwrap();
        b.await.unwrap();

        assert!(began.elapsed() >= DELAY * 2);
        assert_eq!(ledger.submission_count(), 2);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_different_accounts_run_in_parallel() {
        let (ledger, ens) = setup();
        let began = Instant::now();
        let a = start(&ens, "alicename.eth", ALICE);
        let b = start(&ens, "bobsname1.eth", BOB);
        a.await.unwrap();
        b.await.unwrap();

        assert!(began.elapsed() < DELAY * 2);
        assert_eq!(ledger.submission_count(), 2);
        assert!(ens.locks().is_empty());
    }
}
