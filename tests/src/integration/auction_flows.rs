//! # Auction Lifecycle Flows
//!
//! Drives names through the full registrar lifecycle with every subsystem
//! wired together: codec → state oracle → commitment engine → session
//! builder → orchestrator → in-memory ledger.
//!
//! The in-memory ledger applies accepted calls to the registry (auctions
//! open, deeds appear, address records change). Phase changes that a real
//! registrar drives by time (auction → reveal → owned) are set by the test.

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use ens_01_codec::{label_hash, namehash, parse_amount, Name};
    use ens_02_state_oracle::{InMemoryRegistry, LifecycleState, RegistryReader, StateOracle};
    use ens_03_commitment::{commitment_for, salt_hash, Bid, CommitmentEngine};
    use ens_04_tx_session::{InMemoryWallet, TransactionConfig};
    use ens_05_auction::{
        AuctionApi, AuctionError, AuctionOrchestrator, BidRequest, ContractCall, ErrorKind,
        FinalizeRequest, InMemoryLedger, RegistryNameResolver, RevealRequest, SetAddressRequest,
        StartAuctionRequest,
    };
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use shared_types::{Address, U256};

    const REGISTRAR: Address = Address::new([0x60; 20]);
    const RESOLVER: Address = Address::new([0x70; 20]);
    const ALICE: Address = Address::new([0xa1; 20]);
    const BOB: Address = Address::new([0xb0; 20]);

    type Orchestrator = AuctionOrchestrator<
        InMemoryRegistry,
        InMemoryWallet,
        InMemoryLedger,
        RegistryNameResolver<InMemoryRegistry>,
        StdRng,
    >;

    // =============================================================================
    // TEST FIXTURES
    // =============================================================================

    struct World {
        registry: Arc<InMemoryRegistry>,
        ledger: Arc<InMemoryLedger>,
        ens: Orchestrator,
    }

    impl World {
        fn new(seed: u64) -> Self {
            let registry = Arc::new(InMemoryRegistry::new());
            registry.set_owner(namehash("eth"), REGISTRAR);

            let wallet = Arc::new(InMemoryWallet::new());
            wallet.add_account(ALICE, "alice-pw");
            wallet.add_account(BOB, "bob-pw");

            let ledger = Arc::new(InMemoryLedger::new(Arc::clone(&registry)));
            let resolver = Arc::new(RegistryNameResolver::new(StateOracle::new(Arc::clone(
                &registry,
            ))));
            let ens = AuctionOrchestrator::with_engine(
                Arc::clone(&registry),
                wallet,
                Arc::clone(&ledger),
                resolver,
                CommitmentEngine::new(StdRng::seed_from_u64(seed)),
            );
            Self {
                registry,
                ledger,
                ens,
            }
        }

        fn advance(&self, label: &str, state: LifecycleState) {
            self.registry.set_state(REGISTRAR, label_hash(label), state);
        }
    }

    fn ether(text: &str) -> U256 {
        parse_amount(text).unwrap()
    }

    // =============================================================================
    // END-TO-END SCENARIO
    // =============================================================================

    /// enstest.eth, Available, bid 0.01 Ether, no mask, salt "secret", 3 decoys.
    #[tokio::test]
    async fn test_start_auction_with_sealed_bid_end_to_end() {
        let world = World::new(1);
        assert_eq!(
            world.ens.query_state("enstest.eth").await.unwrap(),
            LifecycleState::Available
        );

        let request = StartAuctionRequest {
            bid: ether("0.01 Ether"),
            salt: "secret".to_string(),
            decoys: 3,
            ..StartAuctionRequest::new(
                "enstest.eth",
                ALICE,
                TransactionConfig::with_passphrase("alice-pw"),
            )
        };
        let tx_hash = world.ens.start_auction(request).await.unwrap();

        let submitted = world.ledger.submissions();
        assert_eq!(submitted.len(), 1);
        let sent = &submitted[0];
        assert_eq!(sent.tx_hash, Some(tx_hash));
        assert_eq!(sent.value, U256::from(10u64).pow(U256::from(16)));
        assert_eq!(sent.gas_price, U256::from(4_000_000_000u64));

        let ContractCall::StartAuctionsAndBid {
            label_hashes,
            sealed_bid,
        } = &sent.call
        else {
            panic!("expected the combined start-and-bid call, got {:?}", sent.call);
        };
        assert_eq!(label_hashes.len(), 4);
        assert_eq!(
            label_hashes
                .iter()
                .filter(|h| **h == label_hash("enstest"))
                .count(),
            1
        );
        let real = Bid::new(ALICE, label_hash("enstest"), ether("0.01 Ether"), "secret");
        assert_eq!(*sealed_bid, commitment_for(&real));

        // every listed identifier now has an open auction
        for hash in label_hashes {
            let entry = world
                .ens
                .oracle()
                .reader()
                .auction_entry(REGISTRAR, *hash)
                .await
                .unwrap();
            assert_eq!(entry.state().unwrap(), LifecycleState::Auction);
        }
    }

    // =============================================================================
    // FULL LIFECYCLE
    // =============================================================================

    #[tokio::test]
    async fn test_full_lifecycle() {
        let world = World::new(2);
        let name = "lifecycle.eth";

        // Alice opens the auction with a masked bid
        world
            .ens
            .start_auction(StartAuctionRequest {
                bid: ether("1 Ether"),
                mask: Some("3 Ether".to_string()),
                salt: "alice-salt".to_string(),
                ..StartAuctionRequest::new(
                    name,
                    ALICE,
                    TransactionConfig::with_passphrase("alice-pw"),
                )
            })
            .await
            .unwrap();
        assert_eq!(world.ledger.submissions()[0].value, ether("3 Ether"));
        assert_eq!(
            world.ens.query_state(name).await.unwrap(),
            LifecycleState::Auction
        );

        // Bob bids during the auction
        world
            .ens
            .place_bid(BidRequest {
                name: name.to_string(),
                bidder: BOB,
                bid: ether("0.5 Ether"),
                mask: None,
                salt: "bob-salt".to_string(),
                config: TransactionConfig::with_passphrase("bob-pw"),
            })
            .await
            .unwrap();

        // Bidding closes
        world.advance("lifecycle", LifecycleState::Reveal);
        for (bidder, amount, salt, pw) in [
            (ALICE, "1 Ether", "alice-salt", "alice-pw"),
            (BOB, "0.5 Ether", "bob-salt", "bob-pw"),
        ] {
            world
                .ens
                .reveal_bid(RevealRequest {
                    name: name.to_string(),
                    bidder,
                    bid: ether(amount),
                    salt: salt.to_string(),
                    config: TransactionConfig::with_passphrase(pw),
                })
                .await
                .unwrap();
        }

        let reveals: Vec<_> = world
            .ledger
            .submissions()
            .into_iter()
            .filter(|s| matches!(s.call, ContractCall::UnsealBid { .. }))
            .collect();
        assert_eq!(reveals.len(), 2);
        assert_eq!(
            reveals[0].call,
            ContractCall::UnsealBid {
                label_hash: label_hash("lifecycle"),
                value: ether("1 Ether"),
                salt_hash: salt_hash("alice-salt"),
            }
        );
        assert!(reveals.iter().all(|s| s.value.is_zero()));

        // Alice won
        world.advance("lifecycle", LifecycleState::Owned);
        world
            .ens
            .finalize_auction(FinalizeRequest {
                name: name.to_string(),
                winner: ALICE,
                config: TransactionConfig::with_passphrase("alice-pw"),
            })
            .await
            .unwrap();

        // Registry hands the name to Alice, who points it at Bob's name
        let node = namehash(name);
        world.registry.set_owner(node, ALICE);
        world.registry.set_resolver(node, RESOLVER);
        let bob_node = Name::parse("bobwallet.eth").unwrap().node();
        world.registry.set_resolver(bob_node, RESOLVER);
        world.registry.set_address(RESOLVER, bob_node, BOB);

        world
            .ens
            .set_address(SetAddressRequest {
                name: name.to_string(),
                target: "bobwallet.eth".to_string(),
                config: TransactionConfig::with_passphrase("alice-pw"),
            })
            .await
            .unwrap();

        let resolved = RegistryNameResolver::new(StateOracle::new(Arc::clone(&world.registry)));
        assert_eq!(
            ens_05_auction::NameResolver::resolve(&resolved, name)
                .await
                .unwrap(),
            BOB
        );
        assert_eq!(world.ledger.submission_count(), 6);
    }

    // =============================================================================
    // FAILURE PATHS
    // =============================================================================

    #[tokio::test]
    async fn test_reveal_with_wrong_amount_never_submits() {
        let world = World::new(3);
        world
            .ens
            .start_auction(StartAuctionRequest {
                bid: ether("1 Ether"),
                salt: "s".to_string(),
                ..StartAuctionRequest::new(
                    "wrongamount.eth",
                    ALICE,
                    TransactionConfig::with_passphrase("alice-pw"),
                )
            })
            .await
            .unwrap();
        world.advance("wrongamount", LifecycleState::Reveal);

        let err = world
            .ens
            .reveal_bid(RevealRequest {
                name: "wrongamount.eth".to_string(),
                bidder: ALICE,
                bid: ether("2 Ether"),
                salt: "s".to_string(),
                config: TransactionConfig::with_passphrase("alice-pw"),
            })
            .await
            .unwrap_err();
        assert!(matches!(err, AuctionError::RevealMismatch { .. }));
        assert_eq!(world.ledger.submission_count(), 1);
    }

    #[tokio::test]
    async fn test_second_start_sees_running_auction() {
        let world = World::new(4);
        let request = || {
            StartAuctionRequest::new(
                "contested.eth",
                ALICE,
                TransactionConfig::with_passphrase("alice-pw"),
            )
        };
        world.ens.start_auction(request()).await.unwrap();
        let err = world.ens.start_auction(request()).await.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidState);
        assert_eq!(world.ledger.submission_count(), 1);
    }

    #[tokio::test]
    async fn test_forbidden_name_is_a_dead_end() {
        let world = World::new(5);
        world.advance("forbidden", LifecycleState::Forbidden);
        let err = world
            .ens
            .start_auction(StartAuctionRequest::new(
                "forbidden.eth",
                ALICE,
                TransactionConfig::with_passphrase("alice-pw"),
            ))
            .await
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidState);
    }

    #[tokio::test]
    async fn test_unreachable_ledger_is_network_error() {
        let world = World::new(6);
        world.registry.set_unreachable(Some("connection refused"));
        let err = world
            .ens
            .start_auction(StartAuctionRequest::new(
                "offline.eth",
                ALICE,
                TransactionConfig::with_passphrase("alice-pw"),
            ))
            .await
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::NetworkError);
        assert_eq!(world.ledger.submission_count(), 0);
    }

    #[tokio::test]
    async fn test_missing_registrar() {
        let world = World::new(7);
        let err = world
            .ens
            .start_auction(StartAuctionRequest::new(
                "somename.test",
                ALICE,
                TransactionConfig::with_passphrase("alice-pw"),
            ))
            .await
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidState);
        assert!(err.to_string().contains("test"));
    }
}
