//! # Commitment Benchmarks
//!
//! | Path | Work |
//! |------|------|
//! | `namehash` | One Keccak-256 per label plus one per level |
//! | `seal` | One Keccak-256 over 104 bytes |
//! | `build_commitment` | One seal per entry plus random draws per decoy |

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use ens_01_codec::{label_hash, namehash, parse_amount};
use ens_03_commitment::{salt_hash, seal, Bid, CommitmentEngine};
use rand::rngs::StdRng;
use rand::SeedableRng;
use shared_types::{Address, U256};

// ============================================================================
// ENS-01: Name hashing
// ============================================================================

fn bench_namehash(c: &mut Criterion) {
    let mut group = c.benchmark_group("ens-01-namehash");
    for name in ["eth", "enstest.eth", "wallet.enstest.eth", "a.b.c.d.e.f.eth"] {
        group.bench_with_input(BenchmarkId::from_parameter(name), name, |b, name| {
            b.iter(|| namehash(black_box(name)))
        });
    }
    group.finish();
}

fn bench_parse_amount(c: &mut Criterion) {
    c.bench_function("ens-01-parse-amount", |b| {
        b.iter(|| parse_amount(black_box("0.01 Ether")))
    });
}

// ============================================================================
// ENS-03: Sealing
// ============================================================================

fn bench_seal(c: &mut Criterion) {
    let label = label_hash("enstest");
    let bidder = Address::new([0xb1; 20]);
    let amount = U256::from(10u64).pow(U256::from(16));
    let salt = salt_hash("secret");
    c.bench_function("ens-03-seal", |b| {
        b.iter(|| seal(black_box(label), bidder, amount, salt))
    });
}

fn bench_build_commitment(c: &mut Criterion) {
    let mut group = c.benchmark_group("ens-03-build-commitment");
    let engine = CommitmentEngine::new(StdRng::seed_from_u64(42));
    let amount = U256::from(10u64).pow(U256::from(16));

    for decoys in [0usize, 3, 16, 64] {
        let bid = Bid::new(Address::new([0xb1; 20]), label_hash("enstest"), amount, "secret")
            .with_decoys(decoys);
        group.bench_with_input(BenchmarkId::from_parameter(decoys), &bid, |b, bid| {
            b.iter(|| engine.build_commitment(black_box(bid)))
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_namehash,
    bench_parse_amount,
    bench_seal,
    bench_build_commitment
);
criterion_main!(benches);
