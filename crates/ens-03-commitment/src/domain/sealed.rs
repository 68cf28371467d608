//! # Commitments
//!
//! ```text
//! salt_hash  = keccak256(salt)
//! commitment = keccak256(label_hash ++ bidder[20] ++ amount[32] ++ salt_hash)
//! ```

use ens_01_codec::{abi::u256_word, keccak256};
use sha3::{Digest, Keccak256};
use shared_types::{Address, Hash, U256};

use super::bid::Bid;

/// Hash of the salt text, the form the registrar receives on reveal.
#[must_use]
pub fn salt_hash(salt: &str) -> Hash {
    keccak256(salt.as_bytes())
}

/// Commitment over the bid fields.
#[must_use]
pub fn seal(label_hash: Hash, bidder: Address, amount: U256, salt_hash: Hash) -> Hash {
    let mut hasher = Keccak256::new();
    hasher.update(label_hash.as_bytes());
    hasher.update(bidder.as_bytes());
    hasher.update(u256_word(amount));
    hasher.update(salt_hash.as_bytes());
    Hash::new(hasher.finalize().into())
}

/// Commitment of a bid's true fields.
#[must_use]
pub fn commitment_for(bid: &Bid) -> Hash {
    seal(bid.label_hash(), bid.bidder(), bid.amount(), salt_hash(bid.salt()))
}

/// Recompute the commitment from the claimed bid and compare.
#[must_use]
pub fn verify_reveal(bid: &Bid, commitment: &Hash) -> bool {
    commitment_for(bid) == *commitment
}

/// One candidate in a sealed bid: the identifier it opens an auction for and
/// the commitment standing for it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommitmentEntry {
    /// Registrar key (real label hash or a placeholder).
    pub label_hash: Hash,
    /// Commitment value. Only the real entry's commitment is submitted;
    /// decoys contribute their label hash alone.
    pub commitment: Hash,
}

/// The real commitment hidden among decoys.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SealedBid {
    entries: Vec<CommitmentEntry>,
    real_index: usize,
}

impl SealedBid {
    pub(crate) fn new(entries: Vec<CommitmentEntry>, real_index: usize) -> Self {
        debug_assert!(real_index < entries.len());
        Self { entries, real_index }
    }

    /// All entries in submission order.
    pub fn entries(&self) -> &[CommitmentEntry] {
        &self.entries
    }

    /// Position of the real entry.
    pub fn real_index(&self) -> usize {
        self.real_index
    }

    /// The real entry.
    pub fn real(&self) -> &CommitmentEntry {
        &self.entries[self.real_index]
    }

    /// The real commitment, the value submitted as the sealed bid.
    pub fn commitment(&self) -> Hash {
        self.real().commitment
    }

    /// Identifiers of every entry, in submission order.
    pub fn label_hashes(&self) -> Vec<Hash> {
        self.entries.iter().map(|e| e.label_hash).collect()
    }

    /// Number of decoy entries.
    pub fn decoy_count(&self) -> usize {
        self.entries.len() - 1
    }
}
