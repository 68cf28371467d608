//! # Commitment Engine
//!
//! Builds sealed bids. The randomness source is injected so tests can seed
//! it and assert exact commitments; production uses the OS generator.

use parking_lot::Mutex;
use rand::rngs::OsRng;
use rand::{CryptoRng, Rng, RngCore};
use shared_types::{Hash, U256};
use tracing::debug;

use crate::domain::{commitment_for, seal, verify_reveal, Bid, CommitmentEntry, SealedBid};
use crate::errors::CommitmentError;

/// Upper bound on decoys per sealed bid.
pub const MAX_DECOYS: usize = 64;

/// Sealed-bid builder over an injected random source.
pub struct CommitmentEngine<R: RngCore + CryptoRng + Send = OsRng> {
    rng: Mutex<R>,
}

impl Default for CommitmentEngine<OsRng> {
    fn default() -> Self {
        Self::new(OsRng)
    }
}

impl<R: RngCore + CryptoRng + Send> CommitmentEngine<R> {
    /// Create an engine drawing salts and placeholders from `rng`.
    pub fn new(rng: R) -> Self {
        Self {
            rng: Mutex::new(rng),
        }
    }

    /// Build the sealed bid for `bid`.
    ///
    /// Returns `Ok(None)` for a zero amount: there is nothing to seal and the
    /// caller starts the auction without a bid.
    ///
    /// # Errors
    ///
    /// `SaltRequired` for a non-zero bid with an empty salt, `TooManyDecoys`
    /// above `MAX_DECOYS`.
    pub fn build_commitment(&self, bid: &Bid) -> Result<Option<SealedBid>, CommitmentError> {
        if bid.is_zero() {
            return Ok(None);
        }
        if bid.salt().is_empty() {
            return Err(CommitmentError::SaltRequired);
        }
        if bid.decoys() > MAX_DECOYS {
            return Err(CommitmentError::TooManyDecoys {
                requested: bid.decoys(),
                max: MAX_DECOYS,
            });
        }

        let real = CommitmentEntry {
            label_hash: bid.label_hash(),
            commitment: commitment_for(bid),
        };

        let mut rng = self.rng.lock();
        let mut entries: Vec<CommitmentEntry> = (0..bid.decoys())
            .map(|_| {
                let placeholder = random_hash(&mut *rng);
                let salt = random_hash(&mut *rng);
                CommitmentEntry {
                    label_hash: placeholder,
                    commitment: seal(placeholder, bid.bidder(), U256::zero(), salt),
                }
            })
            .collect();
        let real_index = rng.gen_range(0..=entries.len());
        entries.insert(real_index, real);

        debug!(entries = entries.len(), "Built sealed bid");
        Ok(Some(SealedBid::new(entries, real_index)))
    }

    /// Check a claimed bid against a commitment.
    pub fn verify_reveal(&self, bid: &Bid, commitment: &Hash) -> bool {
        verify_reveal(bid, commitment)
    }
}

fn random_hash<R: RngCore + ?Sized>(rng: &mut R) -> Hash {
    let mut bytes = [0u8; 32];
    rng.fill_bytes(&mut bytes);
    Hash::new(bytes)
}

// =============================================================================
// TESTS
// =============================================================================
