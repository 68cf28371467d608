//! # Bid
//!
//! A bid as the bidder knows it: true amount, mask sent as value, salt and
//! the number of decoys to hide it among.

use ens_01_codec::{format_amount, parse_amount};
use shared_types::{Address, Hash, U256};
use std::fmt;
use tracing::warn;
use zeroize::Zeroizing;

/// A sealed-bid auction bid.
///
/// The mask is never below the amount: the constructor raises it when it is
/// absent or smaller.
#[derive(Clone, PartialEq, Eq)]
pub struct Bid {
    bidder: Address,
    label_hash: Hash,
    amount: U256,
    mask: U256,
    salt: Zeroizing<String>,
    decoys: usize,
}

impl Bid {
    /// New bid with mask equal to the amount and no decoys.
    pub fn new(bidder: Address, label_hash: Hash, amount: U256, salt: impl Into<String>) -> Self {
        Self {
            bidder,
            label_hash,
            amount,
            mask: amount,
            salt: Zeroizing::new(salt.into()),
            decoys: 0,
        }
    }

    /// Set the mask. `None` or anything below the amount leaves mask = amount.
    #[must_use]
    pub fn with_mask(mut self, mask: Option<U256>) -> Self {
        self.mask = mask.map_or(self.amount, |m| m.max(self.amount));
        self
    }

    /// Set the decoy count.
    #[must_use]
    pub fn with_decoys(mut self, decoys: usize) -> Self {
        self.decoys = decoys;
        self
    }

    /// Bidding account.
    pub fn bidder(&self) -> Address {
        self.bidder
    }

    /// Registrar key of the name being bid on.
    pub fn label_hash(&self) -> Hash {
        self.label_hash
    }

    /// True bid amount in base units.
    pub fn amount(&self) -> U256 {
        self.amount
    }

    /// Value attached to the bidding transaction.
    pub fn mask(&self) -> U256 {
        self.mask
    }

    /// Secret salt text.
    pub fn salt(&self) -> &str {
        &self.salt
    }

    /// Number of decoy entries.
    pub fn decoys(&self) -> usize {
        self.decoys
    }

    /// True when there is nothing to seal.
    pub fn is_zero(&self) -> bool {
        self.amount.is_zero()
    }
}

impl fmt::Debug for Bid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Bid")
            .field("bidder", &self.bidder)
            .field("label_hash", &self.label_hash)
            .field("amount", &format_amount(self.amount))
            .field("mask", &format_amount(self.mask))
            .field("salt", &"<redacted>")
            .field("decoys", &self.decoys)
            .finish()
    }
}

/// Mask to attach for a bid given the raw `--mask` text.
///
/// Absent, empty, unparsable or smaller masks all fall back to the bid
/// amount. A provided mask that is discarded is logged.
#[must_use]
pub fn effective_mask(amount: U256, mask_text: Option<&str>) -> U256 {
    let Some(text) = mask_text.map(str::trim).filter(|t| !t.is_empty()) else {
        return amount;
    };
    match parse_amount(text) {
        Ok(mask) if mask >= amount => mask,
        Ok(mask) => {
            warn!(
                mask = %format_amount(mask),
                bid = %format_amount(amount),
                "Mask below bid, using bid as mask"
            );
            amount
        }
        Err(e) => {
            warn!(error = %e, "Unparsable mask, using bid as mask");
            amount
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bid(amount: u64) -> Bid {
        Bid::new(Address::ZERO, Hash::ZERO, U256::from(amount), "secret")
    }

    #[test]
    fn test_mask_defaults_to_amount() {
        assert_eq!(bid(100).mask(), U256::from(100));
        assert_eq!(bid(100).with_mask(None).mask(), U256::from(100));
    }

    #[test]
    fn test_mask_raised_to_amount() {
        assert_eq!(bid(100).with_mask(Some(U256::from(50))).mask(), U256::from(100));
    }

    #[test]
    fn test_larger_mask_kept() {
        assert_eq!(bid(100).with_mask(Some(U256::from(200))).mask(), U256::from(200));
    }

    #[test]
    fn test_effective_mask_from_text() {
        let amount = U256::from(100);
        assert_eq!(effective_mask(amount, None), amount);
        assert_eq!(effective_mask(amount, Some("")), amount);
        assert_eq!(effective_mask(amount, Some("50")), amount);
        assert_eq!(effective_mask(amount, Some("200")), U256::from(200));
        assert_eq!(effective_mask(amount, Some("not an amount")), amount);
    }

    #[test]
    fn test_debug_redacts_salt() {
        let text = format!("{:?}", bid(1));
        assert!(!text.contains("secret"));
        assert!(text.contains("<redacted>"));
    }
}
