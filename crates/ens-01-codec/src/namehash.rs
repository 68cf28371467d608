//! # Name Identifiers
//!
//! Namehash and label hash derivation for dotted names.
//!
//! ```text
//! namehash("")      = 0x00..00
//! namehash(l.rest)  = keccak256(namehash(rest) ++ keccak256(l))
//! ```

use std::fmt;

use sha3::{Digest, Keccak256};
use shared_types::Hash;

use crate::errors::CodecError;

/// Keccak-256 of arbitrary bytes.
#[must_use]
pub fn keccak256(data: impl AsRef<[u8]>) -> Hash {
    Hash::new(Keccak256::digest(data.as_ref()).into())
}

/// Hash of a single label. This is the key the auction registrar uses.
#[must_use]
pub fn label_hash(label: &str) -> Hash {
    keccak256(label.as_bytes())
}

/// Namehash of a dotted name. The empty string is the root.
#[must_use]
pub fn namehash(name: &str) -> Hash {
    if name.is_empty() {
        return Hash::ZERO;
    }
    name.rsplit('.').fold(Hash::ZERO, |node, label| {
        let mut hasher = Keccak256::new();
        hasher.update(node.as_bytes());
        hasher.update(label_hash(label).as_bytes());
        Hash::new(hasher.finalize().into())
    })
}

/// A validated, lowercased dotted name with its derived identifier.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Name {
    text: String,
    node: Hash,
}

impl Name {
    /// Parse and normalise a name.
    ///
    /// # Errors
    ///
    /// Fails with `InvalidName` on empty input, empty labels (leading,
    /// trailing or doubled separators) or embedded whitespace.
    pub fn parse(input: &str) -> Result<Self, CodecError> {
        let text = input.trim().to_lowercase();
        if text.is_empty() {
            return Err(CodecError::name(input, "empty"));
        }
        if text.split('.').any(str::is_empty) {
            return Err(CodecError::name(input, "empty label"));
        }
        if text.chars().any(char::is_whitespace) {
            return Err(CodecError::name(input, "whitespace in name"));
        }
        let node = namehash(&text);
        Ok(Self { text, node })
    }

    /// Normalised text form.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Namehash of the full name (registry / resolver key).
    #[must_use]
    pub fn node(&self) -> Hash {
        self.node
    }

    /// Labels from left to right.
    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.text.split('.')
    }

    /// Number of separators in the name.
    #[must_use]
    pub fn separator_count(&self) -> usize {
        self.text.matches('.').count()
    }

    /// Left-most label ("enstest" for "enstest.eth").
    #[must_use]
    pub fn first_label(&self) -> &str {
        self.text.split('.').next().unwrap_or_default()
    }

    /// Hash of the left-most label.
    #[must_use]
    pub fn label_hash(&self) -> Hash {
        label_hash(self.first_label())
    }

    /// Right-most label ("eth" for "enstest.eth").
    #[must_use]
    pub fn top_level(&self) -> &str {
        self.text.rsplit('.').next().unwrap_or_default()
    }

    /// Namehash of the top-level domain, whose owner is the registrar.
    #[must_use]
    pub fn top_level_node(&self) -> Hash {
        namehash(self.top_level())
    }
}

impl fmt::Debug for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Name({})", self.text)
    }
}

impl fmt::Display for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rand::distributions::Alphanumeric;
    use rand::{Rng, SeedableRng};
    use std::collections::HashSet;

    fn hex32(s: &str) -> Hash {
        s.parse().unwrap()
    }

    #[test]
    fn test_namehash_known_vectors() {
        assert_eq!(namehash(""), Hash::ZERO);
        assert_eq!(
            namehash("eth"),
            hex32("0x93cdeb708b7545dc668eb9280176169d1c33cfd8ed6f04690a0bcc88a93fc4ae")
        );
        assert_eq!(
            namehash("foo.eth"),
            hex32("0xde9b09fd7c5f901e23a3f19fecc54828e9c848539801e86591bd9801b019f84f")
        );
    }

    #[test]
    fn test_label_hash_known_vector() {
        assert_eq!(
            label_hash("eth"),
            hex32("0x4f5b812789fc606be1b3b16908db13fc7a9adf7ca72641f84d75b47069d3d7f0")
        );
    }

    #[test]
    fn test_name_parts() {
        let name = Name::parse("EnsTest.eth").unwrap();
        assert_eq!(name.as_str(), "enstest.eth");
        assert_eq!(name.first_label(), "enstest");
        assert_eq!(name.top_level(), "eth");
        assert_eq!(name.separator_count(), 1);
        assert_eq!(name.labels().count(), 2);
        assert_eq!(name.label_hash(), label_hash("enstest"));
        assert_eq!(name.top_level_node(), namehash("eth"));
        assert_eq!(name.node(), namehash("enstest.eth"));
    }

    #[test]
    fn test_name_rejects_malformed() {
        for input in ["", "  ", ".eth", "foo..eth", "foo.", "foo bar.eth"] {
            assert!(Name::parse(input).is_err(), "{input:?} should be rejected");
        }
    }

    #[test]
    fn test_namehash_deterministic() {
        let a = Name::parse("enstest.eth").unwrap();
        let b = Name::parse("enstest.eth").unwrap();
        assert_eq!(a.node(), b.node());
        assert_eq!(a, b);
    }

    #[test]
    fn test_namehash_distinct_for_random_labels() {
        let mut rng = rand::rngs::StdRng::seed_from_u64(7);
        let mut labels = HashSet::new();
        while labels.len() < 2_000 {
            let len = rng.gen_range(1..16);
            let label: String = (&mut rng)
                .sample_iter(&Alphanumeric)
                .take(len)
                .map(|c| char::from(c).to_ascii_lowercase())
                .collect();
            labels.insert(label);
        }

        let hashes: HashSet<Hash> = labels
            .iter()
            .map(|l| namehash(&format!("{l}.eth")))
            .collect();
        assert_eq!(hashes.len(), labels.len());
    }
}
