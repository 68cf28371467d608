//! # Contract ABI Words
//!
//! Minimal ABI encoding for the registry, registrar and resolver calls the
//! client makes. Only the token shapes those calls use are supported:
//! static 32-byte words and dynamic `bytes32[]` arrays.

use shared_types::{Address, Hash, U256};

use crate::errors::CodecError;
use crate::namehash::keccak256;

/// One 32-byte ABI word.
pub type Word = [u8; 32];

/// A call argument.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    /// `address`, left-padded to a word.
    Address(Address),
    /// `bytes32`.
    FixedBytes(Hash),
    /// `uint256`.
    Uint(U256),
    /// `bytes32[]`, encoded in the tail with a length prefix.
    FixedBytesArray(Vec<Hash>),
}

impl Token {
    fn is_dynamic(&self) -> bool {
        matches!(self, Self::FixedBytesArray(_))
    }
}

/// First four bytes of the Keccak-256 of a canonical function signature.
#[must_use]
pub fn selector(signature: &str) -> [u8; 4] {
    let hash = keccak256(signature.as_bytes());
    let mut out = [0u8; 4];
    out.copy_from_slice(&hash.as_bytes()[..4]);
    out
}

/// Encode a full call: selector followed by head and tail sections.
#[must_use]
pub fn encode_call(signature: &str, tokens: &[Token]) -> Vec<u8> {
    let head_len = tokens.len() * 32;
    let mut head: Vec<Word> = Vec::with_capacity(tokens.len());
    let mut tail: Vec<Word> = Vec::new();

    for token in tokens {
        if token.is_dynamic() {
            head.push(u256_word(U256::from(head_len + tail.len() * 32)));
        }
        match token {
            Token::Address(addr) => head.push(address_word(*addr)),
            Token::FixedBytes(hash) => head.push(*hash.as_bytes()),
            Token::Uint(value) => head.push(u256_word(*value)),
            Token::FixedBytesArray(items) => {
                tail.push(u256_word(U256::from(items.len())));
                tail.extend(items.iter().map(|h| *h.as_bytes()));
            }
        }
    }

    let mut out = Vec::with_capacity(4 + (head.len() + tail.len()) * 32);
    out.extend_from_slice(&selector(signature));
    for word in head.iter().chain(tail.iter()) {
        out.extend_from_slice(word);
    }
    out
}

/// Split return data into words, requiring at least `expected` of them.
///
/// # Errors
///
/// `MalformedAbi` when the data is not word-aligned, `ShortAbi` when it holds
/// fewer than `expected` words.
pub fn decode_words(data: &[u8], expected: usize) -> Result<Vec<Word>, CodecError> {
    if data.len() % 32 != 0 {
        return Err(CodecError::MalformedAbi { len: data.len() });
    }
    let words: Vec<Word> = data
        .chunks_exact(32)
        .map(|chunk| {
            let mut word = [0u8; 32];
            word.copy_from_slice(chunk);
            word
        })
        .collect();
    if words.len() < expected {
        return Err(CodecError::ShortAbi {
            expected,
            actual: words.len(),
        });
    }
    Ok(words)
}

/// Left-pad an address into a word.
#[must_use]
pub fn address_word(addr: Address) -> Word {
    let mut word = [0u8; 32];
    word[12..].copy_from_slice(addr.as_bytes());
    word
}

/// Big-endian word of an integer.
#[must_use]
pub fn u256_word(value: U256) -> Word {
    let mut word = [0u8; 32];
    value.to_big_endian(&mut word);
    word
}

/// Low 20 bytes of a word.
#[must_use]
pub fn word_to_address(word: &Word) -> Address {
    let mut bytes = [0u8; 20];
    bytes.copy_from_slice(&word[12..]);
    Address::new(bytes)
}

/// Big-endian integer of a word.
#[must_use]
pub fn word_to_u256(word: &Word) -> U256 {
    U256::from_big_endian(word)
}

// =============================================================================
// TESTS
// =============================================================================
