//! # Contract Calls
//!
//! The registrar and resolver transactions the client submits.

use ens_01_codec::abi::{encode_call, Token};
use shared_types::{Address, Hash, U256};

/// A state-changing contract call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContractCall {
    /// Open an auction without bidding.
    StartAuction { label_hash: Hash },
    /// Open auctions for every listed identifier and place one sealed bid.
    StartAuctionsAndBid {
        label_hashes: Vec<Hash>,
        sealed_bid: Hash,
    },
    /// Place a sealed bid on a running auction.
    NewBid { sealed_bid: Hash },
    /// Reveal a sealed bid.
    UnsealBid {
        label_hash: Hash,
        value: U256,
        salt_hash: Hash,
    },
    /// Close an auction and register the winner.
    FinalizeAuction { label_hash: Hash },
    /// Set the address record of a node on its resolver.
    SetAddr { node: Hash, address: Address },
}

impl ContractCall {
    /// Canonical function signature.
    pub fn signature(&self) -> &'static str {
        match self {
            Self::StartAuction { .. } => "startAuction(bytes32)",
            Self::StartAuctionsAndBid { .. } => "startAuctionsAndBid(bytes32[],bytes32)",
            Self::NewBid { .. } => "newBid(bytes32)",
            Self::UnsealBid { .. } => "unsealBid(bytes32,uint256,bytes32)",
            Self::FinalizeAuction { .. } => "finalizeAuction(bytes32)",
            Self::SetAddr { .. } => "setAddr(bytes32,address)",
        }
    }

    /// Short name for logs.
    pub fn name(&self) -> &'static str {
        match self {
            Self::StartAuction { .. } => "StartAuction",
            Self::StartAuctionsAndBid { .. } => "StartAuctionsAndBid",
            Self::NewBid { .. } => "NewBid",
            Self::UnsealBid { .. } => "UnsealBid",
            Self::FinalizeAuction { .. } => "FinalizeAuction",
            Self::SetAddr { .. } => "SetAddr",
        }
    }

    /// ABI-encoded call data.
    pub fn encode(&self) -> Vec<u8> {
        let tokens = match self {
            Self::StartAuction { label_hash } | Self::FinalizeAuction { label_hash } => {
                vec![Token::FixedBytes(*label_hash)]
            }
            Self::StartAuctionsAndBid {
                label_hashes,
                sealed_bid,
            } => vec![
                Token::FixedBytesArray(label_hashes.clone()),
                Token::FixedBytes(*sealed_bid),
            ],
            Self::NewBid { sealed_bid } => vec![Token::FixedBytes(*sealed_bid)],
            Self::UnsealBid {
                label_hash,
                value,
                salt_hash,
            } => vec![
                Token::FixedBytes(*label_hash),
                Token::Uint(*value),
                Token::FixedBytes(*salt_hash),
            ],
            Self::SetAddr { node, address } => {
                vec![Token::FixedBytes(*node), Token::Address(*address)]
            }
        };
        encode_call(self.signature(), &tokens)
    }
}
