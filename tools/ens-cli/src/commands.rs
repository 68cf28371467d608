//! Command dispatch onto the auction API.

use anyhow::Context;
use ens_01_codec::parse_amount;
use ens_05_auction::{
    AuctionApi, BidRequest, FinalizeRequest, RevealRequest, SetAddressRequest,
    StartAuctionRequest,
};
use shared_types::TxHash;

use crate::cli::{AddressCommand, AuctionCommand, Command};
use crate::config::CliConfig;

/// Run one command and return the hash of the transaction it sent.
pub async fn execute<A: AuctionApi + ?Sized>(
    api: &A,
    config: &CliConfig,
    command: Command,
) -> anyhow::Result<TxHash> {
    match command {
        Command::Address(AddressCommand::Set { name, address, tx }) => {
            let request = SetAddressRequest {
                name: name.clone(),
                target: address,
                config: config.transaction_config(&tx),
            };
            api.set_address(request)
                .await
                .with_context(|| format!("Failed to set address for {name}"))
        }

        Command::Auction(AuctionCommand::Start {
            name,
            address,
            bid,
            dummies,
            tx,
        }) => {
            let request = StartAuctionRequest {
                name: name.clone(),
                bidder: address,
                bid: parse_amount(&bid.bid).context("Invalid bid price")?,
                mask: bid.mask,
                salt: bid.salt,
                decoys: dummies,
                config: config.transaction_config(&tx),
            };
            api.start_auction(request)
                .await
                .with_context(|| format!("Failed to start auction for {name}"))
        }

        Command::Auction(AuctionCommand::Bid {
            name,
            address,
            bid,
            tx,
        }) => {
            let request = BidRequest {
                name: name.clone(),
                bidder: address,
                bid: parse_amount(&bid.bid).context("Invalid bid price")?,
                mask: bid.mask,
                salt: bid.salt,
                config: config.transaction_config(&tx),
            };
            api.place_bid(request)
                .await
                .with_context(|| format!("Failed to bid on {name}"))
        }

        Command::Auction(AuctionCommand::Reveal {
            name,
            address,
            bid,
            salt,
            tx,
        }) => {
            let request = RevealRequest {
                name: name.clone(),
                bidder: address,
                bid: parse_amount(&bid).context("Invalid bid price")?,
                salt,
                config: config.transaction_config(&tx),
            };
            api.reveal_bid(request)
                .await
                .with_context(|| format!("Failed to reveal bid on {name}"))
        }

        Command::Auction(AuctionCommand::Finalize { name, address, tx }) => {
            let request = FinalizeRequest {
                name: name.clone(),
                winner: address,
                config: config.transaction_config(&tx),
            };
            api.finalize_auction(request)
                .await
                .with_context(|| format!("Failed to finalize auction for {name}"))
        }
    }
}
