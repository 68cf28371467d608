//! Command-line surface.

use clap::{Args, Parser, Subcommand};
use shared_types::Address;

use crate::config::{DEFAULT_CONNECTION, DEFAULT_REGISTRY};

/// Manage names in the ENS sealed-bid registrar.
#[derive(Parser, Debug)]
#[command(name = "ens", version)]
#[command(about = "Sealed-bid auction client for the Ethereum Name Service")]
pub struct Cli {
    /// JSON-RPC endpoint of the node
    #[arg(long, global = true, env = "ENS_CONNECTION", default_value = DEFAULT_CONNECTION)]
    pub connection: String,

    /// Address of the ENS registry contract
    #[arg(long, global = true, default_value = DEFAULT_REGISTRY)]
    pub registry: Address,

    /// Chain id to sign transactions for
    #[arg(long = "chain-id", global = true, default_value_t = 1)]
    pub chain_id: u64,

    /// Seconds to wait for the node before giving up
    #[arg(long, global = true, default_value_t = 60)]
    pub timeout: u64,

    /// Suppress all output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Top-level commands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Manage a name's address record
    #[command(subcommand)]
    Address(AddressCommand),

    /// Take part in a name auction
    #[command(subcommand)]
    Auction(AuctionCommand),
}

/// `ens address ...`
#[derive(Subcommand, Debug)]
pub enum AddressCommand {
    /// Set the address a name resolves to
    Set {
        /// Name to update
        name: String,

        /// Address (or name) to point at
        #[arg(short, long)]
        address: String,

        #[command(flatten)]
        tx: TxArgs,
    },
}

/// `ens auction ...`
#[derive(Subcommand, Debug)]
pub enum AuctionCommand {
    /// Start an auction, optionally placing a bid
    Start {
        /// Name to auction
        name: String,

        /// Account to start the auction from
        #[arg(short, long)]
        address: Address,

        #[command(flatten)]
        bid: BidArgs,

        /// Number of dummy auctions to open alongside
        #[arg(short, long, default_value_t = 3)]
        dummies: usize,

        #[command(flatten)]
        tx: TxArgs,
    },

    /// Place a sealed bid on a running auction
    Bid {
        /// Name to bid on
        name: String,

        /// Account to bid from
        #[arg(short, long)]
        address: Address,

        #[command(flatten)]
        bid: BidArgs,

        #[command(flatten)]
        tx: TxArgs,
    },

    /// Reveal a sealed bid
    Reveal {
        /// Name the bid was placed on
        name: String,

        /// Account the bid was placed from
        #[arg(short, long)]
        address: Address,

        /// Amount that was bid
        #[arg(short, long)]
        bid: String,

        /// Salt the bid was sealed with
        #[arg(short, long)]
        salt: String,

        #[command(flatten)]
        tx: TxArgs,
    },

    /// Finalize a won auction
    Finalize {
        /// Name to finalize
        name: String,

        /// Winning account
        #[arg(short, long)]
        address: Address,

        #[command(flatten)]
        tx: TxArgs,
    },
}

/// Bid amount, mask and salt.
#[derive(Args, Debug, Clone)]
pub struct BidArgs {
    /// Amount to bid
    #[arg(short, long, default_value = "0.01 Ether")]
    pub bid: String,

    /// Amount to send with the bid, hiding the true amount
    #[arg(short, long)]
    pub mask: Option<String>,

    /// Salt for the sealed bid; keep it to reveal later
    #[arg(short, long, default_value = "")]
    pub salt: String,
}

/// Transaction settings shared by every submitting command.
#[derive(Args, Debug, Clone)]
pub struct TxArgs {
    /// Passphrase for the account
    #[arg(short, long, env = "ENS_PASSPHRASE", default_value = "", hide_env_values = true)]
    pub passphrase: String,

    /// Gas price
    #[arg(short, long = "gasprice", default_value = "4 GWei")]
    pub gas_price: String,

    /// Nonce for the transaction; -1 lets the node decide
    #[arg(long, default_value_t = -1, allow_negative_numbers = true)]
    pub nonce: i64,
}
