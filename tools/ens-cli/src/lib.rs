//! # ens
//!
//! Command-line client for the ENS sealed-bid registrar.
//!
//! ```text
//! ens auction start <name> -a <account> [-b 0.01 Ether] [-m <mask>] -s <salt> [-d 3]
//! ens auction bid <name> -a <account> -b <bid> [-m <mask>] -s <salt>
//! ens auction reveal <name> -a <account> -b <bid> -s <salt>
//! ens auction finalize <name> -a <account>
//! ens address set <name> --address <address or name>
//! ```
//!
//! Every submitting command also takes `-p/--passphrase`, `-g/--gasprice`
//! and `--nonce`. Prints `Transaction ID is <hash>` on success unless
//! `--quiet`; exits 1 on any failure.

pub mod cli;
pub mod commands;
pub mod config;
pub mod logging;
pub mod rpc;

pub use cli::Cli;
pub use commands::execute;
pub use config::CliConfig;
