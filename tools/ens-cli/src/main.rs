//! ens: sealed-bid auction client for the Ethereum Name Service.

use std::process::ExitCode;
use std::sync::Arc;

use clap::Parser;
use ens_02_state_oracle::StateOracle;
use ens_05_auction::{AuctionOrchestrator, RegistryNameResolver};
use shared_types::TxHash;

use ens_cli::cli::{Cli, Command};
use ens_cli::config::CliConfig;
use ens_cli::logging::init_logging;
use ens_cli::rpc::{RpcClient, RpcLedger};

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    let config = CliConfig::from_cli(&cli);

    if let Err(e) = init_logging(&config.log_level, config.quiet) {
        eprintln!("Warning: failed to initialise logging: {e}");
    }

    match run(cli.command, &config).await {
        Ok(tx_hash) => {
            if !config.quiet {
                println!("Transaction ID is {tx_hash}");
            }
            ExitCode::SUCCESS
        }
        Err(err) => {
            if !config.quiet {
                eprintln!("{err:#}");
            }
            ExitCode::FAILURE
        }
    }
}

async fn run(command: Command, config: &CliConfig) -> anyhow::Result<TxHash> {
    let client = Arc::new(RpcClient::new(&config.connection, config.timeout)?);
    let ledger = Arc::new(RpcLedger::new(client, config.registry));
    let resolver = Arc::new(RegistryNameResolver::new(StateOracle::new(Arc::clone(
        &ledger,
    ))));
    let orchestrator =
        AuctionOrchestrator::new(Arc::clone(&ledger), Arc::clone(&ledger), ledger, resolver);

    ens_cli::execute(&orchestrator, config, command).await
}
