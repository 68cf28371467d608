//! CLI configuration.

use std::env;
use std::time::Duration;

use ens_04_tx_session::TransactionConfig;
use shared_types::Address;

use crate::cli::{Cli, TxArgs};

/// Default node endpoint.
pub const DEFAULT_CONNECTION: &str = "http://localhost:8545";

/// Mainnet ENS registry.
pub const DEFAULT_REGISTRY: &str = "0x314159265dd8dbb310642f98f50c066173c1259b";

/// Default log filter when neither `ENS_LOG_LEVEL` nor `RUST_LOG` is set.
pub const DEFAULT_LOG_LEVEL: &str = "warn";

/// Settings that apply to every command.
#[derive(Debug, Clone)]
pub struct CliConfig {
    /// JSON-RPC endpoint.
    pub connection: String,
    /// Registry contract.
    pub registry: Address,
    /// Chain id to sign for.
    pub chain_id: u64,
    /// Bound on each node request and on each submission.
    pub timeout: Duration,
    /// Suppress output.
    pub quiet: bool,
    /// `tracing` filter directive.
    pub log_level: String,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            connection: DEFAULT_CONNECTION.to_string(),
            registry: DEFAULT_REGISTRY.parse().unwrap_or_default(),
            chain_id: 1,
            timeout: Duration::from_secs(60),
            quiet: false,
            log_level: DEFAULT_LOG_LEVEL.to_string(),
        }
    }
}

impl CliConfig {
    /// Configuration from parsed arguments and the environment.
    pub fn from_cli(cli: &Cli) -> Self {
        Self {
            connection: cli.connection.clone(),
            registry: cli.registry,
            chain_id: cli.chain_id,
            timeout: Duration::from_secs(cli.timeout),
            quiet: cli.quiet,
            log_level: log_level_from_env(),
        }
    }

    /// Per-operation transaction settings.
    pub fn transaction_config(&self, tx: &TxArgs) -> TransactionConfig {
        TransactionConfig {
            gas_price: tx.gas_price.clone(),
            nonce: tx.nonce,
            chain_id: self.chain_id,
            submit_timeout: self.timeout,
            ..TransactionConfig::with_passphrase(tx.passphrase.clone())
        }
    }
}

fn log_level_from_env() -> String {
    env::var("ENS_LOG_LEVEL")
        .or_else(|_| env::var("RUST_LOG"))
        .unwrap_or_else(|_| DEFAULT_LOG_LEVEL.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = CliConfig::default();
        assert_eq!(config.connection, "http://localhost:8545");
        assert!(!config.registry.is_zero());
        assert_eq!(config.chain_id, 1);
        assert_eq!(config.log_level, "warn");
    }

    #[test]
    fn test_transaction_config() {
        let config = CliConfig {
            chain_id: 3,
            timeout: Duration::from_secs(5),
            ..CliConfig::default()
        };
        let tx = TxArgs {
            passphrase: "pw".to_string(),
            gas_price: "20 GWei".to_string(),
            nonce: 4,
        };
        let tx_config = config.transaction_config(&tx);
        assert_eq!(tx_config.chain_id, 3);
        assert_eq!(tx_config.nonce, 4);
        assert_eq!(tx_config.gas_price, "20 GWei");
        assert_eq!(tx_config.submit_timeout, Duration::from_secs(5));
        assert_eq!(tx_config.passphrase.as_str(), "pw");
    }
}
