//! # Registry Name Resolver
//!
//! Accepts a hex address as is, otherwise looks the text up as a name:
//! registry resolver record first, then that resolver's address record.

use async_trait::async_trait;
use ens_01_codec::Name;
use ens_02_state_oracle::{OracleError, RegistryReader, StateOracle};
use shared_types::Address;
use tracing::debug;

use crate::errors::AuctionError;
use crate::ports::NameResolver;

/// `NameResolver` backed by registry reads.
pub struct RegistryNameResolver<R: RegistryReader> {
    oracle: StateOracle<R>,
}

impl<R: RegistryReader> RegistryNameResolver<R> {
    /// Resolver reading through `oracle`.
    pub fn new(oracle: StateOracle<R>) -> Self {
        Self { oracle }
    }
}

fn invalid(target: &str, reason: impl Into<String>) -> AuctionError {
    AuctionError::InvalidAddress {
        target: target.to_string(),
        reason: reason.into(),
    }
}

#[async_trait]
impl<R: RegistryReader> NameResolver for RegistryNameResolver<R> {
    async fn resolve(&self, target: &str) -> Result<Address, AuctionError> {
        let target = target.trim();
        if target.starts_with("0x") || target.starts_with("0X") {
            return target
                .parse::<Address>()
                .map_err(|e| invalid(target, e.to_string()));
        }

        let name = Name::parse(target).map_err(|e| invalid(target, e.to_string()))?;
        let resolver = match self.oracle.resolver_of(&name).await {
            Ok(resolver) => resolver,
            Err(OracleError::NoResolver { .. }) => return Err(invalid(target, "no resolver")),
            Err(e) => return Err(e.into()),
        };
        let address = self
            .oracle
            .reader()
            .resolved_address(resolver, name.node())
            .await?;
        if address.is_zero() {
            return Err(invalid(target, "no address record"));
        }
        debug!(%name, %address, "Resolved name");
        Ok(address)
    }
}
