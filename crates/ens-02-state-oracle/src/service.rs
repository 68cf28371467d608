//! # State Oracle Service
//!
//! Classifies a name into its lifecycle state and answers the registry reads
//! the orchestrator needs. Nothing here is cached: state can change between
//! any two calls because other parties bid on the same names.

use ens_01_codec::Name;
use shared_types::{Address, Hash};
use std::sync::Arc;
use tracing::{debug, warn};

use crate::domain::{AuctionEntry, LifecycleState};
use crate::errors::OracleError;
use crate::ports::RegistryReader;

/// Read-only view of registry and registrar state.
pub struct StateOracle<R: RegistryReader> {
    reader: Arc<R>,
}

impl<R: RegistryReader> Clone for StateOracle<R> {
    fn clone(&self) -> Self {
        Self {
            reader: Arc::clone(&self.reader),
        }
    }
}

impl<R: RegistryReader> StateOracle<R> {
    /// Create an oracle over a registry reader.
    pub fn new(reader: Arc<R>) -> Self {
        Self { reader }
    }

    /// The underlying reader.
    pub fn reader(&self) -> &Arc<R> {
        &self.reader
    }

    /// Registrar for a name: the owner of its top-level node.
    pub async fn registrar_for(&self, name: &Name) -> Result<Address, OracleError> {
        let registrar = self.reader.owner(name.top_level_node()).await?;
        if registrar.is_zero() {
            return Err(OracleError::NoRegistrar {
                tld: name.top_level().to_string(),
            });
        }
        Ok(registrar)
    }

    /// Raw auction entry for a name.
    pub async fn auction_entry(&self, name: &Name) -> Result<AuctionEntry, OracleError> {
        let registrar = self.registrar_for(name).await?;
        Ok(self.reader.auction_entry(registrar, name.label_hash()).await?)
    }

    /// Current lifecycle state of a name.
    pub async fn query_state(&self, name: &Name) -> Result<LifecycleState, OracleError> {
        let registrar = self.registrar_for(name).await?;
        self.query_state_at(registrar, name).await
    }

    /// Lifecycle state of a name at an already resolved registrar.
    pub async fn query_state_at(
        &self,
        registrar: Address,
        name: &Name,
    ) -> Result<LifecycleState, OracleError> {
        let state = self
            .reader
            .auction_entry(registrar, name.label_hash())
            .await?
            .state()?;
        debug!(name = %name, state = %state, "Queried name state");
        Ok(state)
    }

    /// Precondition guard: fails unless the name is currently in `expected`.
    pub async fn require_state(
        &self,
        name: &Name,
        expected: LifecycleState,
    ) -> Result<(), OracleError> {
        let registrar = self.registrar_for(name).await?;
        self.require_state_at(registrar, name, expected).await
    }

    /// `require_state` against a registrar the caller already holds.
    pub async fn require_state_at(
        &self,
        registrar: Address,
        name: &Name,
        expected: LifecycleState,
    ) -> Result<(), OracleError> {
        let actual = self.query_state_at(registrar, name).await?;
        if actual != expected {
            warn!(name = %name, %expected, %actual, "Name not in a suitable state");
            return Err(OracleError::InvalidState {
                name: name.to_string(),
                expected,
                actual,
            });
        }
        Ok(())
    }

    /// Registry owner of a name (zero when unowned).
    pub async fn owner_of(&self, name: &Name) -> Result<Address, OracleError> {
        Ok(self.reader.owner(name.node()).await?)
    }

    /// Resolver registered for a name.
    pub async fn resolver_of(&self, name: &Name) -> Result<Address, OracleError> {
        let resolver = self.reader.resolver(name.node()).await?;
        if resolver.is_zero() {
            return Err(OracleError::NoResolver {
                name: name.to_string(),
            });
        }
        Ok(resolver)
    }

    /// Whether the registrar holds a deed for this bidder's commitment.
    pub async fn sealed_bid_exists(
        &self,
        registrar: Address,
        bidder: Address,
        commitment: Hash,
    ) -> Result<bool, OracleError> {
        let deed = self
            .reader
            .sealed_bid_deed(registrar, bidder, commitment)
            .await?;
        Ok(!deed.is_zero())
    }
}

// =============================================================================
// TESTS
// =============================================================================
