//! # Lifecycle State
//!
//! The closed set of states the auction registrar reports for a name.

use serde::{Deserialize, Serialize};
use shared_types::{Address, U256};
use std::fmt;

use crate::errors::OracleError;

/// Lifecycle state of a name as reported by the registrar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LifecycleState {
    /// Not yet released for auction.
    Unavailable,
    /// Open: an auction can be started.
    Available,
    /// Bidding window is running.
    Auction,
    /// Auction closed, the name has a winner.
    Owned,
    /// Permanently blocked.
    Forbidden,
    /// Bidding closed, sealed bids may be revealed.
    Reveal,
}

impl LifecycleState {
    /// Map a registrar state code.
    ///
    /// # Errors
    ///
    /// `OracleError::UnknownState` for codes outside the registrar's range.
    pub fn from_code(code: u8) -> Result<Self, OracleError> {
        match code {
            0 => Ok(Self::Available),
            1 => Ok(Self::Auction),
            2 => Ok(Self::Owned),
            3 => Ok(Self::Forbidden),
            4 => Ok(Self::Reveal),
            5 => Ok(Self::Unavailable),
            other => Err(OracleError::UnknownState(other)),
        }
    }

    /// Registrar state code for this state.
    #[must_use]
    pub const fn code(self) -> u8 {
        match self {
            Self::Available => 0,
            Self::Auction => 1,
            Self::Owned => 2,
            Self::Forbidden => 3,
            Self::Reveal => 4,
            Self::Unavailable => 5,
        }
    }

    /// States from which no operation of this client can proceed.
    #[must_use]
    pub const fn is_dead_end(self) -> bool {
        match self {
            Self::Forbidden | Self::Unavailable => true,
            Self::Available | Self::Auction | Self::Reveal | Self::Owned => false,
        }
    }

    /// Human-readable name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Unavailable => "Unavailable",
            Self::Available => "Available",
            Self::Auction => "Auction",
            Self::Owned => "Owned",
            Self::Forbidden => "Forbidden",
            Self::Reveal => "Reveal",
        }
    }
}

impl fmt::Display for LifecycleState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Raw auction entry read from the registrar for a label hash.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct AuctionEntry {
    /// Registrar state code.
    pub state_code: u8,
    /// Deed holding the winning bid, zero while unset.
    pub deed: Address,
    /// Unix time at which the auction ends / ended.
    pub registration_date: u64,
    /// Price paid by the winner.
    pub value: U256,
    /// Highest revealed bid.
    pub highest_bid: U256,
}

impl AuctionEntry {
    /// Entry for a given state with no bids.
    #[must_use]
    pub fn in_state(state: LifecycleState) -> Self {
        Self {
            state_code: state.code(),
            ..Self::default()
        }
    }

    /// Classify this entry.
    ///
    /// # Errors
    ///
    /// `OracleError::UnknownState` if the code is not recognised.
    pub fn state(&self) -> Result<LifecycleState, OracleError> {
        LifecycleState::from_code(self.state_code)
    }
}
