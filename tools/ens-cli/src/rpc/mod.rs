//! JSON-RPC adapters for the node the CLI talks to.

mod client;
mod ledger;
mod types;

pub use client::{RpcClient, RpcError};
pub use ledger::{decode_address, decode_entry, transaction_request, RpcLedger};
pub use types::*;
