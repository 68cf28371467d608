//! JSON-RPC wire types for the Ethereum node API.

use serde::{Deserialize, Serialize};
use shared_types::{Address, U256};

/// JSON-RPC request structure
#[derive(Debug, Serialize)]
pub struct JsonRpcRequest<T> {
    pub jsonrpc: &'static str,
    pub method: String,
    pub params: T,
    pub id: u64,
}

impl<T> JsonRpcRequest<T> {
    pub fn new(method: impl Into<String>, params: T, id: u64) -> Self {
        Self {
            jsonrpc: "2.0",
            method: method.into(),
            params,
            id,
        }
    }
}

/// JSON-RPC response structure
#[derive(Debug, Deserialize)]
pub struct JsonRpcResponse<T> {
    #[serde(default)]
    pub jsonrpc: String,
    #[serde(default)]
    pub id: u64,
    pub result: Option<T>,
    #[serde(default)]
    pub error: Option<JsonRpcError>,
}

/// JSON-RPC error
#[derive(Debug, Deserialize)]
pub struct JsonRpcError {
    pub code: i64,
    pub message: String,
    #[serde(default)]
    pub data: Option<serde_json::Value>,
}

impl std::fmt::Display for JsonRpcError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // Node messages are surfaced to the user as is
        f.write_str(&self.message)
    }
}

/// `eth_call` message.
#[derive(Debug, Clone, Serialize)]
pub struct CallRequest {
    pub to: String,
    pub data: String,
}

impl CallRequest {
    pub fn new(to: Address, data: &[u8]) -> Self {
        Self {
            to: to.to_hex(),
            data: hex_data(data),
        }
    }
}

/// `personal_sendTransaction` transaction arguments.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionRequest {
    pub from: String,
    pub to: String,
    pub gas_price: String,
    pub value: String,
    pub data: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nonce: Option<String>,
    pub chain_id: String,
}

/// `0x`-prefixed hex of raw bytes.
pub fn hex_data(data: &[u8]) -> String {
    format!("0x{}", hex::encode(data))
}

/// `0x`-prefixed hex quantity without leading zeros.
pub fn hex_quantity(value: U256) -> String {
    format!("0x{value:x}")
}

/// Decode `0x`-prefixed hex bytes.
pub fn decode_hex_data(text: &str) -> Result<Vec<u8>, hex::FromHexError> {
    let digits = text.strip_prefix("0x").unwrap_or(text);
    hex::decode(digits)
}
