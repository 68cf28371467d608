//! JSON-RPC client for the Ethereum node the CLI talks to.

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use reqwest::Client;
use serde_json::json;
use shared_types::{Address, Hash, LedgerError};
use thiserror::Error;

use super::types::*;

/// Errors that can occur when communicating with the node.
#[derive(Debug, Error)]
pub enum RpcError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("{0}")]
    Rpc(String),
    #[error("Failed to parse response: {0}")]
    Parse(String),
    #[error("Connection failed: {0}")]
    Connection(String),
}

impl From<RpcError> for LedgerError {
    fn from(err: RpcError) -> Self {
        match err {
            RpcError::Rpc(message) => LedgerError::Rejected(message),
            other => LedgerError::Network(other.to_string()),
        }
    }
}

impl RpcError {
    /// Ledger error for a failed read. A read is never a rejection, so node
    /// errors such as a reverted `eth_call` count as network failures too.
    pub fn into_read_error(self) -> LedgerError {
        LedgerError::Network(self.to_string())
    }
}

/// Node JSON-RPC client.
pub struct RpcClient {
    client: Client,
    endpoint: String,
    request_id: AtomicU64,
}

impl RpcClient {
    /// Create a new client. `timeout` bounds each HTTP request.
    pub fn new(endpoint: impl Into<String>, timeout: Duration) -> Result<Self, RpcError> {
        let client = Client::builder()
            .timeout(timeout)
            .connect_timeout(Duration::from_secs(5))
            .build()
            .map_err(RpcError::Http)?;

        Ok(Self {
            client,
            endpoint: endpoint.into(),
            request_id: AtomicU64::new(1),
        })
    }

    /// Endpoint URL.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    fn next_id(&self) -> u64 {
        self.request_id.fetch_add(1, Ordering::Relaxed)
    }

    /// Call a JSON-RPC method.
    async fn call<P: serde::Serialize, R: serde::de::DeserializeOwned>(
        &self,
        method: &str,
        params: P,
    ) -> Result<R, RpcError> {
        let request = JsonRpcRequest::new(method, params, self.next_id());
        tracing::trace!(method, "JSON-RPC request");

        let response = self
            .client
            .post(&self.endpoint)
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                if e.is_connect() {
                    RpcError::Connection(format!("Cannot connect to {}", self.endpoint))
                } else {
                    RpcError::Http(e)
                }
            })?;

        let rpc_response: JsonRpcResponse<R> = response
            .json()
            .await
            .map_err(|e| RpcError::Parse(e.to_string()))?;

        if let Some(error) = rpc_response.error {
            return Err(RpcError::Rpc(error.to_string()));
        }

        rpc_response
            .result
            .ok_or_else(|| RpcError::Parse("Missing result in response".to_string()))
    }

    /// Read-only contract call against the latest block.
    pub async fn eth_call(&self, to: Address, data: &[u8]) -> Result<Vec<u8>, RpcError> {
        let result: String = self
            .call("eth_call", json!([CallRequest::new(to, data), "latest"]))
            .await?;
        decode_hex_data(&result).map_err(|e| RpcError::Parse(e.to_string()))
    }

    /// Accounts the node's wallet manages.
    pub async fn accounts(&self) -> Result<Vec<Address>, RpcError> {
        let accounts: Vec<String> = self.call("eth_accounts", json!([])).await?;
        accounts
            .iter()
            .map(|a| {
                a.parse::<Address>()
                    .map_err(|e| RpcError::Parse(e.to_string()))
            })
            .collect()
    }

    /// Sign with the node's wallet, unlocking with `passphrase`, and send.
    pub async fn send_transaction(
        &self,
        tx: &TransactionRequest,
        passphrase: &str,
    ) -> Result<Hash, RpcError> {
        let result: String = self
            .call("personal_sendTransaction", json!([tx, passphrase]))
            .await?;
        result
            .parse::<Hash>()
            .map_err(|e| RpcError::Parse(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rpc_error_is_rejection() {
        let err: LedgerError = RpcError::Rpc("nonce too low".into()).into();
        assert_eq!(err, LedgerError::Rejected("nonce too low".into()));
    }

    #[test]
    fn test_connection_error_is_network() {
        let err: LedgerError = RpcError::Connection("Cannot connect to http://x".into()).into();
        assert!(matches!(err, LedgerError::Network(_)));
    }

    #[test]
    fn test_reverted_read_is_network() {
        let err = RpcError::Rpc("execution reverted".into()).into_read_error();
        assert_eq!(err, LedgerError::Network("execution reverted".into()));
    }
}
