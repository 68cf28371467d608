//! Ledger adapters over JSON-RPC.
//!
//! One `RpcLedger` serves all three collaborators the orchestrator needs:
//! registry reads through `eth_call`, submissions through
//! `personal_sendTransaction`, and credentials from the node's wallet.

use std::sync::Arc;

use async_trait::async_trait;
use ens_01_codec::abi::{decode_words, encode_call, word_to_address, word_to_u256, Token};
use ens_01_codec::CodecError;
use ens_02_state_oracle::{AuctionEntry, RegistryReader};
use ens_04_tx_session::{SessionError, SigningCredential, TransactionSession, WalletProvider};
use ens_05_auction::{ContractCall, LedgerSubmitter};
use shared_types::{Address, Hash, LedgerError, TxHash, U256};
use tracing::debug;

use super::client::{RpcClient, RpcError};
use super::types::{hex_data, hex_quantity, TransactionRequest};

fn malformed(err: CodecError) -> LedgerError {
    LedgerError::Network(format!("malformed contract response: {err}"))
}

/// Decode a single `address` return value.
pub fn decode_address(data: &[u8]) -> Result<Address, LedgerError> {
    let words = decode_words(data, 1).map_err(malformed)?;
    Ok(word_to_address(&words[0]))
}

/// Decode the registrar's `entries(bytes32)` return tuple.
pub fn decode_entry(data: &[u8]) -> Result<AuctionEntry, LedgerError> {
    let words = decode_words(data, 5).map_err(malformed)?;
    // Out-of-range codes become u8::MAX and are rejected as unknown states
    let state_code = u8::try_from(word_to_u256(&words[0]).low_u64()).unwrap_or(u8::MAX);
    Ok(AuctionEntry {
        state_code,
        deed: word_to_address(&words[1]),
        registration_date: word_to_u256(&words[2]).low_u64(),
        value: word_to_u256(&words[3]),
        highest_bid: word_to_u256(&words[4]),
    })
}

/// Build the node transaction for a call in a session.
pub fn transaction_request(
    session: &TransactionSession,
    call: &ContractCall,
) -> TransactionRequest {
    TransactionRequest {
        from: session.from().to_hex(),
        to: session.target().to_hex(),
        gas_price: hex_quantity(session.gas_price()),
        value: hex_quantity(session.value()),
        data: hex_data(&call.encode()),
        nonce: session.nonce().fixed().map(|n| hex_quantity(U256::from(n))),
        chain_id: hex_quantity(U256::from(session.chain_id())),
    }
}

/// Registry reader, submitter and wallet over one node connection.
pub struct RpcLedger {
    client: Arc<RpcClient>,
    registry: Address,
}

impl RpcLedger {
    /// Adapter reading from the registry at `registry`.
    pub fn new(client: Arc<RpcClient>, registry: Address) -> Self {
        Self { client, registry }
    }

    async fn read(
        &self,
        to: Address,
        signature: &str,
        tokens: &[Token],
    ) -> Result<Vec<u8>, LedgerError> {
        let data = encode_call(signature, tokens);
        let result = self
            .client
            .eth_call(to, &data)
            .await
            .map_err(RpcError::into_read_error)?;
        debug!(%to, signature, bytes = result.len(), "Contract read");
        Ok(result)
    }
}

#[async_trait]
impl RegistryReader for RpcLedger {
    async fn owner(&self, node: Hash) -> Result<Address, LedgerError> {
        let data = self
            .read(self.registry, "owner(bytes32)", &[Token::FixedBytes(node)])
            .await?;
        decode_address(&data)
    }

    async fn resolver(&self, node: Hash) -> Result<Address, LedgerError> {
        let data = self
            .read(self.registry, "resolver(bytes32)", &[Token::FixedBytes(node)])
            .await?;
        decode_address(&data)
    }

    async fn auction_entry(
        &self,
        registrar: Address,
        label_hash: Hash,
    ) -> Result<AuctionEntry, LedgerError> {
        let data = self
            .read(registrar, "entries(bytes32)", &[Token::FixedBytes(label_hash)])
            .await?;
        decode_entry(&data)
    }

    async fn sealed_bid_deed(
        &self,
        registrar: Address,
        bidder: Address,
        commitment: Hash,
    ) -> Result<Address, LedgerError> {
        let data = self
            .read(
                registrar,
                "sealedBids(address,bytes32)",
                &[Token::Address(bidder), Token::FixedBytes(commitment)],
            )
            .await?;
        decode_address(&data)
    }

    async fn resolved_address(&self, resolver: Address, node: Hash) -> Result<Address, LedgerError> {
        let data = self
            .read(resolver, "addr(bytes32)", &[Token::FixedBytes(node)])
            .await?;
        decode_address(&data)
    }
}

#[async_trait]
impl LedgerSubmitter for RpcLedger {
    async fn submit(
        &self,
        session: &TransactionSession,
        call: &ContractCall,
    ) -> Result<TxHash, LedgerError> {
        let tx = transaction_request(session, call);
        debug!(
            call = call.name(),
            from = %tx.from,
            to = %tx.to,
            value = %tx.value,
            "Sending transaction"
        );
        Ok(self
            .client
            .send_transaction(&tx, session.credential().passphrase())
            .await?)
    }
}

#[async_trait]
impl WalletProvider for RpcLedger {
    async fn resolve(
        &self,
        address: Address,
        passphrase: &str,
    ) -> Result<SigningCredential, SessionError> {
        let accounts = self
            .client
            .accounts()
            .await
            .map_err(|e| SessionError::unavailable(address, e.to_string()))?;
        if !accounts.contains(&address) {
            return Err(SessionError::unavailable(
                address,
                "account is not managed by the node's wallet",
            ));
        }
        Ok(SigningCredential::new(address, passphrase))
    }
}
