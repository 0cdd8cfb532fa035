//! Scanner-API backed transaction history source
//!
//! Token discovery reads an Etherscan-style `tokentx` endpoint. The scanner
//! reports every token transfer touching an address; only the counterparty
//! contract addresses are kept, case exactly as the scanner returned them.

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;

use crate::infrastructure::sources::{TokenTransactionSource, TokenTransfer};
use crate::shared::constants::{DEFAULT_SCANNER_URL, SCANNER_API_KEY_ENV, SCANNER_URL_ENV};
use crate::shared::error::SyncError;
use crate::shared::types::Network;

#[derive(Debug, Deserialize)]
struct TokenTxResponse {
    status: String,
    message: String,
    result: serde_json::Value,
}

#[derive(Debug, Deserialize)]
struct TokenTxRecord {
    #[serde(rename = "contractAddress")]
    contract_address: String,
}

/// Transaction history source backed by an Etherscan-compatible API
pub struct ScannerTransactionSource {
    client: Client,
    base_url: String,
    api_key: String,
}

impl ScannerTransactionSource {
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into(),
            api_key: api_key.into(),
        }
    }

    /// Build from `TOKENSYNC_SCANNER_URL` / `TOKENSYNC_SCANNER_API_KEY`,
    /// falling back to the public multi-chain endpoint
    pub fn from_env() -> Self {
        let base_url =
            std::env::var(SCANNER_URL_ENV).unwrap_or_else(|_| DEFAULT_SCANNER_URL.to_string());
        let api_key = std::env::var(SCANNER_API_KEY_ENV).unwrap_or_default();

        Self::new(base_url, api_key)
    }
}

#[async_trait]
impl TokenTransactionSource for ScannerTransactionSource {
    async fn get_token_transactions(
        &self,
        network: Network,
        address: &str,
    ) -> Result<Vec<TokenTransfer>, SyncError> {
        let resp = self
            .client
            .get(&self.base_url)
            .query(&[
                ("chainid", network.chain_id().to_string().as_str()),
                ("module", "account"),
                ("action", "tokentx"),
                ("address", address),
                ("startblock", "0"),
                ("endblock", "99999999"),
                ("sort", "asc"),
                ("apikey", self.api_key.as_str()),
            ])
            .send()
            .await
            .map_err(|e| SyncError::network(format!("Scanner request failed: {}", e)))?;
        let body: TokenTxResponse = resp
            .json()
            .await
            .map_err(|e| SyncError::network(format!("Invalid scanner response: {}", e)))?;

        match body.result {
            serde_json::Value::Array(items) => {
                let mut transfers = Vec::with_capacity(items.len());
                for item in items {
                    let record: TokenTxRecord = serde_json::from_value(item)?;
                    transfers.push(TokenTransfer {
                        contract_address: record.contract_address,
                    });
                }
                Ok(transfers)
            }
            // The scanner reports "no transactions" as a non-OK status with
            // an empty result rather than an empty array
            _ if body.status == "0" && body.message.contains("No transactions") => Ok(vec![]),
            other => Err(SyncError::network(format!(
                "Scanner error: {} ({})",
                body.message, other
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_env_defaults() {
        let source = ScannerTransactionSource::from_env();

        assert_eq!(source.base_url, DEFAULT_SCANNER_URL);
    }

    #[test]
    fn test_token_tx_record_decoding() {
        let raw = r#"{
            "contractAddress": "0xdAC17F958D2ee523a2206206994597C13D831ec7",
            "from": "0x0000000000000000000000000000000000000000",
            "value": "1000000"
        }"#;
        let record: TokenTxRecord =
            serde_json::from_str(raw).expect("Failed to decode tokentx record");

        assert_eq!(
            record.contract_address,
            "0xdAC17F958D2ee523a2206206994597C13D831ec7"
        );
    }

    #[test]
    fn test_token_tx_response_decoding() {
        let raw = r#"{"status":"1","message":"OK","result":[]}"#;
        let body: TokenTxResponse =
            serde_json::from_str(raw).expect("Failed to decode scanner response");

        assert_eq!(body.status, "1");
        assert!(matches!(body.result, serde_json::Value::Array(_)));
    }
}
