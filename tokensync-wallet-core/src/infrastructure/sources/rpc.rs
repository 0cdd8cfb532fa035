//! JSON-RPC backed balance and token-info sources
//!
//! Both sources issue `eth_call` requests against the per-network RPC
//! endpoint. Endpoints come from the environment with safe public defaults.

use async_trait::async_trait;
use ethers::types::U256;
use reqwest::Client;
use serde_json::json;

use crate::infrastructure::sources::{BalanceSource, RemoteTokenInfo, TokenInfoSource};
use crate::shared::constants::{
    RPC_ARBITRUM_ENV, RPC_BASE_ENV, RPC_ETHEREUM_ENV, RPC_POLYGON_ENV,
};
use crate::shared::error::SyncError;
use crate::shared::types::{Amount, Network};
use crate::shared::utils::hex_to_bytes;

// ERC20 function selectors
const BALANCE_OF_SELECTOR: &str = "0x70a08231";
const NAME_SELECTOR: &str = "0x06fdde03";
const SYMBOL_SELECTOR: &str = "0x95d89b41";
const DECIMALS_SELECTOR: &str = "0x313ce567";

/// Resolve the RPC endpoint for a network via env override or its default
fn rpc_endpoint(network: Network) -> String {
    let env_key = match network {
        Network::Ethereum => RPC_ETHEREUM_ENV,
        Network::Base => RPC_BASE_ENV,
        Network::Polygon => RPC_POLYGON_ENV,
        Network::Arbitrum => RPC_ARBITRUM_ENV,
    };
    std::env::var(env_key).unwrap_or_else(|_| network.rpc_url().to_string())
}

/// Issue an `eth_call` and return the hex result.
///
/// `Ok(None)` means the call executed but produced nothing usable (revert or
/// empty return data); transport and decoding problems are errors.
async fn eth_call(
    client: &Client,
    network: Network,
    contract: &str,
    data: &str,
) -> Result<Option<String>, SyncError> {
    let body = json!({
        "jsonrpc": "2.0",
        "method": "eth_call",
        "params": [{ "to": contract, "data": data }, "latest"],
        "id": 1
    });
    let resp = client
        .post(rpc_endpoint(network))
        .json(&body)
        .send()
        .await
        .map_err(|e| SyncError::network(format!("eth_call request failed: {}", e)))?;
    let resp_json: serde_json::Value = resp
        .json()
        .await
        .map_err(|e| SyncError::network(format!("Invalid RPC response: {}", e)))?;

    if resp_json.get("error").is_some() {
        return Ok(None);
    }
    match resp_json.get("result").and_then(|v| v.as_str()) {
        Some(hex) if hex != "0x" => Ok(Some(hex.to_string())),
        _ => Ok(None),
    }
}

/// Left-pad an address to a 32-byte call argument
fn encode_address_arg(address: &str) -> String {
    format!("{:0>64}", address.trim_start_matches("0x").to_lowercase())
}

/// Decode a 32-byte hex quantity into a decimal string
fn decode_uint(hex_result: &str) -> Result<String, SyncError> {
    let bytes = hex_to_bytes(hex_result)?;
    if bytes.len() > 32 {
        return Err(SyncError::decode("Integer result longer than 32 bytes"));
    }
    Ok(U256::from_big_endian(&bytes).to_string())
}

/// Decode an ABI-encoded string return value.
///
/// Handles both the dynamic `string` encoding (offset + length + data) and
/// the legacy `bytes32` encoding some older tokens use for name/symbol.
fn decode_abi_string(hex_result: &str) -> Result<String, SyncError> {
    let bytes = hex_to_bytes(hex_result)?;

    if bytes.len() == 32 {
        // bytes32: trim trailing zero padding
        let end = bytes.iter().position(|b| *b == 0).unwrap_or(bytes.len());
        return String::from_utf8(bytes[..end].to_vec())
            .map_err(|e| SyncError::decode(format!("Invalid UTF-8 in bytes32 string: {}", e)));
    }

    if bytes.len() < 64 {
        return Err(SyncError::decode("ABI string result too short"));
    }

    let len = U256::from_big_endian(&bytes[32..64]);
    if len > U256::from(bytes.len() - 64) {
        return Err(SyncError::decode("ABI string length exceeds result"));
    }
    let len = len.as_usize();
    String::from_utf8(bytes[64..64 + len].to_vec())
        .map_err(|e| SyncError::decode(format!("Invalid UTF-8 in ABI string: {}", e)))
}

/// Balance source backed by ERC20 `balanceOf` calls
pub struct RpcBalanceSource {
    client: Client,
}

impl RpcBalanceSource {
    pub fn new() -> Self {
        Self {
            client: Client::new(),
        }
    }
}

impl Default for RpcBalanceSource {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl BalanceSource for RpcBalanceSource {
    async fn get_balance(
        &self,
        network: Network,
        address: &str,
        contract: &str,
    ) -> Result<Amount, SyncError> {
        let data = format!("{}{}", BALANCE_OF_SELECTOR, encode_address_arg(address));
        match eth_call(&self.client, network, contract, &data).await? {
            Some(hex_result) => decode_uint(&hex_result),
            None => Err(SyncError::network(format!(
                "balanceOf returned no data for {} on {}",
                contract,
                network.name()
            ))),
        }
    }
}

/// Token-info source backed by ERC20 `name`/`symbol`/`decimals` calls.
///
/// A contract that answers neither `symbol()` nor `decimals()` is classified
/// as not-a-token.
pub struct RpcTokenInfoSource {
    client: Client,
}

impl RpcTokenInfoSource {
    pub fn new() -> Self {
        Self {
            client: Client::new(),
        }
    }
}

impl Default for RpcTokenInfoSource {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl TokenInfoSource for RpcTokenInfoSource {
    async fn get_token_info(
        &self,
        network: Network,
        contract: &str,
    ) -> Result<RemoteTokenInfo, SyncError> {
        let symbol_raw = eth_call(&self.client, network, contract, SYMBOL_SELECTOR).await?;
        let decimals_raw = eth_call(&self.client, network, contract, DECIMALS_SELECTOR).await?;

        if symbol_raw.is_none() && decimals_raw.is_none() {
            return Ok(RemoteTokenInfo {
                not_a_token: true,
                ..Default::default()
            });
        }

        let name_raw = eth_call(&self.client, network, contract, NAME_SELECTOR).await?;

        let name = name_raw.as_deref().and_then(|hex| decode_abi_string(hex).ok());
        let symbol = symbol_raw.as_deref().and_then(|hex| decode_abi_string(hex).ok());
        let decimals = decimals_raw
            .as_deref()
            .and_then(|hex| decode_uint(hex).ok())
            .and_then(|dec| dec.parse::<u8>().ok());

        Ok(RemoteTokenInfo {
            not_a_token: false,
            name,
            symbol,
            decimals,
        })
    }
}
