//! Remote data source contracts
//!
//! The orchestrator talks to three collaborators: a transaction index for
//! token discovery, a balance source, and a token-info source. All three may
//! fail; none of them retries. Reference implementations live in [`rpc`] and
//! [`scanner`].

pub mod rpc;
pub mod scanner;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::shared::error::SyncError;
use crate::shared::types::{Address, Amount, Network};

/// A token transfer touching the queried wallet, as reported by the
/// transaction index. Only the counterparty contract matters for discovery.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TokenTransfer {
    pub contract_address: Address,
}

/// Raw token metadata as reported by the token-info source.
///
/// `not_a_token` set means the contract does not implement the expected
/// token interface; the remaining fields are then meaningless.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct RemoteTokenInfo {
    pub not_a_token: bool,
    pub name: Option<String>,
    pub symbol: Option<String>,
    pub decimals: Option<u8>,
}

/// Transaction history source used for token discovery
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TokenTransactionSource: Send + Sync {
    async fn get_token_transactions(
        &self,
        network: Network,
        address: &str,
    ) -> Result<Vec<TokenTransfer>, SyncError>;
}

/// On-chain token balance source
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait BalanceSource: Send + Sync {
    async fn get_balance(
        &self,
        network: Network,
        address: &str,
        contract: &str,
    ) -> Result<Amount, SyncError>;
}

/// On-chain token metadata source
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TokenInfoSource: Send + Sync {
    async fn get_token_info(
        &self,
        network: Network,
        contract: &str,
    ) -> Result<RemoteTokenInfo, SyncError>;
}
