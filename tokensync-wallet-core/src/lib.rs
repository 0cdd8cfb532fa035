//! TokenSync Wallet Core
//!
//! Client-side synchronization cache for ERC20-style token balances and
//! per-chain token metadata. Keeps a local, per-wallet view consistent with
//! remote blockchain data sources while avoiding redundant network calls.
//!
//! ## Architecture
//!
//! - **Core**: the balance cache, the metadata cache, and the sync
//!   orchestrator that drives discovery and refresh fan-out
//! - **Domain**: wallet identity and token entities
//! - **Infrastructure**: remote data source contracts and their HTTP-backed
//!   reference implementations
//! - **Shared**: common types, constants, and utilities
//!
//! ## Usage
//!
//! ```no_run
//! use tokensync_wallet_core::{init_sync_core, Network, SyncError, WalletDescriptor};
//!
//! # async fn run() -> Result<(), SyncError> {
//! let core = init_sync_core().await?;
//! let wallet = WalletDescriptor::new(
//!     "0x742d35Cc6634C0532925a3b8D4C9db96C4b4d8b6",
//!     Network::Ethereum,
//! )?;
//!
//! // Discover the wallet's tokens and kick off the refresh fan-out
//! core.refresh_token_list(&wallet).await?;
//!
//! // Readers consult the caches at any time, even mid-refresh
//! let tokens = core.balances().get_token_list(&wallet.key());
//! # Ok(())
//! # }
//! ```

use std::sync::Arc;

use dotenv::dotenv;
use tokio::sync::broadcast;

// Re-export main modules for easy access
pub mod core;
pub mod domain;
pub mod infrastructure;
pub mod shared;

// Re-export main types and traits
pub use crate::core::balances::TokenBalanceCache;
pub use crate::core::sync::{RefreshKind, SyncEvent, SyncOrchestrator};
pub use crate::core::tokens::TokenMetadataCache;
pub use crate::domain::entities::token::{TokenBalanceEntry, TokenInfo};
pub use crate::domain::entities::wallet::{WalletDescriptor, WalletKey};
pub use crate::infrastructure::sources::{
    BalanceSource, RemoteTokenInfo, TokenInfoSource, TokenTransactionSource, TokenTransfer,
};
pub use crate::shared::error::SyncError;
pub use crate::shared::types::{Address, Amount, ContractAddress, Network, SyncResult};

use crate::infrastructure::sources::rpc::{RpcBalanceSource, RpcTokenInfoSource};
use crate::infrastructure::sources::scanner::ScannerTransactionSource;

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const NAME: &str = env!("CARGO_PKG_NAME");

/// Initialize logging for the sync core
pub fn init() -> Result<(), SyncError> {
    env_logger::try_init().map_err(|e| SyncError::config(format!("Logger init failed: {}", e)))
}

/// Initialize the sync core with configuration from .env or safe defaults
pub async fn init_sync_core() -> Result<SyncCore, SyncError> {
    dotenv().ok(); // Load .env if present

    let transactions = Arc::new(ScannerTransactionSource::from_env());
    let balance_source = Arc::new(RpcBalanceSource::new());
    let token_info_source = Arc::new(RpcTokenInfoSource::new());

    Ok(SyncCore::new(transactions, balance_source, token_info_source))
}

/// Main context struct that owns the caches and the orchestrator.
///
/// Constructed explicitly and passed to whoever needs read access; there is
/// no ambient global. Only the orchestrator inside writes to the caches.
pub struct SyncCore {
    balances: Arc<TokenBalanceCache>,
    tokens: Arc<TokenMetadataCache>,
    orchestrator: SyncOrchestrator,
}

impl SyncCore {
    pub fn new(
        transactions: Arc<dyn TokenTransactionSource>,
        balance_source: Arc<dyn BalanceSource>,
        token_info_source: Arc<dyn TokenInfoSource>,
    ) -> Self {
        let balances = Arc::new(TokenBalanceCache::new());
        let tokens = Arc::new(TokenMetadataCache::new());
        let orchestrator = SyncOrchestrator::new(
            balances.clone(),
            tokens.clone(),
            transactions,
            balance_source,
            token_info_source,
        );

        Self {
            balances,
            tokens,
            orchestrator,
        }
    }

    /// Read access to the per-wallet balance cache
    pub fn balances(&self) -> &TokenBalanceCache {
        &self.balances
    }

    /// Read access to the per-chain metadata cache
    pub fn tokens(&self) -> &TokenMetadataCache {
        &self.tokens
    }

    /// Subscribe to cache change and refresh outcome notifications
    pub fn subscribe(&self) -> broadcast::Receiver<SyncEvent> {
        self.orchestrator.subscribe()
    }

    /// Discover the wallet's token contracts and fan out per-contract
    /// balance and metadata refreshes
    pub async fn refresh_token_list(
        &self,
        wallet: &WalletDescriptor,
    ) -> Result<Vec<ContractAddress>, SyncError> {
        self.orchestrator.refresh_token_list(wallet).await
    }

    /// Refresh one (wallet, contract) balance
    pub async fn refresh_balance(
        &self,
        wallet: &WalletDescriptor,
        contract: &str,
    ) -> Result<Amount, SyncError> {
        self.orchestrator.refresh_balance(wallet, contract).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::sources::{
        MockBalanceSource, MockTokenInfoSource, MockTokenTransactionSource,
    };

    fn mock_core() -> SyncCore {
        SyncCore::new(
            Arc::new(MockTokenTransactionSource::new()),
            Arc::new(MockBalanceSource::new()),
            Arc::new(MockTokenInfoSource::new()),
        )
    }

    #[tokio::test]
    async fn test_sync_core_initialization() {
        let core = init_sync_core().await.expect("Failed to initialize sync core");

        let wallet = WalletDescriptor::new(
            "0x742d35Cc6634C0532925a3b8D4C9db96C4b4d8b6",
            Network::Ethereum,
        )
        .expect("Failed to create wallet descriptor");

        assert!(core.balances().get_token_list(&wallet.key()).is_empty());
        assert!(!core.balances().has_discovered_token_list(&wallet.key()));
    }

    #[tokio::test]
    async fn test_caches_start_empty() {
        let core = mock_core();

        assert!(core
            .tokens()
            .get_info(Network::Ethereum, "0xdac17f958d2ee523a2206206994597c13d831ec7")
            .is_none());
    }

    #[tokio::test]
    async fn test_subscribe_before_any_refresh() {
        let core = mock_core();
        let mut rx = core.subscribe();

        assert!(rx.try_recv().is_err());
    }
}
