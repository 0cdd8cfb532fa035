//! Sync orchestration
//!
//! This module drives discovery of a wallet's token contracts and the
//! per-contract balance and metadata refreshes, writing results into the two
//! caches. Refresh outcomes are published on a broadcast stream so that
//! fire-and-forget failures stay observable.

use std::collections::HashSet;
use std::sync::Arc;

use tokio::sync::broadcast;

use crate::core::balances::TokenBalanceCache;
use crate::core::tokens::registry;
use crate::core::tokens::TokenMetadataCache;
use crate::domain::entities::token::TokenInfo;
use crate::domain::entities::wallet::{WalletDescriptor, WalletKey};
use crate::infrastructure::sources::{BalanceSource, TokenInfoSource, TokenTransactionSource};
use crate::shared::constants::EVENT_CHANNEL_CAPACITY;
use crate::shared::error::SyncError;
use crate::shared::types::{Amount, ContractAddress, Network};
use crate::shared::utils::normalize_contract_address;

/// Which refresh produced an outcome
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RefreshKind {
    Balance,
    Metadata,
}

/// Cache change and refresh outcome notifications.
///
/// Consumers subscribe via [`SyncOrchestrator::subscribe`]; polling the cache
/// read accessors works just as well for consumers that do not care about
/// push updates.
#[derive(Debug, Clone)]
pub enum SyncEvent {
    TokenListDiscovered {
        wallet: WalletKey,
        contracts: Vec<ContractAddress>,
    },
    TokenListCleared {
        wallet: WalletKey,
    },
    BalanceUpdated {
        wallet: WalletKey,
        contract: ContractAddress,
        amount: Amount,
    },
    MetadataUpdated {
        network: Network,
        contract: ContractAddress,
        info: TokenInfo,
    },
    RefreshFailed {
        wallet: WalletKey,
        network: Network,
        contract: ContractAddress,
        kind: RefreshKind,
        reason: String,
    },
}

/// Orchestrator for wallet token discovery and refresh fan-out.
///
/// Cheap to clone; all state is shared behind `Arc`s. Only this type writes
/// to the caches.
#[derive(Clone)]
pub struct SyncOrchestrator {
    balances: Arc<TokenBalanceCache>,
    tokens: Arc<TokenMetadataCache>,
    transactions: Arc<dyn TokenTransactionSource>,
    balance_source: Arc<dyn BalanceSource>,
    token_info_source: Arc<dyn TokenInfoSource>,
    events: broadcast::Sender<SyncEvent>,
}

impl SyncOrchestrator {
    pub fn new(
        balances: Arc<TokenBalanceCache>,
        tokens: Arc<TokenMetadataCache>,
        transactions: Arc<dyn TokenTransactionSource>,
        balance_source: Arc<dyn BalanceSource>,
        token_info_source: Arc<dyn TokenInfoSource>,
    ) -> Self {
        let (events, _) = broadcast::channel(EVENT_CHANNEL_CAPACITY);

        Self {
            balances,
            tokens,
            transactions,
            balance_source,
            token_info_source,
            events,
        }
    }

    /// Subscribe to cache change and refresh outcome notifications
    pub fn subscribe(&self) -> broadcast::Receiver<SyncEvent> {
        self.events.subscribe()
    }

    /// Discover the wallet's token contracts from its transaction history and
    /// fan out one balance refresh and one metadata refresh per contract.
    ///
    /// The fan-out is fire-and-forget: spawned refreshes are not awaited and
    /// a failure in one does not cancel the others. Failures surface on the
    /// event stream as [`SyncEvent::RefreshFailed`]. Returns the discovered
    /// contract list, case preserved as received, in first-seen order.
    pub async fn refresh_token_list(
        &self,
        wallet: &WalletDescriptor,
    ) -> Result<Vec<ContractAddress>, SyncError> {
        let key = wallet.key();
        let transfers = self
            .transactions
            .get_token_transactions(wallet.network, &wallet.address)
            .await?;

        let mut seen = HashSet::new();
        let mut contracts = Vec::new();
        for transfer in transfers {
            if seen.insert(transfer.contract_address.clone()) {
                contracts.push(transfer.contract_address);
            }
        }

        if contracts.is_empty() {
            log::info!("No token contracts discovered for wallet {}", key);
            self.balances.clear_wallet_balances(&key);
            self.emit(SyncEvent::TokenListCleared { wallet: key });
            return Ok(contracts);
        }

        log::info!(
            "Discovered {} token contract(s) for wallet {}",
            contracts.len(),
            key
        );
        self.emit(SyncEvent::TokenListDiscovered {
            wallet: key,
            contracts: contracts.clone(),
        });

        for contract in &contracts {
            let this = self.clone();
            let wallet = wallet.clone();
            let contract_addr = contract.clone();
            tokio::spawn(async move {
                if let Err(err) = this.refresh_balance(&wallet, &contract_addr).await {
                    this.report_failure(&wallet, &contract_addr, RefreshKind::Balance, err);
                }
            });

            let this = self.clone();
            let wallet = wallet.clone();
            let contract_addr = contract.clone();
            tokio::spawn(async move {
                if let Err(err) = this.refresh_metadata(wallet.network, &contract_addr).await {
                    this.report_failure(&wallet, &contract_addr, RefreshKind::Metadata, err);
                }
            });
        }

        Ok(contracts)
    }

    /// Fetch and commit the current balance for one (wallet, contract) pair,
    /// then trigger a metadata refresh for the contract in case its metadata
    /// was never resolved.
    ///
    /// A fetch failure propagates to the caller and leaves the entry's
    /// loading flag set; there is no retry and no rollback.
    pub async fn refresh_balance(
        &self,
        wallet: &WalletDescriptor,
        contract: &str,
    ) -> Result<Amount, SyncError> {
        let key = wallet.key();
        self.balances.set_loading(&key, contract, true);

        let amount = self
            .balance_source
            .get_balance(wallet.network, &wallet.address, contract)
            .await?;

        self.balances.set_balance(&key, contract, amount.clone());
        self.balances.set_loading(&key, contract, false);
        self.emit(SyncEvent::BalanceUpdated {
            wallet: key,
            contract: contract.to_string(),
            amount: amount.clone(),
        });

        self.refresh_metadata(wallet.network, contract).await?;

        Ok(amount)
    }

    /// Resolve metadata for one (chain, contract) pair.
    ///
    /// Short-circuits on a cache hit (including the terminal `NotAToken`
    /// state) and, on the default chain, on a verified-registry hit; only
    /// otherwise does it call the token-info source.
    pub async fn refresh_metadata(
        &self,
        network: Network,
        contract: &str,
    ) -> Result<TokenInfo, SyncError> {
        if let Some(info) = self.tokens.get_info(network, contract) {
            log::debug!(
                "Metadata for {} on {} already resolved, skipping fetch",
                contract,
                network.name()
            );
            return Ok(info);
        }

        if network.is_default() {
            if let Some(token) = registry::get(contract) {
                let info = TokenInfo::Known {
                    name: token.name.to_string(),
                    symbol: token.symbol.to_string(),
                    decimals: token.decimals,
                    price: 0.0,
                    verified: true,
                };
                self.commit_metadata(network, contract, info.clone());
                return Ok(info);
            }
        }

        let remote = self
            .token_info_source
            .get_token_info(network, contract)
            .await?;

        let info = if remote.not_a_token {
            TokenInfo::NotAToken
        } else {
            TokenInfo::Known {
                name: remote.name.unwrap_or_default(),
                symbol: remote.symbol.unwrap_or_default(),
                decimals: remote.decimals.unwrap_or_default(),
                price: 0.0,
                verified: false,
            }
        };

        self.commit_metadata(network, contract, info.clone());
        Ok(info)
    }

    fn commit_metadata(&self, network: Network, contract: &str, info: TokenInfo) {
        self.tokens.set_info(network, contract, info.clone());
        self.emit(SyncEvent::MetadataUpdated {
            network,
            contract: normalize_contract_address(contract),
            info,
        });
    }

    fn report_failure(
        &self,
        wallet: &WalletDescriptor,
        contract: &str,
        kind: RefreshKind,
        err: SyncError,
    ) {
        log::warn!(
            "{:?} refresh failed for {} on {}: {}",
            kind,
            contract,
            wallet.network.name(),
            err
        );
        self.emit(SyncEvent::RefreshFailed {
            wallet: wallet.key(),
            network: wallet.network,
            contract: contract.to_string(),
            kind,
            reason: err.to_string(),
        });
    }

    // Send errors only mean nobody is subscribed
    fn emit(&self, event: SyncEvent) {
        let _ = self.events.send(event);
    }
}
