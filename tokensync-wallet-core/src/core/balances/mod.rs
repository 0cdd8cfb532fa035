//! Per-wallet token balance cache
//!
//! Pure in-memory read/write store with no network access. Buckets are keyed
//! by [`WalletKey`] and created lazily; inside a bucket, entries are keyed by
//! contract address exactly as supplied by the discovery source (case is
//! preserved, unlike the metadata cache).

use std::collections::HashMap;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::domain::entities::token::TokenBalanceEntry;
use crate::domain::entities::wallet::WalletKey;
use crate::shared::types::{Amount, ContractAddress};

type Buckets = HashMap<WalletKey, HashMap<ContractAddress, TokenBalanceEntry>>;

/// Token balance cache, shared between the orchestrator (writer) and any
/// number of readers. Operations never block on I/O and never fail.
pub struct TokenBalanceCache {
    buckets: RwLock<Buckets>,
}

impl TokenBalanceCache {
    pub fn new() -> Self {
        Self {
            buckets: RwLock::new(HashMap::new()),
        }
    }

    /// Contract addresses discovered for the wallet, empty if discovery never ran
    pub fn get_token_list(&self, wallet: &WalletKey) -> Vec<ContractAddress> {
        let buckets = self.read();
        buckets
            .get(wallet)
            .map(|bucket| bucket.keys().cloned().collect())
            .unwrap_or_default()
    }

    /// Cached amount, or empty string if the entry or bucket does not exist
    pub fn get_balance(&self, wallet: &WalletKey, contract: &str) -> Amount {
        let buckets = self.read();
        buckets
            .get(wallet)
            .and_then(|bucket| bucket.get(contract))
            .map(|entry| entry.amount.clone())
            .unwrap_or_default()
    }

    /// True iff an entry exists and no fetch for it is outstanding
    pub fn has_loaded_balance(&self, wallet: &WalletKey, contract: &str) -> bool {
        let buckets = self.read();
        buckets
            .get(wallet)
            .and_then(|bucket| bucket.get(contract))
            .map(|entry| !entry.loading)
            .unwrap_or(false)
    }

    /// True iff discovery ran for the wallet, even when it found zero tokens
    pub fn has_discovered_token_list(&self, wallet: &WalletKey) -> bool {
        self.read().contains_key(wallet)
    }

    /// Set the loading flag, creating the bucket and entry if absent
    pub fn set_loading(&self, wallet: &WalletKey, contract: &str, loading: bool) {
        let mut buckets = self.write();
        let entry = buckets
            .entry(wallet.clone())
            .or_default()
            .entry(contract.to_string())
            .or_default();
        entry.loading = loading;
    }

    /// Set the amount, creating the bucket and entry if absent; the loading
    /// flag is left untouched
    pub fn set_balance(&self, wallet: &WalletKey, contract: &str, amount: Amount) {
        let mut buckets = self.write();
        let entry = buckets
            .entry(wallet.clone())
            .or_default()
            .entry(contract.to_string())
            .or_default();
        entry.amount = amount;
    }

    /// Replace the wallet's bucket with an empty one, recording that
    /// discovery ran and found zero token contracts
    pub fn clear_wallet_balances(&self, wallet: &WalletKey) {
        let mut buckets = self.write();
        buckets.insert(wallet.clone(), HashMap::new());
    }

    fn read(&self) -> RwLockReadGuard<'_, Buckets> {
        self.buckets.read().unwrap_or_else(|e| e.into_inner())
    }

    fn write(&self) -> RwLockWriteGuard<'_, Buckets> {
        self.buckets.write().unwrap_or_else(|e| e.into_inner())
    }
}

impl Default for TokenBalanceCache {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;
    use crate::shared::types::Network;

    fn wallet() -> WalletKey {
        WalletKey::derive("0x742d35Cc6634C0532925a3b8D4C9db96C4b4d8b6", Network::Ethereum)
    }

    #[test]
    fn test_undiscovered_wallet_reads_empty() {
        let cache = TokenBalanceCache::new();
        let key = wallet();

        assert!(cache.get_token_list(&key).is_empty());
        assert_eq!(cache.get_balance(&key, "0xA1"), "");
        assert!(!cache.has_loaded_balance(&key, "0xA1"));
        assert!(!cache.has_discovered_token_list(&key));
    }

    #[test]
    fn test_clear_marks_discovery_without_entries() {
        let cache = TokenBalanceCache::new();
        let key = wallet();

        cache.clear_wallet_balances(&key);

        assert!(cache.has_discovered_token_list(&key));
        assert!(cache.get_token_list(&key).is_empty());
    }

    #[test]
    fn test_clear_drops_existing_entries() {
        let cache = TokenBalanceCache::new();
        let key = wallet();

        cache.set_balance(&key, "0xA1", "7".to_string());
        cache.clear_wallet_balances(&key);

        assert!(cache.get_token_list(&key).is_empty());
        assert_eq!(cache.get_balance(&key, "0xA1"), "");
    }

    #[test]
    fn test_balance_preserved_verbatim() {
        let cache = TokenBalanceCache::new();
        let key = wallet();

        cache.set_balance(&key, "0xA1", "0.000000000000000001".to_string());

        assert_eq!(cache.get_balance(&key, "0xA1"), "0.000000000000000001");
    }

    #[test]
    fn test_loading_flag_round_trip() {
        let cache = TokenBalanceCache::new();
        let key = wallet();

        cache.set_loading(&key, "0xA1", true);
        assert!(!cache.has_loaded_balance(&key, "0xA1"));

        cache.set_loading(&key, "0xA1", false);
        assert!(cache.has_loaded_balance(&key, "0xA1"));
    }

    #[test]
    fn test_set_loading_creates_entry_with_empty_amount() {
        let cache = TokenBalanceCache::new();
        let key = wallet();

        cache.set_loading(&key, "0xA1", true);

        assert!(cache.has_discovered_token_list(&key));
        assert_eq!(cache.get_token_list(&key), vec!["0xA1".to_string()]);
        assert_eq!(cache.get_balance(&key, "0xA1"), "");
    }

    #[test]
    fn test_set_balance_does_not_touch_loading() {
        let cache = TokenBalanceCache::new();
        let key = wallet();

        cache.set_loading(&key, "0xA1", true);
        cache.set_balance(&key, "0xA1", "42".to_string());

        assert_eq!(cache.get_balance(&key, "0xA1"), "42");
        assert!(!cache.has_loaded_balance(&key, "0xA1"));
    }

    #[test]
    fn test_contract_case_preserved() {
        let cache = TokenBalanceCache::new();
        let key = wallet();

        cache.set_balance(&key, "0xAbC1", "1".to_string());

        assert_eq!(cache.get_token_list(&key), vec!["0xAbC1".to_string()]);
        assert_eq!(cache.get_balance(&key, "0xabc1"), "");
    }

    proptest! {
        #[test]
        fn balance_round_trips_any_decimal_string(amount in "[0-9]{1,40}(\\.[0-9]{1,18})?") {
            let cache = TokenBalanceCache::new();
            let key = wallet();

            cache.set_balance(&key, "0xA1", amount.clone());

            prop_assert_eq!(cache.get_balance(&key, "0xA1"), amount);
        }
    }
}
