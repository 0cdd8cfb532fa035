//! Per-chain token metadata cache
//!
//! Pure in-memory read/write store with no network access. One bucket exists
//! for every supported network from construction; inside a bucket, entries
//! are keyed by lower-cased contract address.

pub mod registry;

use std::collections::HashMap;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::domain::entities::token::TokenInfo;
use crate::shared::constants::SUPPORTED_NETWORKS;
use crate::shared::types::{ContractAddress, Network};
use crate::shared::utils::normalize_contract_address;

type ChainBuckets = HashMap<Network, HashMap<ContractAddress, TokenInfo>>;

/// Token metadata cache, chain-scoped and shared process-wide.
pub struct TokenMetadataCache {
    chains: RwLock<ChainBuckets>,
}

impl TokenMetadataCache {
    pub fn new() -> Self {
        let mut chains = HashMap::new();
        for network in SUPPORTED_NETWORKS {
            chains.insert(*network, HashMap::new());
        }

        Self {
            chains: RwLock::new(chains),
        }
    }

    /// Resolved metadata for the (chain, contract) pair, or `None` if the
    /// pair was never resolved. The contract is case-normalized first.
    pub fn get_info(&self, network: Network, contract: &str) -> Option<TokenInfo> {
        let chains = self.read();
        chains
            .get(&network)
            .and_then(|bucket| bucket.get(&normalize_contract_address(contract)))
            .cloned()
    }

    /// One lookup per input element, same order as the input. Not atomic
    /// across entries.
    pub fn get_info_batch(&self, network: Network, contracts: &[ContractAddress]) -> Vec<Option<TokenInfo>> {
        contracts
            .iter()
            .map(|contract| self.get_info(network, contract))
            .collect()
    }

    /// Create or overwrite the entry for the case-normalized contract
    pub fn set_info(&self, network: Network, contract: &str, info: TokenInfo) {
        let mut chains = self.write();
        chains
            .entry(network)
            .or_default()
            .insert(normalize_contract_address(contract), info);
    }

    fn read(&self) -> RwLockReadGuard<'_, ChainBuckets> {
        self.chains.read().unwrap_or_else(|e| e.into_inner())
    }

    fn write(&self) -> RwLockWriteGuard<'_, ChainBuckets> {
        self.chains.write().unwrap_or_else(|e| e.into_inner())
    }
}

impl Default for TokenMetadataCache {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn known(symbol: &str) -> TokenInfo {
        TokenInfo::Known {
            name: format!("{} Token", symbol),
            symbol: symbol.to_string(),
            decimals: 18,
            price: 0.0,
            verified: false,
        }
    }

    #[test]
    fn test_get_info_is_case_insensitive() {
        let cache = TokenMetadataCache::new();

        cache.set_info(Network::Ethereum, "0xAbC1", known("ABC"));

        assert_eq!(cache.get_info(Network::Ethereum, "0xabc1"), Some(known("ABC")));
        assert_eq!(cache.get_info(Network::Ethereum, "0xABC1"), Some(known("ABC")));
    }

    #[test]
    fn test_entries_are_chain_scoped() {
        let cache = TokenMetadataCache::new();

        cache.set_info(Network::Ethereum, "0xabc1", known("ABC"));

        assert!(cache.get_info(Network::Base, "0xabc1").is_none());
    }

    #[test]
    fn test_set_info_overwrites() {
        let cache = TokenMetadataCache::new();

        cache.set_info(Network::Polygon, "0xabc1", known("OLD"));
        cache.set_info(Network::Polygon, "0xABC1", known("NEW"));

        assert_eq!(cache.get_info(Network::Polygon, "0xabc1"), Some(known("NEW")));
    }

    #[test]
    fn test_not_a_token_is_stored() {
        let cache = TokenMetadataCache::new();

        cache.set_info(Network::Ethereum, "0xdead", TokenInfo::NotAToken);

        assert_eq!(cache.get_info(Network::Ethereum, "0xdead"), Some(TokenInfo::NotAToken));
    }

    #[test]
    fn test_get_info_batch_preserves_order() {
        let cache = TokenMetadataCache::new();

        cache.set_info(Network::Ethereum, "0xa1", known("A1"));
        cache.set_info(Network::Ethereum, "0xa3", known("A3"));

        let contracts = vec!["0xa1".to_string(), "0xa2".to_string(), "0xa3".to_string()];
        let infos = cache.get_info_batch(Network::Ethereum, &contracts);

        assert_eq!(infos.len(), 3);
        assert_eq!(infos[0], Some(known("A1")));
        assert_eq!(infos[1], None);
        assert_eq!(infos[2], Some(known("A3")));
    }
}
