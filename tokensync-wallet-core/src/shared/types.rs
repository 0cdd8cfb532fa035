use serde::{Deserialize, Serialize};

// Basic types for cache and sync operations
pub type Address = String;
pub type ContractAddress = String;
pub type Amount = String;

// Supported networks - Ethereum mainnet is the default/primary chain
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Network {
    Ethereum,
    Base,
    Polygon,
    Arbitrum,
}

impl Network {
    pub fn chain_id(&self) -> u64 {
        match self {
            Network::Ethereum => 1,
            Network::Base => 8453,
            Network::Polygon => 137,
            Network::Arbitrum => 42161,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Network::Ethereum => "Ethereum",
            Network::Base => "Base",
            Network::Polygon => "Polygon",
            Network::Arbitrum => "Arbitrum",
        }
    }

    pub fn rpc_url(&self) -> &'static str {
        match self {
            Network::Ethereum => "https://cloudflare-eth.com",
            Network::Base => "https://mainnet.base.org",
            Network::Polygon => "https://polygon-rpc.com",
            Network::Arbitrum => "https://arb1.arbitrum.io/rpc",
        }
    }

    pub fn native_currency(&self) -> &'static str {
        match self {
            Network::Ethereum => "ETH",
            Network::Base => "ETH",
            Network::Polygon => "POL",
            Network::Arbitrum => "ETH",
        }
    }

    /// True for the default/primary chain, the only one the verified-token
    /// registry applies to.
    pub fn is_default(&self) -> bool {
        *self == crate::shared::constants::DEFAULT_NETWORK
    }
}

// Result type for better error handling
pub type SyncResult<T> = Result<T, crate::shared::error::SyncError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_network_chain_ids() {
        assert_eq!(Network::Ethereum.chain_id(), 1);
        assert_eq!(Network::Base.chain_id(), 8453);
        assert_eq!(Network::Polygon.chain_id(), 137);
        assert_eq!(Network::Arbitrum.chain_id(), 42161);
    }

    #[test]
    fn test_network_names() {
        assert_eq!(Network::Ethereum.name(), "Ethereum");
        assert_eq!(Network::Base.name(), "Base");
    }

    #[test]
    fn test_default_network() {
        assert!(Network::Ethereum.is_default());
        assert!(!Network::Base.is_default());
        assert!(!Network::Polygon.is_default());
    }
}
