//! Wallet identity and related value objects
//!
//! A wallet is identified by an on-chain address plus the network it lives
//! on; the balance cache buckets its data under the deterministic key derived
//! from that pair.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::shared::error::SyncError;
use crate::shared::types::{Address, Network};
use crate::shared::utils::validate_evm_address;

/// A wallet as seen by the sync core: an address on a specific network.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct WalletDescriptor {
    pub address: Address,
    pub network: Network,
}

impl WalletDescriptor {
    pub fn new(address: impl Into<String>, network: Network) -> Result<Self, SyncError> {
        let address = address.into();
        validate_evm_address(&address)?;

        Ok(Self { address, network })
    }

    /// The balance-cache bucket key for this wallet
    pub fn key(&self) -> WalletKey {
        WalletKey::derive(&self.address, self.network)
    }
}

/// Deterministic wallet identity derived from (address, chain id).
///
/// Two descriptors referring to the same on-chain account always derive the
/// same key, regardless of address casing. Used only for balance data;
/// metadata is chain-scoped, not wallet-scoped.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct WalletKey(String);

impl WalletKey {
    pub fn derive(address: &str, network: Network) -> Self {
        Self(format!("{}:{}", address.to_lowercase(), network.chain_id()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for WalletKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
