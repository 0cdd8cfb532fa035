//! Constants for the sync core
//!
//! This module contains all constants used throughout the sync core.

use crate::shared::types::Network;

// The default/primary chain; the verified-token registry applies only here
pub const DEFAULT_NETWORK: Network = Network::Ethereum;

// Supported networks, one metadata-cache bucket each
pub const SUPPORTED_NETWORKS: &[Network] = &[
    Network::Ethereum,
    Network::Base,
    Network::Polygon,
    Network::Arbitrum,
];

// Event stream
pub const EVENT_CHANNEL_CAPACITY: usize = 256;

// Configuration environment keys
// Keys: TOKENSYNC_RPC_ETHEREUM, TOKENSYNC_RPC_BASE,
//       TOKENSYNC_RPC_POLYGON, TOKENSYNC_RPC_ARBITRUM
pub const RPC_ETHEREUM_ENV: &str = "TOKENSYNC_RPC_ETHEREUM";
pub const RPC_BASE_ENV: &str = "TOKENSYNC_RPC_BASE";
pub const RPC_POLYGON_ENV: &str = "TOKENSYNC_RPC_POLYGON";
pub const RPC_ARBITRUM_ENV: &str = "TOKENSYNC_RPC_ARBITRUM";

pub const SCANNER_URL_ENV: &str = "TOKENSYNC_SCANNER_URL";
pub const SCANNER_API_KEY_ENV: &str = "TOKENSYNC_SCANNER_API_KEY";
pub const DEFAULT_SCANNER_URL: &str = "https://api.etherscan.io/v2/api";

// Validation constants
pub const ADDRESS_LENGTH: usize = 42; // 0x + 40 hex chars

// Build information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const NAME: &str = env!("CARGO_PKG_NAME");
pub const DESCRIPTION: &str = env!("CARGO_PKG_DESCRIPTION");
