use dotenv::dotenv;
use std::env;

use tokensync_wallet_core::shared::constants::{
    DEFAULT_SCANNER_URL, RPC_ARBITRUM_ENV, RPC_BASE_ENV, RPC_ETHEREUM_ENV, RPC_POLYGON_ENV,
    SCANNER_API_KEY_ENV, SCANNER_URL_ENV,
};
use tokensync_wallet_core::Network;

fn main() {
    dotenv().ok();

    let networks = [
        (Network::Ethereum, RPC_ETHEREUM_ENV),
        (Network::Base, RPC_BASE_ENV),
        (Network::Polygon, RPC_POLYGON_ENV),
        (Network::Arbitrum, RPC_ARBITRUM_ENV),
    ];

    println!("TokenSync Wallet Core Network Configuration:\n");
    for (network, env_key) in networks {
        let url = env::var(env_key).unwrap_or_else(|_| network.rpc_url().to_string());
        println!("  {} (chain id {}): {}", network.name(), network.chain_id(), url);
    }

    let scanner_url =
        env::var(SCANNER_URL_ENV).unwrap_or_else(|_| DEFAULT_SCANNER_URL.to_string());
    let scanner_key = env::var(SCANNER_API_KEY_ENV).unwrap_or_default();
    println!("\n  Scanner URL: {}", scanner_url);
    println!(
        "  Scanner API key: {}",
        if scanner_key.is_empty() { "(not set)" } else { "(set)" }
    );
}
