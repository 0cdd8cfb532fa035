//! Static verified-token registry
//!
//! A read-only list of well-known token contracts on the default chain,
//! loaded once per process. A registry hit lets the orchestrator commit
//! verified metadata without any network access.

use std::collections::HashMap;

use lazy_static::lazy_static;

/// Metadata carried by the registry for a verified contract
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VerifiedToken {
    pub name: &'static str,
    pub symbol: &'static str,
    pub decimals: u8,
}

lazy_static! {
    static ref VERIFIED_TOKENS: HashMap<&'static str, VerifiedToken> = {
        let mut tokens = HashMap::new();
        tokens.insert(
            "0xdac17f958d2ee523a2206206994597c13d831ec7",
            VerifiedToken { name: "Tether USD", symbol: "USDT", decimals: 6 },
        );
        tokens.insert(
            "0xa0b86991c6218b36c1d19d4a2e9eb0ce3606eb48",
            VerifiedToken { name: "USD Coin", symbol: "USDC", decimals: 6 },
        );
        tokens.insert(
            "0x6b175474e89094c44da98b954eedeac495271d0f",
            VerifiedToken { name: "Dai Stablecoin", symbol: "DAI", decimals: 18 },
        );
        tokens.insert(
            "0x2260fac5e5542a773aa44fbcfedf7c193bc2c599",
            VerifiedToken { name: "Wrapped BTC", symbol: "WBTC", decimals: 8 },
        );
        tokens.insert(
            "0xc02aaa39b223fe8d0a0e5c4f27ead9083c756cc2",
            VerifiedToken { name: "Wrapped Ether", symbol: "WETH", decimals: 18 },
        );
        tokens.insert(
            "0x514910771af9ca656af840dff83e8264ecf986ca",
            VerifiedToken { name: "ChainLink Token", symbol: "LINK", decimals: 18 },
        );
        tokens.insert(
            "0x1f9840a85d5af5bf1d1762f925bdaddc4201f984",
            VerifiedToken { name: "Uniswap", symbol: "UNI", decimals: 18 },
        );
        tokens.insert(
            "0x7fc66500c84a76ad7e9c93437bfc5ac33e2ddae9",
            VerifiedToken { name: "Aave Token", symbol: "AAVE", decimals: 18 },
        );
        tokens
    };
}

/// Look up a verified token by contract address, case-insensitive
pub fn get(contract: &str) -> Option<VerifiedToken> {
    VERIFIED_TOKENS.get(contract.to_lowercase().as_str()).copied()
}
