//! Domain entities for the sync core

pub mod token;
pub mod wallet;

pub use token::{TokenBalanceEntry, TokenInfo};
pub use wallet::{WalletDescriptor, WalletKey};
