//! Token entities for the sync core

use serde::{Deserialize, Serialize};

use crate::shared::types::Amount;

/// Resolved metadata for a (chain, contract) pair.
///
/// `NotAToken` is terminal: once committed it is never replaced by a further
/// fetch. Absence of an entry in the metadata cache means "not yet resolved".
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum TokenInfo {
    NotAToken,
    Known {
        name: String,
        symbol: String,
        decimals: u8,
        price: f64,
        verified: bool,
    },
}

impl TokenInfo {
    pub fn is_known(&self) -> bool {
        matches!(self, TokenInfo::Known { .. })
    }

    pub fn is_verified(&self) -> bool {
        matches!(self, TokenInfo::Known { verified: true, .. })
    }
}

/// A single wallet-scoped balance cell.
///
/// `loading` is true exactly while a balance fetch for the (wallet, contract)
/// pair is outstanding. An entry with an empty amount and `loading == false`
/// means "queried and explicitly cleared/empty", distinct from no entry at
/// all ("never queried").
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct TokenBalanceEntry {
    pub amount: Amount,
    pub loading: bool,
}
