//! Utility functions for the sync core
//!
//! This module contains common utility functions used throughout the sync core.

use crate::shared::constants::ADDRESS_LENGTH;
use crate::shared::error::SyncError;

/// Normalize a contract address for use as a metadata-cache key.
///
/// Balance-cache keys keep the case supplied by the discovery source, so this
/// must only be applied on the metadata path.
pub fn normalize_contract_address(address: &str) -> String {
    address.to_lowercase()
}

/// Validate EVM address format
pub fn validate_evm_address(address: &str) -> Result<(), SyncError> {
    if !address.starts_with("0x") {
        return Err(SyncError::validation("Address must start with 0x"));
    }

    if address.len() != ADDRESS_LENGTH {
        return Err(SyncError::validation("Address must be 42 characters long"));
    }

    // Check if all characters after 0x are valid hex
    if !address[2..].chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(SyncError::validation("Address contains invalid hex characters"));
    }

    Ok(())
}

/// Convert hex string to bytes
pub fn hex_to_bytes(hex: &str) -> Result<Vec<u8>, SyncError> {
    let hex = hex.trim_start_matches("0x");
    hex::decode(hex)
        .map_err(|e| SyncError::decode(format!("Invalid hex string: {}", e)))
}
