//! Error handling for the sync core
//!
//! This module defines the error types used throughout the sync core.

use thiserror::Error;

/// Sync error type
#[derive(Error, Debug, Clone)]
pub enum SyncError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Network error: {0}")]
    Network(String),

    #[error("Decode error: {0}")]
    Decode(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl SyncError {
    /// Create a configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Create a network error
    pub fn network(message: impl Into<String>) -> Self {
        Self::Network(message.into())
    }

    /// Create a decode error
    pub fn decode(message: impl Into<String>) -> Self {
        Self::Decode(message.into())
    }

    /// Create a validation error
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// Create an internal error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }
}

// Standard library and ecosystem error conversions
impl From<reqwest::Error> for SyncError {
    fn from(err: reqwest::Error) -> Self {
        Self::network(format!("HTTP error: {}", err))
    }
}

impl From<serde_json::Error> for SyncError {
    fn from(err: serde_json::Error) -> Self {
        Self::decode(format!("JSON error: {}", err))
    }
}

impl From<hex::FromHexError> for SyncError {
    fn from(err: hex::FromHexError) -> Self {
        Self::decode(format!("Hex decoding error: {}", err))
    }
}

impl From<tokio::task::JoinError> for SyncError {
    fn from(err: tokio::task::JoinError) -> Self {
        Self::internal(format!("Task join error: {}", err))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sync_error_creation() {
        let config_error = SyncError::config("Missing RPC endpoint");
        let network_error = SyncError::network("Connection refused");
        let validation_error = SyncError::validation("Invalid input");

        assert!(matches!(config_error, SyncError::Config(_)));
        assert!(matches!(network_error, SyncError::Network(_)));
        assert!(matches!(validation_error, SyncError::Validation(_)));
    }

    #[test]
    fn test_error_conversions() {
        let hex_error = hex::decode("0xzz").unwrap_err();
        let sync_error: SyncError = hex_error.into();

        assert!(matches!(sync_error, SyncError::Decode(_)));
    }

    #[test]
    fn test_error_display() {
        let error = SyncError::network("Test error");
        let display = format!("{}", error);

        assert!(display.contains("Network error"));
        assert!(display.contains("Test error"));
    }
}
