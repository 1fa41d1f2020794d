//! Error types for the BankClient demo.

use account_core::types::AmountError;
use thiserror::Error;

/// Client error type
#[derive(Debug, Error)]
pub enum ClientError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] crate::config::ConfigError),

    /// Invalid transaction amount
    #[error("Invalid amount: {0}")]
    Amount(#[from] AmountError),
}
