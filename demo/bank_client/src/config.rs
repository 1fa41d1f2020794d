//! Client configuration management.
//!
//! Handles loading of the demonstration amounts and the account roster from
//! an optional TOML file. Every field has a default, so an empty file (or no
//! file at all) reproduces the canonical run:
//!
//! ```toml
//! log_level = "info"
//!
//! [amounts]
//! deposit = 1000
//! withdrawal = 500
//! deposit_only = 5000
//!
//! [accounts]
//! withdrawable = ["savings", "current"]
//! deposit_only = ["fixed_term"]
//! ```
//!
//! The two roster lists are typed: `"fixed_term"` is not a valid entry in
//! `withdrawable`, so a mis-categorised account fails at parse time.

use account_core::accounts::{DepositOnlyKind, WithdrawableKind};
use account_core::types::{Amount, AmountError};
use serde::Deserialize;
use std::path::Path;
use thiserror::Error;

use crate::client::TransactionAmounts;

/// Default configuration file looked up when none is given
pub const DEFAULT_CONFIG_PATH: &str = "bank_client.toml";

/// Demonstration amounts, in whole currency units
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct AmountsConfig {
    /// Deposit into each withdraw-capable account
    #[serde(default = "default_deposit")]
    pub deposit: u64,

    /// Withdrawal attempted on each withdraw-capable account
    #[serde(default = "default_withdrawal")]
    pub withdrawal: u64,

    /// Deposit into each deposit-only account
    #[serde(default = "default_deposit_only")]
    pub deposit_only: u64,
}

fn default_deposit() -> u64 {
    1000
}

fn default_withdrawal() -> u64 {
    500
}

fn default_deposit_only() -> u64 {
    5000
}

impl Default for AmountsConfig {
    fn default() -> Self {
        Self {
            deposit: default_deposit(),
            withdrawal: default_withdrawal(),
            deposit_only: default_deposit_only(),
        }
    }
}

impl AmountsConfig {
    /// Convert to validated transaction amounts
    pub fn to_transaction_amounts(&self) -> Result<TransactionAmounts, AmountError> {
        Ok(TransactionAmounts {
            deposit: Amount::new(self.deposit)?,
            withdrawal: Amount::new(self.withdrawal)?,
            deposit_only: Amount::new(self.deposit_only)?,
        })
    }
}

/// Accounts to open, already split by capability
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct AccountRoster {
    /// Accounts that support deposit and withdrawal
    #[serde(default = "default_withdrawable")]
    pub withdrawable: Vec<WithdrawableKind>,

    /// Accounts that support deposit only
    #[serde(default = "default_deposit_only_accounts")]
    pub deposit_only: Vec<DepositOnlyKind>,
}

fn default_withdrawable() -> Vec<WithdrawableKind> {
    vec![WithdrawableKind::Savings, WithdrawableKind::Current]
}

fn default_deposit_only_accounts() -> Vec<DepositOnlyKind> {
    vec![DepositOnlyKind::FixedTerm]
}

impl Default for AccountRoster {
    fn default() -> Self {
        Self {
            withdrawable: default_withdrawable(),
            deposit_only: default_deposit_only_accounts(),
        }
    }
}

/// Client configuration
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct ClientConfig {
    /// Demonstration amounts
    #[serde(default)]
    pub amounts: AmountsConfig,

    /// Account roster
    #[serde(default)]
    pub accounts: AccountRoster,

    /// Log level
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            amounts: AmountsConfig::default(),
            accounts: AccountRoster::default(),
            log_level: default_log_level(),
        }
    }
}

impl ClientConfig {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io(e.to_string()))?;

        Self::from_toml(&content)
    }

    /// Parse configuration from TOML text
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Load and validate `path` if it exists, otherwise return the default config.
    ///
    /// A file that is present but unreadable or invalid also yields the
    /// default config; the problem is handed back so the caller can log it
    /// once logging is up.
    pub fn load_or_default(path: &Path) -> (Self, Option<ConfigError>) {
        if !path.exists() {
            return (Self::default(), None);
        }

        match Self::load_and_validate(path) {
            Ok(config) => (config, None),
            Err(e) => (Self::default(), Some(e)),
        }
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut errors = Vec::new();

        let valid_log_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_log_levels.contains(&self.log_level.to_lowercase().as_str()) {
            errors.push(format!(
                "Invalid log_level '{}'. Valid values: {:?}",
                self.log_level, valid_log_levels
            ));
        }

        let amounts = [
            ("amounts.deposit", self.amounts.deposit),
            ("amounts.withdrawal", self.amounts.withdrawal),
            ("amounts.deposit_only", self.amounts.deposit_only),
        ];
        for (name, value) in amounts {
            if value == 0 {
                errors.push(format!("{} must be greater than 0", name));
            }
        }

        if self.accounts.withdrawable.is_empty() && self.accounts.deposit_only.is_empty() {
            errors.push("accounts roster is empty".to_string());
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(ConfigError::Validation(errors))
        }
    }

    /// Load configuration from file and validate
    pub fn load_and_validate(path: &Path) -> Result<Self, ConfigError> {
        let config = Self::load(path)?;
        config.validate()?;
        Ok(config)
    }
}

/// Configuration error type
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// IO error reading config file
    #[error("IO error: {0}")]
    Io(String),

    /// Parse error in config file
    #[error("Parse error: {0}")]
    Parse(String),

    /// Validation error
    #[error("Validation errors: {}", .0.join("; "))]
    Validation(Vec<String>),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ClientConfig::default();
        assert_eq!(config.amounts.deposit, 1000);
        assert_eq!(config.amounts.withdrawal, 500);
        assert_eq!(config.amounts.deposit_only, 5000);
        assert_eq!(
            config.accounts.withdrawable,
            vec![WithdrawableKind::Savings, WithdrawableKind::Current]
        );
        assert_eq!(config.accounts.deposit_only, vec![DepositOnlyKind::FixedTerm]);
    }

    #[test]
    fn test_default_config_validates() {
        assert!(ClientConfig::default().validate().is_ok());
    }

    #[test]
    fn test_empty_toml_is_default() {
        let config = ClientConfig::from_toml("").unwrap();
        assert_eq!(config, ClientConfig::default());
    }

    #[test]
    fn test_partial_amounts_keep_other_defaults() {
        let config = ClientConfig::from_toml("[amounts]\nwithdrawal = 1500\n").unwrap();
        assert_eq!(config.amounts.withdrawal, 1500);
        assert_eq!(config.amounts.deposit, 1000);
        assert_eq!(config.amounts.deposit_only, 5000);
    }

    #[test]
    fn test_roster_parses_snake_case_kinds() {
        let config = ClientConfig::from_toml(
            r#"
            [accounts]
            withdrawable = ["current"]
            deposit_only = ["fixed_term", "fixed_term"]
            "#,
        )
        .unwrap();
        assert_eq!(config.accounts.withdrawable, vec![WithdrawableKind::Current]);
        assert_eq!(config.accounts.deposit_only.len(), 2);
    }

    #[test]
    fn test_fixed_term_rejected_as_withdrawable() {
        let result = ClientConfig::from_toml("[accounts]\nwithdrawable = [\"fixed_term\"]\n");
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_savings_rejected_as_deposit_only() {
        let result = ClientConfig::from_toml("[accounts]\ndeposit_only = [\"savings\"]\n");
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_unknown_field_rejected() {
        let result = ClientConfig::from_toml("gateway_url = \"http://localhost\"\n");
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_validate_invalid_log_level() {
        let mut config = ClientConfig::default();
        config.log_level = "invalid".to_string();

        let result = config.validate();
        assert!(result.is_err());

        if let Err(ConfigError::Validation(errors)) = result {
            assert!(errors.iter().any(|e| e.contains("log_level")));
        } else {
            panic!("Expected validation error");
        }
    }

    #[test]
    fn test_validate_valid_log_levels() {
        for level in &["trace", "debug", "info", "warn", "error", "INFO", "DEBUG"] {
            let mut config = ClientConfig::default();
            config.log_level = level.to_string();
            assert!(config.validate().is_ok(), "Log level '{}' should be valid", level);
        }
    }

    #[test]
    fn test_validate_zero_amounts() {
        let mut config = ClientConfig::default();
        config.amounts.withdrawal = 0;
        config.amounts.deposit_only = 0;

        if let Err(ConfigError::Validation(errors)) = config.validate() {
            assert_eq!(errors.len(), 2);
            assert!(errors.iter().any(|e| e.contains("amounts.withdrawal")));
            assert!(errors.iter().any(|e| e.contains("amounts.deposit_only")));
        } else {
            panic!("Expected validation error");
        }
    }

    #[test]
    fn test_validate_empty_roster() {
        let mut config = ClientConfig::default();
        config.accounts.withdrawable.clear();
        config.accounts.deposit_only.clear();

        if let Err(ConfigError::Validation(errors)) = config.validate() {
            assert!(errors.iter().any(|e| e.contains("roster")));
        } else {
            panic!("Expected validation error");
        }
    }

    #[test]
    fn test_validate_one_sided_roster_is_fine() {
        let mut config = ClientConfig::default();
        config.accounts.deposit_only.clear();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_zero_amount_conversion_fails() {
        let amounts = AmountsConfig {
            deposit: 0,
            ..AmountsConfig::default()
        };
        assert_eq!(amounts.to_transaction_amounts(), Err(AmountError::Zero));
    }

    #[test]
    fn test_config_error_display() {
        let error = ConfigError::Validation(vec!["Error 1".to_string(), "Error 2".to_string()]);
        let display = format!("{}", error);
        assert!(display.contains("Error 1"));
        assert!(display.contains("Error 2"));
    }
}
