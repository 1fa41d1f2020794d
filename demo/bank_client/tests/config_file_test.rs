//! Configuration File Tests
//!
//! Loads client configuration from files on disk.

use account_core::accounts::{DepositOnlyKind, WithdrawableKind};
use bank_client::config::{ClientConfig, ConfigError};
use bank_client::sink::MemorySink;
use std::io::Write;
use tempfile::NamedTempFile;

fn write_config(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file
}

#[test]
fn test_load_full_config() {
    let file = write_config(
        r#"
        log_level = "debug"

        [amounts]
        deposit = 1000
        withdrawal = 1500
        deposit_only = 5000

        [accounts]
        withdrawable = ["current"]
        deposit_only = []
        "#,
    );

    let config = ClientConfig::load_and_validate(file.path()).unwrap();
    assert_eq!(config.log_level, "debug");
    assert_eq!(config.amounts.withdrawal, 1500);
    assert_eq!(config.accounts.withdrawable, vec![WithdrawableKind::Current]);
    assert!(config.accounts.deposit_only.is_empty());

    let mut sink = MemorySink::new();
    bank_client::run(&config, &mut sink).unwrap();
    assert_eq!(
        sink.lines(),
        vec![
            "Deposited: 1000 in Current Account. New Balance: 1000",
            "Insufficient funds in Current Account!",
        ]
    );
}

#[test]
fn test_load_missing_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let result = ClientConfig::load(&dir.path().join("absent.toml"));
    assert!(matches!(result, Err(ConfigError::Io(_))));
}

#[test]
fn test_load_or_default_without_file() {
    let dir = tempfile::tempdir().unwrap();
    let (config, ignored) = ClientConfig::load_or_default(&dir.path().join("absent.toml"));
    assert_eq!(config, ClientConfig::default());
    assert!(ignored.is_none());
}

#[test]
fn test_load_or_default_reads_valid_file() {
    let file = write_config("[amounts]\nwithdrawal = 1500\n");
    let (config, ignored) = ClientConfig::load_or_default(file.path());
    assert!(ignored.is_none());
    assert_eq!(config.amounts.withdrawal, 1500);
}

#[test]
fn test_load_or_default_falls_back_on_invalid_file() {
    let file = write_config("log_level = \"verbose\"\n[amounts]\ndeposit = 0\n");
    let (config, ignored) = ClientConfig::load_or_default(file.path());
    assert_eq!(config, ClientConfig::default());
    assert!(matches!(ignored, Some(ConfigError::Validation(_))));

    // The fallback still runs the canonical pass
    let mut sink = MemorySink::new();
    bank_client::run(&config, &mut sink).unwrap();
    assert_eq!(sink.lines().len(), 5);
}

#[test]
fn test_load_or_default_falls_back_on_unparsable_file() {
    let file = write_config("[accounts]\nwithdrawable = [\"fixed_term\"]\n");
    let (config, ignored) = ClientConfig::load_or_default(file.path());
    assert_eq!(config, ClientConfig::default());
    assert!(matches!(ignored, Some(ConfigError::Parse(_))));
}

#[test]
fn test_explicit_invalid_file_is_error() {
    let file = write_config("log_level = \"verbose\"\n");
    let result = ClientConfig::load_and_validate(file.path());
    assert!(matches!(result, Err(ConfigError::Validation(_))));
}

#[test]
fn test_miscategorised_roster_fails_to_load() {
    let file = write_config("[accounts]\nwithdrawable = [\"savings\", \"fixed_term\"]\n");
    let result = ClientConfig::load(file.path());
    assert!(matches!(result, Err(ConfigError::Parse(_))));
}

#[test]
fn test_deposit_only_roster() {
    let file = write_config("[accounts]\nwithdrawable = []\ndeposit_only = [\"fixed_term\"]\n");
    let config = ClientConfig::load_and_validate(file.path()).unwrap();
    assert_eq!(config.accounts.deposit_only, vec![DepositOnlyKind::FixedTerm]);
}
