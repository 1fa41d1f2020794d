//! # BankClient Demo
//!
//! Drives a batch of accounts through one deposit and, where the account can
//! honour it, one withdrawal each.
//!
//! ## Features
//!
//! - **Typed collections**: withdraw-capable and deposit-only accounts live in
//!   separate collections, so the dispatcher never checks what an account can do
//! - **Report sink**: every operation becomes one [`TransactionRecord`] line,
//!   printed to stdout or collected in memory
//! - **Configuration**: demonstration amounts and the account roster load from
//!   an optional TOML file
//!
//! ## Architecture Compliance
//!
//! This crate sits in the Demo layer on top of `account_core`:
//! - Account semantics (balances, outcomes) live entirely in `account_core`
//! - This crate only wires accounts together and reports what happened
//!
//! [`TransactionRecord`]: crate::sink::TransactionRecord

pub mod client;
pub mod config;
pub mod error;
pub mod sink;

use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::client::{BankClient, ProcessingSummary};
use crate::config::ClientConfig;
use crate::error::ClientError;
use crate::sink::ReportSink;

/// Run one transaction pass over the accounts described by `config`.
///
/// # Errors
/// Returns [`ClientError::Amount`] if a configured amount is zero. Business
/// outcomes such as insufficient funds are reported through `sink`, never as
/// errors.
///
/// # Examples
/// ```
/// use bank_client::config::ClientConfig;
/// use bank_client::sink::MemorySink;
///
/// let mut sink = MemorySink::new();
/// let summary = bank_client::run(&ClientConfig::default(), &mut sink).unwrap();
///
/// assert_eq!(summary.deposits, 3);
/// assert_eq!(sink.lines().len(), 5);
/// ```
pub fn run<S: ReportSink + ?Sized>(
    config: &ClientConfig,
    sink: &mut S,
) -> Result<ProcessingSummary, ClientError> {
    let amounts = config.amounts.to_transaction_amounts()?;
    let mut client = BankClient::from_kinds(
        &config.accounts.withdrawable,
        &config.accounts.deposit_only,
    )
    .with_amounts(amounts);

    info!(
        withdrawable = client.withdrawable_accounts().len(),
        deposit_only = client.deposit_only_accounts().len(),
        "Processing transactions"
    );

    let summary = client.process_transactions(sink);

    info!(
        deposits = summary.deposits,
        withdrawals = summary.withdrawals,
        rejected = summary.rejected,
        "Transactions processed"
    );

    Ok(summary)
}

/// Tracing filter for the binary.
///
/// `rust_log` (the `RUST_LOG` value) wins when it is set and parses;
/// otherwise this crate and `account_core` log at `level`.
///
/// # Examples
/// ```
/// let filter = bank_client::log_filter(None, "debug");
/// assert!(filter.to_string().contains("bank_client=debug"));
///
/// let filter = bank_client::log_filter(Some("bank_client=trace"), "info");
/// assert!(!filter.to_string().contains("bank_client=info"));
/// ```
pub fn log_filter(rust_log: Option<&str>, level: &str) -> EnvFilter {
    rust_log
        .filter(|directives| !directives.trim().is_empty())
        .and_then(|directives| EnvFilter::try_new(directives).ok())
        .unwrap_or_else(|| EnvFilter::new(format!("bank_client={level},account_core={level}")))
}

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::client::{AccountSnapshot, BankClient, ProcessingSummary, TransactionAmounts};
    pub use crate::config::{AccountRoster, AmountsConfig, ClientConfig, ConfigError};
    pub use crate::error::ClientError;
    pub use crate::sink::{MemorySink, RecordOutcome, ReportSink, StdoutSink, TransactionRecord};
}
