//! Transaction report output.
//!
//! Every account operation the client performs becomes one
//! [`TransactionRecord`]. A [`ReportSink`] decides where records go:
//! [`StdoutSink`] prints one line per record, [`MemorySink`] keeps them for
//! inspection.

use account_core::outcome::{DepositReceipt, WithdrawalOutcome};
use account_core::types::{AccountKind, Amount, Balance, OperationKind};
use std::fmt;
use std::io::{self, Write};
use tracing::warn;

/// Whether an operation went through
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordOutcome {
    /// Operation applied
    Completed,
    /// Withdrawal refused, balance unchanged
    InsufficientFunds,
}

/// One reported account operation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransactionRecord {
    /// Account the operation ran against
    pub kind: AccountKind,
    /// Deposit or withdrawal
    pub operation: OperationKind,
    /// Amount requested
    pub amount: Amount,
    /// Balance after the operation
    pub balance: Balance,
    /// Whether it went through
    pub outcome: RecordOutcome,
}

impl From<DepositReceipt> for TransactionRecord {
    fn from(receipt: DepositReceipt) -> Self {
        Self {
            kind: receipt.kind,
            operation: OperationKind::Deposit,
            amount: receipt.amount,
            balance: receipt.balance,
            outcome: RecordOutcome::Completed,
        }
    }
}

impl From<WithdrawalOutcome> for TransactionRecord {
    fn from(outcome: WithdrawalOutcome) -> Self {
        let result = if outcome.is_completed() {
            RecordOutcome::Completed
        } else {
            RecordOutcome::InsufficientFunds
        };

        Self {
            kind: outcome.kind(),
            operation: OperationKind::Withdrawal,
            amount: outcome.amount(),
            balance: outcome.balance(),
            outcome: result,
        }
    }
}

impl fmt::Display for TransactionRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.operation, self.outcome) {
            (OperationKind::Deposit, _) => write!(
                f,
                "Deposited: {} in {}. New Balance: {}",
                self.amount, self.kind, self.balance
            ),
            (OperationKind::Withdrawal, RecordOutcome::Completed) => write!(
                f,
                "Withdrawn: {} from {}. New Balance: {}",
                self.amount, self.kind, self.balance
            ),
            (OperationKind::Withdrawal, RecordOutcome::InsufficientFunds) => {
                write!(f, "Insufficient funds in {}!", self.kind)
            }
        }
    }
}

/// Transaction report destination
pub trait ReportSink {
    /// Record one operation
    fn record(&mut self, record: &TransactionRecord);
}

impl<S: ReportSink + ?Sized> ReportSink for &mut S {
    fn record(&mut self, record: &TransactionRecord) {
        (**self).record(record)
    }
}

/// Prints one line per record to standard output
#[derive(Debug, Default)]
pub struct StdoutSink;

impl StdoutSink {
    /// Create a new stdout sink
    pub fn new() -> Self {
        Self
    }
}

impl ReportSink for StdoutSink {
    fn record(&mut self, record: &TransactionRecord) {
        if let Err(e) = writeln!(io::stdout().lock(), "{}", record) {
            warn!(error = %e, "Failed to write transaction line");
        }
    }
}

/// Keeps records in the order they were reported
#[derive(Debug, Default, Clone)]
pub struct MemorySink {
    records: Vec<TransactionRecord>,
}

impl MemorySink {
    /// Create an empty sink
    pub fn new() -> Self {
        Self::default()
    }

    /// Records seen so far
    pub fn records(&self) -> &[TransactionRecord] {
        &self.records
    }

    /// Records rendered as report lines
    pub fn lines(&self) -> Vec<String> {
        self.records.iter().map(ToString::to_string).collect()
    }

    /// Consume the sink, returning its records
    pub fn into_records(self) -> Vec<TransactionRecord> {
        self.records
    }
}

impl ReportSink for MemorySink {
    fn record(&mut self, record: &TransactionRecord) {
        self.records.push(*record);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn amount(value: u64) -> Amount {
        Amount::new(value).unwrap()
    }

    #[test]
    fn test_deposit_line() {
        let record = TransactionRecord::from(DepositReceipt {
            kind: AccountKind::Savings,
            amount: amount(1000),
            balance: Balance::new(1000),
        });
        assert_eq!(
            record.to_string(),
            "Deposited: 1000 in Savings Account. New Balance: 1000"
        );
    }

    #[test]
    fn test_withdrawal_line() {
        let record = TransactionRecord::from(WithdrawalOutcome::Completed {
            kind: AccountKind::Current,
            amount: amount(500),
            balance: Balance::new(500),
        });
        assert_eq!(record.outcome, RecordOutcome::Completed);
        assert_eq!(
            record.to_string(),
            "Withdrawn: 500 from Current Account. New Balance: 500"
        );
    }

    #[test]
    fn test_insufficient_funds_line() {
        let record = TransactionRecord::from(WithdrawalOutcome::InsufficientFunds {
            kind: AccountKind::Savings,
            requested: amount(1500),
            balance: Balance::new(1000),
        });
        assert_eq!(record.outcome, RecordOutcome::InsufficientFunds);
        assert_eq!(record.amount, amount(1500));
        assert_eq!(record.balance, Balance::new(1000));
        assert_eq!(record.to_string(), "Insufficient funds in Savings Account!");
    }

    #[test]
    fn test_memory_sink_keeps_order() {
        let mut sink = MemorySink::new();
        for units in [3, 1, 2] {
            sink.record(&TransactionRecord::from(DepositReceipt {
                kind: AccountKind::FixedTerm,
                amount: amount(units),
                balance: Balance::new(units),
            }));
        }

        let amounts: Vec<u64> = sink.records().iter().map(|r| r.amount.get()).collect();
        assert_eq!(amounts, vec![3, 1, 2]);
        assert_eq!(sink.into_records().len(), 3);
    }

    #[test]
    fn test_sink_through_mutable_reference() {
        fn report_into<S: ReportSink>(mut sink: S, record: &TransactionRecord) {
            sink.record(record);
        }

        let record = TransactionRecord::from(DepositReceipt {
            kind: AccountKind::Current,
            amount: amount(1),
            balance: Balance::new(1),
        });
        let mut sink = MemorySink::new();
        report_into(&mut sink, &record);
        assert_eq!(sink.records(), &[record]);
    }
}
