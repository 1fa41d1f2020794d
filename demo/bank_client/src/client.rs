//! The BankClient dispatcher.
//!
//! A client holds two collections: accounts that can pay out and accounts
//! that only take deposits. Which collection an account lands in is decided
//! when the client is built, so processing never has to ask an account what
//! it supports.

use account_core::accounts::{
    DepositOnlyAccount, DepositOnlyKind, WithdrawableAccount, WithdrawableKind,
};
use account_core::types::{AccountKind, Amount, Balance};
use account_core::{Depositable, Withdrawable};
use tracing::{debug, info_span};

use crate::sink::{ReportSink, TransactionRecord};

/// Amounts used in one transaction pass
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransactionAmounts {
    /// Deposit into each withdraw-capable account
    pub deposit: Amount,
    /// Withdrawal attempted on each withdraw-capable account
    pub withdrawal: Amount,
    /// Deposit into each deposit-only account
    pub deposit_only: Amount,
}

const DEFAULT_DEPOSIT: Amount = Amount::const_new(1000);
const DEFAULT_WITHDRAWAL: Amount = Amount::const_new(500);
const DEFAULT_DEPOSIT_ONLY: Amount = Amount::const_new(5000);

impl Default for TransactionAmounts {
    fn default() -> Self {
        Self {
            deposit: DEFAULT_DEPOSIT,
            withdrawal: DEFAULT_WITHDRAWAL,
            deposit_only: DEFAULT_DEPOSIT_ONLY,
        }
    }
}

/// Counts from one transaction pass
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ProcessingSummary {
    /// Deposits applied
    pub deposits: usize,
    /// Withdrawals that went through
    pub withdrawals: usize,
    /// Withdrawals refused for insufficient funds
    pub rejected: usize,
}

/// An account's kind and balance at a point in time
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AccountSnapshot {
    /// Account kind
    pub kind: AccountKind,
    /// Balance when the snapshot was taken
    pub balance: Balance,
}

/// Drives accounts through one deposit and, where supported, one withdrawal.
///
/// # Examples
/// ```
/// use account_core::prelude::*;
/// use bank_client::client::BankClient;
/// use bank_client::sink::MemorySink;
///
/// let mut client = BankClient::new(
///     vec![SavingAccount::new()],
///     vec![FixedTermAccount::new()],
/// );
/// let mut sink = MemorySink::new();
/// client.process_transactions(&mut sink);
///
/// assert_eq!(
///     sink.lines(),
///     vec![
///         "Deposited: 1000 in Savings Account. New Balance: 1000",
///         "Withdrawn: 500 from Savings Account. New Balance: 500",
///         "Deposited: 5000 in Fixed Term Account. New Balance: 5000",
///     ]
/// );
/// ```
#[derive(Debug, Clone)]
pub struct BankClient<W = WithdrawableAccount, D = DepositOnlyAccount> {
    withdrawable: Vec<W>,
    deposit_only: Vec<D>,
    amounts: TransactionAmounts,
}

impl<W: Withdrawable, D: Depositable> BankClient<W, D> {
    /// Create a client over already-separated collections.
    pub fn new(withdrawable: Vec<W>, deposit_only: Vec<D>) -> Self {
        Self {
            withdrawable,
            deposit_only,
            amounts: TransactionAmounts::default(),
        }
    }

    /// Replace the demonstration amounts.
    pub fn with_amounts(mut self, amounts: TransactionAmounts) -> Self {
        self.amounts = amounts;
        self
    }

    /// Amounts used by [`process_transactions`](Self::process_transactions).
    pub fn amounts(&self) -> TransactionAmounts {
        self.amounts
    }

    /// Accounts that support withdrawal, in processing order.
    pub fn withdrawable_accounts(&self) -> &[W] {
        &self.withdrawable
    }

    /// Accounts that support deposit only, in processing order.
    pub fn deposit_only_accounts(&self) -> &[D] {
        &self.deposit_only
    }

    /// Kind and balance of every account, withdraw-capable first.
    pub fn balances(&self) -> Vec<AccountSnapshot> {
        let withdrawable = self.withdrawable.iter().map(snapshot);
        let deposit_only = self.deposit_only.iter().map(snapshot);
        withdrawable.chain(deposit_only).collect()
    }

    /// Run one pass over every account.
    ///
    /// Withdraw-capable accounts get a deposit followed by one withdrawal
    /// attempt; deposit-only accounts get a deposit. Each operation is
    /// reported to `sink` as it happens. Insufficient funds is reported and
    /// processing moves on to the next account.
    pub fn process_transactions<S: ReportSink + ?Sized>(
        &mut self,
        sink: &mut S,
    ) -> ProcessingSummary {
        let span = info_span!("process_transactions");
        let _guard = span.enter();

        let amounts = self.amounts;
        let mut summary = ProcessingSummary::default();

        for account in &mut self.withdrawable {
            let receipt = account.deposit(amounts.deposit);
            debug!(kind = %receipt.kind, balance = receipt.balance.get(), "Deposit");
            sink.record(&TransactionRecord::from(receipt));
            summary.deposits += 1;

            let outcome = account.withdraw(amounts.withdrawal);
            if outcome.is_completed() {
                summary.withdrawals += 1;
                debug!(kind = %outcome.kind(), balance = outcome.balance().get(), "Withdrawal");
            } else {
                summary.rejected += 1;
                debug!(
                    kind = %outcome.kind(),
                    requested = outcome.amount().get(),
                    balance = outcome.balance().get(),
                    "Withdrawal refused: insufficient funds"
                );
            }
            sink.record(&TransactionRecord::from(outcome));
        }

        for account in &mut self.deposit_only {
            let receipt = account.deposit(amounts.deposit_only);
            debug!(kind = %receipt.kind, balance = receipt.balance.get(), "Deposit");
            sink.record(&TransactionRecord::from(receipt));
            summary.deposits += 1;
        }

        summary
    }
}

impl BankClient {
    /// Open fresh accounts for the given kinds.
    pub fn from_kinds(
        withdrawable: &[WithdrawableKind],
        deposit_only: &[DepositOnlyKind],
    ) -> Self {
        Self::new(
            withdrawable.iter().map(|kind| kind.open()).collect(),
            deposit_only.iter().map(|kind| kind.open()).collect(),
        )
    }
}

fn snapshot<A: Depositable>(account: &A) -> AccountSnapshot {
    AccountSnapshot {
        kind: account.kind(),
        balance: account.balance(),
    }
}
