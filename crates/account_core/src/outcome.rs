//! Results of account operations.
//!
//! A deposit always succeeds and yields a [`DepositReceipt`]. A withdrawal
//! yields a [`WithdrawalOutcome`], which is either completed or refused for
//! insufficient funds. Both cases are ordinary values: an overdraw attempt is
//! an expected business condition, not an error.

use crate::types::{AccountKind, Amount, Balance};

/// Confirmation of a deposit.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct DepositReceipt {
    /// Account that received the deposit
    pub kind: AccountKind,
    /// Amount deposited
    pub amount: Amount,
    /// Balance after the deposit
    pub balance: Balance,
}

/// Result of a withdrawal attempt.
///
/// # Examples
/// ```
/// use account_core::prelude::*;
///
/// let mut current = CurrentAccount::with_balance(Balance::new(1000));
///
/// match current.withdraw(Amount::new(500).unwrap()) {
///     WithdrawalOutcome::Completed { balance, .. } => assert_eq!(balance.get(), 500),
///     WithdrawalOutcome::InsufficientFunds { .. } => unreachable!(),
/// }
/// ```
#[must_use = "a withdrawal may be refused for insufficient funds"]
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum WithdrawalOutcome {
    /// Funds sufficed; the balance was reduced.
    Completed {
        /// Account that paid out
        kind: AccountKind,
        /// Amount withdrawn
        amount: Amount,
        /// Balance after the withdrawal
        balance: Balance,
    },

    /// Funds were insufficient; the balance is unchanged.
    InsufficientFunds {
        /// Account that refused
        kind: AccountKind,
        /// Amount that was asked for
        requested: Amount,
        /// Balance at the time of the request (unchanged)
        balance: Balance,
    },
}

impl WithdrawalOutcome {
    /// Returns `true` if the withdrawal went through.
    pub fn is_completed(&self) -> bool {
        matches!(self, WithdrawalOutcome::Completed { .. })
    }

    /// Returns `true` if the withdrawal was refused for lack of funds.
    pub fn is_insufficient_funds(&self) -> bool {
        matches!(self, WithdrawalOutcome::InsufficientFunds { .. })
    }

    /// Account the withdrawal was attempted on.
    pub fn kind(&self) -> AccountKind {
        match self {
            WithdrawalOutcome::Completed { kind, .. }
            | WithdrawalOutcome::InsufficientFunds { kind, .. } => *kind,
        }
    }

    /// Amount that was requested, whether or not it was paid.
    pub fn amount(&self) -> Amount {
        match self {
            WithdrawalOutcome::Completed { amount, .. } => *amount,
            WithdrawalOutcome::InsufficientFunds { requested, .. } => *requested,
        }
    }

    /// Balance after the attempt.
    pub fn balance(&self) -> Balance {
        match self {
            WithdrawalOutcome::Completed { balance, .. }
            | WithdrawalOutcome::InsufficientFunds { balance, .. } => *balance,
        }
    }
}
