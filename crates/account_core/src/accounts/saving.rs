//! Savings account: deposits and withdrawals.

use super::ledger::{apply_deposit, apply_withdrawal};
use crate::outcome::{DepositReceipt, WithdrawalOutcome};
use crate::traits::{Depositable, Withdrawable};
use crate::types::{AccountKind, Amount, Balance};

/// A savings account. Supports both deposit and withdrawal.
///
/// # Examples
/// ```
/// use account_core::prelude::*;
///
/// let mut savings = SavingAccount::new();
/// savings.deposit(Amount::new(1000).unwrap());
/// let outcome = savings.withdraw(Amount::new(500).unwrap());
///
/// assert!(outcome.is_completed());
/// assert_eq!(savings.balance(), Balance::new(500));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SavingAccount {
    balance: Balance,
}

impl SavingAccount {
    /// Open an empty savings account.
    pub fn new() -> Self {
        Self::default()
    }

    /// Open a savings account holding `balance`.
    pub fn with_balance(balance: Balance) -> Self {
        Self { balance }
    }
}

impl Depositable for SavingAccount {
    fn kind(&self) -> AccountKind {
        AccountKind::Savings
    }

    fn balance(&self) -> Balance {
        self.balance
    }

    fn deposit(&mut self, amount: Amount) -> DepositReceipt {
        apply_deposit(AccountKind::Savings, &mut self.balance, amount)
    }
}

impl Withdrawable for SavingAccount {
    fn withdraw(&mut self, amount: Amount) -> WithdrawalOutcome {
        apply_withdrawal(AccountKind::Savings, &mut self.balance, amount)
    }
}
