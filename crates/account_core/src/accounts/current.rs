//! Current account: deposits and withdrawals.

use super::ledger::{apply_deposit, apply_withdrawal};
use crate::outcome::{DepositReceipt, WithdrawalOutcome};
use crate::traits::{Depositable, Withdrawable};
use crate::types::{AccountKind, Amount, Balance};

/// A current account. Supports both deposit and withdrawal.
///
/// # Examples
/// ```
/// use account_core::prelude::*;
///
/// let mut current = CurrentAccount::new();
/// current.deposit(Amount::new(1000).unwrap());
/// let outcome = current.withdraw(Amount::new(500).unwrap());
///
/// assert!(outcome.is_completed());
/// assert_eq!(current.balance(), Balance::new(500));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CurrentAccount {
    balance: Balance,
}

impl CurrentAccount {
    /// Open an empty current account.
    pub fn new() -> Self {
        Self::default()
    }

    /// Open a current account holding `balance`.
    pub fn with_balance(balance: Balance) -> Self {
        Self { balance }
    }
}

impl Depositable for CurrentAccount {
    fn kind(&self) -> AccountKind {
        AccountKind::Current
    }

    fn balance(&self) -> Balance {
        self.balance
    }

    fn deposit(&mut self, amount: Amount) -> DepositReceipt {
        apply_deposit(AccountKind::Current, &mut self.balance, amount)
    }
}

impl Withdrawable for CurrentAccount {
    fn withdraw(&mut self, amount: Amount) -> WithdrawalOutcome {
        apply_withdrawal(AccountKind::Current, &mut self.balance, amount)
    }
}
