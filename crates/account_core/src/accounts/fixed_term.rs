//! Fixed term account: deposits only.

use super::ledger::apply_deposit;
use crate::outcome::DepositReceipt;
use crate::traits::Depositable;
use crate::types::{AccountKind, Amount, Balance};

/// A fixed term account. Accepts deposits; money stays locked in.
///
/// The type implements [`Depositable`] and nothing more. There is no
/// `withdraw` to call, so no caller can reach one:
///
/// ```compile_fail
/// use account_core::prelude::*;
///
/// let mut fixed = FixedTermAccount::new();
/// fixed.deposit(Amount::new(5000).unwrap());
/// let _ = fixed.withdraw(Amount::new(500).unwrap());
/// ```
///
/// Nor can it be handed to code that expects a withdraw-capable account:
///
/// ```compile_fail
/// use account_core::prelude::*;
///
/// fn pay_out<A: Withdrawable>(account: &mut A) {
///     let _ = account.withdraw(Amount::new(1).unwrap());
/// }
///
/// pay_out(&mut FixedTermAccount::new());
/// ```
///
/// # Examples
/// ```
/// use account_core::prelude::*;
///
/// let mut fixed = FixedTermAccount::new();
/// let receipt = fixed.deposit(Amount::new(5000).unwrap());
/// assert_eq!(receipt.balance, Balance::new(5000));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FixedTermAccount {
    balance: Balance,
}

impl FixedTermAccount {
    /// Open an empty fixed term account.
    pub fn new() -> Self {
        Self::default()
    }

    /// Open a fixed term account holding `balance`.
    pub fn with_balance(balance: Balance) -> Self {
        Self { balance }
    }
}

impl Depositable for FixedTermAccount {
    fn kind(&self) -> AccountKind {
        AccountKind::FixedTerm
    }

    fn balance(&self) -> Balance {
        self.balance
    }

    fn deposit(&mut self, amount: Amount) -> DepositReceipt {
        apply_deposit(AccountKind::FixedTerm, &mut self.balance, amount)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deposit_only_accumulates() {
        let mut account = FixedTermAccount::new();
        account.deposit(Amount::new(5000).unwrap());
        account.deposit(Amount::new(2500).unwrap());
        assert_eq!(account.balance(), Balance::new(7500));
        assert_eq!(account.kind(), AccountKind::FixedTerm);
    }
}
