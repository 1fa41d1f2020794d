//! The withdraw capability, available only on accounts that can pay out.

use super::deposit::Depositable;
use crate::outcome::WithdrawalOutcome;
use crate::types::Amount;

/// Trait for accounts that can pay money out.
///
/// Every `Withdrawable` is also [`Depositable`], so a withdraw-capable account
/// can stand in anywhere a deposit-only one is expected.
///
/// # Invariants
/// - If `amount <= balance`, the balance decreases by `amount` and the
///   outcome is [`WithdrawalOutcome::Completed`]
/// - If `amount > balance`, the balance is unchanged and the outcome is
///   [`WithdrawalOutcome::InsufficientFunds`]
/// - Implementations never panic on insufficient funds
///
/// # Examples
/// ```
/// use account_core::prelude::*;
///
/// fn drain<A: Withdrawable>(account: &mut A) -> WithdrawalOutcome {
///     let everything = Amount::new(account.balance().get()).unwrap();
///     account.withdraw(everything)
/// }
///
/// let mut savings = SavingAccount::with_balance(Balance::new(300));
/// assert!(drain(&mut savings).is_completed());
/// assert_eq!(savings.balance(), Balance::ZERO);
/// ```
pub trait Withdrawable: Depositable {
    /// Attempt to take `amount` out of the account.
    fn withdraw(&mut self, amount: Amount) -> WithdrawalOutcome;
}

impl<T: Withdrawable + ?Sized> Withdrawable for Box<T> {
    fn withdraw(&mut self, amount: Amount) -> WithdrawalOutcome {
        (**self).withdraw(amount)
    }
}
