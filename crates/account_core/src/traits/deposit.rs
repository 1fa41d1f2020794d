//! The deposit capability shared by every account.

use crate::outcome::DepositReceipt;
use crate::types::{AccountKind, Amount, Balance};

/// Trait for accounts that accept deposits.
///
/// This is the capability root: every account implements it.
///
/// # Invariants
/// - `deposit` always succeeds and increases the balance by `amount`
/// - `balance` is only changed by operations on the same instance
///
/// # Examples
/// ```
/// use account_core::prelude::*;
///
/// fn top_up<A: Depositable>(account: &mut A, units: u64) -> Balance {
///     account.deposit(Amount::new(units).unwrap()).balance
/// }
///
/// let mut fixed = FixedTermAccount::new();
/// assert_eq!(top_up(&mut fixed, 5000), Balance::new(5000));
/// ```
pub trait Depositable {
    /// The kind of account, for reporting.
    fn kind(&self) -> AccountKind;

    /// Current balance.
    fn balance(&self) -> Balance;

    /// Pay `amount` into the account.
    fn deposit(&mut self, amount: Amount) -> DepositReceipt;
}

impl<T: Depositable + ?Sized> Depositable for Box<T> {
    fn kind(&self) -> AccountKind {
        (**self).kind()
    }

    fn balance(&self) -> Balance {
        (**self).balance()
    }

    fn deposit(&mut self, amount: Amount) -> DepositReceipt {
        (**self).deposit(amount)
    }
}
