//! Money types for account arithmetic.
//!
//! Amounts and balances are whole currency units. Keeping them as separate
//! types means an operation can only ever be asked to move a positive sum,
//! while a balance is free to sit at zero.
//!
//! # Examples
//!
//! ```
//! use account_core::types::money::{Amount, Balance};
//!
//! let balance = Balance::ZERO.credit(Amount::new(1000).unwrap());
//! assert_eq!(balance.get(), 1000);
//!
//! let after = balance.debit(Amount::new(500).unwrap()).unwrap();
//! assert_eq!(after.get(), 500);
//!
//! // Overdrawing is refused, the original balance is untouched
//! assert!(balance.debit(Amount::new(1500).unwrap()).is_none());
//! ```

use std::fmt;
use std::num::NonZeroU64;

use super::error::AmountError;

/// A strictly positive number of currency units.
///
/// Every deposit and withdrawal takes an `Amount`, so the "positive amount"
/// precondition is checked once at construction and never again.
///
/// # Examples
/// ```
/// use account_core::types::money::Amount;
///
/// assert_eq!(Amount::new(500).unwrap().get(), 500);
/// assert!(Amount::new(0).is_err());
/// ```
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Amount(NonZeroU64);

impl Amount {
    /// Create an amount, rejecting zero.
    ///
    /// # Errors
    /// Returns [`AmountError::Zero`] when `value` is `0`.
    pub fn new(value: u64) -> Result<Self, AmountError> {
        NonZeroU64::new(value).map(Self).ok_or(AmountError::Zero)
    }

    /// Create an amount in a const context.
    ///
    /// # Panics
    /// Panics if `value` is `0`; in a `const` item that is a compile error.
    ///
    /// ```
    /// use account_core::types::money::Amount;
    ///
    /// const FEE: Amount = Amount::const_new(25);
    /// assert_eq!(FEE.get(), 25);
    /// ```
    pub const fn const_new(value: u64) -> Self {
        match NonZeroU64::new(value) {
            Some(value) => Self(value),
            None => panic!("Amount must be greater than zero"),
        }
    }

    /// Returns the amount in whole currency units.
    pub fn get(self) -> u64 {
        self.0.get()
    }
}

impl TryFrom<u64> for Amount {
    type Error = AmountError;

    fn try_from(value: u64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A non-negative account balance in whole currency units.
///
/// There is no operation that produces a negative balance: [`Balance::debit`]
/// refuses instead of going below zero.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Balance(u64);

impl Balance {
    /// The opening balance of every account.
    pub const ZERO: Balance = Balance(0);

    /// Create a balance holding `value` units.
    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    /// Returns the balance in whole currency units.
    pub fn get(self) -> u64 {
        self.0
    }

    /// Balance after crediting `amount`.
    ///
    /// Saturates at `u64::MAX`; a single account never reaches that in
    /// whole currency units.
    pub fn credit(self, amount: Amount) -> Self {
        Self(self.0.saturating_add(amount.get()))
    }

    /// Balance after debiting `amount`, or `None` if funds are insufficient.
    pub fn debit(self, amount: Amount) -> Option<Self> {
        self.0.checked_sub(amount.get()).map(Self)
    }
}

impl From<Amount> for Balance {
    fn from(amount: Amount) -> Self {
        Self(amount.get())
    }
}

impl fmt::Display for Balance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn amount(value: u64) -> Amount {
        Amount::new(value).unwrap()
    }

    #[test]
    fn test_amount_rejects_zero() {
        assert_eq!(Amount::new(0), Err(AmountError::Zero));
        assert_eq!(Amount::try_from(0u64), Err(AmountError::Zero));
    }

    #[test]
    fn test_amount_accepts_positive() {
        assert_eq!(amount(1).get(), 1);
        assert_eq!(Amount::try_from(u64::MAX).unwrap().get(), u64::MAX);
    }

    #[test]
    fn test_amount_display() {
        assert_eq!(amount(1000).to_string(), "1000");
    }

    #[test]
    fn test_balance_default_is_zero() {
        assert_eq!(Balance::default(), Balance::ZERO);
        assert_eq!(Balance::ZERO.get(), 0);
    }

    #[test]
    fn test_credit_adds() {
        assert_eq!(Balance::new(250).credit(amount(750)), Balance::new(1000));
    }

    #[test]
    fn test_credit_saturates() {
        let full = Balance::new(u64::MAX - 1);
        assert_eq!(full.credit(amount(10)), Balance::new(u64::MAX));
    }

    #[test]
    fn test_debit_exact_balance_reaches_zero() {
        assert_eq!(Balance::new(500).debit(amount(500)), Some(Balance::ZERO));
    }

    #[test]
    fn test_debit_over_balance_refused() {
        assert_eq!(Balance::new(1000).debit(amount(1500)), None);
        assert_eq!(Balance::new(1000).debit(amount(1000)), Some(Balance::ZERO));
    }

    #[test]
    fn test_balance_from_amount() {
        assert_eq!(Balance::from(amount(42)), Balance::new(42));
    }
}
