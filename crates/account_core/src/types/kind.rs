//! Labels for account variants and the operations run against them.
//!
//! # Examples
//!
//! ```
//! use account_core::types::kind::{AccountKind, OperationKind};
//!
//! assert_eq!(AccountKind::FixedTerm.name(), "Fixed Term Account");
//! assert_eq!(OperationKind::Withdrawal.name(), "Withdrawal");
//! ```

use std::fmt;

/// The concrete account variants known to this crate.
///
/// The kind is a label for reporting only. It is never inspected to decide
/// which operations an account supports; that is the job of the
/// [`Depositable`](crate::traits::Depositable) and
/// [`Withdrawable`](crate::traits::Withdrawable) traits.
#[non_exhaustive]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum AccountKind {
    /// Savings account (deposit + withdraw)
    Savings,

    /// Current account (deposit + withdraw)
    Current,

    /// Fixed term account (deposit only)
    FixedTerm,
}

impl AccountKind {
    /// Human-readable name used in transaction reports.
    ///
    /// # Examples
    ///
    /// ```
    /// use account_core::types::kind::AccountKind;
    ///
    /// assert_eq!(AccountKind::Savings.name(), "Savings Account");
    /// assert_eq!(AccountKind::Current.name(), "Current Account");
    /// ```
    pub fn name(&self) -> &'static str {
        match self {
            AccountKind::Savings => "Savings Account",
            AccountKind::Current => "Current Account",
            AccountKind::FixedTerm => "Fixed Term Account",
        }
    }
}

impl fmt::Display for AccountKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Operation applied to an account.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum OperationKind {
    /// Money paid in
    Deposit,
    /// Money paid out
    Withdrawal,
}

impl OperationKind {
    /// Get the operation name for display
    pub fn name(&self) -> &'static str {
        match self {
            OperationKind::Deposit => "Deposit",
            OperationKind::Withdrawal => "Withdrawal",
        }
    }
}

impl fmt::Display for OperationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
