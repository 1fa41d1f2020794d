//! Concrete account variants and the closed sets used to route them.
//!
//! This module provides:
//! - `SavingAccount`, `CurrentAccount`: withdraw-capable accounts
//! - `FixedTermAccount`: a deposit-only account
//! - `WithdrawableAccount`, `DepositOnlyAccount`: enum dispatch over each tier
//! - `WithdrawableKind`, `DepositOnlyKind`: configuration labels that open
//!   an account directly into the right tier
//!
//! The two enums partition the variants by capability. A fixed term account
//! has no `WithdrawableAccount` variant, so it cannot be placed in a
//! withdraw-capable collection:
//!
//! ```compile_fail
//! use account_core::prelude::*;
//!
//! let _ = WithdrawableAccount::from(FixedTermAccount::new());
//! ```
//!
//! and the deposit-only enum never grows a `withdraw` method:
//!
//! ```compile_fail
//! use account_core::prelude::*;
//!
//! let mut account = DepositOnlyAccount::from(FixedTermAccount::new());
//! let _ = account.withdraw(Amount::new(1).unwrap());
//! ```

mod current;
mod fixed_term;
mod ledger;
mod saving;

pub use current::CurrentAccount;
pub use fixed_term::FixedTermAccount;
pub use saving::SavingAccount;

use crate::outcome::{DepositReceipt, WithdrawalOutcome};
use crate::traits::{Depositable, Withdrawable};
use crate::types::{AccountKind, Amount, Balance};

/// Any account that supports both deposit and withdrawal.
///
/// # Examples
/// ```
/// use account_core::prelude::*;
///
/// let mut accounts: Vec<WithdrawableAccount> =
///     vec![SavingAccount::new().into(), CurrentAccount::new().into()];
///
/// for account in &mut accounts {
///     account.deposit(Amount::new(1000).unwrap());
///     assert!(account.withdraw(Amount::new(500).unwrap()).is_completed());
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WithdrawableAccount {
    /// Savings account
    Saving(SavingAccount),
    /// Current account
    Current(CurrentAccount),
}

impl Depositable for WithdrawableAccount {
    fn kind(&self) -> AccountKind {
        match self {
            WithdrawableAccount::Saving(account) => account.kind(),
            WithdrawableAccount::Current(account) => account.kind(),
        }
    }

    fn balance(&self) -> Balance {
        match self {
            WithdrawableAccount::Saving(account) => account.balance(),
            WithdrawableAccount::Current(account) => account.balance(),
        }
    }

    fn deposit(&mut self, amount: Amount) -> DepositReceipt {
        match self {
            WithdrawableAccount::Saving(account) => account.deposit(amount),
            WithdrawableAccount::Current(account) => account.deposit(amount),
        }
    }
}

impl Withdrawable for WithdrawableAccount {
    fn withdraw(&mut self, amount: Amount) -> WithdrawalOutcome {
        match self {
            WithdrawableAccount::Saving(account) => account.withdraw(amount),
            WithdrawableAccount::Current(account) => account.withdraw(amount),
        }
    }
}

impl From<SavingAccount> for WithdrawableAccount {
    fn from(account: SavingAccount) -> Self {
        WithdrawableAccount::Saving(account)
    }
}

impl From<CurrentAccount> for WithdrawableAccount {
    fn from(account: CurrentAccount) -> Self {
        WithdrawableAccount::Current(account)
    }
}

/// Any account that supports deposit only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DepositOnlyAccount {
    /// Fixed term account
    FixedTerm(FixedTermAccount),
}

impl Depositable for DepositOnlyAccount {
    fn kind(&self) -> AccountKind {
        match self {
            DepositOnlyAccount::FixedTerm(account) => account.kind(),
        }
    }

    fn balance(&self) -> Balance {
        match self {
            DepositOnlyAccount::FixedTerm(account) => account.balance(),
        }
    }

    fn deposit(&mut self, amount: Amount) -> DepositReceipt {
        match self {
            DepositOnlyAccount::FixedTerm(account) => account.deposit(amount),
        }
    }
}

impl From<FixedTermAccount> for DepositOnlyAccount {
    fn from(account: FixedTermAccount) -> Self {
        DepositOnlyAccount::FixedTerm(account)
    }
}

/// Label for a withdraw-capable account to open.
///
/// With the `serde` feature, deserialises from `"savings"` or `"current"`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum WithdrawableKind {
    /// Open a [`SavingAccount`]
    Savings,
    /// Open a [`CurrentAccount`]
    Current,
}

impl WithdrawableKind {
    /// Open an empty account of this kind.
    pub fn open(self) -> WithdrawableAccount {
        match self {
            WithdrawableKind::Savings => SavingAccount::new().into(),
            WithdrawableKind::Current => CurrentAccount::new().into(),
        }
    }

    /// The account kind this label opens.
    pub fn account_kind(self) -> AccountKind {
        match self {
            WithdrawableKind::Savings => AccountKind::Savings,
            WithdrawableKind::Current => AccountKind::Current,
        }
    }
}

/// Label for a deposit-only account to open.
///
/// With the `serde` feature, deserialises from `"fixed_term"`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum DepositOnlyKind {
    /// Open a [`FixedTermAccount`]
    FixedTerm,
}

impl DepositOnlyKind {
    /// Open an empty account of this kind.
    pub fn open(self) -> DepositOnlyAccount {
        match self {
            DepositOnlyKind::FixedTerm => FixedTermAccount::new().into(),
        }
    }

    /// The account kind this label opens.
    pub fn account_kind(self) -> AccountKind {
        match self {
            DepositOnlyKind::FixedTerm => AccountKind::FixedTerm,
        }
    }
}
