//! # account_core: Capability-Segregated Account Foundation
//!
//! ## Layer 1 (Foundation) Role
//!
//! account_core is the bottom layer of the workspace, providing:
//! - Money types: `Amount`, `Balance` (`types::money`)
//! - Account and operation kinds: `AccountKind`, `OperationKind` (`types::kind`)
//! - Error types: `AmountError` (`types::error`)
//! - Capability traits: `Depositable`, `Withdrawable` (`traits`)
//! - Concrete accounts: `SavingAccount`, `CurrentAccount`, `FixedTermAccount` (`accounts`)
//! - Operation results: `DepositReceipt`, `WithdrawalOutcome` (`outcome`)
//!
//! ## Capability Tiers
//!
//! Every account can accept deposits. Only accounts that can honestly pay out
//! implement [`Withdrawable`]. A fixed-term account has no `withdraw` method,
//! so asking it for one is a compile error rather than a runtime rejection.
//!
//! ## Usage Examples
//!
//! ```rust
//! use account_core::prelude::*;
//!
//! let mut savings = SavingAccount::new();
//! let receipt = savings.deposit(Amount::new(1000).unwrap());
//! assert_eq!(receipt.balance, Balance::new(1000));
//!
//! let outcome = savings.withdraw(Amount::new(1500).unwrap());
//! assert!(outcome.is_insufficient_funds());
//! assert_eq!(savings.balance(), Balance::new(1000));
//! ```
//!
//! ## Feature Flags
//!
//! - `serde` (default): Enable deserialisation for roster kinds
//!   (`WithdrawableKind`, `DepositOnlyKind`) and `AccountKind`

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod accounts;
pub mod outcome;
pub mod traits;
pub mod types;

pub use traits::{Depositable, Withdrawable};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::accounts::{
        CurrentAccount, DepositOnlyAccount, DepositOnlyKind, FixedTermAccount, SavingAccount,
        WithdrawableAccount, WithdrawableKind,
    };
    pub use crate::outcome::{DepositReceipt, WithdrawalOutcome};
    pub use crate::traits::{Depositable, Withdrawable};
    pub use crate::types::{AccountKind, Amount, AmountError, Balance, OperationKind};
}
