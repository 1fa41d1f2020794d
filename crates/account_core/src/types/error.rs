//! Error types for structured error handling.
//!
//! Insufficient funds is deliberately absent here: it is a business outcome
//! reported through [`WithdrawalOutcome`](crate::outcome::WithdrawalOutcome),
//! not an error.

use thiserror::Error;

/// Amount validation errors.
///
/// # Examples
/// ```
/// use account_core::types::{Amount, AmountError};
///
/// let err = Amount::new(0).unwrap_err();
/// assert_eq!(err, AmountError::Zero);
/// assert_eq!(format!("{}", err), "Amount must be greater than zero");
/// ```
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum AmountError {
    /// A zero amount was supplied where a positive one is required.
    #[error("Amount must be greater than zero")]
    Zero,
}
