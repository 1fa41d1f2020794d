//! Core money, kind, and error types.
//!
//! This module provides:
//! - `money`: `Amount` (strictly positive) and `Balance` (non-negative) units
//! - `kind`: `AccountKind` and `OperationKind` labels used in reports
//! - `error`: Structured error types for amount validation
//!
//! # Re-exports
//!
//! For convenience, commonly used types are re-exported at this module level:
//! - [`Amount`], [`Balance`] from `money`
//! - [`AccountKind`], [`OperationKind`] from `kind`
//! - [`AmountError`] from `error`

pub mod error;
pub mod kind;
pub mod money;

pub use error::AmountError;
pub use kind::{AccountKind, OperationKind};
pub use money::{Amount, Balance};
