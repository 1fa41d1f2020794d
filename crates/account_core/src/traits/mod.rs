//! Capability traits for accounts.
//!
//! This module defines exactly two capability tiers:
//! - Accepting money (`Depositable` trait)
//! - Paying money out (`Withdrawable` trait, which extends `Depositable`)
//!
//! A type implements only the tiers it can honour. Code that holds a
//! `Depositable` has no way to ask for a withdrawal, so no caller ever needs
//! to inspect the concrete type before deciding what to call.

pub mod deposit;
pub mod withdraw;

pub use deposit::Depositable;
pub use withdraw::Withdrawable;
