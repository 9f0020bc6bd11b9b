//! Ledger module (accounts + bank bookkeeping).
//!
//! Pure domain logic plus the notification side effect: no IO beyond the
//! pluggable sink, no persistence concerns, single logical thread of
//! control.

pub mod account;
pub mod bank;

pub use account::Account;
pub use bank::Bank;
