//! `tillbook-core` — domain foundation building blocks.
//!
//! This crate contains **pure domain** primitives (no infrastructure concerns).

pub mod entity;
pub mod error;
pub mod id;
pub mod number;

pub use entity::Entity;
pub use error::{LedgerError, LedgerResult};
pub use id::CustomerId;
pub use number::{AccountNumber, AccountNumberGenerator, DEFAULT_PREFIX};
