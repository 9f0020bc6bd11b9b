//! Customers domain module.
//!
//! Pure domain data only: no IO, no storage concerns.

pub mod customer;

pub use customer::Customer;
