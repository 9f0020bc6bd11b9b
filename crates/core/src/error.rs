//! Domain error model.

use thiserror::Error;

use crate::number::AccountNumber;

/// Result type used across the domain layer.
pub type LedgerResult<T> = Result<T, LedgerError>;

/// Domain-level error.
///
/// Keep this focused on deterministic business failures. Lookups that can
/// legitimately miss (by customer, by number) return `Option` instead of an
/// error variant.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LedgerError {
    /// A mutating operation was attempted on a closed account.
    #[error("account is closed; operations are not permitted on a closed account")]
    ClosedAccount,

    /// A withdraw/transfer amount was non-positive or exceeded the balance.
    #[error("invalid amount: {0}")]
    InvalidAmount(String),

    /// An account-number key was not present in the bank.
    #[error("unknown account: {0}")]
    UnknownAccount(AccountNumber),
}

impl LedgerError {
    pub fn invalid_amount(msg: impl Into<String>) -> Self {
        Self::InvalidAmount(msg.into())
    }
}
