use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use tillbook_core::{AccountNumber, CustomerId, Entity, LedgerError, LedgerResult};
use tillbook_customers::Customer;

/// A single customer account.
///
/// Holds a whole-unit balance and an open/closed flag. Created with balance
/// 0 and open; never destroyed (closing only flips the flag). Balance
/// mutation goes through [`crate::Bank`], which owns every account and
/// delivers the notifications.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    number: AccountNumber,
    customer_id: CustomerId,
    /// Denormalized for notifications and name-based recipient lookup.
    customer_name: String,
    balance: i64,
    is_open: bool,
    opened_at: DateTime<Utc>,
}

impl Account {
    pub(crate) fn new(number: AccountNumber, customer: &Customer) -> Self {
        Self {
            number,
            customer_id: customer.id_typed(),
            customer_name: customer.name().to_string(),
            balance: 0,
            is_open: true,
            opened_at: Utc::now(),
        }
    }

    pub fn number(&self) -> &AccountNumber {
        &self.number
    }

    pub fn customer_id(&self) -> CustomerId {
        self.customer_id
    }

    pub fn customer_name(&self) -> &str {
        &self.customer_name
    }

    /// Current balance, in whole currency units.
    pub fn balance(&self) -> i64 {
        self.balance
    }

    pub fn is_open(&self) -> bool {
        self.is_open
    }

    pub fn opened_at(&self) -> DateTime<Utc> {
        self.opened_at
    }

    pub(crate) fn set_open(&mut self, open: bool) {
        self.is_open = open;
    }

    /// Closed accounts forbid every mutating operation until reopened.
    pub(crate) fn ensure_open(&self) -> LedgerResult<()> {
        if self.is_open {
            Ok(())
        } else {
            Err(LedgerError::ClosedAccount)
        }
    }

    /// Shared amount check for withdrawals and transfers.
    ///
    /// The closed check takes precedence over amount validation; an invalid
    /// amount on a closed account reports `ClosedAccount`.
    pub(crate) fn check_debit(&self, amount: i64) -> LedgerResult<()> {
        self.ensure_open()?;
        if amount <= 0 {
            return Err(LedgerError::invalid_amount(format!(
                "amount must be positive (got {amount})"
            )));
        }
        if amount > self.balance {
            return Err(LedgerError::invalid_amount(format!(
                "amount {amount} exceeds balance {}",
                self.balance
            )));
        }
        Ok(())
    }

    /// Apply a deposit.
    ///
    /// Returns `Ok(true)` when the balance changed. A non-positive amount is
    /// a silent no-op (`Ok(false)`): no error, no balance change, no
    /// notification. The closed check still applies first.
    pub(crate) fn deposit(&mut self, amount: i64) -> LedgerResult<bool> {
        self.ensure_open()?;
        if amount <= 0 {
            return Ok(false);
        }
        self.balance += amount;
        Ok(true)
    }

    /// Apply a withdrawal after [`Self::check_debit`] semantics.
    pub(crate) fn withdraw(&mut self, amount: i64) -> LedgerResult<()> {
        self.check_debit(amount)?;
        self.balance -= amount;
        Ok(())
    }

    pub(crate) fn credit(&mut self, amount: i64) {
        self.balance += amount;
    }

    pub(crate) fn debit(&mut self, amount: i64) {
        self.balance -= amount;
    }
}

impl Entity for Account {
    type Id = AccountNumber;

    fn id(&self) -> &Self::Id {
        &self.number
    }
}
