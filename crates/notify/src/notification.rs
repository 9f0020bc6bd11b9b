use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use tillbook_core::AccountNumber;

/// Kind of mutating account operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operation {
    Deposit,
    Withdraw,
    Transfer,
}

impl Operation {
    /// Past-tense verb used in the rendered message.
    fn past_tense(self) -> &'static str {
        match self {
            Operation::Deposit => "deposited",
            Operation::Withdraw => "withdrawn",
            Operation::Transfer => "transferred",
        }
    }
}

/// Summary of one successful mutating operation (immutable fact).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    pub operation: Operation,
    pub account_number: AccountNumber,
    /// Name of the customer owning the mutated account.
    pub customer_name: String,
    /// Amount moved, in whole currency units.
    pub amount: i64,
    /// Balance of the customer's account after the operation.
    pub balance: i64,
    /// Counterparty name (transfers only).
    pub counterparty: Option<String>,
    pub occurred_at: DateTime<Utc>,
}

impl Notification {
    /// Render the console message for this notification.
    pub fn message(&self) -> String {
        match &self.counterparty {
            None => format!(
                "{}, you've successfully {} {}$. Now your balance is {}$.",
                self.customer_name,
                self.operation.past_tense(),
                self.amount,
                self.balance
            ),
            Some(recipient) => format!(
                "{}, you've successfully {} {}$ to {}. Now your balance is {}$.",
                self.customer_name,
                self.operation.past_tense(),
                self.amount,
                recipient,
                self.balance
            ),
        }
    }
}
