//! Account numbers and their sequential generator.

use serde::{Deserialize, Serialize};

/// Default account-number prefix.
pub const DEFAULT_PREFIX: &str = "ACC";

/// Width of the zero-padded sequence field.
const SEQUENCE_WIDTH: usize = 7;

/// Unique account number, format `<prefix><7-digit zero-padded sequence>`,
/// e.g. `ACC0000001`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AccountNumber(String);

impl AccountNumber {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether this number carries the given prefix.
    pub fn has_prefix(&self, prefix: &str) -> bool {
        self.0.starts_with(prefix)
    }
}

impl core::fmt::Display for AccountNumber {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for AccountNumber {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for AccountNumber {
    fn from(value: String) -> Self {
        Self(value)
    }
}

/// Sequential account-number source.
///
/// The sequence starts at 1, increments by exactly 1 per call, and is never
/// reused or reset. No upper bound is enforced; overflow of the 7-digit
/// field is out of scope. Single-threaded use only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountNumberGenerator {
    prefix: String,
    sequence: u64,
}

impl AccountNumberGenerator {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            sequence: 1,
        }
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Produce the next account number and advance the sequence.
    pub fn next(&mut self) -> AccountNumber {
        let number = AccountNumber(format!(
            "{}{:0width$}",
            self.prefix,
            self.sequence,
            width = SEQUENCE_WIDTH
        ));
        self.sequence += 1;
        number
    }
}

impl Default for AccountNumberGenerator {
    fn default() -> Self {
        Self::new(DEFAULT_PREFIX)
    }
}
