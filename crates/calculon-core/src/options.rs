//! Calculator configuration.

use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_DELIMITER;

/// Options fixed at startup and handed to the calculator by value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalculatorOptions {
    /// Delimiter used to split input into numbers.
    pub alternate_delimiter: String,
    /// Whether negative operands are accepted.
    pub allow_negative_numbers: bool,
}

impl Default for CalculatorOptions {
    fn default() -> Self {
        Self {
            alternate_delimiter: DEFAULT_DELIMITER.to_string(),
            allow_negative_numbers: true,
        }
    }
}

impl CalculatorOptions {
    /// Normalize options, restoring the default delimiter when it is empty.
    #[must_use]
    pub fn normalize(mut self) -> Self {
        if self.alternate_delimiter.is_empty() {
            self.alternate_delimiter = DEFAULT_DELIMITER.to_string();
        }
        self
    }

    /// Builder-style setter for the delimiter.
    #[must_use]
    pub fn with_delimiter(mut self, delimiter: impl Into<String>) -> Self {
        self.alternate_delimiter = delimiter.into();
        self
    }

    /// Builder-style setter for the negative number policy.
    #[must_use]
    pub fn with_negatives_allowed(mut self, allowed: bool) -> Self {
        self.allow_negative_numbers = allowed;
        self
    }
}
