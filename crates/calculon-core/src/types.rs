//! Values flowing through the calculation pipeline.
//!
//! Each stage consumes one of these and produces the next:
//! `RawInput` → `ProcessedInput` → `NumberStrings` → `ParsedNumbers` → `CalculationResult`.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::constants::EMPTY_INPUT_SUBSTITUTE;

/// The unmodified string supplied by the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawInput(String);

impl RawInput {
    #[must_use]
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for RawInput {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for RawInput {
    fn from(value: String) -> Self {
        Self(value)
    }
}

/// Trimmed input. Never empty: blank input becomes `"0"`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessedInput(String);

impl ProcessedInput {
    /// Normalize raw input.
    #[must_use]
    pub fn from_raw(raw: &RawInput) -> Self {
        let trimmed = raw.as_str().trim();
        if trimmed.is_empty() {
            Self(EMPTY_INPUT_SUBSTITUTE.to_string())
        } else {
            Self(trimmed.to_string())
        }
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Tokens produced by a delimiter strategy, in input order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NumberStrings(Vec<String>);

impl NumberStrings {
    #[must_use]
    pub fn new(values: Vec<String>) -> Self {
        Self(values)
    }

    #[must_use]
    pub fn values(&self) -> &[String] {
        &self.0
    }
}

/// Parsed operands. Holds at least two values once produced by the parser.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedNumbers(Vec<Decimal>);

impl ParsedNumbers {
    #[must_use]
    pub fn new(values: Vec<Decimal>) -> Self {
        Self(values)
    }

    #[must_use]
    pub fn values(&self) -> &[Decimal] {
        &self.0
    }

    /// Negative values in their input order.
    #[must_use]
    pub fn negatives(&self) -> Vec<Decimal> {
        self.0
            .iter()
            .copied()
            .filter(Decimal::is_sign_negative)
            .filter(|n| !n.is_zero())
            .collect()
    }
}

/// Final outcome of a successful calculation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalculationResult {
    /// Unrounded numeric result.
    pub result: Decimal,
    /// Operands joined by the operator, then `" = "` and the formatted result.
    pub formula: String,
}

impl CalculationResult {
    #[must_use]
    pub fn new(result: Decimal, formula: String) -> Self {
        Self { result, formula }
    }
}
