//! # calculon-core
//!
//! Core library for the Calculon string calculator.
//! Parses delimiter-separated numbers and applies Add, Subtract, Multiply
//! or Divide through a chain of fallible pipeline stages.

pub mod calculator;
pub mod constants;
pub mod delimiter;
pub mod format;
pub mod operation;
pub mod options;
pub(crate) mod parsing;
pub mod registry;
pub mod strategy;
pub mod types;

// Re-exports
pub use calculator::{CalcError, Calculator, StringCalculator};
pub use constants::{exit_codes, DEFAULT_DELIMITER, MAX_DECIMAL_PLACES};
pub use delimiter::{DefaultDelimiterStrategy, DelimiterStrategy};
pub use operation::OperationType;
pub use options::CalculatorOptions;
pub use registry::{CalculatorFactory, DefaultFactory, StrategyRegistry};
pub use strategy::OperationStrategy;
pub use types::{CalculationResult, RawInput};

/// Calculate `input` with default options.
///
/// This is a convenience function for simple use cases. For a custom
/// delimiter or negative-number policy, build a calculator through
/// `DefaultFactory` instead.
///
/// # Example
/// ```
/// use calculon_core::OperationType;
///
/// let result = calculon_core::calculate("1,2", OperationType::Add).unwrap();
/// assert_eq!(result.formula, "1+2 = 3");
/// ```
pub fn calculate(input: &str, op: OperationType) -> Result<CalculationResult, CalcError> {
    DefaultFactory::new()
        .create(CalculatorOptions::default())
        .calculate(&RawInput::new(input), op)
}
