//! The `Calculator` trait and the `StringCalculator` pipeline.
//!
//! `StringCalculator` runs a fixed chain of fallible stages:
//! normalize → split → parse → validate → execute → format.
//! The first failing stage short-circuits the rest and its error is
//! returned to the caller unchanged.

use std::sync::Arc;

use rust_decimal::Decimal;
use tracing::{debug, trace};

use crate::constants::{FORMULA_RESULT_SEPARATOR, NEGATIVE_LIST_SEPARATOR};
use crate::delimiter::DelimiterStrategy;
use crate::format::format_result;
use crate::operation::OperationType;
use crate::options::CalculatorOptions;
use crate::parsing::parse_numbers;
use crate::registry::StrategyRegistry;
use crate::strategy::OperationStrategy;
use crate::types::{CalculationResult, NumberStrings, ParsedNumbers, ProcessedInput, RawInput};

/// Error type for calculations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CalcError {
    /// The raw line was blank.
    #[error("Input cannot be empty")]
    EmptyInput,

    /// No registered delimiter strategy accepted the input.
    #[error("No suitable delimiter strategy found")]
    NoDelimiterStrategy,

    /// Negative operands were supplied while forbidden.
    #[error("Negative numbers not allowed: {}", join_negatives(.0))]
    NegativeNumbersNotAllowed(Vec<Decimal>),

    /// No strategy is registered for the requested operation.
    #[error("Unsupported operation: {0}")]
    UnsupportedOperation(OperationType),

    /// A divisor after the first operand was zero.
    #[error("Cannot divide by zero")]
    DivideByZero,

    /// The operation has no seed value and received no operands.
    #[error("Operation requires at least one operand")]
    EmptyOperands,

    /// The result left the representable decimal range.
    #[error("Arithmetic overflow")]
    Overflow,

    /// Text could not be read as an operation.
    #[error("Unknown operation: {0}")]
    UnknownOperation(String),
}

fn join_negatives(values: &[Decimal]) -> String {
    values
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(NEGATIVE_LIST_SEPARATOR)
}

/// Public calculator trait, consumed by the interactive session.
pub trait Calculator: Send + Sync {
    /// Calculate the result of applying `op` to the numbers in `input`.
    fn calculate(
        &self,
        input: &RawInput,
        op: OperationType,
    ) -> Result<CalculationResult, CalcError>;
}

/// Pipeline composing delimiter strategies, operation strategies and options.
pub struct StringCalculator {
    delimiters: Vec<Arc<dyn DelimiterStrategy>>,
    operations: StrategyRegistry,
    options: CalculatorOptions,
}

impl StringCalculator {
    /// Create a calculator. Delimiter strategies are tried in order.
    #[must_use]
    pub fn new(
        delimiters: Vec<Arc<dyn DelimiterStrategy>>,
        operations: StrategyRegistry,
        options: CalculatorOptions,
    ) -> Self {
        Self {
            delimiters,
            operations,
            options,
        }
    }

    /// Options this calculator was built with.
    #[must_use]
    pub fn options(&self) -> &CalculatorOptions {
        &self.options
    }

    fn split(&self, input: &ProcessedInput) -> Result<NumberStrings, CalcError> {
        let strategy = self
            .delimiters
            .iter()
            .find(|s| s.can_handle(input.as_str()))
            .ok_or(CalcError::NoDelimiterStrategy)?;
        trace!(strategy = strategy.name(), input = input.as_str(), "splitting input");
        Ok(NumberStrings::new(strategy.split(input.as_str())))
    }

    fn validate(&self, numbers: ParsedNumbers) -> Result<ParsedNumbers, CalcError> {
        if self.options.allow_negative_numbers {
            return Ok(numbers);
        }
        let negatives = numbers.negatives();
        if negatives.is_empty() {
            Ok(numbers)
        } else {
            Err(CalcError::NegativeNumbersNotAllowed(negatives))
        }
    }

    fn execute(
        &self,
        numbers: &ParsedNumbers,
        op: OperationType,
    ) -> Result<(Arc<dyn OperationStrategy>, Decimal), CalcError> {
        let strategy = self
            .operations
            .get(op)
            .ok_or(CalcError::UnsupportedOperation(op))?;

        // The pipeline rejects every zero divisor, even where the strategy would return 0.
        if op == OperationType::Divide && numbers.values().iter().skip(1).any(Decimal::is_zero) {
            return Err(CalcError::DivideByZero);
        }

        let value = strategy.execute(numbers.values())?;
        Ok((strategy, value))
    }

    fn build_result(
        strategy: &dyn OperationStrategy,
        numbers: &ParsedNumbers,
        value: Decimal,
    ) -> CalculationResult {
        let formula = format!(
            "{}{FORMULA_RESULT_SEPARATOR}{}",
            strategy.formula(numbers.values()),
            format_result(value)
        );
        CalculationResult::new(value, formula)
    }
}

impl Calculator for StringCalculator {
    fn calculate(
        &self,
        input: &RawInput,
        op: OperationType,
    ) -> Result<CalculationResult, CalcError> {
        let processed = ProcessedInput::from_raw(input);
        let tokens = self.split(&processed)?;
        let numbers = self.validate(parse_numbers(&tokens))?;
        let (strategy, value) = self.execute(&numbers, op)?;
        let result = Self::build_result(strategy.as_ref(), &numbers, value);
        debug!(operation = %op, formula = %result.formula, "calculation complete");
        Ok(result)
    }
}

impl std::fmt::Debug for StringCalculator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StringCalculator")
            .field(
                "delimiters",
                &self.delimiters.iter().map(|d| d.name()).collect::<Vec<_>>(),
            )
            .field("operations", &self.operations)
            .field("options", &self.options)
            .finish()
    }
}
