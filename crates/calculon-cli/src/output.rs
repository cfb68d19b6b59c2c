//! Text of the interactive protocol.

use calculon_core::{CalcError, CalculationResult, OperationType};

/// Lines printed when an interactive session starts.
pub const WELCOME_LINES: [&str; 3] = [
    "Welcome to the String Calculator!",
    "Enter numbers to calculate, or 'q' to quit.",
    "Use '+', '-', '*', or '/' to change operations.",
];

/// Prompt shown before each read.
#[must_use]
pub fn format_prompt(op: OperationType) -> String {
    format!("[{op}] > ")
}

#[must_use]
pub fn format_result(result: &CalculationResult) -> String {
    format!("Result: {}", result.formula)
}

#[must_use]
pub fn format_error(error: &CalcError) -> String {
    format!("Error: {error}")
}

#[must_use]
pub fn format_operation_changed(op: OperationType) -> String {
    format!("Operation changed to {op}")
}

/// The formatted numeric result, without the formula.
#[must_use]
pub fn result_value(result: &CalculationResult) -> String {
    calculon_core::format::format_result(result.result)
}
