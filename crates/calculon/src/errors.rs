//! Error handling and exit codes.

use calculon_core::exit_codes;
use calculon_core::CalcError;

/// Map a calculation error to the process exit code.
pub fn handle_error(err: &CalcError) -> i32 {
    match err {
        CalcError::EmptyInput | CalcError::NegativeNumbersNotAllowed(_) => exit_codes::ERROR_INPUT,
        CalcError::DivideByZero | CalcError::Overflow | CalcError::EmptyOperands => {
            exit_codes::ERROR_ARITHMETIC
        }
        CalcError::NoDelimiterStrategy
        | CalcError::UnsupportedOperation(_)
        | CalcError::UnknownOperation(_) => exit_codes::ERROR_CONFIG,
    }
}
