//! Constants for input handling, result formatting, and process exit.

/// Delimiter used when none is configured.
pub const DEFAULT_DELIMITER: &str = ",";

/// Literal substituted for blank input before splitting.
pub const EMPTY_INPUT_SUBSTITUTE: &str = "0";

/// Maximum number of fractional digits shown in a formatted result.
pub const MAX_DECIMAL_PLACES: u32 = 3;

/// Separator between the operand expression and the result in a formula.
pub const FORMULA_RESULT_SEPARATOR: &str = " = ";

/// Separator used when listing rejected negative numbers.
pub const NEGATIVE_LIST_SEPARATOR: &str = ", ";

/// Process exit codes.
pub mod exit_codes {
    /// Successful execution.
    pub const SUCCESS: i32 = 0;
    /// Generic error (I/O, terminal).
    pub const ERROR_GENERIC: i32 = 1;
    /// Input was rejected by validation.
    pub const ERROR_INPUT: i32 = 2;
    /// Arithmetic failed (divide by zero, overflow).
    pub const ERROR_ARITHMETIC: i32 = 3;
    /// Invalid configuration.
    pub const ERROR_CONFIG: i32 = 4;
}
