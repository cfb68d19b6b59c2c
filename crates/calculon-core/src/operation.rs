//! Arithmetic operation selector.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::calculator::CalcError;

/// The arithmetic operation applied to a list of numbers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OperationType {
    #[default]
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl OperationType {
    /// All operations in declaration order.
    pub const ALL: [OperationType; 4] = [
        OperationType::Add,
        OperationType::Subtract,
        OperationType::Multiply,
        OperationType::Divide,
    ];

    /// Operator symbol used to join operands in a formula.
    #[must_use]
    pub fn symbol(self) -> &'static str {
        match self {
            OperationType::Add => "+",
            OperationType::Subtract => "-",
            OperationType::Multiply => "*",
            OperationType::Divide => "/",
        }
    }

    /// Map a bare operator symbol to its operation.
    ///
    /// Only the four symbols `+ - * /` are recognised; names are not.
    #[must_use]
    pub fn from_symbol(s: &str) -> Option<Self> {
        match s {
            "+" => Some(OperationType::Add),
            "-" => Some(OperationType::Subtract),
            "*" => Some(OperationType::Multiply),
            "/" => Some(OperationType::Divide),
            _ => None,
        }
    }

    /// Name used for display in prompts and messages.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            OperationType::Add => "Add",
            OperationType::Subtract => "Subtract",
            OperationType::Multiply => "Multiply",
            OperationType::Divide => "Divide",
        }
    }
}

impl fmt::Display for OperationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for OperationType {
    type Err = CalcError;

    /// Accepts an operator symbol or a case-insensitive operation name.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if let Some(op) = Self::from_symbol(s) {
            return Ok(op);
        }
        match s.to_ascii_lowercase().as_str() {
            "add" => Ok(OperationType::Add),
            "subtract" | "sub" => Ok(OperationType::Subtract),
            "multiply" | "mul" => Ok(OperationType::Multiply),
            "divide" | "div" => Ok(OperationType::Divide),
            _ => Err(CalcError::UnknownOperation(s.to_string())),
        }
    }
}
