//! Interpretation of a single input line.

use calculon_core::OperationType;

/// What a line of user input asks the session to do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// End the session.
    Quit,
    /// Switch the active operation.
    SwitchOperation(OperationType),
    /// Calculate using the active operation.
    Calculate(String),
    /// The line was blank.
    Empty,
}

impl Command {
    /// Classify a line. `q` is case-insensitive; operator symbols match after trimming.
    #[must_use]
    pub fn parse(line: &str) -> Self {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            return Command::Empty;
        }
        if trimmed.eq_ignore_ascii_case("q") {
            return Command::Quit;
        }
        match OperationType::from_symbol(trimmed) {
            Some(op) => Command::SwitchOperation(op),
            None => Command::Calculate(line.to_string()),
        }
    }
}
