//! Interactive read-eval-print session.

use std::io;

use tracing::debug;

use calculon_core::{CalcError, Calculator, OperationType, RawInput};

use crate::command::Command;
use crate::io::ConsoleIo;
use crate::output::{
    format_error, format_operation_changed, format_prompt, format_result, WELCOME_LINES,
};

/// Why a session stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEnd {
    /// The user typed `q`.
    Quit,
    /// Input was exhausted.
    EndOfInput,
}

/// Reads lines, dispatches them, and prints outcomes until quit or EOF.
pub struct Session<'a, C: ConsoleIo> {
    calculator: &'a dyn Calculator,
    console: C,
    operation: OperationType,
    show_banner: bool,
}

impl<'a, C: ConsoleIo> Session<'a, C> {
    /// Create a session starting with Add and the welcome banner enabled.
    pub fn new(calculator: &'a dyn Calculator, console: C) -> Self {
        Self {
            calculator,
            console,
            operation: OperationType::Add,
            show_banner: true,
        }
    }

    /// Set the initial operation.
    #[must_use]
    pub fn with_operation(mut self, operation: OperationType) -> Self {
        self.operation = operation;
        self
    }

    /// Enable or disable the welcome banner.
    #[must_use]
    pub fn with_banner(mut self, show: bool) -> Self {
        self.show_banner = show;
        self
    }

    /// The currently active operation.
    pub fn operation(&self) -> OperationType {
        self.operation
    }

    /// Give back the console.
    pub fn into_console(self) -> C {
        self.console
    }

    /// Run until the user quits or input ends.
    pub fn run(&mut self) -> io::Result<SessionEnd> {
        if self.show_banner {
            for line in WELCOME_LINES {
                self.console.write_line(line)?;
            }
        }

        loop {
            self.console.write(&format_prompt(self.operation))?;
            let Some(line) = self.console.read_line()? else {
                // Leave the terminal on a fresh line after Ctrl+D.
                self.console.write_line("")?;
                debug!("end of input");
                return Ok(SessionEnd::EndOfInput);
            };
            if let Some(end) = self.handle_line(&line)? {
                debug!("session ended by user");
                return Ok(end);
            }
        }
    }

    /// Handle one line. Returns `Some` when the session should stop.
    pub fn handle_line(&mut self, line: &str) -> io::Result<Option<SessionEnd>> {
        match Command::parse(line) {
            Command::Quit => return Ok(Some(SessionEnd::Quit)),
            Command::Empty => {
                self.console
                    .write_line(&format_error(&CalcError::EmptyInput))?;
            }
            Command::SwitchOperation(op) => {
                debug!(from = %self.operation, to = %op, "operation changed");
                self.operation = op;
                self.console.write_line(&format_operation_changed(op))?;
            }
            Command::Calculate(input) => {
                match self
                    .calculator
                    .calculate(&RawInput::new(input), self.operation)
                {
                    Ok(result) => self.console.write_line(&format_result(&result))?,
                    Err(err) => {
                        debug!(error = %err, "calculation failed");
                        self.console.write_line(&format_error(&err))?;
                    }
                }
            }
        }
        Ok(None)
    }
}
