//! One-shot result presenter.

use calculon_core::{CalcError, CalculationResult};

use crate::output::{format_error, format_result, result_value};

/// Trait for presenting calculation outcomes to the user.
pub trait ResultPresenter {
    /// Present a successful calculation.
    fn present_result(&self, result: &CalculationResult);

    /// Present a failed calculation.
    fn present_error(&self, error: &CalcError);
}

/// Prints results to stdout and errors to stderr.
pub struct CliResultPresenter {
    quiet: bool,
}

impl CliResultPresenter {
    #[must_use]
    pub fn new(quiet: bool) -> Self {
        Self { quiet }
    }

    /// The line printed for a result.
    #[must_use]
    pub fn result_line(&self, result: &CalculationResult) -> String {
        if self.quiet {
            result_value(result)
        } else {
            format_result(result)
        }
    }
}

impl ResultPresenter for CliResultPresenter {
    fn present_result(&self, result: &CalculationResult) {
        println!("{}", self.result_line(result));
    }

    fn present_error(&self, error: &CalcError) {
        eprintln!("{}", format_error(error));
    }
}
