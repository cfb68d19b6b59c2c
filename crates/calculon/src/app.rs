//! Application entry point and dispatch.

use anyhow::{Context, Result};
use tracing::{debug, info};

use calculon_cli::completion::generate_completion;
use calculon_cli::{CliResultPresenter, ResultPresenter, Session, StdConsole};
use calculon_core::{
    exit_codes, CalcError, Calculator, CalculatorFactory, DefaultFactory, RawInput,
};

use crate::config::AppConfig;
use crate::errors::handle_error;

/// Run the application and return the process exit code.
pub fn run(config: &AppConfig) -> Result<i32> {
    // Handle shell completion
    if let Some(shell) = config.completion {
        let mut cmd = <AppConfig as clap::CommandFactory>::command();
        generate_completion(&mut cmd, shell, &mut std::io::stdout());
        return Ok(exit_codes::SUCCESS);
    }

    let options = config.calculator_options();
    info!(
        delimiter = %options.alternate_delimiter,
        allow_negatives = options.allow_negative_numbers,
        "calculator configured"
    );
    let calculator = DefaultFactory::new().create(options);

    if let Some(input) = &config.eval {
        return Ok(run_once(&calculator, input, config));
    }

    run_interactive(&calculator, config)
}

/// Calculate one input and report it through the CLI presenter.
pub fn run_once(calculator: &dyn Calculator, input: &str, config: &AppConfig) -> i32 {
    let presenter = CliResultPresenter::new(config.quiet);

    let outcome = if input.trim().is_empty() {
        Err(CalcError::EmptyInput)
    } else {
        calculator.calculate(&RawInput::new(input), config.operation)
    };

    match outcome {
        Ok(result) => {
            presenter.present_result(&result);
            exit_codes::SUCCESS
        }
        Err(err) => {
            presenter.present_error(&err);
            handle_error(&err)
        }
    }
}

fn run_interactive(calculator: &dyn Calculator, config: &AppConfig) -> Result<i32> {
    let mut session = Session::new(calculator, StdConsole::stdio())
        .with_operation(config.operation)
        .with_banner(config.show_banner());
    let end = session.run().context("console I/O failed")?;
    debug!(?end, "session finished");
    Ok(exit_codes::SUCCESS)
}
