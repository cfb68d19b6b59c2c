//! Calculon: interactive string calculator.

use std::process::ExitCode;

use anyhow::Result;
use calculon_lib::{app, config};

fn main() -> Result<ExitCode> {
    let config = config::AppConfig::parse();

    // Logs go to stderr so the stdout protocol stays clean
    let level = if config.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let code = app::run(&config)?;
    Ok(ExitCode::from(u8::try_from(code).unwrap_or(1)))
}
