//! Application configuration from CLI flags and environment.

use clap::builder::FalseyValueParser;
use clap::Parser;

use calculon_core::{CalcError, CalculatorOptions, OperationType, DEFAULT_DELIMITER};

/// Calculon: interactive string calculator.
///
/// Enter delimiter-separated numbers to apply the active operation,
/// `+ - * /` to switch operations, or `q` to quit.
#[derive(Parser, Debug)]
#[command(name = "calculon", version, about)]
pub struct AppConfig {
    /// Delimiter separating numbers.
    #[arg(short, long, default_value = DEFAULT_DELIMITER, env = "CALCULON_DELIMITER")]
    pub delimiter: String,

    /// Reject negative numbers.
    #[arg(long, env = "CALCULON_DENY_NEGATIVES", value_parser = FalseyValueParser::new())]
    pub deny_negatives: bool,

    /// Operation: +, -, *, / or add, subtract, multiply, divide.
    #[arg(
        short,
        long,
        default_value = "add",
        env = "CALCULON_OPERATION",
        value_parser = parse_operation
    )]
    pub operation: OperationType,

    /// Calculate a single input and exit.
    #[arg(short, long, allow_hyphen_values = true)]
    pub eval: Option<String>,

    /// Quiet mode (value only for --eval, no banner when interactive).
    #[arg(short, long)]
    pub quiet: bool,

    /// Do not print the welcome banner.
    #[arg(long)]
    pub no_banner: bool,

    /// Verbose logging.
    #[arg(short, long)]
    pub verbose: bool,

    /// Generate shell completion.
    #[arg(long, value_enum)]
    pub completion: Option<clap_complete::Shell>,
}

impl AppConfig {
    /// Parse CLI arguments.
    #[must_use]
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }

    /// Calculator options derived from the flags.
    #[must_use]
    pub fn calculator_options(&self) -> CalculatorOptions {
        CalculatorOptions::default()
            .with_delimiter(self.delimiter.clone())
            .with_negatives_allowed(!self.deny_negatives)
            .normalize()
    }

    /// Whether the interactive banner should be printed.
    #[must_use]
    pub fn show_banner(&self) -> bool {
        !(self.no_banner || self.quiet)
    }
}

fn parse_operation(s: &str) -> Result<OperationType, CalcError> {
    s.parse()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> AppConfig {
        AppConfig::try_parse_from(std::iter::once("calculon").chain(args.iter().copied()))
            .unwrap()
    }

    #[test]
    fn defaults() {
        let config = parse(&[]);
        assert_eq!(config.operation, OperationType::Add);
        assert!(config.eval.is_none());
        assert!(config.show_banner());
        let opts = config.calculator_options();
        assert_eq!(opts, CalculatorOptions::default());
    }

    #[test]
    fn operation_symbol_and_name() {
        assert_eq!(parse(&["-o", "/"]).operation, OperationType::Divide);
        assert_eq!(
            parse(&["--operation", "multiply"]).operation,
            OperationType::Multiply
        );
    }

    #[test]
    fn invalid_operation_rejected() {
        let result = AppConfig::try_parse_from(["calculon", "--operation", "modulo"]);
        assert!(result.is_err());
    }

    #[test]
    fn deny_negatives_flag() {
        let opts = parse(&["--deny-negatives"]).calculator_options();
        assert!(!opts.allow_negative_numbers);
    }

    #[test]
    fn custom_delimiter() {
        let opts = parse(&["-d", ";"]).calculator_options();
        assert_eq!(opts.alternate_delimiter, ";");
    }

    #[test]
    fn eval_accepts_leading_hyphen() {
        let config = parse(&["--eval", "-1,2"]);
        assert_eq!(config.eval.as_deref(), Some("-1,2"));
    }

    #[test]
    fn quiet_hides_banner() {
        assert!(!parse(&["-q"]).show_banner());
        assert!(!parse(&["--no-banner"]).show_banner());
    }
}
