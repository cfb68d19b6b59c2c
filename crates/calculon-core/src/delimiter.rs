//! Delimiter strategies: recognize an input format and split it into number tokens.

use crate::constants::DEFAULT_DELIMITER;

/// Pluggable rule for recognizing and splitting a numeric input string.
pub trait DelimiterStrategy: Send + Sync {
    /// Whether this strategy understands the given (normalized) input.
    fn can_handle(&self, input: &str) -> bool;

    /// Split the input into number substrings, preserving order.
    fn split(&self, input: &str) -> Vec<String>;

    /// Get the name of this strategy.
    fn name(&self) -> &str;
}

/// Catch-all strategy splitting on a single configured delimiter.
#[derive(Debug, Clone)]
pub struct DefaultDelimiterStrategy {
    delimiter: String,
}

impl DefaultDelimiterStrategy {
    /// Create a strategy splitting on `delimiter`. An empty delimiter falls back to `","`.
    #[must_use]
    pub fn new(delimiter: impl Into<String>) -> Self {
        let delimiter = delimiter.into();
        let delimiter = if delimiter.is_empty() {
            DEFAULT_DELIMITER.to_string()
        } else {
            delimiter
        };
        Self { delimiter }
    }

    #[must_use]
    pub fn delimiter(&self) -> &str {
        &self.delimiter
    }
}

impl Default for DefaultDelimiterStrategy {
    fn default() -> Self {
        Self::new(DEFAULT_DELIMITER)
    }
}

impl DelimiterStrategy for DefaultDelimiterStrategy {
    fn can_handle(&self, _input: &str) -> bool {
        true
    }

    fn split(&self, input: &str) -> Vec<String> {
        input.split(self.delimiter.as_str()).map(str::to_string).collect()
    }

    fn name(&self) -> &'static str {
        "Default"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_handles_anything() {
        let strategy = DefaultDelimiterStrategy::default();
        assert!(strategy.can_handle(""));
        assert!(strategy.can_handle("1,2"));
        assert!(strategy.can_handle("//;\n1;2"));
    }

    #[test]
    fn splits_on_comma() {
        let strategy = DefaultDelimiterStrategy::default();
        assert_eq!(strategy.split("1,2,3"), vec!["1", "2", "3"]);
    }

    #[test]
    fn keeps_empty_tokens() {
        let strategy = DefaultDelimiterStrategy::default();
        assert_eq!(strategy.split("1,,3"), vec!["1", "", "3"]);
        assert_eq!(strategy.split(","), vec!["", ""]);
    }

    #[test]
    fn no_delimiter_yields_single_token() {
        let strategy = DefaultDelimiterStrategy::default();
        assert_eq!(strategy.split("20"), vec!["20"]);
    }

    #[test]
    fn multi_char_delimiter() {
        let strategy = DefaultDelimiterStrategy::new("::");
        assert_eq!(strategy.split("4::5:6"), vec!["4", "5:6"]);
        assert_eq!(strategy.delimiter(), "::");
    }

    #[test]
    fn empty_delimiter_falls_back() {
        let strategy = DefaultDelimiterStrategy::new("");
        assert_eq!(strategy.delimiter(), ",");
    }
}
