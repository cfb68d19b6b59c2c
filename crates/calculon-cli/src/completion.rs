//! Shell completion generation.

use std::io;

use clap::Command;
use clap_complete::{generate, Shell};

/// Binary name completions are generated for.
pub const BIN_NAME: &str = "calculon";

/// Generate shell completion script.
pub fn generate_completion(cmd: &mut Command, shell: Shell, out: &mut dyn io::Write) {
    generate(shell, cmd, BIN_NAME, out);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generate_bash_completion() {
        let mut cmd = Command::new(BIN_NAME).arg(clap::Arg::new("delimiter").long("delimiter"));
        let mut buf = Vec::new();
        generate_completion(&mut cmd, Shell::Bash, &mut buf);
        let script = String::from_utf8(buf).unwrap();
        assert!(script.contains(BIN_NAME));
        assert!(script.contains("--delimiter"));
    }

    #[test]
    fn generate_fish_completion() {
        let mut cmd = Command::new(BIN_NAME);
        let mut buf = Vec::new();
        generate_completion(&mut cmd, Shell::Fish, &mut buf);
        assert!(!buf.is_empty());
    }
}
