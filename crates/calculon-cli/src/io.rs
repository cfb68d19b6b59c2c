//! Console I/O seam.
//!
//! The session talks to a `ConsoleIo` rather than to stdin/stdout directly,
//! so it can be driven by in-memory buffers in tests.

use std::io::{self, BufRead, Stdout, StdinLock, Write};

/// Line-oriented console.
pub trait ConsoleIo {
    /// Read one line without its line terminator. `None` at end of input.
    fn read_line(&mut self) -> io::Result<Option<String>>;

    /// Write a message followed by a newline.
    fn write_line(&mut self, message: &str) -> io::Result<()>;

    /// Write a message without a newline and flush it.
    fn write(&mut self, message: &str) -> io::Result<()>;
}

/// Console over any buffered reader and writer.
pub struct StdConsole<R, W> {
    reader: R,
    writer: W,
}

impl<R: BufRead, W: Write> StdConsole<R, W> {
    #[must_use]
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }

    /// Give back the writer, e.g. to inspect captured output.
    pub fn into_writer(self) -> W {
        self.writer
    }
}

impl StdConsole<StdinLock<'static>, Stdout> {
    /// Console bound to the process stdin and stdout.
    #[must_use]
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> ConsoleIo for StdConsole<R, W> {
    fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        let trimmed_len = line.trim_end_matches(['\n', '\r']).len();
        line.truncate(trimmed_len);
        Ok(Some(line))
    }

    fn write_line(&mut self, message: &str) -> io::Result<()> {
        writeln!(self.writer, "{message}")
    }

    fn write(&mut self, message: &str) -> io::Result<()> {
        write!(self.writer, "{message}")?;
        self.writer.flush()
    }
}
