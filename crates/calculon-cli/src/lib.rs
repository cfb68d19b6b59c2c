//! # calculon-cli
//!
//! Interactive session, console I/O, output formatting, and shell completion.

pub mod command;
pub mod completion;
pub mod io;
pub mod output;
pub mod presenter;
pub mod session;

pub use command::Command;
pub use io::{ConsoleIo, StdConsole};
pub use presenter::{CliResultPresenter, ResultPresenter};
pub use session::{Session, SessionEnd};
