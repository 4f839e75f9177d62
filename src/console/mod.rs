//! Console effect vocabulary.
//!
//! [`Console`] names the primitive effects of a terminal program. The smart
//! constructors fix the result type of each one:
//!
//! | description               | result   |
//! |---------------------------|----------|
//! | `ReadLine`                | `String` |
//! | `WriteLine(line)`         | `()`     |
//! | `RandomBetween{min, max}` | `i64`    |
//!
//! Two handlers are provided: [`StdioHandler`] talks to real streams, and
//! [`ScriptedConsole`] replays canned input and records everything, for
//! tests.

mod scripted;
mod stdio;

use std::fmt::{self, Display, Formatter};

use thiserror::Error;

use crate::program::Program;

pub use scripted::{ScriptError, ScriptedConsole};
pub use stdio::StdioHandler;

/// A program over the console vocabulary.
pub type ConsoleProgram<A> = Program<Console, A>;

/// A primitive console effect.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Console {
    /// Read one line of input, without its line terminator.
    ReadLine,
    /// Write one line of output.
    WriteLine(String),
    /// Draw an integer uniformly from `min..=max`.
    RandomBetween {
        /// Lower bound, inclusive.
        min: i64,
        /// Upper bound, inclusive.
        max: i64,
    },
}

impl Display for Console {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::ReadLine => formatter.write_str("read line"),
            Self::WriteLine(line) => write!(formatter, "write line {line:?}"),
            Self::RandomBetween { min, max } => write!(formatter, "random between {min} and {max}"),
        }
    }
}

/// Reads one line of input.
pub fn read_line() -> ConsoleProgram<String> {
    Program::suspend(Console::ReadLine)
}

/// Writes one line of output.
///
/// # Examples
///
/// ```rust
/// use pure_io::console::{ScriptedConsole, write_line};
/// use pure_io::run;
///
/// let mut console = ScriptedConsole::default();
/// run(write_line("hi"), &mut console).unwrap();
/// assert_eq!(console.output(), ["hi"]);
/// ```
pub fn write_line(line: impl Into<String>) -> ConsoleProgram<()> {
    Program::suspend(Console::WriteLine(line.into()))
}

/// Draws an integer from `min..=max`.
pub fn random_between(min: i64, max: i64) -> ConsoleProgram<i64> {
    Program::suspend(Console::RandomBetween { min, max })
}

/// Errors raised by [`StdioHandler`].
#[derive(Debug, Error)]
pub enum ConsoleError {
    /// Reading or writing the underlying stream failed.
    #[error("console I/O failed: {0}")]
    Io(#[from] std::io::Error),

    /// Input ended before a line could be read.
    #[error("end of input")]
    EndOfInput,

    /// A random draw was requested from an empty range.
    #[error("cannot draw from empty range {min}..={max}")]
    EmptyRange {
        /// Requested lower bound.
        min: i64,
        /// Requested upper bound.
        max: i64,
    },

    /// Random draws need the `random` feature.
    #[error("random numbers are not available; enable the `random` feature")]
    RandomUnavailable,
}
