//! Console handler over real streams.

use std::any::Any;
use std::io::{self, BufRead, StdinLock, Stdout, Write};

#[cfg(feature = "random")]
use rand::{Rng, SeedableRng, rngs::StdRng};

use tracing::trace;

use super::{Console, ConsoleError};
use crate::handler::EffectHandler;

/// Performs [`Console`] effects against a reader, a writer and a random
/// source.
///
/// Lines are read with their trailing `\n` / `\r\n` removed. Every written
/// line is flushed immediately, so prompts show up before the next read.
///
/// # Examples
///
/// ```rust
/// use pure_io::console::{StdioHandler, read_line, write_line};
/// use pure_io::run;
///
/// let program = read_line().chain(|name| write_line(format!("Hello {name}!")));
///
/// let mut handler = StdioHandler::new("Ada\n".as_bytes(), Vec::new());
/// run(program, &mut handler).unwrap();
///
/// let (_, output) = handler.into_parts();
/// assert_eq!(output, b"Hello Ada!\n");
/// ```
pub struct StdioHandler<R, W> {
    reader: R,
    writer: W,
    #[cfg(feature = "random")]
    random: StdRng,
}

impl StdioHandler<StdinLock<'static>, Stdout> {
    /// Binds process standard input and output.
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R, W> StdioHandler<R, W> {
    /// Creates a handler over `reader` and `writer`.
    ///
    /// With the `random` feature the random source is seeded from the
    /// operating system.
    pub fn new(reader: R, writer: W) -> Self {
        Self {
            reader,
            writer,
            #[cfg(feature = "random")]
            random: StdRng::from_entropy(),
        }
    }

    /// Seeds the random source, making draws reproducible.
    #[cfg(feature = "random")]
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.random = StdRng::seed_from_u64(seed);
        self
    }

    /// Unwraps the reader and the writer.
    pub fn into_parts(self) -> (R, W) {
        (self.reader, self.writer)
    }
}

impl<R: BufRead, W: Write> StdioHandler<R, W> {
    fn read_line(&mut self) -> Result<String, ConsoleError> {
        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            return Err(ConsoleError::EndOfInput);
        }
        if line.ends_with('\n') {
            line.pop();
            if line.ends_with('\r') {
                line.pop();
            }
        }
        Ok(line)
    }

    fn write_line(&mut self, line: &str) -> Result<(), ConsoleError> {
        writeln!(self.writer, "{line}")?;
        self.writer.flush()?;
        Ok(())
    }

    #[cfg(feature = "random")]
    fn random_between(&mut self, min: i64, max: i64) -> Result<i64, ConsoleError> {
        if min > max {
            return Err(ConsoleError::EmptyRange { min, max });
        }
        Ok(self.random.gen_range(min..=max))
    }

    #[cfg(not(feature = "random"))]
    #[allow(clippy::unused_self)]
    fn random_between(&mut self, min: i64, max: i64) -> Result<i64, ConsoleError> {
        if min > max {
            return Err(ConsoleError::EmptyRange { min, max });
        }
        Err(ConsoleError::RandomUnavailable)
    }
}

impl<R: BufRead, W: Write> EffectHandler<Console> for StdioHandler<R, W> {
    type Error = ConsoleError;

    fn perform(&mut self, description: Console) -> Result<Box<dyn Any>, ConsoleError> {
        trace!(%description, "stdio");
        let result: Box<dyn Any> = match description {
            Console::ReadLine => Box::new(self.read_line()?),
            Console::WriteLine(line) => {
                self.write_line(&line)?;
                Box::new(())
            }
            Console::RandomBetween { min, max } => Box::new(self.random_between(min, max)?),
        };
        Ok(result)
    }
}
