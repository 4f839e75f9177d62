//! In-memory console handler for tests.

use std::any::Any;
use std::collections::VecDeque;

use thiserror::Error;

use super::Console;
use crate::handler::EffectHandler;

/// Errors raised by [`ScriptedConsole`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScriptError {
    /// The program read more lines than the script supplied.
    #[error("scripted input exhausted")]
    InputExhausted,

    /// The program drew more random numbers than the script supplied.
    #[error("scripted random values exhausted")]
    RandomExhausted,

    /// A scripted random value falls outside the requested range.
    #[error("scripted random value {value} is outside {min}..={max}")]
    RandomOutOfRange {
        /// The scripted value.
        value: i64,
        /// Requested lower bound.
        min: i64,
        /// Requested upper bound.
        max: i64,
    },
}

/// A [`Console`] handler that replays scripted input and records output.
///
/// Every effect is appended to [`performed`](Self::performed) before it is
/// answered, failed ones included.
///
/// # Examples
///
/// ```rust
/// use pure_io::console::{ScriptedConsole, read_line, write_line};
/// use pure_io::run;
///
/// let program = write_line("What's your name?")
///     .then(read_line())
///     .chain(|name| write_line(format!("Hello {name}!")));
///
/// let mut console = ScriptedConsole::new(["Ada"]);
/// run(program, &mut console).unwrap();
///
/// assert_eq!(console.output(), ["What's your name?", "Hello Ada!"]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ScriptedConsole {
    inputs: VecDeque<String>,
    random: VecDeque<i64>,
    output: Vec<String>,
    performed: Vec<Console>,
}

impl ScriptedConsole {
    /// Creates a console that answers reads with `inputs`, in order.
    pub fn new<I>(inputs: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        Self {
            inputs: inputs.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }

    /// Answers random draws with `values`, in order.
    #[must_use]
    pub fn with_random<I>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = i64>,
    {
        self.random.extend(values);
        self
    }

    /// Lines written so far.
    pub fn output(&self) -> &[String] {
        &self.output
    }

    /// Every effect performed so far, in order.
    pub fn performed(&self) -> &[Console] {
        &self.performed
    }

    /// Number of `ReadLine` effects performed so far.
    pub fn reads(&self) -> usize {
        self.performed
            .iter()
            .filter(|effect| matches!(effect, Console::ReadLine))
            .count()
    }

    /// Scripted input lines not yet consumed.
    pub fn remaining_inputs(&self) -> usize {
        self.inputs.len()
    }
}

impl EffectHandler<Console> for ScriptedConsole {
    type Error = ScriptError;

    fn perform(&mut self, description: Console) -> Result<Box<dyn Any>, ScriptError> {
        self.performed.push(description.clone());
        let result: Box<dyn Any> = match description {
            Console::ReadLine => Box::new(self.inputs.pop_front().ok_or(ScriptError::InputExhausted)?),
            Console::WriteLine(line) => {
                self.output.push(line);
                Box::new(())
            }
            Console::RandomBetween { min, max } => {
                let value = self.random.pop_front().ok_or(ScriptError::RandomExhausted)?;
                if !(min..=max).contains(&value) {
                    return Err(ScriptError::RandomOutOfRange { value, min, max });
                }
                Box::new(value)
            }
        };
        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn replays_inputs_in_order() {
        let mut console = ScriptedConsole::new(["a", "b"]);
        let first = console.perform(Console::ReadLine).expect("two lines scripted");
        let second = console.perform(Console::ReadLine).expect("two lines scripted");

        assert_eq!(first.downcast_ref::<String>().map(String::as_str), Some("a"));
        assert_eq!(second.downcast_ref::<String>().map(String::as_str), Some("b"));
        assert_eq!(console.reads(), 2);
        assert_eq!(console.remaining_inputs(), 0);
    }

    #[rstest]
    fn exhausted_input_is_an_error() {
        let mut console = ScriptedConsole::default();
        assert!(matches!(
            console.perform(Console::ReadLine),
            Err(ScriptError::InputExhausted)
        ));
        assert_eq!(console.performed(), [Console::ReadLine]);
    }

    #[rstest]
    fn records_output() {
        let mut console = ScriptedConsole::default();
        console
            .perform(Console::WriteLine("3".to_string()))
            .expect("writes never fail");
        assert_eq!(console.output(), ["3"]);
    }

    #[rstest]
    #[case(5, Ok(5))]
    #[case(21, Err(ScriptError::RandomOutOfRange { value: 21, min: 1, max: 20 }))]
    fn random_values_are_checked_against_range(
        #[case] scripted: i64,
        #[case] expected: Result<i64, ScriptError>,
    ) {
        let mut console = ScriptedConsole::default().with_random([scripted]);
        let result = console
            .perform(Console::RandomBetween { min: 1, max: 20 })
            .map(|value| *value.downcast::<i64>().expect("RandomBetween yields i64"));
        assert_eq!(result, expected);
    }

    #[rstest]
    fn exhausted_random_is_an_error() {
        let mut console = ScriptedConsole::default();
        assert!(matches!(
            console.perform(Console::RandomBetween { min: 1, max: 2 }),
            Err(ScriptError::RandomExhausted)
        ));
    }
}
