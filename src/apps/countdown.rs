use crate::console::{ConsoleProgram, write_line};

use super::input::prompt_int_between;

/// Smallest number [`countdown_app`] accepts.
pub const COUNTDOWN_MIN: i64 = 10;

/// Largest number [`countdown_app`] accepts.
pub const COUNTDOWN_MAX: i64 = 100_000;

/// Writes `n`, `n - 1`, ..., `0`, then `BOOM!!!`.
///
/// A negative `n` writes itself and then `BOOM!!!`.
///
/// # Examples
///
/// ```rust
/// use pure_io::apps::countdown;
/// use pure_io::console::ScriptedConsole;
/// use pure_io::run;
///
/// let mut console = ScriptedConsole::default();
/// run(countdown(2), &mut console).unwrap();
/// assert_eq!(console.output(), ["2", "1", "0", "BOOM!!!"]);
/// ```
pub fn countdown(n: i64) -> ConsoleProgram<()> {
    write_line(n.to_string()).chain(move |()| {
        if n > 0 {
            countdown(n - 1)
        } else {
            write_line("BOOM!!!")
        }
    })
}

/// Prompts for a starting number in
/// [`COUNTDOWN_MIN`]`..=`[`COUNTDOWN_MAX`] and counts down from it.
pub fn countdown_app() -> ConsoleProgram<()> {
    prompt_int_between(COUNTDOWN_MIN, COUNTDOWN_MAX).chain(countdown)
}
