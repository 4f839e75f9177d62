use crate::console::{ConsoleProgram, read_line, write_line};

/// Parses a line of input as an integer, ignoring surrounding whitespace.
///
/// # Examples
///
/// ```rust
/// use pure_io::apps::parse_int;
///
/// assert_eq!(parse_int(" 42 "), Some(42));
/// assert_eq!(parse_int("abc"), None);
/// ```
pub fn parse_int(line: &str) -> Option<i64> {
    line.trim().parse().ok()
}

/// Reads lines until one parses as an integer.
pub fn get_int() -> ConsoleProgram<i64> {
    read_line().map(|line| parse_int(&line)).chain(|parsed| match parsed {
        Some(number) => ConsoleProgram::pure(number),
        None => get_int(),
    })
}

/// Reads integers until one falls within `min..=max`.
///
/// # Examples
///
/// ```rust
/// use pure_io::apps::get_int_between;
/// use pure_io::console::ScriptedConsole;
/// use pure_io::run;
///
/// let mut console = ScriptedConsole::new(["abc", "150", "42"]);
/// assert_eq!(run(get_int_between(1, 100), &mut console).unwrap(), 42);
/// assert_eq!(console.reads(), 3);
/// ```
pub fn get_int_between(min: i64, max: i64) -> ConsoleProgram<i64> {
    get_int().chain(move |number| {
        if (min..=max).contains(&number) {
            ConsoleProgram::pure(number)
        } else {
            get_int_between(min, max)
        }
    })
}

/// Like [`get_int_between`], but prompts before every read.
///
/// An unparsable line is read again without a new prompt; an out-of-range
/// number prompts again.
pub fn prompt_int_between(min: i64, max: i64) -> ConsoleProgram<i64> {
    write_line(format!("Enter a number between {min} and {max}"))
        .then(get_int())
        .chain(move |number| {
            if (min..=max).contains(&number) {
                ConsoleProgram::pure(number)
            } else {
                prompt_int_between(min, max)
            }
        })
}
