use crate::console::{ConsoleProgram, read_line, write_line};
use crate::program;

/// Asks for a name and greets it.
///
/// # Examples
///
/// ```rust
/// use pure_io::apps::hello;
/// use pure_io::console::ScriptedConsole;
/// use pure_io::run;
///
/// let mut console = ScriptedConsole::new(["Ada"]);
/// run(hello(), &mut console).unwrap();
/// assert_eq!(console.output(), ["What's your name?", "Hello Ada!"]);
/// ```
pub fn hello() -> ConsoleProgram<()> {
    program! {
        write_line("What's your name?");
        name <= read_line();
        write_line(format!("Hello {name}!"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::console::{Console, ScriptedConsole};
    use crate::run;
    use rstest::rstest;

    #[rstest]
    fn performs_write_read_write() {
        let mut console = ScriptedConsole::new(["Grace"]);
        run(hello(), &mut console).expect("one line scripted");

        assert_eq!(
            console.performed(),
            [
                Console::WriteLine("What's your name?".to_string()),
                Console::ReadLine,
                Console::WriteLine("Hello Grace!".to_string()),
            ]
        );
    }
}
