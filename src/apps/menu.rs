use crate::console::{ConsoleProgram, write_line};

use super::countdown::countdown_app;
use super::greeting::hello;
use super::guess::guess_number;
use super::input::prompt_int_between;

/// Range the menu's guessing game draws from.
const GUESS_RANGE: (i64, i64) = (1, 20);

/// An entry of the main menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MenuItem {
    /// Runs [`hello`](super::hello).
    Hello,
    /// Runs [`countdown_app`](super::countdown_app).
    Countdown,
    /// Runs [`guess_number`](super::guess_number) over `1..=20`.
    Guess,
    /// Leaves the menu.
    Exit,
}

impl MenuItem {
    /// Every item, in menu order.
    pub const ALL: [Self; 4] = [Self::Hello, Self::Countdown, Self::Guess, Self::Exit];

    /// The number the user types to pick this item.
    pub const fn number(self) -> i64 {
        match self {
            Self::Hello => 1,
            Self::Countdown => 2,
            Self::Guess => 3,
            Self::Exit => 4,
        }
    }

    /// The item picked by `number`, if any.
    pub fn from_number(number: i64) -> Option<Self> {
        Self::ALL.into_iter().find(|item| item.number() == number)
    }

    /// Text shown in the menu.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Hello => "Hello",
            Self::Countdown => "Countdown",
            Self::Guess => "Guess",
            Self::Exit => "Exit",
        }
    }

    /// The program this item runs. Its result is `true` when the menu should
    /// stop.
    fn action(self) -> ConsoleProgram<bool> {
        match self {
            Self::Hello => hello().map(|()| false),
            Self::Countdown => countdown_app().map(|()| false),
            Self::Guess => guess_number(GUESS_RANGE.0, GUESS_RANGE.1).map(|_| false),
            Self::Exit => ConsoleProgram::pure(true),
        }
    }
}

fn print_menu() -> ConsoleProgram<()> {
    MenuItem::ALL.into_iter().fold(write_line("Menu"), |program, item| {
        program.then(write_line(format!("{}) {}", item.number(), item.label())))
    })
}

/// Shows the menu, runs the chosen item, and repeats until `Exit` is chosen.
///
/// # Examples
///
/// ```rust
/// use pure_io::apps::menu;
/// use pure_io::console::ScriptedConsole;
/// use pure_io::run;
///
/// let mut console = ScriptedConsole::new(["4"]);
/// run(menu(), &mut console).unwrap();
/// assert_eq!(console.output()[0], "Menu");
/// ```
pub fn menu() -> ConsoleProgram<()> {
    let (first, last) = (MenuItem::Hello.number(), MenuItem::Exit.number());
    print_menu()
        .then(prompt_int_between(first, last))
        .chain(|number| match MenuItem::from_number(number) {
            Some(item) => item.action(),
            None => ConsoleProgram::pure(false),
        })
        .chain(|exit| if exit { ConsoleProgram::pure(()) } else { menu() })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::console::ScriptedConsole;
    use crate::run;
    use rstest::rstest;

    const MENU: [&str; 5] = ["Menu", "1) Hello", "2) Countdown", "3) Guess", "4) Exit"];

    #[rstest]
    #[case(1, Some(MenuItem::Hello))]
    #[case(4, Some(MenuItem::Exit))]
    #[case(0, None)]
    #[case(5, None)]
    fn item_numbers(#[case] number: i64, #[case] expected: Option<MenuItem>) {
        assert_eq!(MenuItem::from_number(number), expected);
    }

    #[rstest]
    fn exit_immediately() {
        let mut console = ScriptedConsole::new(["4"]);
        run(menu(), &mut console).expect("exit is scripted");

        let mut expected = MENU.to_vec();
        expected.push("Enter a number between 1 and 4");
        assert_eq!(console.output(), expected);
    }

    #[rstest]
    fn menu_is_shown_again_after_an_item() {
        let mut console = ScriptedConsole::new(["1", "Ada", "4"]);
        run(menu(), &mut console).expect("script ends with exit");

        let menus = console.output().iter().filter(|line| *line == "Menu").count();
        assert_eq!(menus, 2);
        assert!(console.output().contains(&"Hello Ada!".to_string()));
        assert_eq!(console.remaining_inputs(), 0);
    }
}
