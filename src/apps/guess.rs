use std::cmp::Ordering;

use crate::console::{ConsoleProgram, random_between, write_line};
use crate::program;

use super::input::get_int_between;

/// The guess-the-number game.
///
/// Draws a secret in `min..=max`, then asks for guesses until one hits it.
/// Guesses outside the range are read again silently. The program's result
/// is the number of attempts it took.
///
/// # Examples
///
/// ```rust
/// use pure_io::apps::guess_number;
/// use pure_io::console::ScriptedConsole;
/// use pure_io::run;
///
/// let mut console = ScriptedConsole::new(["10", "15"]).with_random([15]);
/// assert_eq!(run(guess_number(1, 20), &mut console).unwrap(), 2);
/// assert_eq!(console.output().last().unwrap(), "You won after 2 attempt(s).");
/// ```
pub fn guess_number(min: i64, max: i64) -> ConsoleProgram<u32> {
    program! {
        write_line(format!("Guess a number between {min} and {max}."));
        secret <= random_between(min, max);
        guess_loop(min, max, secret, 1)
    }
}

fn guess_loop(min: i64, max: i64, secret: i64, attempt: u32) -> ConsoleProgram<u32> {
    program! {
        write_line(format!("Attempt {attempt}>"));
        guess <= get_int_between(min, max);
        match guess.cmp(&secret) {
            Ordering::Less => write_line("It's too small.")
                .chain(move |()| guess_loop(min, max, secret, attempt + 1)),
            Ordering::Greater => write_line("It's too large.")
                .chain(move |()| guess_loop(min, max, secret, attempt + 1)),
            Ordering::Equal => write_line(format!("You won after {attempt} attempt(s)."))
                .map(move |()| attempt),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::console::{Console, ScriptedConsole};
    use crate::run;
    use rstest::rstest;

    #[rstest]
    fn first_guess_wins() {
        let mut console = ScriptedConsole::new(["7"]).with_random([7]);
        assert_eq!(run(guess_number(1, 20), &mut console).ok(), Some(1));
        assert_eq!(
            console.output(),
            [
                "Guess a number between 1 and 20.",
                "Attempt 1>",
                "You won after 1 attempt(s).",
            ]
        );
    }

    #[rstest]
    fn hints_point_towards_the_secret() {
        let mut console = ScriptedConsole::new(["3", "18", "12"]).with_random([12]);
        assert_eq!(run(guess_number(1, 20), &mut console).ok(), Some(3));
        assert_eq!(
            console.output(),
            [
                "Guess a number between 1 and 20.",
                "Attempt 1>",
                "It's too small.",
                "Attempt 2>",
                "It's too large.",
                "Attempt 3>",
                "You won after 3 attempt(s).",
            ]
        );
    }

    #[rstest]
    fn draws_from_the_requested_range() {
        let mut console = ScriptedConsole::new(["5"]).with_random([5]);
        run(guess_number(5, 9), &mut console).expect("secret is in range");
        assert_eq!(console.performed()[1], Console::RandomBetween { min: 5, max: 9 });
    }

    #[rstest]
    fn out_of_range_guesses_do_not_count() {
        let mut console = ScriptedConsole::new(["0", "21", "4"]).with_random([4]);
        assert_eq!(run(guess_number(1, 20), &mut console).ok(), Some(1));
        assert_eq!(console.reads(), 3);
    }
}
