//! Example console programs.
//!
//! Every function here only builds a [`ConsoleProgram`](crate::console::ConsoleProgram).
//! Nothing is read, written or drawn until the program is handed to
//! [`run`](crate::run), so the same program runs against
//! [`StdioHandler`](crate::console::StdioHandler) in the binary and against
//! [`ScriptedConsole`](crate::console::ScriptedConsole) in tests.
//!
//! The loops ("read again until the input parses", "guess again") are
//! ordinary recursive functions. Each recursive call sits inside a
//! continuation, so building a program never recurses, and the interpreter
//! runs it in constant stack space.

mod countdown;
mod greeting;
mod guess;
mod input;
mod menu;

pub use countdown::{COUNTDOWN_MAX, COUNTDOWN_MIN, countdown, countdown_app};
pub use greeting::hello;
pub use guess::guess_number;
pub use input::{get_int, get_int_between, parse_int, prompt_int_between};
pub use menu::{MenuItem, menu};
