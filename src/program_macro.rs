//! `program!` macro for do-notation style program construction.
//!
//! The macro expands `pattern <= program; rest` into:
//! ```rust,ignore
//! program.chain(move |pattern| { /* rest */ })
//! ```
//!
//! Every step after the first is inside a continuation, so nothing past the
//! first program expression is built until the interpreter gets there.

/// Builds a [`Program`](crate::Program) in do-notation style.
///
/// # Syntax
///
/// ```text
/// program! {
///     pattern <= program;         // Bind (chain)
///     let pattern = expression;   // Pure let binding
///     program;                    // Run, discard the result
///     program                     // Final program
/// }
/// ```
///
/// `<-` cannot follow a pattern in a macro matcher, so bind uses `<=`.
///
/// # Examples
///
/// ```rust
/// use pure_io::{Program, program};
///
/// #[derive(Debug)]
/// enum Console { ReadLine, WriteLine(String) }
///
/// fn read_line() -> Program<Console, String> {
///     Program::suspend(Console::ReadLine)
/// }
///
/// fn write_line(line: String) -> Program<Console, ()> {
///     Program::suspend(Console::WriteLine(line))
/// }
///
/// let greeting: Program<Console, ()> = program! {
///     write_line("What's your name?".to_string());
///     name <= read_line();
///     let greeting = format!("Hello {name}!");
///     write_line(greeting)
/// };
/// ```
///
/// ```rust
/// use pure_io::{Program, handler_fn, program, run};
/// use std::any::Any;
/// use std::convert::Infallible;
///
/// let sum: Program<(), i32> = program! {
///     x <= Program::pure(5);
///     (a, b) <= Program::pure((x, 10));
///     _ <= Program::pure("ignored");
///     Program::pure(a + b)
/// };
///
/// let handler = handler_fn(|()| Ok::<Box<dyn Any>, Infallible>(Box::new(())));
/// assert_eq!(run(sum, handler).unwrap(), 15);
/// ```
#[macro_export]
macro_rules! program {
    // ==========================================================================
    // Terminal case
    // ==========================================================================

    ($result:expr) => {
        $result
    };

    // ==========================================================================
    // Bind: pattern <= program; rest
    // ==========================================================================

    ($pattern:ident <= $program:expr ; $($rest:tt)+) => {
        $program.chain(move |$pattern| {
            $crate::program!($($rest)+)
        })
    };

    (($($pattern:tt)*) <= $program:expr ; $($rest:tt)+) => {
        $program.chain(move |($($pattern)*)| {
            $crate::program!($($rest)+)
        })
    };

    (_ <= $program:expr ; $($rest:tt)+) => {
        $program.chain(move |_| {
            $crate::program!($($rest)+)
        })
    };

    // ==========================================================================
    // Let binding: let pattern = expression; rest
    // ==========================================================================

    (let $pattern:ident = $expr:expr ; $($rest:tt)+) => {
        {
            let $pattern = $expr;
            $crate::program!($($rest)+)
        }
    };

    (let ($($pattern:tt)*) = $expr:expr ; $($rest:tt)+) => {
        {
            let ($($pattern)*) = $expr;
            $crate::program!($($rest)+)
        }
    };

    // ==========================================================================
    // Sequence: program; rest
    // ==========================================================================

    ($program:expr ; $($rest:tt)+) => {
        $program.chain(move |_| {
            $crate::program!($($rest)+)
        })
    };
}
