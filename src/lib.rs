//! # pure-io
//!
//! Pure effect descriptions with a stack-safe trampoline interpreter.
//!
//! ## Overview
//!
//! A [`Program`] is an immutable value describing a sequential, effectful
//! computation. Building one never performs a side effect: reading a line,
//! writing a line or drawing a random number is only *described*. The
//! [`Interpreter`] is the single execution boundary. It drives a program to
//! completion in a loop, handing each primitive effect to an
//! [`EffectHandler`] supplied by the caller.
//!
//! - **Effect Algebra**: [`Program::pure`], [`Program::suspend`],
//!   [`Program::chain`], [`Program::map`] and the [`program!`] macro
//! - **Interpreter**: [`run`] and [`Interpreter`], stack-safe for programs of
//!   any sequential length, linear in the number of `chain` nodes
//! - **Handlers**: the [`EffectHandler`] trait, [`handler_fn`] and the
//!   [`Traced`] middleware
//!
//! ## Feature Flags
//!
//! - `console`: console effect vocabulary, stdio handler, scripted handler
//! - `random`: random integers for the stdio handler
//! - `apps`: example programs built on the console vocabulary
//! - `cli`: the `pure-io` binary
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use pure_io::prelude::*;
//! use std::any::Any;
//! use std::convert::Infallible;
//!
//! #[derive(Debug)]
//! enum Counter { Next }
//!
//! fn next() -> Program<Counter, u32> {
//!     Program::suspend(Counter::Next)
//! }
//!
//! let program = next().chain(|a| next().map(move |b| a + b));
//!
//! let mut count: u32 = 0;
//! let handler = handler_fn(|_: Counter| {
//!     count += 1;
//!     Ok::<Box<dyn Any>, Infallible>(Box::new(count))
//! });
//!
//! assert_eq!(run(program, handler).unwrap(), 3);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
// Note: Disabling redundant_closure_for_method_calls due to clippy 0.1.92 panic bug
#![allow(clippy::redundant_closure_for_method_calls)]

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types and traits.
///
/// # Usage
///
/// ```rust
/// use pure_io::prelude::*;
/// ```
pub mod prelude {
    pub use crate::error::{RunError, TypeMismatch};
    pub use crate::handler::{EffectHandler, FnHandler, Traced, handler_fn};
    pub use crate::interpreter::{Interpreter, RunStats, run};
    pub use crate::program::{Program, ProgramKind};
    pub use crate::program;

    #[cfg(feature = "console")]
    pub use crate::console::*;

    #[cfg(feature = "apps")]
    pub use crate::apps::*;
}

pub mod error;
pub mod handler;
pub mod interpreter;
pub mod program;

mod program_macro;

#[cfg(feature = "console")]
pub mod console;

#[cfg(feature = "apps")]
pub mod apps;

pub use error::{RunError, TypeMismatch};
pub use handler::{EffectHandler, FnHandler, Traced, handler_fn};
pub use interpreter::{Interpreter, RunStats, run};
pub use program::{Program, ProgramKind};
