//! The effect handler boundary.
//!
//! An [`EffectHandler`] performs the real action an effect description
//! names and returns its result. It is the only place where a program
//! touches the outside world: terminal I/O, randomness, clocks, or an
//! in-memory test double.
//!
//! # Contract
//!
//! - `perform` runs synchronously; the interpreter waits for it.
//! - A given description always yields a result of the same type, boxed as
//!   `Box<dyn Any>`. The value may differ between calls (user input, random
//!   numbers).
//! - Retries, timeouts and fallbacks are the handler's own business. The
//!   interpreter passes errors through untouched.

mod traced;

use std::any::Any;
use std::marker::PhantomData;

pub use traced::Traced;

/// Performs primitive effects for the interpreter.
///
/// # Examples
///
/// ```rust
/// use pure_io::{EffectHandler, Program, run};
/// use std::any::Any;
/// use std::convert::Infallible;
///
/// enum Counter { Next }
///
/// struct Sequence(u32);
///
/// impl EffectHandler<Counter> for Sequence {
///     type Error = Infallible;
///
///     fn perform(&mut self, _: Counter) -> Result<Box<dyn Any>, Infallible> {
///         self.0 += 1;
///         Ok(Box::new(self.0))
///     }
/// }
///
/// let program = Program::<Counter, u32>::suspend(Counter::Next)
///     .chain(|_| Program::<Counter, u32>::suspend(Counter::Next));
///
/// let mut sequence = Sequence(0);
/// assert_eq!(run(program, &mut sequence).unwrap(), 2);
/// assert_eq!(sequence.0, 2);
/// ```
pub trait EffectHandler<E> {
    /// The error raised when an effect cannot be performed.
    type Error;

    /// Performs `description` and returns its boxed result.
    ///
    /// # Errors
    ///
    /// Returns the handler's error when the effect cannot be performed.
    /// Interpretation stops at that effect.
    fn perform(&mut self, description: E) -> Result<Box<dyn Any>, Self::Error>;
}

impl<E, H> EffectHandler<E> for &mut H
where
    H: EffectHandler<E> + ?Sized,
{
    type Error = H::Error;

    #[inline]
    fn perform(&mut self, description: E) -> Result<Box<dyn Any>, Self::Error> {
        (**self).perform(description)
    }
}

/// An [`EffectHandler`] backed by a closure. Created by [`handler_fn`].
pub struct FnHandler<F, Err> {
    function: F,
    _error: PhantomData<fn() -> Err>,
}

/// Wraps a closure as an [`EffectHandler`].
///
/// # Examples
///
/// ```rust
/// use pure_io::{Program, handler_fn, run};
/// use std::any::Any;
/// use std::convert::Infallible;
///
/// #[derive(Debug)]
/// enum Greeting { Name }
///
/// let program = Program::<Greeting, String>::suspend(Greeting::Name)
///     .map(|name| format!("Hello {name}!"));
///
/// let handler = handler_fn(|_: Greeting| Ok::<Box<dyn Any>, Infallible>(Box::new("Ada".to_string())));
/// assert_eq!(run(program, handler).unwrap(), "Hello Ada!");
/// ```
pub const fn handler_fn<E, Err, F>(function: F) -> FnHandler<F, Err>
where
    F: FnMut(E) -> Result<Box<dyn Any>, Err>,
{
    FnHandler {
        function,
        _error: PhantomData,
    }
}

impl<E, Err, F> EffectHandler<E> for FnHandler<F, Err>
where
    F: FnMut(E) -> Result<Box<dyn Any>, Err>,
{
    type Error = Err;

    #[inline]
    fn perform(&mut self, description: E) -> Result<Box<dyn Any>, Err> {
        (self.function)(description)
    }
}
