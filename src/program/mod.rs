//! The effect algebra.
//!
//! A [`Program<E, A>`] describes a computation that, once interpreted, yields
//! an `A`. `E` is the caller's effect description type, typically an enum
//! naming the primitive effects ("read a line", "write a line", ...).
//!
//! # Design
//!
//! ```text
//! Program<E, A> = Pure(A)
//!               | Effect { description: E, continuation: R -> Program<E, A> }
//!               | Chain  { source: Program<E, X>, continuation: X -> Program<E, A> }
//! ```
//!
//! [`Program::chain`] always allocates one `Chain` node, whatever the size of
//! the program it extends. Flattening left-nested chains is left to the
//! interpreter, which rotates them one node at a time, so building N chains
//! and running them costs O(N) in total.
//!
//! # Laziness
//!
//! Continuations are not called while a program is being built. A
//! definition such as "read a number, and read again if it does not parse"
//! is a finite value at every step:
//!
//! ```rust
//! use pure_io::Program;
//!
//! #[derive(Debug)]
//! enum Console { ReadLine }
//!
//! fn read_number() -> Program<Console, i64> {
//!     Program::<Console, String>::suspend(Console::ReadLine).chain(|line| {
//!         match line.trim().parse() {
//!             Ok(number) => Program::pure(number),
//!             Err(_) => read_number(),
//!         }
//!     })
//! }
//!
//! // Builds one Chain node; nothing is read and nothing recurses yet.
//! let program = read_number();
//! assert_eq!(program.kind(), pure_io::ProgramKind::Chain);
//! ```

mod node;

use std::fmt::{self, Debug, Formatter};
use std::marker::PhantomData;
use std::mem;

use static_assertions::assert_not_impl_any;

pub(crate) use node::{Continuation, Node, Value, downcast};

/// Which of the three shapes a program currently has.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProgramKind {
    /// The result is already known.
    Pure,
    /// One primitive effect followed by a continuation.
    Effect,
    /// A sub-program followed by a continuation.
    Chain,
}

/// An immutable description of a sequential, effectful computation.
///
/// # Type Parameters
///
/// * `E` - The effect description type handed to the
///   [`EffectHandler`](crate::EffectHandler)
/// * `A` - The result type of the computation
///
/// # Laws
///
/// Under [`run`](crate::run), `Program` satisfies the monad laws:
///
/// - **Left Identity**: `Program::pure(a).chain(f)` runs like `f(a)`
/// - **Right Identity**: `m.chain(Program::pure)` runs like `m`
/// - **Associativity**: `m.chain(f).chain(g)` runs like `m.chain(|x| f(x).chain(g))`
///
/// # Note
///
/// Continuations are boxed `FnOnce` closures without a `Send` bound, so a
/// program is built and interpreted on one thread.
#[must_use = "a program does nothing until it is run"]
pub struct Program<E, A> {
    node: Node<E>,
    _result: PhantomData<fn() -> A>,
}

impl<E, A> Program<E, A> {
    #[inline]
    const fn from_node(node: Node<E>) -> Self {
        Self {
            node,
            _result: PhantomData,
        }
    }

    #[inline]
    pub(crate) fn into_node(mut self) -> Node<E> {
        mem::replace(&mut self.node, Node::Pure(Box::new(())))
    }

    /// Returns the shape of this program without running anything.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use pure_io::{Program, ProgramKind};
    ///
    /// let program: Program<(), i32> = Program::pure(1);
    /// assert_eq!(program.kind(), ProgramKind::Pure);
    /// assert_eq!(program.map(|x| x + 1).kind(), ProgramKind::Chain);
    /// ```
    #[inline]
    pub const fn kind(&self) -> ProgramKind {
        self.node.kind()
    }
}

impl<E: 'static, A: 'static> Program<E, A> {
    /// Wraps a value with no effect.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use pure_io::{Program, handler_fn, run};
    /// use std::convert::Infallible;
    ///
    /// let program: Program<(), i32> = Program::pure(42);
    /// let handler = handler_fn(|()| -> Result<Box<dyn std::any::Any>, Infallible> {
    ///     unreachable!("no effects")
    /// });
    /// assert_eq!(run(program, handler).unwrap(), 42);
    /// ```
    #[inline]
    pub fn pure(value: A) -> Self {
        Self::from_node(Node::Pure(Box::new(value)))
    }

    /// Describes one primitive effect whose result is the program's result.
    ///
    /// Equivalent to `Program::effect(description, Program::pure)`. The handler
    /// must answer `description` with a boxed `A`; any other type stops the
    /// interpreter with [`TypeMismatch`](crate::TypeMismatch).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use pure_io::Program;
    ///
    /// enum Console { ReadLine }
    ///
    /// fn read_line() -> Program<Console, String> {
    ///     Program::suspend(Console::ReadLine)
    /// }
    /// ```
    #[inline]
    pub fn suspend(description: E) -> Self {
        Self::effect(description, Self::pure)
    }

    /// Describes one primitive effect with result type `R`, followed by
    /// `continuation`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use pure_io::Program;
    ///
    /// enum Console { ReadLine }
    ///
    /// fn read_length() -> Program<Console, usize> {
    ///     Program::effect(Console::ReadLine, |line: String| Program::pure(line.len()))
    /// }
    /// ```
    pub fn effect<R, F>(description: E, continuation: F) -> Self
    where
        R: 'static,
        F: FnOnce(R) -> Self + 'static,
    {
        Self::from_node(Node::Effect {
            description,
            continuation: Box::new(move |result| {
                let result = downcast::<R>(result)?;
                Ok(continuation(result).into_node())
            }),
        })
    }

    /// Sequential composition: run `self`, then the program `function` builds
    /// from its result.
    ///
    /// Allocates a single `Chain` node in O(1), however large `self` is.
    /// `function` is not called until the interpreter reaches it.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use pure_io::{Program, ProgramKind};
    ///
    /// let program: Program<(), i32> = Program::pure(21).chain(|x| Program::pure(x * 2));
    /// assert_eq!(program.kind(), ProgramKind::Chain);
    /// ```
    pub fn chain<B, F>(self, function: F) -> Program<E, B>
    where
        B: 'static,
        F: FnOnce(A) -> Program<E, B> + 'static,
    {
        Program::from_node(Node::Chain {
            source: Box::new(self.into_node()),
            continuation: Box::new(move |value| {
                let value = downcast::<A>(value)?;
                Ok(function(value).into_node())
            }),
        })
    }

    /// Alias for [`chain`](Self::chain).
    #[inline]
    pub fn and_then<B, F>(self, function: F) -> Program<E, B>
    where
        B: 'static,
        F: FnOnce(A) -> Program<E, B> + 'static,
    {
        self.chain(function)
    }

    /// Applies a function to the result.
    ///
    /// Defined as `self.chain(|a| Program::pure(function(a)))`; there is no
    /// shortcut for programs that are already pure.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use pure_io::{Program, handler_fn, run};
    /// use std::convert::Infallible;
    ///
    /// let program: Program<(), usize> = Program::pure("four").map(str::len);
    /// let handler = handler_fn(|()| Ok::<Box<dyn std::any::Any>, Infallible>(Box::new(())));
    /// assert_eq!(run(program, handler).unwrap(), 4);
    /// ```
    #[inline]
    pub fn map<B, F>(self, function: F) -> Program<E, B>
    where
        B: 'static,
        F: FnOnce(A) -> B + 'static,
    {
        self.chain(move |value| Program::pure(function(value)))
    }

    /// Runs `self`, discards its result, then runs `next`.
    ///
    /// `next` is already built; use [`chain`](Self::chain) when the next step
    /// is recursive and must be built lazily.
    #[inline]
    pub fn then<B: 'static>(self, next: Program<E, B>) -> Program<E, B> {
        self.chain(move |_| next)
    }
}

impl<E: Debug, A> Debug for Program<E, A> {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        self.node.fmt(formatter)
    }
}

// Unwinds the left spine of chains one node at a time, so dropping a
// program that was never run does not recurse once per `chain` call.
impl<E, A> Drop for Program<E, A> {
    fn drop(&mut self) {
        let mut node = mem::replace(&mut self.node, Node::Pure(Box::new(())));
        loop {
            match node {
                Node::Chain {
                    source,
                    continuation,
                } => {
                    drop(continuation);
                    node = *source;
                }
                _ => break,
            }
        }
    }
}

assert_not_impl_any!(Program<(), ()>: Send, Sync, Clone);
