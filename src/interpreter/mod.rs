//! The trampoline interpreter.
//!
//! [`run`] is the single place where effects happen. It keeps one "current
//! node" plus a stack of pending continuations, and reduces the node in a
//! loop, never by recursion:
//!
//! | current                              | pending    | next                              |
//! |--------------------------------------|------------|-----------------------------------|
//! | `Pure(v)`                            | empty      | return `v`                        |
//! | `Pure(v)`                            | `k` on top | pop `k`, `k(v)`                   |
//! | `Effect { d, k }`                    |            | `k(perform(d))`                   |
//! | `Chain { Pure(v), k }`               |            | `k(v)`                            |
//! | `Chain { Effect { d, k1 }, k }`      | push `k`   | `k1(perform(d))`                  |
//! | `Chain { Chain { s, k2 }, k }`       | push `k`   | `Chain { s, k2 }`                 |
//!
//! The last rule rotates a left-nested chain one level to the right: the
//! pending stack holds `x -> Chain { k2(x), k }` as data rather than as a
//! nested closure. A program built from N `chain` calls therefore runs in
//! O(N) steps, its depth never turns into call-stack depth, and abandoning a
//! run halfway drops the pending continuations one at a time. Each step
//! performs at most one effect, so effects run in the left-to-right order
//! the program was built in.
//!
//! # Examples
//!
//! ```rust
//! use pure_io::{Program, handler_fn, run};
//! use std::any::Any;
//! use std::convert::Infallible;
//!
//! fn count_to(n: u64) -> Program<(), u64> {
//!     let mut program = Program::pure(0);
//!     for _ in 0..n {
//!         program = program.chain(|x| Program::pure(x + 1));
//!     }
//!     program
//! }
//!
//! let handler = handler_fn(|()| Ok::<Box<dyn Any>, Infallible>(Box::new(())));
//! // This would overflow the stack with a recursive interpreter
//! assert_eq!(run(count_to(100_000), handler).unwrap(), 100_000);
//! ```

use static_assertions::assert_impl_all;
use tracing::{debug, trace, warn};

use crate::error::RunError;
use crate::handler::EffectHandler;
use crate::program::{Continuation, Node, Program, Value, downcast};

/// Counters describing the work an [`Interpreter`] has done.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct RunStats {
    /// Loop iterations; each reduces the current node once.
    pub steps: u64,
    /// Handler invocations.
    pub effects: u64,
    /// Left-nested chains rotated to the right.
    pub reassociations: u64,
}

impl RunStats {
    /// The counters accumulated since `earlier`.
    ///
    /// Counters that went backwards, because `earlier` was taken later,
    /// read as zero.
    #[must_use]
    pub const fn since(self, earlier: Self) -> Self {
        Self {
            steps: self.steps.saturating_sub(earlier.steps),
            effects: self.effects.saturating_sub(earlier.effects),
            reassociations: self.reassociations.saturating_sub(earlier.reassociations),
        }
    }
}

assert_impl_all!(RunStats: Copy, Send, Sync, Default);

/// Drives programs to completion against an owned handler.
///
/// Statistics accumulate across runs; use [`RunStats::since`] to isolate
/// one run.
///
/// # Examples
///
/// ```rust
/// use pure_io::{Interpreter, Program, handler_fn};
/// use std::any::Any;
/// use std::convert::Infallible;
///
/// let mut interpreter = Interpreter::new(handler_fn(|()| {
///     Ok::<Box<dyn Any>, Infallible>(Box::new(()))
/// }));
///
/// let program = Program::<(), ()>::suspend(()).then(Program::<(), ()>::suspend(()));
/// interpreter.run(program).unwrap();
///
/// assert_eq!(interpreter.stats().effects, 2);
/// ```
pub struct Interpreter<H> {
    handler: H,
    stats: RunStats,
}

impl<H> Interpreter<H> {
    /// Creates an interpreter around `handler`.
    pub const fn new(handler: H) -> Self {
        Self {
            handler,
            stats: RunStats {
                steps: 0,
                effects: 0,
                reassociations: 0,
            },
        }
    }

    /// Counters accumulated over every run so far.
    pub const fn stats(&self) -> RunStats {
        self.stats
    }

    /// Returns the handler.
    pub const fn handler(&self) -> &H {
        &self.handler
    }

    /// Returns the handler mutably.
    pub const fn handler_mut(&mut self) -> &mut H {
        &mut self.handler
    }

    /// Unwraps the handler.
    pub fn into_handler(self) -> H {
        self.handler
    }

    /// Interprets `program` to completion.
    ///
    /// # Errors
    ///
    /// - [`RunError::Handler`] as soon as the handler fails; later effects
    ///   are not performed.
    /// - [`RunError::TypeMismatch`] when the handler answers an effect with a
    ///   value of the wrong type.
    ///
    /// # Panics
    ///
    /// A panic raised by a continuation propagates unchanged.
    pub fn run<E, A>(&mut self, program: Program<E, A>) -> Result<A, RunError<H::Error>>
    where
        H: EffectHandler<E>,
        E: 'static,
        A: 'static,
    {
        let started = self.stats;
        debug!(kind = ?program.kind(), "run: start");

        let value = self.drive(program.into_node())?;
        let result = downcast::<A>(value)
            .inspect_err(|mismatch| warn!(%mismatch, "run: final result has the wrong type"))?;

        let stats = self.stats.since(started);
        debug!(
            steps = stats.steps,
            effects = stats.effects,
            reassociations = stats.reassociations,
            "run: complete"
        );
        Ok(result)
    }

    fn drive<E>(&mut self, program: Node<E>) -> Result<Value, RunError<H::Error>>
    where
        H: EffectHandler<E>,
        E: 'static,
    {
        let mut current = program;
        let mut pending: Vec<Continuation<E>> = Vec::new();

        loop {
            self.stats.steps += 1;
            current = match current {
                Node::Pure(value) => match pending.pop() {
                    Some(continuation) => continuation(value).inspect_err(log_mismatch)?,
                    None => return Ok(value),
                },
                Node::Effect {
                    description,
                    continuation,
                } => {
                    let result = self.perform(description)?;
                    continuation(result).inspect_err(log_mismatch)?
                }
                Node::Chain {
                    source,
                    continuation,
                } => match *source {
                    Node::Pure(value) => continuation(value).inspect_err(log_mismatch)?,
                    Node::Effect {
                        description,
                        continuation: inner,
                    } => {
                        pending.push(continuation);
                        let result = self.perform(description)?;
                        inner(result).inspect_err(log_mismatch)?
                    }
                    chain @ Node::Chain { .. } => {
                        self.stats.reassociations += 1;
                        trace!(step = self.stats.steps, pending = pending.len(), "reassociate");
                        pending.push(continuation);
                        chain
                    }
                },
            };
        }
    }

    fn perform<E>(&mut self, description: E) -> Result<Value, RunError<H::Error>>
    where
        H: EffectHandler<E>,
    {
        self.stats.effects += 1;
        trace!(step = self.stats.steps, effect = self.stats.effects, "perform");
        self.handler.perform(description).map_err(|error| {
            warn!(effect = self.stats.effects, "effect handler failed");
            RunError::Handler(error)
        })
    }
}

fn log_mismatch(mismatch: &crate::error::TypeMismatch) {
    warn!(%mismatch, "effect result has the wrong type");
}

/// Interprets `program` with `handler` and returns its result.
///
/// Pass `&mut handler` to keep the handler and inspect it afterwards.
///
/// # Errors
///
/// See [`Interpreter::run`].
///
/// # Examples
///
/// ```rust
/// use pure_io::{Program, handler_fn, run};
/// use std::any::Any;
/// use std::convert::Infallible;
///
/// #[derive(Debug, Clone, PartialEq)]
/// enum Log { Write(&'static str) }
///
/// let program = Program::<Log, ()>::suspend(Log::Write("A"))
///     .chain(|()| Program::<Log, ()>::suspend(Log::Write("B")));
///
/// let mut written = Vec::new();
/// let handler = handler_fn(|log: Log| {
///     let Log::Write(line) = log;
///     written.push(line);
///     Ok::<Box<dyn Any>, Infallible>(Box::new(()))
/// });
///
/// run(program, handler).unwrap();
/// assert_eq!(written, vec!["A", "B"]);
/// ```
pub fn run<E, A, H>(program: Program<E, A>, handler: H) -> Result<A, RunError<H::Error>>
where
    H: EffectHandler<E>,
    E: 'static,
    A: 'static,
{
    Interpreter::new(handler).run(program)
}

impl<E: 'static, A: 'static> Program<E, A> {
    /// Interprets this program with `handler`. Same as [`run`].
    ///
    /// # Errors
    ///
    /// See [`Interpreter::run`].
    pub fn interpret<H>(self, handler: H) -> Result<A, RunError<H::Error>>
    where
        H: EffectHandler<E>,
    {
        run(self, handler)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::TypeMismatch;
    use crate::handler::handler_fn;
    use rstest::rstest;
    use std::any::Any;
    use std::convert::Infallible;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum Cmd {
        Tick,
        Number,
    }

    fn tick() -> Program<Cmd, ()> {
        Program::suspend(Cmd::Tick)
    }

    fn number() -> Program<Cmd, i64> {
        Program::suspend(Cmd::Number)
    }

    fn recording(log: &mut Vec<Cmd>) -> impl EffectHandler<Cmd, Error = Infallible> + '_ {
        handler_fn(move |cmd: Cmd| -> Result<Box<dyn Any>, Infallible> {
            log.push(cmd);
            let answer: Box<dyn Any> = match cmd {
                Cmd::Tick => Box::new(()),
                Cmd::Number => Box::new(7_i64),
            };
            Ok(answer)
        })
    }

    #[rstest]
    fn pure_takes_one_step() {
        let mut log = Vec::new();
        let mut interpreter = Interpreter::new(recording(&mut log));
        let result = interpreter.run(Program::<Cmd, i32>::pure(42));

        assert_eq!(result.ok(), Some(42));
        assert_eq!(
            interpreter.stats(),
            RunStats {
                steps: 1,
                effects: 0,
                reassociations: 0
            }
        );
    }

    #[rstest]
    fn chained_effects_take_four_steps() {
        let mut log = Vec::new();
        let mut interpreter = Interpreter::new(recording(&mut log));
        let program = tick().chain(|()| number());

        assert_eq!(interpreter.run(program).ok(), Some(7));
        assert_eq!(interpreter.stats().steps, 4);
        assert_eq!(interpreter.stats().effects, 2);
        drop(interpreter);
        assert_eq!(log, vec![Cmd::Tick, Cmd::Number]);
    }

    #[rstest]
    fn left_nested_chain_is_rotated() {
        let mut log = Vec::new();
        let mut interpreter = Interpreter::new(recording(&mut log));
        let program = number()
            .chain(|x| Program::pure(x + 1))
            .chain(|x| Program::pure(x * 2));

        assert_eq!(interpreter.run(program).ok(), Some(16));
        assert_eq!(interpreter.stats().reassociations, 1);
    }

    #[rstest]
    fn stats_accumulate_across_runs() {
        let mut log = Vec::new();
        let mut interpreter = Interpreter::new(recording(&mut log));
        interpreter.run(tick()).expect("recording never fails");
        let after_first = interpreter.stats();
        interpreter.run(tick()).expect("recording never fails");

        assert_eq!(interpreter.stats().since(after_first).effects, 1);
        assert_eq!(interpreter.stats().effects, 2);
    }

    #[rstest]
    fn since_an_earlier_snapshot_never_underflows() {
        let later = RunStats {
            steps: 4,
            effects: 2,
            reassociations: 1,
        };
        assert_eq!(RunStats::default().since(later), RunStats::default());
        assert_eq!(later.since(RunStats::default()), later);
    }

    #[rstest]
    fn failing_handler_leaves_pending_continuations_unrun() {
        let mut handler = handler_fn(|cmd: Cmd| match cmd {
            Cmd::Tick => Ok::<Box<dyn Any>, Cmd>(Box::new(())),
            Cmd::Number => Err(cmd),
        });
        let program = tick()
            .then(number())
            .map(|x| x + 1)
            .chain(|_| -> Program<Cmd, i64> { unreachable!("number is refused") });

        let error = run(program, &mut handler).expect_err("number is refused");
        assert!(matches!(error, RunError::Handler(Cmd::Number)));
    }

    #[rstest]
    fn wrong_result_type_fails_fast() {
        let mut handler = handler_fn(|_: Cmd| Ok::<Box<dyn Any>, Infallible>(Box::new("seven")));
        let program = number().chain(|_| number());

        let error = run(program, &mut handler).expect_err("handler answers with &str");
        assert!(matches!(error, RunError::TypeMismatch(TypeMismatch { expected: "i64" })));
    }

    #[rstest]
    fn interpret_is_run() {
        let mut log = Vec::new();
        let result = number().map(|x| x * 6).interpret(recording(&mut log));
        assert_eq!(result.ok(), Some(42));
    }
}
