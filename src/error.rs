//! Error types for program interpretation.
//!
//! Building a [`Program`](crate::Program) cannot fail, so every error here is
//! an interpretation-time error. Handler failures are carried unchanged in
//! [`RunError::Handler`]. A continuation that panics is not caught: the panic
//! unwinds out of [`run`](crate::run) as is.

use static_assertions::assert_impl_all;
use thiserror::Error;

/// A handler answered an effect with a value of the wrong runtime type.
///
/// Each effect description maps to exactly one result type, fixed when the
/// effect is lifted with [`Program::suspend`](crate::Program::suspend) or
/// [`Program::effect`](crate::Program::effect). Receiving anything else means
/// the handler and the program disagree, and interpretation stops here
/// instead of continuing with a value nobody asked for.
///
/// # Examples
///
/// ```rust
/// use pure_io::TypeMismatch;
///
/// let error = TypeMismatch::of::<i64>();
/// assert_eq!(error.expected, "i64");
/// assert_eq!(
///     format!("{error}"),
///     "effect result type mismatch: expected `i64`"
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("effect result type mismatch: expected `{expected}`")]
pub struct TypeMismatch {
    /// Name of the type the program expected.
    pub expected: &'static str,
}

impl TypeMismatch {
    /// Creates a mismatch naming `T` as the expected type.
    #[inline]
    pub fn of<T: ?Sized>() -> Self {
        Self {
            expected: std::any::type_name::<T>(),
        }
    }
}

/// Error returned by [`run`](crate::run) and [`Interpreter::run`](crate::Interpreter::run).
///
/// `H` is the handler's own error type.
#[derive(Debug, Error)]
pub enum RunError<H> {
    /// The effect handler failed; interpretation stopped at that effect.
    #[error("effect handler failed")]
    Handler(#[source] H),

    /// The handler produced a result of the wrong type.
    #[error(transparent)]
    TypeMismatch(#[from] TypeMismatch),
}

impl<H> RunError<H> {
    /// Returns the handler error, if this is one.
    pub const fn handler_error(&self) -> Option<&H> {
        match self {
            Self::Handler(error) => Some(error),
            Self::TypeMismatch(_) => None,
        }
    }

    /// Consumes the error and returns the handler error, if this is one.
    pub fn into_handler_error(self) -> Option<H> {
        match self {
            Self::Handler(error) => Some(error),
            Self::TypeMismatch(_) => None,
        }
    }
}

assert_impl_all!(TypeMismatch: std::error::Error, Send, Sync, Copy);
