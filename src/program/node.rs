//! Type-erased program nodes.
//!
//! A `Chain` node hides the result type of its source. To let the
//! interpreter rotate `Chain { Chain { .. }, .. }` without knowing any of the
//! intermediate types, every node carries its values as `Box<dyn Any>` and
//! every continuation downcasts its own input. The typed [`Program`] wrapper
//! guarantees that the downcasts line up; the only value that can arrive with
//! the wrong type is one produced by an effect handler.
//!
//! [`Program`]: super::Program

use std::any::Any;
use std::fmt::{self, Debug, Formatter};

use crate::error::TypeMismatch;

use super::ProgramKind;

/// A type-erased value flowing between nodes.
pub(crate) type Value = Box<dyn Any>;

/// A type-erased continuation from a result to the next node.
///
/// Called at most once, by the interpreter.
pub(crate) type Continuation<E> = Box<dyn FnOnce(Value) -> Result<Node<E>, TypeMismatch>>;

/// The closed union of program shapes.
pub(crate) enum Node<E> {
    /// The computation already has its result.
    Pure(Value),

    /// Run one primitive effect, then continue with its result.
    Effect {
        description: E,
        continuation: Continuation<E>,
    },

    /// Run `source` to completion, then continue with its result.
    Chain {
        source: Box<Node<E>>,
        continuation: Continuation<E>,
    },
}

impl<E> Node<E> {
    pub(crate) const fn kind(&self) -> ProgramKind {
        match self {
            Self::Pure(_) => ProgramKind::Pure,
            Self::Effect { .. } => ProgramKind::Effect,
            Self::Chain { .. } => ProgramKind::Chain,
        }
    }
}

/// Recovers a concrete value from a type-erased one.
pub(crate) fn downcast<T: 'static>(value: Value) -> Result<T, TypeMismatch> {
    value
        .downcast::<T>()
        .map(|boxed| *boxed)
        .map_err(|_| TypeMismatch::of::<T>())
}

impl<E: Debug> Debug for Node<E> {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::Pure(_) => formatter.debug_struct("Pure").finish_non_exhaustive(),
            Self::Effect { description, .. } => formatter
                .debug_struct("Effect")
                .field("description", description)
                .field("continuation", &"<continuation>")
                .finish(),
            // Only the source's shape: printing the whole spine would recurse
            // once per nested chain.
            Self::Chain { source, .. } => formatter
                .debug_struct("Chain")
                .field("source", &source.kind())
                .field("continuation", &"<continuation>")
                .finish(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn downcast_recovers_value() {
        let value: Value = Box::new(42_i64);
        assert_eq!(downcast::<i64>(value), Ok(42));
    }

    #[rstest]
    fn downcast_reports_expected_type() {
        let value: Value = Box::new("forty-two");
        assert_eq!(downcast::<i64>(value), Err(TypeMismatch::of::<i64>()));
    }

    #[rstest]
    fn debug_chain_prints_source_kind_only() {
        let node: Node<&str> = Node::Chain {
            source: Box::new(Node::Effect {
                description: "read",
                continuation: Box::new(|value| Ok(Node::Pure(value))),
            }),
            continuation: Box::new(|value| Ok(Node::Pure(value))),
        };
        assert_eq!(
            format!("{node:?}"),
            "Chain { source: Effect, continuation: \"<continuation>\" }"
        );
    }
}
