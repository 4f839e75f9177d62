//! Tracing middleware for effect handlers.
//!
//! Wraps any handler and logs every effect it performs, without touching the
//! program or the wrapped handler.

use std::any::Any;
use std::fmt::{Debug, Display};
use std::time::Instant;

use tracing::{debug, debug_span, trace, warn};

use super::EffectHandler;

/// Logs each performed effect, its duration and its outcome.
///
/// Effects are recorded inside a `perform` span carrying the description.
pub struct Traced<H> {
    inner: H,
    performed: u64,
}

impl<H> Traced<H> {
    /// Wraps `inner`.
    pub const fn new(inner: H) -> Self {
        Self { inner, performed: 0 }
    }

    /// Number of effects performed through this wrapper, failed ones included.
    pub const fn performed(&self) -> u64 {
        self.performed
    }

    /// Returns the wrapped handler.
    pub const fn inner(&self) -> &H {
        &self.inner
    }

    /// Unwraps the handler.
    pub fn into_inner(self) -> H {
        self.inner
    }
}

impl<E, H> EffectHandler<E> for Traced<H>
where
    E: Debug,
    H: EffectHandler<E>,
    H::Error: Display,
{
    type Error = H::Error;

    fn perform(&mut self, description: E) -> Result<Box<dyn Any>, Self::Error> {
        self.performed += 1;
        let _span = debug_span!("perform", index = self.performed, ?description).entered();

        let start = Instant::now();
        trace!("perform: start");
        let result = self.inner.perform(description);
        let duration = start.elapsed();
        match &result {
            Ok(_) => debug!(?duration, "perform: success"),
            Err(error) => warn!(?duration, error = %error, "perform: failed"),
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::handler::handler_fn;
    use rstest::rstest;

    #[derive(Debug)]
    struct Broken;

    impl Display for Broken {
        fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            formatter.write_str("broken")
        }
    }

    #[rstest]
    fn counts_and_forwards() {
        let inner = handler_fn(|value: i32| Ok::<Box<dyn Any>, Broken>(Box::new(value * 2)));
        let mut traced = Traced::new(inner);

        let first = traced.perform(4).expect("inner handler succeeds");
        let second = traced.perform(5).expect("inner handler succeeds");

        assert_eq!(first.downcast_ref::<i32>(), Some(&8));
        assert_eq!(second.downcast_ref::<i32>(), Some(&10));
        assert_eq!(traced.performed(), 2);
    }

    #[rstest]
    fn failures_pass_through() {
        let inner = handler_fn(|_: ()| Err::<Box<dyn Any>, Broken>(Broken));
        let mut traced = Traced::new(inner);

        assert!(traced.perform(()).is_err());
        assert_eq!(traced.performed(), 1);
    }
}
