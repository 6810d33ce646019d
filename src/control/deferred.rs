//! Deferred computations that capture what they raise.
//!
//! A [`Deferred`] wraps a zero-argument computation. Nothing runs until
//! [`run`](Deferred::run), which executes it and turns the result into an
//! [`Exceptional`]: a normal return becomes `Success`, a panic or a returned
//! error becomes `Raised`. This is the one place where the library catches
//! panics.
//!
//! # Examples
//!
//! ```rust
//! use cairn::control::Deferred;
//!
//! let divisor = std::hint::black_box(0);
//! let outcome = Deferred::new(move || 10 / divisor).run();
//!
//! assert!(outcome.is_exception());
//! let text = outcome.match_with(|n| n.to_string(), |exception| exception.message().to_string());
//! assert_eq!(text, "attempt to divide by zero");
//! ```

use std::error::Error as StdError;
use std::fmt;
use std::panic::{self, AssertUnwindSafe};

use super::exception::Exception;
use super::exceptional::Exceptional;

/// A computation that has not run yet.
pub struct Deferred<'a, T> {
    computation: Box<dyn FnOnce() -> Result<T, Exception> + 'a>,
}

impl<'a, T> Deferred<'a, T> {
    /// Defers a computation that signals failure by panicking.
    pub fn new<F>(computation: F) -> Self
    where
        F: FnOnce() -> T + 'a,
    {
        Self {
            computation: Box::new(move || Ok(computation())),
        }
    }

    /// Defers a computation that may return an error.
    ///
    /// An `Err` is captured the same way as a panic, with the error kept as
    /// the exception's source.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use cairn::control::Deferred;
    ///
    /// let parsed = Deferred::fallible(|| "12x".parse::<u8>()).run();
    /// assert_eq!(parsed.state(), "Exception: invalid digit found in string");
    /// ```
    pub fn fallible<E, F>(computation: F) -> Self
    where
        E: StdError + Send + Sync + 'static,
        F: FnOnce() -> Result<T, E> + 'a,
    {
        Self {
            computation: Box::new(move || computation().map_err(Exception::from_error)),
        }
    }

    /// Runs the computation and captures whatever it raises.
    pub fn run(self) -> Exceptional<T> {
        let computation = self.computation;
        match panic::catch_unwind(AssertUnwindSafe(computation)) {
            Ok(Ok(value)) => Exceptional::Success(value),
            Ok(Err(exception)) => {
                tracing::debug!(%exception, "deferred computation returned an error");
                Exceptional::Raised(exception)
            }
            Err(payload) => {
                let exception = Exception::from_panic(payload);
                tracing::debug!(%exception, "deferred computation panicked");
                Exceptional::Raised(exception)
            }
        }
    }
}

impl<T> fmt::Debug for Deferred<'_, T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_struct("Deferred").finish_non_exhaustive()
    }
}

/// Runs `computation` at once, capturing a panic as an exception.
#[inline]
pub fn try_run<T, F>(computation: F) -> Exceptional<T>
where
    F: FnOnce() -> T,
{
    Deferred::new(computation).run()
}
