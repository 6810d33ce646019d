//! Fault type - one error channel for structured errors and exceptions.
//!
//! Code that mixes value-returned errors with captured exceptions can carry
//! both in a [`Fault`]: either a structured error (by default an [`Error`])
//! or an [`Exception`]. `map` and `bind` work on the structured error; an
//! exception passes through them unchanged.
//!
//! # Examples
//!
//! ```rust
//! use cairn::control::{Error, Exception, Fault};
//!
//! let invalid: Fault = Fault::error(Error::new("amount must be positive"));
//! let prefixed = invalid.map(|error| Error::new(format!("transfer: {error}")));
//! assert_eq!(prefixed.to_string(), "transfer: amount must be positive");
//!
//! let crashed: Fault = Exception::new("ledger unavailable").into();
//! let untouched = crashed.clone().map(|_| Error::new("never used"));
//! assert_eq!(untouched, crashed);
//! ```

use std::fmt;

use super::either::Either;
use super::error::Error;
use super::exception::Exception;

/// A structured error or a captured exception.
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub struct Fault<T = Error> {
    value: Either<Exception, T>,
}

impl<T> Fault<T> {
    /// Wraps a structured error.
    #[inline]
    pub const fn error(error: T) -> Self {
        Self {
            value: Either::Right(error),
        }
    }

    /// Wraps a captured exception.
    #[inline]
    pub const fn exception(exception: Exception) -> Self {
        Self {
            value: Either::Left(exception),
        }
    }

    /// Returns `true` for a structured error.
    #[inline]
    pub const fn is_error(&self) -> bool {
        self.value.is_right()
    }

    /// Returns `true` for a captured exception.
    #[inline]
    pub const fn is_exception(&self) -> bool {
        self.value.is_left()
    }

    /// Exhaustive case analysis.
    #[inline]
    pub fn match_with<R, X, F>(self, exception: X, error: F) -> R
    where
        X: FnOnce(Exception) -> R,
        F: FnOnce(T) -> R,
    {
        self.value.match_with(exception, error)
    }

    /// Transforms a structured error.
    #[inline]
    pub fn map<U, F>(self, function: F) -> Fault<U>
    where
        F: FnOnce(T) -> U,
    {
        Fault {
            value: self.value.map(function),
        }
    }

    /// Replaces a structured error with the fault computed from it.
    ///
    /// An exception short-circuits and `function` is not invoked.
    #[inline]
    pub fn bind<U, F>(self, function: F) -> Fault<U>
    where
        F: FnOnce(T) -> Fault<U>,
    {
        Fault {
            value: self.value.bind(|error| function(error).value),
        }
    }

    /// Returns the underlying `Either`, exception on the left.
    #[inline]
    pub fn into_either(self) -> Either<Exception, T> {
        self.value
    }
}

impl<T> From<Either<Exception, T>> for Fault<T> {
    #[inline]
    fn from(value: Either<Exception, T>) -> Self {
        Self { value }
    }
}

impl<T> From<Exception> for Fault<T> {
    #[inline]
    fn from(exception: Exception) -> Self {
        Self::exception(exception)
    }
}

impl From<Error> for Fault {
    #[inline]
    fn from(error: Error) -> Self {
        Self::error(error)
    }
}

impl<T: fmt::Display> fmt::Display for Fault<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.value, formatter)
    }
}
