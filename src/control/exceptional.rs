//! Exceptional type - a success value or a captured exception.
//!
//! `Exceptional<T>` is what a [`Deferred`](super::Deferred) computation
//! produces: `Success(T)` when it returned normally, `Raised(Exception)` when
//! it panicked or failed. Like [`Outcome`](super::Outcome) it short-circuits
//! on the failing case, but the failure is opaque and only ever rendered or
//! matched.

use std::fmt;
use std::ops::BitOr;

use super::exception::Exception;
use crate::typeclass::{Applicative, Functor, Monad, TypeConstructor};

/// A success value or a captured exception.
///
/// Equality compares the success values when both succeeded; two raised
/// exceptions are equal when their messages are.
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub enum Exceptional<T> {
    /// The computation returned a value.
    Success(T),
    /// The computation raised.
    Raised(Exception),
}

impl<T> Exceptional<T> {
    /// Wraps a success value.
    #[inline]
    pub const fn success(value: T) -> Self {
        Self::Success(value)
    }

    /// Wraps a captured exception.
    #[inline]
    pub const fn raised(exception: Exception) -> Self {
        Self::Raised(exception)
    }

    /// Returns `true` for a success.
    #[inline]
    pub const fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    /// Returns `true` for a raised exception.
    #[inline]
    pub const fn is_exception(&self) -> bool {
        matches!(self, Self::Raised(_))
    }

    /// Exhaustive case analysis.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use cairn::control::{Exception, Exceptional};
    ///
    /// let raised: Exceptional<i32> = Exceptional::raised(Exception::new("overflow"));
    /// let text = raised.match_with(|n| n.to_string(), |exception| exception.message().to_string());
    /// assert_eq!(text, "overflow");
    /// ```
    #[inline]
    pub fn match_with<R, S, X>(self, success: S, exception: X) -> R
    where
        S: FnOnce(T) -> R,
        X: FnOnce(Exception) -> R,
    {
        match self {
            Self::Success(value) => success(value),
            Self::Raised(raised) => exception(raised),
        }
    }

    /// Applies `function` to a success value.
    #[inline]
    pub fn map<R, F>(self, function: F) -> Exceptional<R>
    where
        F: FnOnce(T) -> R,
    {
        match self {
            Self::Success(value) => Exceptional::Success(function(value)),
            Self::Raised(exception) => Exceptional::Raised(exception),
        }
    }

    /// Chains a computation that may itself raise.
    #[inline]
    pub fn bind<R, F>(self, function: F) -> Exceptional<R>
    where
        F: FnOnce(T) -> Exceptional<R>,
    {
        match self {
            Self::Success(value) => function(value),
            Self::Raised(exception) => Exceptional::Raised(exception),
        }
    }

    /// Alias of [`bind`](Exceptional::bind).
    #[inline]
    pub fn and_then<R, F>(self, function: F) -> Exceptional<R>
    where
        F: FnOnce(T) -> Exceptional<R>,
    {
        self.bind(function)
    }

    /// Returns the success value, or `default` when an exception was raised.
    #[inline]
    pub fn get_or_else(self, default: T) -> T {
        match self {
            Self::Success(value) => value,
            Self::Raised(_) => default,
        }
    }

    /// Returns `self` when it succeeded, otherwise `alternative`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use cairn::control::{Exception, Exceptional};
    ///
    /// let primary: Exceptional<&str> = Exceptional::raised(Exception::new("timeout"));
    /// assert_eq!(primary.or_else(Exceptional::success("cached")), Exceptional::success("cached"));
    /// ```
    #[inline]
    #[must_use]
    pub fn or_else(self, alternative: Self) -> Self {
        match self {
            Self::Success(_) => self,
            Self::Raised(_) => alternative,
        }
    }

    /// Runs `action` on a success value and returns `self` unchanged.
    #[inline]
    #[must_use]
    pub fn inspect<F>(self, action: F) -> Self
    where
        F: FnOnce(&T),
    {
        if let Self::Success(value) = &self {
            action(value);
        }
        self
    }

    /// Describes the current state, as [`Display`](fmt::Display) does.
    pub fn state(&self) -> String
    where
        T: fmt::Display,
    {
        self.to_string()
    }
}

impl<T> BitOr for Exceptional<T> {
    type Output = Self;

    #[inline]
    fn bitor(self, alternative: Self) -> Self {
        self.or_else(alternative)
    }
}

impl<T> From<Exception> for Exceptional<T> {
    #[inline]
    fn from(exception: Exception) -> Self {
        Self::Raised(exception)
    }
}

impl<T: fmt::Display> fmt::Display for Exceptional<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Success(value) => write!(formatter, "Success: {value}"),
            Self::Raised(exception) => write!(formatter, "Exception: {exception}"),
        }
    }
}

impl<T> TypeConstructor for Exceptional<T> {
    type Inner = T;
    type WithType<B> = Exceptional<B>;
}

impl<T> Functor for Exceptional<T> {
    #[inline]
    fn fmap<B, F>(self, function: F) -> Exceptional<B>
    where
        F: FnOnce(T) -> B,
    {
        self.map(function)
    }

    #[inline]
    fn fmap_ref<B, F>(&self, function: F) -> Exceptional<B>
    where
        F: FnOnce(&T) -> B,
    {
        match self {
            Self::Success(value) => Exceptional::Success(function(value)),
            Self::Raised(exception) => Exceptional::Raised(exception.clone()),
        }
    }
}

impl<T> Applicative for Exceptional<T> {
    #[inline]
    fn pure<B>(value: B) -> Exceptional<B> {
        Exceptional::Success(value)
    }

    #[inline]
    fn map2<B, C, F>(self, other: Exceptional<B>, function: F) -> Exceptional<C>
    where
        F: FnOnce(T, B) -> C,
    {
        match (self, other) {
            (Self::Success(first), Exceptional::Success(second)) => {
                Exceptional::Success(function(first, second))
            }
            (Self::Raised(exception), _) | (Self::Success(_), Exceptional::Raised(exception)) => {
                Exceptional::Raised(exception)
            }
        }
    }

    #[inline]
    fn apply<B, Output>(self, other: Exceptional<B>) -> Exceptional<Output>
    where
        T: FnOnce(B) -> Output,
    {
        self.map2(other, |function, value| function(value))
    }
}

impl<T> Monad for Exceptional<T> {
    #[inline]
    fn flat_map<B, F>(self, function: F) -> Exceptional<B>
    where
        F: FnOnce(T) -> Exceptional<B>,
    {
        self.bind(function)
    }
}
