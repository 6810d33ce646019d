//! Outcome type - a success value or a typed failure.
//!
//! `Outcome<T, E>` holds either `Success(T)` or `Failure(E)`. When the error
//! type is left out it defaults to [`Error`], a message-carrying value, so
//! `Outcome<T>` reads as "a `T`, or something went wrong".
//!
//! Combinators short-circuit on `Failure`: once a step has failed, later
//! `map`/`bind` functions are never invoked and the first error travels to
//! the end of the pipeline untouched.
//!
//! # Examples
//!
//! ```rust
//! use std::cell::Cell;
//!
//! use cairn::control::{Error, Outcome};
//!
//! let greeting: Outcome<String> = Outcome::success("yay".to_string());
//! assert_eq!(greeting.bind(|s| Outcome::success(s.len())), Outcome::success(3));
//!
//! let calls = Cell::new(0);
//! let failed: Outcome<String> = Outcome::failure(Error::new("Boom!"));
//! let chained = failed.bind(|s| {
//!     calls.set(calls.get() + 1);
//!     Outcome::success(s.len())
//! });
//! assert_eq!(chained, Outcome::failure("Boom!"));
//! assert_eq!(calls.get(), 0);
//! ```

use std::any::type_name;
use std::fmt;
use std::ops::BitOr;

use super::error::{ContractError, Error, die};
use crate::typeclass::{Applicative, Functor, Monad, TypeConstructor};

/// A success value or a typed failure.
///
/// A `Failure` never equals a `Success`, whatever the payloads.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Outcome<T, E = Error> {
    /// The computation produced a value.
    Success(T),
    /// The computation failed with an error.
    Failure(E),
}

impl<T, E> Outcome<T, E> {
    // =========================================================================
    // Construction
    // =========================================================================

    /// Wraps a success value.
    #[inline]
    pub const fn success(value: T) -> Self {
        Self::Success(value)
    }

    /// Wraps a failure.
    ///
    /// Anything convertible into the error type is accepted, so an
    /// `Outcome<T>` can be failed straight from a `&str` or a `String`.
    #[inline]
    pub fn failure(error: impl Into<E>) -> Self {
        Self::Failure(error.into())
    }

    // =========================================================================
    // Queries
    // =========================================================================

    /// Returns `true` for a success.
    #[inline]
    pub const fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    /// Returns `true` for a failure.
    #[inline]
    pub const fn is_failure(&self) -> bool {
        matches!(self, Self::Failure(_))
    }

    /// Borrows both cases.
    #[inline]
    pub const fn as_ref(&self) -> Outcome<&T, &E> {
        match self {
            Self::Success(value) => Outcome::Success(value),
            Self::Failure(error) => Outcome::Failure(error),
        }
    }

    // =========================================================================
    // Transformation
    // =========================================================================

    /// Applies `function` to a success value.
    #[inline]
    pub fn map<R, F>(self, function: F) -> Outcome<R, E>
    where
        F: FnOnce(T) -> R,
    {
        match self {
            Self::Success(value) => Outcome::Success(function(value)),
            Self::Failure(error) => Outcome::Failure(error),
        }
    }

    /// Applies `function` to the error of a failure.
    #[inline]
    pub fn map_error<G, F>(self, function: F) -> Outcome<T, G>
    where
        F: FnOnce(E) -> G,
    {
        match self {
            Self::Success(value) => Outcome::Success(value),
            Self::Failure(error) => Outcome::Failure(function(error)),
        }
    }

    /// Maps with a two-argument function, leaving the second argument open.
    #[inline]
    pub fn map_curried<B, R, F>(self, function: F) -> Outcome<impl FnOnce(B) -> R, E>
    where
        F: FnOnce(T, B) -> R,
    {
        self.map(|first| move |second| function(first, second))
    }

    /// Maps with a three-argument function, leaving the last two arguments open.
    #[inline]
    pub fn map_curried3<'a, B, C, R, F>(
        self,
        function: F,
    ) -> Outcome<impl FnOnce(B) -> Box<dyn FnOnce(C) -> R + 'a>, E>
    where
        T: 'a,
        B: 'a,
        F: FnOnce(T, B, C) -> R + 'a,
    {
        self.map(|first| {
            move |second| -> Box<dyn FnOnce(C) -> R + 'a> {
                Box::new(move |third| function(first, second, third))
            }
        })
    }

    /// Chains a computation that may itself fail.
    ///
    /// `function` is not invoked on a failure.
    #[inline]
    pub fn bind<R, F>(self, function: F) -> Outcome<R, E>
    where
        F: FnOnce(T) -> Outcome<R, E>,
    {
        match self {
            Self::Success(value) => function(value),
            Self::Failure(error) => Outcome::Failure(error),
        }
    }

    /// Alias of [`bind`](Outcome::bind).
    #[inline]
    pub fn and_then<R, F>(self, function: F) -> Outcome<R, E>
    where
        F: FnOnce(T) -> Outcome<R, E>,
    {
        self.bind(function)
    }

    /// Binds, then combines the original value with the bound one.
    pub fn bind_project<B, R, F, P>(self, bind: F, project: P) -> Outcome<R, E>
    where
        F: FnOnce(&T) -> Outcome<B, E>,
        P: FnOnce(T, B) -> R,
    {
        self.bind(|value| {
            let bound = bind(&value);
            bound.map(|other| project(value, other))
        })
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

    /// Runs `action` on the error of a failure and returns `self` unchanged.
    #[inline]
    #[must_use]
    pub fn inspect_error<F>(self, action: F) -> Self
    where
        F: FnOnce(&E),
    {
        if let Self::Failure(error) = &self {
            action(error);
        }
        self
    }

    // =========================================================================
    // Elimination
    // =========================================================================

    /// Exhaustive case analysis.
    #[inline]
    pub fn match_with<R, Fail, Succeed>(self, failure: Fail, success: Succeed) -> R
    where
        Fail: FnOnce(E) -> R,
        Succeed: FnOnce(T) -> R,
    {
        match self {
            Self::Success(value) => success(value),
            Self::Failure(error) => failure(error),
        }
    }

    /// Returns the success value, or `default`.
    #[inline]
    pub fn get_or_else(self, default: T) -> T {
        match self {
            Self::Success(value) => value,
            Self::Failure(_) => default,
        }
    }

    /// Returns the success value, or computes a fallback from the error.
    #[inline]
    pub fn get_or_else_with<F>(self, default: F) -> T
    where
        F: FnOnce(E) -> T,
    {
        match self {
            Self::Success(value) => value,
            Self::Failure(error) => default(error),
        }
    }

    /// Returns `self` if it succeeded, otherwise `alternative`.
    ///
    /// Also available as the `|` operator.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use cairn::control::Outcome;
    ///
    /// let first: Outcome<i32> = Outcome::failure("first");
    /// let second: Outcome<i32> = Outcome::failure("second");
    /// let third: Outcome<i32> = Outcome::success(3);
    ///
    /// assert_eq!(first.clone() | third.clone(), Outcome::success(3));
    /// assert_eq!(first | second, Outcome::failure("second"));
    /// ```
    #[inline]
    #[must_use]
    pub fn or_else(self, alternative: Self) -> Self {
        match self {
            Self::Success(_) => self,
            Self::Failure(_) => alternative,
        }
    }

    /// Returns the success value.
    ///
    /// # Errors
    ///
    /// Returns [`ContractError::InvalidState`] on a failure.
    pub fn try_get(self) -> Result<T, ContractError>
    where
        E: fmt::Display,
    {
        match self {
            Self::Success(value) => Ok(value),
            Self::Failure(error) => Err(ContractError::InvalidState(format!(
                "Outcome<{}> failed: {error}",
                type_name::<T>()
            ))),
        }
    }

    /// Returns the success value, treating a failure as a broken invariant.
    ///
    /// # Panics
    ///
    /// Panics with [`ContractError::InvalidState`] on a failure.
    #[track_caller]
    pub fn get_or_die(self) -> T
    where
        E: fmt::Display,
    {
        match self.try_get() {
            Ok(value) => value,
            Err(violation) => die(violation),
        }
    }
}

impl<F, E> Outcome<F, E> {
    /// Applies the held function to the held argument.
    ///
    /// The function side is checked first: when both sides failed, the
    /// function's error is kept.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use cairn::control::Outcome;
    ///
    /// let add: Outcome<_> = Outcome::success(3).map_curried(|x: i32, y: i32| x + y);
    /// assert_eq!(add.apply(Outcome::success(4)), Outcome::success(7));
    ///
    /// let broken: Outcome<fn(i32) -> i32> = Outcome::failure("no function");
    /// let missing: Outcome<i32> = Outcome::failure("no argument");
    /// assert_eq!(broken.apply(missing), Outcome::failure("no function"));
    /// ```
    #[inline]
    pub fn apply<T, R>(self, argument: Outcome<T, E>) -> Outcome<R, E>
    where
        F: FnOnce(T) -> R,
    {
        match (self, argument) {
            (Self::Success(function), Outcome::Success(value)) => Outcome::Success(function(value)),
            (Self::Failure(error), _) | (Self::Success(_), Outcome::Failure(error)) => {
                Outcome::Failure(error)
            }
        }
    }

    /// Rewrites the error of a failed argument with the held function.
    ///
    /// A successful argument passes through. When `self` failed, its own
    /// error wins.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use cairn::control::{Error, Outcome};
    ///
    /// let annotate: Outcome<_> = Outcome::success(|error: Error| {
    ///     Error::new(format!("loading config: {}", error.message()))
    /// });
    /// let failed: Outcome<u16> = Outcome::failure("missing port");
    ///
    /// assert_eq!(annotate.apply_error(failed), Outcome::failure("loading config: missing port"));
    /// ```
    #[inline]
    pub fn apply_error<T>(self, argument: Outcome<T, E>) -> Outcome<T, E>
    where
        F: FnOnce(E) -> E,
    {
        match self {
            Self::Success(rewrite) => argument.map_error(rewrite),
            Self::Failure(error) => Outcome::Failure(error),
        }
    }
}

impl<T, E> Outcome<Vec<T>, E> {
    /// Maps every item to an `Outcome` and collects the values in order.
    ///
    /// The first failure is returned; `function` is not invoked for the items
    /// after it.
    pub fn traverse<I, F>(items: I, mut function: F) -> Self
    where
        I: IntoIterator,
        F: FnMut(I::Item) -> Outcome<T, E>,
    {
        items
            .into_iter()
            .try_fold(Vec::new(), |mut values, item| {
                Result::from(function(item)).map(|value| {
                    values.push(value);
                    values
                })
            })
            .into()
    }
}

impl<T, E> BitOr for Outcome<T, E> {
    type Output = Self;

    #[inline]
    fn bitor(self, alternative: Self) -> Self {
        self.or_else(alternative)
    }
}

// =============================================================================
// Conversions
// =============================================================================

impl<T, E> From<Result<T, E>> for Outcome<T, E> {
    #[inline]
    fn from(result: Result<T, E>) -> Self {
        match result {
            Ok(value) => Self::Success(value),
            Err(error) => Self::Failure(error),
        }
    }
}

impl<T, E> From<Outcome<T, E>> for Result<T, E> {
    #[inline]
    fn from(outcome: Outcome<T, E>) -> Self {
        match outcome {
            Outcome::Success(value) => Ok(value),
            Outcome::Failure(error) => Err(error),
        }
    }
}

impl<T> From<Error> for Outcome<T> {
    #[inline]
    fn from(error: Error) -> Self {
        Self::Failure(error)
    }
}

impl<T, E> FromIterator<Outcome<T, E>> for Outcome<Vec<T>, E> {
    fn from_iter<I: IntoIterator<Item = Outcome<T, E>>>(iter: I) -> Self {
        Self::traverse(iter, |element| element)
    }
}

impl<T: fmt::Display, E: fmt::Display> fmt::Display for Outcome<T, E> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Success(value) => write!(formatter, "Success: {value}"),
            Self::Failure(error) => write!(formatter, "Error: {error}"),
        }
    }
}

// =============================================================================
// Type Class Implementations
// =============================================================================

impl<T, E> TypeConstructor for Outcome<T, E> {
    type Inner = T;
    type WithType<B> = Outcome<B, E>;
}

impl<T, E: Clone> Functor for Outcome<T, E> {
    #[inline]
    fn fmap<B, F>(self, function: F) -> Outcome<B, E>
    where
        F: FnOnce(T) -> B,
    {
        self.map(function)
    }

    #[inline]
    fn fmap_ref<B, F>(&self, function: F) -> Outcome<B, E>
    where
        F: FnOnce(&T) -> B,
    {
        match self {
            Self::Success(value) => Outcome::Success(function(value)),
            Self::Failure(error) => Outcome::Failure(error.clone()),
        }
    }
}

impl<T, E: Clone> Applicative for Outcome<T, E> {
    #[inline]
    fn pure<B>(value: B) -> Outcome<B, E> {
        Outcome::Success(value)
    }

    #[inline]
    fn map2<B, C, F>(self, other: Outcome<B, E>, function: F) -> Outcome<C, E>
    where
        F: FnOnce(T, B) -> C,
    {
        match (self, other) {
            (Self::Success(first), Outcome::Success(second)) => {
                Outcome::Success(function(first, second))
            }
            (Self::Failure(error), _) | (Self::Success(_), Outcome::Failure(error)) => {
                Outcome::Failure(error)
            }
        }
    }

    #[inline]
    fn apply<B, Output>(self, other: Outcome<B, E>) -> Outcome<Output, E>
    where
        T: FnOnce(B) -> Output,
    {
        Self::apply(self, other)
    }
}

impl<T, E: Clone> Monad for Outcome<T, E> {
    #[inline]
    fn flat_map<B, F>(self, function: F) -> Outcome<B, E>
    where
        F: FnOnce(T) -> Outcome<B, E>,
    {
        self.bind(function)
    }
}
