//! Either type - a value that is one of two types.
//!
//! `Either<L, R>` holds a `Left(L)` or a `Right(R)`. Unlike
//! [`Outcome`](super::Outcome) neither side means "error", but monadic
//! chaining is right-biased: [`bind`](Either::bind) continues through a
//! `Right` and a `Left` short-circuits. [`bimap`](Either::bimap) transforms
//! both sides independently.
//!
//! # Examples
//!
//! ```rust
//! use cairn::control::{Either, IntoEither, left, right};
//!
//! let parsed: Either<String, i32> = right(42).into();
//! let rejected: Either<String, i32> = left("not a number".to_string()).into();
//!
//! assert_eq!(parsed.clone().map(|n| n + 1), Either::Right(43));
//! assert_eq!(rejected.clone().map(|n| n + 1), rejected);
//!
//! // The first `Right` wins.
//! assert_eq!(rejected | parsed, Either::Right(42));
//!
//! assert_eq!(7.as_right::<String>().to_string(), "7");
//! ```

use std::fmt;
use std::ops::BitOr;

use super::maybe::Maybe;
use crate::typeclass::{Applicative, Functor, Monad, TypeConstructor};

/// A value that is either `Left(L)` or `Right(R)`.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Either<L, R> {
    /// The left case; a `Left` short-circuits `bind`.
    Left(L),
    /// The right case; `bind` and `map` continue through it.
    Right(R),
}

/// A left value whose right type is not known yet.
///
/// Converts into `Either<L, R>` for any `R`.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct LeftMarker<L>(pub L);

/// A right value whose left type is not known yet.
///
/// Converts into `Either<L, R>` for any `L`.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct RightMarker<R>(pub R);

/// Marks `value` as a left value.
#[inline]
pub const fn left<L>(value: L) -> LeftMarker<L> {
    LeftMarker(value)
}

/// Marks `value` as a right value.
#[inline]
pub const fn right<R>(value: R) -> RightMarker<R> {
    RightMarker(value)
}

impl<L, R> From<LeftMarker<L>> for Either<L, R> {
    #[inline]
    fn from(marker: LeftMarker<L>) -> Self {
        Self::Left(marker.0)
    }
}

impl<L, R> From<RightMarker<R>> for Either<L, R> {
    #[inline]
    fn from(marker: RightMarker<R>) -> Self {
        Self::Right(marker.0)
    }
}

impl<L: PartialEq, R> PartialEq<LeftMarker<L>> for Either<L, R> {
    #[inline]
    fn eq(&self, marker: &LeftMarker<L>) -> bool {
        matches!(self, Self::Left(value) if *value == marker.0)
    }
}

impl<L, R: PartialEq> PartialEq<RightMarker<R>> for Either<L, R> {
    #[inline]
    fn eq(&self, marker: &RightMarker<R>) -> bool {
        matches!(self, Self::Right(value) if *value == marker.0)
    }
}

impl<L: fmt::Display> fmt::Display for LeftMarker<L> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "Left({})", self.0)
    }
}

impl<R: fmt::Display> fmt::Display for RightMarker<R> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "Right({})", self.0)
    }
}

/// Extension trait placing any value on one side of an [`Either`].
pub trait IntoEither: Sized {
    /// Wraps `self` as a `Left`.
    #[inline]
    fn as_left<R>(self) -> Either<Self, R> {
        Either::Left(self)
    }

    /// Wraps `self` as a `Right`.
    #[inline]
    fn as_right<L>(self) -> Either<L, Self> {
        Either::Right(self)
    }
}

impl<T> IntoEither for T {}

impl<L, R> Either<L, R> {
    // =========================================================================
    // Queries
    // =========================================================================

    /// Returns `true` for a `Left`.
    #[inline]
    pub const fn is_left(&self) -> bool {
        matches!(self, Self::Left(_))
    }

    /// Returns `true` for a `Right`.
    #[inline]
    pub const fn is_right(&self) -> bool {
        matches!(self, Self::Right(_))
    }

    /// The truth value of an `Either`: `Right` is truthy.
    ///
    /// ```rust
    /// use cairn::control::Either;
    ///
    /// let found: Either<&str, u32> = Either::Right(1);
    /// if found.is_truthy() {
    ///     assert_eq!(found.right(), cairn::control::Maybe::some(1));
    /// }
    /// ```
    #[inline]
    pub const fn is_truthy(&self) -> bool {
        self.is_right()
    }

    // =========================================================================
    // Projection
    // =========================================================================

    /// Returns the left value, if any.
    #[inline]
    pub fn left(self) -> Maybe<L> {
        match self {
            Self::Left(value) => Maybe::Some(value),
            Self::Right(_) => Maybe::None,
        }
    }

    /// Returns the right value, if any.
    #[inline]
    pub fn right(self) -> Maybe<R> {
        match self {
            Self::Left(_) => Maybe::None,
            Self::Right(value) => Maybe::Some(value),
        }
    }

    /// Borrows the left value, if any.
    #[inline]
    pub const fn left_ref(&self) -> Maybe<&L> {
        match self {
            Self::Left(value) => Maybe::Some(value),
            Self::Right(_) => Maybe::None,
        }
    }

    /// Borrows the right value, if any.
    #[inline]
    pub const fn right_ref(&self) -> Maybe<&R> {
        match self {
            Self::Left(_) => Maybe::None,
            Self::Right(value) => Maybe::Some(value),
        }
    }

    // =========================================================================
    // Transformation
    // =========================================================================

    /// Applies `function` to a right value.
    #[inline]
    pub fn map<T, F>(self, function: F) -> Either<L, T>
    where
        F: FnOnce(R) -> T,
    {
        match self {
            Self::Left(value) => Either::Left(value),
            Self::Right(value) => Either::Right(function(value)),
        }
    }

    /// Applies `function` to a left value.
    #[inline]
    pub fn map_left<T, F>(self, function: F) -> Either<T, R>
    where
        F: FnOnce(L) -> T,
    {
        match self {
            Self::Left(value) => Either::Left(function(value)),
            Self::Right(value) => Either::Right(value),
        }
    }

    /// Transforms whichever side is present.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use cairn::control::Either;
    ///
    /// let left: Either<i32, &str> = Either::Left(2);
    /// assert_eq!(left.bimap(|n| n * 10, str::len), Either::Left(20));
    /// ```
    #[inline]
    pub fn bimap<T, U, F, G>(self, left_function: F, right_function: G) -> Either<T, U>
    where
        F: FnOnce(L) -> T,
        G: FnOnce(R) -> U,
    {
        match self {
            Self::Left(value) => Either::Left(left_function(value)),
            Self::Right(value) => Either::Right(right_function(value)),
        }
    }

    /// Chains through a right value; a `Left` is returned as is.
    #[inline]
    pub fn bind<T, F>(self, function: F) -> Either<L, T>
    where
        F: FnOnce(R) -> Either<L, T>,
    {
        match self {
            Self::Left(value) => Either::Left(value),
            Self::Right(value) => function(value),
        }
    }

    /// Alias of [`bind`](Either::bind).
    #[inline]
    pub fn and_then<T, F>(self, function: F) -> Either<L, T>
    where
        F: FnOnce(R) -> Either<L, T>,
    {
        self.bind(function)
    }

    /// Exchanges the sides.
    #[inline]
    pub fn swap(self) -> Either<R, L> {
        match self {
            Self::Left(value) => Either::Right(value),
            Self::Right(value) => Either::Left(value),
        }
    }

    // =========================================================================
    // Elimination
    // =========================================================================

    /// Exhaustive case analysis.
    #[inline]
    pub fn match_with<T, F, G>(self, left: F, right: G) -> T
    where
        F: FnOnce(L) -> T,
        G: FnOnce(R) -> T,
    {
        match self {
            Self::Left(value) => left(value),
            Self::Right(value) => right(value),
        }
    }

    /// Returns `self` if it is a `Right`, otherwise `alternative`.
    ///
    /// When both are `Left`, the last one is returned. Also available as the
    /// `|` operator.
    #[inline]
    #[must_use]
    pub fn or_else(self, alternative: Self) -> Self {
        match self {
            Self::Right(_) => self,
            Self::Left(_) => alternative,
        }
    }
}

impl<L, F> Either<L, F> {
    /// Applies a right-held function to a right-held argument.
    ///
    /// The function side is checked first, so of two `Left`s the function's
    /// is kept.
    #[inline]
    pub fn apply<T, R>(self, argument: Either<L, T>) -> Either<L, R>
    where
        F: FnOnce(T) -> R,
    {
        match (self, argument) {
            (Self::Right(function), Either::Right(value)) => Either::Right(function(value)),
            (Self::Left(value), _) | (Self::Right(_), Either::Left(value)) => Either::Left(value),
        }
    }
}

impl<L, R> BitOr for Either<L, R> {
    type Output = Self;

    #[inline]
    fn bitor(self, alternative: Self) -> Self {
        self.or_else(alternative)
    }
}

// =============================================================================
// Conversions
// =============================================================================

impl<L, R> From<Result<R, L>> for Either<L, R> {
    #[inline]
    fn from(result: Result<R, L>) -> Self {
        match result {
            Ok(value) => Self::Right(value),
            Err(value) => Self::Left(value),
        }
    }
}

impl<L, R> From<Either<L, R>> for Result<R, L> {
    #[inline]
    fn from(either: Either<L, R>) -> Self {
        match either {
            Either::Left(value) => Err(value),
            Either::Right(value) => Ok(value),
        }
    }
}

impl<L: fmt::Display, R: fmt::Display> fmt::Display for Either<L, R> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Left(value) => value.fmt(formatter),
            Self::Right(value) => value.fmt(formatter),
        }
    }
}

// =============================================================================
// Type Class Implementations
// =============================================================================

impl<L, R> TypeConstructor for Either<L, R> {
    type Inner = R;
    type WithType<B> = Either<L, B>;
}

impl<L: Clone, R> Functor for Either<L, R> {
    #[inline]
    fn fmap<B, F>(self, function: F) -> Either<L, B>
    where
        F: FnOnce(R) -> B,
    {
        self.map(function)
    }

    #[inline]
    fn fmap_ref<B, F>(&self, function: F) -> Either<L, B>
    where
        F: FnOnce(&R) -> B,
    {
        match self {
            Self::Left(value) => Either::Left(value.clone()),
            Self::Right(value) => Either::Right(function(value)),
        }
    }
}

impl<L: Clone, R> Applicative for Either<L, R> {
    #[inline]
    fn pure<B>(value: B) -> Either<L, B> {
        Either::Right(value)
    }

    #[inline]
    fn map2<B, C, F>(self, other: Either<L, B>, function: F) -> Either<L, C>
    where
        F: FnOnce(R, B) -> C,
    {
        match (self, other) {
            (Self::Right(first), Either::Right(second)) => Either::Right(function(first, second)),
            (Self::Left(value), _) | (Self::Right(_), Either::Left(value)) => Either::Left(value),
        }
    }

    #[inline]
    fn apply<B, Output>(self, other: Either<L, B>) -> Either<L, Output>
    where
        R: FnOnce(B) -> Output,
    {
        Self::apply(self, other)
    }
}

impl<L: Clone, R> Monad for Either<L, R> {
    #[inline]
    fn flat_map<B, F>(self, function: F) -> Either<L, B>
    where
        F: FnOnce(R) -> Either<L, B>,
    {
        self.bind(function)
    }
}
