//! Maybe type - presence or absence of a value.
//!
//! `Maybe<T>` is either `Some(T)` or `None`. It plays the role of a nullable
//! reference without ever holding a null: absence is a case of the type, and
//! the combinators below carry it through a pipeline until a single final
//! [`match_with`](Maybe::match_with) or fallback extracts a plain value.
//!
//! `Maybe` is distinct from [`Option`] so that it can carry the combinator
//! vocabulary shared with the other containers (`bind`, `apply`,
//! `match_with`, `get_or_die`, `traverse`). Both convert into each other
//! losslessly.
//!
//! # Examples
//!
//! ```rust
//! use cairn::control::{Maybe, none};
//!
//! let name = Maybe::some("John");
//! assert_eq!(name.map(str::len), Maybe::some(4));
//!
//! let missing: Maybe<i32> = none().into();
//! assert_eq!(missing.map(|n| n * 2), Maybe::none());
//!
//! let greeting = Maybe::some("John").match_with(
//!     || "Who are you?".to_string(),
//!     |name| format!("Hello, {name}"),
//! );
//! assert_eq!(greeting, "Hello, John");
//! ```

use std::any::type_name;
use std::fmt;

use super::error::{ContractError, die};
use crate::typeclass::{Applicative, Functor, Monad, TypeConstructor};

/// A value that may be absent.
///
/// Two `Maybe`s are equal when both are `None`, or both are `Some` holding
/// equal values. `None` orders before any `Some`.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Maybe<T> {
    /// No value.
    None,
    /// A present value.
    Some(T),
}

/// The type-less absent value.
///
/// A `NoneMarker` converts into `Maybe<T>` for any `T`, so absence can be
/// written before the element type is known:
///
/// ```rust
/// use cairn::control::{Maybe, NONE, NoneMarker};
///
/// fn lookup(key: &str) -> Maybe<u32> {
///     if key == "answer" { Maybe::some(42) } else { NONE.into() }
/// }
///
/// assert_eq!(lookup("question"), NONE);
/// assert_eq!(lookup("question"), NoneMarker::of::<u32>());
/// assert_eq!(lookup("answer"), Maybe::some(42));
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
pub struct NoneMarker;

/// The shared [`NoneMarker`] value.
pub const NONE: NoneMarker = NoneMarker;

/// Returns the [`NoneMarker`], convertible into `Maybe<T>` for any `T`.
#[inline]
pub const fn none() -> NoneMarker {
    NoneMarker
}

impl NoneMarker {
    /// Fixes the element type of the marker.
    #[inline]
    pub const fn of<T>() -> Maybe<T> {
        Maybe::None
    }
}

impl<T> From<NoneMarker> for Maybe<T> {
    #[inline]
    fn from(_: NoneMarker) -> Self {
        Self::None
    }
}

impl<T> PartialEq<NoneMarker> for Maybe<T> {
    #[inline]
    fn eq(&self, _: &NoneMarker) -> bool {
        self.is_none()
    }
}

impl<T> Maybe<T> {
    // =========================================================================
    // Construction
    // =========================================================================

    /// Wraps a present value.
    #[inline]
    pub const fn some(value: T) -> Self {
        Self::Some(value)
    }

    /// Returns the absent value.
    #[inline]
    pub const fn none() -> Self {
        Self::None
    }

    /// Wraps a value that must be present.
    ///
    /// This is the checked boundary for values coming from an `Option`.
    ///
    /// # Errors
    ///
    /// Returns [`ContractError::InvalidArgument`] when `value` is `None`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use cairn::control::{ContractError, Maybe};
    ///
    /// assert_eq!(Maybe::try_some(Some(1)), Ok(Maybe::some(1)));
    /// assert!(matches!(
    ///     Maybe::<i32>::try_some(None),
    ///     Err(ContractError::InvalidArgument(_))
    /// ));
    /// ```
    pub fn try_some(value: Option<T>) -> Result<Self, ContractError> {
        value.map(Self::Some).ok_or_else(|| {
            ContractError::InvalidArgument(format!(
                "cannot wrap an absent {} as Some",
                type_name::<T>()
            ))
        })
    }

    // =========================================================================
    // Queries
    // =========================================================================

    /// Returns `true` if a value is present.
    #[inline]
    pub const fn is_some(&self) -> bool {
        matches!(self, Self::Some(_))
    }

    /// Returns `true` if no value is present.
    #[inline]
    pub const fn is_none(&self) -> bool {
        matches!(self, Self::None)
    }

    /// Borrows the held value.
    #[inline]
    pub const fn as_ref(&self) -> Maybe<&T> {
        match self {
            Self::Some(value) => Maybe::Some(value),
            Self::None => Maybe::None,
        }
    }

    // =========================================================================
    // Transformation
    // =========================================================================

    /// Applies `function` to the held value; `None` is returned untouched.
    #[inline]
    pub fn map<R, F>(self, function: F) -> Maybe<R>
    where
        F: FnOnce(T) -> R,
    {
        match self {
            Self::Some(value) => Maybe::Some(function(value)),
            Self::None => Maybe::None,
        }
    }

    /// Maps with a two-argument function, leaving the second argument open.
    ///
    /// The result holds a one-argument function, ready for
    /// [`apply`](Maybe::apply).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use cairn::control::Maybe;
    ///
    /// let add = Maybe::some(3).map_curried(|x: i32, y: i32| x + y);
    /// assert_eq!(add.apply(Maybe::some(4)), Maybe::some(7));
    /// ```
    #[inline]
    pub fn map_curried<B, R, F>(self, function: F) -> Maybe<impl FnOnce(B) -> R>
    where
        F: FnOnce(T, B) -> R,
    {
        self.map(|first| move |second| function(first, second))
    }

    /// Maps with a three-argument function, leaving the last two arguments open.
    ///
    /// The innermost step is boxed, so two [`apply`](Maybe::apply) calls
    /// complete it.
    #[inline]
    pub fn map_curried3<'a, B, C, R, F>(
        self,
        function: F,
    ) -> Maybe<impl FnOnce(B) -> Box<dyn FnOnce(C) -> R + 'a>>
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

    /// Chains a computation that may itself be absent.
    ///
    /// `function` is not invoked when `self` is `None`.
    #[inline]
    pub fn bind<R, F>(self, function: F) -> Maybe<R>
    where
        F: FnOnce(T) -> Maybe<R>,
    {
        match self {
            Self::Some(value) => function(value),
            Self::None => Maybe::None,
        }
    }

    /// Alias of [`bind`](Maybe::bind).
    #[inline]
    pub fn and_then<R, F>(self, function: F) -> Maybe<R>
    where
        F: FnOnce(T) -> Maybe<R>,
    {
        self.bind(function)
    }

    /// Binds, then combines the original value with the bound one.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use cairn::control::Maybe;
    ///
    /// let pair = Maybe::some(2).bind_project(|n| Maybe::some(n * 10), |n, tens| (n, tens));
    /// assert_eq!(pair, Maybe::some((2, 20)));
    /// ```
    pub fn bind_project<B, R, F, P>(self, bind: F, project: P) -> Maybe<R>
    where
        F: FnOnce(&T) -> Maybe<B>,
        P: FnOnce(T, B) -> R,
    {
        self.bind(|value| {
            let bound = bind(&value);
            bound.map(|other| project(value, other))
        })
    }

    /// Runs `action` on the held value and returns `self` unchanged.
    #[inline]
    #[must_use]
    pub fn inspect<F>(self, action: F) -> Self
    where
        F: FnOnce(&T),
    {
        if let Self::Some(value) = &self {
            action(value);
        }
        self
    }

    // =========================================================================
    // Elimination
    // =========================================================================

    /// Exhaustive case analysis.
    #[inline]
    pub fn match_with<R, N, S>(self, none: N, some: S) -> R
    where
        N: FnOnce() -> R,
        S: FnOnce(T) -> R,
    {
        match self {
            Self::Some(value) => some(value),
            Self::None => none(),
        }
    }

    /// Returns the held value, or `default`.
    #[inline]
    pub fn get_or_else(self, default: T) -> T {
        match self {
            Self::Some(value) => value,
            Self::None => default,
        }
    }

    /// Returns the held value, or computes a fallback.
    #[inline]
    pub fn get_or_else_with<F>(self, default: F) -> T
    where
        F: FnOnce() -> T,
    {
        match self {
            Self::Some(value) => value,
            Self::None => default(),
        }
    }

    /// Returns `self` when present, otherwise `alternative`.
    #[inline]
    #[must_use]
    pub fn or_else(self, alternative: Self) -> Self {
        match self {
            Self::Some(_) => self,
            Self::None => alternative,
        }
    }

    /// Returns the held value.
    ///
    /// # Errors
    ///
    /// Returns [`ContractError::InvalidState`] when `self` is `None`.
    pub fn try_get(self) -> Result<T, ContractError> {
        match self {
            Self::Some(value) => Ok(value),
            Self::None => Err(ContractError::InvalidState(format!(
                "Maybe<{}> is None",
                type_name::<T>()
            ))),
        }
    }

    /// Returns the held value, treating absence as a broken invariant.
    ///
    /// # Panics
    ///
    /// Panics with [`ContractError::InvalidState`] when `self` is `None`.
    ///
    /// ```rust,should_panic
    /// use cairn::control::Maybe;
    ///
    /// Maybe::<i32>::none().get_or_die();
    /// ```
    #[track_caller]
    pub fn get_or_die(self) -> T {
        match self.try_get() {
            Ok(value) => value,
            Err(violation) => die(violation),
        }
    }
}

impl<F> Maybe<F> {
    /// Applies the held function to the held argument.
    ///
    /// `None` on either side yields `None`.
    #[inline]
    pub fn apply<T, R>(self, argument: Maybe<T>) -> Maybe<R>
    where
        F: FnOnce(T) -> R,
    {
        match (self, argument) {
            (Self::Some(function), Maybe::Some(value)) => Maybe::Some(function(value)),
            _ => Maybe::None,
        }
    }
}

impl<T> Maybe<Vec<T>> {
    /// Maps every item to a `Maybe` and collects the values in order.
    ///
    /// The result is `None` as soon as one item maps to `None`; `function` is
    /// not invoked for the items after it.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use cairn::control::Maybe;
    ///
    /// let parse = |text: &str| Maybe::from(text.trim().parse::<i32>().ok());
    ///
    /// let total = Maybe::traverse(["1", " 2", "7 "], parse).map(|numbers| numbers.iter().sum::<i32>());
    /// assert_eq!(total, Maybe::some(10));
    ///
    /// assert_eq!(Maybe::traverse(["1", "2", "XX"], parse), Maybe::none());
    /// ```
    pub fn traverse<I, F>(items: I, mut function: F) -> Self
    where
        I: IntoIterator,
        F: FnMut(I::Item) -> Maybe<T>,
    {
        items
            .into_iter()
            .try_fold(Vec::new(), |mut values, item| {
                Option::from(function(item)).map(|value| {
                    values.push(value);
                    values
                })
            })
            .into()
    }
}

/// Eliminates a sequence by its first element.
///
/// Calls `empty` for an empty sequence, otherwise `otherwise` with the head
/// and the not yet consumed rest.
///
/// # Examples
///
/// ```rust
/// use cairn::control::match_list;
///
/// fn describe(names: &[&str]) -> String {
///     match_list(
///         names,
///         || "nobody".to_string(),
///         |head, rest| format!("{head} and {} more", rest.count()),
///     )
/// }
///
/// assert_eq!(describe(&[]), "nobody");
/// assert_eq!(describe(&["Ada", "Grace", "Edsger"]), "Ada and 2 more");
/// ```
pub fn match_list<I, R, N, S>(items: I, empty: N, otherwise: S) -> R
where
    I: IntoIterator,
    N: FnOnce() -> R,
    S: FnOnce(I::Item, I::IntoIter) -> R,
{
    let mut rest = items.into_iter();
    Maybe::from(rest.next()).match_with(empty, |head| otherwise(head, rest))
}

// =============================================================================
// Conversions
// =============================================================================

impl<T> Default for Maybe<T> {
    #[inline]
    fn default() -> Self {
        Self::None
    }
}

impl<T> From<Option<T>> for Maybe<T> {
    #[inline]
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::None, Self::Some)
    }
}

impl<T> From<Maybe<T>> for Option<T> {
    #[inline]
    fn from(value: Maybe<T>) -> Self {
        match value {
            Maybe::Some(value) => Some(value),
            Maybe::None => None,
        }
    }
}

impl<T> FromIterator<Maybe<T>> for Maybe<Vec<T>> {
    fn from_iter<I: IntoIterator<Item = Maybe<T>>>(iter: I) -> Self {
        Self::traverse(iter, |element| element)
    }
}

impl<T: fmt::Display> fmt::Display for Maybe<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Some(value) => write!(formatter, "Some({value})"),
            Self::None => formatter.write_str("None"),
        }
    }
}

// =============================================================================
// Type Class Implementations
// =============================================================================

impl<T> TypeConstructor for Maybe<T> {
    type Inner = T;
    type WithType<B> = Maybe<B>;
}

impl<T> Functor for Maybe<T> {
    #[inline]
    fn fmap<B, F>(self, function: F) -> Maybe<B>
    where
        F: FnOnce(T) -> B,
    {
        self.map(function)
    }

    #[inline]
    fn fmap_ref<B, F>(&self, function: F) -> Maybe<B>
    where
        F: FnOnce(&T) -> B,
    {
        self.as_ref().map(function)
    }
}

impl<T> Applicative for Maybe<T> {
    #[inline]
    fn pure<B>(value: B) -> Maybe<B> {
        Maybe::Some(value)
    }

    #[inline]
    fn map2<B, C, F>(self, other: Maybe<B>, function: F) -> Maybe<C>
    where
        F: FnOnce(T, B) -> C,
    {
        match (self, other) {
            (Self::Some(first), Maybe::Some(second)) => Maybe::Some(function(first, second)),
            _ => Maybe::None,
        }
    }

    #[inline]
    fn apply<B, Output>(self, other: Maybe<B>) -> Maybe<Output>
    where
        T: FnOnce(B) -> Output,
    {
        Self::apply(self, other)
    }
}

impl<T> Monad for Maybe<T> {
    #[inline]
    fn flat_map<B, F>(self, function: F) -> Maybe<B>
    where
        F: FnOnce(T) -> Maybe<B>,
    {
        self.bind(function)
    }
}
