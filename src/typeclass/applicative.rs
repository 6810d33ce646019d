//! Applicative type class - applying functions within contexts.
//!
//! This module provides the `Applicative` trait, which extends `Functor` with
//! the ability to:
//!
//! - Lift pure values into the applicative context (`pure`)
//! - Combine two independent computations using a function (`map2`)
//! - Apply a wrapped function to a wrapped argument (`apply`)
//!
//! Absence or failure in either operand propagates; when both operands fail,
//! the left one (the function side of `apply`) wins.
//!
//! # Laws
//!
//! ## Identity Law
//!
//! ```text
//! pure(|x| x).apply(v) == v
//! ```
//!
//! ## Homomorphism Law
//!
//! ```text
//! pure(f).apply(pure(x)) == pure(f(x))
//! ```
//!
//! ## Interchange Law
//!
//! ```text
//! u.apply(pure(y)) == pure(|f| f(y)).apply(u)
//! ```

use super::functor::Functor;

/// A type class for functors that can combine independent computations.
///
/// # Examples
///
/// ```rust
/// use cairn::control::Maybe;
/// use cairn::typeclass::Applicative;
///
/// let lifted: Maybe<i32> = <Maybe<()>>::pure(42);
/// assert_eq!(lifted, Maybe::some(42));
///
/// let sum = Maybe::some(3).map2(Maybe::some(4), |x, y| x + y);
/// assert_eq!(sum, Maybe::some(7));
/// ```
pub trait Applicative: Functor {
    /// Lifts a value into the context.
    fn pure<B>(value: B) -> Self::WithType<B>;

    /// Combines two values in the context with a binary function.
    fn map2<B, C, F>(self, other: Self::WithType<B>, function: F) -> Self::WithType<C>
    where
        F: FnOnce(Self::Inner, B) -> C;

    /// Pairs two values in the context.
    #[inline]
    fn product<B>(self, other: Self::WithType<B>) -> Self::WithType<(Self::Inner, B)>
    where
        Self: Sized,
    {
        self.map2(other, |a, b| (a, b))
    }

    /// Applies the function held by `self` to the value held by `other`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use cairn::control::Maybe;
    /// use cairn::typeclass::Applicative;
    ///
    /// let double = Maybe::some(|n: i32| n * 2);
    /// assert_eq!(Applicative::apply(double, Maybe::some(21)), Maybe::some(42));
    /// ```
    fn apply<B, Output>(self, other: Self::WithType<B>) -> Self::WithType<Output>
    where
        Self: Sized,
        Self::Inner: FnOnce(B) -> Output;
}
