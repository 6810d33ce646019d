//! Traverse - mapping with effects and collecting results.
//!
//! Consider a list of strings to be parsed as integers, where parsing yields
//! `Maybe<i32>` (or `Outcome<i32, E>`). `traverse` turns the list inside
//! out:
//! - If every element succeeds: `Some(Vec<i32>)` with the results in order
//! - If any element fails: `None` (or the first failure)
//!
//! Rust lacks Higher-Kinded Types, which would allow a single `traverse`
//! generic over every `Applicative`. Instead this extension trait provides
//! one method per container, available on anything iterable.
//!
//! # Examples
//!
//! ```rust
//! use cairn::control::Maybe;
//! use cairn::typeclass::Traverse;
//!
//! let numbers = vec!["1", "2", "3"].traverse_maybe(|text| Maybe::from(text.parse::<i32>().ok()));
//! assert_eq!(numbers, Maybe::some(vec![1, 2, 3]));
//!
//! let with_error = vec!["1", "not a number", "3"].traverse_maybe(|text| Maybe::from(text.parse::<i32>().ok()));
//! assert_eq!(with_error, Maybe::none());
//! ```

use crate::control::{Maybe, Outcome};

/// Extension trait traversing any iterable with a container-returning function.
///
/// # Laws
///
/// ## Identity
///
/// Traversing with the pure constructor is the same as collecting:
/// ```text
/// items.traverse_maybe(Maybe::some) == Maybe::some(items.collect())
/// ```
///
/// ## Naturality
///
/// A failing element makes the whole traversal fail, whatever its position.
pub trait Traverse: IntoIterator + Sized {
    /// Applies a `Maybe`-returning function to each element and collects the results.
    ///
    /// After the first `None` the function is no longer invoked.
    fn traverse_maybe<B, F>(self, function: F) -> Maybe<Vec<B>>
    where
        F: FnMut(Self::Item) -> Maybe<B>,
    {
        Maybe::traverse(self, function)
    }

    /// Applies an `Outcome`-returning function to each element and collects the results.
    ///
    /// The first failure is returned and the function is no longer invoked.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use cairn::control::{Error, Outcome};
    /// use cairn::typeclass::Traverse;
    ///
    /// fn parse(text: &str) -> Outcome<i32> {
    ///     text.parse::<i32>()
    ///         .map_err(|_| Error::new(format!("not a number: {text}")))
    ///         .into()
    /// }
    ///
    /// assert_eq!(vec!["1", "2"].traverse_outcome(parse), Outcome::success(vec![1, 2]));
    /// assert_eq!(
    ///     vec!["1", "x"].traverse_outcome(parse),
    ///     Outcome::failure("not a number: x")
    /// );
    /// ```
    fn traverse_outcome<B, E, F>(self, function: F) -> Outcome<Vec<B>, E>
    where
        F: FnMut(Self::Item) -> Outcome<B, E>,
    {
        Outcome::traverse(self, function)
    }

    /// Turns an iterable of `Maybe`s inside out.
    fn sequence_maybe<B>(self) -> Maybe<Vec<B>>
    where
        Self: IntoIterator<Item = Maybe<B>>,
    {
        self.traverse_maybe(|element| element)
    }

    /// Turns an iterable of `Outcome`s inside out.
    fn sequence_outcome<B, E>(self) -> Outcome<Vec<B>, E>
    where
        Self: IntoIterator<Item = Outcome<B, E>>,
    {
        self.traverse_outcome(|element| element)
    }
}

impl<I: IntoIterator> Traverse for I {}
