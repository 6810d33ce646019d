//! Type class traits for functional programming abstractions.
//!
//! This module provides the type classes (traits) shared by every container
//! in [`control`](crate::control):
//!
//! - [`Functor`]: Mapping over container values
//! - [`Applicative`]: Applying functions within containers
//! - [`Monad`]: Sequencing computations with dependency
//! - [`Traverse`]: Turning an iterable of containers inside out
//!
//! ## Higher-Kinded Types Emulation
//!
//! Rust does not have native support for higher-kinded types (HKT).
//! This library uses Generic Associated Types (GAT) to emulate HKT
//! behavior through [`TypeConstructor`], so `Functor` and `Monad` can be
//! written once and implemented for each container.
//!
//! # Examples
//!
//! ```rust
//! use cairn::control::{Maybe, Outcome};
//! use cairn::typeclass::{Functor, Monad};
//!
//! fn double_all<F>(container: F) -> F::WithType<i32>
//! where
//!     F: Functor<Inner = i32>,
//! {
//!     container.fmap(|n| n * 2)
//! }
//!
//! assert_eq!(double_all(Maybe::some(4)), Maybe::some(8));
//! let failed: Outcome<i32> = Outcome::failure("Boom!");
//! assert_eq!(double_all(failed.clone()), failed);
//!
//! let chained = Maybe::some(3).flat_map(|n| Maybe::some(n + 1));
//! assert_eq!(chained, Maybe::some(4));
//! ```

mod applicative;
mod functor;
mod higher;
mod monad;
#[cfg(feature = "control")]
mod traversable;

pub use applicative::Applicative;
pub use functor::Functor;
pub use higher::TypeConstructor;
pub use monad::Monad;

#[cfg(feature = "control")]
pub use traversable::Traverse;
