//! # cairn
//!
//! Algebraic containers for Rust with lawful combinators.
//!
//! ## Overview
//!
//! `cairn` lets application code express optional values, recoverable
//! errors, and captured failures as plain data, chain transformations over
//! them without unwrapping, and perform case analysis once at the end of a
//! pipeline. It includes:
//!
//! - **Containers**: [`Maybe`](control::Maybe), [`Outcome`](control::Outcome),
//!   [`Either`](control::Either), [`Fault`](control::Fault),
//!   [`Exceptional`](control::Exceptional) and the fixed-arity tagged unions
//!   [`OneOf2`](control::OneOf2) .. [`OneOf5`](control::OneOf5)
//! - **Exception boundary**: [`Deferred`](control::Deferred) runs a computation
//!   and turns a panic or an error into data
//! - **Type Classes**: Functor, Applicative, Monad and a traverse extension
//! - **Function Composition**: `curry2!`, `curry3!`, `curry_first3!`, `curry_first4!`,
//!   `identity` and `constant`; the action adapters `to_func*` live in `control`
//!
//! ## Feature Flags
//!
//! - `typeclass`: Type class traits (Functor, Monad, etc.)
//! - `control`: The containers
//! - `compose`: Currying macros and function helpers
//! - `serde`: Serialization of the data-carrying containers
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use cairn::prelude::*;
//!
//! let total = Maybe::traverse(["1", " 2", "7 "], |text| {
//!     Maybe::from(text.trim().parse::<i32>().ok())
//! })
//! .map(|numbers| numbers.iter().sum::<i32>());
//!
//! assert_eq!(total, Maybe::some(10));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::redundant_closure_for_method_calls)]

#[doc(hidden)]
pub use paste;

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types and traits.
///
/// # Usage
///
/// ```rust
/// use cairn::prelude::*;
/// ```
pub mod prelude {

    #[cfg(feature = "typeclass")]
    pub use crate::typeclass::*;

    #[cfg(feature = "compose")]
    pub use crate::compose::*;

    #[cfg(feature = "control")]
    pub use crate::control::*;
}

#[cfg(feature = "typeclass")]
pub mod typeclass;

#[cfg(feature = "compose")]
pub mod compose;

#[cfg(feature = "control")]
pub mod control;
