//! Function composition helpers.
//!
//! - [`curry2!`], [`curry3!`]: turn multi-argument functions into chains of
//!   one-argument closures
//! - [`curry_first3!`], [`curry_first4!`]: fix the first argument of a three-
//!   or four-argument function
//! - [`identity`], [`constant`]: the I and K combinators
//!
//! # Examples
//!
//! ```
//! use cairn::control::Outcome;
//! use cairn::curry3;
//!
//! fn between(low: i32, high: i32, value: i32) -> bool { low <= value && value <= high }
//!
//! let low: Outcome<i32> = Outcome::success(1);
//! let checked = low
//!     .map(curry3!(between))
//!     .apply(Outcome::success(10))
//!     .apply(Outcome::success(5));
//!
//! assert_eq!(checked, Outcome::success(true));
//! ```

mod curry_macro;
mod utils;

pub use utils::{constant, identity};
