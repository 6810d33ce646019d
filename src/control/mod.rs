//! Algebraic containers.
//!
//! Every container is an immutable value; every combinator returns a new
//! container and leaves its input untouched.
//!
//! - [`Maybe`]: presence or absence of a value
//! - [`Outcome`]: a success value or a typed failure (by default an [`Error`])
//! - [`Either`]: one of two values, right-biased for chaining
//! - [`Fault`]: a structured error or a captured [`Exception`]
//! - [`Exceptional`]: a success value or a captured [`Exception`]
//! - [`Deferred`]: a computation whose panics are captured when it runs
//! - [`OneOf2`] .. [`OneOf5`]: fixed-arity tagged unions
//! - [`Unit`]: the zero-information value, with the [`to_func`] adapters
//!
//! # Examples
//!
//! ## Optional values
//!
//! ```rust
//! use cairn::control::Maybe;
//!
//! fn find_user(id: u32) -> Maybe<&'static str> {
//!     if id == 1 { Maybe::some("John") } else { Maybe::none() }
//! }
//!
//! assert_eq!(find_user(1).map(str::len).get_or_else(0), 4);
//! assert_eq!(find_user(2).map(str::len).get_or_else(0), 0);
//! ```
//!
//! ## Capturing a panic
//!
//! ```rust
//! use cairn::control::{Deferred, Exceptional};
//!
//! let parsed: Exceptional<u8> = Deferred::new(|| "300".parse::<u8>().unwrap()).run();
//! assert!(parsed.is_exception());
//! ```

mod deferred;
mod either;
mod error;
mod exception;
mod exceptional;
mod fault;
mod maybe;
mod one_of;
mod outcome;
mod unit;

pub use deferred::{Deferred, try_run};
pub use either::{Either, IntoEither, LeftMarker, RightMarker, left, right};
pub use error::{ContractError, Error};
pub use exception::Exception;
pub use exceptional::Exceptional;
pub use fault::Fault;
pub use maybe::{Maybe, NONE, NoneMarker, match_list, none};
pub use one_of::{
    OneOf2, OneOf2Index, OneOf3, OneOf3Index, OneOf4, OneOf4Index, OneOf5, OneOf5Index,
};
pub use outcome::Outcome;
pub use unit::{Unit, to_func, to_func0, to_func2, unit};

static_assertions::assert_impl_all!(Maybe<String>: Send, Sync);
static_assertions::assert_impl_all!(Outcome<String>: Send, Sync);
static_assertions::assert_impl_all!(Either<Error, String>: Send, Sync);
static_assertions::assert_impl_all!(Exceptional<String>: Send, Sync);
static_assertions::assert_impl_all!(Fault: Send, Sync);
static_assertions::assert_not_impl_any!(Deferred<'static, i32>: Send, Sync);
