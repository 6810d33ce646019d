//! Function helpers.
//!
//! - [`identity`]: returns its argument unchanged
//! - [`constant`]: builds a function ignoring its argument
//!
//! Both are the usual arguments for checking functor laws or for filling a
//! case of `match_with` that needs no work.
//!
//! ```
//! use cairn::compose::{constant, identity};
//! use cairn::control::Maybe;
//!
//! assert_eq!(Maybe::some(5).map(identity), Maybe::some(5));
//! assert_eq!(Maybe::some(5).match_with(|| 0, constant(1)), 1);
//! ```

/// Returns `value` unchanged.
#[inline]
pub const fn identity<T>(value: T) -> T {
    value
}

/// Returns a function that ignores its argument and returns `value`.
#[inline]
pub fn constant<T: Clone, U>(value: T) -> impl Fn(U) -> T {
    move |_| value.clone()
}
