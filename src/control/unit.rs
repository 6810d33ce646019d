//! The zero-information value and adapters lifting actions into functions.
//!
//! Combinators such as `match_with` always return a value. When a caller
//! only wants side effects, the action is lifted into a function returning
//! [`Unit`] so the same combinator serves both uses.
//!
//! # Examples
//!
//! ```rust
//! use std::cell::RefCell;
//!
//! use cairn::control::{Maybe, Unit, to_func};
//!
//! let log = RefCell::new(Vec::new());
//! let done: Unit = Maybe::some(3).match_with(
//!     || log.borrow_mut().push("none".to_string()),
//!     to_func(|n: i32| log.borrow_mut().push(format!("some {n}"))),
//! );
//!
//! let () = done;
//! assert_eq!(*log.borrow(), vec!["some 3".to_string()]);
//! ```

/// The single-inhabitant type. Its only value is `()`.
pub type Unit = ();

/// Returns the only [`Unit`] value.
#[inline]
pub const fn unit() -> Unit {}

/// Lifts a zero-argument action into a function returning [`Unit`].
#[inline]
pub fn to_func0<A>(action: A) -> impl FnOnce() -> Unit
where
    A: FnOnce(),
{
    move || action()
}

/// Lifts a one-argument action into a function returning [`Unit`].
#[inline]
pub fn to_func<T, A>(action: A) -> impl FnOnce(T) -> Unit
where
    A: FnOnce(T),
{
    move |value| action(value)
}

/// Lifts a two-argument action into a function returning [`Unit`].
#[inline]
pub fn to_func2<T1, T2, A>(action: A) -> impl FnOnce(T1, T2) -> Unit
where
    A: FnOnce(T1, T2),
{
    move |first, second| action(first, second)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn unit_carries_no_data() {
        let value: Unit = unit();
        assert_eq!(std::mem::size_of_val(&value), 0);
    }

    #[test]
    fn lifted_actions_run_once() {
        let calls = Cell::new(0);
        to_func0(|| calls.set(calls.get() + 1))();
        to_func(|step: i32| calls.set(calls.get() + step))(2);
        to_func2(|first: i32, second: i32| calls.set(calls.get() + first * second))(3, 4);
        assert_eq!(calls.get(), 15);
    }
}
