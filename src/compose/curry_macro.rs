//! Currying macros.
//!
//! `curry2!` and `curry3!` turn a multi-argument function into a chain of
//! one-argument closures; `curry_first3!` and `curry_first4!` fix only the
//! first argument of a three- or four-argument function. The curried closures are `Fn`: the function and
//! every argument supplied so far are shared through `std::rc::Rc` and
//! cloned out on each final call, so a partial application can be reused.
//! Arguments fixed early must therefore be `Clone`.
//!
//! Curried functions slot into the applicative combinators of the
//! containers:
//!
//! ```
//! use cairn::control::Maybe;
//! use cairn::curry2;
//!
//! fn scale(factor: i32, value: i32) -> i32 { factor * value }
//!
//! let scaled = Maybe::some(3).map(curry2!(scale)).apply(Maybe::some(7));
//! assert_eq!(scaled, Maybe::some(21));
//! ```

/// Curries a two-argument function: `f(a, b)` becomes `f(a)(b)`.
///
/// # Examples
///
/// ```
/// use cairn::curry2;
///
/// fn greet(greeting: &str, name: &str) -> String { format!("{greeting}, {name}") }
///
/// let hello = curry2!(greet)("Hello");
/// assert_eq!(hello("John"), "Hello, John");
/// assert_eq!(hello("Jane"), "Hello, Jane");
/// ```
#[macro_export]
macro_rules! curry2 {
    ($function:expr $(,)?) => {{
        let shared = ::std::rc::Rc::new($function);
        move |first| {
            let shared = ::std::rc::Rc::clone(&shared);
            let first = ::std::rc::Rc::new(first);
            move |second| shared(::std::rc::Rc::unwrap_or_clone(::std::rc::Rc::clone(&first)), second)
        }
    }};
}

/// Curries a three-argument function: `f(a, b, c)` becomes `f(a)(b)(c)`.
///
/// # Examples
///
/// ```
/// use cairn::curry3;
///
/// let clamp = curry3!(|low: i32, high: i32, value: i32| value.clamp(low, high));
/// let percent = clamp(0)(100);
///
/// assert_eq!(percent(150), 100);
/// assert_eq!(percent(-3), 0);
/// assert_eq!(percent(42), 42);
/// ```
#[macro_export]
macro_rules! curry3 {
    ($function:expr $(,)?) => {{
        let shared = ::std::rc::Rc::new($function);
        move |first| {
            let shared = ::std::rc::Rc::clone(&shared);
            let first = ::std::rc::Rc::new(first);
            move |second| {
                let shared = ::std::rc::Rc::clone(&shared);
                let first = ::std::rc::Rc::clone(&first);
                let second = ::std::rc::Rc::new(second);
                move |third| {
                    shared(
                        ::std::rc::Rc::unwrap_or_clone(::std::rc::Rc::clone(&first)),
                        ::std::rc::Rc::unwrap_or_clone(::std::rc::Rc::clone(&second)),
                        third,
                    )
                }
            }
        }
    }};
}

/// Fixes the first argument of a three-argument function.
///
/// `f(a, b, c)` becomes `f(a)` returning a two-argument closure `(b, c)`.
///
/// # Examples
///
/// ```
/// use cairn::curry_first3;
///
/// fn transfer(fee: u32, from: u32, amount: u32) -> u32 { from - amount - fee }
///
/// let with_fee = curry_first3!(transfer)(2);
/// assert_eq!(with_fee(100, 30), 68);
/// ```
#[macro_export]
macro_rules! curry_first3 {
    ($function:expr $(,)?) => {{
        let shared = ::std::rc::Rc::new($function);
        move |first| {
            let shared = ::std::rc::Rc::clone(&shared);
            let first = ::std::rc::Rc::new(first);
            move |second, third| {
                shared(
                    ::std::rc::Rc::unwrap_or_clone(::std::rc::Rc::clone(&first)),
                    second,
                    third,
                )
            }
        }
    }};
}

/// Fixes the first argument of a four-argument function.
///
/// `f(a, b, c, d)` becomes `f(a)` returning a three-argument closure
/// `(b, c, d)`.
///
/// # Examples
///
/// ```
/// use cairn::curry_first4;
///
/// let within = curry_first4!(|tolerance: i32, low: i32, high: i32, value: i32| {
///     value >= low - tolerance && value <= high + tolerance
/// });
/// let loosely = within(5);
///
/// assert!(loosely(0, 10, 14));
/// assert!(!loosely(0, 10, 16));
/// ```
#[macro_export]
macro_rules! curry_first4 {
    ($function:expr $(,)?) => {{
        let shared = ::std::rc::Rc::new($function);
        move |first| {
            let shared = ::std::rc::Rc::clone(&shared);
            let first = ::std::rc::Rc::new(first);
            move |second, third, fourth| {
                shared(
                    ::std::rc::Rc::unwrap_or_clone(::std::rc::Rc::clone(&first)),
                    second,
                    third,
                    fourth,
                )
            }
        }
    }};
}
