//! Higher-Kinded Type emulation through Generic Associated Types.
//!
//! Rust does not natively support Higher-Kinded Types, so a trait cannot
//! abstract over `Maybe<_>` or `Outcome<_, E>` as type constructors. This
//! module uses a GAT to work around that: every container names the type it
//! is applied to (`Inner`) and how to re-apply the same constructor to a
//! different type (`WithType<B>`).
//!
//! # Example
//!
//! ```rust
//! use cairn::control::Maybe;
//! use cairn::typeclass::TypeConstructor;
//!
//! fn empty_like<T: TypeConstructor>(_value: T) -> T::WithType<String>
//! where
//!     T::WithType<String>: Default,
//! {
//!     Default::default()
//! }
//!
//! let number = Maybe::some(42);
//! let nothing: Maybe<String> = empty_like(number);
//! assert!(nothing.is_none());
//! ```

/// A trait representing a type constructor.
///
/// The implementing type is a type constructor applied to some type, for
/// example `Maybe<A>` or `Outcome<A, E>`.
///
/// # Laws
///
/// 1. **Consistency**: `<F as TypeConstructor>::WithType<F::Inner>` is `F`.
pub trait TypeConstructor {
    /// The inner type that this type constructor is applied to.
    ///
    /// For `Maybe<i32>` this is `i32`; for `Either<L, R>` this is `R`.
    type Inner;

    /// The same type constructor applied to a different type `B`.
    ///
    /// The bound keeps the result a type constructor so transformations chain.
    type WithType<B>: TypeConstructor<Inner = B>;
}
