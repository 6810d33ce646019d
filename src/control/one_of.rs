//! Fixed-arity tagged unions: `OneOf2` through `OneOf5`.
//!
//! A `OneOfN<T1, .., TN>` holds exactly one value, of one of N known types.
//! The variant is the tag: [`index`](OneOf2::index) reports it, and
//! projections such as [`project_1`](OneOf2::project_1) examine a single
//! case without a full match, reading every inactive case as `None`.
//!
//! The family is generated by one macro, so every arity has the same
//! surface:
//!
//! | method | result |
//! |---|---|
//! | `index()` | the `OneOfNIndex` tag |
//! | `is_t1()` .. | whether case i is active |
//! | `project_1()` .. / `project_ref_1()` .. | `Maybe` of case i |
//! | `match_with(f1, .., fN)` | exhaustive case analysis |
//! | `map(f1, .., fN)` | every case transformed, tag preserved |
//! | `map_partial(Maybe<f1>, .., Maybe<fN>)` | `Some` iff the active case has a function |
//! | `map_1(f)` .. | `Some` iff case i is active, only that case transformed |
//! | `into_projections()` | one `Maybe` per case |

use std::fmt;

use super::maybe::Maybe;

macro_rules! one_of {
    (
        $(#[$meta:meta])*
        $name:ident / $index:ident {
            $( $t:ident => $r:ident, $f:ident, $n:literal, [$($mapped:ident),+]; )+
        }
    ) => {
        $crate::paste::paste! {
            $(#[$meta])*
            #[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
            #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
            pub enum $name<$($t),+> {
                $(
                    #[doc = concat!("The case holding a `", stringify!($t), "`.")]
                    $t($t),
                )+
            }

            #[doc = concat!("The case tag of [`", stringify!($name), "`].")]
            #[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
            pub enum $index {
                $(
                    #[doc = concat!("The `", stringify!($t), "` case.")]
                    $t,
                )+
            }

            impl<$($t),+> $name<$($t),+> {
                /// Returns the tag of the active case.
                #[inline]
                pub const fn index(&self) -> $index {
                    match self {
                        $(Self::$t(_) => $index::$t,)+
                    }
                }

                $(
                    #[doc = concat!("Returns `true` when the `", stringify!($t), "` case is active.")]
                    #[inline]
                    pub const fn [<is_ $t:lower>](&self) -> bool {
                        matches!(self, Self::$t(_))
                    }

                    #[doc = concat!("Returns the `", stringify!($t), "` value, or `None` for any other case.")]
                    #[inline]
                    pub fn [<project_ $n>](self) -> Maybe<$t> {
                        match self {
                            Self::$t(value) => Maybe::Some(value),
                            _ => Maybe::None,
                        }
                    }

                    #[doc = concat!("Borrows the `", stringify!($t), "` value, or `None` for any other case.")]
                    #[inline]
                    pub const fn [<project_ref_ $n>](&self) -> Maybe<&$t> {
                        match self {
                            Self::$t(value) => Maybe::Some(value),
                            _ => Maybe::None,
                        }
                    }

                    #[doc = concat!(
                        "Transforms the `", stringify!($t), "` case alone.\n\n",
                        "Returns `None` when another case is active."
                    )]
                    #[inline]
                    pub fn [<map_ $n>]<$r, $f>(self, function: $f) -> Maybe<$name<$($mapped),+>>
                    where
                        $f: FnOnce($t) -> $r,
                    {
                        match self {
                            Self::$t(value) => Maybe::Some($name::$t(function(value))),
                            _ => Maybe::None,
                        }
                    }
                )+

                /// Exhaustive case analysis: exactly one function is invoked.
                #[inline]
                pub fn match_with<Output, $($f),+>(self, $([<on_ $n>]: $f),+) -> Output
                where
                    $($f: FnOnce($t) -> Output,)+
                {
                    match self {
                        $(Self::$t(value) => [<on_ $n>](value),)+
                    }
                }

                /// Transforms whichever case is active, keeping the tag.
                #[inline]
                pub fn map<$($r,)+ $($f),+>(self, $([<on_ $n>]: $f),+) -> $name<$($r),+>
                where
                    $($f: FnOnce($t) -> $r,)+
                {
                    match self {
                        $(Self::$t(value) => $name::$t([<on_ $n>](value)),)+
                    }
                }

                /// Transforms the active case if a function was supplied for it.
                ///
                /// Returns `None` when the active case's function is absent.
                pub fn map_partial<$($r,)+ $($f),+>(
                    self,
                    $([<on_ $n>]: Maybe<$f>),+
                ) -> Maybe<$name<$($r),+>>
                where
                    $($f: FnOnce($t) -> $r,)+
                {
                    match self {
                        $(Self::$t(value) => [<on_ $n>].map(|function| $name::$t(function(value))),)+
                    }
                }

                /// Splits the union into one `Maybe` per case.
                ///
                /// Exactly one of them is `Some`.
                #[allow(unused_assignments)]
                pub fn into_projections(self) -> ($(Maybe<$t>,)+) {
                    let mut remaining = Some(self);
                    ($(
                        match remaining.take() {
                            Some(Self::$t(value)) => Maybe::Some(value),
                            other => {
                                remaining = other;
                                Maybe::None
                            }
                        },
                    )+)
                }
            }

            impl<$($t: fmt::Display),+> fmt::Display for $name<$($t),+> {
                fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
                    match self {
                        $(Self::$t(value) => value.fmt(formatter),)+
                    }
                }
            }
        }
    };
}

one_of! {
    /// One value of two possible types.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use cairn::control::{Maybe, OneOf2, OneOf2Index};
    ///
    /// let parsed: OneOf2<i32, String> = OneOf2::T2("not a number".to_string());
    ///
    /// assert_eq!(parsed.index(), OneOf2Index::T2);
    /// assert_eq!(parsed.project_ref_1(), Maybe::none());
    ///
    /// let length = parsed.match_with(|n| n.to_string().len(), |text| text.len());
    /// assert_eq!(length, 12);
    /// ```
    OneOf2 / OneOf2Index {
        T1 => R1, F1, 1, [R1, T2];
        T2 => R2, F2, 2, [T1, R2];
    }
}

one_of! {
    /// One value of three possible types.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use cairn::control::{Maybe, OneOf3};
    ///
    /// let value: OneOf3<i32, &str, bool> = OneOf3::T3(true);
    /// let flipped = value.map_3(|flag| !flag);
    ///
    /// assert_eq!(flipped, Maybe::some(OneOf3::T3(false)));
    /// assert_eq!(value.map_1(|n| n + 1), Maybe::none());
    /// ```
    OneOf3 / OneOf3Index {
        T1 => R1, F1, 1, [R1, T2, T3];
        T2 => R2, F2, 2, [T1, R2, T3];
        T3 => R3, F3, 3, [T1, T2, R3];
    }
}

one_of! {
    /// One value of four possible types.
    OneOf4 / OneOf4Index {
        T1 => R1, F1, 1, [R1, T2, T3, T4];
        T2 => R2, F2, 2, [T1, R2, T3, T4];
        T3 => R3, F3, 3, [T1, T2, R3, T4];
        T4 => R4, F4, 4, [T1, T2, T3, R4];
    }
}

one_of! {
    /// One value of five possible types.
    OneOf5 / OneOf5Index {
        T1 => R1, F1, 1, [R1, T2, T3, T4, T5];
        T2 => R2, F2, 2, [T1, R2, T3, T4, T5];
        T3 => R3, F3, 3, [T1, T2, R3, T4, T5];
        T4 => R4, F4, 4, [T1, T2, T3, R4, T5];
        T5 => R5, F5, 5, [T1, T2, T3, T4, R5];
    }
}

static_assertions::assert_impl_all!(OneOf2<i32, String>: Send, Sync);
static_assertions::assert_impl_all!(OneOf3<i32, String, Vec<u8>>: Send, Sync);
static_assertions::assert_not_impl_any!(OneOf2<std::rc::Rc<i32>, String>: Send, Sync);
