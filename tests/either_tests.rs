//! Unit tests for `Either<L, R>`.
//!
//! `Either` holds a `Left(L)` or a `Right(R)` with no success or failure
//! meaning, but chaining through `bind`, `map` and `apply` is right-biased.

#![cfg(feature = "control")]

use std::cell::Cell;

use cairn::control::{Either, IntoEither, Maybe, left, right};
use rstest::rstest;

// =============================================================================
// Construction
// =============================================================================

#[rstest]
fn markers_convert_into_any_either() {
    let from_left: Either<&str, u32> = left("missing").into();
    let from_right: Either<&str, u32> = right(7).into();

    assert_eq!(from_left, Either::Left("missing"));
    assert_eq!(from_right, Either::Right(7));
}

#[rstest]
#[case(Either::Left(3), true, false)]
#[case(Either::Left(4), false, false)]
#[case(Either::Right(3), false, true)]
fn markers_compare_with_a_matching_case(
    #[case] value: Either<i32, i32>,
    #[case] equals_left: bool,
    #[case] equals_right: bool,
) {
    assert_eq!(value == left(3), equals_left);
    assert_eq!(value == right(3), equals_right);
}

#[rstest]
fn markers_render_their_side() {
    assert_eq!(left("missing").to_string(), "Left(missing)");
    assert_eq!(right(42).to_string(), "Right(42)");
}

#[rstest]
fn extension_trait_places_values() {
    assert_eq!(5.as_left::<String>(), Either::Left(5));
    assert_eq!("text".as_right::<i32>(), Either::Right("text"));
}

#[rstest]
#[case(Either::Left(1), false)]
#[case(Either::Right("r"), true)]
fn truthiness_follows_the_right_case(#[case] value: Either<i32, &str>, #[case] truthy: bool) {
    assert_eq!(value.is_truthy(), truthy);
    assert_eq!(value.is_right(), truthy);
    assert_eq!(value.is_left(), !truthy);
}

// =============================================================================
// Projection
// =============================================================================

#[rstest]
fn projections_read_the_other_side_as_none() {
    let value: Either<i32, String> = Either::Left(42);
    assert_eq!(value.left_ref(), Maybe::some(&42));
    assert_eq!(value.right_ref(), Maybe::none());
    assert_eq!(value.clone().left(), Maybe::some(42));
    assert_eq!(value.right(), Maybe::none());
}

// =============================================================================
// Transformation
// =============================================================================

#[rstest]
fn map_transforms_only_the_right() {
    let right: Either<String, i32> = Either::Right(2);
    let left: Either<String, i32> = Either::Left("kept".to_string());

    assert_eq!(right.map(|n| n * 10), Either::Right(20));
    assert_eq!(left.map(|n| n * 10), Either::Left("kept".to_string()));
}

#[rstest]
fn bimap_and_map_left_reach_the_left() {
    let value: Either<i32, i32> = Either::Left(3);
    assert_eq!(value.bimap(|n| n + 1, |n| n - 1), Either::Left(4));
    assert_eq!(value.map_left(|n| n * 2), Either::Left(6));
}

#[rstest]
fn bind_is_right_biased() {
    let calls = Cell::new(0);
    let step = |n: i32| {
        calls.set(calls.get() + 1);
        if n < 10 { Either::Right(n + 5) } else { Either::Left(format!("{n} is too big")) }
    };

    assert_eq!(Either::<String, i32>::Right(1).bind(step).bind(step), Either::Right(11));
    assert_eq!(calls.get(), 2);

    assert_eq!(
        Either::<String, i32>::Right(12).bind(step).bind(step),
        Either::Left("12 is too big".to_string())
    );
    assert_eq!(calls.get(), 3);

    assert_eq!(
        Either::<String, i32>::Left("start".to_string()).and_then(step),
        Either::Left("start".to_string())
    );
    assert_eq!(calls.get(), 3);
}

#[rstest]
#[case(Either::Right(2), Either::Right(3), Either::Right(6))]
#[case(Either::Left("f"), Either::Right(3), Either::Left("f"))]
#[case(Either::Right(2), Either::Left("a"), Either::Left("a"))]
#[case(Either::Left("f"), Either::Left("a"), Either::Left("f"))]
fn apply_checks_the_function_first(
    #[case] factor: Either<&str, i32>,
    #[case] argument: Either<&str, i32>,
    #[case] expected: Either<&str, i32>,
) {
    let multiply = factor.map(|x| move |y: i32| x * y);
    assert_eq!(multiply.apply(argument), expected);
}

#[rstest]
fn swap_exchanges_the_sides() {
    let value: Either<i32, &str> = Either::Right("r");
    assert_eq!(value.swap(), Either::Left("r"));
}

// =============================================================================
// Elimination and Fallback
// =============================================================================

#[rstest]
fn match_with_dispatches_on_the_case() {
    let describe = |value: Either<i32, &str>| value.match_with(|n| format!("number {n}"), |s| format!("text {s}"));
    assert_eq!(describe(Either::Left(1)), "number 1");
    assert_eq!(describe(Either::Right("a")), "text a");
}

#[rstest]
fn or_else_chains_fallbacks() {
    let cache: Either<&str, u32> = Either::Left("cache miss");
    let database: Either<&str, u32> = Either::Left("database down");
    let default: Either<&str, u32> = Either::Right(0);

    assert_eq!(cache.or_else(database), Either::Left("database down"));
    assert_eq!(cache | database | default, Either::Right(0));
}

#[rstest]
fn result_conversions_map_ok_to_right() {
    let from_ok: Either<String, i32> = Ok::<i32, String>(1).into();
    let from_err: Either<String, i32> = Err::<i32, String>("e".to_string()).into();
    assert_eq!(from_ok, Either::Right(1));
    assert_eq!(from_err, Either::Left("e".to_string()));

    let back: Result<i32, String> = from_ok.into();
    assert_eq!(back, Ok(1));
}
