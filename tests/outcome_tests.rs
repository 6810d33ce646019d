//! Unit tests for `Outcome<T, E>` and its error-fixed form `Outcome<T>`.

#![cfg(feature = "control")]

use std::cell::{Cell, RefCell};

use cairn::control::{ContractError, Error, Outcome};
use rstest::rstest;

#[derive(Clone, Debug, PartialEq, Eq)]
enum Rejection {
    TooSmall(i64),
    TooLarge(i64),
}

fn within_limits(amount: i64) -> Outcome<i64, Rejection> {
    if amount < 1 {
        Outcome::failure(Rejection::TooSmall(amount))
    } else if amount > 1_000 {
        Outcome::failure(Rejection::TooLarge(amount))
    } else {
        Outcome::success(amount)
    }
}

// =============================================================================
// Construction
// =============================================================================

#[rstest]
fn failure_accepts_text_and_errors() {
    let from_str: Outcome<i32> = Outcome::failure("Boom!");
    let from_string: Outcome<i32> = Outcome::failure(String::from("Boom!"));
    let from_error: Outcome<i32> = Error::new("Boom!").into();

    assert_eq!(from_str, from_string);
    assert_eq!(from_string, from_error);
    assert!(from_error.is_failure());
}

#[rstest]
fn failure_never_equals_success() {
    let success: Outcome<String, String> = Outcome::success("same".to_string());
    let failure: Outcome<String, String> = Outcome::failure("same".to_string());
    assert_ne!(success, failure);
}

// =============================================================================
// Combinators
// =============================================================================

#[rstest]
fn bind_on_success_continues() {
    let result: Outcome<String> = Outcome::success("yay".to_string());
    assert_eq!(result.bind(|s| Outcome::success(s.len())), Outcome::success(3));
}

#[rstest]
fn bind_on_failure_never_invokes_the_function() {
    let calls = Cell::new(0);
    let result: Outcome<String> = Outcome::failure(Error::new("Boom!"));

    let chained = result.bind(|s| {
        calls.set(calls.get() + 1);
        Outcome::success(s.len())
    });

    assert_eq!(chained, Outcome::failure(Error::new("Boom!")));
    assert_eq!(calls.get(), 0);
}

#[rstest]
#[case(5, Outcome::success(10))]
#[case(0, Outcome::failure(Rejection::TooSmall(0)))]
#[case(5_000, Outcome::failure(Rejection::TooLarge(5_000)))]
fn custom_error_types_flow_through(#[case] amount: i64, #[case] expected: Outcome<i64, Rejection>) {
    assert_eq!(within_limits(amount).map(|n| n * 2), expected);
}

#[rstest]
fn map_error_rewrites_only_failures() {
    let describe = |rejection: Rejection| format!("{rejection:?}");
    assert_eq!(within_limits(3).map_error(describe), Outcome::success(3));
    assert_eq!(within_limits(-1).map_error(describe), Outcome::failure("TooSmall(-1)".to_string()));
}

#[rstest]
fn apply_reports_the_first_failure() {
    let add = |x: i64, y: i64| x + y;

    let both = within_limits(2).map_curried(add).apply(within_limits(3));
    assert_eq!(both, Outcome::success(5));

    let second_fails = within_limits(2).map_curried(add).apply(within_limits(0));
    assert_eq!(second_fails, Outcome::failure(Rejection::TooSmall(0)));

    let both_fail = within_limits(2_000).map_curried(add).apply(within_limits(0));
    assert_eq!(both_fail, Outcome::failure(Rejection::TooLarge(2_000)));
}

#[rstest]
fn three_argument_curried_map_needs_every_argument() {
    let volume = |x: i64, y: i64, z: i64| x * y * z;

    let all = within_limits(2).map_curried3(volume).apply(within_limits(3)).apply(within_limits(4));
    assert_eq!(all, Outcome::success(24));

    let last_fails = within_limits(2).map_curried3(volume).apply(within_limits(3)).apply(within_limits(0));
    assert_eq!(last_fails, Outcome::failure(Rejection::TooSmall(0)));
}

#[rstest]
fn apply_error_annotates_a_failed_argument() {
    let annotate: Outcome<_> = Outcome::success(|error: Error| Error::new(format!("step 2: {error}")));
    let failed: Outcome<i32> = Outcome::failure("timeout");

    assert_eq!(annotate.apply_error(failed), Outcome::failure("step 2: timeout"));
}

#[rstest]
fn apply_error_keeps_its_own_failure() {
    let broken: Outcome<fn(Error) -> Error> = Outcome::failure("no rewrite");
    let failed: Outcome<i32> = Outcome::failure("timeout");

    assert_eq!(broken.apply_error(failed), Outcome::failure("no rewrite"));
}

#[rstest]
fn bind_project_pairs_the_values() {
    let pair = within_limits(10).bind_project(|n| within_limits(n * 200), |n, m| (n, m));
    assert_eq!(pair, Outcome::failure(Rejection::TooLarge(2_000)));

    let pair = within_limits(1).bind_project(|n| within_limits(n * 200), |n, m| (n, m));
    assert_eq!(pair, Outcome::success((1, 200)));
}

#[rstest]
fn inspect_and_inspect_error_observe_without_changing() {
    let log = RefCell::new(Vec::new());

    let ok = within_limits(4)
        .inspect(|n| log.borrow_mut().push(format!("ok {n}")))
        .inspect_error(|e| log.borrow_mut().push(format!("err {e:?}")));
    let rejected = within_limits(0)
        .inspect(|n| log.borrow_mut().push(format!("ok {n}")))
        .inspect_error(|e| log.borrow_mut().push(format!("err {e:?}")));

    assert_eq!(ok, Outcome::success(4));
    assert_eq!(rejected, Outcome::failure(Rejection::TooSmall(0)));
    assert_eq!(*log.borrow(), vec!["ok 4".to_string(), "err TooSmall(0)".to_string()]);
}

// =============================================================================
// Elimination and Fallbacks
// =============================================================================

#[rstest]
fn match_with_renders_either_branch() {
    let render = |outcome: Outcome<i64, Rejection>| {
        outcome.match_with(|rejection| format!("rejected: {rejection:?}"), |n| format!("accepted: {n}"))
    };
    assert_eq!(render(within_limits(7)), "accepted: 7");
    assert_eq!(render(within_limits(0)), "rejected: TooSmall(0)");
}

#[rstest]
fn or_operator_picks_the_first_success() {
    let primary: Outcome<&str> = Outcome::failure("primary down");
    let replica: Outcome<&str> = Outcome::success("replica");
    let backup: Outcome<&str> = Outcome::success("backup");

    assert_eq!(primary.clone() | replica | backup, Outcome::success("replica"));
    assert_eq!(primary.clone() | primary, Outcome::failure("primary down"));
}

#[rstest]
fn get_or_else_with_sees_the_error() {
    let amount = within_limits(-5).get_or_else_with(|rejection| match rejection {
        Rejection::TooSmall(_) => 1,
        Rejection::TooLarge(_) => 1_000,
    });
    assert_eq!(amount, 1);
    assert_eq!(within_limits(-5).get_or_else(0), 0);
}

#[rstest]
fn try_get_describes_the_failure() {
    let failed: Outcome<u8> = Outcome::failure("Boom!");
    assert_eq!(
        failed.try_get(),
        Err(ContractError::InvalidState("Outcome<u8> failed: Boom!".to_string()))
    );
}

#[rstest]
#[should_panic(expected = "invalid state")]
fn get_or_die_panics_on_failure() {
    let failed: Outcome<u8> = Outcome::failure("Boom!");
    failed.get_or_die();
}

#[rstest]
#[case(Outcome::success(1), "Success: 1")]
#[case(Outcome::failure("nope"), "Error: nope")]
fn display_names_the_case(#[case] outcome: Outcome<i32>, #[case] expected: &str) {
    assert_eq!(outcome.to_string(), expected);
}

#[rstest]
fn converts_from_and_into_result() {
    let parsed: Outcome<u8, std::num::ParseIntError> = "12".parse::<u8>().into();
    assert_eq!(parsed.clone().get_or_else(0), 12);

    let back: Result<u8, std::num::ParseIntError> = parsed.into();
    assert_eq!(back, Ok(12));
}
