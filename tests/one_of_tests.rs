//! Tests for the fixed-arity tagged unions `OneOf2` .. `OneOf5`.

#![cfg(feature = "control")]

use cairn::control::{Maybe, OneOf2, OneOf2Index, OneOf3, OneOf3Index, OneOf4, OneOf5};
use rstest::rstest;

#[derive(Clone, Debug, PartialEq)]
struct Deposit(u64);

#[derive(Clone, Debug, PartialEq)]
struct Withdrawal(u64);

#[derive(Clone, Debug, PartialEq)]
struct Transfer {
    to: String,
    amount: u64,
}

type Transaction = OneOf3<Deposit, Withdrawal, Transfer>;

fn signed_amount(transaction: Transaction) -> i128 {
    transaction.match_with(
        |Deposit(amount)| i128::from(amount),
        |Withdrawal(amount)| -i128::from(amount),
        |Transfer { amount, .. }| -i128::from(amount),
    )
}

// =============================================================================
// Tag and Projections
// =============================================================================

#[rstest]
#[case(Transaction::T1(Deposit(10)), OneOf3Index::T1)]
#[case(Transaction::T2(Withdrawal(5)), OneOf3Index::T2)]
#[case(Transaction::T3(Transfer { to: "savings".to_string(), amount: 1 }), OneOf3Index::T3)]
fn index_reports_the_active_case(#[case] transaction: Transaction, #[case] expected: OneOf3Index) {
    assert_eq!(transaction.index(), expected);
}

#[rstest]
fn exactly_one_projection_is_present() {
    let transaction = Transaction::T2(Withdrawal(30));

    assert_eq!(transaction.project_ref_1(), Maybe::none());
    assert_eq!(transaction.project_ref_2(), Maybe::some(&Withdrawal(30)));
    assert_eq!(transaction.project_ref_3(), Maybe::none());
    assert!(transaction.is_t2());
    assert_eq!(transaction.project_2(), Maybe::some(Withdrawal(30)));
}

#[rstest]
fn into_projections_deconstructs_the_union() {
    let (deposit, withdrawal, transfer) = Transaction::T1(Deposit(7)).into_projections();
    assert_eq!(deposit, Maybe::some(Deposit(7)));
    assert_eq!(withdrawal, Maybe::none());
    assert_eq!(transfer, Maybe::none());
}

// =============================================================================
// Elimination and Mapping
// =============================================================================

#[rstest]
#[case(Transaction::T1(Deposit(10)), 10)]
#[case(Transaction::T2(Withdrawal(4)), -4)]
#[case(Transaction::T3(Transfer { to: "rent".to_string(), amount: 6 }), -6)]
fn match_with_dispatches_one_function(#[case] transaction: Transaction, #[case] expected: i128) {
    assert_eq!(signed_amount(transaction), expected);
}

#[rstest]
fn map_transforms_every_case_in_lockstep() {
    let labelled = Transaction::T3(Transfer { to: "rent".to_string(), amount: 6 }).map(
        |Deposit(amount)| amount,
        |Withdrawal(amount)| format!("-{amount}"),
        |transfer| transfer.to,
    );
    assert_eq!(labelled, OneOf3::T3("rent".to_string()));
}

#[rstest]
fn single_case_map_needs_the_active_case() {
    let deposit = Transaction::T1(Deposit(10));

    let doubled = deposit.clone().map_1(|Deposit(amount)| Deposit(amount * 2));
    assert_eq!(doubled, Maybe::some(Transaction::T1(Deposit(20))));

    let untouched = deposit.map_2(|Withdrawal(amount)| amount);
    assert_eq!(untouched, Maybe::none());
}

#[rstest]
fn map_partial_handles_a_subset_of_cases() {
    fn credits_only(transaction: Transaction) -> Maybe<OneOf3<u64, u64, u64>> {
        transaction.map_partial(
            Maybe::some(|Deposit(amount): Deposit| amount),
            Maybe::<fn(Withdrawal) -> u64>::none(),
            Maybe::<fn(Transfer) -> u64>::none(),
        )
    }

    assert_eq!(credits_only(Transaction::T1(Deposit(3))), Maybe::some(OneOf3::T1(3)));
    assert_eq!(credits_only(Transaction::T2(Withdrawal(3))), Maybe::none());
}

// =============================================================================
// Other Arities
// =============================================================================

#[rstest]
fn two_way_union_displays_the_active_value() {
    let parsed: OneOf2<i32, String> = OneOf2::T1(42);
    assert_eq!(parsed.to_string(), "42");
    assert_eq!(parsed.index(), OneOf2Index::T1);
}

#[rstest]
fn four_and_five_way_unions_share_the_surface() {
    let four: OneOf4<bool, char, u8, &str> = OneOf4::T4("four");
    assert_eq!(four.project_4(), Maybe::some("four"));
    assert_eq!(four.map_4(str::len), Maybe::some(OneOf4::T4(4)));

    let five: OneOf5<u8, u8, u8, u8, u8> = OneOf5::T3(3);
    let (_, _, third, fourth, _) = five.into_projections();
    assert_eq!(third, Maybe::some(3));
    assert_eq!(fourth, Maybe::none());
}
