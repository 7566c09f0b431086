//! Integration tests for `Either<E, A>` and `Error`.

#![cfg(feature = "control")]

use railway::control::{Either, Error, ErrorEither};
use rstest::rstest;
use std::cell::Cell;

// =============================================================================
// Construction and Type Checking
// =============================================================================

#[rstest]
fn left_is_left() {
    let value: Either<&str, i32> = Either::Left("nope");
    assert!(value.is_left());
    assert!(!value.is_right());
}

#[rstest]
fn right_is_right() {
    let value: Either<&str, i32> = Either::Right(1);
    assert!(value.is_right());
    assert!(!value.is_left());
}

#[rstest]
fn predicates_do_not_consume() {
    let value: Either<String, String> = Either::Right("kept".to_string());
    let _ = value.is_left();
    assert_eq!(value.right_value(), Some("kept".to_string()));
}

// =============================================================================
// fromPredicate
// =============================================================================

#[rstest]
fn too_young_is_left_with_message() {
    let result = Either::from_predicate(8_u32, |age| *age >= 21, || Error::new("too young"));
    let message = result.fold(|error| error.message().to_string(), |_| String::new());
    assert_eq!(message, "too young");
}

#[rstest]
fn old_enough_is_right() {
    let result = Either::from_predicate(23_u32, |age| *age >= 21, || Error::new("too young"));
    assert_eq!(result, Either::Right(23));
}

#[rstest]
#[case(5, 0)]
#[case(-5, 1)]
fn on_false_runs_only_on_failure(#[case] input: i32, #[case] expected_calls: usize) {
    let calls = Cell::new(0);
    let _ = Either::from_predicate(input, |n| *n > 0, || {
        calls.set(calls.get() + 1);
        "negative"
    });
    assert_eq!(calls.get(), expected_calls);
}

// =============================================================================
// map / mapLeft / chain
// =============================================================================

#[rstest]
fn map_left_passes_right_through() {
    let value: Either<i32, &str> = Either::Right("same");
    assert_eq!(value.map_left(|n| n * 2), Either::Right("same"));
}

#[rstest]
fn map_passes_left_through_untouched() {
    let value: Either<Error, i32> = Either::Left(Error::new("original"));
    assert_eq!(value.map(|n| n + 1), Either::Left(Error::new("original")));
}

#[rstest]
fn bimap_transforms_active_side() {
    let left: Either<&str, i32> = Either::Left("abc");
    let right: Either<&str, i32> = Either::Right(2);
    assert_eq!(left.bimap(str::len, |n| n * 2), Either::Left(3));
    assert_eq!(right.bimap(str::len, |n| n * 2), Either::Right(4));
}

#[rstest]
fn chain_propagates_first_left() {
    let fail = |label: &'static str| move |_: i32| Either::<&str, i32>::Left(label);
    let result = Either::<&str, i32>::Right(1)
        .chain(fail("first"))
        .chain(fail("second"))
        .map(|n| n + 1);
    assert_eq!(result, Either::Left("first"));
}

// =============================================================================
// tryCatchError
// =============================================================================

#[rstest]
fn try_catch_error_normal_return_is_right() {
    assert_eq!(Either::try_catch_error(|| "fine"), Either::Right("fine"));
}

#[rstest]
fn try_catch_error_panic_is_left() {
    let result: ErrorEither<i32> = Either::try_catch_error(|| {
        let divisor = std::hint::black_box(0);
        10 / divisor
    });
    assert_eq!(result, Either::Left(Error::new("attempt to divide by zero")));
}

#[rstest]
fn try_catch_error_error_payload_is_kept() {
    let result: ErrorEither<i32> =
        Either::try_catch_error(|| -> i32 { std::panic::panic_any(Error::new("structured")) });
    assert_eq!(result, Either::Left(Error::new("structured")));
}

#[rstest]
fn try_catch_converts_err_and_keeps_cause() {
    let result = Either::try_catch(|| "forty".parse::<u8>().map_err(Error::wrap));
    let error = result.left_value();
    assert!(error.as_ref().is_some_and(|error| error.cause().is_some()));
}

// =============================================================================
// Collections
// =============================================================================

#[rstest]
fn sequence_all_right() {
    let values: Vec<Either<&str, i32>> = vec![Either::Right(1), Either::Right(2), Either::Right(3)];
    assert_eq!(Either::sequence(values), Either::Right(vec![1, 2, 3]));
}

#[rstest]
fn sequence_reports_first_left_by_position() {
    let values: Vec<Either<&str, i32>> =
        vec![Either::Right(1), Either::Left("second"), Either::Left("third")];
    assert_eq!(Either::sequence(values), Either::Left("second"));
}

#[rstest]
fn traverse_parses_all_or_first_failure() {
    let parse = |text: &str| Either::from(text.parse::<i32>().map_err(|_| format!("bad: {text}")));
    assert_eq!(Either::traverse(["1", "2"], parse), Either::Right(vec![1, 2]));
    assert_eq!(
        Either::traverse(["1", "x", "y"], parse),
        Either::Left("bad: x".to_string())
    );
}

// =============================================================================
// Conversions
// =============================================================================

#[rstest]
fn result_roundtrip() {
    let either: Either<String, i32> = Either::from(Ok::<i32, String>(42));
    assert_eq!(either.clone().into_result(), Ok(42));
    let result: Result<i32, String> = either.into();
    assert_eq!(result, Ok(42));
}

#[rstest]
fn swap_exchanges_sides() {
    let value: Either<&str, i32> = Either::Left("left");
    assert_eq!(value.swap(), Either::Right("left"));
}
