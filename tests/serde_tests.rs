#![cfg(feature = "serde")]

//! Integration tests for serde support.
//!
//! `Either` and `Optional` use serde's externally tagged enum representation,
//! so the variant name is part of the encoded form.

use railway::control::{Either, Optional};
use rstest::rstest;

// =============================================================================
// Either Integration Tests
// =============================================================================

#[rstest]
fn test_either_json_roundtrip() {
    let left: Either<String, i32> = Either::Left("error".to_string());
    let right: Either<String, i32> = Either::Right(42);

    let left_json = serde_json::to_string(&left).unwrap();
    let right_json = serde_json::to_string(&right).unwrap();

    let restored_left: Either<String, i32> = serde_json::from_str(&left_json).unwrap();
    let restored_right: Either<String, i32> = serde_json::from_str(&right_json).unwrap();

    assert_eq!(left, restored_left);
    assert_eq!(right, restored_right);
}

#[rstest]
fn test_either_json_shape() {
    let right: Either<String, i32> = Either::Right(7);
    assert_eq!(serde_json::to_string(&right).unwrap(), r#"{"Right":7}"#);
}

// =============================================================================
// Optional Integration Tests
// =============================================================================

#[rstest]
#[case(Optional::Present(3), r#"{"Present":3}"#)]
#[case(Optional::Absent, r#""Absent""#)]
fn test_optional_json_shape(#[case] value: Optional<i32>, #[case] expected: &str) {
    assert_eq!(serde_json::to_string(&value).unwrap(), expected);
    let restored: Optional<i32> = serde_json::from_str(expected).unwrap();
    assert_eq!(restored, value);
}

#[rstest]
fn test_nested_containers_roundtrip() {
    let value: Either<String, Vec<Optional<String>>> =
        Either::Right(vec![Optional::some("a".to_string()), Optional::none()]);
    let json = serde_json::to_string(&value).unwrap();
    let restored: Either<String, Vec<Optional<String>>> = serde_json::from_str(&json).unwrap();
    assert_eq!(restored, value);
}
