//! Integration tests for the Display and Debug implementations.

use optio::optional::{AbsentValueError, ConstructionError, Optional, OptionalError};

#[test]
fn test_some_display() {
    assert_eq!(format!("{}", Optional::<i32>::of(1)), "Some( 1 )");
}

#[test]
fn test_some_string_display() {
    let value = Optional::<String>::of("hello".to_string());
    assert_eq!(format!("{}", value), "Some( hello )");
}

#[test]
fn test_none_display() {
    assert_eq!(format!("{}", Optional::<i32>::none()), "None()");
}

#[test]
fn test_nested_display() {
    let nested = Optional::Some(Optional::Some(3));
    assert_eq!(format!("{}", nested), "Some( Some( 3 ) )");
}

#[test]
fn test_debug_formatting() {
    assert_eq!(format!("{:?}", Optional::<&str>::of("x")), "Some(\"x\")");
    assert_eq!(format!("{:?}", Optional::<&str>::none()), "None");
}

#[test]
fn test_error_display() {
    assert_eq!(
        format!("{}", ConstructionError::AbsentSome),
        "Cannot create a Some of an absent value"
    );
    assert_eq!(
        format!("{}", OptionalError::from(AbsentValueError::unwrap_none())),
        "Called unwrap on a None value."
    );
}
