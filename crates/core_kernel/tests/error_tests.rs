//! Tests for core_kernel error types

use core_kernel::checksum::ChecksumError;
use core_kernel::error::CoreError;
use core_kernel::numeric::NumericError;

#[test]
fn test_core_error_validation() {
    let error = CoreError::validation("Invalid input");

    match error {
        CoreError::Validation(msg) => assert_eq!(msg, "Invalid input"),
        _ => panic!("Expected Validation error"),
    }
}

#[test]
fn test_core_error_from_numeric_error() {
    let numeric_error = NumericError::Overflow {
        value: "123456".to_string(),
        width: 4,
    };
    let core_error: CoreError = numeric_error.into();

    assert!(matches!(core_error, CoreError::Numeric(NumericError::Overflow { width: 4, .. })));
}

#[test]
fn test_core_error_from_checksum_error() {
    let core_error: CoreError = ChecksumError::Empty.into();

    assert_eq!(core_error, CoreError::Checksum(ChecksumError::Empty));
}

#[test]
fn test_core_error_display() {
    let error: CoreError = NumericError::NonNumeric {
        value: "12a".to_string(),
    }
    .into();
    let display = format!("{}", error);

    assert!(display.contains("Numeric format error"));
    assert!(display.contains("12a"));
}
