//! Custom Test Assertions
//!
//! Provides specialized assertion helpers for generated fields that give
//! more meaningful error messages than standard assertions.

use domain_boleto::FREE_FIELD_LENGTH;

/// Asserts that a value is made of exactly `len` ASCII digits
///
/// # Panics
///
/// Panics if the length differs or any character is not a digit
pub fn assert_digits(value: &str, len: usize) {
    assert_eq!(
        value.len(),
        len,
        "Expected {} digits, got {} in {:?}",
        len,
        value.len(),
        value
    );
    assert!(
        value.bytes().all(|b| b.is_ascii_digit()),
        "Expected only digits in {:?}",
        value
    );
}

/// Asserts that a value is a well-formed free field
pub fn assert_free_field(value: &str) {
    assert_digits(value, FREE_FIELD_LENGTH);
}

/// Asserts that a free field splits into the expected segments
///
/// # Arguments
///
/// * `value` - The free field
/// * `segments` - Expected segments, left to right
pub fn assert_free_field_segments(value: &str, segments: &[&str]) {
    assert_free_field(value);

    let mut offset = 0;
    for segment in segments {
        let end = offset + segment.len();
        assert!(
            end <= value.len(),
            "Segment {:?} overruns free field {:?}",
            segment,
            value
        );
        assert_eq!(
            &value[offset..end],
            *segment,
            "Segment mismatch at offset {} in {:?}",
            offset,
            value
        );
        offset = end;
    }

    assert_eq!(offset, value.len(), "Segments do not cover free field {:?}", value);
}
