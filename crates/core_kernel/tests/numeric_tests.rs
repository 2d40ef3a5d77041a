//! Tests for fixed-width numeric formatting

use core_kernel::numeric::{only_digits, zero_pad, NumericError};

mod zero_pad_tests {
    use super::*;

    #[test]
    fn test_pads_to_exact_width() {
        assert_eq!(zero_pad("7654321", 7).unwrap(), "7654321");
        assert_eq!(zero_pad("99", 10).unwrap(), "0000000099");
        assert_eq!(zero_pad("1", 17).unwrap(), "00000000000000001");
    }

    #[test]
    fn test_keeps_existing_leading_zeros() {
        assert_eq!(zero_pad("0042", 6).unwrap(), "000042");
    }

    #[test]
    fn test_zero_width_accepts_only_empty() {
        assert_eq!(zero_pad("", 0).unwrap(), "");
        assert!(zero_pad("1", 0).is_err());
    }

    #[test]
    fn test_overflow_is_not_truncated() {
        match zero_pad("123456789012", 11) {
            Err(NumericError::Overflow { value, width }) => {
                assert_eq!(value, "123456789012");
                assert_eq!(width, 11);
            }
            other => panic!("Expected Overflow, got {:?}", other),
        }
    }

    #[test]
    fn test_rejects_signs_and_spaces() {
        assert!(matches!(zero_pad("-1", 4), Err(NumericError::NonNumeric { .. })));
        assert!(matches!(zero_pad(" 1", 4), Err(NumericError::NonNumeric { .. })));
        assert!(matches!(zero_pad("1.5", 4), Err(NumericError::NonNumeric { .. })));
    }
}

mod digit_helpers_tests {
    use super::*;

    #[test]
    fn test_only_digits_strips_punctuation() {
        assert_eq!(only_digits("0001-9"), "00019");
        assert_eq!(only_digits("12.345.678-X"), "12345678");
    }
}
