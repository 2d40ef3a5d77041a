//! Fixed-width numeric formatting
//!
//! Every field of a boleto barcode is a run of decimal digits with an exact
//! width. This module provides the zero-padding formatter the bank profiles
//! compose their layouts from. Unlike lenient formatters that silently cut
//! values down to size, a value wider than its slot is an error here.

use thiserror::Error;

/// Errors that can occur while formatting numeric fields
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum NumericError {
    #[error("Value is not numeric: {value:?}")]
    NonNumeric { value: String },

    #[error("Value {value:?} does not fit in {width} digits")]
    Overflow { value: String, width: usize },
}

/// Left-pads a numeric string with `0` to exactly `width` digits
///
/// An empty value pads to `width` zeros.
///
/// # Errors
///
/// * [`NumericError::NonNumeric`] if the value holds anything but ASCII digits
/// * [`NumericError::Overflow`] if the value already has more than `width` digits
///
/// # Examples
///
/// ```
/// use core_kernel::numeric::zero_pad;
///
/// assert_eq!(zero_pad("56", 7).unwrap(), "0000056");
/// assert!(zero_pad("12345", 4).is_err());
/// ```
pub fn zero_pad(value: &str, width: usize) -> Result<String, NumericError> {
    if !value.bytes().all(|b| b.is_ascii_digit()) {
        return Err(NumericError::NonNumeric {
            value: value.to_string(),
        });
    }

    if value.len() > width {
        return Err(NumericError::Overflow {
            value: value.to_string(),
            width,
        });
    }

    Ok(format!("{:0>width$}", value, width = width))
}

/// Strips every character that is not an ASCII digit
///
/// Useful for normalising user-typed agency and account codes such as
/// `"1234-5"` before they reach [`zero_pad`].
pub fn only_digits(value: &str) -> String {
    value.chars().filter(char::is_ascii_digit).collect()
}
