//! Weighted modulo-11 check digits
//!
//! Boleto identifiers are printed with a verification digit computed as:
//!
//! - weights run 2, 3, ..., 9 from the rightmost digit and wrap back to 2
//! - the weighted sum is multiplied by 10 before taking the remainder
//! - a remainder of 10 is replaced by 0

use thiserror::Error;

const START_WEIGHT: u32 = 2;
const MAX_WEIGHT: u32 = 9;

/// Errors that can occur while computing a check digit
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ChecksumError {
    #[error("Cannot compute a check digit over an empty value")]
    Empty,

    #[error("Value is not numeric: {0:?}")]
    NonNumeric(String),
}

/// Sum of the digits times their weights, rightmost first
fn weighted_sum(digits: &str) -> Result<u64, ChecksumError> {
    if digits.is_empty() {
        return Err(ChecksumError::Empty);
    }

    let mut weight = START_WEIGHT;
    let mut sum = 0u64;
    for c in digits.chars().rev() {
        let digit = c
            .to_digit(10)
            .ok_or_else(|| ChecksumError::NonNumeric(digits.to_string()))?;
        sum += u64::from(digit * weight);
        weight = if weight >= MAX_WEIGHT {
            START_WEIGHT
        } else {
            weight + 1
        };
    }

    Ok(sum)
}

/// Computes the boleto modulo-11 check digit
///
/// # Examples
///
/// ```
/// use core_kernel::checksum::modulo11;
///
/// assert_eq!(modulo11("12340000056").unwrap(), 9);
/// ```
pub fn modulo11(digits: &str) -> Result<u32, ChecksumError> {
    let sum = weighted_sum(digits)?;

    match (sum * 10) % 11 {
        10 => Ok(0),
        digit => Ok(digit as u32),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_weighted_sum_wraps_weights() {
        assert_eq!(weighted_sum("123").unwrap(), 16);
        assert_eq!(weighted_sum("10000000").unwrap(), 9);
        // tenth digit from the right gets weight 3 after wrapping
        assert_eq!(weighted_sum("1000000000").unwrap(), 3);
    }

    #[test]
    fn test_modulo11() {
        assert_eq!(modulo11("12340000056").unwrap(), 9);
        assert_eq!(modulo11("12345600078").unwrap(), 5);
        assert_eq!(modulo11("12340000007").unwrap(), 0);
    }

    #[test]
    fn test_remainder_ten_maps_to_zero() {
        // (sum * 10) % 11 == 10 for this value
        assert_eq!(modulo11("12340000002").unwrap(), 0);
    }

    #[test]
    fn test_errors() {
        assert_eq!(modulo11(""), Err(ChecksumError::Empty));
        assert!(matches!(modulo11("12a"), Err(ChecksumError::NonNumeric(_))));
    }
}
