use log::debug;

use crate::utils::errors::UtilsError;
use crate::utils::validation::validate_digit_string;

/// Longest digit sequence whose value always fits an `i64` operand.
pub const MAX_DIGITS: usize = 18;

/// `10^exp` for `exp <= MAX_DIGITS`.
pub fn pow10(exp: usize) -> u64 {
    debug_assert!(exp <= MAX_DIGITS);
    (0..exp).fold(1, |acc, _| acc * 10)
}

/// # Errors
///
/// Returns an error if the string fails [`validate_digit_string`].
pub fn digits_to_value(digits: &str) -> Result<u64, UtilsError> {
    validate_digit_string(digits)?;

    let value = digits
        .bytes()
        .fold(0_u64, |acc, b| acc * 10 + u64::from(b - b'0'));
    debug!("Converted '{}' to {}", digits, value);
    Ok(value)
}

/// Render `value` as exactly `length` digits, keeping leading zeros.
pub fn format_digits(value: u64, length: usize) -> String {
    format!("{:0width$}", value, width = length)
}
