use log::{debug, warn};

use crate::utils::digits::MAX_DIGITS;
use crate::utils::errors::UtilsError;

/// # Errors
///
/// Returns an error if the string is empty, contains any non-ASCII-digit
/// characters, or is longer than [`MAX_DIGITS`].
pub fn validate_digit_string(digit_string: &str) -> Result<(), UtilsError> {
    debug!("Validating digit string: '{}'", digit_string);

    if digit_string.is_empty() {
        warn!("Digit string is empty");
        return Err(UtilsError::EmptyDigitString);
    }

    if !digit_string.chars().all(|c| c.is_ascii_digit()) {
        warn!(
            "Digit string contains non-digit characters: '{}'",
            digit_string
        );
        return Err(UtilsError::InvalidDigitString(digit_string.to_string()));
    }

    if digit_string.len() > MAX_DIGITS {
        warn!(
            "Digit string '{}' is longer than {} digits",
            digit_string, MAX_DIGITS
        );
        return Err(UtilsError::TooManyDigits {
            length: digit_string.len(),
            max: MAX_DIGITS,
        });
    }

    debug!("Digit string validation successful");
    Ok(())
}
