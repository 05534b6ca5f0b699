//! Digit-string helpers shared by tickets and the command line

mod digits;
mod errors;
mod validation;

pub use digits::{MAX_DIGITS, digits_to_value, format_digits, pow10};
pub use errors::UtilsError;
pub use validation::validate_digit_string;
