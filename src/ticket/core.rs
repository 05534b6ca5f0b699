use std::fmt;
use std::str::FromStr;

use crate::ticket::errors::TicketError;
use crate::utils::{MAX_DIGITS, digits_to_value, format_digits, pow10};

/// A fixed-length run of decimal digits.
///
/// The length is tracked separately from the value, so `0042` and `42` are
/// different tickets. Invariant: `1 <= length <= MAX_DIGITS` and
/// `value < 10^length`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Ticket {
    value: u64,
    length: usize,
}

impl Ticket {
    /// # Errors
    ///
    /// Returns an error if `length` is zero or larger than 18, or if `value`
    /// needs more than `length` digits.
    pub fn new(value: u64, length: usize) -> Result<Self, TicketError> {
        if length == 0 || length > MAX_DIGITS {
            return Err(TicketError::InvalidLength {
                length,
                max: MAX_DIGITS,
            });
        }
        if value >= pow10(length) {
            return Err(TicketError::ValueOutOfRange { value, length });
        }
        Ok(Self { value, length })
    }

    pub fn value(&self) -> u64 {
        self.value
    }

    pub fn length(&self) -> usize {
        self.length
    }

    /// The ticket's value as an arithmetic operand.
    pub fn operand(&self) -> i64 {
        // value < 10^18 < i64::MAX
        self.value as i64
    }

    /// Split into the leading `length - at` digits and the trailing `at`
    /// digits.
    ///
    /// # Panics
    ///
    /// Panics unless `0 < at < length`.
    pub fn split(&self, at: usize) -> (Ticket, Ticket) {
        assert!(
            0 < at && at < self.length,
            "split position {} outside 1..{} for ticket {}",
            at,
            self.length,
            self
        );
        let base = pow10(at);
        let prefix = Ticket {
            value: self.value / base,
            length: self.length - at,
        };
        let suffix = Ticket {
            value: self.value % base,
            length: at,
        };
        (prefix, suffix)
    }
}

impl fmt::Display for Ticket {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", format_digits(self.value, self.length))
    }
}

impl FromStr for Ticket {
    type Err = TicketError;

    fn from_str(digits: &str) -> Result<Self, Self::Err> {
        let value = digits_to_value(digits)?;
        Self::new(value, digits.len())
    }
}
