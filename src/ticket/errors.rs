use thiserror::Error;

use crate::utils::UtilsError;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum TicketError {
    #[error("Ticket length must be between 1 and {max}, got {length}")]
    InvalidLength { length: usize, max: usize },
    #[error("Value {value} does not fit in {length} digits")]
    ValueOutOfRange { value: u64, length: usize },
    #[error("Invalid digits: {0}")]
    Digits(#[from] UtilsError),
}
