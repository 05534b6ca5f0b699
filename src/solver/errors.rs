use thiserror::Error;

use crate::ticket::TicketError;

#[derive(Error, Debug)]
pub enum SolverError {
    #[error("Ticket error: {0}")]
    TicketError(#[from] TicketError),
}
