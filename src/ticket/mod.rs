mod core;
mod errors;

pub use self::core::Ticket;
pub use errors::TicketError;
