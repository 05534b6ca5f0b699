//! The closed catalog of operators a solver combines digits with.
//!
//! Every operator is stateless and total: a step that does not apply to its
//! operands (inexact division, a power past the cap, a factorial outside the
//! table, `i64` overflow) yields `None` rather than an error.

mod binary;
mod errors;
pub mod tables;
mod unary;

pub use binary::BinaryOp;
pub use errors::OperationError;
pub use unary::UnaryOp;

#[cfg(test)]
mod tests;
