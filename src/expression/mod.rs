//! Witness expressions recording how a value was derived from a ticket

mod ast;
mod display;
mod errors;
mod eval;

pub use ast::Expression;
pub use errors::ExpressionError;
