//! Ticketmath - find arithmetic expressions over the digits of a ticket
//!
//! A ticket is a fixed-length run of decimal digits. The solver splits it
//! into contiguous groups, combines them with `+ - * / ^`, factorial,
//! negation and square root, and reports an expression that evaluates to a
//! chosen target, if one exists.

pub mod expression;
pub mod operations;
pub mod scan;
pub mod solver;
pub mod ticket;
pub mod utils;

// Re-export the main public API
pub use expression::{Expression, ExpressionError};
pub use operations::{BinaryOp, OperationError, UnaryOp};
pub use scan::{ScanConfig, ScanError, ScanReport, scan};
pub use solver::{Catalog, Solver, SolverConfig, SolverError};
pub use ticket::{Ticket, TicketError};
pub use utils::{UtilsError, validate_digit_string};

use log::info;

/// Find an expression over `digits` that evaluates to `target`
///
/// This is a convenience function that creates a solver with every operator
/// and answers a single query.
///
/// # Returns
///
/// * `Ok(Some(Expression))` - If a matching expression is found
/// * `Ok(None)` - If no matching expression is found
/// * `Err(SolverError)` - If the digit string is not a valid ticket
///
/// # Errors
///
/// This function will return an error if:
/// * The input digit string is empty
/// * The input digit string contains non-digit characters
/// * The input digit string is longer than 18 digits
///
/// # Examples
///
/// ```
/// use ticketmath::find_expression;
///
/// match find_expression("123456", 100) {
///     Ok(Some(expr)) => println!("Found: {}", expr),
///     Ok(None) => println!("No solution found"),
///     Err(e) => println!("Error: {}", e),
/// }
/// ```
pub fn find_expression(digits: &str, target: i64) -> Result<Option<Expression>, SolverError> {
    let ticket: Ticket = digits.parse()?;

    info!("Searching ticket {} for {}", ticket, target);
    let mut solver = Solver::default();
    Ok(solver.solve(ticket, target))
}
