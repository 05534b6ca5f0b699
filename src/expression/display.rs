use std::fmt;

use crate::expression::ast::Expression;
use crate::operations::UnaryOp;

// Every operand is parenthesised, so the text reads back unambiguously
// without precedence rules.
impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Expression::Literal(ticket) => write!(f, "{}", ticket),
            Expression::Binary { op, left, right } => {
                write!(f, "({}){}({})", left, op.symbol(), right)
            }
            Expression::Unary { op, operand } => match op {
                UnaryOp::Factorial => write!(f, "({})!", operand),
                UnaryOp::Negate => write!(f, "-({})", operand),
                UnaryOp::SquareRoot => write!(f, "sqrt({})", operand),
            },
        }
    }
}
