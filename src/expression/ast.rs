use crate::operations::{BinaryOp, UnaryOp};
use crate::ticket::Ticket;

/// A derivation of a value from the digits of a ticket.
///
/// Built by the operators' `render` methods; the search never inspects it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expression {
    Literal(Ticket),
    Binary {
        op: BinaryOp,
        left: Box<Expression>,
        right: Box<Expression>,
    },
    Unary {
        op: UnaryOp,
        operand: Box<Expression>,
    },
}

impl Expression {
    /// The literal digits used, left to right.
    pub fn digits(&self) -> String {
        fn collect(expr: &Expression, out: &mut String) {
            match expr {
                Expression::Literal(ticket) => out.push_str(&ticket.to_string()),
                Expression::Binary { left, right, .. } => {
                    collect(left, out);
                    collect(right, out);
                }
                Expression::Unary { operand, .. } => collect(operand, out),
            }
        }

        let mut out = String::new();
        collect(self, &mut out);
        out
    }
}
