use log::debug;

use crate::expression::ast::Expression;
use crate::expression::errors::ExpressionError;

impl Expression {
    /// Recompute the value by applying every operator forward.
    ///
    /// # Errors
    ///
    /// Returns an error for the first operator that does not apply to its
    /// operands.
    pub fn evaluate(&self) -> Result<i64, ExpressionError> {
        let result = match self {
            Expression::Literal(ticket) => Ok(ticket.operand()),
            Expression::Binary { op, left, right } => {
                let left = left.evaluate()?;
                let right = right.evaluate()?;
                op.apply(left, right)
                    .ok_or(ExpressionError::BinaryNotApplicable {
                        op: *op,
                        left,
                        right,
                    })
            }
            Expression::Unary { op, operand } => {
                let operand = operand.evaluate()?;
                op.apply(operand)
                    .ok_or(ExpressionError::UnaryNotApplicable { op: *op, operand })
            }
        };

        if let Err(e) = &result {
            debug!("Evaluation of {} failed: {}", self, e);
        }
        result
    }
}
