use thiserror::Error;

use crate::operations::{BinaryOp, UnaryOp};

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ExpressionError {
    #[error("Operator {op} does not apply to ({left}, {right})")]
    BinaryNotApplicable { op: BinaryOp, left: i64, right: i64 },
    #[error("Operator {op} does not apply to {operand}")]
    UnaryNotApplicable { op: UnaryOp, operand: i64 },
}
