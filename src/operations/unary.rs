use std::fmt;
use std::str::FromStr;

use crate::expression::Expression;
use crate::operations::errors::OperationError;
use crate::operations::tables::{FACTORIALS, SQUARE_ROOT_LIMIT};

/// Unary operators, in the order a default solver tries them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UnaryOp {
    Factorial,
    Negate,
    SquareRoot,
}

impl UnaryOp {
    pub const ALL: [UnaryOp; 3] = [UnaryOp::Factorial, UnaryOp::Negate, UnaryOp::SquareRoot];

    pub fn name(self) -> &'static str {
        match self {
            UnaryOp::Factorial => "fact",
            UnaryOp::Negate => "neg",
            UnaryOp::SquareRoot => "sqrt",
        }
    }

    pub fn apply(self, a: i64) -> Option<i64> {
        match self {
            UnaryOp::Factorial => usize::try_from(a)
                .ok()
                .and_then(|n| FACTORIALS.get(n))
                .copied(),
            UnaryOp::Negate => a.checked_neg(),
            UnaryOp::SquareRoot => {
                if a <= 0 {
                    return None;
                }
                let root = a.isqrt();
                (root * root == a).then_some(root)
            }
        }
    }

    /// An operand `a` with `op(a) == c`. Factorial has no inverse.
    pub fn reverse(self, c: i64) -> Option<i64> {
        match self {
            UnaryOp::Factorial => None,
            UnaryOp::Negate => c.checked_neg(),
            UnaryOp::SquareRoot => {
                if !(0..=SQUARE_ROOT_LIMIT).contains(&c) {
                    return None;
                }
                Some(c * c)
            }
        }
    }

    pub fn render(self, operand: Expression) -> Expression {
        Expression::Unary {
            op: self,
            operand: Box::new(operand),
        }
    }
}

impl fmt::Display for UnaryOp {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for UnaryOp {
    type Err = OperationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "fact" | "!" => Ok(UnaryOp::Factorial),
            "neg" => Ok(UnaryOp::Negate),
            "sqrt" => Ok(UnaryOp::SquareRoot),
            _ => Err(OperationError::UnknownUnary(s.to_string())),
        }
    }
}
