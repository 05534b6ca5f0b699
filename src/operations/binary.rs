use std::fmt;
use std::str::FromStr;

use crate::expression::Expression;
use crate::operations::errors::OperationError;
use crate::operations::tables::{EXPONENT_SEARCH_STEPS, POWER_LIMIT};

/// Binary operators, in the order a default solver tries them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BinaryOp {
    Add,
    Subtract,
    Multiply,
    Divide,
    Power,
}

impl BinaryOp {
    pub const ALL: [BinaryOp; 5] = [
        BinaryOp::Add,
        BinaryOp::Subtract,
        BinaryOp::Multiply,
        BinaryOp::Divide,
        BinaryOp::Power,
    ];

    pub fn name(self) -> &'static str {
        match self {
            BinaryOp::Add => "add",
            BinaryOp::Subtract => "sub",
            BinaryOp::Multiply => "mul",
            BinaryOp::Divide => "div",
            BinaryOp::Power => "pow",
        }
    }

    pub fn symbol(self) -> char {
        match self {
            BinaryOp::Add => '+',
            BinaryOp::Subtract => '-',
            BinaryOp::Multiply => '*',
            BinaryOp::Divide => '/',
            BinaryOp::Power => '^',
        }
    }

    /// `a op b`
    pub fn apply(self, a: i64, b: i64) -> Option<i64> {
        match self {
            BinaryOp::Add => a.checked_add(b),
            BinaryOp::Subtract => a.checked_sub(b),
            BinaryOp::Multiply => a.checked_mul(b),
            BinaryOp::Divide => exact_quotient(a, b),
            BinaryOp::Power => power(a, b),
        }
    }

    /// The left operand `a` such that `a op b == c`.
    pub fn reverse_left(self, c: i64, b: i64) -> Option<i64> {
        match self {
            BinaryOp::Add => c.checked_sub(b),
            BinaryOp::Subtract => c.checked_add(b),
            BinaryOp::Multiply => exact_quotient(c, b),
            BinaryOp::Divide => {
                if b == 0 {
                    None
                } else {
                    c.checked_mul(b)
                }
            }
            BinaryOp::Power => power_base(c, b),
        }
    }

    /// The right operand `b` such that `a op b == c`.
    pub fn reverse_right(self, c: i64, a: i64) -> Option<i64> {
        match self {
            BinaryOp::Add => c.checked_sub(a),
            BinaryOp::Subtract => a.checked_sub(c),
            BinaryOp::Multiply => exact_quotient(c, a),
            BinaryOp::Divide => {
                if a == 0 {
                    None
                } else {
                    exact_quotient(a, c)
                }
            }
            BinaryOp::Power => power_exponent(c, a),
        }
    }

    pub fn render(self, left: Expression, right: Expression) -> Expression {
        Expression::Binary {
            op: self,
            left: Box::new(left),
            right: Box::new(right),
        }
    }
}

/// `a / b` when `b` divides `a` exactly.
fn exact_quotient(a: i64, b: i64) -> Option<i64> {
    if a.checked_rem(b)? != 0 {
        return None;
    }
    a.checked_div(b)
}

fn power(base: i64, exp: i64) -> Option<i64> {
    if exp == 0 {
        return Some(1);
    }
    if exp < 0 || base < 0 {
        return None;
    }
    if base == 1 {
        return Some(1);
    }
    if base == 0 {
        return Some(0);
    }

    let mut product: i64 = 1;
    for _ in 0..exp {
        product = product.checked_mul(base)?;
        if product > POWER_LIMIT {
            return None;
        }
    }
    Some(product)
}

/// Integer `exp`-th root of `result`. The floating-point estimate can land
/// one below the true root, so the estimate and its successor are both
/// checked against `power`.
fn power_base(result: i64, exp: i64) -> Option<i64> {
    if result <= 0 || exp <= 0 {
        return None;
    }
    let guess = 2_f64.powf((result as f64).log2() / exp as f64) as i64;
    [Some(guess), guess.checked_add(1)]
        .into_iter()
        .flatten()
        .find(|&base| power(base, exp) == Some(result))
}

/// Exponent `e < EXPONENT_SEARCH_STEPS` with `base^e == result`, confirmed
/// against `power`.
fn power_exponent(result: i64, base: i64) -> Option<i64> {
    let mut product: i64 = 1;
    for exp in 0..EXPONENT_SEARCH_STEPS {
        if product == result {
            return (power(base, exp) == Some(result)).then_some(exp);
        }
        product = product.checked_mul(base)?;
        if product > result {
            return None;
        }
    }
    None
}

impl fmt::Display for BinaryOp {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for BinaryOp {
    type Err = OperationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "add" | "+" => Ok(BinaryOp::Add),
            "sub" | "-" => Ok(BinaryOp::Subtract),
            "mul" | "*" => Ok(BinaryOp::Multiply),
            "div" | "/" => Ok(BinaryOp::Divide),
            "pow" | "^" => Ok(BinaryOp::Power),
            _ => Err(OperationError::UnknownBinary(s.to_string())),
        }
    }
}
