use crate::operations::tables::{FACTORIALS, POWER_LIMIT};
use crate::operations::{BinaryOp, OperationError, UnaryOp};

const OPERANDS: std::ops::RangeInclusive<i64> = -30..=30;

fn assert_inverse_consistent(op: BinaryOp) {
    for a in OPERANDS {
        for b in OPERANDS {
            let Some(c) = op.apply(a, b) else {
                continue;
            };
            // a zero operand carries no information about the other one
            if !(matches!(op, BinaryOp::Multiply) && b == 0) {
                assert_eq!(op.reverse_left(c, b), Some(a), "{} {} {}", a, op, b);
            }
            if !(matches!(op, BinaryOp::Multiply | BinaryOp::Divide) && a == 0) {
                assert_eq!(op.reverse_right(c, a), Some(b), "{} {} {}", a, op, b);
            }
        }
    }
}

#[test]
fn test_add_inverse_consistency() {
    assert_inverse_consistent(BinaryOp::Add);
}

#[test]
fn test_subtract_inverse_consistency() {
    assert_inverse_consistent(BinaryOp::Subtract);
}

#[test]
fn test_multiply_inverse_consistency() {
    assert_inverse_consistent(BinaryOp::Multiply);
}

#[test]
fn test_divide_inverse_consistency() {
    assert_inverse_consistent(BinaryOp::Divide);
}

#[test]
fn test_multiply_reverse_requires_exact_division() {
    assert_eq!(BinaryOp::Multiply.reverse_left(12, 0), None);
    assert_eq!(BinaryOp::Multiply.reverse_left(0, 0), None);
    assert_eq!(BinaryOp::Multiply.reverse_left(13, 4), None);
    assert_eq!(BinaryOp::Multiply.reverse_left(12, 4), Some(3));
    assert_eq!(BinaryOp::Multiply.reverse_left(-12, 4), Some(-3));
    assert_eq!(BinaryOp::Multiply.reverse_right(12, 0), None);
    assert_eq!(BinaryOp::Multiply.reverse_right(12, -6), Some(-2));
}

#[test]
fn test_divide_apply_requires_exact_division() {
    assert_eq!(BinaryOp::Divide.apply(7, 0), None);
    assert_eq!(BinaryOp::Divide.apply(0, 0), None);
    assert_eq!(BinaryOp::Divide.apply(7, 2), None);
    assert_eq!(BinaryOp::Divide.apply(8, 2), Some(4));
    assert_eq!(BinaryOp::Divide.apply(0, 5), Some(0));
    assert_eq!(BinaryOp::Divide.apply(-9, 3), Some(-3));
}

#[test]
fn test_divide_reverse_guards() {
    assert_eq!(BinaryOp::Divide.reverse_left(5, 0), None);
    assert_eq!(BinaryOp::Divide.reverse_left(5, 3), Some(15));
    assert_eq!(BinaryOp::Divide.reverse_right(5, 0), None);
    assert_eq!(BinaryOp::Divide.reverse_right(4, 6), None);
    assert_eq!(BinaryOp::Divide.reverse_right(3, 6), Some(2));
    assert_eq!(BinaryOp::Divide.reverse_right(0, 6), None);
}

#[test]
fn test_power_apply() {
    for a in -5..=5 {
        assert_eq!(BinaryOp::Power.apply(a, 0), Some(1), "{}^0", a);
    }
    assert_eq!(BinaryOp::Power.apply(2, -1), None);
    assert_eq!(BinaryOp::Power.apply(-2, 3), None);
    assert_eq!(BinaryOp::Power.apply(1, 1_000_000), Some(1));
    assert_eq!(BinaryOp::Power.apply(0, 7), Some(0));
    assert_eq!(BinaryOp::Power.apply(3, 4), Some(81));
    assert_eq!(BinaryOp::Power.apply(10, 4), Some(POWER_LIMIT));
    assert_eq!(BinaryOp::Power.apply(10, 5), None);
    assert_eq!(BinaryOp::Power.apply(2, 13), Some(8192));
    assert_eq!(BinaryOp::Power.apply(2, 14), None);
    assert_eq!(BinaryOp::Power.apply(10_001, 1), None);
}

#[test]
fn test_power_reverse_left_regression() {
    assert_eq!(BinaryOp::Power.reverse_left(100, 2), Some(10));
}

#[test]
fn test_power_reverse_left() {
    assert_eq!(BinaryOp::Power.reverse_left(8, 3), Some(2));
    assert_eq!(BinaryOp::Power.reverse_left(10_000, 4), Some(10));
    assert_eq!(BinaryOp::Power.reverse_left(9_801, 2), Some(99));
    assert_eq!(BinaryOp::Power.reverse_left(7, 1), Some(7));
    assert_eq!(BinaryOp::Power.reverse_left(7, 2), None);
    assert_eq!(BinaryOp::Power.reverse_left(0, 2), None);
    assert_eq!(BinaryOp::Power.reverse_left(-8, 3), None);
    assert_eq!(BinaryOp::Power.reverse_left(8, 0), None);
}

#[test]
fn test_power_reverse_left_agrees_with_apply() {
    for a in 2..=100 {
        for b in 1..=13 {
            if let Some(c) = BinaryOp::Power.apply(a, b) {
                assert_eq!(BinaryOp::Power.reverse_left(c, b), Some(a), "{}^{}", a, b);
            }
        }
    }
}

#[test]
fn test_power_reverse_right() {
    assert_eq!(BinaryOp::Power.reverse_right(1024, 2), Some(10));
    assert_eq!(BinaryOp::Power.reverse_right(1, 7), Some(0));
    assert_eq!(BinaryOp::Power.reverse_right(81, 3), Some(4));
    assert_eq!(BinaryOp::Power.reverse_right(80, 3), None);
    assert_eq!(BinaryOp::Power.reverse_right(0, 0), Some(1));
    // one never grows, so the step budget runs out
    assert_eq!(BinaryOp::Power.reverse_right(5, 1), None);
}

#[test]
fn test_power_reverse_right_only_returns_forward_exponents() {
    // 2^14 is reachable by multiplying but beyond the power cap
    assert_eq!(BinaryOp::Power.reverse_right(16_384, 2), None);
    // negative bases never raise
    assert_eq!(BinaryOp::Power.reverse_right(1024, -2), None);
    assert_eq!(BinaryOp::Power.reverse_right(4, -2), None);
    assert_eq!(BinaryOp::Power.reverse_right(-8, -2), None);
}

#[test]
fn test_factorial() {
    for n in 0..=20_i64 {
        let expected = FACTORIALS.get(n as usize).copied();
        assert!(expected.is_some());
        assert_eq!(UnaryOp::Factorial.apply(n), expected);
    }
    assert_eq!(UnaryOp::Factorial.apply(5), Some(120));
    assert_eq!(UnaryOp::Factorial.apply(-1), None);
    assert_eq!(UnaryOp::Factorial.apply(21), None);
    for c in [1, 2, 6, 24, 120, 0, -1] {
        assert_eq!(UnaryOp::Factorial.reverse(c), None);
    }
}

#[test]
fn test_negate() {
    assert_eq!(UnaryOp::Negate.apply(5), Some(-5));
    assert_eq!(UnaryOp::Negate.apply(-5), Some(5));
    assert_eq!(UnaryOp::Negate.apply(0), Some(0));
    assert_eq!(UnaryOp::Negate.apply(i64::MIN), None);
    assert_eq!(UnaryOp::Negate.reverse(7), Some(-7));
}

#[test]
fn test_square_root_apply() {
    assert_eq!(UnaryOp::SquareRoot.apply(1), Some(1));
    assert_eq!(UnaryOp::SquareRoot.apply(49), Some(7));
    assert_eq!(UnaryOp::SquareRoot.apply(50), None);
    assert_eq!(UnaryOp::SquareRoot.apply(0), None);
    assert_eq!(UnaryOp::SquareRoot.apply(-4), None);
    assert_eq!(UnaryOp::SquareRoot.apply(999_999_999_999_999_999), None);
    assert_eq!(
        UnaryOp::SquareRoot.apply(999_999_998_000_000_001),
        Some(999_999_999)
    );
}

#[test]
fn test_square_root_reverse() {
    assert_eq!(UnaryOp::SquareRoot.reverse(0), Some(0));
    assert_eq!(UnaryOp::SquareRoot.reverse(12), Some(144));
    assert_eq!(
        UnaryOp::SquareRoot.reverse(1_000_000),
        Some(1_000_000_000_000)
    );
    assert_eq!(UnaryOp::SquareRoot.reverse(1_000_001), None);
    assert_eq!(UnaryOp::SquareRoot.reverse(-1), None);
}

#[test]
fn test_overflow_is_not_applicable() {
    assert_eq!(BinaryOp::Add.apply(i64::MAX, 1), None);
    assert_eq!(BinaryOp::Subtract.apply(i64::MIN, 1), None);
    assert_eq!(
        BinaryOp::Multiply.apply(2_432_902_008_176_640_000, 20),
        None
    );
    assert_eq!(BinaryOp::Divide.apply(i64::MIN, -1), None);
    assert_eq!(BinaryOp::Divide.reverse_left(i64::MAX, 2), None);
}

#[test]
fn test_parse_operators() {
    assert_eq!("add".parse::<BinaryOp>(), Ok(BinaryOp::Add));
    assert_eq!("*".parse::<BinaryOp>(), Ok(BinaryOp::Multiply));
    assert_eq!(" POW ".parse::<BinaryOp>(), Ok(BinaryOp::Power));
    assert_eq!(
        "mod".parse::<BinaryOp>(),
        Err(OperationError::UnknownBinary("mod".to_string()))
    );
    assert_eq!("!".parse::<UnaryOp>(), Ok(UnaryOp::Factorial));
    assert_eq!("sqrt".parse::<UnaryOp>(), Ok(UnaryOp::SquareRoot));
    assert_eq!(
        "abs".parse::<UnaryOp>(),
        Err(OperationError::UnknownUnary("abs".to_string()))
    );
}

#[test]
fn test_names_round_trip() {
    for op in BinaryOp::ALL {
        assert_eq!(op.name().parse::<BinaryOp>(), Ok(op));
        assert_eq!(op.symbol().to_string().parse::<BinaryOp>(), Ok(op));
    }
    for op in UnaryOp::ALL {
        assert_eq!(op.to_string().parse::<UnaryOp>(), Ok(op));
    }
}
