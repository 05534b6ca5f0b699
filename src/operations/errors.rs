use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum OperationError {
    #[error("Unknown binary operator '{0}' (expected one of add, sub, mul, div, pow)")]
    UnknownBinary(String),
    #[error("Unknown unary operator '{0}' (expected one of fact, neg, sqrt)")]
    UnknownUnary(String),
}
