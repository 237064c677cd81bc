use crate::composite::BinaryOp;
use crate::operand::{OperandKind, OperandSide};
use thiserror::Error;

/// An error occurred while evaluating a function or its derivative.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FunctionError {
    /// The denominator of a quotient evaluated to zero at the queried point.
    #[error("Division by zero: denominator {denominator} vanishes at x = {x}")]
    DivisionByZero { denominator: String, x: f64 },
}

/// An arithmetic combination was attempted with an operand that is not a function.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("Invalid operand for '{op}': {side} operand is {found}, expected a function")]
pub struct InvalidOperand {
    pub op: BinaryOp,
    pub side: OperandSide,
    pub found: OperandKind,
}

/// An error occurred while creating a function from a type tag and its parameters.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CreateFunctionError {
    /// The type tag does not name a known function.
    #[error("Unknown function type {0:?}")]
    UnknownType(String),
    /// The parameter count does not match what the function type requires.
    #[error("Invalid parameters for {tag}: expected {expected} parameter(s), got {got}")]
    InvalidParameters {
        tag: &'static str,
        expected: usize,
        got: usize,
    },
}
