//! Arithmetic on values whose type is only known at runtime.
use crate::composite::BinaryOp;
use crate::error::InvalidOperand;
use crate::function::Func;
use std::fmt;

/// Position of an operand in a binary operation.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum OperandSide {
    Left,
    Right,
}

impl fmt::Display for OperandSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Left => "left",
            Self::Right => "right",
        })
    }
}

/// Kind of value held by an [`Operand`].
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum OperandKind {
    Function,
    Number,
    Text,
    Sequence,
}

impl fmt::Display for OperandKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Function => "a function",
            Self::Number => "a number",
            Self::Text => "text",
            Self::Sequence => "a sequence",
        })
    }
}

/// A dynamically typed value.
///
/// Only functions take part in arithmetic; every other kind is rejected by
/// [`Operand::combine`] instead of being coerced (a number is never turned into a constant).
#[derive(Debug, Clone)]
pub enum Operand {
    Function(Func),
    Number(f64),
    Text(String),
    Sequence(Vec<f64>),
}

impl Operand {
    pub fn kind(&self) -> OperandKind {
        match self {
            Self::Function(_) => OperandKind::Function,
            Self::Number(_) => OperandKind::Number,
            Self::Text(_) => OperandKind::Text,
            Self::Sequence(_) => OperandKind::Sequence,
        }
    }

    fn into_function(self, op: BinaryOp, side: OperandSide) -> Result<Func, InvalidOperand> {
        match self {
            Self::Function(func) => Ok(func),
            other => Err(InvalidOperand {
                op,
                side,
                found: other.kind(),
            }),
        }
    }

    /// Builds `lhs OP rhs`, failing if either side is not a function.
    ///
    /// When both operands are invalid, the left one is reported.
    pub fn combine(lhs: impl Into<Operand>, op: BinaryOp, rhs: impl Into<Operand>) -> Result<Func, InvalidOperand> {
        let lhs = lhs.into().into_function(op, OperandSide::Left)?;
        let rhs = rhs.into().into_function(op, OperandSide::Right)?;
        Ok(op.apply(lhs, rhs))
    }
}

impl From<Func> for Operand {
    fn from(value: Func) -> Self {
        Self::Function(value)
    }
}

impl From<&Func> for Operand {
    fn from(value: &Func) -> Self {
        Self::Function(value.clone())
    }
}

impl From<f64> for Operand {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<&str> for Operand {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for Operand {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<Vec<f64>> for Operand {
    fn from(value: Vec<f64>) -> Self {
        Self::Sequence(value)
    }
}

impl From<&[f64]> for Operand {
    fn from(value: &[f64]) -> Self {
        Self::Sequence(value.to_vec())
    }
}
