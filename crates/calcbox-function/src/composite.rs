//! Functions built by combining two operands with an arithmetic operator.
//!
//! The derivative of a composite is obtained analytically from the derivatives of its operands
//! using the sum, difference, product and quotient rules. Operands are held through [`Func`]
//! handles, so they live at least as long as every composite built from them.
//!
//! The arithmetic operators of [`std::ops`] are implemented for [`Func`], `&Func` and every
//! primitive. The right-hand side can be anything that converts into a [`Func`]; numbers, strings
//! and containers do not, so combining them with a function is rejected at compile time. Values
//! whose type is only known at runtime go through [`Operand::combine`](crate::operand::Operand::combine)
//! instead.
use crate::error::FunctionError;
use crate::function::{Func, Function};
use crate::primitives::{Constant, Exponential, Identity, Polynomial, Power};
use std::fmt;
use std::ops;

/// Arithmetic operator joining the two operands of a [`Composite`].
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serialize", derive(serde::Serialize, serde::Deserialize))]
pub enum BinaryOp {
    Add,
    Sub,
    Mul,
    Div,
}

impl BinaryOp {
    pub const ALL: [Self; 4] = [Self::Add, Self::Sub, Self::Mul, Self::Div];

    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
        }
    }

    /// Builds the composite `lhs OP rhs`.
    pub fn apply(self, lhs: impl Into<Func>, rhs: impl Into<Func>) -> Func {
        Func::new(Composite::new(lhs.into(), self, rhs.into()))
    }
}

impl fmt::Display for BinaryOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// Two functions joined by a [`BinaryOp`].
///
/// Only functions can be operands; numbers are not promoted to constants, on either side:
///
/// ```compile_fail
/// use calcbox_function::Power;
/// let _ = Power::new(2.0) + 3.0;
/// ```
///
/// ```compile_fail
/// use calcbox_function::Power;
/// let _ = "abc" * Power::new(2.0);
/// ```
#[derive(Debug, Clone)]
pub struct Composite {
    lhs: Func,
    rhs: Func,
    op: BinaryOp,
    repr: String,
}

impl Composite {
    pub fn new(lhs: Func, op: BinaryOp, rhs: Func) -> Self {
        let repr = format!("({} {} {})", lhs.render(), op, rhs.render());
        log::debug!("Built composite {repr}");
        Self { lhs, rhs, op, repr }
    }

    pub fn op(&self) -> BinaryOp {
        self.op
    }

    pub fn lhs(&self) -> &Func {
        &self.lhs
    }

    pub fn rhs(&self) -> &Func {
        &self.rhs
    }

    /// Evaluates the denominator of a quotient, failing if it vanishes at `x`.
    fn denominator(&self, x: f64) -> Result<f64, FunctionError> {
        let denominator = self.rhs.evaluate(x)?;
        if denominator == 0.0 {
            return Err(FunctionError::DivisionByZero {
                denominator: self.rhs.render(),
                x,
            });
        }
        Ok(denominator)
    }
}

impl Function for Composite {
    fn evaluate(&self, x: f64) -> Result<f64, FunctionError> {
        Ok(match self.op {
            BinaryOp::Add => self.lhs.evaluate(x)? + self.rhs.evaluate(x)?,
            BinaryOp::Sub => self.lhs.evaluate(x)? - self.rhs.evaluate(x)?,
            BinaryOp::Mul => self.lhs.evaluate(x)? * self.rhs.evaluate(x)?,
            BinaryOp::Div => {
                let denominator = self.denominator(x)?;
                self.lhs.evaluate(x)? / denominator
            }
        })
    }

    fn differentiate(&self, x: f64) -> Result<f64, FunctionError> {
        Ok(match self.op {
            BinaryOp::Add => self.lhs.differentiate(x)? + self.rhs.differentiate(x)?,
            BinaryOp::Sub => self.lhs.differentiate(x)? - self.rhs.differentiate(x)?,
            BinaryOp::Mul => {
                self.lhs.differentiate(x)? * self.rhs.evaluate(x)?
                    + self.lhs.evaluate(x)? * self.rhs.differentiate(x)?
            }
            BinaryOp::Div => {
                let g = self.denominator(x)?;
                let numerator = self.lhs.differentiate(x)? * g - self.lhs.evaluate(x)? * self.rhs.differentiate(x)?;
                numerator / (g * g)
            }
        })
    }

    fn render(&self) -> String {
        self.repr.clone()
    }
}

macro_rules! impl_binary_ops {
    (@op $ty:ty, $trait:ident, $method:ident, $op:expr) => {
        impl<R: Into<Func>> ops::$trait<R> for $ty {
            type Output = Func;

            fn $method(self, rhs: R) -> Func {
                $op.apply(self, rhs)
            }
        }

        impl<R: Into<Func>> ops::$trait<R> for &$ty {
            type Output = Func;

            fn $method(self, rhs: R) -> Func {
                $op.apply(self.clone(), rhs)
            }
        }
    };
    ($($ty:ty),*) => {
        $(
            impl_binary_ops!(@op $ty, Add, add, BinaryOp::Add);
            impl_binary_ops!(@op $ty, Sub, sub, BinaryOp::Sub);
            impl_binary_ops!(@op $ty, Mul, mul, BinaryOp::Mul);
            impl_binary_ops!(@op $ty, Div, div, BinaryOp::Div);
        )*
    };
}

impl_binary_ops!(Func, Identity, Constant, Power, Exponential, Polynomial, Composite);

impl From<Composite> for Func {
    fn from(value: Composite) -> Self {
        Func::new(value)
    }
}

impl From<&Func> for Func {
    fn from(value: &Func) -> Self {
        value.clone()
    }
}
