//! The capability shared by every function of one real variable.
//!
//! Functions are immutable once constructed. They are handled through [`Func`], a shared
//! handle that composites use to hold on to their operands for as long as they live.
use crate::error::FunctionError;
use calcbox_math::Differentiable;
use std::fmt;
use std::sync::Arc;

/// A function of one real variable with an analytic derivative.
///
/// `evaluate` and `differentiate` must be pure and mathematically consistent with each other.
pub trait Function: fmt::Debug + Send + Sync {
    /// Evaluates the function at `x`.
    fn evaluate(&self, x: f64) -> Result<f64, FunctionError>;

    /// Evaluates the derivative of the function at `x`.
    fn differentiate(&self, x: f64) -> Result<f64, FunctionError>;

    /// Returns a deterministic, human-readable representation of the function.
    fn render(&self) -> String;
}

impl<F: ?Sized + Function> Function for Arc<F> {
    fn evaluate(&self, x: f64) -> Result<f64, FunctionError> {
        F::evaluate(self, x)
    }

    fn differentiate(&self, x: f64) -> Result<f64, FunctionError> {
        F::differentiate(self, x)
    }

    fn render(&self) -> String {
        F::render(self)
    }
}

impl<F: ?Sized + Function> Function for &F {
    fn evaluate(&self, x: f64) -> Result<f64, FunctionError> {
        F::evaluate(self, x)
    }

    fn differentiate(&self, x: f64) -> Result<f64, FunctionError> {
        F::differentiate(self, x)
    }

    fn render(&self) -> String {
        F::render(self)
    }
}

/// Shared handle to any [`Function`].
///
/// Cloning a `Func` is cheap and never copies the underlying function.
#[derive(Clone)]
pub struct Func(Arc<dyn Function>);

impl Func {
    pub fn new(function: impl Function + 'static) -> Self {
        Self(Arc::new(function))
    }

    /// Returns `true` if both handles point to the same function object.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl Function for Func {
    fn evaluate(&self, x: f64) -> Result<f64, FunctionError> {
        self.0.evaluate(x)
    }

    fn differentiate(&self, x: f64) -> Result<f64, FunctionError> {
        self.0.differentiate(x)
    }

    fn render(&self) -> String {
        self.0.render()
    }
}

impl fmt::Debug for Func {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&*self.0, f)
    }
}

impl fmt::Display for Func {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

impl From<Arc<dyn Function>> for Func {
    fn from(value: Arc<dyn Function>) -> Self {
        Self(value)
    }
}

impl Differentiable for Func {
    type Scalar = f64;
    type Error = FunctionError;

    fn eval(&self, x: f64) -> Result<f64, FunctionError> {
        self.evaluate(x)
    }

    fn derivative(&self, x: f64) -> Result<f64, FunctionError> {
        self.differentiate(x)
    }
}

/// Adapts any [`Function`] to the solver-facing [`Differentiable`] trait.
#[derive(Debug, Copy, Clone)]
pub struct AsDifferentiable<'a, F: ?Sized>(pub &'a F);

impl<F: ?Sized + Function> Differentiable for AsDifferentiable<'_, F> {
    type Scalar = f64;
    type Error = FunctionError;

    fn eval(&self, x: f64) -> Result<f64, FunctionError> {
        self.0.evaluate(x)
    }

    fn derivative(&self, x: f64) -> Result<f64, FunctionError> {
        self.0.differentiate(x)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::primitives::{Constant, Identity, Power};

    #[test]
    fn test_func_delegates() {
        let f = Func::new(Power::new(2.0));
        assert_eq!(f.evaluate(3.0), Ok(9.0));
        assert_eq!(f.differentiate(3.0), Ok(6.0));
        assert_eq!(f.render(), "x^2");
        assert_eq!(f.to_string(), "x^2");
    }

    #[test]
    fn test_clone_shares_function() {
        let f = Func::new(Identity);
        let g = f.clone();
        assert!(f.ptr_eq(&g));
        assert!(!f.ptr_eq(&Func::new(Identity)));
    }

    #[test]
    fn test_differentiable_bridge() {
        let c = Constant::new(4.0);
        let bridge = AsDifferentiable(&c);
        assert_eq!(bridge.eval_with_derivative(10.0), Ok((4.0, 0.0)));

        let f = Func::new(Power::new(3.0));
        assert_eq!(Differentiable::eval_with_derivative(&f, 2.0), Ok((8.0, 12.0)));
    }

    #[test]
    fn test_dyn_reference_is_a_function() {
        let f: &dyn Function = &Power::new(2.0);
        assert_eq!(f.evaluate(4.0), Ok(16.0));
        let shared: Arc<dyn Function> = Arc::new(Identity);
        assert_eq!(Func::from(shared).render(), "x");
    }
}
