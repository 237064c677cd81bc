pub mod nr;

/// Trait defining an equation and its derivative
///
/// Both evaluations may fail, for example when the equation contains a quotient whose
/// denominator vanishes at the queried point. Equations that cannot fail use
/// [`Infallible`](core::convert::Infallible) as their error type.
pub trait Differentiable {
    /// Scalar type of the equation
    type Scalar: Clone;

    /// Error returned when the equation cannot be evaluated at a point
    type Error;

    /// Evaluates the function at a point
    fn eval(&self, x: Self::Scalar) -> Result<Self::Scalar, Self::Error>;

    /// Evaluates the derivative of the function at a point
    fn derivative(&self, x: Self::Scalar) -> Result<Self::Scalar, Self::Error>;

    /// Evaluates both the function and its derivative at a point
    fn eval_with_derivative(&self, x: Self::Scalar) -> Result<(Self::Scalar, Self::Scalar), Self::Error> {
        Ok((self.eval(x.clone())?, self.derivative(x)?))
    }
}

impl<D: ?Sized + Differentiable> Differentiable for &D {
    type Scalar = D::Scalar;
    type Error = D::Error;

    fn eval(&self, x: Self::Scalar) -> Result<Self::Scalar, Self::Error> {
        D::eval(self, x)
    }

    fn derivative(&self, x: Self::Scalar) -> Result<Self::Scalar, Self::Error> {
        D::derivative(self, x)
    }

    fn eval_with_derivative(&self, x: Self::Scalar) -> Result<(Self::Scalar, Self::Scalar), Self::Error> {
        D::eval_with_derivative(self, x)
    }
}
