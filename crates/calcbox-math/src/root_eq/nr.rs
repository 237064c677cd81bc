use crate::root_eq::Differentiable;
use num_traits::Float;

/// Damped Newton-Raphson solver
///
/// Each iteration performs `x <- x - over_relaxation * f(x) / f'(x)`. Without a tolerance the
/// solver always runs for exactly `max_iterations` updates: there is no convergence check and
/// no guard against a vanishing derivative, so a zero `f'(x)` turns the iterate into an
/// infinity or NaN which then stays in every following iteration.
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serialize", derive(serde::Serialize, serde::Deserialize))]
pub struct NewtonRaphson<T> {
    pub max_iterations: usize,
    pub over_relaxation: T,
    #[cfg_attr(feature = "serialize", serde(default))]
    pub tolerance: Option<T>,
}

impl<T> NewtonRaphson<T> {
    pub const fn new(max_iterations: usize, over_relaxation: T) -> Self {
        Self {
            max_iterations,
            over_relaxation,
            tolerance: None,
        }
    }

    /// Stops iterating as soon as the magnitude of an update falls below `tolerance`.
    pub fn with_tolerance(self, tolerance: T) -> Self {
        Self {
            tolerance: Some(tolerance),
            ..self
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolveResult<T> {
    pub value: T,
    pub delta: T,
    pub iterations: usize,
}

impl<T: Float> NewtonRaphson<T> {
    /// Solves the equation using the damped Newton-Raphson update.
    ///
    /// Errors raised by the equation are returned as-is, at the iteration they happened.
    #[profiling::function]
    pub fn solve<F: Differentiable<Scalar = T>>(&self, function: &F, initial_guess: T) -> Result<SolveResult<T>, F::Error> {
        let mut x = initial_guess;
        let mut delta = T::zero();
        let mut finite = x.is_finite();

        for i in 0..self.max_iterations {
            let (fx, dfx) = function.eval_with_derivative(x)?;
            delta = self.over_relaxation * fx / dfx;
            x = x - delta;

            if finite && !x.is_finite() {
                log::debug!("Newton-Raphson iterate became non-finite at iteration {i}");
                finite = false;
            }

            if let Some(tolerance) = self.tolerance {
                if delta.abs() < tolerance {
                    return Ok(SolveResult {
                        value: x,
                        delta,
                        iterations: i + 1,
                    });
                }
            }
        }

        Ok(SolveResult {
            value: x,
            delta,
            iterations: self.max_iterations,
        })
    }
}
