use crate::error::FunctionError;
use crate::function::{AsDifferentiable, Function};
use calcbox_math::NewtonRaphson;

/// Looks for a root of `f` with a fixed number of damped Newton updates.
///
/// Starting from `initial_guess`, repeats `x <- x - step_size * f(x) / f'(x)` exactly
/// `max_iterations` times and returns the final `x`. Nothing checks for convergence or for a
/// vanishing derivative; a zero `f'(x)` yields an infinite or NaN estimate that carries through
/// the remaining iterations. Evaluation errors of `f` are returned immediately.
#[profiling::function]
pub fn search_root<F: ?Sized + Function>(
    f: &F,
    initial_guess: f64,
    step_size: f64,
    max_iterations: usize,
) -> Result<f64, FunctionError> {
    let result = NewtonRaphson::new(max_iterations, step_size).solve(&AsDifferentiable(f), initial_guess)?;
    log::trace!(
        "Root search on {} from {initial_guess} ended at {} after {} iterations",
        f.render(),
        result.value,
        result.iterations
    );
    Ok(result.value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::primitives::{Constant, Identity, Polynomial, Power};

    #[test]
    fn test_positive_root() {
        let f = Power::new(2.0) - Constant::new(4.0);
        let root = search_root(&f, 5.0, 0.1, 1000).unwrap();
        assert!((root - 2.0).abs() < 0.1);
    }

    #[test]
    fn test_negative_root() {
        let f = Power::new(2.0) - Constant::new(4.0);
        let root = search_root(&f, -5.0, 0.1, 1000).unwrap();
        assert!((root + 2.0).abs() < 0.1);
    }

    #[test]
    fn test_linear_product_roots() {
        // (x + 5)(x - 2)
        let f = Polynomial::new([5.0, 1.0]) * Polynomial::new([-2.0, 1.0]);
        let root = search_root(&f, 0.0, 0.1, 1000).unwrap();
        approx::assert_abs_diff_eq!(root, 2.0, epsilon = 1e-9);
        let root = search_root(&f, -7.0, 0.1, 1000).unwrap();
        approx::assert_abs_diff_eq!(root, -5.0, epsilon = 1e-9);
    }

    #[test]
    fn test_zero_iterations() {
        assert_eq!(search_root(&Identity, 3.5, 0.1, 0), Ok(3.5));
    }

    #[test]
    fn test_zero_derivative_is_not_guarded() {
        let root = search_root(&Constant::new(1.0), 0.0, 0.1, 5).unwrap();
        assert!(!root.is_finite());
    }

    #[test]
    fn test_quotient_error_propagates() {
        // Behaves like f(x) = x away from zero, so the first full step lands on the pole
        let f = Identity + Constant::new(0.0) / Identity;
        let err = search_root(&f, 1.0, 1.0, 10).unwrap_err();
        assert!(matches!(err, FunctionError::DivisionByZero { .. }));
    }

    #[test]
    fn test_accepts_trait_objects() {
        let f: &dyn Function = &Power::new(3.0);
        let root = search_root(f, 1.0, 1.0, 100).unwrap();
        assert!(root.abs() < 1e-6);
    }
}
