//! Primitive functions with closed-form derivatives.
use crate::error::FunctionError;
use crate::function::{Func, Function};
use std::fmt::Write;

/// f(x) = x
#[derive(Debug, Default, Copy, Clone, PartialEq)]
pub struct Identity;

impl Function for Identity {
    fn evaluate(&self, x: f64) -> Result<f64, FunctionError> {
        Ok(x)
    }

    fn differentiate(&self, _: f64) -> Result<f64, FunctionError> {
        Ok(1.0)
    }

    fn render(&self) -> String {
        "x".to_string()
    }
}

/// f(x) = c
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Constant {
    value: f64,
}

impl Constant {
    pub const fn new(value: f64) -> Self {
        Self { value }
    }

    pub const fn value(&self) -> f64 {
        self.value
    }
}

impl Function for Constant {
    fn evaluate(&self, _: f64) -> Result<f64, FunctionError> {
        Ok(self.value)
    }

    fn differentiate(&self, _: f64) -> Result<f64, FunctionError> {
        Ok(0.0)
    }

    fn render(&self) -> String {
        self.value.to_string()
    }
}

/// f(x) = x^n
///
/// Undefined points (`0^n` for negative `n`, negative bases with fractional exponents) produce
/// whatever IEEE arithmetic does.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Power {
    exponent: f64,
}

impl Power {
    pub const fn new(exponent: f64) -> Self {
        Self { exponent }
    }

    pub const fn exponent(&self) -> f64 {
        self.exponent
    }
}

impl Function for Power {
    fn evaluate(&self, x: f64) -> Result<f64, FunctionError> {
        Ok(x.powf(self.exponent))
    }

    fn differentiate(&self, x: f64) -> Result<f64, FunctionError> {
        Ok(self.exponent * x.powf(self.exponent - 1.0))
    }

    fn render(&self) -> String {
        format!("x^{}", self.exponent)
    }
}

/// f(x) = e^x
#[derive(Debug, Default, Copy, Clone, PartialEq)]
pub struct Exponential;

impl Function for Exponential {
    fn evaluate(&self, x: f64) -> Result<f64, FunctionError> {
        Ok(x.exp())
    }

    fn differentiate(&self, x: f64) -> Result<f64, FunctionError> {
        Ok(x.exp())
    }

    fn render(&self) -> String {
        "exp(x)".to_string()
    }
}

/// f(x) = c0 + c1 x + c2 x^2 + ...
///
/// Coefficients are indexed by power of `x`. A polynomial without coefficients is zero
/// everywhere.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Polynomial {
    coefficients: Vec<f64>,
}

impl Polynomial {
    pub fn new(coefficients: impl Into<Vec<f64>>) -> Self {
        Self {
            coefficients: coefficients.into(),
        }
    }

    pub fn coefficients(&self) -> &[f64] {
        &self.coefficients
    }

    pub fn degree(&self) -> Option<usize> {
        self.coefficients.iter().rposition(|&c| c != 0.0)
    }
}

impl Function for Polynomial {
    fn evaluate(&self, x: f64) -> Result<f64, FunctionError> {
        Ok(self.coefficients.iter().rev().fold(0.0, |acc, &c| acc * x + c))
    }

    fn differentiate(&self, x: f64) -> Result<f64, FunctionError> {
        Ok(self
            .coefficients
            .iter()
            .enumerate()
            .skip(1)
            .rev()
            .fold(0.0, |acc, (i, &c)| acc * x + i as f64 * c))
    }

    fn render(&self) -> String {
        let mut out = String::new();
        for (i, &c) in self.coefficients.iter().enumerate().filter(|&(_, &c)| c != 0.0) {
            if !out.is_empty() {
                out.push_str(" + ");
            }
            // Writing into a String cannot fail
            let _ = match i {
                0 => write!(out, "{c}"),
                _ => write!(out, "{c}*x^{i}"),
            };
        }
        if out.is_empty() {
            out.push('0');
        }
        out
    }
}

macro_rules! impl_into_func {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for Func {
                fn from(value: $ty) -> Self {
                    Func::new(value)
                }
            }
        )*
    };
}

impl_into_func!(Identity, Constant, Power, Exponential, Polynomial);

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rstest::rstest;

    #[test]
    fn test_power_of_two() {
        let f = Power::new(2.0);
        assert_eq!(f.evaluate(3.0), Ok(9.0));
        assert_eq!(f.differentiate(3.0), Ok(6.0));
    }

    #[test]
    fn test_polynomial() {
        let f = Polynomial::new([0.0, 1.0, 2.0, 3.0, 4.0]);
        assert_eq!(f.evaluate(1.0), Ok(10.0));
        assert_eq!(f.differentiate(1.0), Ok(30.0));
        assert_eq!(f.degree(), Some(4));
    }

    #[test]
    fn test_empty_polynomial_is_zero() {
        let f = Polynomial::default();
        assert_eq!(f.evaluate(12.5), Ok(0.0));
        assert_eq!(f.differentiate(12.5), Ok(0.0));
        assert_eq!(f.degree(), None);
        assert_eq!(f.render(), "0");
    }

    #[test]
    fn test_constant_polynomial_has_zero_derivative() {
        let f = Polynomial::new(vec![7.0]);
        assert_eq!(f.evaluate(-3.0), Ok(7.0));
        assert_eq!(f.differentiate(-3.0), Ok(0.0));
    }

    #[test]
    fn test_exponential() {
        assert_eq!(Exponential.evaluate(0.0), Ok(1.0));
        assert_eq!(Exponential.evaluate(1.0), Ok(std::f64::consts::E));
        assert_eq!(Exponential.differentiate(1.0), Ok(std::f64::consts::E));
    }

    #[rstest]
    #[case(Func::new(Identity), "x")]
    #[case(Func::new(Constant::new(3.0)), "3")]
    #[case(Func::new(Constant::new(-2.5)), "-2.5")]
    #[case(Func::new(Power::new(2.0)), "x^2")]
    #[case(Func::new(Power::new(0.5)), "x^0.5")]
    #[case(Func::new(Exponential), "exp(x)")]
    #[case(Func::new(Polynomial::new([7.0, 0.0, 3.0, 15.0])), "7 + 3*x^2 + 15*x^3")]
    #[case(Func::new(Polynomial::new([0.0, 1.0, -2.0])), "1*x^1 + -2*x^2")]
    #[case(Func::new(Polynomial::new([0.0, 0.0])), "0")]
    fn test_render(#[case] function: Func, #[case] expected: &str) {
        assert_eq!(function.render(), expected);
    }

    #[rstest]
    #[case(2.0)]
    #[case(-1.5)]
    #[case(1e6)]
    fn test_power_zero_is_one(#[case] x: f64) {
        let f = Power::new(0.0);
        assert_eq!(f.evaluate(x), Ok(1.0));
        assert_eq!(f.differentiate(x), Ok(0.0));
    }

    proptest! {
        #[test]
        fn test_identity(x in -1e6..1e6f64) {
            prop_assert_eq!(Identity.evaluate(x), Ok(x));
            prop_assert_eq!(Identity.differentiate(x), Ok(1.0));
        }

        #[test]
        fn test_constant(x in -1e6..1e6f64, c in -1e6..1e6f64) {
            let f = Constant::new(c);
            prop_assert_eq!(f.evaluate(x), Ok(c));
            prop_assert_eq!(f.differentiate(x), Ok(0.0));
        }

        #[test]
        fn test_power(x in 0.01..100.0f64, e in -4.0..4.0f64) {
            let f = Power::new(e);
            prop_assert_eq!(f.evaluate(x), Ok(x.powf(e)));
            prop_assert_eq!(f.differentiate(x), Ok(e * x.powf(e - 1.0)));
        }

        #[test]
        fn test_polynomial_matches_power_sum(
            coefficients in prop::collection::vec(-10.0..10.0f64, 0..6),
            x in -3.0..3.0f64,
        ) {
            let f = Polynomial::new(coefficients.clone());
            let expected: f64 = coefficients.iter().enumerate().map(|(i, c)| c * x.powi(i as i32)).sum();
            let expected_derivative: f64 = coefficients
                .iter()
                .enumerate()
                .skip(1)
                .map(|(i, c)| i as f64 * c * x.powi(i as i32 - 1))
                .sum();
            prop_assert!(approx::relative_eq!(f.evaluate(x).unwrap(), expected, epsilon = 1e-9, max_relative = 1e-9));
            prop_assert!(approx::relative_eq!(f.differentiate(x).unwrap(), expected_derivative, epsilon = 1e-9, max_relative = 1e-9));
        }
    }
}
