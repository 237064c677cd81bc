//! # `calcbox_math`
//!
//! Numeric machinery shared by the `calcbox` crates, generic over [`num_traits::Float`].

pub mod root_eq;

pub use root_eq::nr::{NewtonRaphson, SolveResult};
pub use root_eq::Differentiable;
