//! # `calcbox_function`
//!
//! Functions of one real variable that can be evaluated, differentiated analytically and
//! rendered as text.
//!
//! Primitive functions ([`Identity`], [`Constant`], [`Power`], [`Exponential`],
//! [`Polynomial`]) combine with `+`, `-`, `*` and `/` into [`Composite`] functions whose
//! derivatives follow the sum, product and quotient rules. [`search_root`] runs a damped
//! Newton iteration over any [`Function`].
//!
//! ```
//! use calcbox_function::{search_root, Constant, Function, Power};
//!
//! let f = Power::new(2.0) - Constant::new(4.0);
//! assert_eq!(f.render(), "(x^2 - 4)");
//! assert_eq!(f.evaluate(3.0), Ok(5.0));
//! assert_eq!(f.differentiate(3.0), Ok(6.0));
//!
//! let root = search_root(&f, 5.0, 0.1, 1000).unwrap();
//! assert!((root - 2.0).abs() < 1e-6);
//! ```

pub mod composite;
pub mod error;
pub mod factory;
pub mod function;
pub mod operand;
pub mod primitives;
mod search;

pub use composite::{BinaryOp, Composite};
pub use error::{CreateFunctionError, FunctionError, InvalidOperand};
pub use factory::{create, FunctionKind, FunctionSpec};
pub use function::{AsDifferentiable, Func, Function};
pub use operand::{Operand, OperandKind, OperandSide};
pub use primitives::{Constant, Exponential, Identity, Polynomial, Power};
pub use search::search_root;
