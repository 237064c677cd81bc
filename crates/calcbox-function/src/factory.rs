//! Creation of primitive functions from a type tag and a parameter list.
use crate::error::CreateFunctionError;
use crate::function::Func;
use crate::primitives::{Constant, Exponential, Identity, Polynomial, Power};
use std::fmt;
use std::str::FromStr;

/// The primitive function types the factory knows about.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serialize", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serialize", serde(rename_all = "lowercase"))]
pub enum FunctionKind {
    #[cfg_attr(feature = "serialize", serde(rename = "ident"))]
    Identity,
    #[cfg_attr(feature = "serialize", serde(rename = "const"))]
    Constant,
    Power,
    #[cfg_attr(feature = "serialize", serde(rename = "exp"))]
    Exponential,
    Polynomial,
}

impl FunctionKind {
    pub const fn tag(self) -> &'static str {
        match self {
            Self::Identity => "ident",
            Self::Constant => "const",
            Self::Power => "power",
            Self::Exponential => "exp",
            Self::Polynomial => "polynomial",
        }
    }

    /// Builds a function of this kind.
    ///
    /// `const` and `power` take exactly one parameter; `polynomial` takes any number of
    /// coefficients. Parameters given to `ident` and `exp` are ignored.
    pub fn build(self, params: &[f64]) -> Result<Func, CreateFunctionError> {
        let func = match self {
            Self::Identity => Func::new(Identity),
            Self::Constant => Func::new(Constant::new(self.single(params)?)),
            Self::Power => Func::new(Power::new(self.single(params)?)),
            Self::Exponential => Func::new(Exponential),
            Self::Polynomial => Func::new(Polynomial::new(params)),
        };
        log::debug!("Created {} function {func}", self.tag());
        Ok(func)
    }

    fn single(self, params: &[f64]) -> Result<f64, CreateFunctionError> {
        match params {
            &[value] => Ok(value),
            _ => Err(CreateFunctionError::InvalidParameters {
                tag: self.tag(),
                expected: 1,
                got: params.len(),
            }),
        }
    }
}

impl fmt::Display for FunctionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for FunctionKind {
    type Err = CreateFunctionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "ident" => Self::Identity,
            "const" => Self::Constant,
            "power" => Self::Power,
            "exp" => Self::Exponential,
            "polynomial" => Self::Polynomial,
            _ => return Err(CreateFunctionError::UnknownType(s.to_string())),
        })
    }
}

/// Creates a primitive function from its type tag and parameters.
pub fn create(type_tag: &str, params: &[f64]) -> Result<Func, CreateFunctionError> {
    type_tag.parse::<FunctionKind>()?.build(params)
}

/// Serializable description of a primitive function.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serialize", derive(serde::Serialize, serde::Deserialize))]
pub struct FunctionSpec {
    pub kind: FunctionKind,
    #[cfg_attr(feature = "serialize", serde(default))]
    pub params: Vec<f64>,
}

impl FunctionSpec {
    pub fn new(kind: FunctionKind, params: impl Into<Vec<f64>>) -> Self {
        Self {
            kind,
            params: params.into(),
        }
    }

    pub fn build(&self) -> Result<Func, CreateFunctionError> {
        self.kind.build(&self.params)
    }
}
