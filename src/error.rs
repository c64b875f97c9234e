//! Errors raised while computing choice probabilities.

use strum_macros::Display;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ComputeError {
    #[error("{0}")]
    ShapeMismatch(#[from] ShapeMismatch),

    #[error("{0}")]
    MissingKey(#[from] MissingKey),

    #[error("at least one utility function must be supplied")]
    EmptyInput,
}

/// Raised when two sequences that must be aligned element-for-element differ in length.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("{context}: expected {expected} observations, got {actual}")]
pub struct ShapeMismatch {
    pub context: String,
    pub expected: usize,
    pub actual: usize,
}
impl ShapeMismatch {
    pub fn check(context: impl FnOnce() -> String, expected: usize, actual: usize) -> Result<(), Self> {
        if expected != actual {
            Err(Self {
                context: context(),
                expected,
                actual,
            })
        } else {
            Ok(())
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
#[strum(serialize_all = "lowercase")]
pub enum KeyKind {
    Parameter,
    Covariate,
}

#[derive(Debug, Clone, PartialEq, Error)]
#[error("missing {kind} '{name}'")]
pub struct MissingKey {
    pub kind: KeyKind,
    pub name: String,
}
impl MissingKey {
    pub fn parameter(name: impl Into<String>) -> Self {
        Self {
            kind: KeyKind::Parameter,
            name: name.into(),
        }
    }

    pub fn covariate(name: impl Into<String>) -> Self {
        Self {
            kind: KeyKind::Covariate,
            name: name.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Error)]
#[error("parameter '{name}' must be finite, got {value}")]
pub struct NonFiniteParameter {
    pub name: String,
    pub value: f64,
}
