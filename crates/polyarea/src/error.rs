//! Error type shared by the generator, the estimators and the metric.
//!
//! Every variant is terminal for the call that produced it; nothing in this
//! crate retries or logs.

use std::fmt;

#[derive(Clone, Debug, PartialEq)]
pub enum AreaError {
    /// Malformed caller input (vertex count, irregularity, sample count, ...).
    InvalidParameter { reason: String },
    /// Degenerate geometry handed to a constructor or estimator.
    InvalidPolygon { reason: String },
    /// The generator could not produce a simple polygon, even after repair.
    Generation { reason: String },
    /// Relative error requested against a zero reference area.
    DivisionByZero,
}

impl AreaError {
    pub(crate) fn invalid(reason: impl Into<String>) -> Self {
        Self::InvalidParameter {
            reason: reason.into(),
        }
    }

    pub(crate) fn polygon(reason: impl Into<String>) -> Self {
        Self::InvalidPolygon {
            reason: reason.into(),
        }
    }

    pub(crate) fn generation(reason: impl Into<String>) -> Self {
        Self::Generation {
            reason: reason.into(),
        }
    }
}

impl fmt::Display for AreaError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidParameter { reason } => write!(f, "invalid parameter: {reason}"),
            Self::InvalidPolygon { reason } => write!(f, "invalid polygon: {reason}"),
            Self::Generation { reason } => write!(f, "polygon generation failed: {reason}"),
            Self::DivisionByZero => write!(f, "reference area is zero"),
        }
    }
}

impl std::error::Error for AreaError {}
