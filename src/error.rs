//! Crate-wide error type
//!
//! Every fallible operation of the numerical core returns [`SolveResult`].
//! Errors are never retried internally and partial results are discarded.

use std::fmt;

use thiserror::Error;

use crate::output::visualization::PlotError;
use crate::problem::EvalError;

pub type SolveResult<T> = Result<T, SolveError>;

#[derive(Error, Debug)]
pub enum SolveError {
    /// A caller-supplied function failed (or produced a non-finite value)
    #[error("{method} failed at step {step} (x={x:.4}, y={y:.4}): {source}")]
    Evaluation {
        method: &'static str,
        step: usize,
        x: f64,
        y: f64,
        #[source]
        source: EvalError,
    },

    /// Solver output and exact output were not built on the same grid
    #[error("grid mismatch between '{line}' and the exact solution: {kind}")]
    GridMismatch { line: String, kind: Mismatch },

    #[error("invalid parameter {what}: {reason}")]
    InvalidParameter { what: &'static str, reason: String },

    #[error(transparent)]
    Plot(#[from] PlotError),
}

impl SolveError {
    pub(crate) fn invalid(what: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidParameter {
            what,
            reason: reason.into(),
        }
    }

    /// Name of the method that produced the error, if any
    pub fn method(&self) -> Option<&'static str> {
        match self {
            Self::Evaluation { method, .. } => Some(method),
            _ => None,
        }
    }
}

/// How two lines disagree about their grid
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Mismatch {
    Length { expected: usize, found: usize },
    Abscissa { index: usize, expected: f64, found: f64 },
}

impl fmt::Display for Mismatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mismatch::Length { expected, found } => {
                write!(f, "{found} points, expected {expected}")
            }
            Mismatch::Abscissa { index, expected, found } => {
                write!(f, "x={found} at index {index}, expected x={expected}")
            }
        }
    }
}
