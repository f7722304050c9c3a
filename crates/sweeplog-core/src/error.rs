//! Error types for sweeplog.
//!
//! [`GridError`] covers the addressing layer (dense and grid arrays, slice
//! extraction). [`SweepError`] covers the recorder that sits between a
//! sweep driver and the array, and wraps `GridError` for failures raised
//! underneath it.

use std::error::Error;
use std::fmt;

/// Errors from array initialisation, element access, and slice extraction.
///
/// Every fallible operation validates fully before mutating, so receiving
/// one of these means the array is unchanged.
#[derive(Clone, Debug, PartialEq)]
pub enum GridError {
    /// A supplied index, position, or per-axis vector has the wrong length.
    DimensionMismatch {
        /// The array's dimension.
        expected: usize,
        /// Length of the supplied vector.
        got: usize,
    },
    /// A grid spacing is zero, negative, or not finite.
    InvalidStepSize {
        /// Axis carrying the bad spacing.
        axis: usize,
        /// The rejected value.
        value: f64,
    },
    /// A grid anchor coordinate is NaN or infinite.
    InvalidAnchor {
        /// Axis carrying the bad anchor.
        axis: usize,
        /// The rejected value.
        value: f64,
    },
    /// An index or position lies outside the array, or off the grid.
    OutOfBounds {
        /// Human-readable description of what was out of range.
        detail: String,
    },
    /// An addressed operation was attempted before initialisation.
    UninitializedAccess {
        /// What was missing.
        what: &'static str,
    },
    /// A slice mask marks more than two axes as variable.
    TooManyVariableDimensions {
        /// Number of axes marked variable.
        count: usize,
    },
    /// A slice mask marks fewer than two axes as variable.
    TooFewVariableDimensions {
        /// Number of axes marked variable.
        count: usize,
    },
    /// An axis length of zero was supplied at initialisation.
    EmptyAxis {
        /// The zero-length axis.
        axis: usize,
    },
    /// The product of the axis lengths overflows `usize`.
    SizeOverflow,
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DimensionMismatch { expected, got } => {
                write!(f, "dimension mismatch: expected {expected}, got {got}")
            }
            Self::InvalidStepSize { axis, value } => {
                write!(f, "step size on axis {axis} must be finite and positive, got {value}")
            }
            Self::InvalidAnchor { axis, value } => {
                write!(f, "anchor on axis {axis} must be finite, got {value}")
            }
            Self::OutOfBounds { detail } => write!(f, "out of bounds: {detail}"),
            Self::UninitializedAccess { what } => {
                write!(f, "access before initialisation: {what}")
            }
            Self::TooManyVariableDimensions { count } => {
                write!(f, "slice needs exactly 2 variable axes, {count} marked")
            }
            Self::TooFewVariableDimensions { count } => {
                write!(f, "slice needs exactly 2 variable axes, only {count} marked")
            }
            Self::EmptyAxis { axis } => write!(f, "axis {axis} has zero length"),
            Self::SizeOverflow => write!(f, "total element count overflows usize"),
        }
    }
}

impl Error for GridError {}

/// Errors from the sweep recorder.
#[derive(Clone, Debug, PartialEq)]
pub enum SweepError {
    /// The underlying grid rejected an operation.
    Grid(GridError),
    /// The start-of-sweep configuration is malformed.
    InvalidConfig {
        /// Description of the problem.
        reason: String,
    },
    /// A step arrived before the start-of-sweep notification.
    NotStarted,
    /// An earlier step failed; the sweep is dead and the log is incomplete.
    SweepAborted {
        /// Number of the step (0-based) that first failed.
        step: u64,
    },
    /// The operation needs a completed sweep.
    SweepIncomplete {
        /// Name of the state the log was in.
        state: &'static str,
    },
}

impl fmt::Display for SweepError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Grid(e) => write!(f, "grid: {e}"),
            Self::InvalidConfig { reason } => write!(f, "invalid sweep config: {reason}"),
            Self::NotStarted => write!(f, "step received before sweep start"),
            Self::SweepAborted { step } => {
                write!(f, "sweep aborted after step {step} failed")
            }
            Self::SweepIncomplete { state } => {
                write!(f, "sweep not complete (state: {state})")
            }
        }
    }
}

impl Error for SweepError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Grid(e) => Some(e),
            _ => None,
        }
    }
}

impl From<GridError> for SweepError {
    fn from(e: GridError) -> Self {
        Self::Grid(e)
    }
}
