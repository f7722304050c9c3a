//! Sweep layout and recorder configuration.

use sweeplog_array::GridArray;
use sweeplog_core::SweepError;

/// Step layout announced by a driver at the start of a sweep.
///
/// Axis `i` is swept over `center[i] + k * scales[i]` for
/// `k in -number_of_steps[i]..=number_of_steps[i]`, so it contributes
/// `2 * number_of_steps[i] + 1` samples.
#[derive(Clone, Debug, PartialEq)]
pub struct SweepConfig {
    /// Steps taken on each side of the center, per axis.
    pub number_of_steps: Vec<usize>,
    /// Spacing between neighbouring samples, per axis.
    pub scales: Vec<f64>,
}

impl SweepConfig {
    /// Build a config from per-axis step counts and spacings.
    pub fn new(number_of_steps: Vec<usize>, scales: Vec<f64>) -> Self {
        Self {
            number_of_steps,
            scales,
        }
    }

    /// Number of swept parameters.
    pub fn dimension(&self) -> usize {
        self.number_of_steps.len()
    }

    /// Total number of steps a complete sweep reports, or `None` on overflow.
    pub fn expected_step_count(&self) -> Option<usize> {
        self.number_of_steps.iter().try_fold(1usize, |acc, &n| {
            n.checked_mul(2)
                .and_then(|v| v.checked_add(1))
                .and_then(|len| acc.checked_mul(len))
        })
    }

    /// Check that the layout describes a non-empty, finite grid.
    pub fn validate(&self) -> Result<(), SweepError> {
        if self.number_of_steps.is_empty() {
            return Err(SweepError::InvalidConfig {
                reason: "sweep has no parameters".into(),
            });
        }
        if self.scales.len() != self.number_of_steps.len() {
            return Err(SweepError::InvalidConfig {
                reason: format!(
                    "{} step counts but {} scales",
                    self.number_of_steps.len(),
                    self.scales.len()
                ),
            });
        }
        if let Some((axis, s)) = self
            .scales
            .iter()
            .enumerate()
            .find(|(_, s)| !(s.is_finite() && **s > 0.0))
        {
            return Err(SweepError::InvalidConfig {
                reason: format!("scale on axis {axis} must be finite and positive, got {s}"),
            });
        }
        if self.expected_step_count().is_none() {
            return Err(SweepError::InvalidConfig {
                reason: "total step count overflows usize".into(),
            });
        }
        Ok(())
    }
}

/// Settings for an [`ExhaustiveLog`](crate::ExhaustiveLog).
#[derive(Clone, Debug, PartialEq)]
pub struct LogConfig {
    /// Alignment tolerance handed to the recording grid, in step units.
    ///
    /// Default: [`GridArray::DEFAULT_ALIGNMENT_TOLERANCE`]. Must lie in
    /// `0.0..=GridArray::MAX_ALIGNMENT_TOLERANCE`.
    pub alignment_tolerance: f64,

    /// Keep a per-cell written bitmap for the current sweep.
    ///
    /// Default: true. Needed for [`SweepMetrics::cells_written`] and
    /// [`SweepMetrics::duplicate_writes`](crate::SweepMetrics::duplicate_writes)
    /// to be exact, and for the incomplete-coverage warning at sweep end.
    ///
    /// [`SweepMetrics::cells_written`]: crate::SweepMetrics::cells_written
    pub track_coverage: bool,
}

impl LogConfig {
    /// Default alignment tolerance.
    pub const DEFAULT_ALIGNMENT_TOLERANCE: f64 = GridArray::<f64>::DEFAULT_ALIGNMENT_TOLERANCE;

    /// Check the tolerance range.
    pub fn validate(&self) -> Result<(), SweepError> {
        let max = GridArray::<f64>::MAX_ALIGNMENT_TOLERANCE;
        if !(0.0..=max).contains(&self.alignment_tolerance) {
            return Err(SweepError::InvalidConfig {
                reason: format!(
                    "alignment_tolerance must be in [0, {max}], got {}",
                    self.alignment_tolerance
                ),
            });
        }
        Ok(())
    }
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            alignment_tolerance: Self::DEFAULT_ALIGNMENT_TOLERANCE,
            track_coverage: true,
        }
    }
}
