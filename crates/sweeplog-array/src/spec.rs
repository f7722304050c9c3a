//! Grid construction parameters and the centered-sweep sizing rule.

use crate::validate::{check_anchor, check_dimension, check_step_sizes, checked_size};
use sweeplog_core::{GridError, Index, Position};

/// Construction parameters for a [`GridArray`](crate::GridArray).
#[derive(Clone, Debug, PartialEq)]
pub struct GridSpec {
    /// Number of cells along each axis.
    pub lengths: Index,
    /// Spacing between neighbouring cells along each axis.
    pub step_size: Position,
    /// Continuous coordinate of index `[0, ..., 0]`.
    pub anchor: Position,
}

impl GridSpec {
    /// Grid covering `center[i] ± steps[i] * spacing[i]` on every axis.
    ///
    /// Each axis gets `2 * steps[i] + 1` cells, so `center` lands on the
    /// middle index and both extremes are grid-valid:
    ///
    /// - `lengths[i] = 2 * steps[i] + 1`
    /// - `step_size[i] = spacing[i]`
    /// - `anchor[i] = center[i] - steps[i] * spacing[i]`
    ///
    /// # Examples
    ///
    /// ```
    /// use sweeplog_array::GridSpec;
    ///
    /// let spec = GridSpec::centered(&[0.0, 0.0, 0.0], &[10, 10, 1], &[0.1, 1.0, 1.0]).unwrap();
    /// assert_eq!(spec.lengths.as_slice(), &[21, 21, 3]);
    /// assert_eq!(spec.anchor.as_slice(), &[-1.0, -10.0, -1.0]);
    /// assert_eq!(spec.cell_count().unwrap(), 1323);
    /// ```
    pub fn centered(center: &[f64], steps: &[usize], spacing: &[f64]) -> Result<Self, GridError> {
        check_dimension(center.len(), steps.len())?;
        check_dimension(center.len(), spacing.len())?;
        check_step_sizes(spacing)?;

        let mut lengths = Index::with_capacity(steps.len());
        for &n in steps {
            let len = n
                .checked_mul(2)
                .and_then(|v| v.checked_add(1))
                .ok_or(GridError::SizeOverflow)?;
            lengths.push(len);
        }
        let anchor: Position = center
            .iter()
            .zip(steps)
            .zip(spacing)
            .map(|((&c, &n), &d)| c - n as f64 * d)
            .collect();
        check_anchor(&anchor)?;

        Ok(Self {
            lengths,
            step_size: Position::from_slice(spacing),
            anchor,
        })
    }

    /// Number of axes.
    pub fn dimension(&self) -> usize {
        self.lengths.len()
    }

    /// Total number of cells, overflow-checked.
    pub fn cell_count(&self) -> Result<usize, GridError> {
        checked_size(&self.lengths)
    }

    /// Check the same invariants [`GridArray::initialize`](crate::GridArray::initialize) does.
    pub fn validate(&self) -> Result<(), GridError> {
        check_dimension(self.lengths.len(), self.step_size.len())?;
        check_dimension(self.lengths.len(), self.anchor.len())?;
        check_step_sizes(&self.step_size)?;
        check_anchor(&self.anchor)?;
        checked_size(&self.lengths)?;
        Ok(())
    }
}
