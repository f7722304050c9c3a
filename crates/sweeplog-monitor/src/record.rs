//! Immutable, shareable result of a completed sweep.

use std::sync::Arc;

use crate::metrics::SweepMetrics;
use sweeplog_array::GridArray;
use sweeplog_core::{Position, SweepError};
use sweeplog_slice::{extract_slice_2d, Slice2D};

/// A completed sweep, frozen for readers.
///
/// Cloning is cheap: the grid sits behind an [`Arc`] and is never written
/// again, so clones can be handed to other threads freely.
#[derive(Clone, Debug)]
pub struct SweepRecord<T> {
    grid: Arc<GridArray<T>>,
    center: Position,
    metrics: SweepMetrics,
}

impl<T: Copy + Default> SweepRecord<T> {
    pub(crate) fn new(grid: GridArray<T>, center: Position, metrics: SweepMetrics) -> Self {
        Self {
            grid: Arc::new(grid),
            center,
            metrics,
        }
    }

    /// The recorded grid.
    pub fn grid(&self) -> &GridArray<T> {
        &self.grid
    }

    /// A shared handle to the recorded grid.
    pub fn shared_grid(&self) -> Arc<GridArray<T>> {
        Arc::clone(&self.grid)
    }

    /// The sweep center.
    pub fn center(&self) -> &[f64] {
        &self.center
    }

    /// Counters from the sweep.
    pub fn metrics(&self) -> &SweepMetrics {
        &self.metrics
    }

    /// Steps taken on each side of the center along `axis`, or 0 past the
    /// last axis.
    pub fn number_of_steps(&self, axis: usize) -> usize {
        self.grid.length(axis).saturating_sub(1) / 2
    }

    /// Value at a discrete index.
    pub fn get(&self, index: &[usize]) -> Result<T, SweepError> {
        Ok(self.grid.get(index)?)
    }

    /// Value at a continuous position.
    pub fn get_at(&self, position: &[f64]) -> Result<T, SweepError> {
        Ok(self.grid.get_at(position)?)
    }

    /// 2-D cross-section through `base_position` along the axes `mask`
    /// selects.
    pub fn slice_2d(&self, base_position: &[f64], mask: &[bool]) -> Result<Slice2D<T>, SweepError> {
        Ok(extract_slice_2d(&self.grid, base_position, mask)?)
    }
}
