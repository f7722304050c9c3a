//! Benchmark profiles for sweeplog.
//!
//! - [`reference_sweep`]: 21x21x3 grid (1323 cells), the layout of a 2-D
//!   rigid registration search
//! - [`stress_sweep`]: 101x101x11 grid (~112K cells)
//! - [`labelled_grid`]: a grid whose cells hold their own flat offset

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use sweeplog_array::{GridArray, GridSpec};
use sweeplog_core::GridError;
use sweeplog_test_utils::ExhaustiveSweep;

/// Sweep over `[-1:1, -10:10, -1:1]` in steps of `[0.1, 1, 1]`.
pub fn reference_sweep() -> ExhaustiveSweep {
    ExhaustiveSweep::new(vec![0.0, 0.0, 0.0], vec![10, 10, 1], vec![0.1, 1.0, 1.0])
}

/// Same axes as [`reference_sweep`] at roughly 85x the cell count.
pub fn stress_sweep() -> ExhaustiveSweep {
    ExhaustiveSweep::new(vec![0.0, 0.0, 0.0], vec![50, 50, 5], vec![0.02, 0.2, 0.2])
}

/// Grid described by `spec` with every cell set to its flat offset.
pub fn labelled_grid(spec: &GridSpec) -> Result<GridArray<f64>, GridError> {
    let mut grid = GridArray::from_spec(spec)?;
    for offset in 0..grid.size() {
        let index = grid.dense().index_of(offset)?;
        grid.set(&index, offset as f64)?;
    }
    Ok(grid)
}
