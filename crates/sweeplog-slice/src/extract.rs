//! Slice extraction by positional sweep.

use crate::axes::VariableAxes;
use crate::slice2d::Slice2D;
use sweeplog_array::GridArray;
use sweeplog_core::{GridError, Position};

/// Copy a 2-D cross-section of `grid` selected by a boolean axis mask.
///
/// `mask` needs one flag per grid axis with exactly two set. The first
/// set flag becomes the row axis and the second the column axis. See
/// [`extract_slice`] for how cells are filled.
///
/// # Examples
///
/// ```
/// use sweeplog_array::GridArray;
/// use sweeplog_slice::extract_slice_2d;
///
/// let mut grid = GridArray::<f64>::new();
/// grid.initialize(&[3, 2, 4], &[1.0, 1.0, 0.5], &[0.0, 0.0, 0.0]).unwrap();
/// grid.set_at(&[2.0, 1.0, 1.5], 7.0).unwrap();
///
/// let slice = extract_slice_2d(&grid, &[2.0, 0.0, 0.0], &[false, true, true]).unwrap();
/// assert_eq!(slice.shape(), (2, 4));
/// assert_eq!(slice.get(1, 3), Some(7.0));
/// ```
pub fn extract_slice_2d<T: Copy + Default>(
    grid: &GridArray<T>,
    base_position: &[f64],
    mask: &[bool],
) -> Result<Slice2D<T>, GridError> {
    if mask.len() != grid.dimension() {
        return Err(GridError::DimensionMismatch {
            expected: grid.dimension(),
            got: mask.len(),
        });
    }
    let axes = VariableAxes::from_mask(mask)?;
    extract_slice(grid, base_position, axes)
}

/// Copy a 2-D cross-section of `grid` along two selected axes.
///
/// The output has `lengths[row] x lengths[col]` cells. Cell `(r, c)` holds
/// `grid.get_at(p)` where `p` is `base_position` with
/// `p[row] = anchor[row] + r * step[row]` and
/// `p[col] = anchor[col] + c * step[col]`. Values of `base_position` on the
/// swept axes are ignored; every other coordinate must be grid-valid.
///
/// Fails before producing any output when `base_position` has the wrong
/// length, a selected axis does not exist, or a fixed coordinate is off
/// the grid.
pub fn extract_slice<T: Copy + Default>(
    grid: &GridArray<T>,
    base_position: &[f64],
    axes: VariableAxes,
) -> Result<Slice2D<T>, GridError> {
    if !grid.is_initialized() {
        return Err(GridError::UninitializedAccess {
            what: "slice requested from an uninitialised grid",
        });
    }
    let dimension = grid.dimension();
    if base_position.len() != dimension {
        return Err(GridError::DimensionMismatch {
            expected: dimension,
            got: base_position.len(),
        });
    }
    let (row_axis, col_axis) = (axes.row_axis(), axes.col_axis());
    if col_axis >= dimension {
        return Err(GridError::OutOfBounds {
            detail: format!("variable axis {col_axis} is past dimension {dimension}"),
        });
    }

    let anchor = grid.anchor();
    let step = grid.step_size();
    let mut position = Position::from_slice(base_position);
    position[row_axis] = anchor[row_axis];
    position[col_axis] = anchor[col_axis];
    // Fixed axes are checked once here so a bad base fails before the sweep.
    grid.index_of_position(&position)?;

    let rows = grid.length(row_axis);
    let cols = grid.length(col_axis);
    let mut data = Vec::with_capacity(rows * cols);
    for r in 0..rows {
        position[row_axis] = anchor[row_axis] + r as f64 * step[row_axis];
        for c in 0..cols {
            position[col_axis] = anchor[col_axis] + c as f64 * step[col_axis];
            data.push(grid.get_at(&position)?);
        }
    }
    Ok(Slice2D::from_parts(rows, cols, row_axis, col_axis, data))
}

#[cfg(test)]
mod tests {
    use super::*;

    /// 3-axis grid where every cell stores its own flat offset.
    fn labelled_grid() -> GridArray<f64> {
        let mut grid = GridArray::new();
        grid.initialize(&[4, 3, 5], &[0.5, 2.0, 0.1], &[-1.0, 10.0, 0.0])
            .unwrap();
        for offset in 0..grid.size() {
            let index = grid.dense().index_of(offset).unwrap();
            grid.set(&index, offset as f64).unwrap();
        }
        grid
    }

    #[test]
    fn shape_follows_variable_axes() {
        let grid = labelled_grid();
        let s = extract_slice_2d(&grid, &[0.0, 12.0, 0.0], &[true, false, true]).unwrap();
        assert_eq!(s.shape(), (4, 5));
        assert_eq!((s.row_axis(), s.col_axis()), (0, 2));
    }

    #[test]
    fn cells_match_direct_positional_reads() {
        let grid = labelled_grid();
        let base = [0.5, 0.0, 0.0];
        let s = extract_slice_2d(&grid, &base, &[false, true, true]).unwrap();
        for r in 0..3 {
            for c in 0..5 {
                let pos = [0.5, 10.0 + r as f64 * 2.0, c as f64 * 0.1];
                assert_eq!(s.get(r, c), Some(grid.get_at(&pos).unwrap()));
            }
        }
    }

    #[test]
    fn swept_axis_values_in_base_are_ignored() {
        let grid = labelled_grid();
        let a = extract_slice_2d(&grid, &[-0.5, 10.0, 0.0], &[false, true, true]).unwrap();
        let b = extract_slice_2d(&grid, &[-0.5, 999.0, -7.3], &[false, true, true]).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn off_grid_fixed_axis_fails() {
        let grid = labelled_grid();
        assert!(matches!(
            extract_slice_2d(&grid, &[0.25, 10.0, 0.0], &[false, true, true]),
            Err(GridError::OutOfBounds { .. })
        ));
    }

    #[test]
    fn mask_length_must_match() {
        let grid = labelled_grid();
        assert_eq!(
            extract_slice_2d(&grid, &[0.0, 10.0, 0.0], &[true, true]),
            Err(GridError::DimensionMismatch {
                expected: 3,
                got: 2
            })
        );
    }

    #[test]
    fn base_length_must_match() {
        let grid = labelled_grid();
        assert_eq!(
            extract_slice_2d(&grid, &[0.0, 10.0], &[true, true, false]),
            Err(GridError::DimensionMismatch {
                expected: 3,
                got: 2
            })
        );
    }

    #[test]
    fn wrong_variable_count_fails() {
        let grid = labelled_grid();
        assert_eq!(
            extract_slice_2d(&grid, &[0.0, 10.0, 0.0], &[true, true, true]),
            Err(GridError::TooManyVariableDimensions { count: 3 })
        );
        assert_eq!(
            extract_slice_2d(&grid, &[0.0, 10.0, 0.0], &[false, false, true]),
            Err(GridError::TooFewVariableDimensions { count: 1 })
        );
    }

    #[test]
    fn axes_past_dimension_fail() {
        let grid = labelled_grid();
        let axes = VariableAxes::new(1, 3).unwrap();
        assert!(matches!(
            extract_slice(&grid, &[0.0, 10.0, 0.0], axes),
            Err(GridError::OutOfBounds { .. })
        ));
    }

    #[test]
    fn uninitialised_grid_fails() {
        let grid = GridArray::<f64>::new();
        let axes = VariableAxes::new(0, 1).unwrap();
        assert!(matches!(
            extract_slice(&grid, &[], axes),
            Err(GridError::UninitializedAccess { .. })
        ));
    }

    #[test]
    fn two_dimensional_slice_is_whole_grid() {
        let mut grid = GridArray::<i32>::new();
        grid.initialize(&[2, 3], &[1.0, 1.0], &[0.0, 0.0]).unwrap();
        for (i, v) in (0..6).enumerate() {
            let index = grid.dense().index_of(i).unwrap();
            grid.set(&index, v).unwrap();
        }
        let s = extract_slice_2d(&grid, &[0.0, 0.0], &[true, true]).unwrap();
        assert_eq!(s.as_slice(), grid.as_slice());
    }
}
