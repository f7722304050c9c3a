//! Selection of the two swept axes of a slice.

use sweeplog_core::GridError;

/// Exactly two distinct axes, in ascending order.
///
/// The lower axis indexes slice rows, the higher one slice columns.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct VariableAxes {
    row: usize,
    col: usize,
}

impl VariableAxes {
    /// Select two axes by number. Order does not matter; the lower one
    /// becomes the row axis.
    ///
    /// Returns `Err(GridError::TooFewVariableDimensions)` if `a == b`.
    pub fn new(a: usize, b: usize) -> Result<Self, GridError> {
        if a == b {
            return Err(GridError::TooFewVariableDimensions { count: 1 });
        }
        Ok(Self {
            row: a.min(b),
            col: a.max(b),
        })
    }

    /// Select the axes whose flag is `true`.
    ///
    /// The first `true` is the row axis and the second the column axis.
    /// Exactly two flags must be set.
    ///
    /// # Examples
    ///
    /// ```
    /// use sweeplog_slice::VariableAxes;
    ///
    /// let axes = VariableAxes::from_mask(&[false, true, true]).unwrap();
    /// assert_eq!((axes.row_axis(), axes.col_axis()), (1, 2));
    ///
    /// assert!(VariableAxes::from_mask(&[true, true, true]).is_err());
    /// assert!(VariableAxes::from_mask(&[false, true, false]).is_err());
    /// ```
    pub fn from_mask(mask: &[bool]) -> Result<Self, GridError> {
        let mut selected = mask
            .iter()
            .enumerate()
            .filter_map(|(axis, &variable)| variable.then_some(axis));
        let count = mask.iter().filter(|&&v| v).count();
        if count > 2 {
            return Err(GridError::TooManyVariableDimensions { count });
        }
        match (selected.next(), selected.next()) {
            (Some(row), Some(col)) => Ok(Self { row, col }),
            _ => Err(GridError::TooFewVariableDimensions { count }),
        }
    }

    /// Axis swept along slice rows.
    pub fn row_axis(&self) -> usize {
        self.row
    }

    /// Axis swept along slice columns.
    pub fn col_axis(&self) -> usize {
        self.col
    }

    /// Whether `axis` is one of the two swept axes.
    pub fn contains(&self, axis: usize) -> bool {
        axis == self.row || axis == self.col
    }

    /// Expand back into a mask of the given length.
    pub fn to_mask(&self, dimension: usize) -> Vec<bool> {
        (0..dimension).map(|axis| self.contains(axis)).collect()
    }
}
