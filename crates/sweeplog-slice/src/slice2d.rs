//! Owned, row-major 2-D copy of a grid cross-section.

/// A dense `rows x cols` matrix copied out of a grid array.
///
/// Row `r`, column `c` is stored at `r * cols + c`. The slice remembers
/// which grid axes it was swept along.
#[derive(Clone, Debug, PartialEq)]
pub struct Slice2D<T> {
    rows: usize,
    cols: usize,
    row_axis: usize,
    col_axis: usize,
    data: Vec<T>,
}

impl<T: Copy> Slice2D<T> {
    pub(crate) fn from_parts(
        rows: usize,
        cols: usize,
        row_axis: usize,
        col_axis: usize,
        data: Vec<T>,
    ) -> Self {
        debug_assert_eq!(data.len(), rows * cols);
        Self {
            rows,
            cols,
            row_axis,
            col_axis,
            data,
        }
    }

    /// Number of rows (length of the row axis).
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns (length of the column axis).
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// `(rows, cols)`.
    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Grid axis swept along rows.
    pub fn row_axis(&self) -> usize {
        self.row_axis
    }

    /// Grid axis swept along columns.
    pub fn col_axis(&self) -> usize {
        self.col_axis
    }

    /// Total number of cells.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Always `false` for slices cut from an initialised grid.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Cell at row `r`, column `c`.
    pub fn get(&self, r: usize, c: usize) -> Option<T> {
        if r >= self.rows || c >= self.cols {
            return None;
        }
        Some(self.data[r * self.cols + c])
    }

    /// One full row.
    pub fn row(&self, r: usize) -> Option<&[T]> {
        if r >= self.rows {
            return None;
        }
        let start = r * self.cols;
        Some(&self.data[start..start + self.cols])
    }

    /// Iterate over rows in order.
    pub fn iter_rows(&self) -> impl Iterator<Item = &[T]> + '_ {
        self.data.chunks(self.cols.max(1))
    }

    /// All cells in row-major order.
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Consume the slice, returning its row-major buffer.
    pub fn into_vec(self) -> Vec<T> {
        self.data
    }
}

impl<T: Copy + PartialOrd> Slice2D<T> {
    /// `(row, col)` of the largest cell. Ties keep the first in row-major
    /// order; incomparable values (NaN) are skipped.
    pub fn argmax(&self) -> Option<(usize, usize)> {
        self.arg_by(|candidate, best| candidate > best)
    }

    /// `(row, col)` of the smallest cell. Ties keep the first in row-major
    /// order; incomparable values (NaN) are skipped.
    pub fn argmin(&self) -> Option<(usize, usize)> {
        self.arg_by(|candidate, best| candidate < best)
    }

    fn arg_by(&self, better: impl Fn(&T, &T) -> bool) -> Option<(usize, usize)> {
        let mut best: Option<usize> = None;
        for (i, v) in self.data.iter().enumerate() {
            if v.partial_cmp(v).is_none() {
                continue;
            }
            match best {
                Some(b) if !better(v, &self.data[b]) => {}
                _ => best = Some(i),
            }
        }
        best.map(|i| (i / self.cols, i % self.cols))
    }
}
