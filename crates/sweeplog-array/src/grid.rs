//! Dense array addressed by continuous coordinates on an anchored grid.

use crate::dense::DenseArray;
use crate::spec::GridSpec;
use crate::validate::{check_anchor, check_dimension, check_step_sizes};
use sweeplog_core::{GridError, Index, Position};

/// A [`DenseArray`] with a regular coordinate grid layered on top.
///
/// Discrete index `[0, 0, ..., 0]` sits at `anchor` in continuous space and
/// neighbouring cells along axis `i` are `step_size[i]` apart. The valid
/// accessors are exactly
/// `{ anchor[i] + k * step_size[i] : 0 <= k < lengths[i] }` on every axis.
///
/// Positions must sit on that lattice: a coordinate is accepted when its
/// distance to the nearest lattice point, measured in steps, is within the
/// alignment tolerance (default [`DEFAULT_ALIGNMENT_TOLERANCE`](Self::DEFAULT_ALIGNMENT_TOLERANCE))
/// plus the floating-point rounding error of `coord - anchor`, which is
/// `4 * EPSILON * (|coord| + |anchor|) / step` steps.
///
/// # Examples
///
/// ```
/// use sweeplog_array::GridArray;
///
/// let mut grid = GridArray::<f64>::new();
/// grid.initialize(&[5, 2, 10], &[1.0, 0.5, 2.0], &[5.0, 10.0, 15.0]).unwrap();
/// assert_eq!(grid.size(), 100);
///
/// // Offsets [1, 0.5, 6] are whole steps: discrete index [1, 1, 3].
/// assert!(grid.is_valid_position(&[6.0, 10.5, 21.0]));
/// grid.set_at(&[6.0, 10.5, 21.0], 3.2).unwrap();
/// assert_eq!(grid.get(&[1, 1, 3]).unwrap(), 3.2);
///
/// // Below the anchor on every axis.
/// assert!(grid.set_at(&[0.0, 0.0, 0.0], 5.1).is_err());
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct GridArray<T> {
    dense: DenseArray<T>,
    step_size: Position,
    anchor: Position,
    tolerance: f64,
}

impl<T: Copy + Default> GridArray<T> {
    /// Default alignment tolerance, in units of one step.
    pub const DEFAULT_ALIGNMENT_TOLERANCE: f64 = 1e-9;

    /// Largest accepted tolerance. At half a step every coordinate would
    /// round to some lattice point.
    pub const MAX_ALIGNMENT_TOLERANCE: f64 = 0.25;

    /// Create an empty, uninitialised grid.
    pub fn new() -> Self {
        Self {
            dense: DenseArray::new(),
            step_size: Position::new(),
            anchor: Position::new(),
            tolerance: Self::DEFAULT_ALIGNMENT_TOLERANCE,
        }
    }

    /// Create and initialise a grid from a [`GridSpec`].
    pub fn from_spec(spec: &GridSpec) -> Result<Self, GridError> {
        let mut grid = Self::new();
        grid.initialize(&spec.lengths, &spec.step_size, &spec.anchor)?;
        Ok(grid)
    }

    /// Builder-style tolerance override. See [`set_tolerance`](Self::set_tolerance).
    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.set_tolerance(tolerance);
        self
    }

    /// Set the alignment tolerance, in units of one step.
    ///
    /// Values are clamped to `[0, MAX_ALIGNMENT_TOLERANCE]`; NaN restores
    /// the default.
    pub fn set_tolerance(&mut self, tolerance: f64) {
        self.tolerance = if tolerance.is_nan() {
            Self::DEFAULT_ALIGNMENT_TOLERANCE
        } else {
            tolerance.clamp(0.0, Self::MAX_ALIGNMENT_TOLERANCE)
        };
    }

    /// Current alignment tolerance, in units of one step.
    pub fn tolerance(&self) -> f64 {
        self.tolerance
    }

    /// Destructively (re)initialise the grid.
    ///
    /// `step_size` and `anchor` need one entry per axis of `lengths`. Every
    /// step must be finite and positive, every anchor finite. Validation
    /// completes before the underlying array is touched.
    pub fn initialize(
        &mut self,
        lengths: &[usize],
        step_size: &[f64],
        anchor: &[f64],
    ) -> Result<(), GridError> {
        check_dimension(lengths.len(), step_size.len())?;
        check_dimension(lengths.len(), anchor.len())?;
        check_step_sizes(step_size)?;
        check_anchor(anchor)?;

        self.dense.initialize(lengths)?;
        self.step_size = Position::from_slice(step_size);
        self.anchor = Position::from_slice(anchor);
        Ok(())
    }

    /// Whether [`initialize`](Self::initialize) has completed.
    pub fn is_initialized(&self) -> bool {
        self.dense.is_initialized()
    }

    /// The underlying index-addressed array.
    pub fn dense(&self) -> &DenseArray<T> {
        &self.dense
    }

    /// Number of axes.
    pub fn dimension(&self) -> usize {
        self.dense.dimension()
    }

    /// Total number of elements.
    pub fn size(&self) -> usize {
        self.dense.size()
    }

    /// Length of every axis.
    pub fn lengths(&self) -> &[usize] {
        self.dense.lengths()
    }

    /// Length of one axis, or 0 past the last axis.
    pub fn length(&self, axis: usize) -> usize {
        self.dense.length(axis)
    }

    /// Spacing between neighbouring cells on every axis.
    pub fn step_size(&self) -> &[f64] {
        &self.step_size
    }

    /// Continuous coordinate of index `[0, ..., 0]`.
    pub fn anchor(&self) -> &[f64] {
        &self.anchor
    }

    /// Largest valid coordinate on an axis, or `None` past the last axis.
    pub fn upper_bound(&self, axis: usize) -> Option<f64> {
        let len = self.dense.length(axis);
        if len == 0 {
            return None;
        }
        Some(self.anchor[axis] + (len - 1) as f64 * self.step_size[axis])
    }

    /// The flat buffer in offset order.
    pub fn as_slice(&self) -> &[T] {
        self.dense.as_slice()
    }

    /// Overwrite every element with `value`.
    pub fn fill(&mut self, value: T) {
        self.dense.fill(value);
    }

    /// Whether `position` addresses a cell of this grid.
    ///
    /// False when the grid is uninitialised, when the dimension differs,
    /// or when some coordinate is off the lattice or outside the region.
    pub fn is_valid_position(&self, position: &[f64]) -> bool {
        self.is_initialized()
            && position.len() == self.dimension()
            && position
                .iter()
                .enumerate()
                .all(|(axis, &coord)| self.axis_index(axis, coord).is_some())
    }

    /// Discrete index of a grid-valid position.
    pub fn index_of_position(&self, position: &[f64]) -> Result<Index, GridError> {
        self.ensure_initialized()?;
        check_dimension(self.dimension(), position.len())?;

        let mut index = Index::with_capacity(position.len());
        for (axis, &coord) in position.iter().enumerate() {
            match self.axis_index(axis, coord) {
                Some(k) => index.push(k),
                None => {
                    return Err(GridError::OutOfBounds {
                        detail: format!(
                            "position {position:?} is not on the grid along axis {axis} \
                             (anchor {}, step {}, length {})",
                            self.anchor[axis],
                            self.step_size[axis],
                            self.dense.length(axis),
                        ),
                    })
                }
            }
        }
        Ok(index)
    }

    /// Flat buffer offset of a grid-valid position.
    pub fn offset_of_position(&self, position: &[f64]) -> Result<usize, GridError> {
        let index = self.index_of_position(position)?;
        self.dense.offset_of(&index)
    }

    /// Continuous position of a discrete index.
    pub fn position_of_index(&self, index: &[usize]) -> Result<Position, GridError> {
        self.dense.offset_of(index)?;
        Ok(index
            .iter()
            .enumerate()
            .map(|(axis, &k)| self.anchor[axis] + k as f64 * self.step_size[axis])
            .collect())
    }

    /// Read the element at a continuous position.
    pub fn get_at(&self, position: &[f64]) -> Result<T, GridError> {
        let index = self.index_of_position(position)?;
        self.dense.get(&index)
    }

    /// Write the element at a continuous position.
    ///
    /// An invalid position never reaches the underlying array.
    pub fn set_at(&mut self, position: &[f64], value: T) -> Result<(), GridError> {
        let index = self.index_of_position(position)?;
        self.dense.set(&index, value)
    }

    /// Read the element at a discrete index.
    pub fn get(&self, index: &[usize]) -> Result<T, GridError> {
        self.dense.get(index)
    }

    /// Write the element at a discrete index.
    pub fn set(&mut self, index: &[usize], value: T) -> Result<(), GridError> {
        self.dense.set(index, value)
    }

    /// Write the element at a flat offset.
    pub fn set_flat(&mut self, offset: usize, value: T) -> Result<(), GridError> {
        self.dense.set_flat(offset, value)
    }

    /// Map one coordinate to its discrete index along `axis`.
    fn axis_index(&self, axis: usize, coord: f64) -> Option<usize> {
        let anchor = self.anchor[axis];
        let step = self.step_size[axis];
        let steps = (coord - anchor) / step;
        if !steps.is_finite() {
            return None;
        }
        // Rounding error of the subtraction grows with the coordinate
        // magnitude, independent of the step.
        let slack = 4.0 * f64::EPSILON * (coord.abs() + anchor.abs()) / step;
        let nearest = steps.round();
        if (steps - nearest).abs() > self.tolerance + slack {
            return None;
        }
        if nearest < 0.0 || nearest >= self.dense.length(axis) as f64 {
            return None;
        }
        Some(nearest as usize)
    }

    fn ensure_initialized(&self) -> Result<(), GridError> {
        if !self.is_initialized() {
            return Err(GridError::UninitializedAccess {
                what: "grid accessed before initialize()",
            });
        }
        Ok(())
    }
}

impl<T: Copy + Default> Default for GridArray<T> {
    fn default() -> Self {
        Self::new()
    }
}
