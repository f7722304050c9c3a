//! Dense n-dimensional array addressed by multi-index.

use crate::validate::{check_dimension, checked_size};
use sweeplog_core::{GridError, Index};

/// A dense n-dimensional array stored in one flat buffer.
///
/// Elements are laid out row-major with the **last axis contiguous**: for
/// lengths `[n0, n1, ..., nk]` the index `[a0, a1, ..., ak]` lives at
/// offset `ak + a(k-1)*nk + a(k-2)*nk*n(k-1) + ... + a0*(nk*...*n1)`.
///
/// A freshly constructed array is uninitialised: it has dimension 0 and
/// no buffer, and every addressed access fails with
/// [`GridError::UninitializedAccess`]. [`initialize`](Self::initialize)
/// allocates a buffer filled with `T::default()`.
///
/// # Examples
///
/// ```
/// use sweeplog_array::DenseArray;
///
/// let mut arr = DenseArray::<f64>::with_lengths(&[5, 2, 10, 1, 4]).unwrap();
/// assert_eq!(arr.dimension(), 5);
/// assert_eq!(arr.size(), 400);
///
/// arr.set(&[3, 1, 7, 0, 2], 15.3).unwrap();
/// assert_eq!(arr.get(&[3, 1, 7, 0, 2]).unwrap(), 15.3);
///
/// // Axis 0 has length 5, so index 5 is out of range.
/// assert!(arr.get(&[5, 0, 0, 0, 0]).is_err());
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct DenseArray<T> {
    lengths: Index,
    data: Vec<T>,
}

impl<T: Copy + Default> DenseArray<T> {
    /// Create an empty, uninitialised array.
    pub fn new() -> Self {
        Self {
            lengths: Index::new(),
            data: Vec::new(),
        }
    }

    /// Create an array and initialise it to the given axis lengths.
    pub fn with_lengths(lengths: &[usize]) -> Result<Self, GridError> {
        let mut arr = Self::new();
        arr.initialize(lengths)?;
        Ok(arr)
    }

    /// Destructively (re)allocate the array to the given axis lengths.
    ///
    /// Any previous buffer and its contents are discarded, not migrated.
    /// Every element of the new buffer is `T::default()`.
    ///
    /// Returns `Err(GridError::EmptyAxis)` if some length is zero, or
    /// `Err(GridError::SizeOverflow)` if the element count overflows
    /// `usize`. On error the array keeps its previous state.
    pub fn initialize(&mut self, lengths: &[usize]) -> Result<(), GridError> {
        let size = checked_size(lengths)?;
        if self.is_initialized() {
            tracing::debug!(
                old_lengths = ?self.lengths.as_slice(),
                new_lengths = ?lengths,
                "reinitialising dense array, previous contents discarded"
            );
        }
        self.lengths = Index::from_slice(lengths);
        self.data = vec![T::default(); size];
        Ok(())
    }

    /// Whether [`initialize`](Self::initialize) has completed.
    pub fn is_initialized(&self) -> bool {
        // An initialised array always holds at least one element.
        !self.data.is_empty()
    }

    /// Number of axes.
    pub fn dimension(&self) -> usize {
        self.lengths.len()
    }

    /// Total number of elements (0 while uninitialised).
    pub fn size(&self) -> usize {
        self.data.len()
    }

    /// Length of every axis.
    pub fn lengths(&self) -> &[usize] {
        &self.lengths
    }

    /// Length of one axis, or 0 if `axis >= dimension()`.
    pub fn length(&self, axis: usize) -> usize {
        self.lengths.get(axis).copied().unwrap_or(0)
    }

    /// The flat buffer in offset order.
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Overwrite every element with `value`.
    pub fn fill(&mut self, value: T) {
        self.data.fill(value);
    }

    /// Flat buffer offset of a multi-index.
    ///
    /// Processes axes from last to first with a running stride, so the
    /// last axis has stride 1. The result is always in `[0, size())`.
    pub fn offset_of(&self, index: &[usize]) -> Result<usize, GridError> {
        self.ensure_initialized()?;
        check_dimension(self.dimension(), index.len())?;

        let mut area = 1usize;
        let mut offset = 0usize;
        for axis in (0..index.len()).rev() {
            let len = self.lengths[axis];
            if index[axis] >= len {
                return Err(GridError::OutOfBounds {
                    detail: format!(
                        "index {:?} on axis {axis} is outside [0, {len})",
                        index
                    ),
                });
            }
            offset += index[axis] * area;
            area *= len;
        }
        Ok(offset)
    }

    /// Multi-index of a flat buffer offset; inverse of
    /// [`offset_of`](Self::offset_of).
    pub fn index_of(&self, offset: usize) -> Result<Index, GridError> {
        self.ensure_initialized()?;
        self.check_offset(offset)?;

        let mut index: Index = smallvec::smallvec![0; self.dimension()];
        let mut rem = offset;
        for axis in (0..self.dimension()).rev() {
            let len = self.lengths[axis];
            index[axis] = rem % len;
            rem /= len;
        }
        Ok(index)
    }

    /// Read the element at a multi-index.
    pub fn get(&self, index: &[usize]) -> Result<T, GridError> {
        let offset = self.offset_of(index)?;
        Ok(self.data[offset])
    }

    /// Write the element at a multi-index.
    ///
    /// Nothing is written unless the whole index validates.
    pub fn set(&mut self, index: &[usize], value: T) -> Result<(), GridError> {
        let offset = self.offset_of(index)?;
        self.data[offset] = value;
        Ok(())
    }

    /// Read the element at a flat offset.
    pub fn get_flat(&self, offset: usize) -> Result<T, GridError> {
        self.ensure_initialized()?;
        self.check_offset(offset)?;
        Ok(self.data[offset])
    }

    /// Write the element at a flat offset.
    pub fn set_flat(&mut self, offset: usize, value: T) -> Result<(), GridError> {
        self.ensure_initialized()?;
        self.check_offset(offset)?;
        self.data[offset] = value;
        Ok(())
    }

    fn ensure_initialized(&self) -> Result<(), GridError> {
        if !self.is_initialized() {
            return Err(GridError::UninitializedAccess {
                what: "array accessed before initialize()",
            });
        }
        Ok(())
    }

    fn check_offset(&self, offset: usize) -> Result<(), GridError> {
        if offset >= self.data.len() {
            return Err(GridError::OutOfBounds {
                detail: format!("offset {offset} is outside [0, {})", self.data.len()),
            });
        }
        Ok(())
    }
}

impl<T: Copy + Default> Default for DenseArray<T> {
    fn default() -> Self {
        Self::new()
    }
}
