//! The [`Index`] and [`Position`] type aliases.

use smallvec::SmallVec;

/// A discrete multi-index: one non-negative integer per axis.
///
/// Uses `SmallVec<[usize; 8]>` to avoid heap allocation for sweeps of up
/// to 8 parameters, which covers rigid and affine transform searches.
/// Higher-dimensional sweeps spill to the heap transparently.
pub type Index = SmallVec<[usize; 8]>;

/// A point in continuous parameter space: one real value per axis.
///
/// Same inline capacity as [`Index`] so the two convert without
/// reallocation.
pub type Position = SmallVec<[f64; 8]>;
