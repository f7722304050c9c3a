//! 2-D cross-sections of grid arrays.
//!
//! [`extract_slice_2d`] sweeps two axes of a
//! [`GridArray`](sweeplog_array::GridArray) across their full extent while
//! holding every other axis at a caller-supplied position, and copies the
//! result into a contiguous [`Slice2D`]. The two swept axes are selected by
//! a boolean mask, validated into [`VariableAxes`].

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod axes;
pub mod extract;
pub mod slice2d;

pub use axes::VariableAxes;
pub use extract::{extract_slice, extract_slice_2d};
pub use slice2d::Slice2D;
