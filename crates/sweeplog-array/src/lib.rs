//! N-dimensional arrays for logging exhaustive sweeps.
//!
//! Two addressing modes over the same dense buffer:
//!
//! - [`DenseArray`]: plain multi-index addressing, row-major with the last
//!   axis contiguous.
//! - [`GridArray`]: continuous-coordinate addressing. Each axis has a step
//!   size and an anchor; a position maps to exactly one cell when it sits
//!   on the anchored lattice and inside the array.
//!
//! [`GridSpec`] bundles the grid construction parameters and implements
//! the centered sizing rule used when a sweep starts.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod dense;
pub mod grid;
pub mod spec;
mod validate;

pub use dense::DenseArray;
pub use grid::GridArray;
pub use spec::GridSpec;
