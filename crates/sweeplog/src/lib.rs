//! sweeplog: record exhaustive parameter sweeps on anchored n-dimensional grids.
//!
//! This is the top-level facade crate that re-exports the public API from
//! all sweeplog sub-crates. For most users, adding `sweeplog` as a single
//! dependency is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use sweeplog::prelude::*;
//!
//! // Record a 5x3 sweep of f(x, y) = x + 10y around (0, 1).
//! let config = SweepConfig::new(vec![2, 1], vec![0.5, 1.0]);
//! let mut log = ExhaustiveLog::<f64>::new();
//! log.set_center(&[0.0, 1.0]);
//! log.on_sweep_start(&config).unwrap();
//! for i in -2i32..=2 {
//!     for j in -1i32..=1 {
//!         let p = [i as f64 * 0.5, 1.0 + j as f64];
//!         log.on_step(&p, p[0] + 10.0 * p[1]).unwrap();
//!     }
//! }
//! log.on_sweep_end().unwrap();
//!
//! assert_eq!(log.data_lengths(), &[5, 3]);
//! assert_eq!(log.get_at(&[1.0, 2.0]).unwrap(), 21.0);
//!
//! let slice = log.slice_2d(&[0.0, 0.0], &[true, true]).unwrap();
//! assert_eq!(slice.argmax(), Some((4, 2)));
//! ```
//!
//! # Modules
//!
//! Each module corresponds to a sub-crate. Use them for types not in the prelude:
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `sweeplog-core` | `Index`, `Position`, error enums |
//! | [`array`] | `sweeplog-array` | Dense and grid-addressed arrays, `GridSpec` |
//! | [`slice`] | `sweeplog-slice` | 2-D cross-section extraction |
//! | [`monitor`] | `sweeplog-monitor` | Sweep observer trait and the exhaustive recorder |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Addressing vocabulary and error types (`sweeplog-core`).
pub use sweeplog_core as types;

/// Dense and grid-addressed n-dimensional arrays (`sweeplog-array`).
///
/// [`array::DenseArray`] addresses cells by discrete index;
/// [`array::GridArray`] layers an anchored coordinate grid on top.
pub use sweeplog_array as array;

/// 2-D cross-sections of grid arrays (`sweeplog-slice`).
pub use sweeplog_slice as slice;

/// Sweep observation and recording (`sweeplog-monitor`).
///
/// The [`monitor::SweepObserver`] trait is the seam between a sweep driver
/// and anything that watches it; [`monitor::ExhaustiveLog`] records every
/// step into a grid.
pub use sweeplog_monitor as monitor;

/// Common imports for typical sweeplog usage.
///
/// ```rust
/// use sweeplog::prelude::*;
/// ```
pub mod prelude {
    // Core types and errors
    pub use sweeplog_core::{GridError, Index, Position, SweepError};

    // Arrays
    pub use sweeplog_array::{DenseArray, GridArray, GridSpec};

    // Slices
    pub use sweeplog_slice::{extract_slice_2d, Slice2D, VariableAxes};

    // Monitor
    pub use sweeplog_monitor::{
        ExhaustiveLog, LogConfig, SweepConfig, SweepMetrics, SweepObserver, SweepRecord,
        SweepState,
    };
}
