//! Core types for the sweeplog workspace.
//!
//! This is the leaf crate with zero internal dependencies. It defines the
//! addressing vocabulary shared by every other crate (discrete [`Index`]
//! and continuous [`Position`]) and the error enums returned by array,
//! slice, and sweep operations.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod id;

pub use error::{GridError, SweepError};
pub use id::{Index, Position};
