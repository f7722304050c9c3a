//! Sweep observation and recording.
//!
//! A sweep driver (an exhaustive optimizer, a parameter scan) reports its
//! progress through the [`SweepObserver`] trait: one start notification
//! carrying the [`SweepConfig`], one step per evaluated parameter vector,
//! and an end notification.
//!
//! [`ExhaustiveLog`] is the observer that records every step's value into a
//! [`GridArray`](sweeplog_array::GridArray) centered on the sweep's start
//! point. Once the sweep ends the log can be queried in place or frozen
//! into a shareable [`SweepRecord`].

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod config;
pub mod coverage;
pub mod log;
pub mod metrics;
pub mod observer;
pub mod record;

pub use config::{LogConfig, SweepConfig};
pub use coverage::WriteCoverage;
pub use log::{ExhaustiveLog, SweepState};
pub use metrics::SweepMetrics;
pub use observer::SweepObserver;
pub use record::SweepRecord;
