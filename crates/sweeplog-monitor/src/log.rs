//! The exhaustive-sweep recorder.

use std::fmt;
use std::time::Instant;

use crate::config::{LogConfig, SweepConfig};
use crate::coverage::WriteCoverage;
use crate::metrics::SweepMetrics;
use crate::observer::SweepObserver;
use crate::record::SweepRecord;
use sweeplog_array::{GridArray, GridSpec};
use sweeplog_core::{GridError, Position, SweepError};
use sweeplog_slice::{extract_slice_2d, Slice2D};

/// Lifecycle of an [`ExhaustiveLog`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SweepState {
    /// No sweep has started.
    Idle,
    /// A sweep has started and is accepting steps.
    Recording,
    /// The sweep ended normally.
    Complete,
    /// A step was rejected. The grid holds a partial sweep.
    Failed,
}

impl SweepState {
    /// Lower-case name, used in errors and log events.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Recording => "recording",
            Self::Complete => "complete",
            Self::Failed => "failed",
        }
    }
}

impl fmt::Display for SweepState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Records every value of an exhaustive sweep into a centered grid.
///
/// Set the sweep center with [`set_center`](Self::set_center), then hand
/// the log to a driver as a [`SweepObserver`]. On the start notification
/// the log sizes its grid to `2 * number_of_steps[i] + 1` cells per axis
/// around the center; each step writes its value at the step's position.
///
/// A step whose position is not on the grid is fatal. The log moves to
/// [`SweepState::Failed`], the offending step returns the grid error, and
/// every later step returns [`SweepError::SweepAborted`].
///
/// # Examples
///
/// ```
/// use sweeplog_monitor::{ExhaustiveLog, SweepConfig, SweepObserver, SweepState};
///
/// let mut log = ExhaustiveLog::<f64>::new();
/// log.set_center(&[1.0, 0.0]);
/// log.on_sweep_start(&SweepConfig::new(vec![1, 2], vec![0.5, 1.0])).unwrap();
/// assert_eq!(log.data_lengths(), &[3, 5]);
///
/// log.on_step(&[1.5, -2.0], 4.0).unwrap();
/// log.on_sweep_end().unwrap();
/// assert_eq!(log.state(), SweepState::Complete);
/// assert_eq!(log.get(&[2, 0]).unwrap(), 4.0);
/// ```
#[derive(Debug)]
pub struct ExhaustiveLog<T> {
    config: LogConfig,
    center: Option<Position>,
    sweep_center: Option<Position>,
    grid: GridArray<T>,
    state: SweepState,
    coverage: Option<WriteCoverage>,
    metrics: SweepMetrics,
    steps_seen: u64,
    failed_step: Option<u64>,
    started_at: Option<Instant>,
}

impl<T: Copy + Default> ExhaustiveLog<T> {
    /// Create an idle log with default settings.
    pub fn new() -> Self {
        Self::build(LogConfig::default())
    }

    /// Create an idle log with the given settings.
    pub fn with_config(config: LogConfig) -> Result<Self, SweepError> {
        config.validate()?;
        Ok(Self::build(config))
    }

    fn build(config: LogConfig) -> Self {
        Self {
            config,
            center: None,
            sweep_center: None,
            grid: GridArray::new(),
            state: SweepState::Idle,
            coverage: None,
            metrics: SweepMetrics::default(),
            steps_seen: 0,
            failed_step: None,
            started_at: None,
        }
    }

    /// Set the sweep center. Takes effect at the next start notification.
    pub fn set_center(&mut self, center: &[f64]) {
        self.center = Some(Position::from_slice(center));
    }

    /// The center for the next sweep, if set.
    pub fn center(&self) -> Option<&[f64]> {
        self.center.as_deref()
    }

    /// The center the current grid was built around, once a sweep has
    /// started.
    pub fn sweep_center(&self) -> Option<&[f64]> {
        self.sweep_center.as_deref()
    }

    /// The recorder settings.
    pub fn config(&self) -> &LogConfig {
        &self.config
    }

    /// Current lifecycle state.
    pub fn state(&self) -> SweepState {
        self.state
    }

    /// Number of swept parameters (0 before the first sweep starts).
    pub fn dimension(&self) -> usize {
        self.grid.dimension()
    }

    /// Number of cells in the grid.
    pub fn data_size(&self) -> usize {
        self.grid.size()
    }

    /// Cells per axis.
    pub fn data_lengths(&self) -> &[usize] {
        self.grid.lengths()
    }

    /// Cells along `axis`, or 0 past the last axis.
    pub fn data_length(&self, axis: usize) -> usize {
        self.grid.length(axis)
    }

    /// Steps taken on each side of the center along `axis`, or 0 past the
    /// last axis.
    pub fn number_of_steps(&self, axis: usize) -> usize {
        match self.grid.length(axis) {
            0 => 0,
            len => (len - 1) / 2,
        }
    }

    /// Grid spacing per axis.
    pub fn step_size(&self) -> &[f64] {
        self.grid.step_size()
    }

    /// Position of index `[0, ..., 0]`.
    pub fn anchor(&self) -> &[f64] {
        self.grid.anchor()
    }

    /// Value at a discrete index.
    pub fn get(&self, index: &[usize]) -> Result<T, SweepError> {
        Ok(self.grid.get(index)?)
    }

    /// Value at a continuous position.
    pub fn get_at(&self, position: &[f64]) -> Result<T, SweepError> {
        Ok(self.grid.get_at(position)?)
    }

    /// 2-D cross-section through `base_position` along the two axes `mask`
    /// selects. Refused once the sweep has failed.
    pub fn slice_2d(&self, base_position: &[f64], mask: &[bool]) -> Result<Slice2D<T>, SweepError> {
        if let Some(step) = self.failed_step {
            return Err(SweepError::SweepAborted { step });
        }
        Ok(extract_slice_2d(&self.grid, base_position, mask)?)
    }

    /// The recording grid.
    pub fn grid(&self) -> &GridArray<T> {
        &self.grid
    }

    /// Write coverage of the current sweep, when tracking is enabled and a
    /// sweep has started.
    pub fn coverage(&self) -> Option<&WriteCoverage> {
        self.coverage.as_ref()
    }

    /// Counters for the current sweep.
    pub fn metrics(&self) -> &SweepMetrics {
        &self.metrics
    }

    /// Freeze a completed sweep into a shareable record.
    pub fn finish(self) -> Result<SweepRecord<T>, SweepError> {
        if self.state != SweepState::Complete {
            return Err(SweepError::SweepIncomplete {
                state: self.state.as_str(),
            });
        }
        let center = self.sweep_center.ok_or(GridError::UninitializedAccess {
            what: "sweep center",
        })?;
        Ok(SweepRecord::new(self.grid, center, self.metrics))
    }

    fn abort(&mut self, error: GridError) -> SweepError {
        let step = self.steps_seen;
        tracing::error!(step, %error, "sweep step rejected, aborting");
        self.state = SweepState::Failed;
        self.failed_step = Some(step);
        self.metrics.rejected_steps += 1;
        SweepError::Grid(error)
    }
}

impl<T: Copy + Default> Default for ExhaustiveLog<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Copy + Default> SweepObserver<T> for ExhaustiveLog<T> {
    fn on_sweep_start(&mut self, config: &SweepConfig) -> Result<(), SweepError> {
        config.validate()?;
        let center = self.center.as_ref().ok_or(GridError::UninitializedAccess {
            what: "sweep started before set_center()",
        })?;
        if center.len() != config.dimension() {
            return Err(GridError::DimensionMismatch {
                expected: config.dimension(),
                got: center.len(),
            }
            .into());
        }
        let spec = GridSpec::centered(center, &config.number_of_steps, &config.scales)?;
        let grid = GridArray::from_spec(&spec)?.with_tolerance(self.config.alignment_tolerance);
        let sweep_center = center.clone();

        tracing::debug!(
            dimension = spec.dimension(),
            cells = grid.size(),
            lengths = ?spec.lengths.as_slice(),
            "sweep started"
        );
        self.coverage = self
            .config
            .track_coverage
            .then(|| WriteCoverage::new(grid.size()));
        self.metrics = SweepMetrics {
            expected_cells: grid.size() as u64,
            ..SweepMetrics::default()
        };
        self.grid = grid;
        self.sweep_center = Some(sweep_center);
        self.state = SweepState::Recording;
        self.steps_seen = 0;
        self.failed_step = None;
        self.started_at = Some(Instant::now());
        Ok(())
    }

    fn on_step(&mut self, position: &[f64], value: T) -> Result<(), SweepError> {
        match self.state {
            SweepState::Recording => {}
            SweepState::Failed => {
                self.metrics.rejected_steps += 1;
                return Err(SweepError::SweepAborted {
                    step: self.failed_step.unwrap_or(self.steps_seen),
                });
            }
            SweepState::Idle | SweepState::Complete => return Err(SweepError::NotStarted),
        }

        let offset = match self.grid.offset_of_position(position) {
            Ok(offset) => offset,
            Err(e) => return Err(self.abort(e)),
        };
        if let Err(e) = self.grid.set_flat(offset, value) {
            return Err(self.abort(e));
        }

        self.steps_seen += 1;
        self.metrics.steps_recorded += 1;
        match self.coverage.as_mut() {
            Some(coverage) => {
                if coverage.mark(offset) {
                    self.metrics.duplicate_writes += 1;
                } else {
                    self.metrics.cells_written += 1;
                }
            }
            None => self.metrics.cells_written += 1,
        }
        Ok(())
    }

    fn on_sweep_end(&mut self) -> Result<(), SweepError> {
        match self.state {
            SweepState::Recording => {}
            SweepState::Complete => return Ok(()),
            SweepState::Idle => return Err(SweepError::NotStarted),
            SweepState::Failed => {
                return Err(SweepError::SweepAborted {
                    step: self.failed_step.unwrap_or(self.steps_seen),
                })
            }
        }

        if let Some(started) = self.started_at.take() {
            self.metrics.elapsed_us = started.elapsed().as_micros() as u64;
        }
        self.state = SweepState::Complete;

        if let Some(coverage) = &self.coverage {
            if !coverage.is_complete() {
                tracing::warn!(
                    written = coverage.written(),
                    total = coverage.len(),
                    "sweep ended with incomplete coverage ({:.1}%)",
                    coverage.fraction() * 100.0,
                );
            }
        }
        tracing::debug!(
            steps = self.metrics.steps_recorded,
            duplicates = self.metrics.duplicate_writes,
            elapsed_us = self.metrics.elapsed_us,
            "sweep complete"
        );
        Ok(())
    }
}
