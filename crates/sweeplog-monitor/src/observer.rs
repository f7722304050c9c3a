//! The callback interface between a sweep driver and its observers.

use crate::config::SweepConfig;
use sweeplog_core::SweepError;

/// Receives the progress of a parameter sweep.
///
/// A driver calls [`on_sweep_start`](Self::on_sweep_start) once, then
/// [`on_step`](Self::on_step) for every parameter vector it evaluates, then
/// [`on_sweep_end`](Self::on_sweep_end). All calls happen on the driver's
/// thread, in order.
///
/// An error from any callback means the observer cannot continue; drivers
/// should stop the sweep and propagate it.
pub trait SweepObserver<T> {
    /// The sweep is about to begin with the given step layout.
    fn on_sweep_start(&mut self, config: &SweepConfig) -> Result<(), SweepError>;

    /// The driver evaluated `position` and obtained `value`.
    fn on_step(&mut self, position: &[f64], value: T) -> Result<(), SweepError>;

    /// The sweep is over. No further steps will arrive.
    fn on_sweep_end(&mut self) -> Result<(), SweepError> {
        Ok(())
    }
}

impl<T, O: SweepObserver<T> + ?Sized> SweepObserver<T> for &mut O {
    fn on_sweep_start(&mut self, config: &SweepConfig) -> Result<(), SweepError> {
        (**self).on_sweep_start(config)
    }

    fn on_step(&mut self, position: &[f64], value: T) -> Result<(), SweepError> {
        (**self).on_step(position, value)
    }

    fn on_sweep_end(&mut self) -> Result<(), SweepError> {
        (**self).on_sweep_end()
    }
}
