//! Test utilities for sweeplog development.
//!
//! Provides [`ExhaustiveSweep`], a reference driver that walks every point
//! of a centered grid and reports it through [`SweepObserver`], plus mock
//! observers for checking what a driver emits. Metric functions to sweep
//! live in [`fixtures`].

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;

use sweeplog_core::SweepError;
use sweeplog_monitor::{SweepConfig, SweepObserver};

/// Exhaustive grid-search driver.
///
/// Evaluates the metric at `center[i] + k * scales[i]` for every
/// `k in -number_of_steps[i]..=number_of_steps[i]` on every axis, last axis
/// fastest, and reports each evaluation to the observer. Tracks the best
/// and worst values seen.
pub struct ExhaustiveSweep {
    center: Vec<f64>,
    config: SweepConfig,
}

/// Extremes found by an [`ExhaustiveSweep`] run.
#[derive(Clone, Debug, PartialEq)]
pub struct SweepOutcome<T> {
    pub steps: u64,
    pub min_value: T,
    pub min_position: Vec<f64>,
    pub max_value: T,
    pub max_position: Vec<f64>,
}

impl ExhaustiveSweep {
    pub fn new(center: Vec<f64>, number_of_steps: Vec<usize>, scales: Vec<f64>) -> Self {
        Self {
            center,
            config: SweepConfig::new(number_of_steps, scales),
        }
    }

    pub fn center(&self) -> &[f64] {
        &self.center
    }

    pub fn config(&self) -> &SweepConfig {
        &self.config
    }

    /// Position of every step in visit order.
    pub fn positions(&self) -> Vec<Vec<f64>> {
        let n = &self.config.number_of_steps;
        let mut offsets: Vec<i64> = n.iter().map(|&s| -(s as i64)).collect();
        let mut out = Vec::new();
        loop {
            out.push(self.position_of(&offsets));
            // Odometer increment, last axis fastest.
            let mut axis = offsets.len();
            loop {
                if axis == 0 {
                    return out;
                }
                axis -= 1;
                if offsets[axis] < n[axis] as i64 {
                    offsets[axis] += 1;
                    break;
                }
                offsets[axis] = -(n[axis] as i64);
            }
        }
    }

    fn position_of(&self, offsets: &[i64]) -> Vec<f64> {
        offsets
            .iter()
            .zip(&self.center)
            .zip(&self.config.scales)
            .map(|((&k, &c), &s)| c + k as f64 * s)
            .collect()
    }

    /// Run the sweep, stopping at the first observer error.
    pub fn run<T, O, F>(&self, observer: &mut O, mut metric: F) -> Result<SweepOutcome<T>, SweepError>
    where
        T: Copy + PartialOrd,
        O: SweepObserver<T> + ?Sized,
        F: FnMut(&[f64]) -> T,
    {
        self.config.validate()?;
        if self.center.len() != self.config.dimension() {
            return Err(SweepError::InvalidConfig {
                reason: format!(
                    "center has {} coordinates, sweep has {} parameters",
                    self.center.len(),
                    self.config.dimension()
                ),
            });
        }

        observer.on_sweep_start(&self.config)?;
        let mut outcome: Option<SweepOutcome<T>> = None;
        for position in self.positions() {
            let value = metric(&position);
            observer.on_step(&position, value)?;
            let o = outcome.get_or_insert_with(|| SweepOutcome {
                steps: 0,
                min_value: value,
                min_position: position.clone(),
                max_value: value,
                max_position: position.clone(),
            });
            o.steps += 1;
            if value < o.min_value {
                o.min_value = value;
                o.min_position = position.clone();
            }
            if value > o.max_value {
                o.max_value = value;
                o.max_position = position;
            }
        }
        observer.on_sweep_end()?;
        outcome.ok_or(SweepError::NotStarted)
    }
}

/// Observer that remembers every callback.
pub struct RecordingObserver<T> {
    pub configs: Vec<SweepConfig>,
    pub steps: Vec<(Vec<f64>, T)>,
    pub ends: usize,
}

impl<T> RecordingObserver<T> {
    pub fn new() -> Self {
        Self {
            configs: Vec::new(),
            steps: Vec::new(),
            ends: 0,
        }
    }
}

impl<T> Default for RecordingObserver<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> SweepObserver<T> for RecordingObserver<T> {
    fn on_sweep_start(&mut self, config: &SweepConfig) -> Result<(), SweepError> {
        self.configs.push(config.clone());
        Ok(())
    }

    fn on_step(&mut self, position: &[f64], value: T) -> Result<(), SweepError> {
        self.steps.push((position.to_vec(), value));
        Ok(())
    }

    fn on_sweep_end(&mut self) -> Result<(), SweepError> {
        self.ends += 1;
        Ok(())
    }
}

/// Observer that accepts `fail_after` steps, then rejects every step.
pub struct FailingObserver {
    pub fail_after: u64,
    pub seen: u64,
}

impl FailingObserver {
    pub fn new(fail_after: u64) -> Self {
        Self {
            fail_after,
            seen: 0,
        }
    }
}

impl<T> SweepObserver<T> for FailingObserver {
    fn on_sweep_start(&mut self, _config: &SweepConfig) -> Result<(), SweepError> {
        self.seen = 0;
        Ok(())
    }

    fn on_step(&mut self, _position: &[f64], _value: T) -> Result<(), SweepError> {
        if self.seen >= self.fail_after {
            return Err(SweepError::SweepAborted {
                step: self.fail_after,
            });
        }
        self.seen += 1;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn visits_every_point_last_axis_fastest() {
        let sweep = ExhaustiveSweep::new(vec![0.0, 10.0], vec![1, 1], vec![1.0, 0.5]);
        let positions = sweep.positions();
        assert_eq!(positions.len(), 9);
        assert_eq!(positions[0], vec![-1.0, 9.5]);
        assert_eq!(positions[1], vec![-1.0, 10.0]);
        assert_eq!(positions[3], vec![0.0, 9.5]);
        assert_eq!(positions[8], vec![1.0, 10.5]);
    }

    #[test]
    fn zero_steps_is_single_point() {
        let sweep = ExhaustiveSweep::new(vec![3.0], vec![0], vec![1.0]);
        assert_eq!(sweep.positions(), vec![vec![3.0]]);
    }

    #[test]
    fn run_fires_callbacks_in_order() {
        let sweep = ExhaustiveSweep::new(vec![0.0], vec![2], vec![1.0]);
        let mut obs = RecordingObserver::new();
        let outcome = sweep.run(&mut obs, |p| p[0] * p[0]).unwrap();
        assert_eq!(obs.configs.len(), 1);
        assert_eq!(obs.steps.len(), 5);
        assert_eq!(obs.ends, 1);
        assert_eq!(outcome.steps, 5);
        assert_eq!(outcome.min_value, 0.0);
        assert_eq!(outcome.min_position, vec![0.0]);
        assert_eq!(outcome.max_value, 4.0);
        assert_eq!(outcome.max_position, vec![-2.0]);
    }

    #[test]
    fn run_stops_at_first_error() {
        let sweep = ExhaustiveSweep::new(vec![0.0], vec![3], vec![1.0]);
        let mut obs = FailingObserver::new(2);
        let err = sweep.run(&mut obs, |p| p[0]).unwrap_err();
        assert_eq!(err, SweepError::SweepAborted { step: 2 });
        assert_eq!(obs.seen, 2);
    }

    #[test]
    fn run_rejects_center_of_wrong_length() {
        let sweep = ExhaustiveSweep::new(vec![0.0, 0.0], vec![1], vec![1.0]);
        let mut obs = RecordingObserver::<f64>::new();
        assert!(sweep.run(&mut obs, |_| 0.0).is_err());
        assert!(obs.configs.is_empty());
    }
}
