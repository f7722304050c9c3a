//! Counters collected while recording a sweep.

/// Counters for the most recent sweep.
///
/// Reset at every start notification. `elapsed_us` is filled in when the
/// sweep ends.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SweepMetrics {
    /// Steps stored in the grid.
    pub steps_recorded: u64,
    /// Steps refused, including the one that aborted the sweep.
    pub rejected_steps: u64,
    /// Distinct cells written. Equals `steps_recorded` when coverage
    /// tracking is off.
    pub cells_written: u64,
    /// Number of cells in the grid.
    pub expected_cells: u64,
    /// Steps that overwrote a cell already written this sweep. Always 0
    /// when coverage tracking is off.
    pub duplicate_writes: u64,
    /// Wall-clock time from start to end notification, in microseconds.
    pub elapsed_us: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_metrics_are_zero() {
        let m = SweepMetrics::default();
        assert_eq!(m.steps_recorded, 0);
        assert_eq!(m.rejected_steps, 0);
        assert_eq!(m.cells_written, 0);
        assert_eq!(m.expected_cells, 0);
        assert_eq!(m.duplicate_writes, 0);
        assert_eq!(m.elapsed_us, 0);
    }
}
