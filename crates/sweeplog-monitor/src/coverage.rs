//! Per-cell write tracking for a sweep in progress.

/// Bitmap of which grid cells the current sweep has written.
///
/// Indexed by flat offset. A complete exhaustive sweep writes every cell
/// exactly once; anything else shows up here as a gap or a repeat.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WriteCoverage {
    written: Vec<bool>,
    count: usize,
}

impl WriteCoverage {
    /// Tracker for `len` cells, none written.
    pub fn new(len: usize) -> Self {
        Self {
            written: vec![false; len],
            count: 0,
        }
    }

    /// Mark `offset` written. Returns `true` if it already was.
    ///
    /// Offsets past the end are ignored and reported as not repeated.
    pub fn mark(&mut self, offset: usize) -> bool {
        match self.written.get_mut(offset) {
            Some(true) => true,
            Some(cell) => {
                *cell = true;
                self.count += 1;
                false
            }
            None => false,
        }
    }

    /// Whether `offset` has been written.
    pub fn is_written(&self, offset: usize) -> bool {
        self.written.get(offset).copied().unwrap_or(false)
    }

    /// Number of distinct cells written.
    pub fn written(&self) -> usize {
        self.count
    }

    /// Number of cells tracked.
    pub fn len(&self) -> usize {
        self.written.len()
    }

    /// Returns `true` if no cells are tracked.
    pub fn is_empty(&self) -> bool {
        self.written.is_empty()
    }

    /// Every tracked cell has been written.
    pub fn is_complete(&self) -> bool {
        self.count == self.written.len()
    }

    /// Fraction of cells written. An empty tracker counts as complete.
    pub fn fraction(&self) -> f64 {
        if self.written.is_empty() {
            return 1.0;
        }
        self.count as f64 / self.written.len() as f64
    }

    /// Flat offsets not yet written, ascending.
    pub fn missing(&self) -> impl Iterator<Item = usize> + '_ {
        self.written
            .iter()
            .enumerate()
            .filter_map(|(i, &w)| (!w).then_some(i))
    }
}
