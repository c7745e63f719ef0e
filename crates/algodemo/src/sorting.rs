//! Quadratic sorts with a per-pass step trace
//!
//! Both sorts work in place and record a snapshot of the slice after every
//! outer pass, so a console front end can print the intermediate states.

use serde::{Deserialize, Serialize};
use std::fmt::Debug;

/// Snapshots of a slice after each outer pass of a sort
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SortTrace<T> {
    steps: Vec<Vec<T>>,
}

impl<T: Clone> SortTrace<T> {
    /// Creates an empty trace
    #[must_use]
    pub const fn new() -> Self {
        Self { steps: Vec::new() }
    }

    fn record(&mut self, values: &[T]) {
        self.steps.push(values.to_vec());
    }

    /// Returns the recorded snapshots, oldest first
    #[must_use]
    pub fn steps(&self) -> &[Vec<T>] {
        &self.steps
    }

    /// Number of recorded passes
    #[must_use]
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Returns true if no pass was recorded
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }
}

impl<T> From<Vec<Vec<T>>> for SortTrace<T> {
    fn from(steps: Vec<Vec<T>>) -> Self {
        Self { steps }
    }
}

impl<T: Debug> SortTrace<T> {
    /// Renders one `Step k: [..]` line per pass, 1-based
    #[must_use]
    pub fn render_lines(&self) -> Vec<String> {
        self.steps
            .iter()
            .enumerate()
            .map(|(i, step)| format!("Step {}: {:?}", i + 1, step))
            .collect()
    }
}

/// Which quadratic sort to run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SortAlgorithm {
    /// Selection sort
    Selection,
    /// Bubble sort
    Bubble,
}

impl SortAlgorithm {
    /// Human-readable name
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Selection => "selection sort",
            Self::Bubble => "bubble sort",
        }
    }

    /// Sorts `values` in place with this algorithm
    pub fn sort<T: Ord + Clone>(self, values: &mut [T]) -> SortTrace<T> {
        match self {
            Self::Selection => selection_sort(values),
            Self::Bubble => bubble_sort(values),
        }
    }
}

/// Selection sort: `n - 1` passes, each swapping the minimum of the
/// unsorted suffix into place.
pub fn selection_sort<T: Ord + Clone>(values: &mut [T]) -> SortTrace<T> {
    let mut trace = SortTrace::new();
    let n = values.len();
    for i in 0..n.saturating_sub(1) {
        let mut min_index = i;
        for j in (i + 1)..n {
            if values[j] < values[min_index] {
                min_index = j;
            }
        }
        values.swap(i, min_index);
        trace.record(values);
    }
    trace
}

/// Bubble sort: `n` passes over the shrinking unsorted prefix, with a
/// snapshot after each pass (no early exit).
pub fn bubble_sort<T: Ord + Clone>(values: &mut [T]) -> SortTrace<T> {
    let mut trace = SortTrace::new();
    let n = values.len();
    for i in 0..n {
        for j in 0..(n - i).saturating_sub(1) {
            if values[j] > values[j + 1] {
                values.swap(j, j + 1);
            }
        }
        trace.record(values);
    }
    trace
}
