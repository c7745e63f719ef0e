//! Binary heap construction (heapify) in array layout
//!
//! Layout: `parent(i) = (i - 1) / 2`, children at `2i + 1` and `2i + 2`.
//! Min heap: `a[parent(i)] <= a[i]`. Max heap: `a[parent(i)] >= a[i]`.

use crate::core::AlgoError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Heap ordering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HeapKind {
    /// Smallest element at the root
    Min,
    /// Largest element at the root
    Max,
}

impl HeapKind {
    /// Returns true if `parent` may sit above `child`
    fn holds<T: Ord>(self, parent: &T, child: &T) -> bool {
        match self {
            Self::Min => parent <= child,
            Self::Max => parent >= child,
        }
    }

    /// Returns true if `a` must sit strictly above `b`
    fn before<T: Ord>(self, a: &T, b: &T) -> bool {
        !self.holds(b, a)
    }

    /// Lower-case name, as accepted by [`FromStr`]
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Min => "min",
            Self::Max => "max",
        }
    }
}

impl FromStr for HeapKind {
    type Err = AlgoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "min" => Ok(Self::Min),
            "max" => Ok(Self::Max),
            _ => Err(AlgoError::InvalidHeapKind(s.trim().to_string())),
        }
    }
}

impl fmt::Display for HeapKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Rearranges `values` into heap layout with bottom-up sift-down
///
/// Each sift walks the smaller (min) or larger (max) child path down to a
/// leaf, then moves the item back up to its place. With repeated values
/// this yields the same layout as Python's `heapq.heapify`, and a max heap
/// matches heapifying the negated values.
///
/// ```rust
/// use algodemo::heap::{build_heap, is_heap, HeapKind};
///
/// let heap = build_heap(vec![5, 3, 8, 1], HeapKind::Max);
/// assert_eq!(heap[0], 8);
/// assert!(is_heap(&heap, HeapKind::Max));
/// ```
#[must_use]
pub fn build_heap<T: Ord>(mut values: Vec<T>, kind: HeapKind) -> Vec<T> {
    let len = values.len();
    for i in (0..len / 2).rev() {
        sift_down(&mut values, i, kind);
    }
    values
}

fn sift_down<T: Ord>(values: &mut [T], start: usize, kind: HeapKind) {
    let len = values.len();
    let mut pos = start;
    let mut child = 2 * pos + 1;
    while child < len {
        let right = child + 1;
        if right < len && !kind.before(&values[child], &values[right]) {
            child = right;
        }
        values.swap(pos, child);
        pos = child;
        child = 2 * pos + 1;
    }
    while pos > start {
        let parent = (pos - 1) / 2;
        if !kind.before(&values[pos], &values[parent]) {
            break;
        }
        values.swap(pos, parent);
        pos = parent;
    }
}

/// Checks the heap invariant for every parent/child pair
#[must_use]
pub fn is_heap<T: Ord>(values: &[T], kind: HeapKind) -> bool {
    (1..values.len()).all(|i| kind.holds(&values[(i - 1) / 2], &values[i]))
}
