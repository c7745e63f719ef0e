//! Binary search over an ascending slice

use tracing::trace;

/// Returns the index of `target` in `sorted`, or `None` when absent.
///
/// `sorted` must be in ascending order; on unsorted input the result is
/// meaningless but the search still terminates. The midpoint rounds toward
/// the low end of the inclusive range, so with duplicates the first probe
/// that hits wins (`[3, 3]` finds `3` at index 0).
///
/// ```rust
/// use algodemo::search::binary_search;
///
/// assert_eq!(binary_search(&[1, 3, 5, 7], &5), Some(2));
/// assert_eq!(binary_search(&[1, 3, 5, 7], &4), None);
/// ```
pub fn binary_search<T: Ord>(sorted: &[T], target: &T) -> Option<usize> {
    let (mut low, mut high) = (0, sorted.len());
    while low < high {
        let mid = low + (high - 1 - low) / 2;
        trace!(low, mid, high, "probe");
        match sorted[mid].cmp(target) {
            std::cmp::Ordering::Equal => return Some(mid),
            std::cmp::Ordering::Less => low = mid + 1,
            std::cmp::Ordering::Greater => high = mid,
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_found_first_middle_last() {
        let values = [2, 4, 6, 8, 10];
        assert_eq!(binary_search(&values, &2), Some(0));
        assert_eq!(binary_search(&values, &6), Some(2));
        assert_eq!(binary_search(&values, &10), Some(4));
    }

    #[test]
    fn test_duplicates_take_lower_midpoint() {
        assert_eq!(binary_search(&[3, 3], &3), Some(0));
        assert_eq!(binary_search(&[1, 2, 2, 2], &2), Some(1));
    }

    #[test]
    fn test_not_found() {
        let values = [2, 4, 6, 8, 10];
        assert_eq!(binary_search(&values, &1), None);
        assert_eq!(binary_search(&values, &5), None);
        assert_eq!(binary_search(&values, &11), None);
    }

    #[test]
    fn test_empty_slice() {
        assert_eq!(binary_search::<i64>(&[], &3), None);
    }

    #[test]
    fn test_single_element() {
        assert_eq!(binary_search(&[7], &7), Some(0));
        assert_eq!(binary_search(&[7], &8), None);
    }

    #[test]
    fn test_negative_values() {
        assert_eq!(binary_search(&[-9, -3, 0, 4], &-3), Some(1));
    }

    #[test]
    fn test_duplicates_return_a_matching_index() {
        let values = [1, 3, 3, 3, 5];
        let index = binary_search(&values, &3);
        assert!(matches!(index, Some(i) if values[i] == 3));
    }

    #[test]
    fn test_works_on_strings() {
        let words = ["apple", "banana", "cherry"];
        assert_eq!(binary_search(&words, &"cherry"), Some(2));
    }
}
