//! Ascending selection sort over integer sequences.

use crate::domain::model::SortedSequence;

/// Sort `values` ascending and seal them in a [`SortedSequence`].
///
/// Selection sort: O(n²) comparisons, O(1) extra space, in place. Sorting is
/// total; empty and single-element inputs pass through unchanged.
pub fn sort_ascending(mut values: Vec<i64>) -> SortedSequence {
    selection_sort(&mut values);
    SortedSequence::from_sorted(values)
}

fn selection_sort(values: &mut [i64]) {
    for i in 0..values.len() {
        let mut min_idx = i;
        for j in i + 1..values.len() {
            if values[j] < values[min_idx] {
                min_idx = j;
            }
        }
        if min_idx != i {
            values.swap(i, min_idx);
        }
    }
}
