//! Bounded binary search over sorted sequences.

use std::ops::Range;

use crate::domain::model::{SearchOutcome, SortedSequence};

/// Search the whole sequence for `target`.
pub fn search(sequence: &SortedSequence, target: i64) -> SearchOutcome {
    search_window(sequence, target, 0..sequence.len())
}

/// Search for `target` within the half-open index window `window`.
///
/// The window strictly shrinks on every iteration, so the loop always
/// terminates; an empty window yields [`SearchOutcome::NotFound`] without
/// touching the sequence. A window end past the sequence is clamped.
pub fn search_window(
    sequence: &SortedSequence,
    target: i64,
    window: Range<usize>,
) -> SearchOutcome {
    let values = sequence.as_slice();
    let mut low = window.start;
    let mut high = window.end.min(values.len());

    while low < high {
        let mid = low + (high - low) / 2;
        if values[mid] == target {
            return SearchOutcome::Found(mid);
        }
        if target < values[mid] {
            high = mid;
        } else {
            low = mid + 1;
        }
    }

    SearchOutcome::NotFound
}
