//! Domain models for sequences and search outcomes.

/// An ascending run of integers produced by the sorter.
///
/// The only public constructor is [`crate::app::sort::sort_ascending`], so
/// holding a value of this type is proof that the ordering invariant holds.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SortedSequence(Vec<i64>);

impl SortedSequence {
    pub(crate) fn from_sorted(values: Vec<i64>) -> Self {
        debug_assert!(values.is_sorted());
        Self(values)
    }

    pub fn as_slice(&self) -> &[i64] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Smallest element, `None` for an empty sequence.
    pub fn min(&self) -> Option<i64> {
        self.0.first().copied()
    }

    /// Largest element, `None` for an empty sequence.
    pub fn max(&self) -> Option<i64> {
        self.0.last().copied()
    }
}

/// Outcome of a bounded binary search.
///
/// Index `0` is a legitimate hit and must never be conflated with absence,
/// hence a tagged enum rather than a bare index.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchOutcome {
    /// Zero-based position of the target in the sorted sequence.
    Found(usize),
    /// The target does not occur anywhere in the searched window.
    NotFound,
}

impl SearchOutcome {
    pub fn index(&self) -> Option<usize> {
        match self {
            SearchOutcome::Found(index) => Some(*index),
            SearchOutcome::NotFound => None,
        }
    }

    pub fn is_found(&self) -> bool {
        matches!(self, SearchOutcome::Found(_))
    }
}
