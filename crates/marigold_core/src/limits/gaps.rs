//! Iteration over the uncovered parts of a window.

use std::iter::FusedIterator;
use std::slice;

use super::interval::{Coordinate, Interval};

/// Iterator over the maximal uncovered sub-ranges of a window `[lo, hi]`.
///
/// Created by [`IntervalSet::gaps`](super::IntervalSet::gaps).
#[derive(Clone, Debug)]
pub struct Gaps<'a, T: Coordinate> {
    entries: slice::Iter<'a, Interval<T>>,
    /// First point not yet known to be covered. `None` once the window is
    /// exhausted.
    cursor: Option<T>,
    hi: T,
}

impl<'a, T: Coordinate> Gaps<'a, T> {
    pub(crate) fn new(entries: &'a [Interval<T>], lo: T, hi: T) -> Self {
        // Skip everything that ends before the window.
        let first = entries.partition_point(|interval| interval.end() < lo);
        Self {
            entries: entries[first..].iter(),
            cursor: (lo <= hi).then_some(lo),
            hi,
        }
    }

    /// Point after `end`, or `None` if `end` reaches `hi`.
    fn step_past(hi: T, end: T) -> Option<T> {
        (end < hi).then(|| end.saturating_succ())
    }
}

impl<T: Coordinate> Iterator for Gaps<'_, T> {
    type Item = Interval<T>;

    fn next(&mut self) -> Option<Self::Item> {
        let mut cursor = self.cursor?;

        for entry in self.entries.by_ref() {
            if entry.start() > self.hi {
                break;
            }
            if entry.start() > cursor {
                self.cursor = Self::step_past(self.hi, entry.end());
                return Some(Interval::from_ordered(cursor, entry.start().saturating_pred()));
            }
            match Self::step_past(self.hi, entry.end()) {
                Some(next) => cursor = next,
                None => {
                    self.cursor = None;
                    return None;
                }
            }
        }

        self.cursor = None;
        Some(Interval::from_ordered(cursor, self.hi))
    }
}

impl<T: Coordinate> FusedIterator for Gaps<'_, T> {}
