//! # Interval Set
//!
//! Fixed-capacity, sorted, disjoint set of inclusive intervals.

use std::cmp::Ordering;
use std::fmt;

use super::gaps::Gaps;
use super::interval::{Coordinate, Interval};
use crate::error::{LimitsError, LimitsResult};

/// A bounded set of disjoint intervals that merges on insert.
///
/// All memory is reserved at construction: `capacity` entry slots plus a
/// `capacity + 1` slot scratch area reused by every [`insert`](Self::insert).
/// The set never grows.
///
/// After every operation the populated entries are strictly ascending by
/// start, and any two neighbours are separated by at least one uncovered
/// point (overlapping or touching intervals are merged). Slots past
/// [`len`](Self::len) are zero.
///
/// # Thread Safety
///
/// Mutation takes `&mut self`. Wrap in a mutex to share between threads.
///
/// # Example
///
/// ```
/// use marigold_core::IntervalSet;
///
/// let mut set: IntervalSet = IntervalSet::new(8)?;
/// set.insert(1, 50)?;
/// set.insert(45, 100)?;
/// set.insert(102, 150)?;
///
/// let bounds: Vec<_> = set.iter().map(|i| i.bounds()).collect();
/// assert_eq!(bounds, vec![(1, 100), (102, 150)]);
/// # Ok::<(), marigold_core::LimitsError>(())
/// ```
#[derive(Clone)]
pub struct IntervalSet<T: Coordinate = i32> {
    /// Storage. Only `entries[..len]` is meaningful.
    entries: Box<[Interval<T>]>,
    /// Work area for the ordered pre-merge sequence.
    scratch: Box<[Interval<T>]>,
    /// Number of populated entries.
    len: usize,
}

impl<T: Coordinate> IntervalSet<T> {
    /// Creates an empty set able to hold `capacity` intervals.
    ///
    /// # Errors
    ///
    /// * [`LimitsError::InvalidCapacity`] if `capacity` is zero.
    /// * [`LimitsError::AllocationFailed`] if the buffers cannot be reserved.
    pub fn new(capacity: usize) -> LimitsResult<Self> {
        if capacity == 0 {
            return Err(LimitsError::InvalidCapacity);
        }

        let scratch_slots = capacity
            .checked_add(1)
            .ok_or(LimitsError::AllocationFailed { capacity })?;

        let set = Self {
            entries: zeroed_slots(capacity)?,
            scratch: zeroed_slots(scratch_slots)?,
            len: 0,
        };

        tracing::debug!("Interval set created: capacity={}", capacity);
        Ok(set)
    }

    /// Maximum number of intervals the set can hold.
    #[inline]
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.entries.len()
    }

    /// Number of stored intervals.
    #[inline]
    #[must_use]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Whether no intervals are stored.
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Whether every slot is populated. A full set rejects all inserts.
    #[inline]
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.len >= self.capacity()
    }

    /// Number of free slots.
    #[inline]
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.capacity() - self.len
    }

    /// The stored intervals, ascending.
    #[inline]
    #[must_use]
    pub fn as_slice(&self) -> &[Interval<T>] {
        &self.entries[..self.len]
    }

    /// Iterates over the stored intervals, ascending and disjoint.
    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, Interval<T>> {
        self.as_slice().iter()
    }

    /// Returns the interval at `index`, if populated.
    #[inline]
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Interval<T>> {
        self.as_slice().get(index)
    }

    /// Lowest stored interval.
    #[inline]
    #[must_use]
    pub fn first(&self) -> Option<&Interval<T>> {
        self.as_slice().first()
    }

    /// Highest stored interval.
    #[inline]
    #[must_use]
    pub fn last(&self) -> Option<&Interval<T>> {
        self.as_slice().last()
    }

    /// Clears every slot and empties the set. Capacity is unchanged.
    pub fn reset(&mut self) {
        self.entries.fill(Interval::zeroed());
        self.scratch.fill(Interval::zeroed());
        self.len = 0;
        tracing::debug!("Interval set reset: capacity={}", self.capacity());
    }

    /// Inserts `[start, end]`, merging it with every stored interval it
    /// overlaps or touches.
    ///
    /// # Errors
    ///
    /// * [`LimitsError::InvalidInterval`] if `start > end`.
    /// * [`LimitsError::CapacityExceeded`] if the set is already full, even
    ///   when the new interval would have merged into existing entries.
    ///
    /// The set is unchanged on error.
    pub fn insert(&mut self, start: T, end: T) -> LimitsResult<()> {
        self.insert_interval(Interval::new(start, end)?)
    }

    /// Inserts an already-built interval. See [`insert`](Self::insert).
    ///
    /// # Errors
    ///
    /// [`LimitsError::CapacityExceeded`] if the set is already full.
    pub fn insert_interval(&mut self, interval: Interval<T>) -> LimitsResult<()> {
        let capacity = self.capacity();
        if self.len >= capacity {
            tracing::warn!(
                "Interval set full, rejecting {}: capacity={}",
                interval,
                capacity
            );
            return Err(LimitsError::CapacityExceeded { capacity });
        }

        let len = self.len;
        let index = insertion_index(&self.entries[..len], &interval);

        // Ordered sequence of len + 1 intervals.
        let ordered = &mut self.scratch[..=len];
        ordered[..index].copy_from_slice(&self.entries[..index]);
        ordered[index] = interval;
        ordered[index + 1..].copy_from_slice(&self.entries[index..len]);

        let merged = merge_sorted(ordered, &mut self.entries);
        if merged < len {
            self.entries[merged..len].fill(Interval::zeroed());
        }
        self.len = merged;

        tracing::trace!(
            "Inserted {} at {}: {} -> {} intervals",
            interval,
            index,
            len,
            merged
        );
        Ok(())
    }

    /// Whether `point` lies in a stored interval.
    #[must_use]
    pub fn contains(&self, point: T) -> bool {
        self.enclosing(point)
            .is_some_and(|interval| interval.contains(point))
    }

    /// Whether every point of `[start, end]` is covered.
    ///
    /// Stored intervals never touch, so a covered range lies inside exactly
    /// one of them. Returns `false` if `start > end`.
    #[must_use]
    pub fn covers(&self, start: T, end: T) -> bool {
        let Ok(range) = Interval::new(start, end) else {
            return false;
        };
        self.enclosing(start)
            .is_some_and(|interval| interval.encloses(&range))
    }

    /// Total number of covered points, saturating at `u64::MAX`.
    #[must_use]
    pub fn covered_len(&self) -> u64 {
        self.iter()
            .fold(0u64, |total, interval| total.saturating_add(interval.width()))
    }

    /// Iterates over the maximal uncovered sub-ranges of `[lo, hi]`,
    /// ascending. Empty if `lo > hi`.
    pub fn gaps(&self, lo: T, hi: T) -> Gaps<'_, T> {
        Gaps::new(self.as_slice(), lo, hi)
    }

    /// The stored interval with the greatest start `<= point`.
    fn enclosing(&self, point: T) -> Option<&Interval<T>> {
        let entries = self.as_slice();
        let after = entries.partition_point(|interval| interval.start() <= point);
        after.checked_sub(1).map(|index| &entries[index])
    }
}

/// Allocates `count` zeroed slots without aborting on failure.
fn zeroed_slots<T: Coordinate>(count: usize) -> LimitsResult<Box<[Interval<T>]>> {
    let mut slots = Vec::new();
    slots
        .try_reserve_exact(count)
        .map_err(|_| LimitsError::AllocationFailed { capacity: count })?;
    slots.resize(count, Interval::zeroed());
    Ok(slots.into_boxed_slice())
}

/// First position whose interval is not less than `new`.
///
/// Returns `entries.len()` when `new` orders after every stored interval,
/// placing it last.
fn insertion_index<T: Coordinate>(entries: &[Interval<T>], new: &Interval<T>) -> usize {
    entries.partition_point(|existing| existing.cmp(new) == Ordering::Less)
}

/// Collapses `sorted` into maximal runs, written to the front of `out`.
///
/// One forward pass suffices because `sorted` is ordered by start.
/// Returns the number of runs. `sorted` must be non-empty and `out` at
/// least as long as the number of runs produced.
fn merge_sorted<T: Coordinate>(sorted: &[Interval<T>], out: &mut [Interval<T>]) -> usize {
    let mut runs = 0;
    let mut current = sorted[0];

    for next in &sorted[1..] {
        if current.reaches(next) {
            current.absorb(next);
        } else {
            out[runs] = current;
            runs += 1;
            current = *next;
        }
    }

    out[runs] = current;
    runs + 1
}

impl<T: Coordinate> PartialEq for IntervalSet<T> {
    fn eq(&self, other: &Self) -> bool {
        self.capacity() == other.capacity() && self.as_slice() == other.as_slice()
    }
}

impl<T: Coordinate> Eq for IntervalSet<T> {}

impl<T: Coordinate> fmt::Debug for IntervalSet<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IntervalSet")
            .field("capacity", &self.capacity())
            .field("len", &self.len)
            .field("entries", &self.as_slice())
            .finish()
    }
}

impl<'a, T: Coordinate> IntoIterator for &'a IntervalSet<T> {
    type Item = &'a Interval<T>;
    type IntoIter = std::slice::Iter<'a, Interval<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bounds<T: Coordinate>(set: &IntervalSet<T>) -> Vec<(T, T)> {
        set.iter().map(Interval::bounds).collect()
    }

    #[test]
    fn test_new_set_is_empty_and_zeroed() {
        let set: IntervalSet = IntervalSet::new(4).unwrap();
        assert_eq!(set.len(), 0);
        assert_eq!(set.capacity(), 4);
        assert!(set.entries.iter().all(|slot| *slot == Interval::zeroed()));
        assert_eq!(set.scratch.len(), 5);
    }

    #[test]
    fn test_zero_capacity_rejected() {
        assert_eq!(
            IntervalSet::<i32>::new(0).unwrap_err(),
            LimitsError::InvalidCapacity
        );
    }

    #[test]
    fn test_overflowing_capacity_fails_allocation() {
        assert!(matches!(
            IntervalSet::<i64>::new(usize::MAX),
            Err(LimitsError::AllocationFailed { .. })
        ));
    }

    #[test]
    fn test_unreservable_capacity_fails_allocation() {
        // Fits the scratch size, but no allocator can provide the bytes.
        let capacity = usize::MAX / 32;
        assert_eq!(
            IntervalSet::<i64>::new(capacity).unwrap_err(),
            LimitsError::AllocationFailed { capacity }
        );
    }

    #[test]
    fn test_indexed_accessors() {
        let mut set: IntervalSet = IntervalSet::new(4).unwrap();
        assert!(set.first().is_none());
        assert!(set.get(0).is_none());

        set.insert(40, 50).unwrap();
        set.insert(1, 5).unwrap();

        assert_eq!(set.first().map(Interval::bounds), Some((1, 5)));
        assert_eq!(set.get(1).map(Interval::bounds), Some((40, 50)));
        assert!(set.get(2).is_none());
    }

    #[test]
    fn test_insertion_index_falls_back_to_end() {
        let entries = [
            Interval::new(1, 5).unwrap(),
            Interval::new(10, 20).unwrap(),
        ];

        assert_eq!(insertion_index(&entries, &Interval::new(30, 40).unwrap()), 2);
        assert_eq!(insertion_index(&entries, &Interval::new(10, 25).unwrap()), 2);
        assert_eq!(insertion_index(&entries, &Interval::new(10, 15).unwrap()), 1);
        assert_eq!(insertion_index(&entries, &Interval::new(-5, 0).unwrap()), 0);
        assert_eq!(insertion_index(&[], &Interval::new(3, 4).unwrap()), 0);
    }

    #[test]
    fn test_merge_collapses_chain_in_one_pass() {
        let sorted = [
            Interval::new(1, 3).unwrap(),
            Interval::new(4, 6).unwrap(),
            Interval::new(5, 20).unwrap(),
            Interval::new(7, 8).unwrap(),
            Interval::new(30, 31).unwrap(),
        ];
        let mut out = [Interval::zeroed(); 5];

        let runs = merge_sorted(&sorted, &mut out);
        assert_eq!(runs, 2);
        assert_eq!(out[0].bounds(), (1, 20));
        assert_eq!(out[1].bounds(), (30, 31));
    }

    #[test]
    fn test_insert_at_end_keeps_order() {
        let mut set: IntervalSet = IntervalSet::new(4).unwrap();
        set.insert(10, 20).unwrap();
        set.insert(40, 50).unwrap();
        set.insert(80, 90).unwrap();

        assert_eq!(bounds(&set), vec![(10, 20), (40, 50), (80, 90)]);
    }

    #[test]
    fn test_merge_zeroes_stale_slots() {
        let mut set: IntervalSet = IntervalSet::new(4).unwrap();
        set.insert(1, 2).unwrap();
        set.insert(5, 6).unwrap();
        set.insert(9, 10).unwrap();
        set.insert(0, 20).unwrap();

        assert_eq!(bounds(&set), vec![(0, 20)]);
        assert!(set.entries[1..].iter().all(|slot| *slot == Interval::zeroed()));
    }

    #[test]
    fn test_reversed_insert_leaves_set_unchanged() {
        let mut set: IntervalSet = IntervalSet::new(2).unwrap();
        set.insert(1, 5).unwrap();
        let before = set.clone();

        assert_eq!(
            set.insert(9, 3),
            Err(LimitsError::InvalidInterval { start: 9, end: 3 })
        );
        assert_eq!(set, before);
    }

    #[test]
    fn test_contains_and_covers() {
        let mut set: IntervalSet = IntervalSet::new(4).unwrap();
        set.insert(1, 100).unwrap();
        set.insert(102, 150).unwrap();

        assert!(set.contains(1));
        assert!(set.contains(100));
        assert!(!set.contains(101));
        assert!(!set.contains(0));
        assert!(set.contains(150));
        assert!(!set.contains(151));

        assert!(set.covers(10, 90));
        assert!(!set.covers(90, 110));
        assert!(!set.covers(5, 4));
        assert_eq!(set.covered_len(), 100 + 49);
    }

    #[test]
    fn test_i16_extremes_merge_without_overflow() {
        let mut set: IntervalSet<i16> = IntervalSet::new(4).unwrap();
        set.insert(i16::MAX - 10, i16::MAX).unwrap();
        set.insert(i16::MIN, i16::MIN + 10).unwrap();
        set.insert(i16::MAX, i16::MAX).unwrap();
        set.insert(i16::MIN + 11, i16::MIN + 20).unwrap();

        assert_eq!(
            bounds(&set),
            vec![(i16::MIN, i16::MIN + 20), (i16::MAX - 10, i16::MAX)]
        );
    }

    #[test]
    fn test_debug_shows_populated_entries_only() {
        let mut set: IntervalSet = IntervalSet::new(3).unwrap();
        set.insert(4, 8).unwrap();

        let debug = format!("{set:?}");
        assert!(debug.contains("capacity: 3"));
        assert!(debug.contains("len: 1"));
    }
}
