//! Inclusive integer intervals and the coordinate types they are built from.

use std::cmp::Ordering;
use std::fmt;

use bytemuck::Pod;

use crate::error::{LimitsError, LimitsResult};

mod sealed {
    pub trait Sealed {}
}

/// A signed integer type an [`Interval`] can be expressed in.
///
/// Implemented for `i16` (screen columns), `i32` and `i64`. Sealed: the
/// merge logic relies on the saturating helpers behaving like the
/// primitive integers.
pub trait Coordinate:
    Copy + Ord + Eq + fmt::Debug + fmt::Display + Pod + Into<i64> + sealed::Sealed
{
    /// `self + 1`, clamped at the type's maximum.
    #[must_use]
    fn saturating_succ(self) -> Self;

    /// `self - 1`, clamped at the type's minimum.
    #[must_use]
    fn saturating_pred(self) -> Self;

    /// The coordinate as an `i64`, for reporting and width arithmetic.
    #[inline]
    fn widen(self) -> i64 {
        self.into()
    }
}

macro_rules! impl_coordinate {
    ($($ty:ty),* $(,)?) => {
        $(
            impl sealed::Sealed for $ty {}

            impl Coordinate for $ty {
                #[inline]
                fn saturating_succ(self) -> Self {
                    self.saturating_add(1)
                }

                #[inline]
                fn saturating_pred(self) -> Self {
                    self.saturating_sub(1)
                }
            }
        )*
    };
}

impl_coordinate!(i16, i32, i64);

/// An inclusive range `[start, end]` with `start <= end`.
///
/// The fields are private so every `Interval` in circulation is well formed.
/// Intervals order lexicographically: by `start`, then by `end`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Interval<T: Coordinate = i32> {
    start: T,
    end: T,
}

impl<T: Coordinate> Interval<T> {
    /// Creates `[start, end]`.
    ///
    /// # Errors
    ///
    /// Returns [`LimitsError::InvalidInterval`] if `start > end`.
    pub fn new(start: T, end: T) -> LimitsResult<Self> {
        if start > end {
            return Err(LimitsError::InvalidInterval {
                start: start.widen(),
                end: end.widen(),
            });
        }
        Ok(Self { start, end })
    }

    /// Creates the single-point interval `[point, point]`.
    #[inline]
    #[must_use]
    pub fn point(point: T) -> Self {
        Self {
            start: point,
            end: point,
        }
    }

    /// The all-zero interval `[0, 0]` that fills unused slots.
    #[inline]
    #[must_use]
    pub fn zeroed() -> Self {
        Self::point(T::zeroed())
    }

    /// First point in the interval.
    #[inline]
    #[must_use]
    pub const fn start(&self) -> T {
        self.start
    }

    /// Last point in the interval.
    #[inline]
    #[must_use]
    pub const fn end(&self) -> T {
        self.end
    }

    /// Number of integer points covered. Never zero.
    ///
    /// Saturates at `u64::MAX` for the full `i64` range.
    #[must_use]
    pub fn width(&self) -> u64 {
        let span = i128::from(self.end.widen()) - i128::from(self.start.widen()) + 1;
        u64::try_from(span).unwrap_or(u64::MAX)
    }

    /// Whether `point` lies inside the interval.
    #[inline]
    #[must_use]
    pub fn contains(&self, point: T) -> bool {
        self.start <= point && point <= self.end
    }

    /// Whether `other` lies wholly inside this interval.
    #[inline]
    #[must_use]
    pub fn encloses(&self, other: &Self) -> bool {
        self.start <= other.start && other.end <= self.end
    }

    /// Whether `next`, which must not start before `self`, overlaps or is
    /// directly adjacent to `self`.
    #[inline]
    pub(crate) fn reaches(&self, next: &Self) -> bool {
        next.start <= self.end.saturating_succ()
    }

    /// Extends `self` to cover `next`. Only meaningful when [`Self::reaches`].
    #[inline]
    pub(crate) fn absorb(&mut self, next: &Self) {
        self.end = self.end.max(next.end);
    }

    /// Returns `(start, end)`.
    #[inline]
    #[must_use]
    pub const fn bounds(&self) -> (T, T) {
        (self.start, self.end)
    }

    /// Builds an interval without checking `start <= end`.
    #[inline]
    pub(crate) fn from_ordered(start: T, end: T) -> Self {
        debug_assert!(start <= end);
        Self { start, end }
    }
}

impl<T: Coordinate> Default for Interval<T> {
    fn default() -> Self {
        Self::zeroed()
    }
}

impl<T: Coordinate> Ord for Interval<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.start
            .cmp(&other.start)
            .then_with(|| self.end.cmp(&other.end))
    }
}

impl<T: Coordinate> PartialOrd for Interval<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T: Coordinate> TryFrom<(T, T)> for Interval<T> {
    type Error = LimitsError;

    fn try_from((start, end): (T, T)) -> LimitsResult<Self> {
        Self::new(start, end)
    }
}

impl<T: Coordinate> fmt::Display for Interval<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.start, self.end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_reversed_bounds() {
        assert_eq!(
            Interval::new(5, 4),
            Err(LimitsError::InvalidInterval { start: 5, end: 4 })
        );
        assert!(Interval::new(4, 4).is_ok());
    }

    #[test]
    fn test_order_is_start_then_end() {
        let a = Interval::new(1, 10).unwrap();
        let b = Interval::new(1, 20).unwrap();
        let c = Interval::new(2, 3).unwrap();

        assert!(a < b);
        assert!(b < c);
        assert_eq!(a.cmp(&a), Ordering::Equal);
    }

    #[test]
    fn test_reaches_adjacent_but_not_gapped() {
        let base = Interval::new(1, 100).unwrap();

        assert!(base.reaches(&Interval::new(101, 150).unwrap()));
        assert!(base.reaches(&Interval::new(50, 60).unwrap()));
        assert!(!base.reaches(&Interval::new(102, 150).unwrap()));
    }

    #[test]
    fn test_reaches_at_type_max() {
        let top = Interval::<i16>::new(i16::MAX - 1, i16::MAX).unwrap();
        assert!(top.reaches(&Interval::point(i16::MAX)));
    }

    #[test]
    fn test_width_saturates_for_full_range() {
        assert_eq!(Interval::new(-2, 2).unwrap().width(), 5);
        assert_eq!(Interval::<i64>::new(i64::MIN, i64::MAX).unwrap().width(), u64::MAX);
    }

    #[test]
    fn test_contains_and_encloses() {
        let span = Interval::new(10, 20).unwrap();

        assert!(span.contains(10));
        assert!(span.contains(20));
        assert!(!span.contains(21));
        assert!(span.encloses(&Interval::new(12, 20).unwrap()));
        assert!(span.encloses(&span));
        assert!(!span.encloses(&Interval::new(9, 15).unwrap()));
    }

    #[test]
    fn test_try_from_pair() {
        assert_eq!(Interval::<i32>::try_from((3_i32, 8_i32)).unwrap().bounds(), (3, 8));
        assert_eq!(
            Interval::<i32>::try_from((8_i32, 3_i32)),
            Err(LimitsError::InvalidInterval { start: 8, end: 3 })
        );
    }

    #[test]
    fn test_display() {
        assert_eq!(Interval::new(-3, 7).unwrap().to_string(), "[-3, 7]");
    }
}
