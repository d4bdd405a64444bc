//! Closed ranges on one axis of the continuous reactor space.
//!
//! Coordinates are fixed-point: one discrete cell is `TICKS_PER_UNIT`
//! ticks wide, and cell `n` occupies `[4n-1, 4n+1]`.  Two ranges whose
//! cells are merely adjacent therefore leave a gap of `SEAM` ticks between
//! them, while ranges sharing a cell overlap by at least two ticks.
//!
//! Every bound of every interval sits on that padded grid: lows are
//! `4n-1` and highs are `4n+1`.  Only `padded` creates intervals from
//! outside; everything else is derived by taking max/min of existing
//! bounds or by stepping across a seam.

use core::ops::RangeInclusive;
use std::cmp::{max, min};
use std::fmt::{self, Display, Formatter};

pub const TICKS_PER_UNIT: i64 = 4;
pub const MARGIN: i64 = 1;
/// Distance from the high bound of one cell to the low bound of the next.
pub const SEAM: i64 = TICKS_PER_UNIT - 2 * MARGIN;

/// A range of positive length.  Empty ranges are never constructed; the
/// operations which could produce one return `None` or omit it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Interval {
    low: i64,
    high: i64,
}

impl Interval {
    fn new(low: i64, high: i64) -> Option<Interval> {
        if low < high {
            Some(Interval { low, high })
        } else {
            None
        }
    }

    /// The continuous range covering the cells `min..=max`.
    pub fn padded(cells: &RangeInclusive<i32>) -> Option<Interval> {
        let first = i64::from(*cells.start());
        let last = i64::from(*cells.end());
        if first > last {
            return None;
        }
        Interval::new(
            first * TICKS_PER_UNIT - MARGIN,
            last * TICKS_PER_UNIT + MARGIN,
        )
    }

    pub fn low(&self) -> i64 {
        self.low
    }

    pub fn high(&self) -> i64 {
        self.high
    }

    pub fn length(&self) -> i64 {
        self.high - self.low
    }

    pub fn intersects(&self, other: &Interval) -> bool {
        self.intersection(other).is_some()
    }

    /// Touching endpoints do not count as an overlap.
    pub fn intersection(&self, other: &Interval) -> Option<Interval> {
        if other.high <= self.low || other.low >= self.high {
            None
        } else {
            Interval::new(max(self.low, other.low), min(self.high, other.high))
        }
    }

    /// The part of `self` lying before the start of `other`.
    pub fn below(&self, other: &Interval) -> Option<Interval> {
        Interval::new(self.low, min(other.low - SEAM, self.high))
    }

    /// The part of `self` lying after the end of `other`.
    pub fn above(&self, other: &Interval) -> Option<Interval> {
        Interval::new(max(other.high + SEAM, self.low), self.high)
    }

    /// The parts of `self` outside `other`: at most a left and a right
    /// remainder, in that order.
    pub fn difference(&self, other: &Interval) -> Vec<Interval> {
        [self.below(other), self.above(other)]
            .into_iter()
            .flatten()
            .collect()
    }

    pub fn contains(&self, other: &Interval) -> bool {
        other.low >= self.low && other.high <= self.high
    }

    /// First and last whole cell inside the range.
    pub fn cell_bounds(&self) -> (i64, i64) {
        (
            (self.low + TICKS_PER_UNIT - 1).div_euclid(TICKS_PER_UNIT),
            self.high.div_euclid(TICKS_PER_UNIT),
        )
    }

    /// Number of whole cells inside the range.
    pub fn cells(&self) -> u64 {
        let (first, last) = self.cell_bounds();
        u64::try_from(last - first + 1).unwrap_or(0)
    }
}

impl Display for Interval {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let (first, last) = self.cell_bounds();
        write!(f, "{}..{}", first, last)
    }
}

#[cfg(test)]
fn iv(cells: RangeInclusive<i32>) -> Interval {
    Interval::padded(&cells).expect("test range should be valid")
}

#[test]
fn test_padded() {
    let i = iv(10..=12);
    assert_eq!((i.low(), i.high()), (39, 49));
    assert_eq!(i.cells(), 3);
    assert_eq!(i.cell_bounds(), (10, 12));
    assert_eq!(iv(-3..=-3).cells(), 1);
    assert_eq!(iv(-3..=-3).cell_bounds(), (-3, -3));
    #[allow(clippy::reversed_empty_ranges)]
    let inverted = Interval::padded(&(5..=4));
    assert_eq!(inverted, None);
}

#[test]
fn test_new_rejects_empty() {
    assert_eq!(Interval::new(3, 3), None);
    assert_eq!(Interval::new(4, 3), None);
    assert!(Interval::new(3, 4).is_some());
}

#[test]
fn test_below_above() {
    let whole = iv(0..=10);
    assert_eq!(whole.below(&iv(4..=6)), Some(iv(0..=3)));
    assert_eq!(whole.above(&iv(4..=6)), Some(iv(7..=10)));
    assert_eq!(whole.below(&iv(0..=6)), None);
    assert_eq!(whole.above(&iv(4..=10)), None);
    assert_eq!(whole.below(&iv(1..=1)), Some(iv(0..=0)));
}

#[test]
fn test_difference_pieces_stay_on_grid() {
    // Pieces cut from different neighbours must not overlap each other
    // when their cells are adjacent.
    let left = iv(0..=10).below(&iv(6..=20)).expect("non-empty");
    let right = iv(0..=10).above(&iv(-3..=5)).expect("non-empty");
    assert_eq!(left, iv(0..=5));
    assert_eq!(right, iv(6..=10));
    assert!(!left.intersects(&right));
    for piece in [left, right] {
        assert_eq!(piece.low().rem_euclid(TICKS_PER_UNIT), TICKS_PER_UNIT - MARGIN);
        assert_eq!(piece.high().rem_euclid(TICKS_PER_UNIT), MARGIN);
    }
}

#[test]
fn test_adjacent_cells_do_not_intersect() {
    assert!(!iv(0..=4).intersects(&iv(5..=9)));
    assert!(iv(0..=5).intersects(&iv(5..=9)));
    assert_eq!(iv(0..=5).intersection(&iv(5..=9)), Some(iv(5..=5)));
}

#[test]
fn test_intersection() {
    assert_eq!(iv(0..=10).intersection(&iv(3..=4)), Some(iv(3..=4)));
    assert_eq!(iv(3..=4).intersection(&iv(0..=10)), Some(iv(3..=4)));
    assert_eq!(iv(0..=10).intersection(&iv(8..=20)), Some(iv(8..=10)));
    assert_eq!(iv(0..=10).intersection(&iv(11..=20)), None);
    assert_eq!(iv(0..=10).intersection(&iv(-20..=-1)), None);
}

#[test]
fn test_difference() {
    let whole = iv(0..=10);
    assert_eq!(whole.difference(&iv(3..=4)), vec![iv(0..=2), iv(5..=10)]);
    assert_eq!(whole.difference(&iv(0..=4)), vec![iv(5..=10)]);
    assert_eq!(whole.difference(&iv(6..=10)), vec![iv(0..=5)]);
    assert!(whole.difference(&iv(-5..=15)).is_empty());
    // Disjoint ranges leave self alone.
    assert_eq!(whole.difference(&iv(20..=30)), vec![whole]);
    assert_eq!(whole.difference(&iv(-30..=-20)), vec![whole]);
}

#[test]
fn test_difference_partitions_cells() {
    let whole = iv(-7..=9);
    for cut in [iv(-9..=-7), iv(-2..=3), iv(9..=12), iv(-7..=9), iv(0..=0)] {
        let remainder: u64 = whole.difference(&cut).iter().map(Interval::cells).sum();
        let overlap = whole.intersection(&cut).map_or(0, |i| i.cells());
        assert_eq!(remainder + overlap, whole.cells(), "cut {}", cut);
    }
}

#[test]
fn test_contains() {
    assert!(iv(0..=10).contains(&iv(0..=10)));
    assert!(iv(0..=10).contains(&iv(2..=3)));
    assert!(!iv(0..=10).contains(&iv(2..=11)));
    assert!(!iv(2..=3).contains(&iv(0..=10)));
}

#[test]
fn test_display() {
    assert_eq!(iv(-4..=17).to_string(), "-4..17");
}
