//! Axis-aligned rectangles in the x/y plane.

use std::fmt::{self, Display, Formatter};

use crate::interval::Interval;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rectangle {
    x: Interval,
    y: Interval,
}

impl Rectangle {
    pub fn from_intervals(x: Interval, y: Interval) -> Rectangle {
        Rectangle { x, y }
    }

    pub fn x(&self) -> &Interval {
        &self.x
    }

    pub fn y(&self) -> &Interval {
        &self.y
    }

    pub fn left(&self) -> i64 {
        self.x.low()
    }

    pub fn right(&self) -> i64 {
        self.x.high()
    }

    pub fn bottom(&self) -> i64 {
        self.y.low()
    }

    pub fn top(&self) -> i64 {
        self.y.high()
    }

    /// Area in square ticks.  Always positive, since neither side can be
    /// empty.
    pub fn area(&self) -> u128 {
        u128::from(self.x.length().unsigned_abs()) * u128::from(self.y.length().unsigned_abs())
    }

    pub fn cells(&self) -> u128 {
        u128::from(self.x.cells()) * u128::from(self.y.cells())
    }

    pub fn intersects(&self, other: &Rectangle) -> bool {
        self.x.intersects(&other.x) && self.y.intersects(&other.y)
    }

    pub fn intersection(&self, other: &Rectangle) -> Option<Rectangle> {
        match (self.x.intersection(&other.x), self.y.intersection(&other.y)) {
            (Some(x), Some(y)) => Some(Rectangle { x, y }),
            _ => None,
        }
    }

    pub fn contains(&self, other: &Rectangle) -> bool {
        self.x.contains(&other.x) && self.y.contains(&other.y)
    }

    /// Split the part of `self` outside `other` into at most four
    /// disjoint pieces, in this order:
    ///
    /// ```text
    ///   +-----------------+
    ///   |       top       |
    ///   +----+-------+----+
    ///   |left| other | right
    ///   +----+-------+----+
    ///   |     bottom      |
    ///   +-----------------+
    /// ```
    ///
    /// The top and bottom strips take the full width, so the corners
    /// belong to them; left and right are confined to the band where
    /// `other` overlaps `self` vertically.
    pub fn difference(&self, other: &Rectangle) -> Vec<Rectangle> {
        let mut result = Vec::with_capacity(4);
        if let Some(y) = self.y.above(&other.y) {
            result.push(Rectangle { x: self.x, y });
        }
        if let Some(y) = self.y.below(&other.y) {
            result.push(Rectangle { x: self.x, y });
        }
        if let Some(band) = self.y.intersection(&other.y) {
            if let Some(x) = self.x.below(&other.x) {
                result.push(Rectangle { x, y: band });
            }
            if let Some(x) = self.x.above(&other.x) {
                result.push(Rectangle { x, y: band });
            }
        }
        result
    }
}

impl Display for Rectangle {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "x={},y={}", self.x, self.y)
    }
}

#[cfg(test)]
fn rect(x: core::ops::RangeInclusive<i32>, y: core::ops::RangeInclusive<i32>) -> Rectangle {
    Rectangle::from_intervals(
        Interval::padded(&x).expect("valid x"),
        Interval::padded(&y).expect("valid y"),
    )
}

#[test]
fn test_area_and_cells() {
    let r = rect(0..=2, 0..=0);
    assert_eq!(r.area(), 10 * 2);
    assert_eq!(r.cells(), 3);
    assert_eq!((r.left(), r.bottom(), r.right(), r.top()), (-1, -1, 9, 1));
}

#[test]
fn test_intersection() {
    let a = rect(0..=10, 0..=10);
    assert_eq!(a.intersection(&rect(5..=15, -5..=5)), Some(rect(5..=10, 0..=5)));
    assert_eq!(a.intersection(&rect(11..=15, 0..=10)), None);
    // Overlapping in x alone is not enough.
    assert_eq!(a.intersection(&rect(2..=3, 11..=12)), None);
    assert!(!a.intersects(&rect(2..=3, 11..=12)));
    assert!(a.intersects(&rect(10..=10, 10..=10)));
}

#[test]
fn test_contains() {
    let a = rect(0..=10, 0..=10);
    assert!(a.contains(&a));
    assert!(a.contains(&rect(3..=4, 9..=10)));
    assert!(!a.contains(&rect(3..=4, 9..=11)));
}

#[test]
fn test_difference_pinwheel() {
    let a = rect(0..=10, 0..=10);
    let hole = rect(4..=6, 3..=7);
    assert_eq!(
        a.difference(&hole),
        vec![
            rect(0..=10, 8..=10),
            rect(0..=10, 0..=2),
            rect(0..=3, 3..=7),
            rect(7..=10, 3..=7),
        ]
    );
}

#[test]
fn test_difference_at_edge() {
    let a = rect(0..=10, 0..=10);
    // Bites out the top-right corner: only a bottom strip and a left
    // piece remain.
    assert_eq!(
        a.difference(&rect(5..=20, 5..=20)),
        vec![rect(0..=10, 0..=4), rect(0..=4, 5..=10)]
    );
    assert!(a.difference(&rect(-1..=11, -1..=11)).is_empty());
    assert_eq!(a.difference(&rect(20..=30, 0..=10)), vec![a]);
}

#[test]
fn test_difference_partitions_cells() {
    let a = rect(-5..=5, -3..=8);
    let cuts = [
        rect(-2..=2, -1..=1),
        rect(-10..=0, -10..=0),
        rect(5..=5, 8..=8),
        rect(-5..=5, 0..=0),
        rect(-20..=20, 2..=3),
    ];
    for cut in cuts {
        let pieces = a.difference(&cut);
        for (i, p) in pieces.iter().enumerate() {
            assert!(a.contains(p));
            assert!(!p.intersects(&cut), "piece {} meets cut {}", p, cut);
            for q in &pieces[i + 1..] {
                assert!(!p.intersects(q), "pieces {} and {} overlap", p, q);
            }
        }
        let remainder: u128 = pieces.iter().map(Rectangle::cells).sum();
        let overlap = a.intersection(&cut).map_or(0, |r| r.cells());
        assert_eq!(remainder + overlap, a.cells(), "cut {}", cut);
    }
}
