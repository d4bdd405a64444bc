//! Axis-aligned boxes: a base rectangle in the x/y plane extruded along
//! a depth interval on z.

use std::fmt::{self, Display, Formatter};

use crate::error::{ReactorError, Result};
use crate::instruction::Range3D;
use crate::interval::Interval;
use crate::rectangle::Rectangle;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Cuboid {
    base: Rectangle,
    depth: Interval,
}

impl Cuboid {
    pub fn from_base_and_depth(base: Rectangle, depth: Interval) -> Cuboid {
        Cuboid { base, depth }
    }

    /// The box covering exactly the cells of `range`.
    pub fn from_range(range: &Range3D) -> Result<Cuboid> {
        let [x, y, z] = range.axes().map(|(axis, r)| {
            Interval::padded(r).ok_or(ReactorError::InvertedRange {
                axis,
                min: *r.start(),
                max: *r.end(),
            })
        });
        Ok(Cuboid {
            base: Rectangle::from_intervals(x?, y?),
            depth: z?,
        })
    }

    pub fn base(&self) -> &Rectangle {
        &self.base
    }

    pub fn depth(&self) -> &Interval {
        &self.depth
    }

    pub fn intersection(&self, other: &Cuboid) -> (Option<Rectangle>, Option<Interval>) {
        (
            self.base.intersection(&other.base),
            self.depth.intersection(&other.depth),
        )
    }

    pub fn intersection_cuboid(&self, other: &Cuboid) -> Option<Cuboid> {
        match self.intersection(other) {
            (Some(base), Some(depth)) => Some(Cuboid { base, depth }),
            _ => None,
        }
    }

    pub fn intersects(&self, other: &Cuboid) -> bool {
        matches!(self.intersection(other), (Some(_), Some(_)))
    }

    pub fn contains(&self, other: &Cuboid) -> bool {
        self.base.contains(&other.base) && self.depth.contains(&other.depth)
    }

    /// Split the part of `self` outside `other` into at most six disjoint
    /// boxes.  The slabs above and below `other` (in z) keep the full
    /// base; what is left is the slab level with `other`, and that is cut
    /// in the plane by `Rectangle::difference`.
    pub fn difference(&self, other: &Cuboid) -> Vec<Cuboid> {
        let mut result: Vec<Cuboid> = self
            .depth
            .difference(&other.depth)
            .into_iter()
            .map(|depth| Cuboid::from_base_and_depth(self.base, depth))
            .collect();
        if let Some(middle) = self.depth.intersection(&other.depth) {
            result.extend(
                self.base
                    .difference(&other.base)
                    .into_iter()
                    .map(|base| Cuboid::from_base_and_depth(base, middle)),
            );
        }
        result
    }

    /// The number of whole cells inside this box.
    pub fn puzzle_cubes(&self) -> u128 {
        self.base.cells() * u128::from(self.depth.cells())
    }
}

impl Display for Cuboid {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{},z={}", self.base, self.depth)
    }
}

#[cfg(test)]
use core::ops::RangeInclusive;

#[cfg(test)]
fn cuboid(x: RangeInclusive<i32>, y: RangeInclusive<i32>, z: RangeInclusive<i32>) -> Cuboid {
    Cuboid::from_range(&Range3D::new(x, y, z)).expect("valid range")
}

#[test]
fn test_from_range() {
    let c = cuboid(10..=12, 10..=12, 10..=12);
    assert_eq!(c.puzzle_cubes(), 27);
    assert_eq!(c.to_string(), "x=10..12,y=10..12,z=10..12");
    #[allow(clippy::reversed_empty_ranges)]
    let inverted = Range3D::new(0..=0, 1..=0, 0..=0);
    assert_eq!(
        Cuboid::from_range(&inverted),
        Err(ReactorError::InvertedRange {
            axis: crate::error::Axis::Y,
            min: 1,
            max: 0
        })
    );
}

#[test]
fn test_puzzle_cubes_large() {
    let c = cuboid(-100000..=100000, -100000..=100000, -100000..=100000);
    assert_eq!(c.puzzle_cubes(), 200001u128.pow(3));
    let c = cuboid(i32::MIN..=i32::MAX, i32::MIN..=i32::MAX, i32::MIN..=i32::MAX);
    assert_eq!(c.puzzle_cubes(), 1u128 << 96);
}

#[test]
fn test_intersects() {
    let c = cuboid(10..=12, 10..=12, 10..=12);
    assert!(c.intersects(&cuboid(12..=20, 12..=20, 12..=20)));
    assert!(!c.intersects(&cuboid(13..=20, 10..=12, 10..=12)));
    // Touching faces share no cell.
    assert!(!c.intersects(&cuboid(10..=12, 10..=12, 13..=13)));
    // Base overlap without depth overlap.
    assert_eq!(
        c.intersection(&cuboid(10..=12, 10..=12, 0..=5)),
        (Some(*c.base()), None)
    );
    assert_eq!(
        c.intersection_cuboid(&cuboid(11..=13, 0..=11, 12..=12)),
        Some(cuboid(11..=12, 10..=11, 12..=12))
    );
}

#[test]
fn test_contains() {
    let c = cuboid(0..=9, 0..=9, 0..=9);
    assert!(c.contains(&cuboid(0..=9, 3..=3, 5..=9)));
    assert!(!c.contains(&cuboid(0..=9, 3..=3, 5..=10)));
}

#[test]
fn test_difference_of_centre() {
    let c = cuboid(0..=2, 0..=2, 0..=2);
    let pieces = c.difference(&cuboid(1..=1, 1..=1, 1..=1));
    assert_eq!(
        pieces,
        vec![
            cuboid(0..=2, 0..=2, 0..=0),
            cuboid(0..=2, 0..=2, 2..=2),
            cuboid(0..=2, 2..=2, 1..=1),
            cuboid(0..=2, 0..=0, 1..=1),
            cuboid(0..=0, 1..=1, 1..=1),
            cuboid(2..=2, 1..=1, 1..=1),
        ]
    );
    assert_eq!(pieces.iter().map(Cuboid::puzzle_cubes).sum::<u128>(), 26);
}

#[test]
fn test_difference_without_overlap() {
    let c = cuboid(0..=2, 0..=2, 0..=2);
    assert_eq!(c.difference(&cuboid(5..=6, 0..=2, 0..=2)), vec![c]);
    assert_eq!(c.difference(&cuboid(0..=2, 0..=2, 3..=6)), vec![c]);
    assert!(c.difference(&cuboid(-1..=3, -1..=3, 0..=2)).is_empty());
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn arb_range() -> impl Strategy<Value = RangeInclusive<i32>> {
        (-6i32..6, 0i32..6).prop_map(|(lo, len)| lo..=(lo + len))
    }

    fn arb_cuboid() -> impl Strategy<Value = Cuboid> {
        (arb_range(), arb_range(), arb_range()).prop_map(|(x, y, z)| cuboid(x, y, z))
    }

    proptest! {
        #[test]
        fn difference_partitions_self(c in arb_cuboid(), other in arb_cuboid()) {
            let pieces = c.difference(&other);
            prop_assert!(pieces.len() <= 6);
            for (i, p) in pieces.iter().enumerate() {
                prop_assert!(c.contains(p));
                prop_assert!(!p.intersects(&other));
                for q in &pieces[i + 1..] {
                    prop_assert!(!p.intersects(q), "{} overlaps {}", p, q);
                }
            }
            let remainder: u128 = pieces.iter().map(Cuboid::puzzle_cubes).sum();
            let overlap = c.intersection_cuboid(&other).map_or(0, |i| i.puzzle_cubes());
            prop_assert_eq!(remainder + overlap, c.puzzle_cubes());
        }

        #[test]
        fn intersection_is_symmetric(a in arb_cuboid(), b in arb_cuboid()) {
            prop_assert_eq!(a.intersects(&b), b.intersects(&a));
            prop_assert_eq!(a.intersection_cuboid(&b), b.intersection_cuboid(&a));
        }
    }
}
