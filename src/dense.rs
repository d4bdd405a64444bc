//! A brute-force reactor which keeps one flag per cell.  It only works
//! for a small cube around the origin, but there it is obviously right,
//! so it serves as a cross-check for `ReactorEngine`.

use core::ops::{Range, RangeInclusive};

use ndarray::{s, Array3};

use crate::engine::CubeFlipper;
use crate::error::{ReactorError, Result};
use crate::instruction::{Range3D, ToggleInstruction};

/// The largest `bound` a dense reactor accepts: 201^3 cells.
pub const MAX_BOUND: i32 = 100;

#[derive(Debug, Clone)]
pub struct DenseReactor {
    bound: i32,
    on: Array3<bool>,
}

impl DenseReactor {
    /// A reactor covering `-bound..=bound` on every axis, all cells off.
    /// A negative bound gives a single cell at the origin.
    pub fn new(bound: i32) -> Result<DenseReactor> {
        if bound > MAX_BOUND {
            return Err(ReactorError::GridTooLarge {
                bound,
                limit: MAX_BOUND,
            });
        }
        let bound = bound.max(0);
        let side = usize::try_from(2 * bound + 1).map_err(|_| ReactorError::GridTooLarge {
            bound,
            limit: MAX_BOUND,
        })?;
        Ok(DenseReactor {
            bound,
            on: Array3::from_elem((side, side, side), false),
        })
    }

    pub fn bound(&self) -> i32 {
        self.bound
    }

    /// Translate `r` to array indices, clipped to the grid.  `None` means no
    /// part of `r` is inside it.
    fn clipped(&self, r: &RangeInclusive<i32>) -> Option<Range<usize>> {
        let lo = i64::from(*r.start()).max(-i64::from(self.bound));
        let hi = i64::from(*r.end()).min(i64::from(self.bound));
        if lo > hi {
            return None;
        }
        let offset = i64::from(self.bound);
        let start = usize::try_from(lo + offset).ok()?;
        let end = usize::try_from(hi + offset + 1).ok()?;
        Some(start..end)
    }

    fn check(&self, region: &Range3D) -> Result<()> {
        region.validate()?;
        for (axis, r) in region.axes() {
            if *r.start() < -self.bound || *r.end() > self.bound {
                return Err(ReactorError::OutOfGrid {
                    axis,
                    min: *r.start(),
                    max: *r.end(),
                    bound: self.bound,
                });
            }
        }
        Ok(())
    }

    pub fn run<'a, I>(&mut self, instructions: I) -> Result<()>
    where
        I: IntoIterator<Item = &'a ToggleInstruction>,
    {
        for instruction in instructions {
            self.obey(instruction)?;
        }
        Ok(())
    }

    /// How many cells of `region` are currently on.  Parts of the region
    /// outside the grid count as off.
    pub fn count_within(&self, region: &Range3D) -> u64 {
        match (
            self.clipped(&region.x),
            self.clipped(&region.y),
            self.clipped(&region.z),
        ) {
            (Some(x), Some(y), Some(z)) => self
                .on
                .slice(s![x, y, z])
                .iter()
                .filter(|lit| **lit)
                .count() as u64,
            _ => 0,
        }
    }
}

impl CubeFlipper for DenseReactor {
    fn obey(&mut self, instruction: &ToggleInstruction) -> Result<()> {
        self.check(&instruction.region)?;
        let region = &instruction.region;
        if let (Some(x), Some(y), Some(z)) = (
            self.clipped(&region.x),
            self.clipped(&region.y),
            self.clipped(&region.z),
        ) {
            self.on.slice_mut(s![x, y, z]).fill(instruction.on);
        }
        Ok(())
    }

    fn count_cubes_on(&self) -> Result<u64> {
        u64::try_from(self.on.iter().filter(|lit| **lit).count()).map_err(|_| ReactorError::Overflow)
    }
}

#[test]
fn test_worked_example() {
    let mut reactor = DenseReactor::new(15).expect("small grid");
    reactor
        .run(&crate::engine::worked_example())
        .expect("example fits in the grid");
    assert_eq!(reactor.count_cubes_on(), Ok(39));
    assert_eq!(reactor.count_within(&Range3D::new(10..=10, 10..=10, 10..=10)), 1);
    assert_eq!(reactor.count_within(&Range3D::new(9..=11, 9..=11, 9..=11)), 1);
    assert_eq!(reactor.count_within(&Range3D::new(-100..=100, -100..=100, 13..=100)), 9);
}

#[test]
fn test_rejects_out_of_grid() {
    let mut reactor = DenseReactor::new(5).expect("small grid");
    let wide: ToggleInstruction = "on x=-5..6,y=0..0,z=0..0".parse().expect("parses");
    assert_eq!(
        reactor.obey(&wide),
        Err(ReactorError::OutOfGrid {
            axis: crate::error::Axis::X,
            min: -5,
            max: 6,
            bound: 5
        })
    );
    assert_eq!(reactor.count_cubes_on(), Ok(0));
}

#[test]
fn test_edges_of_grid() {
    let mut reactor = DenseReactor::new(2).expect("small grid");
    assert_eq!(reactor.bound(), 2);
    reactor
        .obey(&"on x=-2..2,y=-2..-2,z=2..2".parse::<ToggleInstruction>().expect("parses"))
        .expect("fits");
    assert_eq!(reactor.count_cubes_on(), Ok(5));
    reactor
        .obey(&"off x=2..2,y=-2..2,z=-2..2".parse::<ToggleInstruction>().expect("parses"))
        .expect("fits");
    assert_eq!(reactor.count_cubes_on(), Ok(4));
}

#[test]
fn test_refuses_huge_grid() {
    assert_eq!(
        DenseReactor::new(2000000).err(),
        Some(ReactorError::GridTooLarge {
            bound: 2000000,
            limit: MAX_BOUND
        })
    );
    assert_eq!(
        DenseReactor::new(MAX_BOUND).map(|r| r.bound()),
        Ok(MAX_BOUND)
    );
    assert_eq!(DenseReactor::new(-7).map(|r| r.bound()), Ok(0));
}
