//! Restricting a reboot to the initialization region.

use crate::instruction::ToggleInstruction;

pub const DEFAULT_BOUND: i32 = 50;

/// Admits only the instructions lying wholly inside `-bound..=bound` on
/// every axis.  An instruction reaching outside is dropped, not cropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RegionFilter {
    pub bound: i32,
}

impl Default for RegionFilter {
    fn default() -> RegionFilter {
        RegionFilter {
            bound: DEFAULT_BOUND,
        }
    }
}

impl RegionFilter {
    pub fn new(bound: i32) -> RegionFilter {
        RegionFilter { bound }
    }

    pub fn admits(&self, instruction: &ToggleInstruction) -> bool {
        instruction.region.within(self.bound)
    }

    pub fn apply<'a>(&self, instructions: &'a [ToggleInstruction]) -> Vec<&'a ToggleInstruction> {
        instructions.iter().filter(|i| self.admits(i)).collect()
    }
}

#[test]
fn test_filter() {
    let instructions = crate::instruction::parse_instructions(
        "on x=-20..26,y=-36..17,z=-47..7\n\
         on x=-54112..-39298,y=-85059..-49293,z=-27449..7877\n\
         off x=-50..50,y=-50..50,z=-50..50\n\
         on x=-50..51,y=0..0,z=0..0\n",
    )
    .expect("valid");
    let filter = RegionFilter::default();
    assert!(filter.admits(&instructions[0]));
    assert!(!filter.admits(&instructions[1]));
    assert_eq!(
        filter.apply(&instructions),
        vec![&instructions[0], &instructions[2]]
    );
    assert_eq!(RegionFilter::new(60).apply(&instructions).len(), 3);
}

#[test]
fn test_extreme_bounds() {
    let instructions = crate::instruction::parse_instructions(
        "on x=0..0,y=0..0,z=0..0\n\
         on x=-2147483647..2147483647,y=0..0,z=0..0\n",
    )
    .expect("valid");
    assert!(RegionFilter::new(i32::MIN).apply(&instructions).is_empty());
    assert!(RegionFilter::new(-1).apply(&instructions).is_empty());
    assert_eq!(RegionFilter::new(i32::MAX).apply(&instructions).len(), 2);
}
