//! The reactor state: a set of pairwise disjoint cuboids whose union is
//! exactly the set of lit cells.

use tracing::{event, span, Level};

use crate::cuboid::Cuboid;
use crate::error::{ReactorError, Result};
use crate::instruction::ToggleInstruction;

/// Anything which can follow reboot steps and count lit cells.
pub trait CubeFlipper {
    fn obey(&mut self, instruction: &ToggleInstruction) -> Result<()>;
    fn count_cubes_on(&self) -> Result<u64>;
}

#[derive(Debug, Default, Clone)]
pub struct ReactorEngine {
    cuboids: Vec<Cuboid>,
}

impl ReactorEngine {
    pub fn new() -> ReactorEngine {
        ReactorEngine::default()
    }

    pub fn cuboids(&self) -> &[Cuboid] {
        &self.cuboids
    }

    pub fn len(&self) -> usize {
        self.cuboids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cuboids.is_empty()
    }

    /// Carry out one reboot step.  An instruction with an inverted range is
    /// rejected and the state is left untouched.
    pub fn apply(&mut self, instruction: &ToggleInstruction) -> Result<()> {
        let candidate = Cuboid::from_range(&instruction.region)?;
        let (intersecting, mut rest): (Vec<Cuboid>, Vec<Cuboid>) =
            std::mem::take(&mut self.cuboids)
                .into_iter()
                .partition(|c| c.intersects(&candidate));
        let untouched = rest.len();
        for c in &intersecting {
            rest.extend(c.difference(&candidate));
        }
        let fragments = rest.len() - untouched;
        if instruction.on {
            rest.push(candidate);
        }
        event!(
            Level::DEBUG,
            "{}: cut {} cuboids into {} fragments, {} cuboids now",
            instruction,
            intersecting.len(),
            fragments,
            rest.len(),
        );
        self.cuboids = rest;
        Ok(())
    }

    /// Apply each instruction in order, stopping at the first failure.
    pub fn run<'a, I>(&mut self, instructions: I) -> Result<()>
    where
        I: IntoIterator<Item = &'a ToggleInstruction>,
    {
        let span = span!(Level::INFO, "reboot");
        let _enter = span.enter();
        for (n, instruction) in instructions.into_iter().enumerate() {
            event!(Level::TRACE, "step {}: {}", n + 1, instruction);
            self.apply(instruction)?;
        }
        event!(Level::INFO, "reboot left {} cuboids", self.cuboids.len());
        Ok(())
    }

    /// The number of lit cells.
    pub fn total_volume(&self) -> Result<u64> {
        let total = self
            .cuboids
            .iter()
            .try_fold(0u128, |acc, c| acc.checked_add(c.puzzle_cubes()))
            .ok_or(ReactorError::Overflow)?;
        u64::try_from(total).map_err(|_| ReactorError::Overflow)
    }
}

impl CubeFlipper for ReactorEngine {
    fn obey(&mut self, instruction: &ToggleInstruction) -> Result<()> {
        self.apply(instruction)
    }

    fn count_cubes_on(&self) -> Result<u64> {
        self.total_volume()
    }
}

#[cfg(test)]
pub(crate) fn worked_example() -> Vec<ToggleInstruction> {
    crate::instruction::parse_instructions(
        "on x=10..12,y=10..12,z=10..12\n\
         on x=11..13,y=11..13,z=11..13\n\
         off x=9..11,y=9..11,z=9..11\n\
         on x=10..10,y=10..10,z=10..10\n",
    )
    .expect("example should parse")
}

#[test]
fn test_worked_example() {
    let mut engine = ReactorEngine::new();
    let expected = [27, 27 + 19, 27 + 19 - 8, 39];
    for (instruction, want) in worked_example().iter().zip(expected) {
        engine.apply(instruction).expect("valid instruction");
        assert_eq!(engine.total_volume(), Ok(want), "after {}", instruction);
    }
}

#[test]
fn test_off_on_empty_reactor() {
    let mut engine = ReactorEngine::new();
    engine
        .apply(&"off x=0..5,y=0..5,z=0..5".parse::<ToggleInstruction>().expect("valid"))
        .expect("valid instruction");
    assert!(engine.is_empty());
    assert_eq!(engine.total_volume(), Ok(0));
}

#[test]
fn test_disjoint_instructions_do_not_fragment() {
    let mut engine = ReactorEngine::new();
    engine
        .run(&crate::instruction::parse_instructions(
            "on x=0..4,y=0..4,z=0..4\non x=5..9,y=0..4,z=0..4\n",
        )
        .expect("valid"))
        .expect("valid instructions");
    assert_eq!(engine.len(), 2);
    assert_eq!(engine.total_volume(), Ok(250));
}

#[test]
fn test_inverted_range_leaves_state_alone() {
    let mut engine = ReactorEngine::new();
    engine.run(&worked_example()).expect("valid instructions");
    let before = engine.cuboids().to_vec();
    let bad: ToggleInstruction = "off x=12..9,y=9..11,z=9..11".parse().expect("parses");
    assert_eq!(
        engine.apply(&bad),
        Err(ReactorError::InvertedRange {
            axis: crate::error::Axis::X,
            min: 12,
            max: 9
        })
    );
    assert_eq!(engine.cuboids(), before.as_slice());
    assert_eq!(engine.total_volume(), Ok(39));
}

#[test]
fn test_run_stops_at_first_error() {
    let mut instructions = worked_example();
    instructions.insert(
        1,
        "on x=0..0,y=5..4,z=0..0".parse().expect("parses"),
    );
    let mut engine = ReactorEngine::new();
    assert!(matches!(
        engine.run(&instructions),
        Err(ReactorError::InvertedRange { .. })
    ));
    assert_eq!(engine.total_volume(), Ok(27));
}

#[test]
fn test_total_volume_overflow() {
    let mut engine = ReactorEngine::new();
    let everything: ToggleInstruction = format!(
        "on x={}..{},y={}..{},z=0..0",
        i32::MIN,
        i32::MAX,
        i32::MIN,
        i32::MAX
    )
    .parse()
    .expect("parses");
    engine.apply(&everything).expect("valid instruction");
    assert_eq!(engine.total_volume(), Err(ReactorError::Overflow));

    // Knocking out a single cell brings it back into range.
    engine
        .apply(&"off x=0..0,y=0..0,z=0..0".parse::<ToggleInstruction>().expect("parses"))
        .expect("valid instruction");
    assert_eq!(engine.total_volume(), Ok(u64::MAX));
}

#[test]
fn test_large_coordinates() {
    let mut engine = ReactorEngine::new();
    engine
        .run(&crate::instruction::parse_instructions(
            "on x=-100000..100000,y=-100000..100000,z=-100000..100000\n\
             off x=-99999..99999,y=-99999..99999,z=-99999..99999\n",
        )
        .expect("valid"))
        .expect("valid instructions");
    assert_eq!(
        engine.total_volume(),
        Ok(200001u64.pow(3) - 199999u64.pow(3))
    );
    assert_eq!(engine.len(), 6);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dense::DenseReactor;
    use crate::instruction::Range3D;
    use proptest::prelude::*;

    fn arb_range(bound: i32) -> impl Strategy<Value = core::ops::RangeInclusive<i32>> {
        (-bound..=bound, -bound..=bound).prop_map(|(a, b)| a.min(b)..=a.max(b))
    }

    fn arb_instruction(bound: i32) -> impl Strategy<Value = ToggleInstruction> {
        (
            any::<bool>(),
            arb_range(bound),
            arb_range(bound),
            arb_range(bound),
        )
            .prop_map(|(on, x, y, z)| ToggleInstruction {
                on,
                region: Range3D::new(x, y, z),
            })
    }

    fn arb_instructions() -> impl Strategy<Value = Vec<ToggleInstruction>> {
        proptest::collection::vec(arb_instruction(5), 0..=20)
    }

    proptest! {
        #[test]
        fn cuboids_stay_disjoint(instructions in arb_instructions()) {
            let mut engine = ReactorEngine::new();
            for instruction in &instructions {
                engine.apply(instruction).expect("valid instruction");
                let cuboids = engine.cuboids();
                for (i, a) in cuboids.iter().enumerate() {
                    for b in &cuboids[i + 1..] {
                        prop_assert!(!a.intersects(b), "{} overlaps {}", a, b);
                    }
                }
            }
        }

        #[test]
        fn switching_on_twice_is_idempotent(
            instructions in arb_instructions(),
            extra in arb_instruction(5),
        ) {
            let on = ToggleInstruction { on: true, ..extra };
            let mut engine = ReactorEngine::new();
            engine.run(&instructions).expect("valid instructions");
            engine.apply(&on).expect("valid instruction");
            let once = engine.total_volume();
            engine.apply(&on).expect("valid instruction");
            prop_assert_eq!(engine.total_volume(), once);
        }

        #[test]
        fn on_then_off_darkens_region(
            instructions in arb_instructions(),
            region in arb_instruction(5),
        ) {
            let mut engine = ReactorEngine::new();
            engine.run(&instructions).expect("valid instructions");
            let before = engine.total_volume().expect("small volume");
            engine.apply(&ToggleInstruction::on(region.region.clone())).expect("valid");
            let lit = engine.total_volume().expect("small volume");
            prop_assert!(lit >= before);
            engine.apply(&ToggleInstruction::off(region.region.clone())).expect("valid");
            let after = engine.total_volume().expect("small volume");
            // The region is now dark, so the cells lit beforehand inside it
            // are gone too.
            let mut reference = DenseReactor::new(5).expect("small grid");
            reference.run(&instructions).expect("within grid");
            let inside_before = reference.count_within(&region.region);
            prop_assert_eq!(after, before - inside_before);
        }

        #[test]
        fn matches_brute_force(instructions in arb_instructions()) {
            let mut engine = ReactorEngine::new();
            let mut reference = DenseReactor::new(5).expect("small grid");
            for instruction in &instructions {
                engine.obey(instruction).expect("valid instruction");
                reference.obey(instruction).expect("within grid");
                prop_assert_eq!(engine.count_cubes_on(), reference.count_cubes_on());
            }
        }
    }

    #[test]
    fn full_erase_of_fresh_region() {
        let mut engine = ReactorEngine::new();
        engine.run(&worked_example()).expect("valid instructions");
        let before = engine.total_volume().expect("small volume");
        let region = Range3D::new(-20..=-15, 3..=4, 100..=120);
        engine.apply(&ToggleInstruction::on(region.clone())).expect("valid");
        assert_eq!(engine.total_volume(), Ok(before + 6 * 2 * 21));
        engine.apply(&ToggleInstruction::off(region)).expect("valid");
        assert_eq!(engine.total_volume(), Ok(before));
    }
}
