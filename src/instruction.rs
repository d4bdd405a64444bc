//! Reboot steps and the parser for their text form, e.g.
//! `on x=-20..26,y=-36..17,z=-47..7`.

use core::ops::RangeInclusive;
use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

use nom::{
    branch::alt,
    bytes::complete::tag,
    character::complete::{char, digit1, space0},
    combinator::{map, map_res, opt, recognize, value},
    sequence::{delimited, preceded, separated_pair, terminated, tuple},
    IResult,
};

use crate::error::{Axis, ReactorError, Result};

/// A block of cells, inclusive on every axis.  A parsed `Range3D` may be
/// inverted; `validate` reports that.
#[derive(Debug, PartialEq, Eq, Clone, Hash)]
pub struct Range3D {
    pub x: RangeInclusive<i32>,
    pub y: RangeInclusive<i32>,
    pub z: RangeInclusive<i32>,
}

impl Range3D {
    pub fn new(x: RangeInclusive<i32>, y: RangeInclusive<i32>, z: RangeInclusive<i32>) -> Range3D {
        Range3D { x, y, z }
    }

    pub fn axes(&self) -> [(Axis, &RangeInclusive<i32>); 3] {
        [(Axis::X, &self.x), (Axis::Y, &self.y), (Axis::Z, &self.z)]
    }

    pub fn validate(&self) -> Result<()> {
        for (axis, r) in self.axes() {
            if r.start() > r.end() {
                return Err(ReactorError::InvertedRange {
                    axis,
                    min: *r.start(),
                    max: *r.end(),
                });
            }
        }
        Ok(())
    }

    /// True if every axis lies inside `-bound..=bound`.  Nothing lies
    /// within a negative bound.
    pub fn within(&self, bound: i32) -> bool {
        let bound = i64::from(bound);
        self.axes()
            .iter()
            .all(|(_, r)| i64::from(*r.start()) >= -bound && i64::from(*r.end()) <= bound)
    }
}

impl Display for Range3D {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "x={}..{},y={}..{},z={}..{}",
            self.x.start(),
            self.x.end(),
            self.y.start(),
            self.y.end(),
            self.z.start(),
            self.z.end()
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ToggleInstruction {
    pub on: bool,
    pub region: Range3D,
}

impl ToggleInstruction {
    pub fn on(region: Range3D) -> ToggleInstruction {
        ToggleInstruction { on: true, region }
    }

    pub fn off(region: Range3D) -> ToggleInstruction {
        ToggleInstruction { on: false, region }
    }
}

impl Display for ToggleInstruction {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", if self.on { "on" } else { "off" }, self.region)
    }
}

fn i32_parser(input: &str) -> IResult<&str, i32> {
    map_res(
        recognize(tuple((opt(char('-')), digit1))),
        FromStr::from_str,
    )(input)
}

fn parse_range(input: &str) -> IResult<&str, RangeInclusive<i32>> {
    map(
        separated_pair(i32_parser, tag(".."), i32_parser),
        |(lo, hi)| lo..=hi,
    )(input)
}

fn parse_ranges(input: &str) -> IResult<&str, Range3D> {
    map(
        tuple((
            delimited(tag("x="), parse_range, tag(",")),
            delimited(tag("y="), parse_range, tag(",")),
            preceded(tag("z="), parse_range),
        )),
        |(x, y, z)| Range3D { x, y, z },
    )(input)
}

fn parse_on_off(input: &str) -> IResult<&str, bool> {
    alt((value(true, tag("on")), value(false, tag("off"))))(input)
}

pub fn parse_instruction(input: &str) -> IResult<&str, ToggleInstruction> {
    map(
        separated_pair(parse_on_off, tag(" "), terminated(parse_ranges, space0)),
        |(on, region)| ToggleInstruction { on, region },
    )(input)
}

impl FromStr for ToggleInstruction {
    type Err = ReactorError;

    fn from_str(s: &str) -> Result<ToggleInstruction> {
        match parse_instruction(s) {
            Ok(("", instruction)) => Ok(instruction),
            Ok((tail, _)) => Err(ReactorError::Parse {
                line: None,
                reason: format!("unexpected trailing junk: '{}'", tail),
            }),
            Err(e) => Err(ReactorError::Parse {
                line: None,
                reason: format!("failed to parse '{}': {}", s, e),
            }),
        }
    }
}

/// Parse one instruction per line, in file order.  Blank lines are
/// ignored.
pub fn parse_instructions(text: &str) -> Result<Vec<ToggleInstruction>> {
    text.lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(n, line)| {
            line.trim_end()
                .parse::<ToggleInstruction>()
                .map_err(|e| match e {
                    ReactorError::Parse { reason, .. } => ReactorError::Parse {
                        line: Some(n + 1),
                        reason,
                    },
                    other => other,
                })
        })
        .collect()
}

#[test]
fn test_parse_instruction() {
    assert_eq!(
        parse_instruction("on x=-54112..-39298,y=-85059..-49293,z=-27449..7877"),
        Ok((
            "",
            ToggleInstruction::on(Range3D {
                x: -54112..=-39298,
                y: -85059..=-49293,
                z: -27449..=7877
            })
        ))
    );
    assert_eq!(
        "off x=9..11,y=9..11,z=9..11".parse::<ToggleInstruction>(),
        Ok(ToggleInstruction::off(Range3D::new(9..=11, 9..=11, 9..=11)))
    );
}

#[test]
fn test_parse_keeps_inverted_ranges() {
    #[allow(clippy::reversed_empty_ranges)]
    let expected = ToggleInstruction::on(Range3D::new(3..=1, 0..=0, 0..=0));
    assert_eq!("on x=3..1,y=0..0,z=0..0".parse::<ToggleInstruction>(), Ok(expected));
}

#[test]
fn test_parse_errors() {
    for bad in [
        "",
        "of x=1..2,y=1..2,z=1..2",
        "on x=1..2,y=1..2",
        "on x=1..2,y=1..2,z=1..q",
        "on x=1..2,y=1..2,z=1..2 junk",
        "on x=1..99999999999,y=1..2,z=1..2",
        "on  x=1..2,y=1..2,z=1..2",
    ] {
        assert!(
            matches!(
                bad.parse::<ToggleInstruction>(),
                Err(ReactorError::Parse { line: None, .. })
            ),
            "'{}' should not parse",
            bad
        );
    }
}

#[test]
fn test_parse_instructions() {
    let text = "on x=10..12,y=10..12,z=10..12\n\noff x=9..11,y=9..11,z=9..11\n";
    let parsed = parse_instructions(text).expect("valid input");
    assert_eq!(parsed.len(), 2);
    assert!(parsed[0].on);
    assert!(!parsed[1].on);

    let text = "on x=10..12,y=10..12,z=10..12\n\nflip x=9..11,y=9..11,z=9..11\n";
    match parse_instructions(text) {
        Err(ReactorError::Parse { line, .. }) => assert_eq!(line, Some(3)),
        other => panic!("expected a parse error, got {:?}", other),
    }
}

#[test]
fn test_display_round_trips() {
    let line = "off x=-5..47,y=-31..22,z=-19..33";
    let instruction: ToggleInstruction = line.parse().expect("valid");
    assert_eq!(instruction.to_string(), line);
}

#[test]
fn test_validate() {
    assert_eq!(Range3D::new(1..=1, 2..=5, -3..=3).validate(), Ok(()));
    #[allow(clippy::reversed_empty_ranges)]
    let inverted = Range3D::new(1..=1, 2..=5, 3..=-3);
    assert_eq!(
        inverted.validate(),
        Err(ReactorError::InvertedRange {
            axis: Axis::Z,
            min: 3,
            max: -3
        })
    );
}

#[test]
fn test_within() {
    let r = Range3D::new(-50..=50, 0..=0, 1..=10);
    assert!(r.within(50));
    assert!(!r.within(49));
    assert!(!r.within(-1));
    let huge = Range3D::new(i32::MIN..=i32::MAX, 0..=0, 0..=0);
    assert!(!huge.within(i32::MAX));
    assert!(!huge.within(i32::MIN));
    assert!(Range3D::new(-i32::MAX..=i32::MAX, 0..=0, 0..=0).within(i32::MAX));
}
