//! Errors surfaced by the reactor, its parser and its driver.

use std::error::Error;
use std::fmt;

/// Which coordinate axis an error refers to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
    Z,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Axis::X => "x",
            Axis::Y => "y",
            Axis::Z => "z",
        };
        f.write_str(name)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ReactorError {
    /// An input line is not a well-formed instruction.
    Parse {
        /// 1-based line number, when the text came from a file.
        line: Option<usize>,
        reason: String,
    },
    /// An instruction has `min > max` on some axis. The instruction is
    /// rejected before any state changes.
    InvertedRange { axis: Axis, min: i32, max: i32 },
    /// An instruction reaches outside the grid of a dense reactor.
    OutOfGrid { axis: Axis, min: i32, max: i32, bound: i32 },
    /// The lit volume does not fit in the 64-bit counter.
    Overflow,
    /// The cuboid reactor and the dense reference disagree.
    CrossCheck { cuboids: u64, dense: u64 },
    /// A dense reactor was asked for a grid it refuses to allocate.
    GridTooLarge { bound: i32, limit: i32 },
    Io(String),
}

impl fmt::Display for ReactorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Parse {
                line: Some(n),
                reason,
            } => write!(f, "line {n}: {reason}"),
            Self::Parse { line: None, reason } => write!(f, "{reason}"),
            Self::InvertedRange { axis, min, max } => {
                write!(f, "inverted {axis} range {min}..{max}")
            }
            Self::OutOfGrid {
                axis,
                min,
                max,
                bound,
            } => write!(
                f,
                "{axis} range {min}..{max} lies outside the grid -{bound}..{bound}"
            ),
            Self::Overflow => write!(f, "lit cube count does not fit in 64 bits"),
            Self::CrossCheck { cuboids, dense } => write!(
                f,
                "cross-check failed: cuboids give {cuboids} but the dense grid gives {dense}"
            ),
            Self::Io(msg) => write!(f, "I/O error: {msg}"),
            Self::GridTooLarge { bound, limit } => write!(
                f,
                "a dense grid of -{bound}..{bound} is too large (the limit is {limit})"
            ),
        }
    }
}

impl Error for ReactorError {}

impl From<std::io::Error> for ReactorError {
    fn from(e: std::io::Error) -> ReactorError {
        ReactorError::Io(e.to_string())
    }
}

pub type Result<T> = std::result::Result<T, ReactorError>;

#[test]
fn test_display() {
    assert_eq!(
        ReactorError::InvertedRange {
            axis: Axis::Y,
            min: 4,
            max: -2
        }
        .to_string(),
        "inverted y range 4..-2"
    );
    assert_eq!(
        ReactorError::Parse {
            line: Some(3),
            reason: "expected 'on' or 'off'".to_string()
        }
        .to_string(),
        "line 3: expected 'on' or 'off'"
    );
}
