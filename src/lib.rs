//! Reactor reboot (Advent of Code 2021, day 22).
//!
//! The lit cells of the reactor are kept as a set of disjoint cuboids.
//! Each reboot step cuts the cuboids it touches into the pieces lying
//! outside its own box, then adds that box if the step switches cells on.
//! Volumes are exact cell counts.

pub mod config;
pub mod cuboid;
pub mod dense;
pub mod engine;
pub mod error;
pub mod instruction;
pub mod interval;
pub mod rectangle;
pub mod region;

pub use cuboid::Cuboid;
pub use dense::DenseReactor;
pub use engine::{CubeFlipper, ReactorEngine};
pub use error::{ReactorError, Result};
pub use instruction::{parse_instructions, Range3D, ToggleInstruction};
pub use interval::Interval;
pub use rectangle::Rectangle;
pub use region::RegionFilter;
