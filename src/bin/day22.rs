use std::fs;
use std::io;
use std::io::prelude::*;

use clap::Parser;
use tracing::{event, span, Level};
use tracing_subscriber::prelude::*;

use reactor::config::Config;
use reactor::{
    parse_instructions, CubeFlipper, DenseReactor, ReactorEngine, ReactorError, RegionFilter,
    ToggleInstruction,
};

fn run_part<'a, T, I>(part: i32, instructions: I, reactor: &mut T) -> Result<u64, ReactorError>
where
    T: CubeFlipper,
    I: IntoIterator<Item = &'a ToggleInstruction>,
{
    let span = span!(Level::INFO, "part", part = part);
    let _enter = span.enter();
    for instruction in instructions {
        reactor.obey(instruction)?;
    }
    reactor.count_cubes_on()
}

fn solve(instructions: &[ToggleInstruction], config: &Config) -> Result<(u64, u64), ReactorError> {
    let filter = RegionFilter::new(config.region_bound);
    let bounded = filter.apply(instructions);
    event!(
        Level::INFO,
        "{} of {} instructions lie within -{}..{}",
        bounded.len(),
        instructions.len(),
        filter.bound,
        filter.bound,
    );
    let part1 = run_part(1, bounded.iter().copied(), &mut ReactorEngine::new())?;
    if config.cross_check {
        let mut reference = DenseReactor::new(config.region_bound)?;
        let expected = run_part(1, bounded.iter().copied(), &mut reference)?;
        if expected != part1 {
            return Err(ReactorError::CrossCheck {
                cuboids: part1,
                dense: expected,
            });
        }
        event!(Level::INFO, "cross-check agrees: {} cubes", expected);
    }
    let part2 = run_part(2, instructions, &mut ReactorEngine::new())?;
    Ok((part1, part2))
}

fn read_input(config: &Config) -> Result<String, ReactorError> {
    match &config.input {
        Some(path) => fs::read_to_string(path)
            .map_err(|e| ReactorError::Io(format!("{}: {}", path.display(), e))),
        None => {
            let mut input = String::new();
            io::stdin().read_to_string(&mut input)?;
            Ok(input)
        }
    }
}

fn run(config: &Config) -> Result<(), ReactorError> {
    let instructions = parse_instructions(&read_input(config)?)?;
    for instruction in &instructions {
        event!(Level::DEBUG, "{}", instruction);
    }
    let (part1, part2) = solve(&instructions, config)?;
    println!("Day 22 part 1: {} cubes are on", part1);
    println!("Day 22 part 2: {} cubes are on", part2);
    Ok(())
}

fn main() {
    let config = Config::parse();

    let fmt_layer = tracing_subscriber::fmt::layer().with_target(true);
    let filter_layer = match tracing_subscriber::EnvFilter::try_from_default_env()
        .or_else(|_| tracing_subscriber::EnvFilter::try_new(config.log_filter.as_str()))
    {
        Err(e) => {
            eprintln!("{}", e);
            std::process::exit(1);
        }
        Ok(layer) => layer,
    };

    tracing_subscriber::registry()
        .with(filter_layer)
        .with(fmt_layer)
        .init();

    if let Err(e) = run(&config) {
        eprintln!("{}", e);
        std::process::exit(1);
    }
}

#[cfg(test)]
fn example() -> Vec<ToggleInstruction> {
    parse_instructions(
        "on x=10..12,y=10..12,z=10..12\n\
         on x=11..13,y=11..13,z=11..13\n\
         off x=9..11,y=9..11,z=9..11\n\
         on x=10..10,y=10..10,z=10..10\n\
         on x=-54112..-39298,y=-85059..-49293,z=-27449..7877\n",
    )
    .expect("example should parse")
}

#[test]
fn test_solve() {
    let config = Config {
        cross_check: true,
        ..Config::default()
    };
    let big: u64 = (54112 - 39298 + 1) * (85059 - 49293 + 1) * (27449 + 7877 + 1);
    assert_eq!(solve(&example(), &config), Ok((39, 39 + big)));
}

#[test]
fn test_solve_with_tight_bound() {
    let config = Config {
        region_bound: 11,
        cross_check: true,
        ..Config::default()
    };
    // Only the off step and the single cell fit inside -11..11.
    let (part1, _) = solve(&example(), &config).expect("valid input");
    assert_eq!(part1, 1);
}

#[test]
fn test_solve_rejects_inverted_range() {
    let instructions = parse_instructions("on x=1..0,y=0..0,z=0..0\n").expect("parses");
    assert!(matches!(
        solve(&instructions, &Config::default()),
        Err(ReactorError::InvertedRange { .. })
    ));
}

#[test]
fn test_cross_check_refuses_huge_bound() {
    let config = Config::try_parse_from(["day22", "--bound", "2000000", "--cross-check"])
        .expect("valid arguments");
    assert_eq!(
        solve(&example(), &config),
        Err(ReactorError::GridTooLarge {
            bound: 2000000,
            limit: reactor::dense::MAX_BOUND
        })
    );
}
