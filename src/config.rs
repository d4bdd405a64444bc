//! Command-line settings for the `day22` driver.
//!
//! ```text
//! day22 [--bound N] [--cross-check] [--log FILTER] [INPUT]
//! ```
//!
//! Input is read from stdin when no file is named.  `RUST_LOG`, when set,
//! takes precedence over `--log`.

use std::path::PathBuf;

use clap::Parser;

use crate::region::DEFAULT_BOUND;

#[derive(Debug, Clone, PartialEq, Eq, Parser)]
#[command(name = "day22")]
#[command(about = "Reboot the reactor and count the cubes left on")]
pub struct Config {
    /// Instruction file (stdin when absent)
    pub input: Option<PathBuf>,

    /// Half-width of the initialization region used for part 1
    #[arg(long = "bound", default_value_t = DEFAULT_BOUND, value_parser = clap::value_parser!(i32).range(0..))]
    pub region_bound: i32,

    /// Verify part 1 against a cell-by-cell reactor
    #[arg(long)]
    pub cross_check: bool,

    /// Log filter used when RUST_LOG is not set
    #[arg(long = "log", default_value = "info")]
    pub log_filter: String,
}

impl Default for Config {
    fn default() -> Config {
        Config {
            input: None,
            region_bound: DEFAULT_BOUND,
            cross_check: false,
            log_filter: "info".to_string(),
        }
    }
}

#[test]
fn test_defaults() {
    assert_eq!(Config::try_parse_from(["day22"]).ok(), Some(Config::default()));
    assert_eq!(Config::default().region_bound, 50);
}

#[test]
fn test_all_options() {
    let config = Config::try_parse_from([
        "day22",
        "--bound",
        "5",
        "--cross-check",
        "input.txt",
        "--log",
        "debug",
    ])
    .expect("valid arguments");
    assert_eq!(
        config,
        Config {
            input: Some(PathBuf::from("input.txt")),
            region_bound: 5,
            cross_check: true,
            log_filter: "debug".to_string(),
        }
    );
}

#[test]
fn test_bad_arguments() {
    for bad in [
        vec!["day22", "--bound"],
        vec!["day22", "--bound", "-3"],
        vec!["day22", "--bound", "many"],
        vec!["day22", "--frobnicate"],
        vec!["day22", "a.txt", "b.txt"],
        vec!["day22", "--log"],
    ] {
        assert!(
            Config::try_parse_from(bad.iter().copied()).is_err(),
            "{:?} should be rejected",
            bad
        );
    }
}
