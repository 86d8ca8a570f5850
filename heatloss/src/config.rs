//! Command-line configuration.

use std::convert::Infallible;
use std::fmt;
use std::io::Read;
use std::path::PathBuf;

use clap::{ArgAction, Parser, ValueEnum};
use heatloss_paths::{MoveRules, StopRule};
use tracing_subscriber::EnvFilter;

use crate::error::Error;

/// Environment variable holding the default log filter.
pub const LOG_ENV: &str = "HEATLOSS_LOG";

// Levels `-v`/`-q` step through, starting from warn.
const LEVELS: [&str; 6] = ["off", "error", "warn", "info", "debug", "trace"];
const DEFAULT_LEVEL: usize = 2;

/// One parameterization of the search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Part {
    /// Ordinary crucible: runs of at most three blocks.
    One,
    /// Ultra crucible: runs of four to ten blocks.
    Two,
    /// User-supplied bounds.
    Custom(MoveRules),
}

impl Part {
    /// The movement rules of this part.
    pub fn rules(self) -> MoveRules {
        match self {
            Self::One => MoveRules::CRUCIBLE,
            Self::Two => MoveRules::ULTRA_CRUCIBLE,
            Self::Custom(r) => r,
        }
    }
}

impl fmt::Display for Part {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::One => f.write_str("part 1"),
            Self::Two => f.write_str("part 2"),
            Self::Custom(_) => f.write_str("custom"),
        }
    }
}

/// Value of `--part`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum PartNumber {
    #[value(name = "1")]
    One,
    #[value(name = "2")]
    Two,
}

/// Where the grid text comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    Stdin,
    Path(PathBuf),
}

impl Input {
    /// Read the whole input into a string.
    pub fn read(&self) -> Result<String, Error> {
        match self {
            Self::Stdin => {
                let mut s = String::new();
                std::io::stdin()
                    .read_to_string(&mut s)
                    .map_err(|source| Error::Io {
                        path: "<stdin>".to_string(),
                        source,
                    })?;
                Ok(s)
            }
            Self::Path(p) => std::fs::read_to_string(p).map_err(|source| Error::Io {
                path: p.display().to_string(),
                source,
            }),
        }
    }
}

/// Minimum total heat loss from the top-left to the bottom-right block of a
/// digit grid.
#[derive(Debug, Clone, Parser)]
#[command(name = "heatloss", version)]
pub struct Config {
    /// Grid file, or - for stdin.
    #[arg(value_name = "INPUT", value_parser = parse_input)]
    pub input: Input,

    /// Run only one part (default: both).
    #[arg(short, long, value_enum, conflicts_with = "rules")]
    pub part: Option<PartNumber>,

    /// Run a single custom parameterization; MAX may be `inf`.
    #[arg(long, value_name = "MIN,MAX", value_parser = parse_rules)]
    pub rules: Option<MoveRules>,

    /// Only stop once the current run reaches MIN.
    #[arg(long)]
    pub settled: bool,

    /// Also report the unconstrained lower bound.
    #[arg(long)]
    pub baseline: bool,

    /// More logging (repeatable).
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,

    /// Less logging (repeatable).
    #[arg(short, long, action = ArgAction::Count)]
    pub quiet: u8,

    /// Log filter, a level or `target=level` directives. `-v`/`-q` override it.
    #[arg(long, env = LOG_ENV, value_name = "FILTER", value_parser = parse_filter)]
    pub log: Option<String>,
}

impl Config {
    /// The parts to solve, in output order.
    pub fn parts(&self) -> Vec<Part> {
        match (self.rules, self.part) {
            (Some(rules), _) => vec![Part::Custom(rules)],
            (None, Some(PartNumber::One)) => vec![Part::One],
            (None, Some(PartNumber::Two)) => vec![Part::Two],
            (None, None) => vec![Part::One, Part::Two],
        }
    }

    /// Where a search may end.
    pub fn stop(&self) -> StopRule {
        if self.settled {
            StopRule::Settled
        } else {
            StopRule::Anywhere
        }
    }

    /// Filter directives for the log subscriber.
    pub fn log_directives(&self) -> String {
        if self.verbose == 0 && self.quiet == 0 {
            if let Some(filter) = &self.log {
                return filter.clone();
            }
        }
        let level = (DEFAULT_LEVEL + self.verbose as usize)
            .saturating_sub(self.quiet as usize)
            .min(LEVELS.len() - 1);
        LEVELS[level].to_string()
    }
}

fn parse_input(s: &str) -> Result<Input, Infallible> {
    Ok(match s {
        "-" => Input::Stdin,
        path => Input::Path(PathBuf::from(path)),
    })
}

/// Parse `MIN,MAX` where MAX may be `inf`.
fn parse_rules(s: &str) -> Result<MoveRules, String> {
    let bad = || format!("expected MIN,MAX, got {s:?}");
    let (min, max) = s.split_once(',').ok_or_else(bad)?;
    let min: u32 = min.trim().parse().map_err(|_| bad())?;
    let max = match max.trim() {
        "inf" => None,
        m => Some(m.parse::<u32>().map_err(|_| bad())?),
    };
    MoveRules::new(min, max).map_err(|e| e.to_string())
}

fn parse_filter(s: &str) -> Result<String, String> {
    let s = s.trim();
    EnvFilter::builder()
        .parse(s)
        .map(|_| s.to_string())
        .map_err(|e| e.to_string())
}
