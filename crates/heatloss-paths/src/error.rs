use std::fmt;

use heatloss_core::Point;

/// Errors reported by the constrained search and its answer extraction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchError {
    /// The run-length bounds admit no move (`max_run` of 0 or below
    /// `min_run`).
    InvalidRules { min_run: u32, max_run: Option<u32> },
    /// The origin is not a cell of the grid.
    OriginOutOfBounds(Point),
    /// The target is not a cell of the grid.
    TargetOutOfBounds(Point),
    /// The search finished without ever reaching the target.
    Unreachable { target: Point },
}

impl fmt::Display for SearchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidRules { min_run, max_run } => match max_run {
                Some(max) => write!(f, "invalid run bounds: min {min_run}, max {max}"),
                None => write!(f, "invalid run bounds: min {min_run}, max unbounded"),
            },
            Self::OriginOutOfBounds(p) => write!(f, "origin {p} is outside the grid"),
            Self::TargetOutOfBounds(p) => write!(f, "target {p} is outside the grid"),
            Self::Unreachable { target } => write!(f, "no path reaches {target}"),
        }
    }
}

impl std::error::Error for SearchError {}
