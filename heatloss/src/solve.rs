//! Running search parts and reporting their answers.

use std::fmt;
use std::time::Instant;

use heatloss_core::{CostGrid, Point};
use heatloss_paths::{SearchError, SearchStats, StateSearch, StopRule};

use crate::config::Part;

/// The crucible starts in the top-left block.
pub const ORIGIN: Point = Point::ZERO;

/// The destination: the bottom-right block.
pub fn target(grid: &CostGrid) -> Point {
    Point::new(grid.width() - 1, grid.height() - 1)
}

/// Outcome of one part.
#[derive(Debug, Clone)]
pub struct PartReport {
    pub part: Part,
    pub answer: Result<u32, SearchError>,
    pub stats: SearchStats,
}

impl PartReport {
    /// Whether the target was reached.
    pub fn reached(&self) -> bool {
        self.answer.is_ok()
    }
}

impl fmt::Display for PartReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.answer {
            Ok(cost) => write!(f, "{}: {cost}", self.part),
            Err(SearchError::Unreachable { .. }) => write!(f, "{}: no path", self.part),
            Err(e) => write!(f, "{}: {e}", self.part),
        }
    }
}

/// Search `grid` from the top-left to the bottom-right block under the
/// rules of `part`.
pub fn solve_part(grid: &CostGrid, part: Part, stop: StopRule) -> PartReport {
    let start = Instant::now();
    let mut search = StateSearch::new(grid.bounds(), part.rules());
    let answer = search
        .search(grid, ORIGIN)
        .and_then(|table| table.answer(target(grid), stop));
    let stats = search.table().stats();
    log::info!(
        "{part} ({}): {} states in {:.2?}",
        part.rules(),
        stats.settled,
        start.elapsed()
    );
    PartReport {
        part,
        answer,
        stats,
    }
}

/// Solve every part, each on its own thread.
///
/// The grid is shared read-only; reports come back in the order of `parts`.
pub fn solve_parts(grid: &CostGrid, parts: &[Part], stop: StopRule) -> Vec<PartReport> {
    std::thread::scope(|s| {
        let handles: Vec<_> = parts
            .iter()
            .map(|&part| s.spawn(move || solve_part(grid, part, stop)))
            .collect();
        handles
            .into_iter()
            .map(|h| h.join().unwrap_or_else(|e| std::panic::resume_unwind(e)))
            .collect()
    })
}
