//! Heatloss — least heat loss of a crucible pushed across a city of blocks.
//!
//! The input is a grid of digits, each the heat lost when the crucible
//! enters that block. Part one allows runs of at most three blocks; part two
//! uses ultra crucibles that need four to ten blocks per run.

pub mod config;
mod error;
pub mod solve;

use std::io::Write;

use heatloss_core::CostGrid;
use heatloss_paths::{SearchError, plain_cost};

pub use config::{Config, Input, Part, PartNumber};
pub use error::Error;
pub use solve::{PartReport, solve_part, solve_parts};

/// Parse `text`, solve the configured parts and write one line per part to
/// `out`.
///
/// Returns `Ok(false)` when some part found no path; that is an answer, not
/// an error.
pub fn run(config: &Config, text: &str, out: &mut impl Write) -> Result<bool, Error> {
    let grid = CostGrid::parse(text)?;
    log::info!("grid is {}x{}", grid.width(), grid.height());

    let reports = solve_parts(&grid, &config.parts(), config.stop());
    let mut all_reached = true;
    for report in &reports {
        match &report.answer {
            Ok(_) => {}
            Err(SearchError::Unreachable { .. }) => all_reached = false,
            Err(e) => return Err(Error::Search(e.clone())),
        }
        writeln!(out, "{report}").map_err(stdout_error)?;
    }

    if config.baseline {
        let written = match plain_cost(&grid, solve::ORIGIN, solve::target(&grid))? {
            Some(cost) => writeln!(out, "baseline: {cost}"),
            None => writeln!(out, "baseline: no path"),
        };
        written.map_err(stdout_error)?;
    }
    Ok(all_reached)
}

fn stdout_error(source: std::io::Error) -> Error {
    Error::Io {
        path: "<stdout>".to_string(),
        source,
    }
}
