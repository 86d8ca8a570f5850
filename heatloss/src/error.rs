use std::fmt;
use std::io;

use heatloss_core::GridError;
use heatloss_paths::SearchError;

/// Everything that can stop the solver.
#[derive(Debug)]
pub enum Error {
    /// The input could not be read.
    Io { path: String, source: io::Error },
    /// The input is not a valid digit grid.
    Grid(GridError),
    /// The search rejected its parameters.
    Search(SearchError),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io { path, source } => write!(f, "cannot read {path}: {source}"),
            Self::Grid(e) => write!(f, "malformed input: {e}"),
            Self::Search(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Grid(e) => Some(e),
            Self::Search(e) => Some(e),
        }
    }
}

impl From<GridError> for Error {
    fn from(e: GridError) -> Self {
        Self::Grid(e)
    }
}

impl From<SearchError> for Error {
    fn from(e: SearchError) -> Self {
        Self::Search(e)
    }
}
