//! An immutable grid of entry costs.
//!
//! Every cell of a [`CostGrid`] holds the non-negative price paid for
//! *entering* it, whatever the direction of travel. Grids are usually parsed
//! from text where each character is one decimal digit:
//!
//! ```
//! use heatloss_core::{CostGrid, Point};
//!
//! let grid: CostGrid = "241\n321".parse().unwrap();
//! assert_eq!(grid.size(), Point::new(3, 2));
//! assert_eq!(grid.cost(Point::new(2, 1)), 1);
//! ```

use crate::geom::{Point, Range};
use std::fmt;
use std::str::FromStr;

/// A rectangular, immutable matrix of cell entry costs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CostGrid {
    cells: Vec<u32>,
    bounds: Range,
}

impl CostGrid {
    /// Create a grid from row-major `cells`.
    ///
    /// Both dimensions must be at least 1 and `cells` must hold exactly
    /// `width * height` values.
    pub fn new(width: i32, height: i32, cells: Vec<u32>) -> Result<Self, GridError> {
        if width <= 0 || height <= 0 {
            return Err(GridError::Empty);
        }
        let expected = width as usize * height as usize;
        if cells.len() != expected {
            return Err(GridError::SizeMismatch {
                expected,
                found: cells.len(),
            });
        }
        Ok(Self {
            cells,
            bounds: Range::new(0, 0, width, height),
        })
    }

    /// Parse a grid of decimal digits, one text line per row.
    ///
    /// Leading/trailing whitespace of the whole input is trimmed, and a
    /// `'\r'` ending a line is ignored. All rows must have the same width.
    pub fn parse(s: &str) -> Result<Self, GridError> {
        let s = s.trim();
        if s.is_empty() {
            return Err(GridError::Empty);
        }
        let mut cells = Vec::with_capacity(s.len());
        let mut width: Option<usize> = None;
        let mut height: usize = 0;

        for (y, line) in s.split('\n').enumerate() {
            let line = line.strip_suffix('\r').unwrap_or(line);
            let mut x: usize = 0;
            for ch in line.chars() {
                let Some(d) = ch.to_digit(10) else {
                    return Err(GridError::InvalidDigit {
                        ch,
                        pos: Point::new(x as i32, y as i32),
                    });
                };
                cells.push(d);
                x += 1;
            }
            match width {
                None => width = Some(x),
                Some(w) if w != x => {
                    return Err(GridError::Ragged {
                        row: y,
                        expected: w,
                        found: x,
                    });
                }
                Some(_) => {}
            }
            height += 1;
        }

        let width = width.unwrap_or(0);
        Self::new(width as i32, height as i32, cells)
    }

    /// Returns the bounding range of the grid, anchored at (0, 0).
    #[inline]
    pub fn bounds(&self) -> Range {
        self.bounds
    }

    /// Returns the size as a Point (width = x, height = y).
    #[inline]
    pub fn size(&self) -> Point {
        self.bounds.size()
    }

    /// Number of columns.
    #[inline]
    pub fn width(&self) -> i32 {
        self.bounds.width()
    }

    /// Number of rows.
    #[inline]
    pub fn height(&self) -> i32 {
        self.bounds.height()
    }

    /// Whether the grid contains the given point.
    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        self.bounds.contains(p)
    }

    /// Cost of entering the cell at `p`.
    ///
    /// # Panics
    ///
    /// Panics if `p` is outside the grid. Callers are expected to check
    /// [`contains`](Self::contains) first.
    #[inline]
    pub fn cost(&self, p: Point) -> u32 {
        match self.bounds.offset(p) {
            Some(i) => self.cells[i],
            None => panic!("cost grid: {p} is outside {}", self.bounds),
        }
    }

    /// Cost of entering the cell at `p`, or `None` if out of bounds.
    #[inline]
    pub fn get(&self, p: Point) -> Option<u32> {
        self.bounds.offset(p).map(|i| self.cells[i])
    }

    /// Iterate over `(Point, cost)` pairs in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (Point, u32)> + '_ {
        self.bounds.iter().zip(self.cells.iter().copied())
    }
}

impl FromStr for CostGrid {
    type Err = GridError;

    fn from_str(s: &str) -> Result<Self, GridError> {
        Self::parse(s)
    }
}

impl fmt::Display for CostGrid {
    /// Renders one line per row; costs above 9 are shown as `#`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let w = self.width() as usize;
        for (i, row) in self.cells.chunks(w).enumerate() {
            if i > 0 {
                f.write_str("\n")?;
            }
            for &c in row {
                let ch = char::from_digit(c, 10).unwrap_or('#');
                write!(f, "{ch}")?;
            }
        }
        Ok(())
    }
}

/// Errors that can occur when building or parsing a [`CostGrid`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    /// The input has no cells.
    Empty,
    /// A row's width differs from the first row's.
    Ragged {
        row: usize,
        expected: usize,
        found: usize,
    },
    /// A character that is not a decimal digit was found.
    InvalidDigit { ch: char, pos: Point },
    /// The cell buffer does not match the requested dimensions.
    SizeMismatch { expected: usize, found: usize },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "grid: no cells"),
            Self::Ragged {
                row,
                expected,
                found,
            } => write!(
                f,
                "grid: ragged rows, row {row} has {found} cells but {expected} were expected"
            ),
            Self::InvalidDigit { ch, pos } => write!(
                f,
                "grid contains invalid digit \u{201c}{}\u{201d} at {pos}",
                ch.escape_debug()
            ),
            Self::SizeMismatch { expected, found } => {
                write!(f, "grid: expected {expected} cells, got {found}")
            }
        }
    }
}

impl std::error::Error for GridError {}
