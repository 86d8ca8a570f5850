//! **heatloss-core** — grid geometry and weighted cost grids (core types).
//!
//! This crate provides the foundational types shared by the *heatloss*
//! crates: integer geometry primitives, the four cardinal [`Direction`]s, and
//! the immutable [`CostGrid`] whose cells carry the price of entering them.

pub mod geom;
pub mod grid;

pub use geom::{Direction, Point, Range};
pub use grid::{CostGrid, GridError};
