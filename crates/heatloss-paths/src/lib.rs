//! Run-length constrained shortest paths over weighted grids.
//!
//! A mover crosses a grid of entry costs but may not reverse, must travel
//! at least `min_run` cells in a straight line before turning, and at most
//! `max_run` cells before it has to turn. Legal continuations depend on how
//! a cell was entered, so the search runs over augmented states
//! (position, last direction, run length) rather than bare cells:
//!
//! - **Move rules** ([`MoveRules`]) decide which directions a [`RunState`]
//!   may continue in.
//! - **State search** ([`StateSearch`]) runs Dijkstra over [`SearchState`]s
//!   and exposes the result as a [`CostTable`].
//! - **Plain baseline** ([`plain_costs`]) is ordinary cell Dijkstra, the
//!   unconstrained lower bound.
//!
//! All searches read the map through the [`EntryCost`] trait.

mod error;
mod moves;
mod plain;
mod rules;
mod search;
mod state;
mod traits;

pub use error::SearchError;
pub use moves::Moves;
pub use plain::{plain_cost, plain_costs};
pub use rules::{LegalDirections, MoveRules, StopRule};
pub use search::{CostTable, SearchStats, StateCost, StateSearch, shortest_costs};
pub use state::{RunState, SearchState};
pub use traits::EntryCost;
