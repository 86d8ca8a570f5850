use std::fmt;

use heatloss_core::{Direction, Point, Range};

use crate::rules::MoveRules;

/// How the current cell was entered: the last direction moved and how many
/// consecutive steps were taken in it.
///
/// `last` is `None` only for the start state, whose `len` is 0.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RunState {
    pub last: Option<Direction>,
    pub len: u32,
}

impl RunState {
    /// The run of a state that has not moved yet.
    pub const START: Self = Self { last: None, len: 0 };

    /// A run of `len` steps towards `dir`.
    #[inline]
    pub const fn new(dir: Direction, len: u32) -> Self {
        Self {
            last: Some(dir),
            len,
        }
    }
}

impl fmt::Display for RunState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.last {
            Some(d) => write!(f, "{d}x{}", self.len),
            None => f.write_str("start"),
        }
    }
}

/// A node of the augmented search graph: a position plus the run that
/// reached it.
///
/// Two states on the same cell with different runs are distinct, since
/// their legal continuations differ.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchState {
    pub pos: Point,
    pub run: RunState,
}

impl SearchState {
    /// Create a new state.
    #[inline]
    pub const fn new(pos: Point, run: RunState) -> Self {
        Self { pos, run }
    }

    /// The start state at `pos`.
    #[inline]
    pub const fn origin(pos: Point) -> Self {
        Self {
            pos,
            run: RunState::START,
        }
    }
}

impl fmt::Display for SearchState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.pos, self.run)
    }
}

// ---------------------------------------------------------------------------
// Dense indexing of the state space
// ---------------------------------------------------------------------------

// Four directions plus the "not moved yet" slot.
const SLOTS: usize = 5;
const START_SLOT: usize = 4;

/// Bijection between the states of a rectangle and `0..len()`.
///
/// Layout is `((cell * SLOTS) + slot) * (cap + 1) + run`, so all states of
/// one cell are contiguous.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) struct StateSpace {
    pub(crate) bounds: Range,
    pub(crate) cap: u32,
}

impl StateSpace {
    pub(crate) fn new(bounds: Range, cap: u32) -> Self {
        Self { bounds, cap }
    }

    /// The space for searching `bounds` under `rules`.
    ///
    /// A straight run inside `bounds` is shorter than its longest side, so
    /// the run axis never needs to be longer than that.
    pub(crate) fn for_rules(bounds: Range, rules: &MoveRules) -> Self {
        let side = bounds.width().max(bounds.height()).max(0) as u32;
        Self::new(bounds, rules.run_cap().min(side))
    }

    #[inline]
    fn runs(&self) -> usize {
        self.cap as usize + 1
    }

    /// Number of distinct states.
    #[inline]
    pub(crate) fn len(&self) -> usize {
        self.bounds.len() * SLOTS * self.runs()
    }

    /// Flat index of `s`, or `None` if it is outside the space.
    #[inline]
    pub(crate) fn index(&self, s: SearchState) -> Option<usize> {
        let cell = self.bounds.offset(s.pos)?;
        if s.run.len > self.cap {
            return None;
        }
        let slot = s.run.last.map_or(START_SLOT, Direction::index);
        Some((cell * SLOTS + slot) * self.runs() + s.run.len as usize)
    }

    /// Inverse of [`index`](Self::index).
    #[inline]
    pub(crate) fn state(&self, idx: usize) -> SearchState {
        let len = (idx % self.runs()) as u32;
        let rest = idx / self.runs();
        let last = Direction::from_index(rest % SLOTS);
        let pos = self.bounds.point_at(rest / SLOTS);
        SearchState::new(pos, RunState { last, len })
    }

    /// Indices of every state located on `p` (empty outside the space).
    pub(crate) fn indices_at(&self, p: Point) -> std::ops::Range<usize> {
        let per_cell = SLOTS * self.runs();
        match self.bounds.offset(p) {
            Some(cell) => cell * per_cell..(cell + 1) * per_cell,
            None => 0..0,
        }
    }
}
