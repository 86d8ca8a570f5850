//! Run-length movement rules.
//!
//! A mover may never reverse, must keep going straight until its current run
//! reaches `min_run` steps, and must turn once the run reaches `max_run`.

use std::fmt;

use heatloss_core::Direction;

use crate::error::SearchError;
use crate::state::RunState;

/// Run-length bounds for one search.
///
/// Fields are private so that every value has passed [`MoveRules::new`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RulesRepr", into = "RulesRepr"))]
pub struct MoveRules {
    min_run: u32,
    max_run: Option<u32>,
}

impl MoveRules {
    /// At most three steps in a row, turning allowed at any time.
    pub const CRUCIBLE: Self = Self {
        min_run: 0,
        max_run: Some(3),
    };

    /// At least four and at most ten steps in a row.
    pub const ULTRA_CRUCIBLE: Self = Self {
        min_run: 4,
        max_run: Some(10),
    };

    /// Create rules from run-length bounds. `None` means no upper bound.
    pub fn new(min_run: u32, max_run: Option<u32>) -> Result<Self, SearchError> {
        if let Some(max) = max_run {
            if max == 0 || max < min_run {
                return Err(SearchError::InvalidRules { min_run, max_run });
            }
        }
        Ok(Self { min_run, max_run })
    }

    /// No run-length restriction at all; only reversal stays forbidden.
    pub const fn unbounded() -> Self {
        Self {
            min_run: 0,
            max_run: None,
        }
    }

    /// Minimum number of straight steps before a turn.
    #[inline]
    pub const fn min_run(&self) -> u32 {
        self.min_run
    }

    /// Maximum number of straight steps, if bounded.
    #[inline]
    pub const fn max_run(&self) -> Option<u32> {
        self.max_run
    }

    /// Largest run length a state can carry.
    ///
    /// Without an upper bound, runs at or past `min_run` allow the same
    /// continuations, so they saturate there.
    #[inline]
    pub fn run_cap(&self) -> u32 {
        self.max_run.unwrap_or(self.min_run.max(1))
    }

    /// Whether a state entered with `run` may move towards `dir` next.
    pub fn allows(&self, run: RunState, dir: Direction) -> bool {
        let Some(last) = run.last else {
            return true;
        };
        if run.len < self.min_run {
            return dir == last;
        }
        if dir == last.opposite() {
            return false;
        }
        match self.max_run {
            Some(max) => dir != last || run.len < max,
            None => true,
        }
    }

    /// The directions legal after `run`, in [`Direction::ALL`] order.
    #[inline]
    pub fn legal_directions(&self, run: RunState) -> LegalDirections {
        LegalDirections {
            rules: *self,
            run,
            next: 0,
        }
    }

    /// The run after moving towards `dir`.
    #[inline]
    pub fn advance(&self, run: RunState, dir: Direction) -> RunState {
        let len = if run.last == Some(dir) {
            (run.len + 1).min(self.run_cap())
        } else {
            1
        };
        RunState::new(dir, len)
    }

    /// Whether a mover that arrived with `run` may stop there.
    #[inline]
    pub fn can_stop(&self, run: RunState) -> bool {
        run.last.is_none() || run.len >= self.min_run
    }
}

impl Default for MoveRules {
    fn default() -> Self {
        Self::CRUCIBLE
    }
}

impl fmt::Display for MoveRules {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.max_run {
            Some(max) => write!(f, "runs {}..={max}", self.min_run),
            None => write!(f, "runs {}..", self.min_run),
        }
    }
}

/// Lazy iterator over the directions a [`RunState`] may continue in.
#[derive(Clone, Debug)]
pub struct LegalDirections {
    rules: MoveRules,
    run: RunState,
    next: usize,
}

impl Iterator for LegalDirections {
    type Item = Direction;

    fn next(&mut self) -> Option<Direction> {
        while let Some(&d) = Direction::ALL.get(self.next) {
            self.next += 1;
            if self.rules.allows(self.run, d) {
                return Some(d);
            }
        }
        None
    }
}

/// Which terminal states count when reading an answer off a cost table.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum StopRule {
    /// Any state on the target cell, whatever its run.
    #[default]
    Anywhere,
    /// Only states whose run already satisfies the minimum
    /// (see [`MoveRules::can_stop`]).
    Settled,
}

#[cfg(feature = "serde")]
#[derive(serde::Serialize, serde::Deserialize)]
struct RulesRepr {
    min_run: u32,
    max_run: Option<u32>,
}

#[cfg(feature = "serde")]
impl From<MoveRules> for RulesRepr {
    fn from(r: MoveRules) -> Self {
        Self {
            min_run: r.min_run,
            max_run: r.max_run,
        }
    }
}

#[cfg(feature = "serde")]
impl TryFrom<RulesRepr> for MoveRules {
    type Error = SearchError;

    fn try_from(r: RulesRepr) -> Result<Self, SearchError> {
        MoveRules::new(r.min_run, r.max_run)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use Direction::*;

    fn legal(rules: MoveRules, run: RunState) -> Vec<Direction> {
        rules.legal_directions(run).collect()
    }

    #[test]
    fn start_allows_every_direction() {
        for rules in [MoveRules::CRUCIBLE, MoveRules::ULTRA_CRUCIBLE] {
            assert_eq!(legal(rules, RunState::START), Direction::ALL.to_vec());
        }
    }

    #[test]
    fn short_run_must_continue() {
        let rules = MoveRules::ULTRA_CRUCIBLE;
        for len in 1..4 {
            assert_eq!(legal(rules, RunState::new(Right, len)), vec![Right]);
        }
        assert_eq!(legal(rules, RunState::new(Right, 4)), vec![Up, Right, Down]);
    }

    #[test]
    fn never_reverses() {
        for rules in [MoveRules::CRUCIBLE, MoveRules::ULTRA_CRUCIBLE, MoveRules::unbounded()] {
            for d in Direction::ALL {
                for len in rules.min_run().max(1)..=rules.run_cap() {
                    let run = RunState::new(d, len);
                    assert!(!rules.allows(run, d.opposite()), "{rules} {run}");
                }
            }
        }
    }

    #[test]
    fn max_run_forces_turn() {
        let rules = MoveRules::CRUCIBLE;
        assert_eq!(legal(rules, RunState::new(Down, 2)), vec![Right, Down, Left]);
        assert_eq!(legal(rules, RunState::new(Down, 3)), vec![Right, Left]);
        let ultra = MoveRules::ULTRA_CRUCIBLE;
        assert_eq!(legal(ultra, RunState::new(Up, 10)), vec![Right, Left]);
    }

    #[test]
    fn min_run_of_zero_or_one_is_a_no_op() {
        let zero = MoveRules::new(0, Some(3)).unwrap();
        let one = MoveRules::new(1, Some(3)).unwrap();
        let run = RunState::new(Left, 1);
        assert_eq!(legal(zero, run), vec![Up, Down, Left]);
        assert_eq!(legal(zero, run), legal(one, run));
    }

    #[test]
    fn advance_counts_runs() {
        let rules = MoveRules::ULTRA_CRUCIBLE;
        let first = rules.advance(RunState::START, Down);
        assert_eq!(first, RunState::new(Down, 1));
        let second = rules.advance(first, Down);
        assert_eq!(second, RunState::new(Down, 2));
        assert_eq!(rules.advance(second, Left), RunState::new(Left, 1));
    }

    #[test]
    fn unbounded_runs_saturate() {
        let rules = MoveRules::new(2, None).unwrap();
        assert_eq!(rules.run_cap(), 2);
        let mut run = RunState::START;
        for _ in 0..5 {
            run = rules.advance(run, Right);
        }
        assert_eq!(run, RunState::new(Right, 2));
        assert_eq!(legal(rules, run), vec![Up, Right, Down]);

        let plain = MoveRules::unbounded();
        assert_eq!(plain.run_cap(), 1);
        let run = plain.advance(plain.advance(RunState::START, Up), Up);
        assert_eq!(run, RunState::new(Up, 1));
        assert_eq!(legal(plain, run), vec![Up, Right, Left]);
    }

    #[test]
    fn can_stop_requires_min_run() {
        let rules = MoveRules::ULTRA_CRUCIBLE;
        assert!(rules.can_stop(RunState::START));
        assert!(!rules.can_stop(RunState::new(Right, 3)));
        assert!(rules.can_stop(RunState::new(Right, 4)));
        assert!(MoveRules::CRUCIBLE.can_stop(RunState::new(Right, 1)));
    }

    #[test]
    fn new_validates_bounds() {
        assert_eq!(MoveRules::new(0, Some(3)), Ok(MoveRules::CRUCIBLE));
        assert_eq!(MoveRules::new(4, Some(10)), Ok(MoveRules::ULTRA_CRUCIBLE));
        assert!(MoveRules::new(4, Some(4)).is_ok());
        assert!(MoveRules::new(7, None).is_ok());
        assert_eq!(
            MoveRules::new(0, Some(0)),
            Err(SearchError::InvalidRules {
                min_run: 0,
                max_run: Some(0)
            })
        );
        assert!(MoveRules::new(5, Some(4)).is_err());
    }

    #[test]
    fn display() {
        assert_eq!(MoveRules::ULTRA_CRUCIBLE.to_string(), "runs 4..=10");
        assert_eq!(MoveRules::unbounded().to_string(), "runs 0..");
    }
}
