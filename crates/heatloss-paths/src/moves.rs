use heatloss_core::Point;

use crate::rules::MoveRules;
use crate::state::SearchState;

/// Cached successor computation helper.
///
/// Enumerates the states reachable in one legal move, keeping only those
/// whose position passes a predicate (typically a bounds check).
pub struct Moves {
    buf: Vec<SearchState>,
}

impl Default for Moves {
    fn default() -> Self {
        Self::new()
    }
}

impl Moves {
    /// Create a new `Moves` helper.
    pub fn new() -> Self {
        Self {
            buf: Vec::with_capacity(4),
        }
    }

    /// Return the successors of `from` under `rules`, keeping only those for
    /// which `keep` returns `true` on the new position.
    pub fn successors(
        &mut self,
        rules: &MoveRules,
        from: SearchState,
        keep: impl Fn(Point) -> bool,
    ) -> &[SearchState] {
        self.buf.clear();
        for dir in rules.legal_directions(from.run) {
            let pos = from.pos.step(dir);
            if keep(pos) {
                self.buf
                    .push(SearchState::new(pos, rules.advance(from.run, dir)));
            }
        }
        &self.buf
    }
}
