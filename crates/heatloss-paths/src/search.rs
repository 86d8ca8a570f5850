use std::collections::{BinaryHeap, HashMap};

use heatloss_core::{Point, Range};

use crate::error::SearchError;
use crate::moves::Moves;
use crate::rules::{MoveRules, StopRule};
use crate::state::{SearchState, StateSpace};
use crate::traits::EntryCost;

/// A state with its final cost, as produced by [`StateSearch::search`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StateCost {
    pub state: SearchState,
    pub cost: u32,
}

/// Counters describing the last search.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchStats {
    /// Frontier entries popped, stale ones included.
    pub pops: usize,
    /// Popped entries skipped because their state was already finalized.
    pub stale: usize,
    /// Frontier entries pushed.
    pub pushes: usize,
    /// States finalized.
    pub settled: usize,
}

// ---------------------------------------------------------------------------
// Internal node for priority-queue searches
// ---------------------------------------------------------------------------

const NO_PARENT: usize = usize::MAX;

#[derive(Clone)]
pub(crate) struct Node {
    pub(crate) g: u32,
    pub(crate) parent: usize,
    pub(crate) generation: u32,
    pub(crate) open: bool,
}

impl Default for Node {
    fn default() -> Self {
        Self {
            g: 0,
            parent: NO_PARENT,
            generation: 0,
            open: false,
        }
    }
}

/// Reference into a node array, ordered by cost for use in `BinaryHeap`.
#[derive(Clone, Copy, Eq, PartialEq)]
pub(crate) struct NodeRef {
    pub(crate) idx: usize,
    pub(crate) g: u32,
}

impl Ord for NodeRef {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        // Reverse so BinaryHeap (max-heap) pops smallest g first.
        other.g.cmp(&self.g)
    }
}

impl PartialOrd for NodeRef {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

// ---------------------------------------------------------------------------
// StateSearch
// ---------------------------------------------------------------------------

/// Single-source Dijkstra over (position, direction, run length) states.
///
/// `StateSearch` owns its node array, frontier and scratch buffers, so
/// repeated searches on same-sized grids allocate nothing after the first.
/// Each search bumps a generation counter that lazily invalidates the
/// previous run's nodes.
///
/// ```
/// use heatloss_core::{CostGrid, Point};
/// use heatloss_paths::{MoveRules, StateSearch, StopRule};
///
/// let grid: CostGrid = "19\n11".parse().unwrap();
/// let mut search = StateSearch::new(grid.bounds(), MoveRules::CRUCIBLE);
/// let table = search.search(&grid, Point::new(0, 0)).unwrap();
/// assert_eq!(table.answer(Point::new(1, 1), StopRule::Anywhere), Ok(2));
/// ```
pub struct StateSearch {
    rules: MoveRules,
    space: StateSpace,
    nodes: Vec<Node>,
    generation: u32,
    origin: Option<usize>,
    settled: Vec<StateCost>,
    open: BinaryHeap<NodeRef>,
    moves: Moves,
    stats: SearchStats,
}

impl StateSearch {
    /// Create a search for grids covering `bounds`.
    pub fn new(bounds: Range, rules: MoveRules) -> Self {
        let space = StateSpace::for_rules(bounds, &rules);
        Self {
            rules,
            space,
            nodes: vec![Node::default(); space.len()],
            generation: 0,
            origin: None,
            settled: Vec::new(),
            open: BinaryHeap::new(),
            moves: Moves::new(),
            stats: SearchStats::default(),
        }
    }

    /// The movement rules in use.
    #[inline]
    pub fn rules(&self) -> MoveRules {
        self.rules
    }

    /// The grid rectangle the search is laid out for.
    #[inline]
    pub fn bounds(&self) -> Range {
        self.space.bounds
    }

    /// Replace the movement rules. Invalidates the previous result.
    pub fn set_rules(&mut self, rules: MoveRules) {
        self.rules = rules;
        self.relayout(StateSpace::for_rules(self.space.bounds, &rules));
    }

    /// Replace the grid rectangle. Invalidates the previous result.
    ///
    /// If the new state space fits in the existing node array it is reused,
    /// otherwise the array grows.
    pub fn set_bounds(&mut self, bounds: Range) {
        self.relayout(StateSpace::for_rules(bounds, &self.rules));
    }

    fn relayout(&mut self, space: StateSpace) {
        self.space = space;
        self.origin = None;
        self.settled.clear();
        self.stats = SearchStats::default();
        if space.len() > self.nodes.len() {
            self.nodes.resize(space.len(), Node::default());
        }
        self.bump_generation();
    }

    fn bump_generation(&mut self) {
        self.generation = self.generation.wrapping_add(1);
        if self.generation == 0 {
            // Wrapped: stamps from 2^32 searches ago would look current.
            for n in self.nodes.iter_mut() {
                n.generation = 0;
            }
            self.generation = 1;
        }
    }

    /// Run the search from `origin` to completion and return the cost table.
    ///
    /// The search adopts `grid`'s bounds if they differ from the current
    /// ones.
    pub fn search<G: EntryCost + ?Sized>(
        &mut self,
        grid: &G,
        origin: Point,
    ) -> Result<CostTable<'_>, SearchError> {
        if grid.bounds() != self.space.bounds {
            self.set_bounds(grid.bounds());
        }
        let Some(start) = self.space.index(SearchState::origin(origin)) else {
            return Err(SearchError::OriginOutOfBounds(origin));
        };

        self.bump_generation();
        let cur_gen = self.generation;
        let rules = self.rules;
        self.settled.clear();
        self.open.clear();
        self.stats = SearchStats::default();

        {
            let node = &mut self.nodes[start];
            node.g = 0;
            node.parent = NO_PARENT;
            node.generation = cur_gen;
            node.open = true;
        }
        self.open.push(NodeRef { idx: start, g: 0 });
        self.stats.pushes += 1;

        let mut moves = std::mem::take(&mut self.moves);

        while let Some(current) = self.open.pop() {
            self.stats.pops += 1;
            let ci = current.idx;
            let cn = &self.nodes[ci];
            if cn.generation != cur_gen || !cn.open {
                self.stats.stale += 1;
                log::trace!("stale entry {} at {}", self.space.state(ci), current.g);
                continue;
            }
            let current_g = cn.g;
            self.nodes[ci].open = false;

            let cs = self.space.state(ci);
            self.settled.push(StateCost {
                state: cs,
                cost: current_g,
            });

            for &next in moves.successors(&rules, cs, |p| grid.contains(p)) {
                let Some(ni) = self.space.index(next) else {
                    continue;
                };
                let tentative = current_g.saturating_add(grid.entry_cost(next.pos));

                let n = &mut self.nodes[ni];
                if n.generation == cur_gen && (!n.open || tentative >= n.g) {
                    continue;
                }

                n.generation = cur_gen;
                n.g = tentative;
                n.parent = ci;
                n.open = true;
                self.open.push(NodeRef {
                    idx: ni,
                    g: tentative,
                });
                self.stats.pushes += 1;
            }
        }

        self.moves = moves;
        self.origin = Some(start);
        self.stats.settled = self.settled.len();
        log::debug!(
            "search from {origin} with {rules}: {} states settled, {} pops ({} stale), {} pushes",
            self.stats.settled,
            self.stats.pops,
            self.stats.stale,
            self.stats.pushes
        );
        Ok(self.table())
    }

    /// The cost table of the last completed search (empty before any).
    pub fn table(&self) -> CostTable<'_> {
        CostTable { search: self }
    }

    #[inline]
    fn current(&self, idx: usize) -> Option<&Node> {
        self.origin?;
        let n = &self.nodes[idx];
        (n.generation == self.generation).then_some(n)
    }
}

/// Run a fresh search and return every reached state with its cost.
pub fn shortest_costs<G: EntryCost + ?Sized>(
    grid: &G,
    origin: Point,
    rules: MoveRules,
) -> Result<HashMap<SearchState, u32>, SearchError> {
    let mut search = StateSearch::new(grid.bounds(), rules);
    let table = search.search(grid, origin)?;
    Ok(table.to_map())
}

// ---------------------------------------------------------------------------
// CostTable
// ---------------------------------------------------------------------------

/// Read-only view of the best costs found by the last search.
#[derive(Clone, Copy)]
pub struct CostTable<'a> {
    search: &'a StateSearch,
}

impl<'a> CostTable<'a> {
    /// Best cost of reaching `state`, or `None` if it was never reached.
    pub fn cost(&self, state: SearchState) -> Option<u32> {
        let idx = self.search.space.index(state)?;
        self.search.current(idx).map(|n| n.g)
    }

    /// Number of reached states.
    #[inline]
    pub fn len(&self) -> usize {
        self.search.settled.len()
    }

    /// Whether no state was reached (only before the first search).
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.search.settled.is_empty()
    }

    /// Reached states in the order they were finalized.
    #[inline]
    pub fn settled(&self) -> &'a [StateCost] {
        &self.search.settled
    }

    /// Iterate over reached states and their costs.
    pub fn iter(&self) -> impl Iterator<Item = StateCost> + 'a {
        self.search.settled.iter().copied()
    }

    /// Counters of the search that produced this table.
    #[inline]
    pub fn stats(&self) -> SearchStats {
        self.search.stats
    }

    /// The rules the table was computed under.
    #[inline]
    pub fn rules(&self) -> MoveRules {
        self.search.rules
    }

    /// Cheapest reached state on `target` whose run satisfies `keep`.
    pub fn best_at_where(
        &self,
        target: Point,
        keep: impl Fn(SearchState) -> bool,
    ) -> Option<StateCost> {
        let space = &self.search.space;
        space
            .indices_at(target)
            .filter_map(|i| {
                let n = self.search.current(i)?;
                let state = space.state(i);
                keep(state).then_some(StateCost { state, cost: n.g })
            })
            .min_by_key(|sc| sc.cost)
    }

    /// Cheapest reached state on `target` under `stop`.
    pub fn best_at(&self, target: Point, stop: StopRule) -> Option<StateCost> {
        let rules = self.search.rules;
        self.best_at_where(target, |s| match stop {
            StopRule::Anywhere => true,
            StopRule::Settled => rules.can_stop(s.run),
        })
    }

    /// Minimum cost over every run state on `target`.
    pub fn min_cost_at(&self, target: Point) -> Option<u32> {
        self.best_at(target, StopRule::Anywhere).map(|sc| sc.cost)
    }

    /// The answer for `target`: its minimum cost under `stop`, or an error
    /// saying why there is none.
    pub fn answer(&self, target: Point, stop: StopRule) -> Result<u32, SearchError> {
        if !self.search.space.bounds.contains(target) {
            return Err(SearchError::TargetOutOfBounds(target));
        }
        self.best_at(target, stop)
            .map(|sc| sc.cost)
            .ok_or(SearchError::Unreachable { target })
    }

    /// The chain of states from the origin to `state`, both included.
    pub fn path_to(&self, state: SearchState) -> Option<Vec<SearchState>> {
        let space = &self.search.space;
        let mut idx = space.index(state)?;
        self.search.current(idx)?;
        let mut path = Vec::new();
        while idx != NO_PARENT {
            path.push(space.state(idx));
            idx = self.search.nodes[idx].parent;
        }
        path.reverse();
        Some(path)
    }

    /// The chain of states of a cheapest path to `target` under `stop`.
    pub fn best_path_to(&self, target: Point, stop: StopRule) -> Option<Vec<SearchState>> {
        let best = self.best_at(target, stop)?;
        self.path_to(best.state)
    }

    /// Copy the table into an owned map.
    pub fn to_map(&self) -> HashMap<SearchState, u32> {
        self.iter().map(|sc| (sc.state, sc.cost)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::plain::plain_costs;
    use crate::state::RunState;
    use heatloss_core::{CostGrid, Direction};
    use rand::rngs::StdRng;
    use rand::{Rng, RngExt, SeedableRng};

    const SAMPLE: &str = "\
2413432311323
3215453535623
3255245654254
3446585845452
4546657867536
1438598798454
4457876987766
3637877979653
4654967986887
4564679986453
1224686865563
2546548887735
4322674655533";

    const ULTRA_SAMPLE: &str = "\
111111111111
999999999991
999999999991
999999999991
999999999991";

    fn grid(s: &str) -> CostGrid {
        CostGrid::parse(s).unwrap()
    }

    fn corner(g: &CostGrid) -> Point {
        Point::new(g.width() - 1, g.height() - 1)
    }

    fn solve(g: &CostGrid, rules: MoveRules, stop: StopRule) -> Result<u32, SearchError> {
        let mut search = StateSearch::new(g.bounds(), rules);
        let table = search.search(g, Point::ZERO)?;
        table.answer(corner(g), stop)
    }

    fn random_grid(rng: &mut impl Rng, w: i32, h: i32) -> CostGrid {
        let cells = (0..w * h).map(|_| rng.random_range(0..10u32)).collect();
        CostGrid::new(w, h, cells).unwrap()
    }

    // Checks a reconstructed path against the rules and returns its cost.
    fn walk_cost(g: &CostGrid, rules: MoveRules, path: &[SearchState]) -> u32 {
        let mut cost = 0;
        for pair in path.windows(2) {
            let (from, to) = (pair[0], pair[1]);
            let dir = to.run.last.expect("moved states carry a direction");
            assert!(rules.allows(from.run, dir), "{from} -> {to} breaks {rules}");
            assert_eq!(from.pos.step(dir), to.pos);
            assert_eq!(rules.advance(from.run, dir), to.run);
            cost += g.cost(to.pos);
        }
        cost
    }

    #[test]
    fn single_cell_costs_nothing() {
        let g = grid("5");
        for rules in [MoveRules::CRUCIBLE, MoveRules::ULTRA_CRUCIBLE] {
            assert_eq!(solve(&g, rules, StopRule::Anywhere), Ok(0));
            assert_eq!(solve(&g, rules, StopRule::Settled), Ok(0));
        }
    }

    #[test]
    fn two_by_two() {
        let g = grid("19\n11");
        assert_eq!(solve(&g, MoveRules::CRUCIBLE, StopRule::Anywhere), Ok(2));
    }

    #[test]
    fn sample_grid() {
        let g = grid(SAMPLE);
        assert_eq!(solve(&g, MoveRules::CRUCIBLE, StopRule::Anywhere), Ok(102));
        assert_eq!(solve(&g, MoveRules::ULTRA_CRUCIBLE, StopRule::Anywhere), Ok(94));
        assert_eq!(solve(&g, MoveRules::ULTRA_CRUCIBLE, StopRule::Settled), Ok(94));
    }

    #[test]
    fn ultra_sample_depends_on_stop_rule() {
        let g = grid(ULTRA_SAMPLE);
        assert_eq!(solve(&g, MoveRules::ULTRA_CRUCIBLE, StopRule::Settled), Ok(71));
        assert_eq!(solve(&g, MoveRules::ULTRA_CRUCIBLE, StopRule::Anywhere), Ok(47));
    }

    #[test]
    fn max_run_forces_detour() {
        let g = grid("11111\n99991");
        let constrained = solve(&g, MoveRules::CRUCIBLE, StopRule::Anywhere).unwrap();
        let plain = solve(&g, MoveRules::unbounded(), StopRule::Anywhere).unwrap();
        assert_eq!(plain, 5);
        assert_eq!(constrained, 13);
        assert!(constrained > plain);
    }

    #[test]
    fn min_run_on_small_grid_is_unreachable() {
        let g = grid("123\n456\n789");
        let target = corner(&g);
        assert_eq!(
            solve(&g, MoveRules::ULTRA_CRUCIBLE, StopRule::Anywhere),
            Err(SearchError::Unreachable { target })
        );
        let mut search = StateSearch::new(g.bounds(), MoveRules::ULTRA_CRUCIBLE);
        let table = search.search(&g, Point::ZERO).unwrap();
        assert_eq!(table.min_cost_at(target), None);
        assert_eq!(table.best_path_to(target, StopRule::Anywhere), None);
        // Only the two forced straight lines from the corner are explored.
        assert_eq!(table.len(), 5);
    }

    #[test]
    fn single_row_needs_min_run_to_fit() {
        let g = grid("11111");
        assert_eq!(solve(&g, MoveRules::ULTRA_CRUCIBLE, StopRule::Settled), Ok(4));
        assert_eq!(
            solve(&g, MoveRules::CRUCIBLE, StopRule::Anywhere),
            Err(SearchError::Unreachable {
                target: Point::new(4, 0)
            })
        );
    }

    #[test]
    fn origin_and_target_out_of_bounds() {
        let g = grid("12\n34");
        let mut search = StateSearch::new(g.bounds(), MoveRules::CRUCIBLE);
        assert!(matches!(
            search.search(&g, Point::new(2, 0)),
            Err(SearchError::OriginOutOfBounds(_))
        ));
        let table = search.search(&g, Point::ZERO).unwrap();
        assert_eq!(
            table.answer(Point::new(0, 5), StopRule::Anywhere),
            Err(SearchError::TargetOutOfBounds(Point::new(0, 5)))
        );
    }

    #[test]
    fn origin_state_costs_zero() {
        let g = grid(SAMPLE);
        let mut search = StateSearch::new(g.bounds(), MoveRules::CRUCIBLE);
        let table = search.search(&g, Point::ZERO).unwrap();
        assert_eq!(table.cost(SearchState::origin(Point::ZERO)), Some(0));
        assert_eq!(table.settled()[0].state, SearchState::origin(Point::ZERO));
        let right = SearchState::new(Point::new(1, 0), RunState::new(Direction::Right, 1));
        assert_eq!(table.cost(right), Some(4));
    }

    #[test]
    fn finalized_costs_are_non_decreasing() {
        let g = grid(SAMPLE);
        for rules in [MoveRules::CRUCIBLE, MoveRules::ULTRA_CRUCIBLE] {
            let mut search = StateSearch::new(g.bounds(), rules);
            let table = search.search(&g, Point::ZERO).unwrap();
            let costs: Vec<u32> = table.iter().map(|sc| sc.cost).collect();
            assert!(costs.windows(2).all(|w| w[0] <= w[1]));
            let stats = table.stats();
            assert_eq!(stats.settled, table.len());
            assert_eq!(stats.pops, stats.settled + stats.stale);
            assert_eq!(stats.pushes, stats.pops);
        }
    }

    #[test]
    fn reconstructed_paths_obey_rules_and_match_costs() {
        let g = grid(SAMPLE);
        for rules in [MoveRules::CRUCIBLE, MoveRules::ULTRA_CRUCIBLE] {
            let mut search = StateSearch::new(g.bounds(), rules);
            let table = search.search(&g, Point::ZERO).unwrap();
            for sc in table.iter() {
                let path = table.path_to(sc.state).unwrap();
                assert_eq!(path[0], SearchState::origin(Point::ZERO));
                assert_eq!(*path.last().unwrap(), sc.state);
                assert_eq!(walk_cost(&g, rules, &path), sc.cost);
            }
            let best = table.best_path_to(corner(&g), StopRule::Settled).unwrap();
            let answer = table.answer(corner(&g), StopRule::Settled).unwrap();
            assert_eq!(walk_cost(&g, rules, &best), answer);
        }
    }

    #[test]
    fn recorded_costs_never_exceed_random_legal_walks() {
        for seed in 0..20 {
            let mut rng = StdRng::seed_from_u64(seed);
            let g = random_grid(&mut rng, 8, 6);
            for rules in [MoveRules::CRUCIBLE, MoveRules::ULTRA_CRUCIBLE] {
                let mut search = StateSearch::new(g.bounds(), rules);
                let table = search.search(&g, Point::ZERO).unwrap();
                let mut moves = Moves::new();
                let mut state = SearchState::origin(Point::ZERO);
                let mut walked = 0;
                for _ in 0..40 {
                    let next = moves.successors(&rules, state, |p| g.contains(p));
                    if next.is_empty() {
                        break;
                    }
                    state = next[rng.random_range(0..next.len())];
                    walked += g.cost(state.pos);
                    let recorded = table.cost(state).expect("walked states are reached");
                    assert!(
                        recorded <= walked,
                        "seed {seed}, {state}: {recorded} > {walked}"
                    );
                }
            }
        }
    }

    #[test]
    fn unbounded_rules_match_plain_dijkstra() {
        for seed in 0..20 {
            let mut rng = StdRng::seed_from_u64(seed);
            let w = rng.random_range(1..10);
            let h = rng.random_range(1..10);
            let g = random_grid(&mut rng, w, h);
            let plain = plain_costs(&g, Point::ZERO).unwrap();
            let mut search = StateSearch::new(g.bounds(), MoveRules::unbounded());
            let table = search.search(&g, Point::ZERO).unwrap();
            for p in g.bounds() {
                let i = g.bounds().offset(p).unwrap();
                assert_eq!(table.min_cost_at(p), plain[i], "seed {seed}, at {p} on\n{g}");
            }
        }
    }

    #[test]
    fn huge_max_run_behaves_as_unbounded() {
        let huge = MoveRules::new(0, Some(4_000_000_000)).unwrap();
        let small = grid("19\n11");
        assert_eq!(solve(&small, huge, StopRule::Anywhere), Ok(2));

        let g = grid(SAMPLE);
        let mut search = StateSearch::new(g.bounds(), huge);
        assert!(search.nodes.len() <= g.bounds().len() * 5 * 14);
        let table = search.search(&g, Point::ZERO).unwrap();
        assert_eq!(table.answer(corner(&g), StopRule::Anywhere), Ok(78));
        let plain = plain_costs(&g, Point::ZERO).unwrap();
        for p in g.bounds() {
            let i = g.bounds().offset(p).unwrap();
            assert_eq!(table.min_cost_at(p), plain[i], "at {p}");
        }

        search.set_rules(MoveRules::new(u32::MAX, None).unwrap());
        let table = search.search(&g, Point::ZERO).unwrap();
        assert_eq!(
            table.answer(corner(&g), StopRule::Anywhere),
            Err(SearchError::Unreachable { target: corner(&g) })
        );
    }

    #[test]
    fn repeated_searches_are_identical() {
        let g = grid(SAMPLE);
        let first = shortest_costs(&g, Point::ZERO, MoveRules::ULTRA_CRUCIBLE).unwrap();
        let second = shortest_costs(&g, Point::ZERO, MoveRules::ULTRA_CRUCIBLE).unwrap();
        assert_eq!(first, second);

        let mut search = StateSearch::new(g.bounds(), MoveRules::ULTRA_CRUCIBLE);
        let a = search.search(&g, Point::ZERO).unwrap().to_map();
        let b = search.search(&g, Point::ZERO).unwrap().to_map();
        assert_eq!(a, b);
        assert_eq!(a, first);
    }

    #[test]
    fn reuse_across_rules_and_grids() {
        let big = grid(SAMPLE);
        let small = grid("19\n11");
        let mut search = StateSearch::new(small.bounds(), MoveRules::CRUCIBLE);
        let cap = search.nodes.len();

        let table = search.search(&big, Point::ZERO).unwrap();
        assert_eq!(table.answer(corner(&big), StopRule::Anywhere), Ok(102));
        assert!(search.nodes.len() > cap);
        assert_eq!(search.bounds(), big.bounds());

        let grown = search.nodes.len();
        search.set_rules(MoveRules::ULTRA_CRUCIBLE);
        let table = search.search(&big, Point::ZERO).unwrap();
        assert_eq!(table.answer(corner(&big), StopRule::Anywhere), Ok(94));
        assert!(search.nodes.len() >= grown);

        // Shrinking keeps the node array and ignores stale entries.
        let grown = search.nodes.len();
        search.set_rules(MoveRules::CRUCIBLE);
        let table = search.search(&small, Point::ZERO).unwrap();
        assert_eq!(table.answer(corner(&small), StopRule::Anywhere), Ok(2));
        assert_eq!(table.len(), table.to_map().len());
        assert_eq!(search.nodes.len(), grown);
    }

    #[test]
    fn relayout_clears_previous_table() {
        let g = grid("19\n11");
        let mut search = StateSearch::new(g.bounds(), MoveRules::CRUCIBLE);
        search.search(&g, Point::ZERO).unwrap();
        assert!(!search.table().is_empty());
        search.set_rules(MoveRules::ULTRA_CRUCIBLE);
        assert!(search.table().is_empty());
        assert_eq!(search.table().cost(SearchState::origin(Point::ZERO)), None);
    }

    #[test]
    fn generation_wrap_resets_stamps() {
        let g = grid(SAMPLE);
        let mut search = StateSearch::new(g.bounds(), MoveRules::CRUCIBLE);
        search.search(&g, Point::ZERO).unwrap();
        search.generation = u32::MAX;
        let table = search.search(&g, Point::ZERO).unwrap();
        assert_eq!(table.answer(corner(&g), StopRule::Anywhere), Ok(102));
        assert_eq!(search.generation, 1);
    }

    #[test]
    fn empty_table_before_first_search() {
        let search = StateSearch::new(Range::new(0, 0, 3, 3), MoveRules::CRUCIBLE);
        let table = search.table();
        assert!(table.is_empty());
        assert_eq!(table.cost(SearchState::origin(Point::ZERO)), None);
        assert_eq!(table.min_cost_at(Point::ZERO), None);
    }
}
