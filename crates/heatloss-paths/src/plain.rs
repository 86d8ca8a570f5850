use std::collections::BinaryHeap;

use heatloss_core::{Direction, Point};

use crate::error::SearchError;
use crate::search::{Node, NodeRef};
use crate::traits::EntryCost;

/// Compute an unconstrained single-source distance map.
///
/// Plain 4-neighbor Dijkstra over cells, ignoring run lengths entirely. The
/// result is indexed by row-major cell offset within `grid.bounds()`; `None`
/// marks cells that cannot be reached. Any run-constrained cost to a cell is
/// at least its entry here.
pub fn plain_costs<G: EntryCost + ?Sized>(
    grid: &G,
    origin: Point,
) -> Result<Vec<Option<u32>>, SearchError> {
    let rng = grid.bounds();
    let Some(si) = rng.offset(origin) else {
        return Err(SearchError::OriginOutOfBounds(origin));
    };

    // Nodes are fresh, so generation 1 marks "reached".
    const REACHED: u32 = 1;
    let mut nodes = vec![Node::default(); rng.len()];
    let mut open: BinaryHeap<NodeRef> = BinaryHeap::new();

    nodes[si].open = true;
    nodes[si].generation = REACHED;
    open.push(NodeRef { idx: si, g: 0 });

    while let Some(current) = open.pop() {
        let ci = current.idx;
        if !nodes[ci].open {
            continue;
        }
        let current_g = nodes[ci].g;
        nodes[ci].open = false;

        let cp = rng.point_at(ci);
        for dir in Direction::ALL {
            let np = cp.step(dir);
            let Some(ni) = rng.offset(np) else {
                continue;
            };
            let tentative = current_g.saturating_add(grid.entry_cost(np));

            let n = &mut nodes[ni];
            if n.generation == REACHED && (!n.open || tentative >= n.g) {
                continue;
            }
            n.generation = REACHED;
            n.g = tentative;
            n.open = true;
            open.push(NodeRef {
                idx: ni,
                g: tentative,
            });
        }
    }

    Ok(nodes
        .iter()
        .map(|n| (n.generation == REACHED).then_some(n.g))
        .collect())
}

/// Unconstrained cost from `origin` to `target`, if any path exists.
pub fn plain_cost<G: EntryCost + ?Sized>(
    grid: &G,
    origin: Point,
    target: Point,
) -> Result<Option<u32>, SearchError> {
    let Some(ti) = grid.bounds().offset(target) else {
        return Err(SearchError::TargetOutOfBounds(target));
    };
    let costs = plain_costs(grid, origin)?;
    Ok(costs[ti])
}
