use heatloss_core::{CostGrid, Point, Range};

/// A rectangular map whose cells charge a cost on entry.
///
/// This is the only view of the map the searches need.
pub trait EntryCost {
    /// The rectangle of enterable cells.
    fn bounds(&self) -> Range;

    /// Cost of entering `p`. Only called for points inside
    /// [`bounds`](Self::bounds).
    fn entry_cost(&self, p: Point) -> u32;

    /// Whether `p` lies inside the map.
    #[inline]
    fn contains(&self, p: Point) -> bool {
        self.bounds().contains(p)
    }
}

impl EntryCost for CostGrid {
    #[inline]
    fn bounds(&self) -> Range {
        CostGrid::bounds(self)
    }

    #[inline]
    fn entry_cost(&self, p: Point) -> u32 {
        self.cost(p)
    }
}
