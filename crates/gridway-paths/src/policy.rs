//! The canonical grid-backed movement policy.

use gridway_core::{Grid, Point};

use crate::distance;
use crate::traits::{CostModel, NeighborPolicy};

/// Orthogonal directions, compass order: N, E, S, W.
const CARDINAL: [Point; 4] = [
    Point::new(0, -1),
    Point::new(1, 0),
    Point::new(0, 1),
    Point::new(-1, 0),
];

/// Diagonal directions, compass order: NE, SE, SW, NW.
const DIAGONAL: [Point; 4] = [
    Point::new(1, -1),
    Point::new(1, 1),
    Point::new(-1, 1),
    Point::new(-1, -1),
];

/// 8-directional movement over a [`Grid`] with a no-corner-cutting rule.
///
/// A diagonal step is admitted only when both orthogonal cells flanking it
/// (the one sharing the row and the one sharing the column) are passable, so
/// an agent never slides through the shared corner of two walls.
///
/// Step costs are Euclidean (1 for orthogonal, √2 for diagonal) scaled by
/// the destination cell's cost multiplier; the heuristic is plain Euclidean
/// distance, admissible as long as every multiplier is ≥ 1 (which
/// [`Grid`] mutators enforce).
pub struct TerrainPolicy<'a> {
    grid: &'a Grid,
}

impl<'a> TerrainPolicy<'a> {
    /// Create a policy over `grid`.
    pub fn new(grid: &'a Grid) -> Self {
        Self { grid }
    }
}

impl NeighborPolicy for TerrainPolicy<'_> {
    #[inline]
    fn traversable(&self, p: Point) -> bool {
        self.grid.passable(p)
    }

    fn neighbors(&self, p: Point, buf: &mut Vec<Point>) {
        for d in CARDINAL {
            let n = p + d;
            if self.traversable(n) {
                buf.push(n);
            }
        }
        for d in DIAGONAL {
            let n = p + d;
            if self.traversable(n)
                && self.traversable(Point::new(p.x + d.x, p.y))
                && self.traversable(Point::new(p.x, p.y + d.y))
            {
                buf.push(n);
            }
        }
    }
}

impl CostModel for TerrainPolicy<'_> {
    fn step_cost(&self, from: Point, to: Point) -> f64 {
        let mult = self.grid.at(to).map_or(1.0, |c| c.cost);
        distance::euclidean(from, to) * mult
    }

    fn heuristic(&self, from: Point, goal: Point) -> f64 {
        distance::euclidean(from, goal)
    }
}
