use gridway_core::{Point, Size};
use ordered_float::OrderedFloat;

// ---------------------------------------------------------------------------
// Internal per-cell search state
// ---------------------------------------------------------------------------

/// Per-cell bookkeeping for one search generation.
///
/// A cell whose `generation` matches the finder's current counter has been
/// discovered this search: it is in the open frontier while `open` is set
/// and finalized (closed) once `open` is cleared. Cells are never reopened.
#[derive(Clone)]
pub(crate) struct Node {
    pub(crate) g: f64,
    pub(crate) parent: usize,
    pub(crate) generation: u32,
    pub(crate) open: bool,
}

impl Default for Node {
    fn default() -> Self {
        Self {
            g: 0.0,
            parent: usize::MAX,
            // Never matches a live generation counter, so untouched cells
            // read as unreached.
            generation: u32::MAX,
            open: false,
        }
    }
}

/// Reference into the node array, ordered for the `BinaryHeap` frontier.
#[derive(Clone, Copy, PartialEq, Eq)]
pub(crate) struct NodeRef {
    pub(crate) idx: usize,
    pub(crate) f: OrderedFloat<f64>,
    pub(crate) h: OrderedFloat<f64>,
    pub(crate) seq: u64,
}

impl Ord for NodeRef {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        // Reversed so BinaryHeap (a max-heap) pops lowest f first. Ties
        // prefer the node estimated closer to the goal, then the earliest
        // insertion, keeping selection fully deterministic.
        other
            .f
            .cmp(&self.f)
            .then_with(|| other.h.cmp(&self.h))
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for NodeRef {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

// ---------------------------------------------------------------------------
// PathFinder
// ---------------------------------------------------------------------------

/// Reusable search state for a grid of a given size.
///
/// `PathFinder` owns the per-cell scratch arrays (costs, parent links,
/// open/closed membership) so that repeated searches incur no allocations
/// after warm-up and never contaminate one another: a generation counter is
/// bumped per search, lazily invalidating all state from earlier runs.
pub struct PathFinder {
    pub(crate) size: Size,
    pub(crate) nodes: Vec<Node>,
    pub(crate) generation: u32,
    // shared scratch buffer for neighbor queries
    pub(crate) nbuf: Vec<Point>,
    pub(crate) max_expansions: Option<usize>,
}

impl PathFinder {
    /// Create a new `PathFinder` for grids of the given size.
    pub fn new(size: Size) -> Self {
        Self {
            size,
            nodes: vec![Node::default(); size.len()],
            generation: 0,
            nbuf: Vec::with_capacity(8),
            max_expansions: None,
        }
    }

    /// Cap the number of node expansions per search (builder).
    ///
    /// A search that exceeds the cap fails with
    /// [`SearchError::Aborted`](crate::SearchError::Aborted).
    pub fn with_max_expansions(mut self, limit: usize) -> Self {
        self.max_expansions = Some(limit);
        self
    }

    /// The grid size this finder searches over.
    #[inline]
    pub fn size(&self) -> Size {
        self.size
    }

    /// Replace the search area, reallocating scratch state as needed.
    ///
    /// If the new size fits within existing capacity the arrays are kept and
    /// only the generation counter is bumped, so stale entries are ignored
    /// without a reallocation.
    pub fn resize(&mut self, size: Size) {
        let new_len = size.len();
        self.size = size;
        if new_len <= self.nodes.len() {
            self.generation = self.generation.wrapping_add(1);
            return;
        }
        self.nodes.clear();
        self.nodes.resize(new_len, Node::default());
        self.generation = 0;
    }

    /// The accumulated cost from the last search's start to `p`.
    ///
    /// Meaningful only for cells reached by the most recent
    /// [`find_path`](Self::find_path) call; returns `None` for unreached or
    /// out-of-range cells, and after a [`resize`](Self::resize).
    pub fn cost_at(&self, p: Point) -> Option<f64> {
        let i = self.idx(p)?;
        let node = &self.nodes[i];
        if node.generation == self.generation {
            Some(node.g)
        } else {
            None
        }
    }

    // -----------------------------------------------------------------------
    // Coordinate helpers
    // -----------------------------------------------------------------------

    /// Convert a `Point` to a flat index. Returns `None` if out of range.
    #[inline]
    pub(crate) fn idx(&self, p: Point) -> Option<usize> {
        if self.size.contains(p) {
            Some((p.y as usize) * (self.size.width as usize) + (p.x as usize))
        } else {
            None
        }
    }

    /// Convert a flat index back to a `Point`.
    #[inline]
    pub(crate) fn point(&self, idx: usize) -> Point {
        let w = self.size.width as usize;
        Point::new((idx % w) as i32, (idx / w) as i32)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for PathFinder {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.size.serialize(serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for PathFinder {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let size = Size::deserialize(deserializer)?;
        Ok(PathFinder::new(size))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn idx_point_round_trip() {
        let pf = PathFinder::new(Size::new(7, 5));
        for p in pf.size() {
            let i = pf.idx(p).unwrap();
            assert_eq!(pf.point(i), p);
        }
        assert_eq!(pf.idx(Point::new(7, 0)), None);
        assert_eq!(pf.idx(Point::new(0, -1)), None);
    }

    #[test]
    fn resize_smaller_preserves_capacity() {
        let mut pf = PathFinder::new(Size::new(20, 20));
        let cap = pf.nodes.len(); // 400

        pf.resize(Size::new(5, 5));
        assert_eq!(pf.size(), Size::new(5, 5));
        assert_eq!(pf.nodes.len(), cap); // still 400
        // Generation bumped so stale entries are ignored.
        assert_eq!(pf.generation, 1);
    }

    #[test]
    fn resize_larger_reallocates() {
        let mut pf = PathFinder::new(Size::new(5, 5));
        pf.resize(Size::new(20, 20));
        assert_eq!(pf.nodes.len(), 400);
        assert_eq!(pf.generation, 0);
    }

    #[test]
    fn frontier_orders_by_f_then_h_then_insertion() {
        let a = NodeRef {
            idx: 0,
            f: OrderedFloat(2.0),
            h: OrderedFloat(1.0),
            seq: 0,
        };
        let b = NodeRef {
            idx: 1,
            f: OrderedFloat(1.0),
            h: OrderedFloat(0.5),
            seq: 1,
        };
        let c = NodeRef {
            idx: 2,
            f: OrderedFloat(1.0),
            h: OrderedFloat(0.25),
            seq: 2,
        };
        let d = NodeRef {
            idx: 3,
            f: OrderedFloat(1.0),
            h: OrderedFloat(0.25),
            seq: 3,
        };
        let mut heap = std::collections::BinaryHeap::from(vec![a, b, c, d]);
        // Lowest f first; among those, lowest h; among those, earliest seq.
        assert_eq!(heap.pop().unwrap().idx, 2);
        assert_eq!(heap.pop().unwrap().idx, 3);
        assert_eq!(heap.pop().unwrap().idx, 1);
        assert_eq!(heap.pop().unwrap().idx, 0);
    }
}

#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn pathfinder_round_trip() {
        let pf = PathFinder::new(Size::new(9, 4));
        let json = serde_json::to_string(&pf).unwrap();
        let back: PathFinder = serde_json::from_str(&json).unwrap();
        assert_eq!(back.size(), Size::new(9, 4));
        // Scratch state is freshly initialized, not serialized.
        assert_eq!(back.generation, 0);
        assert_eq!(back.nodes.len(), 36);
    }
}
