use std::collections::BinaryHeap;

use gridway_core::Point;
use ordered_float::OrderedFloat;

use crate::PathFinder;
use crate::error::SearchError;
use crate::finder::NodeRef;
use crate::trace;
use crate::traits::CostModel;

impl PathFinder {
    /// Compute a path from `start` to `goal` using weighted A*.
    ///
    /// Returns the full path (including both endpoints). Endpoints are
    /// validated before any search work: an out-of-bounds or impassable
    /// start or goal fails with [`SearchError::InvalidEndpoint`]. An
    /// exhausted frontier fails with [`SearchError::NoPathFound`].
    pub fn find_path<P: CostModel>(
        &mut self,
        policy: &P,
        start: Point,
        goal: Point,
    ) -> Result<Vec<Point>, SearchError> {
        let Some(start_idx) = self.idx(start) else {
            return Err(SearchError::InvalidEndpoint(start));
        };
        let Some(goal_idx) = self.idx(goal) else {
            return Err(SearchError::InvalidEndpoint(goal));
        };
        if !policy.traversable(start) {
            return Err(SearchError::InvalidEndpoint(start));
        }
        if !policy.traversable(goal) {
            return Err(SearchError::InvalidEndpoint(goal));
        }

        // Bump generation to lazily invalidate all per-cell state.
        self.generation = self.generation.wrapping_add(1);
        let cur_gen = self.generation;

        // Initialise the start node.
        {
            let node = &mut self.nodes[start_idx];
            node.g = 0.0;
            node.parent = usize::MAX;
            node.generation = cur_gen;
            node.open = true;
        }

        if start_idx == goal_idx {
            self.nodes[start_idx].open = false;
            return Ok(vec![start]);
        }

        let h0 = policy.heuristic(start, goal);
        let mut open: BinaryHeap<NodeRef> = BinaryHeap::new();
        open.push(NodeRef {
            idx: start_idx,
            f: OrderedFloat(h0),
            h: OrderedFloat(h0),
            seq: 0,
        });
        let mut seq: u64 = 1;
        let mut expanded: usize = 0;

        let mut nbuf = std::mem::take(&mut self.nbuf);

        let found = 'search: loop {
            let Some(current) = open.pop() else {
                break 'search false;
            };

            let ci = current.idx;

            // Skip stale entries.
            if self.nodes[ci].generation != cur_gen || !self.nodes[ci].open {
                continue;
            }

            if ci == goal_idx {
                self.nodes[ci].open = false;
                break 'search true;
            }

            if let Some(limit) = self.max_expansions {
                if expanded >= limit {
                    self.nbuf = nbuf;
                    log::debug!(
                        "search {start} -> {goal} aborted after {expanded} expansions"
                    );
                    return Err(SearchError::Aborted { expanded, to: goal });
                }
            }

            self.nodes[ci].open = false;
            expanded += 1;
            let current_g = self.nodes[ci].g;
            let current_point = self.point(ci);

            nbuf.clear();
            policy.neighbors(current_point, &mut nbuf);

            for &np in nbuf.iter() {
                let Some(ni) = self.idx(np) else {
                    continue;
                };
                let tentative_g = current_g + policy.step_cost(current_point, np);

                let n = &mut self.nodes[ni];
                if n.generation == cur_gen {
                    if !n.open {
                        // Finalized; never reopened.
                        continue;
                    }
                    if tentative_g >= n.g {
                        continue;
                    }
                } else {
                    n.generation = cur_gen;
                }

                n.g = tentative_g;
                n.parent = ci;
                n.open = true;

                let h = policy.heuristic(np, goal);
                open.push(NodeRef {
                    idx: ni,
                    f: OrderedFloat(tentative_g + h),
                    h: OrderedFloat(h),
                    seq,
                });
                seq += 1;
            }
        };

        self.nbuf = nbuf;

        if !found {
            log::debug!("frontier exhausted: no path from {start} to {goal}");
            return Err(SearchError::NoPathFound {
                from: start,
                to: goal,
            });
        }

        let path = trace::trace(self, start_idx, goal_idx)?;
        log::debug!(
            "path {start} -> {goal}: {} cells, cost {:.3}, {expanded} expansions",
            path.len(),
            self.nodes[goal_idx].g
        );
        Ok(path)
    }
}
