use gridway_core::Point;
use thiserror::Error;

/// Errors returned by [`PathFinder::find_path`](crate::PathFinder::find_path).
///
/// `NoPathFound` is a normal outcome, not a crash condition. `BrokenChain`
/// signals an internal bookkeeping bug during path reconstruction and must
/// never be silently swallowed.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum SearchError {
    /// Start or goal lies out of bounds or on an impassable cell. Reported
    /// before any search work is done.
    #[error("endpoint {0} is out of bounds or impassable")]
    InvalidEndpoint(Point),

    /// The frontier was exhausted without reaching the goal.
    #[error("no path from {from} to {to}")]
    NoPathFound { from: Point, to: Point },

    /// The caller-imposed expansion cap was hit before the goal was reached.
    #[error("search toward {to} aborted after {expanded} expansions")]
    Aborted { expanded: usize, to: Point },

    /// The parent chain was cyclic or did not lead back to the start.
    #[error("broken parent chain at {at} while tracing {start} -> {goal}")]
    BrokenChain { start: Point, goal: Point, at: Point },
}
