//! The [`Grid`] type — a 2D terrain map with exclusive ownership of its cells.

use thiserror::Error;

use crate::cell::Cell;
use crate::geom::{Point, Size};

/// Errors from grid construction and mutation.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum GridError {
    /// Coordinate outside `[0, width) × [0, height)`.
    #[error("coordinate {at} outside grid {size}")]
    OutOfBounds { at: Point, size: Size },
    /// Cost multipliers below 1 would break heuristic admissibility.
    #[error("cost multiplier {0} is below 1")]
    InvalidMultiplier(f64),
}

/// A dense `width × height` terrain map.
///
/// Dimensions are fixed at construction. The grid is the sole owner of its
/// cells; search bookkeeping lives elsewhere (see the path finder's scratch
/// buffers), so a `Grid` shared immutably can serve any number of
/// consecutive searches.
#[derive(Debug, Clone, PartialEq)]
pub struct Grid {
    size: Size,
    cells: Vec<Cell>,
}

impl Grid {
    /// Create a grid of the given dimensions, all open ground.
    pub fn new(width: i32, height: i32) -> Self {
        let size = Size::new(width, height);
        Self {
            size,
            cells: vec![Cell::OPEN; size.len()],
        }
    }

    /// Build a grid by calling `f` for every coordinate (row-major).
    ///
    /// Fails with [`GridError::InvalidMultiplier`] if `f` produces a cell
    /// with a cost multiplier below 1.
    pub fn from_fn(
        width: i32,
        height: i32,
        mut f: impl FnMut(Point) -> Cell,
    ) -> Result<Self, GridError> {
        let size = Size::new(width, height);
        let mut cells = Vec::with_capacity(size.len());
        for p in size {
            let cell = f(p);
            if cell.cost < 1.0 {
                return Err(GridError::InvalidMultiplier(cell.cost));
            }
            cells.push(cell);
        }
        Ok(Self { size, cells })
    }

    /// The grid dimensions.
    #[inline]
    pub fn size(&self) -> Size {
        self.size
    }

    #[inline]
    fn index(&self, p: Point) -> Option<usize> {
        if self.size.contains(p) {
            Some((p.y as usize) * (self.size.width as usize) + (p.x as usize))
        } else {
            None
        }
    }

    /// The cell at `p`, or `None` if out of bounds.
    #[inline]
    pub fn at(&self, p: Point) -> Option<&Cell> {
        self.index(p).map(|i| &self.cells[i])
    }

    /// The cell at `p`, bounds-checked.
    pub fn cell(&self, p: Point) -> Result<&Cell, GridError> {
        self.at(p).ok_or(GridError::OutOfBounds {
            at: p,
            size: self.size,
        })
    }

    /// Whether `p` is in bounds and passable.
    #[inline]
    pub fn passable(&self, p: Point) -> bool {
        self.at(p).is_some_and(|c| c.passable)
    }

    /// Set the passability of a single cell.
    pub fn set_passable(&mut self, p: Point, passable: bool) -> Result<(), GridError> {
        let size = self.size;
        let i = self
            .index(p)
            .ok_or(GridError::OutOfBounds { at: p, size })?;
        self.cells[i].passable = passable;
        Ok(())
    }

    /// Set the cost multiplier of a single cell. Multipliers must be ≥ 1.
    pub fn set_cost(&mut self, p: Point, cost: f64) -> Result<(), GridError> {
        if cost < 1.0 {
            return Err(GridError::InvalidMultiplier(cost));
        }
        let size = self.size;
        let i = self
            .index(p)
            .ok_or(GridError::OutOfBounds { at: p, size })?;
        self.cells[i].cost = cost;
        Ok(())
    }

    /// Overwrite every cell with `cell`.
    pub fn fill(&mut self, cell: Cell) -> Result<(), GridError> {
        if cell.cost < 1.0 {
            return Err(GridError::InvalidMultiplier(cell.cost));
        }
        self.cells.fill(cell);
        Ok(())
    }
}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn cell_round_trip() {
        let cell = Cell::OPEN.with_cost(2.0);
        let json = serde_json::to_string(&cell).unwrap();
        let back: Cell = serde_json::from_str(&json).unwrap();
        assert_eq!(cell, back);
    }
}
