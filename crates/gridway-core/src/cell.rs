//! The [`Cell`] type — per-cell terrain data.

/// A single terrain cell: whether it can be entered, and how expensive
/// entering it is relative to open ground.
///
/// The cost multiplier scales the base movement cost of any step that
/// *enters* this cell. Open ground has multiplier 1; slow terrain (mud,
/// water, rubble) has a larger multiplier. Multipliers below 1 are rejected
/// by [`Grid`](crate::Grid) mutators, which keeps the engine's heuristic
/// admissible.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Cell {
    pub passable: bool,
    pub cost: f64,
}

impl Cell {
    /// Open ground: passable, multiplier 1.
    pub const OPEN: Self = Self {
        passable: true,
        cost: 1.0,
    };

    /// A wall: impassable.
    pub const WALL: Self = Self {
        passable: false,
        cost: 1.0,
    };

    /// Passable terrain with the given cost multiplier (builder).
    #[inline]
    pub const fn with_cost(mut self, cost: f64) -> Self {
        self.cost = cost;
        self
    }
}

impl Default for Cell {
    #[inline]
    fn default() -> Self {
        Self::OPEN
    }
}
