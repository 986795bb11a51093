//! **gridway-core** — terrain grid types for the gridway path search engine.
//!
//! This crate provides the foundational types shared across the *gridway*
//! workspace: geometry primitives, the terrain [`Cell`], and the [`Grid`]
//! container that owns a rectangular map of cells.

pub mod cell;
pub mod geom;
pub mod grid;

pub use cell::Cell;
pub use geom::{Point, Size};
pub use grid::{Grid, GridError};
