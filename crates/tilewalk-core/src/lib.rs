//! **tilewalk-core** — core types for tile-maze pathfinding.
//!
//! This crate provides the foundational types used by `tilewalk-paths`:
//! the two tile conventions ([`Point`] for callers, [`RowCol`] for the grid
//! array), half-open [`Range`]s, and the [`BlockGrid`] open/blocked model
//! derived from a caller's raw marker array.

pub mod error;
pub mod geom;
pub mod grid;

pub use error::GridError;
pub use geom::{Point, Range, RowCol};
pub use grid::{BlockGrid, flat_index};
