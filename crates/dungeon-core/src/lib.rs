//! **dungeon-core**: geometry primitives shared by the dungeon crates.
//!
//! Cells are addressed by a row/column [`Point`]; a grid's extent is a
//! half-open [`Range`] that also maps points to row-major indices.

pub mod geom;

pub use geom::{Point, Range, RangeIter};
