//! Geometry primitives and the pure table layout pass.

mod grid;
mod rect;

pub use grid::{compute, field_rect, span, TableGeometry};
pub use rect::{Point, Rect};
