use super::Table;
use crate::layout::Rect;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Column {
    pub(super) width: f32,
}

impl Column {
    pub(super) const fn new(width: f32) -> Self {
        Self { width }
    }

    pub const fn width(&self) -> f32 {
        self.width
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Row {
    pub(super) height: f32,
}

impl Row {
    pub(super) const fn new(height: f32) -> Self {
        Self { height }
    }

    pub const fn height(&self) -> f32 {
        self.height
    }
}

/// A cell of the table, addressed by column and row index.
///
/// Fields hold no geometry of their own. Resolve one against its table with
/// [`Field::rect`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Field {
    pub column: usize,
    pub row: usize,
}

impl Field {
    pub const fn new(column: usize, row: usize) -> Self {
        Self { column, row }
    }

    pub fn rect(&self, table: &Table) -> Rect {
        table
            .geometry()
            .field(self.column, self.row)
            .unwrap_or(Rect::INVALID)
    }
}
