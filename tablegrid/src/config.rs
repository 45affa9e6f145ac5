//! Table configuration.

use crate::layout::Point;
use crate::table::Table;

/// Everything needed to construct a [`Table`].
#[derive(Debug, Clone, PartialEq)]
pub struct TableConfig {
    /// Top-left corner of the table.
    pub origin: Point,

    /// Gap between neighbouring columns (`x`) and rows (`y`).
    pub spacing: Point,

    /// One column per entry.
    pub column_widths: Vec<f32>,

    /// One row per entry. The first row is conventionally the header.
    pub row_heights: Vec<f32>,

    /// Pad to this many columns by repeating the last width (None = no padding).
    pub column_count: Option<usize>,

    /// Pad to this many rows by repeating the last height (None = no padding).
    pub row_count: Option<usize>,

    /// If false, the built table starts with automatic recomputation suspended.
    pub update_enabled: bool,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            origin: Point::ZERO,
            spacing: Point::ZERO,
            column_widths: Vec::new(),
            row_heights: Vec::new(),
            column_count: None,
            row_count: None,
            update_enabled: true,
        }
    }
}

impl TableConfig {
    /// Create a config with the given column widths.
    pub fn new(column_widths: &[f32]) -> Self {
        Self {
            column_widths: column_widths.to_vec(),
            ..Default::default()
        }
    }

    pub fn origin(mut self, x: f32, y: f32) -> Self {
        self.origin = Point::new(x, y);
        self
    }

    pub fn spacing(mut self, x: f32, y: f32) -> Self {
        self.spacing = Point::new(x, y);
        self
    }

    pub fn row_heights(mut self, heights: &[f32]) -> Self {
        self.row_heights = heights.to_vec();
        self
    }

    pub fn column_count(mut self, count: usize) -> Self {
        self.column_count = Some(count);
        self
    }

    pub fn row_count(mut self, count: usize) -> Self {
        self.row_count = Some(count);
        self
    }

    /// Build the table with automatic recomputation suspended.
    pub fn updates_suspended(mut self) -> Self {
        self.update_enabled = false;
        self
    }

    /// Construct the table. Geometry is computed once either way.
    pub fn build(&self) -> Table {
        let mut table = Table::new(
            self.origin,
            self.spacing,
            &self.column_widths,
            &self.row_heights,
            self.column_count,
            self.row_count,
        );
        table.set_update_enabled(self.update_enabled);
        table
    }
}
