//! The table layout engine.
//!
//! A [`Table`] owns its columns and rows and caches a [`TableGeometry`]
//! snapshot that is recomputed after every mutation while updates are
//! enabled.
//!
//! Row reads grow the table: asking for the geometry of a row index past the
//! last row creates the missing rows first, repeating the last row's height.
//! Callers render one row per entry of their backing collection and rely on
//! this, so every row read takes `&mut self`.

mod entity;

pub use entity::{Column, Field, Row};

use crate::error::{Axis, GridError, Result};
use crate::event::PointerState;
use crate::hit;
use crate::layout::{compute, Point, Rect, TableGeometry};

/// Height used for rows created when the table has no row to copy from.
pub const DEFAULT_ROW_HEIGHT: f32 = 32.0;

/// Width substituted for a rejected initial column width.
pub const DEFAULT_COLUMN_WIDTH: f32 = 100.0;

#[derive(Debug, Clone)]
pub struct Table {
    origin: Point,
    spacing: Point,
    columns: Vec<Column>,
    rows: Vec<Row>,
    geometry: TableGeometry,
    update_enabled: bool,
    dirty: bool,
}

impl Table {
    /// Build a table with one column per entry of `column_widths` and one row
    /// per entry of `row_heights`.
    ///
    /// `column_count` and `row_count` pad the table up to that many columns
    /// or rows by repeating the last size. A header row counts towards
    /// `row_count`. Geometry is computed once, after everything is added.
    ///
    /// A size that is not strictly positive is logged and replaced rather
    /// than kept at zero: a column takes the previous column's width (or
    /// [`DEFAULT_COLUMN_WIDTH`]) and a row takes the previous row's height
    /// (or [`DEFAULT_ROW_HEIGHT`]).
    pub fn new(
        origin: Point,
        spacing: Point,
        column_widths: &[f32],
        row_heights: &[f32],
        column_count: Option<usize>,
        row_count: Option<usize>,
    ) -> Self {
        let mut table = Self {
            origin,
            spacing,
            columns: Vec::with_capacity(column_count.unwrap_or(0).max(column_widths.len())),
            rows: Vec::with_capacity(row_count.unwrap_or(0).max(row_heights.len())),
            geometry: TableGeometry::default(),
            update_enabled: true,
            dirty: true,
        };

        for &width in column_widths {
            let width = table.checked_initial_size(Axis::Column, width);
            table.columns.push(Column::new(width));
        }
        if let Some(count) = column_count {
            let width = table
                .columns
                .last()
                .map_or(DEFAULT_COLUMN_WIDTH, Column::width);
            let missing = count.saturating_sub(table.columns.len());
            table
                .columns
                .extend(std::iter::repeat(Column::new(width)).take(missing));
        }

        for &height in row_heights {
            let height = table.checked_initial_size(Axis::Row, height);
            table.rows.push(Row::new(height));
        }
        if let Some(count) = row_count {
            let height = table.last_row_height();
            let missing = count.saturating_sub(table.rows.len());
            table
                .rows
                .extend(std::iter::repeat(Row::new(height)).take(missing));
        }

        table.recompute();
        table
    }

    fn checked_initial_size(&self, axis: Axis, size: f32) -> f32 {
        if is_valid_size(size) {
            return size;
        }
        let (index, fallback) = match axis {
            Axis::Column => (
                self.columns.len(),
                self.columns.last().map_or(DEFAULT_COLUMN_WIDTH, Column::width),
            ),
            Axis::Row => (self.rows.len(), self.last_row_height()),
        };
        log::error!(
            "[table] {}; using {fallback} instead",
            GridError::InvalidSize { axis, index, size }
        );
        fallback
    }

    // ------------------------------------------------------------------
    // Updating
    // ------------------------------------------------------------------

    /// Whether mutations recompute the geometry immediately.
    pub fn update_enabled(&self) -> bool {
        self.update_enabled
    }

    /// Suspend or resume automatic recomputation.
    ///
    /// Re-enabling does not recompute by itself; call [`Table::force_update`]
    /// or make another mutation.
    pub fn set_update_enabled(&mut self, enabled: bool) {
        self.update_enabled = enabled;
    }

    /// True while the cached geometry lags behind the recorded sizes.
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Recompute the geometry if updates are enabled.
    pub fn update(&mut self) {
        if self.update_enabled {
            self.recompute();
        }
    }

    /// Recompute the geometry even while updates are suspended.
    pub fn force_update(&mut self) {
        self.recompute();
    }

    fn invalidate(&mut self) {
        self.dirty = true;
        self.update();
    }

    fn recompute(&mut self) {
        let widths: Vec<f32> = self.columns.iter().map(Column::width).collect();
        let heights: Vec<f32> = self.rows.iter().map(Row::height).collect();
        self.geometry = compute(self.origin, self.spacing, &widths, &heights);
        self.dirty = false;
        log::trace!(
            "[table] recomputed {} columns x {} rows, table rect {:?}",
            widths.len(),
            heights.len(),
            self.geometry.table
        );
    }

    // ------------------------------------------------------------------
    // Mutation
    // ------------------------------------------------------------------

    pub fn set_spacing(&mut self, spacing: Point) {
        if spacing == self.spacing {
            return;
        }
        self.spacing = spacing;
        self.invalidate();
    }

    pub fn set_origin(&mut self, origin: Point) {
        if origin == self.origin {
            return;
        }
        self.origin = origin;
        self.invalidate();
    }

    /// Resize a column, logging and ignoring invalid input.
    pub fn set_column_width(&mut self, index: usize, width: f32) {
        if let Err(err) = self.try_set_column_width(index, width) {
            log::error!("[table] {err}");
        }
    }

    pub fn try_set_column_width(&mut self, index: usize, width: f32) -> Result<()> {
        let count = self.columns.len();
        let column = self
            .columns
            .get_mut(index)
            .ok_or(GridError::ColumnOutOfBounds { index, count })?;
        if width == column.width {
            return Ok(());
        }
        if !is_valid_size(width) {
            return Err(GridError::InvalidSize {
                axis: Axis::Column,
                index,
                size: width,
            });
        }
        column.width = width;
        self.invalidate();
        Ok(())
    }

    /// Resize a row, logging and ignoring invalid input.
    ///
    /// Unlike reads, this never creates rows.
    pub fn set_row_height(&mut self, index: usize, height: f32) {
        if let Err(err) = self.try_set_row_height(index, height) {
            log::error!("[table] {err}");
        }
    }

    pub fn try_set_row_height(&mut self, index: usize, height: f32) -> Result<()> {
        let count = self.rows.len();
        let row = self
            .rows
            .get_mut(index)
            .ok_or(GridError::RowOutOfBounds { index, count })?;
        if height == row.height {
            return Ok(());
        }
        if !is_valid_size(height) {
            return Err(GridError::InvalidSize {
                axis: Axis::Row,
                index,
                size: height,
            });
        }
        row.height = height;
        self.invalidate();
        Ok(())
    }

    /// Append `count` rows of `height`, recomputing once at the end.
    pub fn add_row(&mut self, height: f32, count: usize) {
        if count == 0 {
            return;
        }
        if !is_valid_size(height) {
            log::error!(
                "[table] {}",
                GridError::InvalidSize {
                    axis: Axis::Row,
                    index: self.rows.len(),
                    size: height,
                }
            );
            return;
        }

        self.rows
            .extend(std::iter::repeat(Row::new(height)).take(count));
        self.invalidate();
    }

    /// Remove the bottom row.
    ///
    /// The caller keeps whatever collection the rows mirror in sync.
    pub fn remove_last_row(&mut self) -> Option<Row> {
        let row = self.rows.pop()?;
        // The cached rects must never outnumber the rows, even while
        // updates are suspended.
        self.geometry.rows.truncate(self.rows.len());
        self.invalidate();
        Some(row)
    }

    /// Create rows up to and including `index`.
    ///
    /// Fails without growing when the row count cannot be represented or
    /// the rows cannot be allocated.
    fn grow_rows_to(&mut self, index: usize) -> Result<()> {
        let count = self.rows.len();
        if index < count {
            return Ok(());
        }
        let out_of_bounds = GridError::RowOutOfBounds { index, count };
        let missing = index
            .checked_add(1)
            .ok_or_else(|| out_of_bounds.clone())?
            - count;
        self.rows
            .try_reserve(missing)
            .map_err(|_| out_of_bounds)?;
        log::trace!("[table] row {index} requested, creating {missing} rows");
        self.add_row(self.last_row_height(), missing);
        Ok(())
    }

    // ------------------------------------------------------------------
    // Reads
    // ------------------------------------------------------------------

    pub fn origin(&self) -> Point {
        self.origin
    }

    pub fn spacing(&self) -> Point {
        self.spacing
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn column_width(&self, index: usize) -> Option<f32> {
        self.columns.get(index).map(Column::width)
    }

    pub fn row_height(&self, index: usize) -> Option<f32> {
        self.rows.get(index).map(Row::height)
    }

    /// The height new rows inherit.
    pub fn last_row_height(&self) -> f32 {
        self.rows.last().map_or(DEFAULT_ROW_HEIGHT, Row::height)
    }

    pub fn geometry(&self) -> &TableGeometry {
        &self.geometry
    }

    pub fn table_rect(&self) -> Rect {
        self.geometry.table
    }

    /// Lower edge of the table.
    pub fn bottom(&self) -> f32 {
        self.geometry.table.bottom()
    }

    pub fn column_rect(&self, index: usize) -> Option<Rect> {
        self.geometry.column(index)
    }

    /// Address a cell, creating rows up to `row` when needed.
    ///
    /// Returns `None` when `column` is out of bounds or `row` cannot be
    /// created; no rows are created in that case.
    pub fn field(&mut self, column: usize, row: usize) -> Option<Field> {
        self.try_field(column, row)
            .map_err(|err| log::error!("[table] {err}"))
            .ok()
    }

    fn try_field(&mut self, column: usize, row: usize) -> Result<Field> {
        let count = self.columns.len();
        if column >= count {
            return Err(GridError::ColumnOutOfBounds { index: column, count });
        }
        self.grow_rows_to(row)?;
        Ok(Field::new(column, row))
    }

    pub fn try_field_rect(&mut self, column: usize, row: usize) -> Result<Rect> {
        let field = self.try_field(column, row)?;
        Ok(field.rect(self))
    }

    /// Rectangle of the cell at `(column, row)`.
    ///
    /// An out-of-bounds column, or a row index too large to create, is
    /// logged and yields [`Rect::INVALID`].
    pub fn field_rect(&mut self, column: usize, row: usize) -> Rect {
        self.try_field_rect(column, row).unwrap_or_else(|err| {
            log::error!("[table] {err}");
            Rect::INVALID
        })
    }

    /// The cell of `column` in the first row.
    pub fn header_rect(&mut self, column: usize) -> Rect {
        self.field_rect(column, 0)
    }

    /// Full-width rectangle of `row`, creating rows up to it when needed.
    pub fn row_rect(&mut self, row: usize) -> Rect {
        if let Err(err) = self.grow_rows_to(row) {
            log::error!("[table] {err}");
            return Rect::INVALID;
        }
        self.geometry.row(row).unwrap_or_default()
    }

    pub fn is_mouse_over_row(&mut self, row: usize, pointer: &PointerState) -> bool {
        let rect = self.row_rect(row);
        pointer.is_over(rect)
    }

    /// Index of the row under the pointer, if any. Never creates rows.
    pub fn hovered_row(&self, pointer: &PointerState) -> Option<usize> {
        hit::row_at(&self.geometry, pointer.position()?)
    }

    /// Cell under the pointer, if any. Never creates rows.
    pub fn hovered_field(&self, pointer: &PointerState) -> Option<Field> {
        let (column, row) = hit::field_at(&self.geometry, pointer.position()?)?;
        Some(Field::new(column, row))
    }

    /// Log the current geometry at debug level.
    pub fn debug_dump(&self) {
        let rows: Vec<String> = self
            .geometry
            .rows
            .iter()
            .map(|r| format!("({}, {}, {}, {})", r.x, r.y, r.width, r.height))
            .collect();
        log::debug!(
            "[table] table rect {:?}, columns {}, rows {}, dirty {}, row rects: {}",
            self.geometry.table,
            self.columns.len(),
            self.rows.len(),
            self.dirty,
            rows.join("  ")
        );
    }
}

fn is_valid_size(size: f32) -> bool {
    size > 0.0 && size.is_finite()
}
