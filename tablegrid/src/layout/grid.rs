use super::{Point, Rect};

/// Immutable geometry snapshot of a table.
///
/// Produced by [`compute`] from the table's origin, spacing and the sizes of
/// its columns and rows. A field's rectangle is never stored; it is the
/// column's horizontal extent combined with the row's vertical extent.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TableGeometry {
    pub table: Rect,
    pub columns: Vec<Rect>,
    pub rows: Vec<Rect>,
}

impl TableGeometry {
    pub fn column(&self, index: usize) -> Option<Rect> {
        self.columns.get(index).copied()
    }

    pub fn row(&self, index: usize) -> Option<Rect> {
        self.rows.get(index).copied()
    }

    /// Rectangle of the cell at `(column, row)`.
    ///
    /// A row that is not part of the snapshot yet (created while updates
    /// were suspended) contributes a zero vertical extent.
    pub fn field(&self, column: usize, row: usize) -> Option<Rect> {
        let col = self.column(column)?;
        let row = self.row(row).unwrap_or_default();
        Some(field_rect(col, row))
    }
}

pub fn field_rect(column: Rect, row: Rect) -> Rect {
    Rect::new(column.x, row.y, column.width, row.height)
}

/// Total extent of `sizes` laid out with `spacing` between neighbours.
pub fn span(sizes: &[f32], spacing: f32) -> f32 {
    if sizes.is_empty() {
        return 0.0;
    }
    let gaps = (sizes.len() - 1) as f32 * spacing;
    sizes.iter().sum::<f32>() + gaps
}

/// Derive every column and row rectangle in one pass.
pub fn compute(origin: Point, spacing: Point, widths: &[f32], heights: &[f32]) -> TableGeometry {
    let table = Rect::new(
        origin.x,
        origin.y,
        span(widths, spacing.x),
        span(heights, spacing.y),
    );

    let mut cursor = table.x;
    let columns = widths
        .iter()
        .map(|&width| {
            let rect = Rect::new(cursor, table.y, width, table.height);
            cursor = rect.right() + spacing.x;
            rect
        })
        .collect();

    let mut cursor = table.y;
    let rows = heights
        .iter()
        .map(|&height| {
            let rect = Rect::new(table.x, cursor, table.width, height);
            cursor = rect.bottom() + spacing.y;
            rect
        })
        .collect();

    TableGeometry {
        table,
        columns,
        rows,
    }
}
