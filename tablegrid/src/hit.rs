use crate::layout::{Point, Rect, TableGeometry};

/// Find the row whose rectangle contains `point`.
/// Points in the spacing between rows, or outside the table, hit nothing.
pub fn row_at(geometry: &TableGeometry, point: Point) -> Option<usize> {
    let index = band_at(&geometry.rows, point.y, |r| (r.top(), r.bottom()))?;
    let rect = geometry.rows.get(index)?;
    rect.contains(point).then_some(index)
}

/// Find the column whose rectangle contains `point`.
pub fn column_at(geometry: &TableGeometry, point: Point) -> Option<usize> {
    let index = band_at(&geometry.columns, point.x, |r| (r.left(), r.right()))?;
    let rect = geometry.columns.get(index)?;
    rect.contains(point).then_some(index)
}

/// Find the `(column, row)` cell containing `point`.
pub fn field_at(geometry: &TableGeometry, point: Point) -> Option<(usize, usize)> {
    Some((column_at(geometry, point)?, row_at(geometry, point)?))
}

// Rects along one axis are laid out in increasing order, so the first band
// whose far edge lies past `pos` is the only candidate.
fn band_at(rects: &[Rect], pos: f32, edges: impl Fn(&Rect) -> (f32, f32)) -> Option<usize> {
    let index = rects.partition_point(|r| edges(r).1 <= pos);
    let (start, end) = edges(rects.get(index)?);
    (pos >= start && pos < end).then_some(index)
}
