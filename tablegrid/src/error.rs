use thiserror::Error;

/// Which dimension of the table an error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    Column,
    Row,
}

impl std::fmt::Display for Axis {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Axis::Column => write!(f, "column"),
            Axis::Row => write!(f, "row"),
        }
    }
}

/// Errors raised by table operations.
///
/// The plain table methods log these and fall back to a safe value; the
/// `try_*` methods return them.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GridError {
    /// A width or height that is not strictly positive.
    #[error("{axis} {index} received a size of {size}; sizes must be greater than zero")]
    InvalidSize { axis: Axis, index: usize, size: f32 },

    #[error("column {index} is out of bounds (column count: {count})")]
    ColumnOutOfBounds { index: usize, count: usize },

    /// Reported by mutators, and by row reads whose index is too large to
    /// grow the table to.
    #[error("row {index} is out of bounds (row count: {count})")]
    RowOutOfBounds { index: usize, count: usize },
}

pub type Result<T> = std::result::Result<T, GridError>;
