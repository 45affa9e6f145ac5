pub mod config;
pub mod error;
pub mod event;
pub mod hit;
pub mod layout;
pub mod table;

pub use config::TableConfig;
pub use error::{Axis, GridError};
pub use event::PointerState;
pub use hit::{column_at, field_at, row_at};
pub use layout::{Point, Rect, TableGeometry};
pub use table::{Column, Field, Row, Table, DEFAULT_COLUMN_WIDTH, DEFAULT_ROW_HEIGHT};
