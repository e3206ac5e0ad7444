//! HTML tables built from cells keyed by row id and column slug.

mod cell;
mod config;
mod table;

pub use cell::Cell;
pub use config::{DEFAULT_EMPTY_MESSAGE, TableConfig};
pub use table::{CellCallback, RowBuilder, Table, TableBuilder};
