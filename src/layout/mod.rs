//! Row/percentage layout: cells, the row table, and pixel placement.

pub mod cell;
pub mod resolve;
pub mod table;

pub use cell::{Cell, CellContent, Percentage};
pub use resolve::{place_rows, resolve_row, row_height, usable_size, Placement};
pub use table::LayoutTable;
