//! Listing domain - dataset records, column schema and the shared table

mod entity;
mod source;
mod table;

pub use entity::{CellValue, Column, ColumnKind, Listing, READY_TO_MOVE};
pub use source::{in_memory::InMemoryListingsSource, ListingsSource};
pub use table::ListingsTable;
