//! Binds the ordering core to a rendered projects table.

mod adapter;
mod binder;
mod engine;
mod header;
mod memory;

pub use adapter::{TableAdapter, attribute_name, read_rows};
pub use binder::SortState;
pub use engine::SortEngine;
pub use header::render_headers;
pub use memory::{MemoryHeader, MemoryRow, MemoryTable};
