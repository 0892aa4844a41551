//! Ordering core for the projects table.
//!
//! Everything in here is pure: rows go in, orderings come out. Reattaching
//! rows to a live table is the job of `facade`.

mod comparator;
mod primitives;
mod rank;
mod row;
mod sort;

pub use comparator::{RowComparator, build_comparator};
pub use primitives::{MISSING_TIMESTAMP, Blank, compare_scalar, parse_timestamp};
pub use rank::{UNKNOWN_RANK, WorkflowState, rank_of};
pub use row::{ColumnKey, Direction, Indicator, Row, UnknownColumn};
pub use sort::{apply_sort, default_order, default_sort, sorted_order};
