use std::cmp::Ordering;

use crate::{
    primitives::{compare_scalar, parse_timestamp},
    rank::rank_of,
    row::{ColumnKey, Direction, Row},
};

/// Total order over rows for one `(column, direction)` pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RowComparator {
    column: ColumnKey,
    direction: Direction,
}

pub fn build_comparator(column: ColumnKey, direction: Direction) -> RowComparator {
    RowComparator { column, direction }
}

impl RowComparator {
    pub fn column(&self) -> ColumnKey {
        self.column
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Primary key, then file name, then creation time. The direction scales
    /// the whole chain, so a descending sort also reverses the tie-breaks.
    pub fn compare(&self, a: &Row, b: &Row) -> Ordering {
        let ordering = primary(self.column, a, b)
            .then_with(|| compare_scalar(a.text(ColumnKey::File), b.text(ColumnKey::File)))
            .then_with(|| compare_created(a, b));
        self.direction.apply(ordering)
    }
}

fn primary(column: ColumnKey, a: &Row, b: &Row) -> Ordering {
    match column {
        ColumnKey::State => compare_scalar(
            &rank_of(a.text(ColumnKey::State)),
            &rank_of(b.text(ColumnKey::State)),
        ),
        ColumnKey::Created => compare_created(a, b),
        ColumnKey::File | ColumnKey::Language | ColumnKey::Customer | ColumnKey::Translator => {
            compare_scalar(a.text(column), b.text(column))
        }
    }
}

fn compare_created(a: &Row, b: &Row) -> Ordering {
    compare_scalar(
        &parse_timestamp(a.created.as_deref()),
        &parse_timestamp(b.created.as_deref()),
    )
}
