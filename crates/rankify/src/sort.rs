use std::cmp::Ordering;

use tracing::trace;

use crate::{
    primitives::{compare_scalar, parse_timestamp},
    rank::rank_of,
    row::{ColumnKey, Row},
};

/// The start-up ordering: rank ascending, newest first within a rank.
///
/// The newest-first tie-break is fixed, which is why this is not just the
/// general comparator with `(state, asc)`.
pub fn default_order(a: &Row, b: &Row) -> Ordering {
    compare_scalar(
        &rank_of(a.text(ColumnKey::State)),
        &rank_of(b.text(ColumnKey::State)),
    )
    .then_with(|| {
        compare_scalar(
            &parse_timestamp(b.created.as_deref()),
            &parse_timestamp(a.created.as_deref()),
        )
    })
}

pub fn default_sort(rows: &mut [Row]) {
    apply_sort(rows, default_order);
}

/// Stable in-place sort.
pub fn apply_sort<F>(rows: &mut [Row], compare: F)
where
    F: FnMut(&Row, &Row) -> Ordering,
{
    trace!("sorting {} rows", rows.len());
    rows.sort_by(compare);
}

/// Stable permutation of `rows`: entry `i` is the current index of the row
/// that belongs at position `i`.
pub fn sorted_order<F>(rows: &[Row], mut compare: F) -> Vec<usize>
where
    F: FnMut(&Row, &Row) -> Ordering,
{
    let mut order: Vec<usize> = (0..rows.len()).collect();
    order.sort_by(|&a, &b| compare(&rows[a], &rows[b]));
    order
}
