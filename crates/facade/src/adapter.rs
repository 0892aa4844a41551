use rankify::{ColumnKey, Row};
use vaultify::RowAttributes;

/// The only view the engine has of a rendered table.
///
/// Header and row indices are positions in the current rendering; after
/// [`TableAdapter::reorder_rows`] row indices refer to the new order.
pub trait TableAdapter {
    /// True when the container with `table_id` and its body section both exist.
    fn locate(&self, table_id: &str) -> bool;

    fn header_count(&self) -> usize;

    /// Column key a header declares through `attribute`, if any.
    fn header_key(&self, header: usize, attribute: &str) -> Option<String>;

    fn set_header_class(&mut self, header: usize, class: &str, enabled: bool);

    fn set_header_attribute(&mut self, header: usize, name: &str, value: &str);

    fn row_count(&self) -> usize;

    fn row_attribute(&self, row: usize, name: &str) -> Option<String>;

    /// Reattach the existing rows so that position `i` holds the row that was
    /// at `order[i]`. `order` is a permutation of `0..row_count()`.
    fn reorder_rows(&mut self, order: &[usize]);
}

/// Row attribute carrying `key`.
pub fn attribute_name(names: &RowAttributes, key: ColumnKey) -> &str {
    match key {
        ColumnKey::State => &names.state,
        ColumnKey::File => &names.file,
        ColumnKey::Language => &names.language,
        ColumnKey::Created => &names.created,
        ColumnKey::Customer => &names.customer,
        ColumnKey::Translator => &names.translator,
    }
}

/// Materialize every body row, in current order.
pub fn read_rows<A: TableAdapter + ?Sized>(adapter: &A, names: &RowAttributes) -> Vec<Row> {
    (0..adapter.row_count())
        .map(|index| {
            let mut row = Row::default();
            for key in ColumnKey::ALL {
                row.set_text(key, adapter.row_attribute(index, attribute_name(names, key)));
            }
            row
        })
        .collect()
}
