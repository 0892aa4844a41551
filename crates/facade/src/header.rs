use rankify::{ColumnKey, Indicator};
use tracing::trace;
use vaultify::Markup;

use crate::{adapter::TableAdapter, binder::SortState};

/// Reflect `state` onto every sortable header: all get the sortable class,
/// only the active one gets the active class and a direction.
pub fn render_headers<A: TableAdapter + ?Sized>(
    adapter: &mut A,
    markup: &Markup,
    state: SortState,
) {
    for header in 0..adapter.header_count() {
        let Some(key) = adapter
            .header_key(header, &markup.sort_key_attribute)
            .and_then(|raw| raw.parse::<ColumnKey>().ok())
        else {
            continue;
        };
        let active = key == state.column;
        let indicator = if active {
            Indicator::from(state.direction)
        } else {
            Indicator::None
        };

        adapter.set_header_class(header, &markup.sortable_class, true);
        adapter.set_header_class(header, &markup.active_class, active);
        adapter.set_header_attribute(header, &markup.direction_attribute, indicator.as_str());
    }
    trace!("headers now show {} {:?}", state.column, state.direction);
}
