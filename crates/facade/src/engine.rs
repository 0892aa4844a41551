use std::{cmp::Ordering, collections::BTreeSet};

use crossbeam_channel::{Receiver, Sender, unbounded};
use rankify::{ColumnKey, Row, build_comparator, default_order, sorted_order};
use tracing::{debug, trace, warn};
use vaultify::Markup;

use crate::{
    adapter::{TableAdapter, read_rows},
    binder::SortState,
    header::render_headers,
};

/// One sortable projects table.
///
/// Activations are handled one at a time, either directly through
/// [`SortEngine::activate`] or queued on [`SortEngine::activations`] and
/// drained in arrival order by [`SortEngine::pump`].
#[derive(Debug)]
pub struct SortEngine<A: TableAdapter> {
    adapter: A,
    markup: Markup,
    state: SortState,
    bound: BTreeSet<ColumnKey>,
    started: bool,
    activation_sender: Sender<ColumnKey>,
    activation_receiver: Receiver<ColumnKey>,
}

impl<A: TableAdapter> SortEngine<A> {
    pub fn new(adapter: A, markup: Markup) -> Self {
        let (activation_sender, activation_receiver) = unbounded::<ColumnKey>();
        Self {
            adapter,
            markup,
            state: SortState::default(),
            bound: BTreeSet::new(),
            started: false,
            activation_sender,
            activation_receiver,
        }
    }

    /// Bind the sortable headers, apply the default ordering and paint the
    /// initial header state. Does nothing if the table is not there.
    pub fn start(&mut self) {
        if self.started {
            return;
        }
        if !self.adapter.locate(&self.markup.table_id) {
            debug!("table {:?} not found, sorting disabled", self.markup.table_id);
            return;
        }

        for header in 0..self.adapter.header_count() {
            let Some(raw) = self
                .adapter
                .header_key(header, &self.markup.sort_key_attribute)
            else {
                continue;
            };
            match raw.parse::<ColumnKey>() {
                Ok(column) => {
                    self.bound.insert(column);
                }
                Err(e) => warn!("header {header} not bound: {e}"),
            }
        }
        self.started = true;

        self.reorder(default_order);
        render_headers(&mut self.adapter, &self.markup, self.state);
        debug!(
            "sorting enabled on {} columns over {} rows",
            self.bound.len(),
            self.adapter.row_count()
        );
    }

    /// Header activation on `column`.
    pub fn activate(&mut self, column: ColumnKey) {
        if !self.started || !self.bound.contains(&column) {
            trace!("activation on unbound column {column} ignored");
            return;
        }

        self.state = self.state.next(column);
        let comparator = build_comparator(self.state.column, self.state.direction);
        self.reorder(|a, b| comparator.compare(a, b));
        render_headers(&mut self.adapter, &self.markup, self.state);
        trace!("sorted by {} {:?}", self.state.column, self.state.direction);
    }

    /// Activation by the raw key a header declares.
    pub fn activate_key(&mut self, raw: &str) {
        match raw.parse::<ColumnKey>() {
            Ok(column) => self.activate(column),
            Err(e) => trace!("activation ignored: {e}"),
        }
    }

    /// Queue for activations raised outside the engine.
    pub fn activations(&self) -> Sender<ColumnKey> {
        self.activation_sender.clone()
    }

    /// Handle every queued activation, oldest first. Returns how many were
    /// taken off the queue.
    pub fn pump(&mut self) -> usize {
        let mut handled = 0;
        while let Ok(column) = self.activation_receiver.try_recv() {
            self.activate(column);
            handled += 1;
        }
        handled
    }

    pub fn state(&self) -> SortState {
        self.state
    }

    pub fn is_started(&self) -> bool {
        self.started
    }

    pub fn bound_columns(&self) -> impl Iterator<Item = ColumnKey> + '_ {
        self.bound.iter().copied()
    }

    pub fn adapter(&self) -> &A {
        &self.adapter
    }

    pub fn into_adapter(self) -> A {
        self.adapter
    }

    fn reorder<F>(&mut self, compare: F)
    where
        F: FnMut(&Row, &Row) -> Ordering,
    {
        let rows = read_rows(&self.adapter, &self.markup.row_attributes);
        let order = sorted_order(&rows, compare);
        self.adapter.reorder_rows(&order);
    }
}
