use std::collections::{BTreeMap, BTreeSet};

use rankify::{ColumnKey, Row};
use serde::{Deserialize, Serialize};
use tracing::warn;
use vaultify::Markup;

use crate::adapter::{TableAdapter, attribute_name};

/// Headless stand-in for a rendered projects table.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemoryTable {
    pub id: Option<String>,
    pub headers: Vec<MemoryHeader>,
    /// `None` models a table without a body section.
    pub body: Option<Vec<MemoryRow>>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemoryHeader {
    pub label: String,
    pub attributes: BTreeMap<String, String>,
    pub classes: BTreeSet<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemoryRow {
    pub key: Option<String>,
    pub attributes: BTreeMap<String, String>,
}

impl MemoryHeader {
    pub fn has_class(&self, class: &str) -> bool {
        self.classes.contains(class)
    }

    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }
}

impl MemoryTable {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: Some(id.into()),
            headers: vec![],
            body: Some(vec![]),
        }
    }

    /// The projects table as the web frontend renders it: one sortable header
    /// per column, then a plain "Actions" header.
    pub fn projects(markup: &Markup, rows: &[Row]) -> Self {
        let mut table = Self::new(markup.table_id.clone());
        for key in ColumnKey::ALL {
            table = table.with_header(
                label_of(key),
                Some((markup.sort_key_attribute.as_str(), key.as_str())),
            );
        }
        table = table.with_header("Actions", None);
        for row in rows {
            table.push_row(markup, row);
        }
        table
    }

    pub fn with_header(
        mut self,
        label: impl Into<String>,
        sort_key: Option<(&str, &str)>,
    ) -> Self {
        let mut header = MemoryHeader {
            label: label.into(),
            ..Default::default()
        };
        if let Some((attribute, key)) = sort_key {
            header.attributes.insert(attribute.to_string(), key.to_string());
        }
        self.headers.push(header);
        self
    }

    pub fn without_body(mut self) -> Self {
        self.body = None;
        self
    }

    pub fn push_row(&mut self, markup: &Markup, row: &Row) {
        let attributes = ColumnKey::ALL
            .into_iter()
            .filter_map(|key| {
                let value = row.value(key)?;
                Some((
                    attribute_name(&markup.row_attributes, key).to_string(),
                    value.to_string(),
                ))
            })
            .collect();
        self.body.get_or_insert_with(Vec::new).push(MemoryRow {
            key: row.id.clone(),
            attributes,
        });
    }

    pub fn rows(&self) -> &[MemoryRow] {
        self.body.as_deref().unwrap_or_default()
    }

    /// Row keys in current display order; rows without a key are skipped.
    pub fn row_keys(&self) -> Vec<&str> {
        self.rows()
            .iter()
            .filter_map(|row| row.key.as_deref())
            .collect()
    }

    pub fn header(&self, label: &str) -> Option<&MemoryHeader> {
        self.headers.iter().find(|header| header.label == label)
    }
}

fn label_of(key: ColumnKey) -> &'static str {
    match key {
        ColumnKey::State => "State",
        ColumnKey::File => "File",
        ColumnKey::Language => "Language",
        ColumnKey::Created => "Created",
        ColumnKey::Customer => "Customer",
        ColumnKey::Translator => "Translator",
    }
}

impl TableAdapter for MemoryTable {
    fn locate(&self, table_id: &str) -> bool {
        self.id.as_deref() == Some(table_id) && self.body.is_some()
    }

    fn header_count(&self) -> usize {
        self.headers.len()
    }

    fn header_key(&self, header: usize, attribute: &str) -> Option<String> {
        self.headers.get(header)?.attributes.get(attribute).cloned()
    }

    fn set_header_class(&mut self, header: usize, class: &str, enabled: bool) {
        if let Some(header) = self.headers.get_mut(header) {
            if enabled {
                header.classes.insert(class.to_string());
            } else {
                header.classes.remove(class);
            }
        }
    }

    fn set_header_attribute(&mut self, header: usize, name: &str, value: &str) {
        if let Some(header) = self.headers.get_mut(header) {
            header.attributes.insert(name.to_string(), value.to_string());
        }
    }

    fn row_count(&self) -> usize {
        self.rows().len()
    }

    fn row_attribute(&self, row: usize, name: &str) -> Option<String> {
        self.rows().get(row)?.attributes.get(name).cloned()
    }

    fn reorder_rows(&mut self, order: &[usize]) {
        let Some(body) = self.body.as_mut() else {
            return;
        };
        if order.len() != body.len() {
            warn!(
                "ignoring reorder of {} rows with a {}-entry order",
                body.len(),
                order.len()
            );
            return;
        }
        let mut slots: Vec<Option<MemoryRow>> = body.drain(..).map(Some).collect();
        body.extend(
            order
                .iter()
                .filter_map(|&index| slots.get_mut(index).and_then(Option::take)),
        );
        // anything a malformed order skipped goes back at the end
        body.extend(slots.into_iter().flatten());
    }
}
