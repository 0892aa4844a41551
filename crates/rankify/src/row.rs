use std::{cmp::Ordering, error::Error, fmt, str::FromStr};

use serde::{Deserialize, Serialize};

/// One project entry of the table. Read-only to the engine.
///
/// Deserializes from the backend's project list (`original_file_name`,
/// `language_code`, `created_at`, `customer_name`, `translator_name`) as well as
/// from the plain column names.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Row {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default)]
    pub state: Option<String>,
    #[serde(default, alias = "original_file_name")]
    pub file: Option<String>,
    #[serde(default, alias = "language_code")]
    pub language: Option<String>,
    #[serde(default, alias = "created_at")]
    pub created: Option<String>,
    #[serde(default, alias = "customer_name")]
    pub customer: Option<String>,
    #[serde(default, alias = "translator_name")]
    pub translator: Option<String>,
}

impl Row {
    pub fn new(state: impl Into<String>) -> Self {
        Self {
            state: Some(state.into()),
            ..Default::default()
        }
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn with_file(mut self, file: impl Into<String>) -> Self {
        self.file = Some(file.into());
        self
    }

    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = Some(language.into());
        self
    }

    pub fn with_created(mut self, created: impl Into<String>) -> Self {
        self.created = Some(created.into());
        self
    }

    pub fn with_customer(mut self, customer: impl Into<String>) -> Self {
        self.customer = Some(customer.into());
        self
    }

    pub fn with_translator(mut self, translator: impl Into<String>) -> Self {
        self.translator = Some(translator.into());
        self
    }

    pub fn value(&self, key: ColumnKey) -> Option<&str> {
        match key {
            ColumnKey::State => self.state.as_deref(),
            ColumnKey::File => self.file.as_deref(),
            ColumnKey::Language => self.language.as_deref(),
            ColumnKey::Created => self.created.as_deref(),
            ColumnKey::Customer => self.customer.as_deref(),
            ColumnKey::Translator => self.translator.as_deref(),
        }
    }

    /// Raw value of a column, absent reading as empty.
    pub fn text(&self, key: ColumnKey) -> &str {
        self.value(key).unwrap_or_default()
    }

    pub fn set_text(&mut self, key: ColumnKey, value: Option<String>) {
        let slot = match key {
            ColumnKey::State => &mut self.state,
            ColumnKey::File => &mut self.file,
            ColumnKey::Language => &mut self.language,
            ColumnKey::Created => &mut self.created,
            ColumnKey::Customer => &mut self.customer,
            ColumnKey::Translator => &mut self.translator,
        };
        *slot = value;
    }
}

/// A sortable column of the projects table.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum ColumnKey {
    #[default]
    State,
    File,
    Language,
    Created,
    Customer,
    Translator,
}

impl ColumnKey {
    pub const ALL: [ColumnKey; 6] = [
        ColumnKey::State,
        ColumnKey::File,
        ColumnKey::Language,
        ColumnKey::Created,
        ColumnKey::Customer,
        ColumnKey::Translator,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ColumnKey::State => "state",
            ColumnKey::File => "file",
            ColumnKey::Language => "language",
            ColumnKey::Created => "created",
            ColumnKey::Customer => "customer",
            ColumnKey::Translator => "translator",
        }
    }
}

impl fmt::Display for ColumnKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownColumn(pub String);

impl fmt::Display for UnknownColumn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown column key {:?}", self.0)
    }
}

impl Error for UnknownColumn {}

impl FromStr for ColumnKey {
    type Err = UnknownColumn;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let raw = raw.trim();
        ColumnKey::ALL
            .into_iter()
            .find(|key| key.as_str() == raw)
            .ok_or_else(|| UnknownColumn(raw.to_string()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    #[default]
    Asc,
    Desc,
}

impl Direction {
    pub fn flip(self) -> Self {
        match self {
            Direction::Asc => Direction::Desc,
            Direction::Desc => Direction::Asc,
        }
    }

    /// Scale a finished comparison: identity for ascending, reversed for
    /// descending.
    pub fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            Direction::Asc => ordering,
            Direction::Desc => ordering.reverse(),
        }
    }
}

/// Direction marker shown on a header cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Indicator {
    Asc,
    Desc,
    #[default]
    None,
}

impl Indicator {
    pub fn as_str(self) -> &'static str {
        match self {
            Indicator::Asc => "asc",
            Indicator::Desc => "desc",
            Indicator::None => "none",
        }
    }
}

impl From<Direction> for Indicator {
    fn from(direction: Direction) -> Self {
        match direction {
            Direction::Asc => Indicator::Asc,
            Direction::Desc => Indicator::Desc,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn column_keys_parse_their_own_names() {
        for key in ColumnKey::ALL {
            assert_eq!(key.as_str().parse::<ColumnKey>(), Ok(key));
        }
        assert_eq!(
            "status".parse::<ColumnKey>(),
            Err(UnknownColumn("status".into()))
        );
    }

    #[test]
    fn backend_field_names_are_accepted() {
        let row: Row = serde_json::from_str(
            r#"{
                "id": "9b1d",
                "language_code": "de",
                "original_file_name": "contract.pdf",
                "state": "ASSIGNED",
                "created_at": "2025-03-01T08:00:00+00:00",
                "customer_id": "c1",
                "customer_name": "acme",
                "translator_id": null,
                "translator_name": null
            }"#,
        )
        .unwrap();

        assert_eq!(row.text(ColumnKey::File), "contract.pdf");
        assert_eq!(row.text(ColumnKey::Language), "de");
        assert_eq!(row.text(ColumnKey::Customer), "acme");
        assert_eq!(row.text(ColumnKey::Translator), "");
        assert_eq!(row.id.as_deref(), Some("9b1d"));
    }

    #[test]
    fn direction_flips_and_scales() {
        assert_eq!(Direction::Asc.flip(), Direction::Desc);
        assert_eq!(Direction::Desc.apply(Ordering::Less), Ordering::Greater);
        assert_eq!(Direction::Asc.apply(Ordering::Less), Ordering::Less);
        assert_eq!(Indicator::from(Direction::Desc).as_str(), "desc");
    }
}
