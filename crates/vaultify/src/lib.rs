use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use tracing::debug;

pub const SETTINGS_FILE: &str = "settings.json";
pub const TABLE_ID_ENV: &str = "RANKIFY_TABLE_ID";
pub const LOG_ENV: &str = "RANKIFY_LOG";

/// Everything the engine can be told from outside.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub markup: Markup,
    pub log_filter: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            markup: Markup::default(),
            log_filter: "ignition=info,rankify=info,facade=info,vaultify=info,off".into(),
        }
    }
}

/// Names used by the rendered projects table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Markup {
    pub table_id: String,
    /// Header attribute holding the column key. Headers without it are not
    /// sortable.
    pub sort_key_attribute: String,
    pub direction_attribute: String,
    pub sortable_class: String,
    pub active_class: String,
    pub row_attributes: RowAttributes,
}

impl Default for Markup {
    fn default() -> Self {
        Self {
            table_id: "projects-table".into(),
            sort_key_attribute: "data-sort-key".into(),
            direction_attribute: "data-sort-dir".into(),
            sortable_class: "sortable".into(),
            active_class: "active".into(),
            row_attributes: RowAttributes::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RowAttributes {
    pub state: String,
    pub file: String,
    pub language: String,
    pub created: String,
    pub customer: String,
    pub translator: String,
}

impl Default for RowAttributes {
    fn default() -> Self {
        Self {
            state: "data-state".into(),
            file: "data-file".into(),
            language: "data-language".into(),
            created: "data-created".into(),
            customer: "data-customer".into(),
            translator: "data-translator".into(),
        }
    }
}

impl Settings {
    /// Explicit file if given, else the per-user config file if present, else
    /// defaults. Environment overrides are applied last.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        let settings = match explicit {
            Some(path) => Self::from_file(path)?,
            None => match default_path().filter(|path| path.is_file()) {
                Some(path) => Self::from_file(&path)?,
                None => {
                    debug!("no settings file, using defaults");
                    Self::default()
                }
            },
        };
        Ok(settings.with_overrides(|key| std::env::var(key).ok()))
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path)
            .with_context(|| format!("failed to read settings from {}", path.display()))?;
        let settings = serde_json::from_str(&raw)
            .with_context(|| format!("invalid settings in {}", path.display()))?;
        debug!("settings loaded from {}", path.display());
        Ok(settings)
    }

    pub fn with_overrides<F>(mut self, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(table_id) = lookup(TABLE_ID_ENV).filter(|v| !v.trim().is_empty()) {
            self.markup.table_id = table_id.trim().to_string();
        }
        if let Some(filter) = lookup(LOG_ENV).filter(|v| !v.trim().is_empty()) {
            self.log_filter = filter;
        }
        self
    }
}

/// `settings.json` in the platform config directory.
pub fn default_path() -> Option<PathBuf> {
    ProjectDirs::from("io.github", "oops418", "rankify")
        .map(|dirs| dirs.config_dir().join(SETTINGS_FILE))
}
