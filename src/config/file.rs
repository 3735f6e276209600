// src/config/file.rs

use crate::constants::CONFIG_FILE_NAMES;
use crate::core_types::{OutputFormat, SortMode};
use crate::errors::{ConfigError, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// A comma-separated string or an explicit list.
///
/// Both `ext = "ts,tsx"` and `ext = ["ts", "tsx"]` are accepted.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum ListValue {
    Joined(String),
    Items(Vec<String>),
}

impl ListValue {
    /// Normalizes to the comma-separated form the CLI uses.
    pub fn into_joined(self) -> String {
        match self {
            ListValue::Joined(s) => s,
            ListValue::Items(items) => items.join(","),
        }
    }
}

/// Options read from `tscribe.config.toml` or `tscribe.config.json`.
///
/// Every field is optional; an explicit CLI flag always wins over the file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields, rename_all = "camelCase")]
pub struct FileConfig {
    pub src: Option<String>,
    pub out: Option<String>,
    pub zip: Option<String>,
    #[serde(alias = "extensions")]
    pub ext: Option<ListValue>,
    pub ignore: Option<ListValue>,
    pub heading: Option<String>,
    pub format: Option<OutputFormat>,
    pub sort: Option<SortMode>,
    pub list: Option<bool>,
    pub watch: Option<bool>,
    pub verbose: Option<bool>,
    pub quiet: Option<bool>,
    pub transform: Option<String>,
    pub no_fast_path: Option<bool>,
}

impl FileConfig {
    /// Parses the file at `path`. The format follows its extension: `.json`
    /// is JSON, anything else is TOML.
    pub fn load(path: &Path) -> Result<Self> {
        let file_error = |reason: String| ConfigError::ConfigFile {
            path: path.display().to_string(),
            reason,
        };

        let text = fs::read_to_string(path).map_err(|e| file_error(e.to_string()))?;
        let is_json = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

        let parsed = if is_json {
            serde_json::from_str(&text).map_err(|e| file_error(e.to_string()))?
        } else {
            toml::from_str(&text).map_err(|e| file_error(e.to_string()))?
        };
        Ok(parsed)
    }

    /// Looks for a config file in `dir`, in [`CONFIG_FILE_NAMES`] order.
    pub fn find_in(dir: &Path) -> Option<PathBuf> {
        CONFIG_FILE_NAMES
            .iter()
            .map(|name| dir.join(name))
            .find(|candidate| candidate.is_file())
    }
}
