//! User settings for ledgerly
//!
//! Manages user preferences: currency symbol, date format, category
//! validation strictness, the error log destination and label overrides.

use std::collections::HashMap;
use std::io::ErrorKind;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use super::paths::LedgerPaths;
use crate::display::strings::TextKey;
use crate::error::FinanceError;
use crate::models::DATE_FORMAT;
use crate::storage::file_io::write_json_atomic;

/// User settings for ledgerly
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Currency symbol appended to amounts
    #[serde(default = "default_currency")]
    pub currency_symbol: String,

    /// Date format for new events (strftime format)
    #[serde(default = "default_date_format")]
    pub date_format: String,

    /// Reject empty and duplicate category names
    #[serde(default)]
    pub strict_categories: bool,

    /// Append log output to this file instead of stderr
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_log: Option<PathBuf>,

    /// Display string overrides keyed by symbolic identifier
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub labels: HashMap<TextKey, String>,
}

fn default_schema_version() -> u32 {
    1
}

fn default_currency() -> String {
    "$".to_string()
}

fn default_date_format() -> String {
    DATE_FORMAT.to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            currency_symbol: default_currency(),
            date_format: default_date_format(),
            strict_categories: false,
            error_log: None,
            labels: HashMap::new(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or return defaults if the file doesn't exist
    ///
    /// Defaults are not written; see [`save`](Self::save).
    pub fn load_or_default(paths: &LedgerPaths) -> Result<Self, FinanceError> {
        let contents = match std::fs::read_to_string(paths.settings_file()) {
            Ok(contents) => contents,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Settings::default()),
            Err(e) => {
                return Err(FinanceError::Io(format!(
                    "Failed to read settings file: {}",
                    e
                )))
            }
        };

        serde_json::from_str(&contents)
            .map_err(|e| FinanceError::Config(format!("Failed to parse settings file: {}", e)))
    }

    /// Save settings to disk
    pub fn save(&self, paths: &LedgerPaths) -> Result<(), FinanceError> {
        paths.ensure_directories()?;
        write_json_atomic(paths.settings_file(), self)
    }
}
