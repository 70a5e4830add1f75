//! Path management for ledgerly
//!
//! Every document lives under a single base directory, which defaults to the
//! process working directory:
//!
//! - `categories.json`: the category list
//! - `finances.json`: the ledger (events plus cached totals)
//! - `settings.json`: user preferences

use std::path::PathBuf;

use crate::error::FinanceError;

/// File name of the category document
pub const CATEGORIES_FILE: &str = "categories.json";

/// File name of the ledger document
pub const LEDGER_FILE: &str = "finances.json";

/// File name of the settings document
pub const SETTINGS_FILE: &str = "settings.json";

/// Manages all paths used by ledgerly
#[derive(Debug, Clone)]
pub struct LedgerPaths {
    /// Base directory holding every document
    base_dir: PathBuf,
}

impl LedgerPaths {
    /// Create paths rooted at the current working directory
    ///
    /// # Errors
    ///
    /// Returns an error if the working directory cannot be determined.
    pub fn new() -> Result<Self, FinanceError> {
        let base_dir = std::env::current_dir()
            .map_err(|e| FinanceError::Config(format!("Cannot determine working directory: {}", e)))?;
        Ok(Self { base_dir })
    }

    /// Create paths with a custom base directory
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    /// Get the base directory
    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Get the path to categories.json
    pub fn categories_file(&self) -> PathBuf {
        self.base_dir.join(CATEGORIES_FILE)
    }

    /// Get the path to finances.json
    pub fn ledger_file(&self) -> PathBuf {
        self.base_dir.join(LEDGER_FILE)
    }

    /// Get the path to settings.json
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join(SETTINGS_FILE)
    }

    /// Ensure the base directory exists
    pub fn ensure_directories(&self) -> Result<(), FinanceError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| FinanceError::Io(format!("Failed to create base directory: {}", e)))
    }
}
