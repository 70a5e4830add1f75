//! Storage layer for ledgerly
//!
//! Provides JSON file storage with atomic writes. Categories and the ledger
//! are independent documents with independent lifecycles.

pub mod categories;
pub mod file_io;
pub mod ledger;

pub use categories::CategoryStore;
pub use file_io::{read_json, write_json_atomic};
pub use ledger::{LedgerData, LedgerStore};

use crate::config::paths::LedgerPaths;
use crate::config::settings::Settings;
use crate::error::FinanceError;

/// Main storage coordinator that owns both stores
#[derive(Debug)]
pub struct Storage {
    paths: LedgerPaths,
    pub categories: CategoryStore,
    pub ledger: LedgerStore,
}

impl Storage {
    /// Create a new Storage instance
    pub fn new(paths: LedgerPaths, settings: &Settings) -> Result<Self, FinanceError> {
        paths.ensure_directories()?;

        Ok(Self {
            categories: CategoryStore::new(paths.categories_file())
                .with_strict_validation(settings.strict_categories),
            ledger: LedgerStore::new(paths.ledger_file()),
            paths,
        })
    }

    /// Get the paths configuration
    pub fn paths(&self) -> &LedgerPaths {
        &self.paths
    }

    /// Load both documents from disk
    ///
    /// Unreadable categories recover to an empty list; an unreadable ledger
    /// is returned as an error.
    pub fn load_all(&mut self) -> Result<(), FinanceError> {
        self.categories.load()?;
        self.ledger.load()?;
        Ok(())
    }
}
