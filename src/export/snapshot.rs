//! Full snapshot of the tracker's data with schema versioning

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::io::Write;

use crate::error::{FinanceError, FinanceResult};
use crate::models::{Category, Event};
use crate::reports::aggregate;
use crate::storage::Storage;

/// Current export schema version
pub const EXPORT_SCHEMA_VERSION: &str = "1.0.0";

/// Categories, events and totals at one point in time
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Snapshot {
    /// Schema version for compatibility checking
    pub schema_version: String,

    /// Export timestamp
    pub exported_at: DateTime<Utc>,

    /// Application version that created the export
    pub app_version: String,

    pub categories: Vec<Category>,

    /// Events in entry order
    pub events: Vec<Event>,

    pub total_income: f64,
    pub total_expenses: f64,
    pub balance: f64,
}

impl Snapshot {
    /// Capture the current state of storage
    pub fn from_storage(storage: &Storage) -> Self {
        let events = storage.ledger.events().to_vec();
        let totals = aggregate::totals(&events);

        Self {
            schema_version: EXPORT_SCHEMA_VERSION.to_string(),
            exported_at: Utc::now(),
            app_version: env!("CARGO_PKG_VERSION").to_string(),
            categories: storage.categories.list().to_vec(),
            events,
            total_income: totals.income,
            total_expenses: totals.expenses,
            balance: totals.balance,
        }
    }
}

/// Export the snapshot as pretty-printed JSON
pub fn export_snapshot_json<W: Write>(storage: &Storage, writer: &mut W) -> FinanceResult<()> {
    let snapshot = Snapshot::from_storage(storage);
    serde_json::to_writer_pretty(&mut *writer, &snapshot)
        .map_err(|e| FinanceError::Export(e.to_string()))?;
    writeln!(writer).map_err(|e| FinanceError::Export(e.to_string()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{LedgerPaths, Settings};
    use crate::models::Kind;
    use tempfile::TempDir;

    #[test]
    fn test_snapshot_from_storage() {
        let temp_dir = TempDir::new().unwrap();
        let paths = LedgerPaths::with_base_dir(temp_dir.path().to_path_buf());
        let mut storage = Storage::new(paths, &Settings::default()).unwrap();
        storage.load_all().unwrap();
        storage.categories.add("Salary", Kind::Income).unwrap();
        storage
            .ledger
            .add_event(Kind::Income, "1000", "Salary", "01.03.2024")
            .unwrap();
        storage
            .ledger
            .add_event(Kind::Expense, "250", "Rent", "02.03.2024")
            .unwrap();

        let snapshot = Snapshot::from_storage(&storage);
        assert_eq!(snapshot.schema_version, EXPORT_SCHEMA_VERSION);
        assert_eq!(snapshot.categories.len(), 1);
        assert_eq!(snapshot.events.len(), 2);
        assert_eq!(snapshot.balance, 750.0);

        let mut output = Vec::new();
        export_snapshot_json(&storage, &mut output).unwrap();
        let parsed: Snapshot = serde_json::from_slice(&output).unwrap();
        assert_eq!(parsed.events, snapshot.events);
    }
}
