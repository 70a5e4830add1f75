//! Export module for ledgerly
//!
//! Provides data export in multiple formats:
//! - CSV: event history (spreadsheet-compatible)
//! - JSON: full snapshot, machine-readable
//! - YAML: full snapshot, human-readable

pub mod csv;
pub mod snapshot;
pub mod yaml;

pub use self::csv::export_history_csv;
pub use snapshot::{export_snapshot_json, Snapshot, EXPORT_SCHEMA_VERSION};
pub use yaml::export_snapshot_yaml;
