//! YAML Export functionality
//!
//! Exports a full snapshot to YAML for a human-readable backup.

use std::io::Write;

use crate::error::{FinanceError, FinanceResult};
use crate::export::snapshot::Snapshot;
use crate::storage::Storage;

/// Export a full snapshot to YAML format
pub fn export_snapshot_yaml<W: Write>(storage: &Storage, writer: &mut W) -> FinanceResult<()> {
    let snapshot = Snapshot::from_storage(storage);

    writeln!(writer, "# ledgerly export")
        .and_then(|_| writeln!(writer, "# Generated: {}", snapshot.exported_at))
        .and_then(|_| writeln!(writer, "# App Version: {}", snapshot.app_version))
        .and_then(|_| writeln!(writer))
        .map_err(|e| FinanceError::Export(e.to_string()))?;

    serde_yaml::to_writer(writer, &snapshot).map_err(|e| FinanceError::Export(e.to_string()))?;

    Ok(())
}
