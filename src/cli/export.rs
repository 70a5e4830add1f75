//! Export CLI command

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use clap::ValueEnum;

use crate::error::{FinanceError, FinanceResult};
use crate::export::{export_history_csv, export_snapshot_json, export_snapshot_yaml};
use crate::storage::Storage;

/// Export output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    /// Event history as CSV
    Csv,
    /// Full snapshot as JSON
    Json,
    /// Full snapshot as YAML
    Yaml,
}

/// Write an export to a file, or stdout when no file is given
pub fn handle_export(
    storage: &Storage,
    format: ExportFormat,
    output: Option<PathBuf>,
) -> FinanceResult<()> {
    match output {
        Some(path) => {
            let file = File::create(&path).map_err(|e| {
                FinanceError::Export(format!("Failed to create {}: {}", path.display(), e))
            })?;
            let mut writer = BufWriter::new(file);
            write_export(storage, format, &mut writer)?;
            writer
                .flush()
                .map_err(|e| FinanceError::Export(e.to_string()))?;
            println!("Exported to {}", path.display());
        }
        None => {
            let stdout = io::stdout();
            let mut writer = stdout.lock();
            write_export(storage, format, &mut writer)?;
        }
    }
    Ok(())
}

fn write_export<W: Write>(storage: &Storage, format: ExportFormat, writer: &mut W) -> FinanceResult<()> {
    match format {
        ExportFormat::Csv => export_history_csv(storage, writer),
        ExportFormat::Json => export_snapshot_json(storage, writer),
        ExportFormat::Yaml => export_snapshot_yaml(storage, writer),
    }
}
