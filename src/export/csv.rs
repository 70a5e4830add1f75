//! CSV Export functionality
//!
//! Exports the event history in entry order, one row per event.

use serde::Serialize;
use std::io::Write;

use crate::error::{FinanceError, FinanceResult};
use crate::storage::Storage;

#[derive(Debug, Serialize)]
struct HistoryRow<'a> {
    #[serde(rename = "Number")]
    number: usize,
    #[serde(rename = "Date")]
    date: &'a str,
    #[serde(rename = "Category")]
    category: &'a str,
    #[serde(rename = "Type")]
    kind: &'static str,
    #[serde(rename = "Amount")]
    amount: f64,
}

/// Export all events to CSV
pub fn export_history_csv<W: Write>(storage: &Storage, writer: &mut W) -> FinanceResult<()> {
    let mut csv_writer = ::csv::Writer::from_writer(writer);

    for (index, event) in storage.ledger.events().iter().enumerate() {
        csv_writer
            .serialize(HistoryRow {
                number: index + 1,
                date: &event.date,
                category: &event.category_name,
                kind: event.kind.code(),
                amount: event.amount,
            })
            .map_err(|e| FinanceError::Export(e.to_string()))?;
    }

    if storage.ledger.is_empty() {
        csv_writer
            .write_record(["Number", "Date", "Category", "Type", "Amount"])
            .map_err(|e| FinanceError::Export(e.to_string()))?;
    }

    csv_writer
        .flush()
        .map_err(|e| FinanceError::Export(e.to_string()))?;
    Ok(())
}
