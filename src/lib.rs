//! ledgerly - single-user income and expense tracker
//!
//! This library provides the data layer of a personal finance tracker:
//! user-defined income/expense categories, an ordered ledger of events,
//! running totals that are always derived from the events, and durable
//! JSON persistence with atomic writes.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Base directory and settings
//! - `error`: Custom error types
//! - `models`: Categories, events and their shared kind
//! - `storage`: JSON file storage (`CategoryStore`, `LedgerStore`)
//! - `reports`: Totals and the income/expense distribution
//! - `display`: Strings table and text formatting
//! - `export`: CSV, JSON and YAML export
//! - `logging`: tracing subscriber setup
//! - `cli`: Command handlers for the `ledgerly` binary
//!
//! # Example
//!
//! ```rust,no_run
//! use ledgerly::config::{LedgerPaths, Settings};
//! use ledgerly::models::Kind;
//! use ledgerly::storage::Storage;
//!
//! # fn main() -> Result<(), ledgerly::FinanceError> {
//! let paths = LedgerPaths::new()?;
//! let settings = Settings::load_or_default(&paths)?;
//! let mut storage = Storage::new(paths, &settings)?;
//! storage.load_all()?;
//!
//! storage.categories.add("Salary", Kind::Income)?;
//! storage.ledger.add_event(Kind::Income, "1500", "Salary", "01.03.2024")?;
//! println!("balance: {}", storage.ledger.totals().balance);
//! # Ok(())
//! # }
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod logging;
pub mod models;
pub mod reports;
pub mod storage;

pub use error::{FinanceError, FinanceResult};
