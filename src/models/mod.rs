//! Core data models for ledgerly
//!
//! This module contains the data structures of the ledger domain:
//! categories, events and the income/expense kind they share.

pub mod amount;
pub mod category;
pub mod date;
pub mod event;
pub mod kind;

pub use amount::{check_amount, format_amount, parse_amount};
pub use category::{Category, CategoryValidationError};
pub use date::{format_date, parse_date, today, DATE_FORMAT};
pub use event::{Event, EventPatch};
pub use kind::Kind;
