//! Event date helpers
//!
//! The ledger stores dates as the text the user chose. These helpers are for
//! front ends that want to default to today or validate input.

use std::fmt::Write;

use chrono::{Local, NaiveDate};

/// Display format of event dates (`dd.MM.yyyy`)
pub const DATE_FORMAT: &str = "%d.%m.%Y";

/// Today's date in the given strftime format
pub fn today(format: &str) -> String {
    format_date(Local::now().date_naive(), format)
}

/// Parse a date in the given strftime format
pub fn parse_date(text: &str, format: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(text.trim(), format).ok()
}

/// Format a calendar date in the given strftime format
///
/// An unusable format string falls back to [`DATE_FORMAT`].
pub fn format_date(date: NaiveDate, format: &str) -> String {
    let mut out = String::new();
    if write!(out, "{}", date.format(format)).is_err() {
        return date.format(DATE_FORMAT).to_string();
    }
    out
}
