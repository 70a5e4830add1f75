//! CLI command handlers
//!
//! This module contains the implementation of CLI commands, bridging the
//! clap argument parsing with the category and ledger stores. Row numbers
//! shown to and typed by the user are 1-based.

pub mod category;
pub mod event;
pub mod export;
pub mod stats;

pub use category::{handle_category_command, CategoryCommands};
pub use event::{handle_add, handle_delete, handle_edit, handle_history};
pub use export::{handle_export, ExportFormat};
pub use stats::handle_stats;

use crate::config::Settings;
use crate::display::{Strings, TextKey};
use crate::error::{FinanceError, FinanceResult};
use crate::models::{format_date, parse_date};

/// Settings and display strings shared by every handler
#[derive(Debug, Clone)]
pub struct Context {
    pub settings: Settings,
    pub strings: Strings,
}

impl Context {
    /// Build the context; the strings table is fixed from here on
    pub fn new(settings: Settings) -> Self {
        let strings = Strings::with_overrides(&settings.labels);
        Self { settings, strings }
    }

    pub fn currency(&self) -> &str {
        &self.settings.currency_symbol
    }
}

/// Translate a 1-based row number into a store position
pub fn row_to_index(number: usize) -> FinanceResult<usize> {
    number
        .checked_sub(1)
        .ok_or_else(|| FinanceError::Validation("Row numbers start at 1".into()))
}

/// Check a date typed by the user and return it in the configured format
pub fn normalize_date(text: &str, format: &str) -> FinanceResult<String> {
    parse_date(text, format)
        .map(|d| format_date(d, format))
        .ok_or_else(|| {
            FinanceError::Validation(format!(
                "Invalid date '{}', expected format {}",
                text, format
            ))
        })
}

/// Message shown to the user for a failed command
pub fn user_message(err: &FinanceError, strings: &Strings) -> String {
    match err {
        FinanceError::InvalidAmount(text) => {
            format!("{} ('{}')", strings.get(TextKey::PleaseEnterValidAmount), text)
        }
        FinanceError::IndexOutOfRange { entity_type, index, len } => {
            format!(
                "{} #{} does not exist (there are {})",
                entity_type,
                index + 1,
                len
            )
        }
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_to_index() {
        assert_eq!(row_to_index(1).unwrap(), 0);
        assert_eq!(row_to_index(7).unwrap(), 6);
        assert!(row_to_index(0).unwrap_err().is_validation());
    }

    #[test]
    fn test_normalize_date() {
        assert_eq!(normalize_date("1.3.2024", "%d.%m.%Y").unwrap(), "01.03.2024");
        assert!(normalize_date("2024-03-01", "%d.%m.%Y").is_err());
    }

    #[test]
    fn test_user_message() {
        let strings = Strings::english();
        assert_eq!(
            user_message(&FinanceError::InvalidAmount("abc".into()), &strings),
            "Please enter a valid amount! ('abc')"
        );
        assert_eq!(
            user_message(&FinanceError::event_index(4, 2), &strings),
            "Event #5 does not exist (there are 2)"
        );
    }

    #[test]
    fn test_context_applies_label_overrides() {
        let mut settings = Settings::default();
        settings
            .labels
            .insert(TextKey::TotalBalance, "Saldo".to_string());
        let ctx = Context::new(settings);
        assert_eq!(ctx.strings.get(TextKey::TotalBalance), "Saldo");
        assert_eq!(ctx.currency(), "$");
    }
}
