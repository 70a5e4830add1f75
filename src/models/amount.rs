//! Amount parsing and formatting
//!
//! Amounts are plain floating-point quantities. Negative and zero values are
//! valid; only text that is not a finite number is rejected.

use crate::error::{FinanceError, FinanceResult};

/// Parse user-entered amount text
///
/// Surrounding whitespace is ignored. NaN and infinities are rejected since
/// the ledger document cannot represent them.
pub fn parse_amount(text: &str) -> FinanceResult<f64> {
    let trimmed = text.trim();
    match trimmed.parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(FinanceError::InvalidAmount(text.to_string())),
    }
}

/// Check that an already-numeric amount can be recorded
pub fn check_amount(value: f64) -> FinanceResult<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(FinanceError::InvalidAmount(value.to_string()))
    }
}

/// Format an amount followed by the currency symbol, e.g. `1500.00 $`
pub fn format_amount(value: f64, currency: &str) -> String {
    if currency.is_empty() {
        format!("{:.2}", value)
    } else {
        format!("{:.2} {}", value, currency)
    }
}
