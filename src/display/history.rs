//! Event history formatting

use super::strings::{Strings, TextKey};
use crate::models::{format_amount, Event};

/// Truncate a string to a maximum number of characters
fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{}...", kept)
    }
}

/// Format the event list in entry order as a numbered register
pub fn format_history(events: &[Event], strings: &Strings, currency: &str) -> String {
    if events.is_empty() {
        return format!("{}.\n", strings.get(TextKey::NoEvents));
    }

    let mut output = String::new();
    output.push_str(&format!(
        "{:>3}  {:<10}  {:<20}  {:<8}  {:>14}\n",
        "#",
        strings.get(TextKey::Date),
        strings.get(TextKey::Reason),
        strings.get(TextKey::Type),
        strings.get(TextKey::Amount)
    ));
    output.push_str(&"-".repeat(65));
    output.push('\n');

    for (index, event) in events.iter().enumerate() {
        output.push_str(&format!(
            "{:>3}  {:<10}  {:<20}  {:<8}  {:>14}\n",
            index + 1,
            truncate(&event.date, 10),
            truncate(&event.category_name, 20),
            strings.kind_label(event.kind),
            format_amount(event.amount, currency)
        ));
    }

    output
}
