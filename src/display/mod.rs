//! Display formatting for terminal output
//!
//! Maps the ledger's internal values to display strings. Everything
//! user-visible goes through the [`Strings`] table.

pub mod category;
pub mod history;
pub mod stats;
pub mod strings;

pub use category::format_category_list;
pub use history::format_history;
pub use stats::{format_chart, format_statistics, format_totals};
pub use strings::{Strings, TextKey};
