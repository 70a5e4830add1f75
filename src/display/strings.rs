//! Display strings keyed by symbolic identifiers
//!
//! The table is built once at startup (English defaults plus any overrides
//! from settings) and is read-only afterwards.

use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::models::Kind;

/// Symbolic identifier of a display string
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TextKey {
    Statistics,
    Chronology,
    Category,
    Categories,
    Type,
    Income,
    Incomes,
    Expense,
    Expenses,
    TotalBalance,
    Date,
    Reason,
    Amount,
    NoData,
    NoCategories,
    NoEvents,
    CategoryAdded,
    CategoryDeleted,
    IncomeAdded,
    ExpenseAdded,
    EventUpdated,
    EventDeleted,
    PleaseEnterValidAmount,
}

impl TextKey {
    /// Every key, in declaration order
    pub const ALL: [TextKey; 23] = [
        TextKey::Statistics,
        TextKey::Chronology,
        TextKey::Category,
        TextKey::Categories,
        TextKey::Type,
        TextKey::Income,
        TextKey::Incomes,
        TextKey::Expense,
        TextKey::Expenses,
        TextKey::TotalBalance,
        TextKey::Date,
        TextKey::Reason,
        TextKey::Amount,
        TextKey::NoData,
        TextKey::NoCategories,
        TextKey::NoEvents,
        TextKey::CategoryAdded,
        TextKey::CategoryDeleted,
        TextKey::IncomeAdded,
        TextKey::ExpenseAdded,
        TextKey::EventUpdated,
        TextKey::EventDeleted,
        TextKey::PleaseEnterValidAmount,
    ];

    fn english(&self) -> &'static str {
        match self {
            TextKey::Statistics => "Statistics",
            TextKey::Chronology => "Chronology",
            TextKey::Category => "Category",
            TextKey::Categories => "Categories",
            TextKey::Type => "Type",
            TextKey::Income => "Income",
            TextKey::Incomes => "Incomes",
            TextKey::Expense => "Expense",
            TextKey::Expenses => "Expenses",
            TextKey::TotalBalance => "Total balance",
            TextKey::Date => "Date",
            TextKey::Reason => "Reason",
            TextKey::Amount => "Amount",
            TextKey::NoData => "No data to chart yet",
            TextKey::NoCategories => "No categories found",
            TextKey::NoEvents => "No income or expenses recorded",
            TextKey::CategoryAdded => "Category added!",
            TextKey::CategoryDeleted => "Category deleted!",
            TextKey::IncomeAdded => "Income added!",
            TextKey::ExpenseAdded => "Expense added!",
            TextKey::EventUpdated => "Entry updated!",
            TextKey::EventDeleted => "Entry deleted!",
            TextKey::PleaseEnterValidAmount => "Please enter a valid amount!",
        }
    }
}

impl fmt::Display for TextKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Same spelling as in settings.json
        match serde_json::to_value(self) {
            Ok(serde_json::Value::String(s)) => write!(f, "{}", s),
            _ => write!(f, "{:?}", self),
        }
    }
}

/// Immutable lookup table of display strings
#[derive(Debug, Clone)]
pub struct Strings {
    table: HashMap<TextKey, String>,
}

impl Strings {
    /// The built-in English table
    pub fn english() -> Self {
        let table = TextKey::ALL
            .iter()
            .map(|key| (*key, key.english().to_string()))
            .collect();
        Self { table }
    }

    /// English defaults with the given overrides layered on top
    pub fn with_overrides(overrides: &HashMap<TextKey, String>) -> Self {
        let mut strings = Self::english();
        for (key, value) in overrides {
            strings.table.insert(*key, value.clone());
        }
        strings
    }

    /// An empty table, every lookup falls back to the missing-key text
    pub fn empty() -> Self {
        Self {
            table: HashMap::new(),
        }
    }

    /// Look up a display string
    pub fn get(&self, key: TextKey) -> String {
        self.table
            .get(&key)
            .cloned()
            .unwrap_or_else(|| format!("Translation not found for {}", key))
    }

    /// Singular label of a kind ("Income" / "Expense")
    pub fn kind_label(&self, kind: Kind) -> String {
        match kind {
            Kind::Income => self.get(TextKey::Income),
            Kind::Expense => self.get(TextKey::Expense),
        }
    }

    /// Plural label of a kind, used for totals and chart slices
    pub fn kind_total_label(&self, kind: Kind) -> String {
        match kind {
            Kind::Income => self.get(TextKey::Incomes),
            Kind::Expense => self.get(TextKey::Expenses),
        }
    }
}

impl Default for Strings {
    fn default() -> Self {
        Self::english()
    }
}
