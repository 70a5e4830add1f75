//! Event model
//!
//! An event is one recorded income or expense. The category is stored as a
//! name snapshot, so deleting the category later leaves the event untouched.

use serde::{Deserialize, Serialize};

use super::kind::{serialize_code, Kind};

/// A single income or expense entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    /// Fixed at creation
    #[serde(rename = "type", serialize_with = "serialize_code")]
    pub kind: Kind,

    pub amount: f64,

    /// Name of the category at the time of entry
    #[serde(rename = "reason")]
    pub category_name: String,

    /// Free-form date text, normally `dd.MM.yyyy`
    pub date: String,
}

impl Event {
    /// Create a new event
    pub fn new(
        kind: Kind,
        amount: f64,
        category_name: impl Into<String>,
        date: impl Into<String>,
    ) -> Self {
        Self {
            kind,
            amount,
            category_name: category_name.into(),
            date: date.into(),
        }
    }

    /// Create an income event
    pub fn income(amount: f64, category_name: impl Into<String>, date: impl Into<String>) -> Self {
        Self::new(Kind::Income, amount, category_name, date)
    }

    /// Create an expense event
    pub fn expense(amount: f64, category_name: impl Into<String>, date: impl Into<String>) -> Self {
        Self::new(Kind::Expense, amount, category_name, date)
    }
}

/// In-place edit of an event; `None` fields are left unchanged
///
/// The kind is not editable.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EventPatch {
    pub amount: Option<f64>,
    pub category_name: Option<String>,
    pub date: Option<String>,
}

impl EventPatch {
    /// Patch that only replaces the amount
    pub fn amount(amount: f64) -> Self {
        Self {
            amount: Some(amount),
            ..Self::default()
        }
    }

    pub fn is_empty(&self) -> bool {
        self.amount.is_none() && self.category_name.is_none() && self.date.is_none()
    }

    /// Apply the patch to an event
    pub fn apply(&self, event: &mut Event) {
        if let Some(amount) = self.amount {
            event.amount = amount;
        }
        if let Some(name) = &self.category_name {
            event.category_name = name.clone();
        }
        if let Some(date) = &self.date {
            event.date = date.clone();
        }
    }
}
