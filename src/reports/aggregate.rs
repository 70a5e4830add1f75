//! Totals and income/expense distribution
//!
//! Pure computations over an event sequence. Nothing here reads cached
//! totals; every figure is derived from the events passed in.

use serde::Serialize;

use crate::models::{Event, Kind};

/// Income, expense and balance figures
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct Totals {
    pub income: f64,
    pub expenses: f64,
    /// `income - expenses`
    pub balance: f64,
}

impl Totals {
    /// Build totals from the two sums
    pub fn from_sums(income: f64, expenses: f64) -> Self {
        Self {
            income,
            expenses,
            balance: income - expenses,
        }
    }
}

/// Sum of amounts per kind, as `(income, expenses)`
pub fn sums(events: &[Event]) -> (f64, f64) {
    (sum_of(events, Kind::Income), sum_of(events, Kind::Expense))
}

/// Sum of amounts of events with the given kind
///
/// Starts from positive zero, so an empty sum never prints as `-0.00`.
pub fn sum_of(events: &[Event], kind: Kind) -> f64 {
    events
        .iter()
        .filter(|e| e.kind == kind)
        .fold(0.0, |acc, e| acc + e.amount)
}

/// Totals including the balance
pub fn totals(events: &[Event]) -> Totals {
    let (income, expenses) = sums(events);
    Totals::from_sums(income, expenses)
}

/// Two-slice breakdown used for proportional charts
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Distribution {
    /// Both sums are zero; there is nothing to chart
    NoData,
    /// Income slice followed by expense slice
    Split([(Kind, f64); 2]),
}

impl Distribution {
    pub fn is_empty(&self) -> bool {
        matches!(self, Distribution::NoData)
    }

    /// The `(kind, sum)` slices, or `None` when there is no data
    pub fn slices(&self) -> Option<&[(Kind, f64); 2]> {
        match self {
            Distribution::NoData => None,
            Distribution::Split(slices) => Some(slices),
        }
    }

    /// Percentage of the whole for each slice, by magnitude
    ///
    /// Negative sums are charted by their absolute value. The shares of a
    /// split always add up to 100.
    pub fn shares(&self) -> Option<[(Kind, f64); 2]> {
        let slices = self.slices()?;
        let whole: f64 = slices.iter().map(|(_, v)| v.abs()).sum();
        if whole == 0.0 {
            return None;
        }
        Some(slices.map(|(kind, value)| (kind, value.abs() / whole * 100.0)))
    }
}

/// Income vs expense distribution of the given events
pub fn distribution(events: &[Event]) -> Distribution {
    let (income, expenses) = sums(events);
    if income == 0.0 && expenses == 0.0 {
        Distribution::NoData
    } else {
        Distribution::Split([(Kind::Income, income), (Kind::Expense, expenses)])
    }
}
