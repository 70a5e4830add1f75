//! Reports module
//!
//! Derived figures computed from the event list.

pub mod aggregate;

pub use aggregate::{distribution, sum_of, sums, totals, Distribution, Totals};
