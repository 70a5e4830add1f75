//! Income/expense classification shared by categories and events

use serde::{Deserialize, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Whether a category or event adds to or subtracts from the balance
///
/// Categories persist the capitalized code (`"Income"`), events the lowercase
/// one (`"income"`); both spellings are accepted when reading.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Kind {
    #[serde(alias = "income")]
    Income,
    #[serde(alias = "expense")]
    Expense,
}

impl Kind {
    /// Both kinds, income first (chart slice order)
    pub const ALL: [Kind; 2] = [Kind::Income, Kind::Expense];

    /// Stable lowercase code used in the ledger document
    pub fn code(&self) -> &'static str {
        match self {
            Kind::Income => "income",
            Kind::Expense => "expense",
        }
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Kind::Income => write!(f, "Income"),
            Kind::Expense => write!(f, "Expense"),
        }
    }
}

impl FromStr for Kind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "income" => Ok(Kind::Income),
            "expense" | "expenses" => Ok(Kind::Expense),
            other => Err(format!("unknown kind '{}', expected income or expense", other)),
        }
    }
}

/// Serialize a kind as its lowercase code
pub(crate) fn serialize_code<S: Serializer>(kind: &Kind, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(kind.code())
}
