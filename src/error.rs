//! Custom error types for ledgerly
//!
//! This module defines the error hierarchy for the ledger using thiserror
//! for ergonomic error definitions.

use std::path::PathBuf;

use thiserror::Error;

/// The main error type for ledger operations
#[derive(Error, Debug)]
pub enum FinanceError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// Validation errors for data models
    #[error("Validation error: {0}")]
    Validation(String),

    /// A persisted document exists but cannot be decoded
    #[error("Data corruption in {}: {message}", .path.display())]
    DataCorruption { path: PathBuf, message: String },

    /// User-entered amount is not a finite number
    #[error("Invalid amount: '{0}'")]
    InvalidAmount(String),

    /// Positional reference past the end of a collection
    #[error("{entity_type} index {index} out of range (have {len})")]
    IndexOutOfRange {
        entity_type: &'static str,
        index: usize,
        len: usize,
    },

    /// Entity not found errors
    #[error("{entity_type} not found: {identifier}")]
    NotFound {
        entity_type: &'static str,
        identifier: String,
    },

    /// Duplicate entity errors
    #[error("{entity_type} already exists: {identifier}")]
    Duplicate {
        entity_type: &'static str,
        identifier: String,
    },

    /// Export errors
    #[error("Export error: {0}")]
    Export(String),

    /// Storage errors
    #[error("Storage error: {0}")]
    Storage(String),
}

impl FinanceError {
    /// Create a "not found" error for categories
    pub fn category_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Category",
            identifier: identifier.into(),
        }
    }

    /// Create an out-of-range error for categories
    pub fn category_index(index: usize, len: usize) -> Self {
        Self::IndexOutOfRange {
            entity_type: "Category",
            index,
            len,
        }
    }

    /// Create an out-of-range error for events
    pub fn event_index(index: usize, len: usize) -> Self {
        Self::IndexOutOfRange {
            entity_type: "Event",
            index,
            len,
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    /// Check if this error reports an unreadable document
    pub fn is_corruption(&self) -> bool {
        matches!(self, Self::DataCorruption { .. })
    }
}

impl From<std::io::Error> for FinanceError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for FinanceError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

/// Result type alias for ledger operations
pub type FinanceResult<T> = Result<T, FinanceError>;
