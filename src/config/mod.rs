//! Configuration module for ledgerly
//!
//! This module provides configuration management including:
//! - Base directory and document path resolution
//! - User settings persistence

pub mod paths;
pub mod settings;

pub use paths::LedgerPaths;
pub use settings::Settings;
