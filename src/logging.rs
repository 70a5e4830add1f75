//! Tracing subscriber setup
//!
//! Installed once by the binary. Log output goes to stderr, or is appended to
//! the error log configured in settings.

use std::fs::OpenOptions;
use std::path::Path;
use std::sync::{Mutex, Once};

use tracing::Level;

use crate::error::{FinanceError, FinanceResult};

static TRACING_INIT: Once = Once::new();

/// Level used unless verbose output is requested
pub fn default_level(verbose: bool) -> Level {
    if verbose {
        Level::DEBUG
    } else {
        Level::WARN
    }
}

/// Initialize the global tracing subscriber
///
/// Later calls are no-ops.
pub fn init_tracing(level: Level, error_log: Option<&Path>) -> FinanceResult<()> {
    let file = match error_log {
        Some(path) => Some(
            OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .map_err(|e| {
                    FinanceError::Config(format!(
                        "Failed to open error log {}: {}",
                        path.display(),
                        e
                    ))
                })?,
        ),
        None => None,
    };

    TRACING_INIT.call_once(|| {
        let builder = tracing_subscriber::fmt()
            .with_max_level(level)
            .with_target(false);

        let installed = match file {
            Some(file) => builder
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .try_init(),
            None => builder.with_writer(std::io::stderr).try_init(),
        };

        if installed.is_ok() {
            tracing::debug!(?level, "tracing initialized");
        }
    });

    Ok(())
}
