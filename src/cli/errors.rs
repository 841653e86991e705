//! CLI error types.

use std::io;

use crate::inventory::InventoryError;

/// Failures that end the process with a non-zero status.
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    /// The inventory could not be opened.
    #[error("cannot open catalog: {0}")]
    Inventory(#[from] InventoryError),
    /// Terminal read or write failed.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    /// JSON rendering failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result alias for CLI operations.
pub type CliResult<T> = Result<T, CliError>;
