//! Merge Error Types

use feature_table::TableError;
use thiserror::Error;

/// Run-ending merge failures
#[derive(Debug, Error)]
pub enum MergeError {
    /// Configuration overlay could not be read
    #[error("Configuration error: {0}")]
    Config(#[from] ::config::ConfigError),

    /// Base directory missing or unreadable
    #[error("Cannot list base directory: {0}")]
    BaseDirectory(#[source] TableError),

    /// Nothing usable was loaded from any directory
    #[error("No valid tables to merge. Ensure CSV files are not empty and are readable.")]
    NoTables,

    /// Merged table could not be written
    #[error("Failed to write merged table: {0}")]
    Output(#[source] TableError),
}
