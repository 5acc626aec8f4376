//! Table Error Types

use std::path::PathBuf;
use thiserror::Error;

/// Errors while reading or writing feature tables
#[derive(Debug, Error)]
pub enum TableError {
    /// Filesystem error on a file or directory
    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// CSV reader or writer error
    #[error("CSV error in {}: {source}", .path.display())]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    /// Data row wider than the header
    #[error("{}: expected {expected} fields in line {line}, saw {found}", .path.display())]
    MalformedRow {
        path: PathBuf,
        line: u64,
        expected: usize,
        found: usize,
    },

    /// No header row to parse
    #[error("No columns to parse from file {}", .0.display())]
    EmptyInput(PathBuf),
}

impl TableError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        TableError::Io {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn csv(path: impl Into<PathBuf>, source: csv::Error) -> Self {
        TableError::Csv {
            path: path.into(),
            source,
        }
    }
}
