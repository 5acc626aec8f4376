//! Feature Tables
//!
//! Loads CSV files of pre-computed image features, prefixes their columns
//! with the source identifier, and concatenates them side by side.

mod error;
mod loader;
mod table;
mod writer;

pub use error::TableError;
pub use loader::{discover_csv_files, load_table, read_table, source_identifier, LoadOutcome, SourceGroup};
pub use table::{concat_columns, FeatureTable};
pub use writer::write_table;
