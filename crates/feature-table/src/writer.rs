//! CSV Writer

use crate::error::TableError;
use crate::table::FeatureTable;
use csv::Writer;
use std::path::Path;
use tracing::info;

/// Write a table as CSV: header row, then data rows, no index column
pub fn write_table(table: &FeatureTable, path: &Path) -> Result<(), TableError> {
    let mut writer = Writer::from_path(path).map_err(|e| TableError::csv(path, e))?;

    writer
        .write_record(table.headers())
        .map_err(|e| TableError::csv(path, e))?;
    for row in table.rows() {
        writer.write_record(row).map_err(|e| TableError::csv(path, e))?;
    }
    writer.flush().map_err(|e| TableError::io(path, e))?;

    info!(
        "Wrote {} ({} rows, {} columns)",
        path.display(),
        table.height(),
        table.width()
    );
    Ok(())
}
