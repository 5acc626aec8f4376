//! CSV Discovery and Loading

use crate::error::TableError;
use crate::table::FeatureTable;
use csv::ReaderBuilder;
use std::fs::{self, File};
use std::path::{Path, PathBuf};
use tracing::debug;

/// File extension of feature files
const CSV_EXTENSION: &str = ".csv";

/// Feature group a file belongs to; decides how its identifier is derived
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceGroup {
    /// Primary per-sample feature files
    Base,
    /// Haralick texture files, named `<stem>_haralick.csv`
    Haralick,
    /// Haar-like feature files, named `<stem>_haar.csv`
    Haar,
}

impl SourceGroup {
    /// Suffix stripped from the file stem, if any
    pub fn stem_suffix(self) -> Option<&'static str> {
        match self {
            SourceGroup::Base => None,
            SourceGroup::Haralick => Some("_haralick"),
            SourceGroup::Haar => Some("_haar"),
        }
    }

    /// Human-readable label for log lines
    pub fn label(self) -> &'static str {
        match self {
            SourceGroup::Base => "base",
            SourceGroup::Haralick => "Haralick",
            SourceGroup::Haar => "Haar-like",
        }
    }
}

/// Result of loading one file
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadOutcome {
    /// Parsed, non-empty, columns prefixed
    Loaded(FeatureTable),
    /// Header present but zero data rows
    Empty,
}

/// List the CSV files of a directory, sorted by file name
pub fn discover_csv_files(dir: &Path) -> Result<Vec<PathBuf>, TableError> {
    let entries = fs::read_dir(dir).map_err(|e| TableError::io(dir, e))?;

    let mut files = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| TableError::io(dir, e))?;
        let name = entry.file_name();
        if name.to_str().is_some_and(|n| n.ends_with(CSV_EXTENSION)) {
            files.push(entry.path());
        }
    }

    files.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    debug!("Found {} CSV files in {}", files.len(), dir.display());
    Ok(files)
}

/// Identifier used to prefix a file's columns: the file stem, minus the
/// group's suffix when the stem ends with it.
pub fn source_identifier(path: &Path, group: SourceGroup) -> String {
    let stem = path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();

    match group.stem_suffix() {
        Some(suffix) => stem.strip_suffix(suffix).map(str::to_owned).unwrap_or(stem),
        None => stem,
    }
}

/// Parse a CSV file with a header row into a table.
///
/// Rows shorter than the header are padded with empty fields; a row wider
/// than the header rejects the whole file.
pub fn read_table(path: &Path) -> Result<FeatureTable, TableError> {
    let file = File::open(path).map_err(|e| TableError::io(path, e))?;
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(file);

    let headers: Vec<String> = reader
        .headers()
        .map_err(|e| TableError::csv(path, e))?
        .iter()
        .map(str::to_owned)
        .collect();

    if headers.is_empty() {
        return Err(TableError::EmptyInput(path.to_path_buf()));
    }

    let mut rows = Vec::new();
    for result in reader.records() {
        let record = result.map_err(|e| TableError::csv(path, e))?;

        if record.len() > headers.len() {
            return Err(TableError::MalformedRow {
                path: path.to_path_buf(),
                line: record.position().map(|p| p.line()).unwrap_or(0),
                expected: headers.len(),
                found: record.len(),
            });
        }

        let mut row: Vec<String> = record.iter().map(str::to_owned).collect();
        row.resize(headers.len(), String::new());
        rows.push(row);
    }

    Ok(FeatureTable::new(headers, rows))
}

/// Read a file and prefix its columns with the source identifier
pub fn load_table(path: &Path, group: SourceGroup) -> Result<LoadOutcome, TableError> {
    let mut table = read_table(path)?;
    if table.is_empty() {
        return Ok(LoadOutcome::Empty);
    }

    let identifier = source_identifier(path, group);
    table.prefix_columns(&identifier);
    debug!(
        "Loaded {} ({} rows, {} columns) as '{}'",
        path.display(),
        table.height(),
        table.width(),
        identifier
    );
    Ok(LoadOutcome::Loaded(table))
}
