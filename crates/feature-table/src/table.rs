//! In-memory Feature Table

use tracing::{debug, warn};

/// A rectangular table loaded from one CSV file.
///
/// Values keep their raw field text. Rows carry no key; tables are
/// aligned with each other by row position only.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FeatureTable {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl FeatureTable {
    /// Create a table from a header row and data rows
    pub fn new(headers: Vec<String>, rows: Vec<Vec<String>>) -> Self {
        Self { headers, rows }
    }

    /// Column names
    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    /// Data rows
    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    /// Number of columns
    pub fn width(&self) -> usize {
        self.headers.len()
    }

    /// Number of data rows
    pub fn height(&self) -> usize {
        self.rows.len()
    }

    /// True when the table has no data rows
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Rewrite every column name to `{identifier}_{original}`
    pub fn prefix_columns(&mut self, identifier: &str) {
        for header in &mut self.headers {
            *header = format!("{identifier}_{header}");
        }
    }
}

/// Concatenate tables along the column axis, in order.
///
/// The result is as tall as the tallest input; shorter tables are padded
/// with empty fields. Column names are not deduplicated.
pub fn concat_columns(tables: &[FeatureTable]) -> FeatureTable {
    let width: usize = tables.iter().map(FeatureTable::width).sum();
    let height = tables.iter().map(FeatureTable::height).max().unwrap_or(0);

    if tables.iter().any(|t| t.height() != height) {
        warn!(
            "Row counts differ across tables ({:?}); padding to {} rows",
            tables.iter().map(FeatureTable::height).collect::<Vec<_>>(),
            height
        );
    }

    let mut headers = Vec::with_capacity(width);
    for table in tables {
        headers.extend(table.headers.iter().cloned());
    }

    let mut rows = Vec::with_capacity(height);
    for i in 0..height {
        let mut row = Vec::with_capacity(width);
        for table in tables {
            match table.rows.get(i) {
                Some(values) => row.extend(values.iter().cloned()),
                None => row.extend(std::iter::repeat(String::new()).take(table.width())),
            }
        }
        rows.push(row);
    }

    debug!("Concatenated {} tables into {}x{}", tables.len(), height, width);
    FeatureTable { headers, rows }
}
