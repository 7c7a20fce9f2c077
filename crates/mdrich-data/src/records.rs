//! Tabular business records loaded from CSV.
//!
//! Values are kept as strings; numeric interpretation happens in the
//! analysis that needs it, since business sheets mix `1,200`, `1200` and
//! `-` freely in the same column.

use std::fs::File;
use std::io;
use std::path::Path;

use crate::error::DataError;
use crate::workbook::read_sheet_rows;

const BOM: char = '\u{feff}';

/// A header row plus data rows.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordTable {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl RecordTable {
    /// Create a table from headers and rows.
    pub fn new(headers: Vec<String>, rows: Vec<Vec<String>>) -> Self {
        Self { headers, rows }
    }

    /// Load a CSV file or workbook sheet whose first row is the header.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, DataError> {
        let path = path.as_ref();
        let table = Self::from_rows(read_sheet_rows(path)?);
        log::info!(
            "loaded {} record(s) with {} column(s) from {}",
            table.len(),
            table.headers.len(),
            path.display()
        );
        Ok(table)
    }

    /// Split raw rows into a header row and data rows.
    pub fn from_rows(rows: Vec<Vec<String>>) -> Self {
        let mut rows = rows.into_iter();
        let headers = rows.next().unwrap_or_default();
        Self {
            headers,
            rows: rows.collect(),
        }
    }

    /// Load CSV from any reader. `source_name` labels errors.
    pub fn from_reader<R: io::Read>(reader: R, source_name: &str) -> Result<Self, DataError> {
        Ok(Self::from_rows(read_rows(reader, source_name)?))
    }

    /// Column names in file order.
    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    /// Data rows in file order.
    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    /// Number of data rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Check if there are no data rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Index of the column named exactly `name`.
    pub fn column(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|h| h == name)
    }

    /// Index of the first column whose name contains any of `needles`.
    pub fn find_column(&self, needles: &[&str]) -> Option<usize> {
        self.headers
            .iter()
            .position(|h| needles.iter().any(|n| h.contains(n)))
    }

    /// Like [`find_column`](Self::find_column), failing with a named error.
    pub fn require_column(&self, needles: &[&str]) -> Result<usize, DataError> {
        self.find_column(needles)
            .ok_or_else(|| DataError::MissingColumn(needles.join(" / ")))
    }

    /// Value at a row and column, empty when the row is short.
    pub fn value(&self, row: usize, column: usize) -> &str {
        self.rows
            .get(row)
            .and_then(|r| r.get(column))
            .map(String::as_str)
            .unwrap_or("")
    }

    /// Values of one column, in row order.
    pub fn column_values(&self, column: usize) -> impl Iterator<Item = &str> {
        self.rows
            .iter()
            .map(move |r| r.get(column).map(String::as_str).unwrap_or(""))
    }
}

/// Read every CSV row without treating any as a header.
///
/// Rows may differ in length. A leading byte-order mark is dropped.
pub fn read_rows<R: io::Read>(reader: R, source_name: &str) -> Result<Vec<Vec<String>>, DataError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(reader);

    let mut rows = Vec::new();
    for record in csv_reader.records() {
        let record = record.map_err(|source| DataError::Csv {
            source_name: source_name.to_string(),
            source,
        })?;
        rows.push(record.iter().map(str::to_string).collect::<Vec<_>>());
    }

    if let Some(first) = rows.first_mut().and_then(|r| r.first_mut()) {
        if let Some(stripped) = first.strip_prefix(BOM) {
            *first = stripped.to_string();
        }
    }

    Ok(rows)
}

/// Read raw sheet rows from a CSV file.
pub fn read_rows_from_path<P: AsRef<Path>>(path: P) -> Result<Vec<Vec<String>>, DataError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| DataError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    read_rows(file, &path.display().to_string())
}
