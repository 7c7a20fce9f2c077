//! Sheet loading by file extension.
//!
//! Spreadsheet workbooks (`xlsx`, `xlsm`, `xlsb`, `xls`, `ods`) are read
//! through `calamine`, taking the first sheet. Anything else is read as CSV.
//! Either way the result is raw rows of cell text, anchored at cell `A1`.

use std::path::Path;

use calamine::{open_workbook_auto, Data, Range, Reader};

use crate::error::DataError;
use crate::records::read_rows_from_path;

const WORKBOOK_EXTENSIONS: &[&str] = &["xlsx", "xlsm", "xlsb", "xls", "ods"];

/// Check if a path names a spreadsheet workbook rather than CSV.
pub fn is_workbook<P: AsRef<Path>>(path: P) -> bool {
    path.as_ref()
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| {
            WORKBOOK_EXTENSIONS
                .iter()
                .any(|known| ext.eq_ignore_ascii_case(known))
        })
}

/// Read the raw rows of a workbook's first sheet or of a CSV file.
pub fn read_sheet_rows<P: AsRef<Path>>(path: P) -> Result<Vec<Vec<String>>, DataError> {
    let path = path.as_ref();
    if is_workbook(path) {
        read_workbook_rows(path)
    } else {
        read_rows_from_path(path)
    }
}

/// Read the raw rows of a workbook's first sheet.
///
/// Empty cells become empty strings. Rows and columns before the first used
/// cell are kept as empty padding, so column indexes match the sheet's.
pub fn read_workbook_rows<P: AsRef<Path>>(path: P) -> Result<Vec<Vec<String>>, DataError> {
    let path = path.as_ref();
    let workbook_error = |source| DataError::Workbook {
        path: path.to_path_buf(),
        source,
    };

    let mut workbook = open_workbook_auto(path).map_err(workbook_error)?;
    let range = workbook
        .worksheet_range_at(0)
        .ok_or_else(|| DataError::EmptyWorkbook(path.to_path_buf()))?
        .map_err(workbook_error)?;

    let rows = range_rows(&range);
    log::info!("loaded {} sheet row(s) from {}", rows.len(), path.display());
    Ok(rows)
}

fn range_rows(range: &Range<Data>) -> Vec<Vec<String>> {
    let Some((first_row, first_col)) = range.start() else {
        return Vec::new();
    };

    let mut rows: Vec<Vec<String>> = vec![Vec::new(); first_row as usize];
    for cells in range.rows() {
        let mut row = vec![String::new(); first_col as usize];
        row.extend(cells.iter().map(cell_text));
        rows.push(row);
    }
    rows
}

fn cell_text(cell: &Data) -> String {
    match cell {
        Data::Empty => String::new(),
        Data::String(s) => s.clone(),
        other => other.to_string(),
    }
}
