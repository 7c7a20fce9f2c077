//! Table reconstruction from buffered pipe-delimited lines.
//!
//! The column count is inferred from the first data row rather than from a
//! schema. Every other row is padded with empty cells or truncated to match.

use crate::ast::{Cell, Row, TableGrid};
use crate::error::{Diagnostic, Diagnostics};
use crate::inline::format_runs;
use crate::lexer::Line;

/// Build a grid from raw table lines.
///
/// Divider rows are discarded. If no data rows remain the grid is empty and
/// callers must not emit a table block for it.
pub fn build_table<'a>(lines: &[&'a str]) -> TableGrid<'a> {
    let mut acc = TableAccumulator::new();
    for (i, &text) in lines.iter().enumerate() {
        acc.push(Line::new(text, i as u32 + 1));
    }
    acc.finish(&mut Diagnostics::new())
}

/// Check if a line is a header divider such as `|---|:--:|`.
///
/// After removing pipes and whitespace, only `-` and `:` may remain. A line
/// of bare pipes counts as a divider too.
pub fn is_divider_row(line: &str) -> bool {
    line.chars()
        .filter(|&c| c != '|' && !c.is_whitespace())
        .all(|c| c == '-' || c == ':')
}

/// Split a row into trimmed cell texts.
///
/// One leading and one trailing `|` are stripped before splitting.
pub fn split_cells(line: &str) -> impl Iterator<Item = &str> {
    let line = line.trim();
    let line = line.strip_prefix('|').unwrap_or(line);
    let line = line.strip_suffix('|').unwrap_or(line);
    line.split('|').map(str::trim)
}

/// Buffer of table lines awaiting a flush.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct TableAccumulator<'a> {
    lines: Vec<Line<'a>>,
}

impl<'a> TableAccumulator<'a> {
    /// Create an empty buffer.
    pub fn new() -> Self {
        Self { lines: Vec::new() }
    }

    /// Buffer one line.
    #[inline]
    pub fn push(&mut self, line: Line<'a>) {
        self.lines.push(line);
    }

    /// Number of buffered lines, dividers included.
    #[inline]
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Check if nothing is buffered.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Line number of the first buffered line.
    pub fn first_line(&self) -> Option<u32> {
        self.lines.first().map(|l| l.number)
    }

    /// Reconstruct the grid, recording truncated rows and empty tables.
    pub fn finish(self, diagnostics: &mut Diagnostics) -> TableGrid<'a> {
        let first_line = self.first_line();
        let mut data = self.lines.into_iter().filter(|l| !is_divider_row(l.text));

        let Some(header) = data.next() else {
            if let Some(line) = first_line {
                diagnostics.push(Diagnostic::empty_table(line));
            }
            return TableGrid::default();
        };

        let column_count = split_cells(header.text).count();
        let mut rows = Vec::new();
        rows.push(build_row(header.text, column_count));

        for line in data {
            let found = split_cells(line.text).count();
            if found > column_count {
                diagnostics.push(Diagnostic::truncated_row(
                    line.number,
                    found - column_count,
                    column_count,
                ));
            }
            rows.push(build_row(line.text, column_count));
        }

        log::debug!(
            "built table: {} row(s) x {} column(s)",
            rows.len(),
            column_count
        );
        TableGrid::new(column_count, rows)
    }
}

fn build_row(text: &str, column_count: usize) -> Row<'_> {
    let mut cells: Vec<Cell<'_>> = split_cells(text)
        .take(column_count)
        .map(|cell| Cell {
            runs: format_runs(cell),
        })
        .collect();
    cells.resize_with(column_count, Cell::default);
    Row { cells }
}
