use std::fmt;

/// Diagnostic kinds for categorizing conversion notes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiagnosticKind {
    /// A diagram fence was still open at end of input.
    UnclosedFence,
    /// A table row had more cells than the header row; extras were dropped.
    TruncatedRow,
    /// A table consisted only of divider rows and produced no block.
    EmptyTable,
}

/// A non-fatal note about lossy or unterminated input.
///
/// Conversion never fails on these; they are collected alongside the
/// document so callers can report them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    /// Human-readable message
    pub message: String,
    /// 1-based line the note refers to
    pub line: Option<u32>,
    /// Categorization
    pub kind: DiagnosticKind,
}

impl Diagnostic {
    /// An open diagram fence at end of input.
    pub fn unclosed_fence(language: &str, opened_at: u32) -> Self {
        Self {
            message: format!("unclosed {} fence", language),
            line: Some(opened_at),
            kind: DiagnosticKind::UnclosedFence,
        }
    }

    /// A table row that lost cells to truncation.
    pub fn truncated_row(line: u32, dropped: usize, column_count: usize) -> Self {
        Self {
            message: format!(
                "table row has {} extra cell(s) beyond {} column(s); dropped",
                dropped, column_count
            ),
            line: Some(line),
            kind: DiagnosticKind::TruncatedRow,
        }
    }

    /// A divider-only table that produced no block.
    pub fn empty_table(line: u32) -> Self {
        Self {
            message: "table has no data rows".to_string(),
            line: Some(line),
            kind: DiagnosticKind::EmptyTable,
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)?;
        if let Some(line) = self.line {
            write!(f, " at line {}", line)?;
        }
        Ok(())
    }
}

impl std::error::Error for Diagnostic {}

/// Diagnostics collected during one conversion.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Diagnostics {
    items: Vec<Diagnostic>,
}

impl Diagnostics {
    /// Create an empty collection.
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Add a diagnostic.
    pub fn push(&mut self, diagnostic: Diagnostic) {
        log::debug!("diagnostic: {}", diagnostic);
        self.items.push(diagnostic);
    }

    /// Check if nothing was collected.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Number of diagnostics.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Iterate over the diagnostics in input order.
    pub fn iter(&self) -> impl Iterator<Item = &Diagnostic> {
        self.items.iter()
    }

    /// Count diagnostics of one kind.
    pub fn count(&self, kind: DiagnosticKind) -> usize {
        self.items.iter().filter(|d| d.kind == kind).count()
    }

    /// Take the first diagnostic, if any.
    pub fn into_first(self) -> Option<Diagnostic> {
        self.items.into_iter().next()
    }
}

impl IntoIterator for Diagnostics {
    type Item = Diagnostic;
    type IntoIter = std::vec::IntoIter<Diagnostic>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}
