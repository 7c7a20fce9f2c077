//! Output formats for converted documents.

use mdrich_core::{Block, Document, Run, TableGrid};
use serde::Serialize;

// =============================================================================
// JSON Output
// =============================================================================

#[derive(Serialize)]
struct JsonDocument<'a> {
    blocks: Vec<JsonBlock<'a>>,
}

#[derive(Serialize)]
#[serde(tag = "type")]
enum JsonBlock<'a> {
    Heading { level: u8, runs: Vec<JsonRun<'a>> },
    Paragraph { runs: Vec<JsonRun<'a>> },
    BulletItem { runs: Vec<JsonRun<'a>> },
    Quote { runs: Vec<JsonRun<'a>> },
    Rule,
    DiagramText { text: &'a str },
    Table { columns: usize, rows: Vec<Vec<Vec<JsonRun<'a>>>> },
}

#[derive(Serialize)]
struct JsonRun<'a> {
    text: &'a str,
    bold: bool,
}

/// Pretty-printed JSON rendering of a document.
pub fn to_json(doc: &Document<'_>) -> serde_json::Result<String> {
    let json_doc = JsonDocument {
        blocks: doc.iter().map(convert_block).collect(),
    };
    serde_json::to_string_pretty(&json_doc)
}

fn convert_block<'a>(block: &'a Block<'_>) -> JsonBlock<'a> {
    match block {
        Block::Heading(level, runs) => JsonBlock::Heading {
            level: level.get(),
            runs: convert_runs(runs),
        },
        Block::Paragraph(runs) => JsonBlock::Paragraph {
            runs: convert_runs(runs),
        },
        Block::BulletItem(runs) => JsonBlock::BulletItem {
            runs: convert_runs(runs),
        },
        Block::Quote(runs) => JsonBlock::Quote {
            runs: convert_runs(runs),
        },
        Block::Rule => JsonBlock::Rule,
        Block::DiagramText(text) => JsonBlock::DiagramText { text: text.as_ref() },
        Block::Table(grid) => JsonBlock::Table {
            columns: grid.column_count(),
            rows: grid
                .rows()
                .iter()
                .map(|row| row.cells.iter().map(|c| convert_runs(&c.runs)).collect())
                .collect(),
        },
    }
}

fn convert_runs<'a>(runs: &'a [Run<'_>]) -> Vec<JsonRun<'a>> {
    runs.iter()
        .map(|r| JsonRun {
            text: r.text.as_ref(),
            bold: r.bold,
        })
        .collect()
}

// =============================================================================
// Text Output
// =============================================================================

/// One line per block.
pub fn summary(doc: &Document<'_>) -> String {
    let mut lines = vec![format!("Blocks: {}", doc.len())];
    for (i, block) in doc.iter().enumerate() {
        lines.push(format!("  [{}] {}", i + 1, describe_block(block)));
    }
    lines.join("\n")
}

/// Block list with content, bold shown as `**text**`.
pub fn verbose(doc: &Document<'_>) -> String {
    let mut lines = vec![
        "=== Document ===".to_string(),
        format!("Blocks: {}", doc.len()),
        String::new(),
    ];
    for (i, block) in doc.iter().enumerate() {
        lines.push(format!("[{}] {}", i + 1, describe_block(block)));
        match block {
            Block::Heading(_, runs)
            | Block::Paragraph(runs)
            | Block::BulletItem(runs)
            | Block::Quote(runs) => lines.push(format!("  Content: {}", format_runs(runs))),
            Block::DiagramText(text) => lines.push(format!("  Content: {}", text)),
            Block::Table(grid) => lines.extend(table_rows(grid)),
            Block::Rule => {}
        }
    }
    lines.join("\n")
}

fn describe_block(block: &Block<'_>) -> String {
    match block {
        Block::Heading(level, _) => format!("Heading (level {})", level.get()),
        Block::Paragraph(_) => "Paragraph".to_string(),
        Block::BulletItem(_) => "BulletItem".to_string(),
        Block::Quote(_) => "Quote".to_string(),
        Block::Rule => "Rule".to_string(),
        Block::DiagramText(_) => "DiagramText".to_string(),
        Block::Table(t) => format!(
            "Table ({} rows x {} columns)",
            t.row_count(),
            t.column_count()
        ),
    }
}

fn table_rows(grid: &TableGrid<'_>) -> Vec<String> {
    grid.rows()
        .iter()
        .enumerate()
        .map(|(i, row)| {
            let header_marker = if i == 0 { " (header)" } else { "" };
            let cells: Vec<String> = row.cells.iter().map(|c| format_runs(&c.runs)).collect();
            format!("  Row {}{}: {}", i + 1, header_marker, cells.join(" | "))
        })
        .collect()
}

fn format_runs(runs: &[Run<'_>]) -> String {
    let mut result = String::new();
    for run in runs {
        if run.bold {
            result.push_str("**");
            result.push_str(&run.text);
            result.push_str("**");
        } else {
            result.push_str(&run.text);
        }
    }
    result
}

// =============================================================================
// Statistics
// =============================================================================

#[derive(Debug, Default, PartialEq, Eq)]
pub struct DocumentStats {
    pub total_blocks: usize,
    pub headings: usize,
    pub paragraphs: usize,
    pub bullets: usize,
    pub quotes: usize,
    pub rules: usize,
    pub diagram_lines: usize,
    pub tables: usize,
    pub table_cells: usize,
    pub bold_runs: usize,
    pub chars: usize,
    pub words: usize,
    pub lines: usize,
}

impl DocumentStats {
    pub fn from_document(doc: &Document<'_>, input: &str) -> Self {
        let mut stats = Self {
            chars: input.chars().count(),
            words: input.split_whitespace().count(),
            lines: input.lines().count(),
            ..Self::default()
        };

        for block in doc {
            stats.total_blocks += 1;
            match block {
                Block::Heading(..) => stats.headings += 1,
                Block::Paragraph(_) => stats.paragraphs += 1,
                Block::BulletItem(_) => stats.bullets += 1,
                Block::Quote(_) => stats.quotes += 1,
                Block::Rule => stats.rules += 1,
                Block::DiagramText(_) => stats.diagram_lines += 1,
                Block::Table(grid) => {
                    stats.tables += 1;
                    stats.table_cells += grid.row_count() * grid.column_count();
                    for row in grid.rows() {
                        for cell in &row.cells {
                            stats.bold_runs += cell.runs.iter().filter(|r| r.bold).count();
                        }
                    }
                }
            }
            if let Some(runs) = block.runs() {
                stats.bold_runs += runs.iter().filter(|r| r.bold).count();
            }
        }
        stats
    }
}
