//! Document model produced by the converter.
//!
//! The model is deliberately flat: a [`Document`] is an ordered sequence of
//! [`Block`]s, and every text-bearing block holds a sequence of styled
//! [`Run`]s. Text borrows from the converted input wherever possible.

use std::borrow::Cow;
use std::slice;

/// Borrowed or owned string type for zero-copy conversion.
pub type CowStr<'a> = Cow<'a, str>;

/// A converted document.
///
/// Created empty by [`DocumentBuilder`](crate::builder::DocumentBuilder) and
/// read-only once returned.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Document<'a> {
    blocks: Vec<Block<'a>>,
}

impl<'a> Document<'a> {
    pub(crate) fn from_blocks(blocks: Vec<Block<'a>>) -> Self {
        Self { blocks }
    }

    /// Blocks in document order.
    #[inline]
    pub fn blocks(&self) -> &[Block<'a>] {
        &self.blocks
    }

    /// Number of blocks.
    #[inline]
    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    /// Check if the document has no blocks.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    /// Iterate over the blocks in document order.
    #[inline]
    pub fn iter(&self) -> slice::Iter<'_, Block<'a>> {
        self.blocks.iter()
    }

    /// Consume the document, returning its blocks.
    pub fn into_blocks(self) -> Vec<Block<'a>> {
        self.blocks
    }
}

impl<'d, 'a> IntoIterator for &'d Document<'a> {
    type Item = &'d Block<'a>;
    type IntoIter = slice::Iter<'d, Block<'a>>;

    fn into_iter(self) -> Self::IntoIter {
        self.blocks.iter()
    }
}

/// One structural unit of the output document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Block<'a> {
    /// Section heading, levels 1-4.
    Heading(HeadingLevel, Vec<Run<'a>>),
    /// Plain paragraph.
    Paragraph(Vec<Run<'a>>),
    /// Single bullet list item.
    BulletItem(Vec<Run<'a>>),
    /// Block quotation.
    Quote(Vec<Run<'a>>),
    /// Hard page/section break.
    Rule,
    /// One line of a fenced diagram, kept verbatim.
    DiagramText(CowStr<'a>),
    /// Pipe-delimited table.
    Table(TableGrid<'a>),
}

impl<'a> Block<'a> {
    /// Styled runs of a text-bearing block.
    ///
    /// Returns `None` for rules, diagram lines and tables.
    pub fn runs(&self) -> Option<&[Run<'a>]> {
        match self {
            Block::Heading(_, runs)
            | Block::Paragraph(runs)
            | Block::BulletItem(runs)
            | Block::Quote(runs) => Some(runs),
            Block::Rule | Block::DiagramText(_) | Block::Table(_) => None,
        }
    }

    /// Short lowercase name of the block kind.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Block::Heading(..) => "heading",
            Block::Paragraph(_) => "paragraph",
            Block::BulletItem(_) => "bullet",
            Block::Quote(_) => "quote",
            Block::Rule => "rule",
            Block::DiagramText(_) => "diagram",
            Block::Table(_) => "table",
        }
    }
}

/// Heading level, guaranteed to be within 1-4.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct HeadingLevel(u8);

impl HeadingLevel {
    /// Deepest supported heading level.
    pub const MAX: u8 = 4;

    /// Create a heading level, rejecting anything outside 1-4.
    #[inline]
    pub const fn new(level: u8) -> Option<Self> {
        if level >= 1 && level <= Self::MAX {
            Some(Self(level))
        } else {
            None
        }
    }

    /// The numeric level.
    #[inline]
    pub const fn get(self) -> u8 {
        self.0
    }
}

/// A contiguous span of text sharing one style.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Run<'a> {
    /// Visible text, markers removed.
    pub text: CowStr<'a>,
    /// Whether the span is bold.
    pub bold: bool,
}

impl<'a> Run<'a> {
    /// A plain (non-bold) run.
    #[inline]
    pub fn plain(text: impl Into<CowStr<'a>>) -> Self {
        Self {
            text: text.into(),
            bold: false,
        }
    }

    /// A bold run.
    #[inline]
    pub fn bold(text: impl Into<CowStr<'a>>) -> Self {
        Self {
            text: text.into(),
            bold: true,
        }
    }
}

/// Concatenate the visible text of a run sequence.
pub fn runs_text(runs: &[Run<'_>]) -> String {
    runs.iter().map(|r| r.text.as_ref()).collect()
}

/// A reconstructed table.
///
/// Every row has exactly [`column_count`](TableGrid::column_count) cells.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TableGrid<'a> {
    column_count: usize,
    rows: Vec<Row<'a>>,
}

impl<'a> TableGrid<'a> {
    pub(crate) fn new(column_count: usize, rows: Vec<Row<'a>>) -> Self {
        debug_assert!(rows.iter().all(|r| r.cells.len() == column_count));
        Self { column_count, rows }
    }

    /// Table rows; row 0 is conventionally the header row.
    #[inline]
    pub fn rows(&self) -> &[Row<'a>] {
        &self.rows
    }

    /// Number of cells in every row.
    #[inline]
    pub fn column_count(&self) -> usize {
        self.column_count
    }

    /// Number of rows.
    #[inline]
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Check if the grid has no rows.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Look up a cell by row and column.
    pub fn cell(&self, row: usize, column: usize) -> Option<&Cell<'a>> {
        self.rows.get(row)?.cells.get(column)
    }
}

/// A single table row.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Row<'a> {
    /// Cells in column order.
    pub cells: Vec<Cell<'a>>,
}

/// A single table cell.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Cell<'a> {
    /// Cell content.
    pub runs: Vec<Run<'a>>,
}

impl Cell<'_> {
    /// Visible cell text.
    pub fn text(&self) -> String {
        runs_text(&self.runs)
    }
}
