//! Accumulates blocks into a [`Document`].

use std::borrow::Cow;

use crate::ast::{Block, Document, HeadingLevel, TableGrid};
use crate::inline::format_runs;

/// Appends blocks in arrival order.
///
/// No reordering, deduplication or validation happens here; blocks are
/// already well-formed by construction.
#[derive(Debug, Default)]
pub struct DocumentBuilder<'a> {
    blocks: Vec<Block<'a>>,
}

impl<'a> DocumentBuilder<'a> {
    /// Create an empty builder.
    pub fn new() -> Self {
        Self {
            blocks: Vec::with_capacity(16),
        }
    }

    /// Append a finished block.
    #[inline]
    pub fn append(&mut self, block: Block<'a>) {
        self.blocks.push(block);
    }

    /// Number of blocks appended so far.
    #[inline]
    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    /// Check if nothing has been appended.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    pub fn heading(&mut self, level: HeadingLevel, text: &'a str) {
        self.append(Block::Heading(level, format_runs(text)));
    }

    pub fn paragraph(&mut self, text: &'a str) {
        self.append(Block::Paragraph(format_runs(text)));
    }

    pub fn bullet(&mut self, text: &'a str) {
        self.append(Block::BulletItem(format_runs(text)));
    }

    pub fn quote(&mut self, text: &'a str) {
        self.append(Block::Quote(format_runs(text)));
    }

    pub fn rule(&mut self) {
        self.append(Block::Rule);
    }

    pub fn diagram(&mut self, text: &'a str) {
        self.append(Block::DiagramText(Cow::Borrowed(text)));
    }

    /// Append a table, skipping empty grids.
    pub fn table(&mut self, grid: TableGrid<'a>) {
        if !grid.is_empty() {
            self.append(Block::Table(grid));
        }
    }

    /// Finish building and return the document.
    pub fn finish(self) -> Document<'a> {
        Document::from_blocks(self.blocks)
    }
}
