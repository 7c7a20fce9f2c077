//! Line state machine driving the conversion.
//!
//! A single forward pass with no lookahead. Every decision depends only on
//! the current line and the current [`ParserState`], which lives for exactly
//! one conversion call.

use std::mem;

use crate::ast::Document;
use crate::builder::DocumentBuilder;
use crate::classify::{classify_line, is_fence_close, pipe_count, LineKind};
use crate::error::{Diagnostic, Diagnostics};
use crate::lexer::{Lexer, Line};
use crate::table::TableAccumulator;

/// Default fenced-block language treated as a diagram.
pub const DEFAULT_DIAGRAM_LANGUAGE: &str = "mermaid";

/// Conversion settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConvertOptions {
    /// Fence info strings (compared case-insensitively) that open a diagram.
    pub diagram_languages: Vec<String>,
}

impl Default for ConvertOptions {
    fn default() -> Self {
        Self {
            diagram_languages: vec![DEFAULT_DIAGRAM_LANGUAGE.to_string()],
        }
    }
}

impl ConvertOptions {
    /// Accept an additional diagram fence language.
    pub fn with_diagram_language(mut self, language: impl Into<String>) -> Self {
        self.diagram_languages.push(language.into());
        self
    }

    /// Check if a fence info string opens a diagram block.
    pub fn is_diagram_language(&self, language: &str) -> bool {
        !language.is_empty()
            && self
                .diagram_languages
                .iter()
                .any(|l| l.eq_ignore_ascii_case(language))
    }
}

/// A converted document together with the notes collected on the way.
#[derive(Debug)]
pub struct Conversion<'a> {
    /// The converted document.
    pub document: Document<'a>,
    /// Lossy or unterminated constructs encountered.
    pub diagnostics: Diagnostics,
}

impl Conversion<'_> {
    /// Check if the conversion produced no diagnostics.
    pub fn is_clean(&self) -> bool {
        self.diagnostics.is_empty()
    }
}

/// Markup to block-document converter.
///
/// Holds only immutable options, so one converter can serve any number of
/// independent conversions, including from several threads.
#[derive(Debug, Clone, Default)]
pub struct Converter {
    options: ConvertOptions,
}

impl Converter {
    /// Create a converter with the given options.
    #[inline]
    pub fn new(options: ConvertOptions) -> Self {
        Self { options }
    }

    /// The options in effect.
    #[inline]
    pub fn options(&self) -> &ConvertOptions {
        &self.options
    }

    /// Convert input text, discarding diagnostics.
    #[inline]
    pub fn convert<'a>(&self, input: &'a str) -> Document<'a> {
        self.convert_with_diagnostics(input).document
    }

    /// Convert input text, returning the document and its diagnostics.
    pub fn convert_with_diagnostics<'a>(&self, input: &'a str) -> Conversion<'a> {
        self.convert_lines(Lexer::new(input))
    }

    /// Convert input text, failing on the first diagnostic.
    pub fn convert_strict<'a>(&self, input: &'a str) -> Result<Document<'a>, Diagnostic> {
        let conversion = self.convert_with_diagnostics(input);
        match conversion.diagnostics.into_first() {
            Some(first) => Err(first),
            None => Ok(conversion.document),
        }
    }

    /// Convert pre-split lines.
    pub fn convert_lines<'a, I>(&self, lines: I) -> Conversion<'a>
    where
        I: IntoIterator<Item = Line<'a>>,
    {
        let mut machine = LineMachine::new(&self.options);
        for line in lines {
            machine.feed(line);
        }
        machine.finish()
    }
}

/// Convert a sequence of lines with default options.
pub fn convert<'a, I>(lines: I) -> Document<'a>
where
    I: IntoIterator<Item = &'a str>,
{
    let numbered = lines
        .into_iter()
        .zip(1u32..)
        .map(|(text, number)| Line::new(text, number));
    Converter::default().convert_lines(numbered).document
}

/// Convert a whole input string with default options.
pub fn convert_str(input: &str) -> Document<'_> {
    Converter::default().convert(input)
}

/// Mode of the line state machine.
#[derive(Debug, Default)]
enum ParserState<'a> {
    #[default]
    Normal,
    InTable(TableAccumulator<'a>),
    InDiagram { language: &'a str, opened_at: u32 },
}

struct LineMachine<'o, 'a> {
    options: &'o ConvertOptions,
    state: ParserState<'a>,
    builder: DocumentBuilder<'a>,
    diagnostics: Diagnostics,
}

impl<'o, 'a> LineMachine<'o, 'a> {
    fn new(options: &'o ConvertOptions) -> Self {
        Self {
            options,
            state: ParserState::Normal,
            builder: DocumentBuilder::new(),
            diagnostics: Diagnostics::new(),
        }
    }

    /// Advance by one line. A line without pipes ends a buffered table, which
    /// is flushed before that line is classified, so a fence opening right
    /// after a table emits the table ahead of the diagram lines.
    fn feed(&mut self, line: Line<'a>) {
        let trimmed = line.trimmed();

        match mem::take(&mut self.state) {
            ParserState::InDiagram {
                language,
                opened_at,
            } => {
                if is_fence_close(trimmed) {
                    log::debug!(
                        "line {}: closed {} fence opened at line {}",
                        line.number,
                        language,
                        opened_at
                    );
                } else {
                    self.builder.diagram(line.text.trim_end());
                    self.state = ParserState::InDiagram {
                        language,
                        opened_at,
                    };
                }
            }
            ParserState::InTable(mut table) => {
                if pipe_count(trimmed) > 0 {
                    table.push(Line::new(trimmed, line.number));
                    self.state = ParserState::InTable(table);
                } else {
                    self.flush_table(table);
                    self.feed_normal(line.number, trimmed);
                }
            }
            ParserState::Normal => self.feed_normal(line.number, trimmed),
        }
    }

    fn feed_normal(&mut self, number: u32, trimmed: &'a str) {
        match classify_line(trimmed, self.options) {
            LineKind::FenceOpen(language) => {
                log::debug!("line {}: opened {} fence", number, language);
                self.state = ParserState::InDiagram {
                    language,
                    opened_at: number,
                };
            }
            LineKind::TableStart => {
                log::debug!("line {}: table started", number);
                let mut table = TableAccumulator::new();
                table.push(Line::new(trimmed, number));
                self.state = ParserState::InTable(table);
            }
            LineKind::Heading(level, text) => self.builder.heading(level, text),
            LineKind::Bullet(text) => self.builder.bullet(text),
            LineKind::Quote(text) => self.builder.quote(text),
            LineKind::Rule => self.builder.rule(),
            LineKind::Paragraph(text) => self.builder.paragraph(text),
            LineKind::Blank => {}
        }
    }

    fn flush_table(&mut self, table: TableAccumulator<'a>) {
        log::debug!(
            "flushing table of {} line(s) from line {:?}",
            table.len(),
            table.first_line()
        );
        let grid = table.finish(&mut self.diagnostics);
        self.builder.table(grid);
    }

    fn finish(mut self) -> Conversion<'a> {
        match mem::take(&mut self.state) {
            ParserState::Normal => {}
            ParserState::InTable(table) => self.flush_table(table),
            ParserState::InDiagram {
                language,
                opened_at,
            } => {
                self.diagnostics
                    .push(Diagnostic::unclosed_fence(language, opened_at));
            }
        }

        Conversion {
            document: self.builder.finish(),
            diagnostics: self.diagnostics,
        }
    }
}
