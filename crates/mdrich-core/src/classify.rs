//! Ordered line classification rules.
//!
//! Each rule inspects one trimmed line and either claims it or passes. The
//! rules are tried in [`RULES`] order and the first claim wins, so the
//! precedence between, say, a bullet (`- `) and a rule (`---`) is fixed by
//! position in the list.
//!
//! These rules cover lines seen outside a table or diagram. The state
//! machine handles fence closing and table continuation itself.

use memchr::memchr_iter;

use crate::ast::HeadingLevel;
use crate::parser::ConvertOptions;

/// What a single line means on its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind<'a> {
    /// Opening fence of a diagram block, with its language.
    FenceOpen(&'a str),
    /// First row of a pipe table.
    TableStart,
    /// Heading with its remaining text.
    Heading(HeadingLevel, &'a str),
    /// Bullet item text.
    Bullet(&'a str),
    /// Blockquote text, marker stripped.
    Quote(&'a str),
    /// Horizontal rule.
    Rule,
    /// Plain paragraph text.
    Paragraph(&'a str),
    /// Nothing to emit.
    Blank,
}

/// A classification rule.
pub type LineRule = for<'a> fn(&'a str, &ConvertOptions) -> Option<LineKind<'a>>;

/// Classification rules in precedence order.
pub const RULES: &[(&str, LineRule)] = &[
    ("fence-open", fence_open),
    ("pipes", pipes),
    ("heading", heading),
    ("bullet", bullet),
    ("quote", quote),
    ("rule", horizontal_rule),
    ("text", text),
];

/// Classify a trimmed line outside table and diagram mode.
pub fn classify_line<'a>(line: &'a str, options: &ConvertOptions) -> LineKind<'a> {
    RULES
        .iter()
        .find_map(|(name, rule)| {
            let kind = rule(line, options)?;
            log::trace!("{} rule claimed {:?}", name, line);
            Some(kind)
        })
        .unwrap_or(LineKind::Blank)
}

/// Count `|` characters in a line.
#[inline]
pub fn pipe_count(line: &str) -> usize {
    memchr_iter(b'|', line.as_bytes()).count()
}

/// Check if a trimmed line closes an open diagram fence.
#[inline]
pub fn is_fence_close(line: &str) -> bool {
    line.starts_with("```")
}

fn fence_open<'a>(line: &'a str, options: &ConvertOptions) -> Option<LineKind<'a>> {
    let language = line.strip_prefix("```")?.trim();
    options
        .is_diagram_language(language)
        .then_some(LineKind::FenceOpen(language))
}

fn pipes<'a>(line: &'a str, _: &ConvertOptions) -> Option<LineKind<'a>> {
    match pipe_count(line) {
        0 => None,
        // A lone pipe is not enough evidence of a table.
        1 => Some(LineKind::Paragraph(line)),
        _ => Some(LineKind::TableStart),
    }
}

fn heading<'a>(line: &'a str, _: &ConvertOptions) -> Option<LineKind<'a>> {
    const PREFIXES: [&str; 4] = ["# ", "## ", "### ", "#### "];

    PREFIXES.iter().zip(1u8..).find_map(|(prefix, level)| {
        let rest = line.strip_prefix(*prefix)?;
        Some(LineKind::Heading(HeadingLevel::new(level)?, rest))
    })
}

fn bullet<'a>(line: &'a str, _: &ConvertOptions) -> Option<LineKind<'a>> {
    line.strip_prefix("- ").map(LineKind::Bullet)
}

fn quote<'a>(line: &'a str, _: &ConvertOptions) -> Option<LineKind<'a>> {
    let rest = line.strip_prefix('>')?;
    let rest = rest.strip_prefix(' ').unwrap_or(rest);
    if rest.is_empty() {
        Some(LineKind::Blank)
    } else {
        Some(LineKind::Quote(rest))
    }
}

fn horizontal_rule<'a>(line: &'a str, _: &ConvertOptions) -> Option<LineKind<'a>> {
    line.starts_with("---").then_some(LineKind::Rule)
}

fn text<'a>(line: &'a str, _: &ConvertOptions) -> Option<LineKind<'a>> {
    if line.is_empty() {
        Some(LineKind::Blank)
    } else {
        Some(LineKind::Paragraph(line))
    }
}
