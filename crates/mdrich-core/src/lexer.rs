//! Line splitter feeding the state machine.
//!
//! Uses `memchr` for newline scanning (SIMD on supported platforms) and
//! borrows every line directly from the input.

use memchr::memchr;

/// A single input line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Line<'a> {
    /// The line text, without the line terminator.
    pub text: &'a str,
    /// 1-based line number.
    pub number: u32,
}

impl<'a> Line<'a> {
    /// Create a line from text and its 1-based number.
    #[inline]
    pub const fn new(text: &'a str, number: u32) -> Self {
        Self { text, number }
    }

    /// Get the line text with leading/trailing whitespace removed.
    #[inline(always)]
    pub fn trimmed(&self) -> &'a str {
        self.text.trim()
    }
}

/// Iterator over the lines of an input string.
///
/// Accepts both `\n` and `\r\n` terminators. A trailing terminator does not
/// produce an extra empty line.
pub struct Lexer<'a> {
    input: &'a str,
    offset: usize,
    number: u32,
}

impl<'a> Lexer<'a> {
    /// Create a new lexer for the given input.
    #[inline]
    pub fn new(input: &'a str) -> Self {
        Self {
            input,
            offset: 0,
            number: 0,
        }
    }

    /// Check if all input has been consumed.
    #[inline(always)]
    pub fn is_eof(&self) -> bool {
        self.offset >= self.input.len()
    }
}

impl<'a> Iterator for Lexer<'a> {
    type Item = Line<'a>;

    fn next(&mut self) -> Option<Line<'a>> {
        if self.is_eof() {
            return None;
        }

        let bytes = self.input.as_bytes();
        let start = self.offset;
        let end = match memchr(b'\n', &bytes[start..]) {
            Some(pos) => start + pos,
            None => bytes.len(),
        };

        let text_end = if end > start && bytes[end - 1] == b'\r' {
            end - 1
        } else {
            end
        };

        self.offset = if end < bytes.len() { end + 1 } else { end };
        self.number += 1;

        // `\n` and `\r` are ASCII, so both slice bounds sit on char boundaries.
        Some(Line::new(&self.input[start..text_end], self.number))
    }
}
