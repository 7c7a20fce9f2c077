//! Bold-emphasis run splitting.
//!
//! A line is split on non-greedy `**…**` pairs into alternating plain and
//! bold runs. There is no nesting and no escaping: an opening `**` without a
//! closing partner stays in the surrounding plain text.

use std::borrow::Cow;

use memchr::memmem;

use crate::ast::Run;

const MARKER: &[u8] = b"**";

/// Split a line into styled runs.
///
/// Empty segments are dropped, so an empty line yields no runs and `****`
/// contributes nothing. The visible text is otherwise preserved byte for
/// byte, including whitespace.
pub fn format_runs(line: &str) -> Vec<Run<'_>> {
    let mut runs = Vec::new();
    if line.is_empty() {
        return runs;
    }

    let finder = memmem::Finder::new(MARKER);
    let bytes = line.as_bytes();
    let mut plain_start = 0;
    let mut pos = 0;

    while let Some(open_offset) = finder.find(&bytes[pos..]) {
        let open = pos + open_offset;
        let content_start = open + MARKER.len();

        let Some(close_offset) = finder.find(&bytes[content_start..]) else {
            break;
        };
        let close = content_start + close_offset;

        push_run(&mut runs, &line[plain_start..open], false);
        push_run(&mut runs, &line[content_start..close], true);

        pos = close + MARKER.len();
        plain_start = pos;
    }

    push_run(&mut runs, &line[plain_start..], false);
    runs
}

#[inline]
fn push_run<'a>(runs: &mut Vec<Run<'a>>, text: &'a str, bold: bool) {
    if !text.is_empty() {
        runs.push(Run {
            text: Cow::Borrowed(text),
            bold,
        });
    }
}
