//! Lenient numeric parsing and report formatting.

/// Parse a numeric cell, ignoring `,` thousands separators.
///
/// Returns `None` for empty or non-numeric cells so they can be skipped
/// when summing.
pub fn parse_amount(cell: &str) -> Option<f64> {
    let cleaned: String = cell.chars().filter(|&c| c != ',').collect();
    let cleaned = cleaned.trim();
    if cleaned.is_empty() {
        return None;
    }
    cleaned.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Parse a price by keeping only its ASCII digits.
///
/// `"12,500원"` becomes `12500.0`. A cell without digits yields `None`.
pub fn parse_digits(cell: &str) -> Option<f64> {
    let digits: String = cell.chars().filter(char::is_ascii_digit).collect();
    if digits.is_empty() {
        return None;
    }
    digits.parse::<f64>().ok()
}

/// Sum the parseable amounts, skipping everything else.
pub fn sum_amounts<'a, I>(cells: I) -> f64
where
    I: IntoIterator<Item = &'a str>,
{
    cells.into_iter().filter_map(parse_amount).sum()
}

/// Format a value rounded to a whole number with `,` thousands separators.
pub fn format_thousands(value: f64) -> String {
    let rounded = value.round();
    let negative = rounded < 0.0;
    let digits = format!("{:.0}", rounded.abs());

    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if negative {
        out.push('-');
    }
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
