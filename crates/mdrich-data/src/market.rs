//! Competitor price statistics.

use std::fmt;

use crate::number::{format_thousands, parse_digits};
use crate::records::RecordTable;

const PRICE_COLUMNS: &[&str] = &["가격", "Price"];

/// Price spread over competitor listings.
#[derive(Debug, Clone, PartialEq)]
pub struct PriceSummary {
    /// All listings, priced or not.
    pub listings: usize,
    /// Listings with a readable price.
    pub priced: usize,
    pub mean: f64,
    pub min: f64,
    pub max: f64,
}

impl fmt::Display for PriceSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Competitor Pricing (n={}):", self.listings)?;
        writeln!(f, "Avg: {}", format_thousands(self.mean))?;
        writeln!(f, "Min: {}", format_thousands(self.min))?;
        write!(f, "Max: {}", format_thousands(self.max))
    }
}

/// Summarize listing prices.
///
/// The price column is the first whose name contains `가격` or `Price`; its
/// cells are reduced to their digits (`"12,500원"` is 12500). Returns `None`
/// without a price column or without a single readable price.
pub fn summarize_prices(listings: &RecordTable) -> Option<PriceSummary> {
    let Some(column) = listings.find_column(PRICE_COLUMNS) else {
        log::warn!("no price column among {:?}", listings.headers());
        return None;
    };

    let prices: Vec<f64> = listings.column_values(column).filter_map(parse_digits).collect();
    if prices.is_empty() {
        return None;
    }

    let sum: f64 = prices.iter().sum();
    let min = prices.iter().copied().fold(f64::INFINITY, f64::min);
    let max = prices.iter().copied().fold(f64::NEG_INFINITY, f64::max);

    Some(PriceSummary {
        listings: listings.len(),
        priced: prices.len(),
        mean: sum / prices.len() as f64,
        min,
        max,
    })
}
