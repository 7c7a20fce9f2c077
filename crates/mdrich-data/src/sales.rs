//! Keyword-filtered sales aggregation.
//!
//! Sales sheets carry one column pair per year (`수주액 2023` revenue,
//! `판매량 2023` quantity). Rows are selected by matching the category
//! column against a keyword alternation, then each year is summed.

use std::fmt;

use regex::{Regex, RegexBuilder};

use crate::error::DataError;
use crate::number::{format_thousands, sum_amounts};
use crate::records::RecordTable;

/// What to aggregate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SalesQuery {
    /// Regex fragments joined by `|`, matched case-insensitively.
    pub keywords: Vec<String>,
    pub category_column: String,
    pub years: Vec<String>,
    /// Year reported separately as year-to-date revenue, if present.
    pub ytd_year: Option<String>,
}

impl Default for SalesQuery {
    fn default() -> Self {
        Self {
            keywords: ["Fan", "선풍기", "팬", "써큘레이터"]
                .map(String::from)
                .to_vec(),
            category_column: "품목".to_string(),
            years: ["2022", "2023", "2024"].map(String::from).to_vec(),
            ytd_year: Some("2025".to_string()),
        }
    }
}

impl SalesQuery {
    /// Compile the keyword alternation.
    pub fn pattern(&self) -> Result<Regex, DataError> {
        let pattern = self.keywords.join("|");
        RegexBuilder::new(&pattern)
            .case_insensitive(true)
            .build()
            .map_err(|source| DataError::InvalidPattern { pattern, source })
    }
}

/// Revenue column name for a year.
pub fn revenue_column(year: &str) -> String {
    format!("수주액 {}", year)
}

/// Quantity column name for a year.
pub fn quantity_column(year: &str) -> String {
    format!("판매량 {}", year)
}

/// Totals for one year.
#[derive(Debug, Clone, PartialEq)]
pub struct YearTotals {
    pub year: String,
    pub quantity: f64,
    pub revenue: f64,
}

/// Aggregated sales for the matched rows.
#[derive(Debug, Clone, PartialEq)]
pub struct SalesSummary {
    /// Number of rows whose category matched.
    pub matched: usize,
    pub years: Vec<YearTotals>,
    /// Year-to-date revenue, when the column exists.
    pub ytd: Option<(String, f64)>,
}

impl SalesSummary {
    pub fn total_quantity(&self) -> f64 {
        self.years.iter().map(|y| y.quantity).sum()
    }

    pub fn total_revenue(&self) -> f64 {
        self.years.iter().map(|y| y.revenue).sum()
    }
}

impl fmt::Display for SalesSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let span = match (self.years.first(), self.years.last()) {
            (Some(first), Some(last)) => format!("{}-{}", first.year, last.year),
            _ => "no years".to_string(),
        };
        writeln!(
            f,
            "Total Sales ({}): {} Products Triggered.",
            span, self.matched
        )?;
        write!(
            f,
            "Total Vol: {}, Total Rev: {} KRW",
            format_thousands(self.total_quantity()),
            format_thousands(self.total_revenue())
        )?;
        write!(f, "\nYearly Breakdown:")?;
        for year in &self.years {
            write!(
                f,
                "\n{}: {} units, {} KRW",
                year.year,
                format_thousands(year.quantity),
                format_thousands(year.revenue)
            )?;
        }
        if let Some((year, revenue)) = &self.ytd {
            write!(f, "\n{} (YTD): {} KRW", year, format_thousands(*revenue))?;
        }
        Ok(())
    }
}

/// Sum quantity and revenue per year over the rows matching the query.
///
/// Missing year columns count as zero. Fails when the category column is
/// absent or the keywords do not form a valid pattern.
pub fn summarize_sales(sales: &RecordTable, query: &SalesQuery) -> Result<SalesSummary, DataError> {
    let category = sales
        .column(&query.category_column)
        .ok_or_else(|| DataError::MissingColumn(query.category_column.clone()))?;
    let pattern = query.pattern()?;

    let matched: Vec<usize> = (0..sales.len())
        .filter(|&row| pattern.is_match(sales.value(row, category)))
        .collect();
    log::info!(
        "{} of {} sales row(s) match /{}/",
        matched.len(),
        sales.len(),
        pattern.as_str()
    );

    let column_sum = |name: &str| -> f64 {
        match sales.column(name) {
            Some(col) => sum_amounts(matched.iter().map(|&row| sales.value(row, col))),
            None => {
                log::debug!("sales column {:?} not present", name);
                0.0
            }
        }
    };

    let years = query
        .years
        .iter()
        .map(|year| YearTotals {
            year: year.clone(),
            quantity: column_sum(&quantity_column(year)),
            revenue: column_sum(&revenue_column(year)),
        })
        .collect();

    let ytd = query.ytd_year.as_ref().and_then(|year| {
        sales.column(&revenue_column(year))?;
        Some((year.clone(), column_sum(&revenue_column(year))))
    });

    Ok(SalesSummary {
        matched: matched.len(),
        years,
        ytd,
    })
}
