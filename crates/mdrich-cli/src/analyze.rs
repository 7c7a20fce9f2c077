//! The `analyze` command: product specs, sales, competitor pricing and
//! package matching over the report's source sheets.
//!
//! Every input is optional. A sheet that is missing or fails to load is
//! logged and the sections depending on it report that no data was found.

use std::fmt::{self, Write};
use std::path::{Path, PathBuf};

use mdrich_data::{
    extract_product_specs, match_packages, read_sheet_rows, summarize_prices, summarize_sales,
    DataError, Dimensions, ProductSpecs, QuotationLayout, RecordTable,
};

use crate::config::Config;

/// Source sheets for one analysis run.
///
/// Each sheet is a CSV file or a spreadsheet workbook, chosen by extension.
#[derive(Debug, Clone, Default)]
pub struct AnalyzeInputs {
    pub parts: Option<PathBuf>,
    pub sales: Option<PathBuf>,
    pub crawler: Option<PathBuf>,
    pub quotation: Option<PathBuf>,
    /// Product dimensions overriding the quotation's.
    pub dimensions: Option<String>,
}

/// Run the full analysis and render it as text.
pub fn run_analysis(inputs: &AnalyzeInputs, config: &Config) -> Result<String, fmt::Error> {
    let parts = load_table("parts", inputs.parts.as_deref());
    let sales = load_table("sales", inputs.sales.as_deref());
    let crawler = load_table("crawler", inputs.crawler.as_deref());
    let quotation = inputs.quotation.as_deref().and_then(|path| {
        read_sheet_rows(path)
            .map_err(|e| log::warn!("Error loading quotation: {}", e))
            .ok()
    });

    let mut out = String::new();

    let specs = quotation
        .as_deref()
        .and_then(|rows| extract_product_specs(rows, &QuotationLayout::default()));
    write_specs(&mut out, specs.as_ref())?;

    writeln!(out, "\n--- Sales & Market Analysis ---")?;
    write_sales(&mut out, sales.as_ref(), config)?;
    match crawler.as_ref().and_then(summarize_prices) {
        Some(prices) => writeln!(out, "{}", prices)?,
        None => writeln!(out, "No Competitor Data Found")?,
    }

    let dimensions = inputs
        .dimensions
        .clone()
        .or_else(|| specs.and_then(|s| s.dimensions));
    match dimensions {
        Some(dims) => write_packages(&mut out, parts.as_ref(), &dims, config.analysis.top_matches)?,
        None => writeln!(out, "Skipping package matching due to missing dimensions.")?,
    }

    Ok(out)
}

fn load_table(label: &str, path: Option<&Path>) -> Option<RecordTable> {
    let path = path?;
    match RecordTable::from_path(path) {
        Ok(table) => Some(table),
        Err(e) => {
            log::warn!("Error loading {}: {}", label, e);
            None
        }
    }
}

fn write_specs(out: &mut impl Write, specs: Option<&ProductSpecs>) -> fmt::Result {
    writeln!(out, "--- Product Specs Extraction ---")?;
    let Some(specs) = specs else {
        return writeln!(out, "No product specs found in quotation.");
    };

    let field = |value: &Option<String>| value.clone().unwrap_or_else(|| "N/A".to_string());
    writeln!(out, "Name: {}", field(&specs.name))?;
    writeln!(out, "Dimensions: {}", field(&specs.dimensions))?;
    writeln!(out, "Price: {}", field(&specs.price))?;
    writeln!(out, "Spec: {}", field(&specs.spec))
}

fn write_sales(out: &mut impl Write, sales: Option<&RecordTable>, config: &Config) -> fmt::Result {
    let Some(sales) = sales else {
        return writeln!(out, "No Sales Data Found");
    };

    let query = config.sales_query();
    match summarize_sales(sales, &query) {
        Ok(summary) if summary.matched == 0 => writeln!(
            out,
            "No sales records found for keywords: {}",
            query.keywords.join(", ")
        ),
        Ok(summary) => writeln!(out, "{}", summary),
        Err(e) => {
            log::warn!("sales analysis failed: {}", e);
            writeln!(out, "No Sales Data Found")
        }
    }
}

fn write_packages(
    out: &mut impl Write,
    parts: Option<&RecordTable>,
    dims: &str,
    top: usize,
) -> fmt::Result {
    writeln!(out, "\n--- Package Matching ---")?;
    let Some(product) = Dimensions::parse(dims) else {
        return writeln!(out, "Could not parse product dimensions from: {}", dims);
    };
    writeln!(out, "Product Dimensions (L x W x H): {}", product)?;

    let Some(parts) = parts else {
        return writeln!(out, "No Parts Data Found");
    };

    match match_packages(parts, product) {
        Ok(matches) => {
            writeln!(out, "Found {} potential packages.", matches.len())?;
            for m in matches.iter().take(top) {
                writeln!(
                    out,
                    "{} ({}): gap {:?}, total {}, {}",
                    m.name, m.size, m.slack, m.total_slack, m.verdict
                )?;
            }
            Ok(())
        }
        Err(DataError::MissingColumn(column)) => {
            log::debug!("parts column missing: {}", column);
            writeln!(out, "Required columns (Type, Size) not found in Parts DB.")
        }
        Err(e) => {
            log::warn!("package matching failed: {}", e);
            Ok(())
        }
    }
}
