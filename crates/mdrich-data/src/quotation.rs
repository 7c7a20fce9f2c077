//! Product spec extraction from a quotation sheet.
//!
//! Quotation sheets are free-form: a title block, then a header row, then
//! one row per product. The header row is located by content, and the row
//! right after it supplies the product fields.

/// Matches a header row by a substring in a given column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderMatcher {
    pub column: usize,
    pub needle: String,
}

impl HeaderMatcher {
    pub fn new(column: usize, needle: impl Into<String>) -> Self {
        Self {
            column,
            needle: needle.into(),
        }
    }

    fn matches(&self, row: &[String]) -> bool {
        row.get(self.column)
            .is_some_and(|cell| cell.contains(&self.needle))
    }
}

/// Where things live in a quotation sheet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuotationLayout {
    /// All of these must match for a row to be the header.
    pub header: Vec<HeaderMatcher>,
    pub name_column: usize,
    pub dimensions_column: usize,
    pub price_column: usize,
    pub spec_column: usize,
}

impl Default for QuotationLayout {
    fn default() -> Self {
        Self {
            header: vec![HeaderMatcher::new(3, "제품명"), HeaderMatcher::new(7, "공급가")],
            name_column: 3,
            dimensions_column: 5,
            price_column: 7,
            spec_column: 8,
        }
    }
}

/// Fields of the first product row. Empty or missing cells are `None`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProductSpecs {
    pub name: Option<String>,
    /// Dimension text with `×` normalized to `x`.
    pub dimensions: Option<String>,
    pub price: Option<String>,
    pub spec: Option<String>,
}

/// Find the header row and read the product row that follows it.
///
/// Returns `None` when no header row matches or nothing follows it.
pub fn extract_product_specs(rows: &[Vec<String>], layout: &QuotationLayout) -> Option<ProductSpecs> {
    let header_index = rows
        .iter()
        .position(|row| layout.header.iter().all(|m| m.matches(row)))?;
    let product = rows.get(header_index + 1)?;

    log::debug!("quotation header at row {}", header_index + 1);

    let cell = |column: usize| {
        product
            .get(column)
            .map(|c| c.trim())
            .filter(|c| !c.is_empty())
            .map(str::to_string)
    };

    Some(ProductSpecs {
        name: cell(layout.name_column),
        dimensions: cell(layout.dimensions_column).map(|d| d.replace('×', "x")),
        price: cell(layout.price_column),
        spec: cell(layout.spec_column),
    })
}
