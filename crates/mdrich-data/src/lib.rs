//! # mdrich data
//!
//! The data side of a feasibility report: loading business records from CSV
//! files or workbook sheets, pulling the product spec out of a quotation
//! sheet, aggregating sales by category keyword, summarizing competitor
//! prices, and ranking packaging boxes by how well they fit the product.
//!
//! ```rust
//! use mdrich_data::{fit_slack, parse_dimensions, Dimensions};
//!
//! assert_eq!(parse_dimensions("41x137x51"), Some([41, 137, 51]));
//! assert_eq!(parse_dimensions("no numbers"), None);
//!
//! let slack = fit_slack(Dimensions::new(41, 137, 51), Dimensions::new(50, 140, 60));
//! assert_eq!(slack, Some([9, 3, 9]));
//! ```

pub mod dimensions;
pub mod error;
pub mod fit;
pub mod market;
pub mod number;
pub mod quotation;
pub mod records;
pub mod sales;
pub mod workbook;

pub use dimensions::{parse_dimensions, Dimensions};
pub use error::DataError;
pub use fit::{fit_slack, match_packages, rank_candidates, Candidate, FitMatch, Verdict};
pub use market::{summarize_prices, PriceSummary};
pub use quotation::{extract_product_specs, HeaderMatcher, ProductSpecs, QuotationLayout};
pub use records::RecordTable;
pub use sales::{summarize_sales, SalesQuery, SalesSummary, YearTotals};
pub use workbook::{is_workbook, read_sheet_rows};
