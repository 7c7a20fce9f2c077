//! Integration tests for the mdrich data utilities

use std::io::Write;
use std::path::Path;

use mdrich_data::fit::{package_candidates, verdict};
use mdrich_data::number::{format_thousands, parse_amount, parse_digits};
use mdrich_data::records::read_rows;
use mdrich_data::workbook::{is_workbook, read_sheet_rows};
use mdrich_data::{
    extract_product_specs, fit_slack, match_packages, parse_dimensions, rank_candidates,
    summarize_prices, summarize_sales, Candidate, DataError, Dimensions, QuotationLayout,
    RecordTable, SalesQuery, Verdict,
};
use pretty_assertions::assert_eq;
use rstest::rstest;
use rust_xlsxwriter::Workbook;
use tempfile::NamedTempFile;

fn table(csv: &str) -> RecordTable {
    RecordTable::from_reader(csv.as_bytes(), "inline").unwrap()
}

fn candidate(name: &str, size: &str) -> Candidate {
    Candidate {
        name: name.to_string(),
        size: size.to_string(),
        dimensions: Dimensions::parse(size).unwrap(),
    }
}

fn rows(raw: &[&[&str]]) -> Vec<Vec<String>> {
    raw.iter()
        .map(|r| r.iter().map(|c| c.to_string()).collect())
        .collect()
}

// ============================================================================
// Dimension Parsing Tests
// ============================================================================

#[rstest]
#[case("41x137x51", Some([41, 137, 51]))]
#[case("41×137×51", Some([41, 137, 51]))]
#[case("100*200*30", Some([100, 200, 30]))]
#[case("100 200 30", Some([100, 200, 30]))]
#[case("W 41 x D 137 x H 51 (mm)", Some([41, 137, 51]))]
#[case("1x2x3x4", Some([1, 2, 3]))]
#[case("41x137", None)]
#[case("no numbers", None)]
#[case("", None)]
fn test_parse_dimensions(#[case] input: &str, #[case] expected: Option<[u32; 3]>) {
    assert_eq!(parse_dimensions(input), expected);
}

#[test]
fn test_dimensions_from_str_names_input() {
    let err = "about a hand".parse::<Dimensions>().unwrap_err();
    assert!(matches!(err, DataError::UnparseableDimensions(ref s) if s == "about a hand"));
    assert_eq!(err.to_string(), "Could not parse dimensions from: \"about a hand\"");
}

#[test]
fn test_dimensions_display_and_sorted() {
    let dims = Dimensions::new(41, 137, 51);
    assert_eq!(dims.to_string(), "41x137x51");
    assert_eq!(dims.sorted(), [41, 51, 137]);
}

// ============================================================================
// Container Fit Tests
// ============================================================================

#[test]
fn test_fit_slack_reference_case() {
    let target = Dimensions::new(41, 137, 51);
    let slack = fit_slack(target, Dimensions::new(50, 140, 60)).unwrap();
    assert_eq!(slack, [9, 3, 9]);
    assert_eq!(slack.iter().sum::<u32>(), 21);
}

#[test]
fn test_fit_ignores_orientation() {
    let target = Dimensions::new(41, 137, 51);
    assert_eq!(
        fit_slack(target, Dimensions::new(140, 60, 50)),
        fit_slack(target, Dimensions::new(50, 140, 60))
    );
}

#[test]
fn test_fit_rejects_smaller_component() {
    let target = Dimensions::new(41, 137, 51);
    assert_eq!(fit_slack(target, Dimensions::new(50, 130, 60)), None);
}

#[test]
fn test_fit_exact_size_has_zero_slack() {
    let target = Dimensions::new(10, 20, 30);
    assert_eq!(fit_slack(target, Dimensions::new(30, 10, 20)), Some([0, 0, 0]));
}

#[rstest]
#[case([9, 3, 9], Verdict::Check)]
#[case([5, 10, 15], Verdict::Optimal)]
#[case([5, 5, 16], Verdict::Check)]
#[case([4, 10, 10], Verdict::Check)]
fn test_verdict(#[case] slack: [u32; 3], #[case] expected: Verdict) {
    assert_eq!(verdict(slack), expected);
}

#[test]
fn test_rank_candidates_orders_by_total_slack() {
    let target = Dimensions::new(41, 137, 51);
    let ranked = rank_candidates(
        target,
        vec![
            candidate("Box L", "80x160x90"),
            candidate("Too small", "40x140x60"),
            candidate("Box S", "50x140x60"),
            candidate("Box M", "60x150x60"),
        ],
    );

    let names: Vec<_> = ranked.iter().map(|m| m.name.as_str()).collect();
    assert_eq!(names, vec!["Box S", "Box M", "Box L"]);
    assert_eq!(ranked[0].total_slack, 21);
    assert_eq!(ranked[0].verdict, Verdict::Check);
}

#[test]
fn test_rank_candidates_total_slack_does_not_overflow() {
    let target = Dimensions::new(1, 1, 1);
    let ranked = rank_candidates(
        target,
        vec![
            candidate("Crate", "4000000000x4000000000x4000000000"),
            candidate("Box", "10x10x10"),
        ],
    );

    let totals: Vec<_> = ranked
        .iter()
        .map(|m| (m.name.as_str(), m.total_slack))
        .collect();
    assert_eq!(totals, vec![("Box", 27), ("Crate", 11_999_999_997)]);
}

#[test]
fn test_rank_candidates_keeps_input_order_on_ties() {
    let target = Dimensions::new(10, 10, 10);
    let ranked = rank_candidates(
        target,
        vec![candidate("first", "20x10x10"), candidate("second", "10x10x20")],
    );
    let names: Vec<_> = ranked.iter().map(|m| m.name.as_str()).collect();
    assert_eq!(names, vec!["first", "second"]);
}

// ============================================================================
// Package Matching Tests
// ============================================================================

const PARTS_CSV: &str = "\
파츠명,파츠 유형,파츠: 가로x세로x높이(장폭고)
Box S,Package Parts,50x140x60
Motor,Electrical,30x30x30
Box M,package parts,60x150x70
Box ?,Package Parts,TBD
Box XS,Package Parts,30x100x40
";

#[test]
fn test_package_candidates_filters_type_and_size() {
    let parts = table(PARTS_CSV);
    let names: Vec<_> = package_candidates(&parts)
        .unwrap()
        .into_iter()
        .map(|c| c.name)
        .collect();
    assert_eq!(names, vec!["Box S", "Box M", "Box XS"]);
}

#[test]
fn test_match_packages_ranks_fitting_boxes() {
    let parts = table(PARTS_CSV);
    let matches = match_packages(&parts, Dimensions::new(41, 137, 51)).unwrap();
    assert_eq!(matches.len(), 2);
    assert_eq!(matches[0].name, "Box S");
    assert_eq!(matches[0].size, "50x140x60");
    assert_eq!(matches[1].name, "Box M");
    assert_eq!(matches[1].slack, [19, 13, 19]);
}

#[test]
fn test_match_packages_requires_size_column() {
    let parts = table("Name,Type\nBox,Package\n");
    let err = match_packages(&parts, Dimensions::new(1, 1, 1)).unwrap_err();
    assert!(matches!(err, DataError::MissingColumn(_)));
}

// ============================================================================
// Record Loading Tests
// ============================================================================

#[test]
fn test_record_table_from_path() {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, "\u{feff}품목,수주액 2023\n선풍기,\"1,200\"\n").unwrap();

    let records = RecordTable::from_path(file.path()).unwrap();
    assert_eq!(records.headers(), &["품목".to_string(), "수주액 2023".to_string()]);
    assert_eq!(records.len(), 1);
    assert_eq!(records.value(0, 1), "1,200");
}

#[test]
fn test_record_table_missing_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = RecordTable::from_path(dir.path().join("missing.csv")).unwrap_err();
    assert!(matches!(err, DataError::Io { .. }));
}

#[test]
fn test_record_table_short_rows_read_as_empty() {
    let records = table("a,b,c\n1\n");
    assert_eq!(records.value(0, 0), "1");
    assert_eq!(records.value(0, 2), "");
    assert_eq!(records.value(5, 0), "");
}

#[test]
fn test_find_column_by_substring() {
    let records = table("NO.,파츠 유형,Unit Price\n");
    assert_eq!(records.find_column(&["유형", "Type"]), Some(1));
    assert_eq!(records.find_column(&["가격", "Price"]), Some(2));
    assert_eq!(records.find_column(&["Weight"]), None);
}

// ============================================================================
// Quotation Extraction Tests
// ============================================================================

#[test]
fn test_extract_product_specs_after_header() {
    let sheet = rows(&[
        &["FANC Quotation"],
        &[""],
        &["NO.", "모델명", "현재 제품명", "제품명", "", "제품사이즈", "비고", "공급가", "주요 스팩"],
        &["1", "M-1", "old", "Desk Fan", "", "41×137×51", "", "12,500", "USB-C"],
        &["2", "M-2", "old", "Other Fan", "", "1x1x1", "", "1", ""],
    ]);

    let specs = extract_product_specs(&sheet, &QuotationLayout::default()).unwrap();
    assert_eq!(specs.name.as_deref(), Some("Desk Fan"));
    assert_eq!(specs.dimensions.as_deref(), Some("41x137x51"));
    assert_eq!(specs.price.as_deref(), Some("12,500"));
    assert_eq!(specs.spec.as_deref(), Some("USB-C"));
}

#[test]
fn test_extract_product_specs_short_row_gives_none_fields() {
    let sheet = rows(&[
        &["", "", "", "제품명", "", "제품사이즈", "", "공급가"],
        &["1", "", "", "Fan"],
    ]);
    let specs = extract_product_specs(&sheet, &QuotationLayout::default()).unwrap();
    assert_eq!(specs.name.as_deref(), Some("Fan"));
    assert_eq!(specs.dimensions, None);
    assert_eq!(specs.spec, None);
}

#[test]
fn test_extract_product_specs_without_header() {
    let sheet = rows(&[&["a", "b"], &["c", "d"]]);
    assert_eq!(extract_product_specs(&sheet, &QuotationLayout::default()), None);
}

#[test]
fn test_read_rows_keeps_ragged_rows() {
    let sheet = read_rows("title\na,b,c\n".as_bytes(), "inline").unwrap();
    assert_eq!(sheet, rows(&[&["title"], &["a", "b", "c"]]));
}

// ============================================================================
// Workbook Loading Tests
// ============================================================================

fn write_workbook(path: &Path, cells: &[(u32, u16, &str)], numbers: &[(u32, u16, f64)]) {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    for &(row, col, text) in cells {
        worksheet.write_string(row, col, text).unwrap();
    }
    for &(row, col, number) in numbers {
        worksheet.write_number(row, col, number).unwrap();
    }
    workbook.save(path).unwrap();
}

#[rstest]
#[case("quote.xlsx", true)]
#[case("QUOTE.XLSX", true)]
#[case("sheet.ods", true)]
#[case("quote.csv", false)]
#[case("quote", false)]
fn test_is_workbook_by_extension(#[case] name: &str, #[case] expected: bool) {
    assert_eq!(is_workbook(name), expected);
}

#[test]
fn test_quotation_from_workbook() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("quotation.xlsx");
    write_workbook(
        &path,
        &[
            (0, 0, "FANC Quotation"),
            (1, 3, "제품명"),
            (1, 5, "제품사이즈"),
            (1, 7, "공급가"),
            (1, 8, "주요 스팩"),
            (2, 3, "Desk Fan"),
            (2, 5, "41×137×51"),
            (2, 8, "USB-C"),
        ],
        &[(2, 7, 12500.0)],
    );

    let sheet = read_sheet_rows(&path).unwrap();
    assert_eq!(sheet.len(), 3);
    assert_eq!(sheet[0][0], "FANC Quotation");
    assert_eq!(sheet[2][4], "");

    let specs = extract_product_specs(&sheet, &QuotationLayout::default()).unwrap();
    assert_eq!(specs.name.as_deref(), Some("Desk Fan"));
    assert_eq!(specs.dimensions.as_deref(), Some("41x137x51"));
    assert_eq!(specs.price.as_deref(), Some("12500"));
    assert_eq!(specs.spec.as_deref(), Some("USB-C"));
}

#[test]
fn test_workbook_rows_keep_sheet_columns() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("offset.xlsx");
    write_workbook(
        &path,
        &[(1, 3, "제품명"), (1, 7, "공급가"), (2, 3, "Fan")],
        &[],
    );

    let sheet = read_sheet_rows(&path).unwrap();
    assert_eq!(sheet.len(), 3);
    assert!(sheet[0].is_empty());
    assert_eq!(sheet[1][3], "제품명");
    assert_eq!(sheet[1][7], "공급가");

    let specs = extract_product_specs(&sheet, &QuotationLayout::default()).unwrap();
    assert_eq!(specs.name.as_deref(), Some("Fan"));
    assert_eq!(specs.price, None);
}

#[test]
fn test_record_table_from_workbook() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("parts.xlsx");
    write_workbook(
        &path,
        &[
            (0, 0, "유형"),
            (0, 1, "파츠명"),
            (0, 2, "규격"),
            (1, 0, "Package"),
            (1, 1, "Box S"),
            (1, 2, "50x140x60"),
        ],
        &[],
    );

    let parts = RecordTable::from_path(&path).unwrap();
    assert_eq!(parts.len(), 1);
    let matches = match_packages(&parts, Dimensions::new(41, 137, 51)).unwrap();
    assert_eq!(matches[0].name, "Box S");
    assert_eq!(matches[0].total_slack, 21);
}

#[test]
fn test_missing_workbook_is_workbook_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = read_sheet_rows(dir.path().join("missing.xlsx")).unwrap_err();
    assert!(matches!(err, DataError::Workbook { .. }));
}

// ============================================================================
// Sales Aggregation Tests
// ============================================================================

const SALES_CSV: &str = "\
품목,수주액 2022,판매량 2022,수주액 2023,판매량 2023,수주액 2024,판매량 2024,수주액 2025
USB Fan,\"1,000\",10,\"2,000\",20,\"3,000\",30,500
무선 선풍기,\"4,000\",40,n/a,5,,,\"1,500\"
Desk Lamp,\"9,999\",99,\"9,999\",99,\"9,999\",99,999
써큘레이터 PRO,100,1,100,1,100,1,
";

#[test]
fn test_summarize_sales_sums_matching_rows_per_year() {
    let summary = summarize_sales(&table(SALES_CSV), &SalesQuery::default()).unwrap();

    assert_eq!(summary.matched, 3);
    let per_year: Vec<_> = summary
        .years
        .iter()
        .map(|y| (y.year.as_str(), y.quantity, y.revenue))
        .collect();
    assert_eq!(
        per_year,
        vec![
            ("2022", 51.0, 5100.0),
            ("2023", 26.0, 2100.0),
            ("2024", 31.0, 3100.0),
        ]
    );
    assert_eq!(summary.total_quantity(), 108.0);
    assert_eq!(summary.total_revenue(), 10300.0);
    assert_eq!(summary.ytd, Some(("2025".to_string(), 2000.0)));
}

#[test]
fn test_summarize_sales_is_case_insensitive() {
    let query = SalesQuery {
        keywords: vec!["usb fan".to_string()],
        ..SalesQuery::default()
    };
    let summary = summarize_sales(&table(SALES_CSV), &query).unwrap();
    assert_eq!(summary.matched, 1);
}

#[test]
fn test_summarize_sales_missing_year_columns_are_zero() {
    let query = SalesQuery {
        years: vec!["2019".to_string()],
        ytd_year: Some("2030".to_string()),
        ..SalesQuery::default()
    };
    let summary = summarize_sales(&table(SALES_CSV), &query).unwrap();
    assert_eq!(summary.total_revenue(), 0.0);
    assert_eq!(summary.ytd, None);
}

#[test]
fn test_summarize_sales_requires_category_column() {
    let err = summarize_sales(&table("Item,Qty\nFan,1\n"), &SalesQuery::default()).unwrap_err();
    assert_eq!(err.to_string(), "Required column not found: 품목");
}

#[test]
fn test_summarize_sales_rejects_invalid_pattern() {
    let query = SalesQuery {
        keywords: vec!["(unclosed".to_string()],
        ..SalesQuery::default()
    };
    let err = summarize_sales(&table(SALES_CSV), &query).unwrap_err();
    assert!(matches!(err, DataError::InvalidPattern { .. }));
}

#[test]
fn test_sales_summary_display() {
    let summary = summarize_sales(&table(SALES_CSV), &SalesQuery::default()).unwrap();
    assert_eq!(
        summary.to_string(),
        "Total Sales (2022-2024): 3 Products Triggered.\n\
         Total Vol: 108, Total Rev: 10,300 KRW\n\
         Yearly Breakdown:\n\
         2022: 51 units, 5,100 KRW\n\
         2023: 26 units, 2,100 KRW\n\
         2024: 31 units, 3,100 KRW\n\
         2025 (YTD): 2,000 KRW"
    );
}

// ============================================================================
// Market Pricing Tests
// ============================================================================

#[test]
fn test_summarize_prices_cleans_currency_text() {
    let listings = table("상품명,판매가격\nA,\"12,000원\"\nB,8000\nC,문의\nD,\"10,000 KRW\"\n");
    let summary = summarize_prices(&listings).unwrap();
    assert_eq!(summary.listings, 4);
    assert_eq!(summary.priced, 3);
    assert_eq!(summary.min, 8000.0);
    assert_eq!(summary.max, 12000.0);
    assert_eq!(summary.mean, 10000.0);
    assert_eq!(
        summary.to_string(),
        "Competitor Pricing (n=4):\nAvg: 10,000\nMin: 8,000\nMax: 12,000"
    );
}

#[test]
fn test_summarize_prices_without_price_column() {
    assert_eq!(summarize_prices(&table("Name,Link\nA,x\n")), None);
}

// ============================================================================
// Number Helper Tests
// ============================================================================

#[rstest]
#[case("1,234", Some(1234.0))]
#[case(" 12.5 ", Some(12.5))]
#[case("", None)]
#[case("n/a", None)]
fn test_parse_amount(#[case] cell: &str, #[case] expected: Option<f64>) {
    assert_eq!(parse_amount(cell), expected);
}

#[test]
fn test_parse_digits_strips_everything_else() {
    assert_eq!(parse_digits("₩ 12,500원"), Some(12500.0));
    assert_eq!(parse_digits("문의"), None);
}

#[rstest]
#[case(0.0, "0")]
#[case(999.0, "999")]
#[case(1000.0, "1,000")]
#[case(1234567.4, "1,234,567")]
#[case(-1500.0, "-1,500")]
fn test_format_thousands(#[case] value: f64, #[case] expected: &str) {
    assert_eq!(format_thousands(value), expected);
}
