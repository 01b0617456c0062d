// tests/export_csv.rs
//
// Serialization contract: every cell quoted, quotes doubled, rows
// newline-joined — and a parse that takes the output back to the same cells.

use cartsplit::csv::{parse_rows, rows_to_string, Delim};
use cartsplit::item::LineItem;
use cartsplit::money::Money;
use cartsplit::split::matrix_rows;

fn cells(rows: &[&[&str]]) -> Vec<Vec<String>> {
    rows.iter()
        .map(|r| r.iter().map(|c| c.to_string()).collect())
        .collect()
}

#[test]
fn every_cell_is_quoted() {
    let rows = cells(&[&["Item", "Price"], &["Milk", "9.00"]]);
    let s = rows_to_string(&rows, Delim::Csv);
    assert_eq!(s, "\"Item\",\"Price\"\n\"Milk\",\"9.00\"\n");
}

#[test]
fn embedded_quotes_and_separators_survive() {
    let rows = cells(&[&[r#"Say "cheese", please"#, "1,000.00"]]);
    let s = rows_to_string(&rows, Delim::Csv);
    assert_eq!(s, "\"Say \"\"cheese\"\", please\",\"1,000.00\"\n");

    let back = parse_rows(&s, Delim::Csv);
    assert_eq!(back, rows);
}

#[test]
fn tsv_uses_tabs_and_still_quotes() {
    let rows = cells(&[&["a", "b"]]);
    assert_eq!(rows_to_string(&rows, Delim::Tsv), "\"a\"\t\"b\"\n");
}

#[test]
fn parse_tolerates_crlf_and_blank_lines() {
    let text = "\"a\",\"b\"\r\n\r\n\"c\",\"d\"\n";
    let rows = parse_rows(text, Delim::Csv);
    assert_eq!(rows, cells(&[&["a", "b"], &["c", "d"]]));
}

#[test]
fn matrix_export_round_trips_through_csv() {
    let item = LineItem {
        name: "Towels, 6-pack".into(),
        image_url: String::new(),
        quantity: 1,
        unit_price: Money::from_f64(29.94),
        line_total: Money::from_f64(29.94),
        assigned: vec!["Alice".into()],
        split_count: None,
    };
    let roster = vec!["Alice".to_string(), "Bob".to_string()];

    let rows = matrix_rows(&[item], &roster, Some("week 34 receipt"));
    let text = rows_to_string(&rows, Delim::Csv);
    let back = parse_rows(&text, Delim::Csv);

    assert_eq!(back, rows);
}
