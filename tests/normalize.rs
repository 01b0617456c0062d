// tests/normalize.rs
//
// The normalizer must accept the three record shapes observed in the wild
// and resolve every alias with the documented precedence and defaults.

use serde_json::{json, Value};

use cartsplit::item::LineItem;
use cartsplit::normalize::{normalize, normalize_json};

#[test]
fn minimal_legacy_shape() {
    // {name, qty, price}
    let recs = vec![json!({"name": "Milk", "qty": 2, "price": 4.5})];
    let items = normalize(&recs);
    assert_eq!(items.len(), 1);

    let it = &items[0];
    assert_eq!(it.name, "Milk");
    assert_eq!(it.quantity, 2);
    assert_eq!(it.unit_price.format_2dp(), "4.50");
    // no linePrice → falls back to unit price
    assert_eq!(it.line_total.format_2dp(), "4.50");
    assert!(it.assigned.is_empty());
    assert_eq!(it.split_count, None);
}

#[test]
fn intermediate_shape_with_semicolon_assignees() {
    // {name, qty, unitPrice, linePrice, assigned, splitCount, perPerson}
    let recs = vec![json!({
        "name": "Bread",
        "qty": 1,
        "unitPrice": 2.5,
        "linePrice": 5.0,
        "assigned": "Alice; Bob ;;Alice",
        "splitCount": 3,
        "perPerson": 1.67
    })];
    let items = normalize(&recs);
    let it = &items[0];

    assert_eq!(it.unit_price.format_2dp(), "2.50");
    assert_eq!(it.line_total.format_2dp(), "5.00");
    // trimmed, empties dropped, duplicates removed, order kept
    assert_eq!(it.assigned, vec!["Alice", "Bob"]);
    assert_eq!(it.split_count, Some(3));
}

#[test]
fn current_scraper_shape() {
    // {name, image, qty, unitPrice, linePrice}
    let recs = vec![json!({
        "name": "Towels",
        "image": "https://example.test/t.png",
        "qty": 3,
        "unitPrice": 9.98,
        "linePrice": 29.94
    })];
    let items = normalize(&recs);
    let it = &items[0];

    assert_eq!(it.image_url, "https://example.test/t.png");
    assert_eq!(it.quantity, 3);
    assert_eq!(it.line_total.format_2dp(), "29.94");
}

#[test]
fn qty_alias_and_precedence() {
    // `qty` wins over `quantity` when both are present
    let recs = vec![
        json!({"name": "A", "qty": 2, "quantity": 7}),
        json!({"name": "B", "quantity": 4}),
    ];
    let items = normalize(&recs);
    assert_eq!(items[0].quantity, 2);
    assert_eq!(items[1].quantity, 4);
}

#[test]
fn unusable_fields_fall_back_to_defaults() {
    let recs = vec![json!({
        "name": "Odd",
        "qty": "two",          // non-numeric → 1
        "unitPrice": "free",   // non-numeric → next alias → default 0
        "splitCount": 0        // below 1 → None
    })];
    let items = normalize(&recs);
    let it = &items[0];

    assert_eq!(it.quantity, 1);
    assert_eq!(it.unit_price.format_2dp(), "0.00");
    assert_eq!(it.line_total.format_2dp(), "0.00");
    assert_eq!(it.split_count, None);
}

#[test]
fn negative_amounts_are_passed_over() {
    // negative unitPrice is unusable; price takes over
    let recs = vec![json!({"name": "Refund?", "unitPrice": -3.0, "price": 3.0})];
    let items = normalize(&recs);
    assert_eq!(items[0].unit_price.format_2dp(), "3.00");
}

#[test]
fn assigned_list_form() {
    let recs = vec![json!({"name": "X", "assigned": ["Carol", " Dan ", ""]})];
    let items = normalize(&recs);
    assert_eq!(items[0].assigned, vec!["Carol", "Dan"]);
}

#[test]
fn normalize_is_idempotent_on_canonical_items() {
    let recs = vec![
        json!({"name": "Milk", "qty": 2, "unitPrice": 4.5, "linePrice": 9.0,
               "assigned": ["Alice", "Bob"], "splitCount": 2}),
        json!({"name": "Bread", "price": 5.0}),
    ];
    let items = normalize(&recs);

    // serialize back to the wire shape, normalize again
    let wire: Vec<Value> = items
        .iter()
        .map(|it| serde_json::to_value(it).unwrap())
        .collect();
    let again: Vec<LineItem> = normalize(&wire);

    assert_eq!(items, again);
}

#[test]
fn normalize_json_requires_an_array() {
    assert!(normalize_json(r#"[{"name":"A","price":1.0}]"#).is_ok());
    assert!(normalize_json(r#"{"name":"A"}"#).is_err());
    assert!(normalize_json("not json").is_err());
}
