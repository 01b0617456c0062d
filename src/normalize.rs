// src/normalize.rs
//
// Raw scraped records → canonical LineItems. Pure and deterministic; no I/O.
//
// Records arrive as loosely-typed JSON objects and have gone through several
// field-naming schemes over time. Three shapes are in the wild and all must
// resolve here:
//   minimal       {name, qty, price}
//   intermediate  {name, qty, unitPrice, linePrice, assigned, splitCount, perPerson}
//   scraper       {name, image, qty, unitPrice, linePrice}
//
// Unusable records (no name) are dropped, not surfaced: partial scrape noise
// is expected. Unparseable fields fall back to documented defaults. Amounts
// are NOT rounded here; two-decimal formatting happens at export only.

use serde_json::Value;

use crate::error::{CartError, Result};
use crate::item::LineItem;
use crate::money::Money;

/// Normalize a sequence of raw records. Records that cannot resolve a name
/// are skipped entirely.
pub fn normalize(records: &[Value]) -> Vec<LineItem> {
    records.iter().filter_map(normalize_one).collect()
}

/// Parse a captured JSON payload (must be an array) and normalize it.
pub fn normalize_json(text: &str) -> Result<Vec<LineItem>> {
    let payload: Value = serde_json::from_str(text)?;
    match payload {
        Value::Array(records) => Ok(normalize(&records)),
        _ => Err(CartError::NotAnArray),
    }
}

fn normalize_one(rec: &Value) -> Option<LineItem> {
    let name = rec.get("name").and_then(Value::as_str)?.trim();
    if name.is_empty() {
        return None;
    }

    let image_url = rec
        .get("image")
        .and_then(Value::as_str)
        .unwrap_or("")
        .to_string();

    let quantity = finite_number(rec, &["qty", "quantity"])
        .filter(|v| *v >= 1.0)
        .map(|v| v as u32)
        .unwrap_or(1);

    let unit_price = amount(rec, &["unitPrice", "price"]).unwrap_or(0.0);
    let line_total = amount(rec, &["linePrice"]).unwrap_or(unit_price);

    let split_count = finite_number(rec, &["splitCount"])
        .filter(|v| *v >= 1.0)
        .map(|v| v as u32);

    Some(LineItem {
        name: name.to_string(),
        image_url,
        quantity,
        unit_price: Money::from_f64(unit_price),
        line_total: Money::from_f64(line_total),
        assigned: assignees(rec),
        split_count,
    })
}

/// First finite number among the given aliases. Numeric strings do not
/// count, matching the historical `Number.isFinite` gate.
fn finite_number(rec: &Value, keys: &[&str]) -> Option<f64> {
    keys.iter()
        .find_map(|k| rec.get(*k).and_then(Value::as_f64).filter(|v| v.is_finite()))
}

/// Like `finite_number`, but amounts are non-negative by contract; a
/// negative value is as unusable as a non-number and the chain moves on.
fn amount(rec: &Value, keys: &[&str]) -> Option<f64> {
    keys.iter().find_map(|k| {
        rec.get(*k)
            .and_then(Value::as_f64)
            .filter(|v| v.is_finite() && *v >= 0.0)
    })
}

/// Assignees come as a list of names, or as the legacy `;`-joined string.
/// Either way the result is an ordered set: trimmed, empties dropped,
/// duplicates removed (first occurrence wins — duplicates would inflate a
/// derived split count).
fn assignees(rec: &Value) -> Vec<String> {
    let raw: Vec<String> = match rec.get("assigned") {
        Some(Value::Array(xs)) => xs
            .iter()
            .filter_map(Value::as_str)
            .map(|s| s.trim().to_string())
            .collect(),
        Some(Value::String(s)) => s.split(';').map(|p| p.trim().to_string()).collect(),
        _ => Vec::new(),
    };

    let mut out: Vec<String> = Vec::with_capacity(raw.len());
    for name in raw {
        if !name.is_empty() && !out.contains(&name) {
            out.push(name);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn string_quantities_fall_back() {
        let recs = vec![json!({"name": "Eggs", "qty": "2", "price": 3.5})];
        let items = normalize(&recs);
        assert_eq!(items[0].quantity, 1);
        assert_eq!(items[0].unit_price.format_2dp(), "3.50");
    }

    #[test]
    fn nameless_records_are_dropped() {
        let recs = vec![
            json!({"qty": 2, "price": 3.0}),
            json!({"name": "  ", "price": 3.0}),
            json!({"name": "Keep", "price": 3.0}),
        ];
        let items = normalize(&recs);
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].name, "Keep");
    }

    #[test]
    fn non_array_payload_is_an_error() {
        assert!(matches!(
            normalize_json(r#"{"name":"X"}"#),
            Err(CartError::NotAnArray)
        ));
    }
}
