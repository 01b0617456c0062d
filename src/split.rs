// src/split.rs
//
// Split & export engine. Consumes canonical items plus an ordered roster and
// produces finished row sets; delivery (file write, remote append) happens
// elsewhere, after the full set exists.
//
// Two shapes, numerically consistent with each other:
//   matrix — header + one row per item + totals row, one column per
//            participant; unassigned items split across the whole roster.
//   flat   — legacy one-row-per-item shape, no per-participant columns.

use crate::error::{CartError, Result};
use crate::item::LineItem;
use crate::money::Money;

/// Leading matrix columns before the per-participant ones.
pub const MATRIX_FIXED_COLUMNS: usize = 3; // Item, Price, Count

/// Header row for the flat export, when requested.
pub const FLAT_HEADER: [&str; 7] =
    ["Item", "Qty", "Unit", "Total", "Assigned", "Split", "Per person"];

/// Build the matrix export: optional title row, header, one row per item,
/// totals row. Never fails; zero items still yield a header and a totals row.
pub fn matrix_rows(
    items: &[LineItem],
    roster: &[String],
    title: Option<&str>,
) -> Vec<Vec<String>> {
    let width = MATRIX_FIXED_COLUMNS + roster.len();
    let mut rows = Vec::with_capacity(items.len() + 3);

    if let Some(t) = title {
        // Title sits in the first column, padded out to full width.
        let mut row = vec![s!(); width];
        row[0] = s!(t);
        rows.push(row);
    }

    let mut header = Vec::with_capacity(width);
    header.push(s!("Item"));
    header.push(s!("Price"));
    header.push(s!("Count"));
    header.extend(roster.iter().cloned());
    rows.push(header);

    let mut grand_total = Money::ZERO;
    let mut per_person = vec![Money::ZERO; roster.len()];

    for it in items {
        let assignees = it.effective_assignees(roster);
        let split = it.resolved_split_count(assignees.len());
        let share = it.line_total.split(split);
        grand_total += it.line_total;

        let mut row = Vec::with_capacity(width);
        row.push(it.name.clone());
        row.push(it.line_total.format_2dp());
        row.push(it.quantity.to_string());

        for (i, p) in roster.iter().enumerate() {
            let amount = if assignees.iter().any(|a| a == p) {
                share
            } else {
                Money::ZERO
            };
            per_person[i] += amount;
            row.push(amount.format_2dp());
        }
        rows.push(row);
    }

    let mut totals = Vec::with_capacity(width);
    totals.push(s!("total"));
    totals.push(grand_total.format_2dp());
    totals.push(s!());
    totals.extend(per_person.iter().map(|m| m.format_2dp()));
    rows.push(totals);

    rows
}

/// Build the flat (legacy) export: one row per item, assignees joined by
/// `;`, per-person share = total / resolved split count. An empty item list
/// is an explicit error here — an empty flat export is a caller bug.
pub fn flat_rows(items: &[LineItem], include_headers: bool) -> Result<Vec<Vec<String>>> {
    if items.is_empty() {
        return Err(CartError::EmptyExport);
    }

    let mut rows = Vec::with_capacity(items.len() + 1);
    if include_headers {
        rows.push(FLAT_HEADER.iter().map(|h| s!(*h)).collect());
    }

    for it in items {
        let split = it.resolved_split_count(it.assigned.len());
        let per_person = it.line_total.split(split);
        rows.push(vec![
            it.name.clone(),
            it.quantity.to_string(),
            it.unit_price.format_2dp(),
            it.line_total.format_2dp(),
            it.assigned.join(";"),
            split.to_string(),
            per_person.format_2dp(),
        ]);
    }

    Ok(rows)
}
