// src/item.rs
//
// Canonical line item plus roster helpers. Serde renames map the struct onto
// the scraper wire shape, so a serialized item re-normalizes to itself.
//
// Items reference participants by name only. A name that never appears on
// the roster still counts toward a derived split, but gets no column in the
// matrix export.

use serde::{Deserialize, Serialize};

use crate::money::{self, Money};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LineItem {
    pub name: String,

    #[serde(rename = "image", default, skip_serializing_if = "String::is_empty")]
    pub image_url: String,

    #[serde(rename = "qty")]
    pub quantity: u32,

    #[serde(rename = "unitPrice", with = "money::as_f64")]
    pub unit_price: Money,

    /// Authoritative total to split. Never recomputed as unit × qty; the
    /// source either folded that in or it didn't.
    #[serde(rename = "linePrice", with = "money::as_f64")]
    pub line_total: Money,

    /// Ordered set of assignee names. Empty = unassigned.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub assigned: Vec<String>,

    /// Explicit share count. `None` = derive from the effective assignees.
    #[serde(rename = "splitCount", default, skip_serializing_if = "Option::is_none")]
    pub split_count: Option<u32>,
}

impl LineItem {
    /// Participants on the hook for this item. An unassigned item falls back
    /// to the whole roster: everyone splits what nobody claimed.
    pub fn effective_assignees<'a>(&'a self, roster: &'a [String]) -> &'a [String] {
        if self.assigned.is_empty() { roster } else { &self.assigned }
    }

    /// Number of shares the line total divides into: the explicit count if
    /// one was given, else the assignee count, else 1.
    pub fn resolved_split_count(&self, assignee_count: usize) -> u32 {
        match self.split_count {
            Some(n) if n >= 1 => n,
            _ if assignee_count > 0 => assignee_count as u32,
            _ => 1,
        }
    }
}

/* ---------------- Roster ---------------- */

/// Comma-separated roster text → trimmed, non-empty names, order kept.
/// Order matters: it defines matrix column order.
pub fn parse_participants(text: &str) -> Vec<String> {
    text.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(String::from)
        .collect()
}

/* ---------------- Pure edits ---------------- */
//
// Interactive edits return a new list instead of mutating in place; the
// caller owns the state transition.

/// Replace the assignee list of item `idx`. Out-of-range = no-op.
pub fn with_assignees(items: &[LineItem], idx: usize, names: &[String]) -> Vec<LineItem> {
    let mut out = items.to_vec();
    if let Some(it) = out.get_mut(idx) {
        it.assigned = names
            .iter()
            .map(|s| s.trim())
            .filter(|s| !s.is_empty())
            .map(String::from)
            .collect();
    }
    out
}

/// Set item `idx`'s explicit share count (clamped to ≥ 1). Out-of-range = no-op.
pub fn with_split_count(items: &[LineItem], idx: usize, n: u32) -> Vec<LineItem> {
    let mut out = items.to_vec();
    if let Some(it) = out.get_mut(idx) {
        it.split_count = Some(n.max(1));
    }
    out
}
