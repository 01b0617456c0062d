// src/scrape.rs
//
// Input seam. Site-specific scraping is heuristic and brittle, so it lives
// behind an adapter: anything that can produce the raw record array feeds
// the same pipeline. The shipped adapters read a capture of what a page
// scraper emits — a JSON array of loosely-typed records.

use std::fs;
use std::io::Read;
use std::path::PathBuf;

use serde_json::Value;

use crate::error::{CartError, Result};

/// Source of raw cart records.
pub trait ScrapeAdapter {
    fn collect(&mut self) -> Result<Vec<Value>>;
}

/// Reads a captured JSON-array file.
pub struct JsonCapture {
    path: PathBuf,
}

impl JsonCapture {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl ScrapeAdapter for JsonCapture {
    fn collect(&mut self) -> Result<Vec<Value>> {
        let text = fs::read_to_string(&self.path)?;
        records_from_json(&text)
    }
}

/// Reads the capture from stdin (piped scraper output).
pub struct StdinCapture;

impl ScrapeAdapter for StdinCapture {
    fn collect(&mut self) -> Result<Vec<Value>> {
        let mut text = s!();
        std::io::stdin().read_to_string(&mut text)?;
        records_from_json(&text)
    }
}

fn records_from_json(text: &str) -> Result<Vec<Value>> {
    let payload: Value = serde_json::from_str(text)?;
    match payload {
        Value::Array(records) => Ok(records),
        _ => Err(CartError::NotAnArray),
    }
}
