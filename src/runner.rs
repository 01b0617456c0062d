// src/runner.rs
use std::path::PathBuf;

use crate::error::{CartError, Result};
use crate::file;
use crate::item::{self, parse_participants};
use crate::normalize::normalize;
use crate::params::{ExportMode, Params};
use crate::scrape::{JsonCapture, ScrapeAdapter, StdinCapture};
use crate::sink::{AppendSink, CsvFileSink, StdoutSink};
use crate::split;
use crate::store;

/// Optional progress sink for frontends (CLI: print lines; a future UI:
/// update labels). Implementations pick what they care about.
pub trait Progress {
    fn log(&mut self, _msg: &str) {}
    fn update_status(&mut self, _msg: &str) {}
}

/// A no-op progress sink you can pass when you don't care.
pub struct NullProgress;
impl Progress for NullProgress {}

/// Summary of what was produced.
pub struct RunSummary {
    pub items: usize,
    pub participants: usize,
    pub out: Option<PathBuf>,
}

/// Top-level runner: capture → normalize → edits → rows → delivery.
/// `progress` can be None (no UI updates) or Some(&mut impl Progress).
pub fn run(params: &Params, mut progress: Option<&mut dyn Progress>) -> Result<RunSummary> {
    // Roster: inline flag wins; otherwise whatever was saved last time.
    let roster_text = match &params.roster {
        Some(text) => text.clone(),
        None => store::load_roster().unwrap_or_default(),
    };
    let roster = parse_participants(&roster_text);

    if params.save_roster {
        let p = store::save_roster(&roster_text)?;
        logf!("Saved roster to {}", p.display());
        if let Some(pr) = progress.as_deref_mut() {
            pr.log("Roster saved");
        }
    }

    let records = match &params.input {
        Some(path) => JsonCapture::new(path).collect()?,
        None => StdinCapture.collect()?,
    };
    logf!("Collected {} raw records", records.len());

    let mut items = normalize(&records);
    if items.len() < records.len() {
        logd!("Dropped {} unusable records", records.len() - items.len());
    }

    // Apply interactive edits as pure state transitions, in flag order.
    for (idx, names) in &params.assigns {
        if *idx >= items.len() {
            loge!("--assign index {idx} out of range ({} items)", items.len());
            return Err(CartError::Cli(format!("--assign index {idx} out of range")));
        }
        items = item::with_assignees(&items, *idx, names);
    }
    for (idx, n) in &params.splits {
        if *idx >= items.len() {
            loge!("--split index {idx} out of range ({} items)", items.len());
            return Err(CartError::Cli(format!("--split index {idx} out of range")));
        }
        items = item::with_split_count(&items, *idx, *n);
    }

    let rows = match params.mode {
        ExportMode::Matrix => {
            if roster.is_empty() {
                logf!("Matrix export with an empty roster; only fixed columns emitted");
            }
            split::matrix_rows(&items, &roster, params.title.as_deref())
        }
        ExportMode::Flat => split::flat_rows(&items, params.include_headers)?,
    };

    if let Some(pr) = progress.as_deref_mut() {
        pr.update_status(&format!("{} rows ready", rows.len()));
    }

    let out = match &params.out {
        Some(hint) => {
            let path = file::resolve_out_path(hint, &params.default_filename())?;
            let mut sink = CsvFileSink::new(&path, params.format);
            sink.append(&rows)?;
            logf!("Wrote {} rows to {}", rows.len(), path.display());
            Some(path)
        }
        None => {
            StdoutSink::new(params.format).append(&rows)?;
            None
        }
    };

    Ok(RunSummary {
        items: items.len(),
        participants: roster.len(),
        out,
    })
}
