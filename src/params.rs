// src/params.rs
use std::path::PathBuf;

use crate::csv::Delim;

pub const STORE_DIR: &str = ".cartsplit";
pub const DEFAULT_EXPORT_STEM: &str = "cart_split";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExportMode {
    /// Row per item, column per participant, trailing totals row.
    Matrix,
    /// Legacy one-row-per-item shape without per-participant columns.
    Flat,
}

#[derive(Clone)]
pub struct Params {
    pub input: Option<PathBuf>,      // captured records; None = stdin
    pub roster: Option<String>,      // inline roster; None = saved roster
    pub mode: ExportMode,
    pub format: Delim,
    pub out: Option<PathBuf>,        // file or dir; None = stdout
    pub title: Option<String>,       // matrix title row
    pub include_headers: bool,       // flat header row
    pub save_roster: bool,           // persist roster for next run
    pub assigns: Vec<(usize, Vec<String>)>, // --assign idx=names;...
    pub splits: Vec<(usize, u32)>,   // --split idx=n
}

impl Params {
    pub fn new() -> Self {
        Self {
            input: None,
            roster: None,
            mode: ExportMode::Matrix,
            format: Delim::Csv,
            out: None,
            title: None,
            include_headers: false,
            save_roster: false,
            assigns: Vec::new(),
            splits: Vec::new(),
        }
    }

    pub fn default_filename(&self) -> String {
        format!("{}.{}", DEFAULT_EXPORT_STEM, self.format.ext())
    }
}

impl Default for Params {
    fn default() -> Self {
        Self::new()
    }
}
