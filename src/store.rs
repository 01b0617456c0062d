// src/store.rs
//
// Roster persistence: one value, stored verbatim. Items themselves are never
// persisted — they are rebuilt from a capture each run and discarded after
// export.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::params::STORE_DIR;

const ROSTER_FILE: &str = "participants";

pub fn roster_path() -> PathBuf {
    PathBuf::from(STORE_DIR).join(ROSTER_FILE)
}

pub fn save_roster_at(path: &Path, text: &str) -> io::Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    fs::write(path, text)
}

pub fn load_roster_at(path: &Path) -> Option<String> {
    let text = fs::read_to_string(path).ok()?;
    let text = text.trim_end_matches(['\r', '\n']).to_string();
    if text.is_empty() { None } else { Some(text) }
}

pub fn save_roster(text: &str) -> io::Result<PathBuf> {
    let p = roster_path();
    save_roster_at(&p, text)?;
    Ok(p)
}

pub fn load_roster() -> Option<String> {
    load_roster_at(&roster_path())
}
