// src/file.rs

use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::csv::{write_row, Delim};
use crate::error::Result;

/// Ensure parent dir exists; create/truncate the export file.
pub fn create_export_file(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            ensure_directory(parent)?;
        }
    }
    File::create(path)?; // truncate/overwrite
    Ok(())
}

/// Append rows to an existing CSV/TSV file (must be created already).
pub fn append_rows(path: &Path, rows: &[Vec<String>], delim: Delim) -> Result<()> {
    let file = OpenOptions::new().append(true).open(path)?;
    let mut out = BufWriter::new(file);
    for row in rows {
        write_row(&mut out, row, delim)?;
    }
    out.flush()?;
    Ok(())
}

/// Resolve a user-supplied `-o` hint into a concrete file path. A directory
/// hint (existing dir, or trailing separator) gets the default filename
/// appended; a file path is used as given.
pub fn resolve_out_path(hint: &Path, default_filename: &str) -> Result<PathBuf> {
    if looks_like_dir_hint(hint) || hint.is_dir() {
        ensure_directory(hint)?;
        Ok(hint.join(default_filename))
    } else {
        if let Some(parent) = hint.parent() {
            if !parent.as_os_str().is_empty() {
                ensure_directory(parent)?;
            }
        }
        Ok(hint.to_path_buf())
    }
}

pub fn ensure_directory(dir: &Path) -> Result<()> {
    if dir.exists() && !dir.is_dir() {
        return Err(std::io::Error::new(
            std::io::ErrorKind::AlreadyExists,
            format!("path exists but is not a directory: {}", dir.display()),
        )
        .into());
    }
    if !dir.exists() {
        std::fs::create_dir_all(dir)?;
    }
    Ok(())
}

pub fn looks_like_dir_hint(p: &Path) -> bool {
    let s = p.to_string_lossy();
    s.ends_with('/') || s.ends_with('\\')
}
