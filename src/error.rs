// src/error.rs
//
// Crate-wide error taxonomy. Malformed individual records are NOT errors:
// scrape noise is expected, and the normalizer drops them silently. Errors
// here are caller-level problems (unreadable payloads, empty exports) or
// opaque failures from a delivery boundary.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CartError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("bad records payload: {0}")]
    Records(#[from] serde_json::Error),

    #[error("records payload must be a JSON array")]
    NotAnArray,

    // An empty flat export is almost always a caller bug; fail loudly.
    #[error("no items to export")]
    EmptyExport,

    // Whatever a delivery transport reports, passed through uninterpreted.
    #[error("append sink failed: {0}")]
    Sink(String),

    #[error("{0}")]
    Cli(String),
}

pub type Result<T> = std::result::Result<T, CartError>;
