//! Crate-level error type and `Result` alias.
//! Every variant names the stage that failed (reading, extraction, output)
//! so the CLI can report it verbatim.
use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Cannot read input file {}: {source}", path.display())]
    ReadInput {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("No table found in the document (selector: {selector})")]
    NoTable { selector: String },

    #[error("Invalid table selector `{selector}`: {reason}")]
    InvalidSelector { selector: String, reason: String },

    #[error("Unsupported output format: `{extension}` (expected csv, tsv or xlsx)")]
    UnsupportedFormat { extension: String },

    #[error("Cannot write output to {}: {reason}", path.display())]
    UnwritableDestination { path: PathBuf, reason: String },

    #[error("Table of {rows} rows x {cols} columns exceeds the worksheet limits")]
    SheetTooLarge { rows: usize, cols: usize },

    #[error("Output path {} is the input file; refusing to overwrite it", path.display())]
    OutputIsInput { path: PathBuf },

    #[error("CSV write error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Workbook archive error: {0}")]
    Zip(#[from] zip::result::ZipError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    pub fn unwritable<E: std::fmt::Display>(path: impl Into<PathBuf>, e: E) -> Self {
        Error::UnwritableDestination {
            path: path.into(),
            reason: e.to_string(),
        }
    }
}
