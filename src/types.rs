//! Shared types used across html2sheet.
//! Includes the `Grid` of extracted cell text and the `OutputFormat` selector.
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Rows of cell text in document order. Rows may differ in length.
pub type Grid = Vec<Vec<String>>;

#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, ValueEnum, Debug, Serialize, Deserialize)]
pub enum OutputFormat {
    Csv,
    Tsv,
    Xlsx,
}

impl OutputFormat {
    pub fn extension(self) -> &'static str {
        match self {
            OutputFormat::Csv => "csv",
            OutputFormat::Tsv => "tsv",
            OutputFormat::Xlsx => "xlsx",
        }
    }

    /// Case-insensitive lookup from a file extension (without the dot).
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_ascii_lowercase().as_str() {
            "csv" => Some(OutputFormat::Csv),
            "tsv" => Some(OutputFormat::Tsv),
            "xlsx" => Some(OutputFormat::Xlsx),
            _ => None,
        }
    }

    /// Field delimiter for the delimited-text formats.
    pub fn delimiter(self) -> Option<u8> {
        match self {
            OutputFormat::Csv => Some(b','),
            OutputFormat::Tsv => Some(b'\t'),
            OutputFormat::Xlsx => None,
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Csv => write!(f, "CSV"),
            OutputFormat::Tsv => write!(f, "TSV"),
            OutputFormat::Xlsx => write!(f, "XLSX"),
        }
    }
}
