use serde::{Deserialize, Serialize};

use crate::types::OutputFormat;

pub const DEFAULT_SELECTOR: &str = "table";

/// Extraction parameters shared by the CLI and the library API
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractParams {
    /// CSS selector; the first matching `<table>` element is extracted
    pub selector: String,
    /// Format used to derive the output path when none is given
    pub default_format: OutputFormat,
    /// If true, numeric-looking values become numeric workbook cells
    pub coerce_numbers: bool,
}

impl Default for ExtractParams {
    fn default() -> Self {
        Self {
            selector: DEFAULT_SELECTOR.to_string(),
            default_format: OutputFormat::Xlsx,
            coerce_numbers: false,
        }
    }
}
