use clap::Parser;
use std::path::PathBuf;

use html2sheet::core::params::DEFAULT_SELECTOR;
use html2sheet::{ExtractParams, OutputFormat};

#[derive(Parser, Debug)]
#[command(
    name = "html2sheet",
    version,
    about = "Extract the first table of an HTML file into CSV, TSV or XLSX"
)]
pub struct CliArgs {
    /// Input HTML file (single file mode)
    pub input: Option<PathBuf>,

    /// Output file; its extension (csv, tsv, xlsx) picks the format.
    /// Defaults to the input name with the --format extension
    pub output: Option<PathBuf>,

    /// Format used when no output path is given (and in batch mode)
    #[arg(short = 'f', long, value_enum, default_value_t = OutputFormat::Xlsx)]
    pub format: OutputFormat,

    /// CSS selector of the table to extract; the first matching <table> wins
    #[arg(short, long, default_value = DEFAULT_SELECTOR)]
    pub selector: String,

    /// Store numeric-looking values as numbers in XLSX output
    #[arg(long, default_value_t = false)]
    pub numbers: bool,

    /// Input directory of .html/.htm files (batch mode)
    #[arg(long)]
    pub input_dir: Option<PathBuf>,

    /// Output directory for batch mode
    #[arg(long)]
    pub output_dir: Option<PathBuf>,

    /// Enable logging to stderr (RUST_LOG overrides the level)
    #[arg(long, default_value_t = false)]
    pub log: bool,
}

impl CliArgs {
    pub fn params(&self) -> ExtractParams {
        ExtractParams {
            selector: self.selector.clone(),
            default_format: self.format,
            coerce_numbers: self.numbers,
        }
    }
}
