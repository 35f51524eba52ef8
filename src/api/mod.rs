//! High-level library API: convert one HTML file, a whole directory, or an
//! in-memory document. Prefer these entrypoints over the `core` and `io`
//! building blocks when embedding html2sheet.
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::core::grid::build_grid_with_selector;
use crate::core::params::ExtractParams;
use crate::core::target::{OutputTarget, resolve_target};
use crate::error::{Error, Result};
use crate::io::read_input;
use crate::io::writers::write_grid;
use crate::types::Grid;

/// Extract the grid of the table selected by `params` from HTML text.
pub fn extract_grid(html: &str, params: &ExtractParams) -> Result<Grid> {
    build_grid_with_selector(html, &params.selector)
}

/// Read `input`, extract its table and write it to `output` (or to the
/// input's name with the default format's extension). Returns where the
/// grid was written.
///
/// Nothing is written when any stage fails.
pub fn convert_html_file(
    input: &Path,
    output: Option<&Path>,
    params: &ExtractParams,
) -> Result<OutputTarget> {
    let target = resolve_target(input, output, params.default_format)?;
    let html = read_input(input)?;
    let grid = extract_grid(&html, params)?;
    write_grid(&grid, &target.path, target.format, params.coerce_numbers)?;
    Ok(target)
}

/// Outcome counts of a directory conversion
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchReport {
    pub processed: usize,
    pub skipped: usize,
    pub errors: usize,
}

fn is_html(path: &Path) -> bool {
    path.extension()
        .map(|e| {
            let e = e.to_string_lossy();
            e.eq_ignore_ascii_case("html") || e.eq_ignore_ascii_case("htm")
        })
        .unwrap_or(false)
}

/// Files directly inside `input_dir`, sorted by path. Directories are left out.
pub fn list_input_files(input_dir: &Path) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for entry in std::fs::read_dir(input_dir).map_err(|source| Error::ReadInput {
        path: input_dir.to_path_buf(),
        source,
    })? {
        let path = entry?.path();
        if path.is_file() {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}

/// Convert every `.html`/`.htm` file in `input_dir` into `output_dir`, using
/// `params.default_format` for the output extension. Other files are
/// counted as skipped. If `continue_on_error` is true, failures are counted
/// and processing continues; otherwise the first error is returned.
pub fn convert_directory(
    input_dir: &Path,
    output_dir: &Path,
    params: &ExtractParams,
    continue_on_error: bool,
) -> Result<BatchReport> {
    std::fs::create_dir_all(output_dir).map_err(|e| Error::unwritable(output_dir, e))?;

    let mut report = BatchReport::default();
    for path in list_input_files(input_dir)? {
        if !is_html(&path) {
            info!("Skipping non-HTML file: {:?}", path);
            report.skipped += 1;
            continue;
        }
        let Some(name) = path.file_name() else {
            report.skipped += 1;
            continue;
        };
        let output_path = output_dir
            .join(name)
            .with_extension(params.default_format.extension());

        info!("Processing: {:?} -> {:?}", path, output_path);
        match convert_html_file(&path, Some(&output_path), params) {
            Ok(_) => report.processed += 1,
            Err(e) => {
                warn!("Error processing {:?}: {}", path, e);
                report.errors += 1;
                if !continue_on_error {
                    return Err(e);
                }
            }
        }
    }

    Ok(report)
}
