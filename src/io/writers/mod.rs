//! Grid serializers and the atomic file write they share.
pub mod delimited;
pub mod xlsx;

use std::borrow::Cow;
use std::io::{BufWriter, Write};
use std::path::Path;

use tracing::{debug, info};

use crate::error::{Error, Result};
use crate::types::{Grid, OutputFormat};

/// Cell count of the widest row.
pub fn grid_width(grid: &Grid) -> usize {
    grid.iter().map(Vec::len).max().unwrap_or(0)
}

/// Rows padded with empty cells to [`grid_width`]; full rows are borrowed.
pub(crate) fn padded_rows(grid: &Grid) -> impl Iterator<Item = Cow<'_, [String]>> {
    let width = grid_width(grid);
    grid.iter().map(move |row| {
        if row.len() == width {
            Cow::Borrowed(row.as_slice())
        } else {
            let mut padded = row.clone();
            padded.resize(width, String::new());
            Cow::Owned(padded)
        }
    })
}

/// Serialize `grid` to `path` in `format`.
///
/// The file is written to a temporary sibling and renamed over `path` only
/// once complete; on any error the temporary is removed and `path` is left
/// untouched.
pub fn write_grid(
    grid: &Grid,
    path: &Path,
    format: OutputFormat,
    coerce_numbers: bool,
) -> Result<()> {
    let parent = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    if !parent.is_dir() {
        return Err(Error::unwritable(
            path,
            format!("directory {} does not exist", parent.display()),
        ));
    }

    let mut tmp_builder = tempfile::Builder::new();
    tmp_builder.prefix(".html2sheet-").suffix(".tmp");
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        tmp_builder.permissions(std::fs::Permissions::from_mode(0o644));
    }
    let mut tmp = tmp_builder
        .tempfile_in(parent)
        .map_err(|e| Error::unwritable(path, e))?;
    debug!("Writing {} to temporary {:?}", format, tmp.path());

    match format {
        OutputFormat::Csv | OutputFormat::Tsv => {
            let delimiter = format.delimiter().unwrap_or(b',');
            let mut out = BufWriter::new(tmp.as_file_mut());
            delimited::write_delimited(&mut out, grid, delimiter)?;
            out.flush()?;
        }
        OutputFormat::Xlsx => {
            xlsx::write_workbook(tmp.as_file_mut(), grid, coerce_numbers)?;
        }
    }
    tmp.as_file().sync_all()?;

    tmp.persist(path).map_err(|e| Error::unwritable(path, e.error))?;
    info!("Wrote {} rows as {} to {:?}", grid.len(), format, path);
    Ok(())
}
