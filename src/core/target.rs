//! Output target resolution: pick the destination path and its format.
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};
use crate::types::OutputFormat;

/// Destination file and the serializer it maps to
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputTarget {
    pub path: PathBuf,
    pub format: OutputFormat,
}

/// Resolve where and how to write.
///
/// An explicit `output` decides the format by its extension; an unknown or
/// missing extension is an error. Without `output`, the input path gets the
/// extension of `default_format`.
pub fn resolve_target(
    input: &Path,
    output: Option<&Path>,
    default_format: OutputFormat,
) -> Result<OutputTarget> {
    let target = match output {
        Some(path) => {
            let ext = path
                .extension()
                .map(|e| e.to_string_lossy().into_owned())
                .unwrap_or_default();
            let format = OutputFormat::from_extension(&ext)
                .ok_or(Error::UnsupportedFormat { extension: ext })?;
            OutputTarget {
                path: path.to_path_buf(),
                format,
            }
        }
        None => OutputTarget {
            path: input.with_extension(default_format.extension()),
            format: default_format,
        },
    };

    if same_file(input, &target.path) {
        return Err(Error::OutputIsInput { path: target.path });
    }
    Ok(target)
}

/// True when `output` names the existing `input` file, however it is spelled.
///
/// The output need not exist yet, so its parent is canonicalized and the file
/// name rejoined.
fn same_file(input: &Path, output: &Path) -> bool {
    if input == output {
        return true;
    }
    let Ok(input) = input.canonicalize() else {
        return false;
    };
    let Some(name) = output.file_name() else {
        return false;
    };
    let parent = match output.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    parent
        .canonicalize()
        .map(|dir| dir.join(name) == input)
        .unwrap_or(false)
}
