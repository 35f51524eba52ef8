//! I/O layer: reading the HTML input and the `writers` that serialize a grid.
pub mod writers;

use std::fs;
use std::path::Path;

use tracing::{debug, warn};

use crate::error::{Error, Result};

/// Read an HTML file as text. Invalid UTF-8 sequences are replaced rather
/// than rejected.
pub fn read_input(path: &Path) -> Result<String> {
    let bytes = fs::read(path).map_err(|source| Error::ReadInput {
        path: path.to_path_buf(),
        source,
    })?;
    debug!("Read {} bytes from {:?}", bytes.len(), path);

    match String::from_utf8(bytes) {
        Ok(text) => Ok(text),
        Err(e) => {
            warn!("{:?} is not valid UTF-8; undecodable bytes were replaced", path);
            Ok(String::from_utf8_lossy(e.as_bytes()).into_owned())
        }
    }
}
