//! Filesystem adapter
//!
//! GEF files in the wild predate UTF-8 and frequently carry Latin-1
//! accented characters in company names and remarks, so reads go through
//! a lossy decode rather than failing on invalid sequences.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::{Error, Result};

/// Read a GEF file into a string, tolerating non-UTF-8 bytes
pub fn read_gef_file(path: &Path) -> Result<String> {
    let bytes = fs::read(path).map_err(|error| {
        Error::io(format!("failed to read '{}'", path.display()), error)
    })?;

    let text = String::from_utf8_lossy(&bytes).into_owned();
    debug!(path = %path.display(), bytes = bytes.len(), "read GEF file");
    Ok(text)
}

/// Collect the `.gef` files directly inside a directory, sorted by name
pub fn list_gef_files(dir: &Path) -> Result<Vec<std::path::PathBuf>> {
    let entries = fs::read_dir(dir).map_err(|error| {
        Error::io(format!("failed to read directory '{}'", dir.display()), error)
    })?;

    let mut paths: Vec<std::path::PathBuf> = entries
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|path| {
            path.extension()
                .map(|ext| ext.eq_ignore_ascii_case("gef"))
                .unwrap_or(false)
        })
        .collect();
    paths.sort();
    Ok(paths)
}
