pub mod output;
pub mod walker;

use crate::core::{Error, Result};
use std::fs;
use std::io::Write;
use std::path::Path;

pub fn read_file(path: &Path) -> Result<String> {
    Ok(fs::read_to_string(path)?)
}

pub fn write_file(path: &Path, content: &str) -> Result<()> {
    fs::write(path, content)?;
    Ok(())
}

/// Overwrite a file via a temp file in the same directory plus rename, so a
/// failed write never leaves the original half-rewritten.
pub fn write_file_atomic(path: &Path, content: &str) -> Result<()> {
    let dir = path.parent().unwrap_or_else(|| Path::new("."));
    let mut tmp = tempfile::NamedTempFile::new_in(dir)
        .map_err(|e| Error::write(path, format!("creating temp file: {e}")))?;
    tmp.write_all(content.as_bytes())
        .map_err(|e| Error::write(path, format!("writing temp file: {e}")))?;
    tmp.persist(path)
        .map_err(|e| Error::write(path, format!("replacing file: {e}")))?;
    Ok(())
}

pub fn dir_exists(path: &Path) -> bool {
    path.exists() && path.is_dir()
}
