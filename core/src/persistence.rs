//! # Persistence
//!
//! Reads and writes text files on behalf of other types, keeping I/O out of
//! the types that own the data.

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use solid_common::{Result, SolidError};
use tracing::debug;

#[derive(Debug, Clone, Copy, Default)]
pub struct Persistence;

impl Persistence {
    /// Writes `content` to `path` if `overwrite` is set or the file does not exist yet.
    ///
    /// Returns whether the file was written.
    pub fn save_to_file(path: &Path, content: &str, overwrite: bool) -> Result<bool> {
        if !overwrite && path.exists() {
            debug!(path = %path.display(), "file exists, not overwriting");
            return Ok(false);
        }
        fs::write(path, content).map_err(|source| SolidError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        debug!(path = %path.display(), bytes = content.len(), "file saved");
        Ok(true)
    }

    /// Reads `path`, returning an empty string if the file does not exist.
    pub fn load_from_file(path: &Path) -> Result<String> {
        match fs::read_to_string(path) {
            Ok(content) => Ok(content),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(String::new()),
            Err(source) => Err(SolidError::Io {
                path: path.to_path_buf(),
                source,
            }),
        }
    }
}
