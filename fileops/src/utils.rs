// src/utils.rs
use chrono::{DateTime, Local, SecondsFormat};
use std::fs;
use std::path::Path;

use crate::error::{Error, Result};

/// Size in bytes and last modification time of a file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FileStat {
    pub size: u64,
    pub modified: DateTime<Local>,
}

/// Reads size and modification time for `path`.
///
/// # Errors
///
/// Returns [`Error::Io`] if the metadata or the modification time is unavailable.
pub fn stat(path: &Path) -> Result<FileStat> {
    let metadata = fs::metadata(path).map_err(|e| Error::io(path, e))?;
    let modified = metadata.modified().map_err(|e| Error::io(path, e))?;
    Ok(FileStat {
        size: metadata.len(),
        modified: modified.into(),
    })
}

/// RFC 3339 with second precision, e.g. `2024-05-01T09:30:00+02:00`.
#[must_use]
pub fn rfc3339(time: &DateTime<Local>) -> String {
    time.to_rfc3339_opts(SecondsFormat::Secs, true)
}

#[must_use]
pub fn now_rfc3339() -> String {
    rfc3339(&Local::now())
}

/// True if `path` exists and is not a directory.
#[must_use]
pub fn is_file(path: &Path) -> bool {
    fs::metadata(path).is_ok_and(|m| !m.is_dir())
}

/// Path of `path` relative to `root`, with `/` separators.
/// Paths outside `root` are returned unchanged.
#[must_use]
pub fn display_relative(root: &Path, path: &Path) -> String {
    match path.strip_prefix(root) {
        Ok(relative) => relative
            .components()
            .map(|c| c.as_os_str().to_string_lossy())
            .collect::<Vec<_>>()
            .join("/"),
        Err(_) => path.to_string_lossy().into_owned(),
    }
}

/// Creates `dir` and its parents if needed.
///
/// # Errors
///
/// Returns [`Error::Io`] if the directory cannot be created.
pub fn ensure_dir(dir: &Path) -> Result<()> {
    fs::create_dir_all(dir).map_err(|e| Error::io(dir, e))
}
