// src/core/aggregate/index.rs
use std::fmt::Write as _;
use std::path::Path;

use crate::error::Result;
use crate::utils::{rfc3339, stat};

/// Renders one `path | size octets | mtime` line per file.
///
/// # Errors
///
/// Returns [`Error::Io`](crate::Error::Io) for the first file whose metadata
/// cannot be read; no partial index is produced.
pub fn build_index<P: AsRef<Path>>(files: &[P]) -> Result<String> {
    let mut index = String::new();
    for path in files {
        let path: &Path = path.as_ref();
        let file_stat = stat(path)?;
        // infallible on a String
        let _ = writeln!(
            index,
            "{} | {} octets | {}",
            path.display(),
            file_stat.size,
            rfc3339(&file_stat.modified)
        );
    }
    Ok(index)
}
