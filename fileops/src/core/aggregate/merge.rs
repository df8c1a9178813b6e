// src/core/aggregate/merge.rs
use std::fs;
use std::path::{Path, PathBuf};

use crate::core::scanner::scan;
use crate::error::{Error, Result};
use crate::utils::display_relative;

/// Appends one file block: header, raw bytes, a closing newline if the
/// content lacks one, then a blank separator line.
fn push_block(out: &mut Vec<u8>, name: &str, data: &[u8]) {
    out.extend_from_slice(format!("===== {name} =====\n").as_bytes());
    out.extend_from_slice(data);
    if data.last() != Some(&b'\n') {
        out.push(b'\n');
    }
    out.push(b'\n');
}

/// Concatenates every `extension` file under `root` into one byte stream.
///
/// This scans `root` itself, independently of any earlier report. Headers
/// name each file relative to `root`.
///
/// # Errors
///
/// * [`Error::NotFound`] or [`Error::NotADirectory`] for a bad `root`
/// * [`Error::Io`] if any file cannot be read; nothing is returned then
pub fn merge(root: &Path, extension: &str) -> Result<Vec<u8>> {
    let files = scan(root, extension)?;
    let merged = merge_files(root, &files)?;
    log::debug!("merged {} file(s), {} bytes", files.len(), merged.len());
    Ok(merged)
}

fn merge_files(root: &Path, files: &[PathBuf]) -> Result<Vec<u8>> {
    let mut merged = Vec::new();
    for path in files {
        let data = fs::read(path).map_err(|e| Error::io(path, e))?;
        push_block(&mut merged, &display_relative(root, path), &data);
    }
    Ok(merged)
}
