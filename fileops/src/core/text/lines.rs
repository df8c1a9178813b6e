// src/core/text/lines.rs
use std::fs::{self, File};
use std::io::{BufRead as _, BufReader};
use std::path::Path;

use crate::error::{Error, Result};

/// Reads a file into its lines, without line terminators.
///
/// A trailing newline does not produce an empty last line and an empty
/// file yields no lines. `\r\n` endings are handled like `\n`. Bytes that
/// are not valid UTF-8 are replaced with U+FFFD, so any text encoding reads.
///
/// # Errors
///
/// Returns [`Error::Io`] if the file cannot be opened or if reading fails
/// part way through.
pub fn read_lines(path: &Path) -> Result<Vec<String>> {
    let file = File::open(path).map_err(|e| Error::io(path, e))?;
    let mut reader = BufReader::new(file);
    let mut lines = Vec::new();
    let mut buf = Vec::new();
    loop {
        buf.clear();
        let read = reader
            .read_until(b'\n', &mut buf)
            .map_err(|e| Error::io(path, e))?;
        if read == 0 {
            break;
        }
        let line = buf.strip_suffix(b"\n").unwrap_or(&buf);
        let line = line.strip_suffix(b"\r").unwrap_or(line);
        lines.push(String::from_utf8_lossy(line).into_owned());
    }
    Ok(lines)
}

/// Joins lines with `\n` and adds a final newline when there is any content.
#[must_use]
pub fn join_lines<S: AsRef<str>>(lines: &[S]) -> String {
    let mut content = lines
        .iter()
        .map(AsRef::<str>::as_ref)
        .collect::<Vec<_>>()
        .join("\n");
    if !content.is_empty() {
        content.push('\n');
    }
    content
}

/// Writes `lines` to `path`, replacing any previous content.
///
/// # Errors
///
/// Returns [`Error::Io`] if the file cannot be written.
pub fn write_lines<S: AsRef<str>>(path: &Path, lines: &[S]) -> Result<()> {
    fs::write(path, join_lines(lines)).map_err(|e| Error::io(path, e))?;
    log::info!("wrote {} ({} lines)", path.display(), lines.len());
    Ok(())
}
