// src/core/analyzer.rs
use chrono::{DateTime, Local};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use crate::core::aggregate::{build_index, merge, report};
use crate::core::text::{compute, head, partition, read_lines, tail, write_lines};
use crate::error::{Error, Result};
use crate::models::{AggregateTotals, WordStat};
use crate::utils::{ensure_dir, rfc3339, stat};

pub const FILTERED_FILE: &str = "filtered.txt";
pub const FILTERED_NOT_FILE: &str = "filtered_not.txt";
pub const HEAD_FILE: &str = "head.txt";
pub const TAIL_FILE: &str = "tail.txt";
pub const REPORT_FILE: &str = "report.txt";
pub const INDEX_FILE: &str = "index.txt";
pub const MERGED_FILE: &str = "merged.txt";

/// What a single-file analysis measured. The derived line sets are on disk.
#[derive(Debug, Clone, PartialEq)]
pub struct FileAnalysis {
    pub path: PathBuf,
    pub size: u64,
    pub modified: DateTime<Local>,
    pub line_count: usize,
    pub stats: WordStat,
    pub match_count: usize,
}

/// Artifacts written by a directory analysis.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectoryOutputs {
    pub file_count: usize,
    pub totals: AggregateTotals,
    pub report: PathBuf,
    pub index: PathBuf,
    pub merged: PathBuf,
}

impl fmt::Display for FileAnalysis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "File: {}", self.path.display())?;
        writeln!(f, "Size: {} bytes", self.size)?;
        writeln!(f, "Modified: {}", rfc3339(&self.modified))?;
        writeln!(f, "Lines: {}", self.line_count)?;
        writeln!(f, "Words (numbers excluded): {}", self.stats.word_count)?;
        writeln!(f, "Average length: {:.2}", self.stats.average_length)?;
        write!(f, "Lines containing keyword: {}", self.match_count)
    }
}

impl fmt::Display for DirectoryOutputs {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Files analyzed: {}", self.file_count)?;
        writeln!(f, "Total size: {} bytes", self.totals.size)?;
        writeln!(f, "Total lines: {}", self.totals.lines)?;
        writeln!(f, "Total words: {}", self.totals.words)?;
        write!(
            f,
            "Wrote {}, {}, {}",
            self.report.display(),
            self.index.display(),
            self.merged.display()
        )
    }
}

/// Analyzes one file and writes its keyword split and head/tail excerpts
/// into `out_dir`.
///
/// `count` is used as given; callers coerce user input with
/// [`parse_count`](crate::core::text::parse_count) first.
///
/// # Errors
///
/// Returns [`Error::Io`] if the file cannot be read or stat'ed, or if an
/// output cannot be written. Outputs written before the failure stay on disk.
pub fn analyze_file(
    path: &Path,
    keyword: &str,
    count: usize,
    out_dir: &Path,
) -> Result<FileAnalysis> {
    let lines = read_lines(path)?;
    let file_stat = stat(path)?;
    let stats = compute(&lines);
    let split = partition(&lines, keyword);

    ensure_dir(out_dir)?;
    write_lines(&out_dir.join(FILTERED_FILE), &split.matching)?;
    write_lines(&out_dir.join(FILTERED_NOT_FILE), &split.non_matching)?;
    write_lines(&out_dir.join(HEAD_FILE), head(&lines, count))?;
    write_lines(&out_dir.join(TAIL_FILE), tail(&lines, count))?;

    Ok(FileAnalysis {
        path: path.to_path_buf(),
        size: file_stat.size,
        modified: file_stat.modified,
        line_count: lines.len(),
        stats,
        match_count: split.match_count(),
    })
}

fn write_bytes(path: &Path, data: &[u8]) -> Result<()> {
    fs::write(path, data).map_err(|e| Error::io(path, e))?;
    log::info!("wrote {} ({} bytes)", path.display(), data.len());
    Ok(())
}

/// Writes `report.txt`, `index.txt` and `merged.txt` for `dir` into `out_dir`.
///
/// The report is computed first, so a bad directory or an empty scan leaves
/// `out_dir` untouched. The index reuses the report's file list; the merge
/// scans `dir` again on its own.
///
/// # Errors
///
/// * [`Error::NotFound`] or [`Error::NotADirectory`] for a bad `dir`
/// * [`Error::NoMatchingFiles`] if no file has `extension`
/// * [`Error::Io`] for any read, stat or write failure; artifacts already
///   written by this call are left in place
pub fn analyze_directory(
    dir: &Path,
    extension: &str,
    out_dir: &Path,
) -> Result<DirectoryOutputs> {
    let aggregate = report(dir, extension)?;

    ensure_dir(out_dir)?;
    let report_path = out_dir.join(REPORT_FILE);
    write_bytes(&report_path, aggregate.render().as_bytes())?;

    let index_path = out_dir.join(INDEX_FILE);
    let index = build_index(&aggregate.paths())?;
    write_bytes(&index_path, index.as_bytes())?;

    let merged_path = out_dir.join(MERGED_FILE);
    let merged = merge(dir, extension)?;
    write_bytes(&merged_path, &merged)?;

    Ok(DirectoryOutputs {
        file_count: aggregate.records.len(),
        totals: aggregate.totals,
        report: report_path,
        index: index_path,
        merged: merged_path,
    })
}
