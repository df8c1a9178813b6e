// src/core/aggregate/report.rs
use std::fmt;
use std::path::{Path, PathBuf};

use crate::core::scanner::scan;
use crate::core::text::{compute, read_lines};
use crate::error::{Error, Result};
use crate::models::{AggregateTotals, FileRecord};
use crate::utils::stat;

/// Per-file records and totals of one directory pass, in scan order.
#[derive(Debug, Clone)]
pub struct AggregateReport {
    pub records: Vec<FileRecord>,
    pub totals: AggregateTotals,
}

impl AggregateReport {
    /// Paths of the reported files, in the order they were scanned.
    #[must_use]
    pub fn paths(&self) -> Vec<PathBuf> {
        self.records.iter().map(|r| r.path.clone()).collect()
    }

    /// The human-readable report written to `report.txt`.
    #[must_use]
    pub fn render(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for AggregateReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Multi-file report")?;
        writeln!(f)?;
        for record in &self.records {
            writeln!(f, "File: {}", record.path.display())?;
            writeln!(f, "  Size: {}", record.size)?;
            writeln!(f, "  Lines: {}", record.line_count)?;
            writeln!(
                f,
                "  Words: {} ({:.2})",
                record.stats.word_count, record.stats.average_length
            )?;
            writeln!(f)?;
        }
        writeln!(f, "Totals")?;
        writeln!(f, "  Size: {}", self.totals.size)?;
        writeln!(f, "  Lines: {}", self.totals.lines)?;
        writeln!(f, "  Words: {}", self.totals.words)
    }
}

/// Reads, stats and measures one file.
///
/// # Errors
///
/// Returns [`Error::Io`] if the file cannot be read or its metadata is unavailable.
pub fn record_file(path: &Path) -> Result<FileRecord> {
    let lines = read_lines(path)?;
    let file_stat = stat(path)?;
    let stats = compute(&lines);
    log::debug!(
        "{}: {} lines, {} words",
        path.display(),
        lines.len(),
        stats.word_count
    );
    Ok(FileRecord {
        path: path.to_path_buf(),
        size: file_stat.size,
        modified: file_stat.modified,
        line_count: u64::try_from(lines.len()).unwrap_or(u64::MAX),
        stats,
    })
}

/// Measures every `extension` file under `root` and sums the results.
///
/// Nothing is returned unless every file was measured; the first failure
/// aborts the whole pass.
///
/// # Errors
///
/// * [`Error::NotFound`] or [`Error::NotADirectory`] for a bad `root`
/// * [`Error::NoMatchingFiles`] if the scan finds nothing
/// * [`Error::Io`] if any matched file cannot be read or stat'ed
pub fn report(root: &Path, extension: &str) -> Result<AggregateReport> {
    let files = scan(root, extension)?;
    if files.is_empty() {
        return Err(Error::NoMatchingFiles {
            root: root.to_path_buf(),
            extension: extension.to_owned(),
        });
    }

    aggregate_files(&files)
}

fn aggregate_files(files: &[PathBuf]) -> Result<AggregateReport> {
    let mut records = Vec::with_capacity(files.len());
    let mut totals = AggregateTotals::new();
    for path in files {
        let record = record_file(path)?;
        totals.add_record(&record);
        records.push(record);
    }

    Ok(AggregateReport { records, totals })
}
