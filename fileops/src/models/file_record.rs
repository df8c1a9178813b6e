// src/models/file_record.rs

use chrono::{DateTime, Local};
use std::path::PathBuf;

use crate::models::WordStat;

/// Per-file snapshot captured during an aggregate pass.
#[derive(Debug, Clone, PartialEq)]
pub struct FileRecord {
    pub path: PathBuf,
    pub size: u64,
    pub modified: DateTime<Local>,
    pub line_count: u64,
    pub stats: WordStat,
}
