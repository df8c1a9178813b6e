// src/models/aggregate_totals.rs

use crate::models::FileRecord;

/// Running sums over the file records of one directory pass.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct AggregateTotals {
    pub size: u64,
    pub lines: u64,
    pub words: u64,
}

impl AggregateTotals {
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self {
            size: 0,
            lines: 0,
            words: 0,
        }
    }

    #[inline]
    pub const fn add(&mut self, size: u64, lines: u64, words: u64) {
        self.size = self.size.saturating_add(size);
        self.lines = self.lines.saturating_add(lines);
        self.words = self.words.saturating_add(words);
    }

    #[inline]
    pub const fn add_record(&mut self, record: &FileRecord) {
        self.add(record.size, record.line_count, record.stats.word_count);
    }
}
