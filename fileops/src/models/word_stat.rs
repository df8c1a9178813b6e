// src/models/word_stat.rs

/// Word count and mean word length over a set of lines.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct WordStat {
    pub word_count: u64,
    pub average_length: f64,
}

impl WordStat {
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self {
            word_count: 0,
            average_length: 0.0,
        }
    }

    /// Builds the stat from a word count and the summed word lengths.
    /// Zero words gives an average of exactly `0.0`.
    #[inline]
    #[must_use]
    #[expect(clippy::as_conversions, reason = "Precision not critical")]
    #[expect(clippy::cast_precision_loss, reason = "Precision not critical")]
    pub fn from_totals(word_count: u64, total_length: u64) -> Self {
        if word_count == 0 {
            return Self::new();
        }
        Self {
            word_count,
            average_length: total_length as f64 / word_count as f64,
        }
    }
}
