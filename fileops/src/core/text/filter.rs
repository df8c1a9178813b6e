// src/core/text/filter.rs
use crate::models::KeywordPartition;

/// Splits lines on whether they contain `keyword` (case-sensitive substring).
///
/// The empty keyword matches every line. Relative order is kept on both sides.
#[must_use]
pub fn partition<'a, S: AsRef<str>>(lines: &'a [S], keyword: &str) -> KeywordPartition<'a> {
    let (matching, non_matching): (Vec<&'a str>, Vec<&'a str>) = lines
        .iter()
        .map(AsRef::<str>::as_ref)
        .partition(|line: &&str| line.contains(keyword));
    KeywordPartition {
        matching,
        non_matching,
    }
}
