// src/models/keyword_partition.rs

/// Lines split by whether they contain a keyword. Both sides keep file order.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct KeywordPartition<'a> {
    pub matching: Vec<&'a str>,
    pub non_matching: Vec<&'a str>,
}

impl KeywordPartition<'_> {
    #[inline]
    #[must_use]
    pub fn match_count(&self) -> usize {
        self.matching.len()
    }
}
