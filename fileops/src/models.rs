// src/models.rs
pub mod aggregate_totals;
pub mod file_record;
pub mod keyword_partition;
pub mod word_stat;

pub use aggregate_totals::AggregateTotals;
pub use file_record::FileRecord;
pub use keyword_partition::KeywordPartition;
pub use word_stat::WordStat;
