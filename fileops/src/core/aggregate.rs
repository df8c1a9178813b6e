// src/core/aggregate.rs
pub mod index;
pub mod merge;
pub mod report;

pub use index::build_index;
pub use merge::merge;
pub use report::{AggregateReport, record_file, report};
