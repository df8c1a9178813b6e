// src/lib.rs
pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod menu;
pub mod models;
pub mod utils;

pub use cli::{Args, Command, run};
pub use config::Config;
pub use crate::core::aggregate::{AggregateReport, build_index, merge, report};
pub use crate::core::analyzer::{DirectoryOutputs, FileAnalysis, analyze_directory, analyze_file};
pub use crate::core::lock::{lock, lock_path, unlock};
pub use crate::core::scanner::{Scanner, scan};
pub use crate::core::text::{compute, head, is_number, parse_count, partition, read_lines, tail};
pub use error::{Error, Result};
pub use models::{AggregateTotals, FileRecord, KeywordPartition, WordStat};
