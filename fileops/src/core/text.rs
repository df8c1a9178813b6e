// src/core/text.rs
pub mod filter;
pub mod lines;
pub mod slice;
pub mod words;

pub use filter::partition;
pub use lines::{read_lines, write_lines};
pub use slice::{head, parse_count, tail};
pub use words::{compute, is_number, strip_punctuation};
