// src/core.rs
pub mod aggregate;
pub mod analyzer;
pub mod lock;
pub mod scanner;
pub mod text;
