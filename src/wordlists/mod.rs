//! Word list loading
//!
//! The session reads its word list and candidate pool from newline-delimited
//! files supplied on the command line.

pub mod loader;

pub use loader::{parse_words, read_lines};
