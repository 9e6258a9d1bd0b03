//! Word list file loading
//!
//! Reads newline-delimited list files and parses their lines into words,
//! counting the lines that fail validation so the session can report them.

use crate::core::Word;
use std::fs;
use std::io;
use std::path::Path;

/// Read a list file into lower-cased lines.
///
/// Line terminators are stripped; nothing else is trimmed, so padded or
/// empty lines survive into validation and fail there.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use words_virtuoso::wordlists::read_lines;
///
/// let lines = read_lines("data/words.txt").unwrap();
/// println!("Read {} lines", lines.len());
/// ```
pub fn read_lines<P: AsRef<Path>>(path: P) -> io::Result<Vec<String>> {
    let content = fs::read_to_string(path)?;
    Ok(content.lines().map(str::to_lowercase).collect())
}

/// Parse lines into words, counting the lines that fail validation.
///
/// Returns the parsed words in file order together with the number of
/// invalid lines. A line that appears twice is counted twice.
#[must_use]
pub fn parse_words(lines: &[String]) -> (Vec<Word>, usize) {
    let mut invalid = 0;
    let words = lines
        .iter()
        .filter_map(|line| match Word::parse(line) {
            Ok(word) => Some(word),
            Err(_) => {
                invalid += 1;
                None
            }
        })
        .collect();

    (words, invalid)
}
