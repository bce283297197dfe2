//! Word list loading utilities
//!
//! Reads plain text lists with one word per line. Blank lines are ignored,
//! words are trimmed and lowercased, and lines that are not valid words are
//! skipped.

use crate::core::Word;
use std::fs;
use std::io;
use std::path::Path;

/// Load words from a file
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use wordlex::wordlists::loader::load_from_file;
///
/// let words = load_from_file("data/possible_words.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Vec<Word>> {
    let content = fs::read_to_string(path)?;
    Ok(words_from_str(&content))
}

/// Parse a newline-separated word list
#[must_use]
pub fn words_from_str(content: &str) -> Vec<Word> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .filter_map(|line| Word::new(line).ok())
        .collect()
}

/// Convert a string slice to a Word vector, skipping invalid entries
///
/// # Examples
/// ```
/// use wordlex::wordlists::loader::words_from_slice;
///
/// let words = words_from_slice(&["crane", "toolong", "slate"]);
/// assert_eq!(words.len(), 2);
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<Word> {
    slice.iter().filter_map(|&s| Word::new(s).ok()).collect()
}
