//! Word list loading utilities
//!
//! Lists are returned as normalized strings and validated later by
//! `Engine::init`, so a bad entry is reported with its position instead of
//! being dropped.

use std::fs;
use std::io;
use std::path::Path;

use super::{ALLOWED, ANSWERS};

/// Trim and lowercase every line, dropping blank lines
///
/// Matches the normalization `build.rs` applies to the embedded lists.
#[must_use]
pub fn parse_lines(content: &str) -> Vec<String> {
    content
        .lines()
        .map(|line| line.trim().to_lowercase())
        .filter(|line| !line.is_empty())
        .collect()
}

/// Load a word list from a file, one word per line
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use wordle_matrix::wordlists::loader::load_from_file;
///
/// let words = load_from_file("data/answers.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Vec<String>> {
    let path = path.as_ref();
    let words = parse_lines(&fs::read_to_string(path)?);
    log::info!("loaded {} words from {}", words.len(), path.display());
    Ok(words)
}

/// Convert an embedded list to owned strings
///
/// # Examples
/// ```
/// use wordle_matrix::wordlists::loader::strings_from_slice;
/// use wordle_matrix::wordlists::ANSWERS;
///
/// let words = strings_from_slice(ANSWERS);
/// assert_eq!(words.len(), ANSWERS.len());
/// ```
#[must_use]
pub fn strings_from_slice(slice: &[&str]) -> Vec<String> {
    slice.iter().map(|&s| s.to_string()).collect()
}

/// Solution list and dictionary, from files where given, embedded otherwise
///
/// # Errors
///
/// Returns an I/O error if a given file cannot be read.
pub fn load_lists(
    answers: Option<&Path>,
    dictionary: Option<&Path>,
) -> io::Result<(Vec<String>, Vec<String>)> {
    let solutions = match answers {
        Some(path) => load_from_file(path)?,
        None => strings_from_slice(ANSWERS),
    };
    let dictionary = match dictionary {
        Some(path) => load_from_file(path)?,
        None => strings_from_slice(ALLOWED),
    };
    Ok((solutions, dictionary))
}
