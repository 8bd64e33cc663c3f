//! Word list loading
//!
//! Reads optional external lists and falls back to the built-in defaults.
//! Lines are normalized (trimmed, lowercased) and anything that isn't a
//! clean 5-letter word is skipped.

use super::{BUILTIN_GUESSES, BUILTIN_SOLUTIONS, WordPools};
use crate::core::Word;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Load words from a file
///
/// Returns a vector of valid `Word` instances, skipping blank lines and
/// invalid entries.
///
/// # Errors
/// Returns an I/O error if the file cannot be read.
///
/// # Examples
/// ```no_run
/// use wordle_terminal::wordlists::loader::load_from_file;
///
/// let words = load_from_file("solutions.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Vec<Word>> {
    let content = fs::read_to_string(path)?;

    let words = content
        .lines()
        .filter_map(|line| {
            let trimmed = line.trim();
            if trimmed.is_empty() {
                None
            } else {
                Word::new(trimmed).ok()
            }
        })
        .collect();

    Ok(words)
}

/// Convert an embedded string slice to a Word vector
///
/// # Examples
/// ```
/// use wordle_terminal::wordlists::BUILTIN_SOLUTIONS;
/// use wordle_terminal::wordlists::loader::words_from_slice;
///
/// let words = words_from_slice(BUILTIN_SOLUTIONS);
/// assert_eq!(words.len(), BUILTIN_SOLUTIONS.len());
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<Word> {
    slice.iter().filter_map(|&s| Word::new(s).ok()).collect()
}

/// Assemble the game's word pools from optional list files
///
/// A file whose name contains "solution" feeds the answer pool; any other
/// file feeds the allowed-guess pool. Missing files are skipped, and a pool
/// that ends up empty falls back to the built-in list. `WordPools::new`
/// then deduplicates and guarantees allowed ⊇ solutions.
///
/// # Errors
/// Returns an I/O error if an existing list file cannot be read.
pub fn load_pools(paths: &[PathBuf]) -> io::Result<WordPools> {
    let mut solutions: Vec<Word> = Vec::new();
    let mut allowed: Vec<Word> = Vec::new();

    for path in paths {
        if !path.exists() {
            continue;
        }
        let words = load_from_file(path)?;
        let is_solutions = path
            .file_name()
            .and_then(|name| name.to_str())
            .is_some_and(|name| name.to_lowercase().contains("solution"));
        if is_solutions {
            solutions.extend(words);
        } else {
            allowed.extend(words);
        }
    }

    if solutions.is_empty() {
        solutions = words_from_slice(BUILTIN_SOLUTIONS);
    }
    if allowed.is_empty() {
        allowed = words_from_slice(BUILTIN_GUESSES);
    }

    Ok(WordPools::new(solutions, allowed))
}
