//! Word pools for the game
//!
//! Two ordered, duplicate-free pools: `solutions` (candidate answers) and
//! `allowed` (acceptable guesses, always a superset of the solutions).
//! Read-only after load; sessions borrow them.

mod embedded;
pub mod loader;

pub use embedded::{BUILTIN_GUESSES, BUILTIN_SOLUTIONS};

use crate::core::Word;
use rustc_hash::FxHashSet;

/// The loaded solution and guess pools
#[derive(Debug, Clone)]
pub struct WordPools {
    solutions: Vec<Word>,
    allowed: Vec<Word>,
    allowed_set: FxHashSet<Word>,
}

impl WordPools {
    /// Build pools from raw word lists
    ///
    /// Both lists are deduplicated with insertion order preserved (daily
    /// and seeded targets depend on a stable order), and every solution is
    /// merged into the allowed pool so the answer is always guessable.
    #[must_use]
    pub fn new(solutions: Vec<Word>, allowed: Vec<Word>) -> Self {
        let solutions = dedup_preserving_order(solutions);
        let allowed =
            dedup_preserving_order(allowed.into_iter().chain(solutions.iter().cloned()).collect());
        let allowed_set = allowed.iter().cloned().collect();

        Self {
            solutions,
            allowed,
            allowed_set,
        }
    }

    /// Candidate answers, in load order
    #[inline]
    #[must_use]
    pub fn solutions(&self) -> &[Word] {
        &self.solutions
    }

    /// Acceptable guesses, in load order
    #[inline]
    #[must_use]
    pub fn allowed(&self) -> &[Word] {
        &self.allowed
    }

    /// O(1) membership check for guess validation
    #[inline]
    #[must_use]
    pub fn is_allowed(&self, word: &Word) -> bool {
        self.allowed_set.contains(word)
    }
}

fn dedup_preserving_order(words: Vec<Word>) -> Vec<Word> {
    let mut seen = FxHashSet::default();
    words.into_iter().filter(|w| seen.insert(w.clone())).collect()
}
