//! Hard-mode constraint derivation and validation
//!
//! Hard mode means every guess must honor what earlier feedback revealed:
//! green positions stay locked, and any letter revealed as green/yellow must
//! keep appearing at least as many times as it was revealed.

use super::session::GuessRecord;
use crate::core::{LetterStatus, Word};
use rustc_hash::FxHashMap;
use std::fmt;

/// Constraints derived from the guess history
///
/// Not stored anywhere; recomputed from the full history before each
/// validation so the result is always identical to a fresh derivation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HardModeConstraints {
    /// Required letter per position, where a green has been seen
    locked: [Option<u8>; 5],
    /// Minimum occurrences per letter, from green/yellow reveals
    min_counts: FxHashMap<u8, u8>,
}

/// A candidate guess that ignores revealed information
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HardModeViolation {
    /// A locked (green) position holds a different letter
    PositionMismatch { position: usize, letter: u8 },
    /// A revealed letter appears fewer times than required
    InsufficientCount { letter: u8, required: u8 },
}

impl fmt::Display for HardModeViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::PositionMismatch { position, letter } => write!(
                f,
                "Hard mode: position {} must be '{}'.",
                position + 1,
                letter.to_ascii_uppercase() as char
            ),
            Self::InsufficientCount { letter, required } => write!(
                f,
                "Hard mode: include {}x '{}'.",
                required,
                letter.to_ascii_uppercase() as char
            ),
        }
    }
}

impl std::error::Error for HardModeViolation {}

impl HardModeConstraints {
    /// Derive constraints from the full guess history
    ///
    /// For each past guess: a green locks its position; for every letter
    /// with at least one green/yellow, the minimum count is the number of
    /// green/yellow occurrences of that letter *within that single guess*,
    /// maximized across history. Max, never sum: a later guess that matched
    /// fewer copies of a letter must not lower an earlier requirement.
    #[must_use]
    pub fn derive(history: &[GuessRecord]) -> Self {
        let mut locked = [None; 5];
        let mut min_counts: FxHashMap<u8, u8> = FxHashMap::default();

        for record in history {
            let chars = record.word.chars();
            let statuses = record.result.statuses();

            for (i, (&ch, &status)) in chars.iter().zip(statuses).enumerate() {
                if status == LetterStatus::Correct {
                    // Target is fixed, so a re-lock can only repeat the letter
                    locked[i] = Some(ch);
                }
                if status != LetterStatus::Absent {
                    let have = chars
                        .iter()
                        .zip(statuses)
                        .filter(|&(&a, &b)| a == ch && b != LetterStatus::Absent)
                        .count() as u8;
                    let entry = min_counts.entry(ch).or_insert(0);
                    *entry = (*entry).max(have);
                }
            }
        }

        Self { locked, min_counts }
    }

    /// Check a candidate guess against the constraints
    ///
    /// Locked positions are checked first (lowest position wins the error),
    /// then minimum counts in alphabetical order, so rejection messages are
    /// deterministic.
    ///
    /// # Errors
    /// Returns the first `HardModeViolation` found, if any.
    pub fn validate(&self, candidate: &Word) -> Result<(), HardModeViolation> {
        for (position, required) in self.locked.iter().enumerate() {
            if let Some(letter) = *required
                && candidate.chars()[position] != letter
            {
                return Err(HardModeViolation::PositionMismatch { position, letter });
            }
        }

        for letter in b'a'..=b'z' {
            if let Some(&required) = self.min_counts.get(&letter)
                && candidate.count_of(letter) < required
            {
                return Err(HardModeViolation::InsufficientCount { letter, required });
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::GuessResult;

    fn w(s: &str) -> Word {
        Word::new(s).unwrap()
    }

    fn record(guess: &str, target: &str) -> GuessRecord {
        let guess = w(guess);
        let result = GuessResult::score(&guess, &w(target));
        GuessRecord::new(guess, result)
    }

    #[test]
    fn empty_history_accepts_anything() {
        let constraints = HardModeConstraints::derive(&[]);
        assert_eq!(constraints.validate(&w("zonks")), Ok(()));
    }

    #[test]
    fn locked_position_enforced() {
        // Target "crane": guessing "crash" locks C, R and A
        let history = vec![record("crash", "crane")];
        let constraints = HardModeConstraints::derive(&history);

        assert_eq!(constraints.validate(&w("crank")), Ok(()));
        // Position 2 (1-indexed) must stay 'r'
        assert_eq!(
            constraints.validate(&w("caner")),
            Err(HardModeViolation::PositionMismatch {
                position: 1,
                letter: b'r'
            })
        );
    }

    #[test]
    fn locked_position_message_is_one_indexed() {
        let history = vec![record("crash", "crane")];
        let constraints = HardModeConstraints::derive(&history);
        let err = constraints.validate(&w("caner")).unwrap_err();
        assert_eq!(err.to_string(), "Hard mode: position 2 must be 'R'.");
    }

    #[test]
    fn revealed_letter_must_be_included() {
        // Target "slate": "cares" reveals A, E and S as yellows (no locks)
        let history = vec![record("cares", "slate")];
        let constraints = HardModeConstraints::derive(&history);

        // "moral" has the A but is missing the E entirely
        assert_eq!(
            constraints.validate(&w("moral")),
            Err(HardModeViolation::InsufficientCount {
                letter: b'e',
                required: 1
            })
        );
        assert_eq!(constraints.validate(&w("slate")), Ok(()));
    }

    #[test]
    fn duplicate_reveal_requires_count() {
        // Target "sheep" vs guess "eerie": two E's come back yellow,
        // nothing is locked, so the count rule acts on its own
        let history = vec![record("eerie", "sheep")];
        let constraints = HardModeConstraints::derive(&history);

        // Only one E
        assert_eq!(
            constraints.validate(&w("spend")).unwrap_err(),
            HardModeViolation::InsufficientCount {
                letter: b'e',
                required: 2
            }
        );
        assert_eq!(constraints.validate(&w("sheep")), Ok(()));
    }

    #[test]
    fn min_counts_take_max_across_history_not_sum() {
        // Target "sheep": "eerie" reveals two E's, the later "shelf" only
        // one. The requirement must stay at two, and must not become three.
        let history = vec![record("eerie", "sheep"), record("shelf", "sheep")];
        let constraints = HardModeConstraints::derive(&history);

        // "sheaf" honors the s-h-e locks from "shelf" but has a single E
        assert_eq!(
            constraints.validate(&w("sheaf")).unwrap_err(),
            HardModeViolation::InsufficientCount {
                letter: b'e',
                required: 2
            }
        );
        // Two E's satisfy it
        assert_eq!(constraints.validate(&w("sheet")), Ok(()));
    }

    #[test]
    fn later_locks_accumulate() {
        let history = vec![record("crane", "slate"), record("plate", "slate")];
        let constraints = HardModeConstraints::derive(&history);

        // "plate" locked l, a, t, e at positions 2-5
        assert_eq!(constraints.validate(&w("slate")), Ok(()));
        assert_eq!(
            constraints.validate(&w("slats")).unwrap_err(),
            HardModeViolation::PositionMismatch {
                position: 4,
                letter: b'e'
            }
        );
    }

    #[test]
    fn insufficient_count_message() {
        let history = vec![record("eerie", "sheep")];
        let constraints = HardModeConstraints::derive(&history);
        let err = constraints.validate(&w("spend")).unwrap_err();
        assert_eq!(err.to_string(), "Hard mode: include 2x 'E'.");
    }
}
