//! Guess feedback calculation and representation
//!
//! Each guess is answered with one status per letter:
//! - `Correct` (green): right letter, right position
//! - `Present` (yellow): letter in the word, wrong position
//! - `Absent` (grey): letter not in the word (or duplicate budget spent)
//!
//! Scoring uses the classic two-pass algorithm so duplicate letters never
//! light up more tiles than the target actually contains.

use super::Word;
use rustc_hash::FxHashMap;

/// Per-letter feedback status
///
/// Derived ordering is `Absent < Present < Correct`, which is exactly the
/// "best known information" ordering the keyboard heatmap needs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum LetterStatus {
    Absent,
    Present,
    Correct,
}

impl LetterStatus {
    /// Emoji tile for this status (share grids and emoji mode)
    #[inline]
    #[must_use]
    pub const fn emoji(self) -> char {
        match self {
            Self::Correct => '🟩',
            Self::Present => '🟨',
            Self::Absent => '⬛',
        }
    }
}

/// Feedback for a full guess: one status per position
///
/// Index-aligned with the guess word's letters. Immutable once produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GuessResult([LetterStatus; 5]);

impl GuessResult {
    /// All greens (winning guess)
    pub const WIN: Self = Self([LetterStatus::Correct; 5]);

    /// Score `guess` against the hidden `target`
    ///
    /// # Algorithm
    /// 1. First pass: mark exact matches as `Correct`; every target letter
    ///    that was *not* matched at its own position goes into a per-letter
    ///    leftover budget.
    /// 2. Second pass: non-green guess letters with leftover budget become
    ///    `Present` (consuming one unit); the rest are `Absent`.
    ///
    /// This guarantees that for any letter, greens + yellows never exceed
    /// that letter's count in the target. Pure and deterministic.
    ///
    /// # Examples
    /// ```
    /// use wordle_terminal::core::{GuessResult, LetterStatus, Word};
    ///
    /// let guess = Word::new("crane").unwrap();
    /// let target = Word::new("slate").unwrap();
    /// let result = GuessResult::score(&guess, &target);
    ///
    /// // C(grey) R(grey) A(green) N(grey) E(green)
    /// assert_eq!(result.statuses()[2], LetterStatus::Correct);
    /// assert_eq!(result.statuses()[4], LetterStatus::Correct);
    /// ```
    #[must_use]
    pub fn score(guess: &Word, target: &Word) -> Self {
        let mut statuses = [LetterStatus::Absent; 5];
        let mut leftover: FxHashMap<u8, u8> = FxHashMap::default();

        // First pass: greens, plus leftover budget of unmatched target letters
        for i in 0..5 {
            if guess.chars()[i] == target.chars()[i] {
                statuses[i] = LetterStatus::Correct;
            } else {
                *leftover.entry(target.chars()[i]).or_insert(0) += 1;
            }
        }

        // Second pass: yellows while the letter still has remaining budget
        // Allow: index needed to check statuses[i] against guess.chars()[i]
        #[allow(clippy::needless_range_loop)]
        for i in 0..5 {
            if statuses[i] == LetterStatus::Correct {
                continue;
            }
            if let Some(count) = leftover.get_mut(&guess.chars()[i])
                && *count > 0
            {
                statuses[i] = LetterStatus::Present;
                *count -= 1;
            }
        }

        Self(statuses)
    }

    /// Get the per-position statuses
    #[inline]
    #[must_use]
    pub const fn statuses(&self) -> &[LetterStatus; 5] {
        &self.0
    }

    /// Check if this is a winning result (all greens)
    #[inline]
    #[must_use]
    pub fn is_win(&self) -> bool {
        self.0.iter().all(|&s| s == LetterStatus::Correct)
    }

    /// Emoji row for this result, e.g. "🟩🟨⬛⬛🟨"
    #[must_use]
    pub fn emoji(&self) -> String {
        self.0.iter().map(|s| s.emoji()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use LetterStatus::{Absent, Correct, Present};

    fn w(s: &str) -> Word {
        Word::new(s).unwrap()
    }

    #[test]
    fn status_ordering_best_known() {
        assert!(Absent < Present);
        assert!(Present < Correct);
    }

    #[test]
    fn score_all_correct() {
        let word = w("crane");
        let result = GuessResult::score(&word, &word);
        assert_eq!(result, GuessResult::WIN);
        assert!(result.is_win());
    }

    #[test]
    fn score_all_absent() {
        let result = GuessResult::score(&w("abcde"), &w("fghij"));
        assert_eq!(result.statuses(), &[Absent; 5]);
        assert!(!result.is_win());
    }

    #[test]
    fn score_classic_example() {
        // CRANE vs SLATE: only A and E line up; SLATE has no C, R or N
        let result = GuessResult::score(&w("crane"), &w("slate"));
        assert_eq!(result.statuses(), &[Absent, Absent, Correct, Absent, Correct]);
    }

    #[test]
    fn score_duplicates_lolly_vs_allot() {
        // Worked by hand against the two-pass algorithm:
        // pass 1 leaves leftover {a:1, l:1, o:1, t:1} after the green at
        // position 2, so only the FIRST extra 'l' earns a yellow.
        let result = GuessResult::score(&w("lolly"), &w("allot"));
        assert_eq!(
            result.statuses(),
            &[Present, Present, Correct, Absent, Absent]
        );
    }

    #[test]
    fn score_duplicates_speed_vs_sheep() {
        // S green, both middle E's green; P moves, D is out
        let result = GuessResult::score(&w("speed"), &w("sheep"));
        assert_eq!(
            result.statuses(),
            &[Correct, Present, Correct, Correct, Absent]
        );
    }

    #[test]
    fn score_duplicates_boost_vs_robot() {
        // ROBOT has two O's: one green at position 1, one yellow at
        // position 2; the S finds no budget left for anything
        let result = GuessResult::score(&w("boost"), &w("robot"));
        assert_eq!(
            result.statuses(),
            &[Present, Correct, Present, Absent, Correct]
        );
    }

    #[test]
    fn score_duplicates_speed_vs_erase() {
        // ERASE has two E's, so both guess E's go yellow; second S in the
        // guess doesn't exist, P doesn't exist
        let result = GuessResult::score(&w("speed"), &w("erase"));
        assert_eq!(
            result.statuses(),
            &[Present, Absent, Present, Present, Absent]
        );
    }

    #[test]
    fn score_marked_count_never_exceeds_target_count() {
        // For every letter: greens + yellows == min(count in guess, count in target)
        let cases = [
            ("lolly", "allot"),
            ("boost", "robot"),
            ("speed", "erase"),
            ("eeeee", "where"),
            ("aabba", "ababa"),
        ];
        for (guess, target) in cases {
            let (guess, target) = (w(guess), w(target));
            let result = GuessResult::score(&guess, &target);
            for letter in b'a'..=b'z' {
                let marked = result
                    .statuses()
                    .iter()
                    .zip(guess.chars())
                    .filter(|&(&s, &ch)| ch == letter && s != Absent)
                    .count() as u8;
                assert_eq!(
                    marked,
                    guess.count_of(letter).min(target.count_of(letter)),
                    "letter '{}' in {guess} vs {target}",
                    letter as char
                );
            }
        }
    }

    #[test]
    fn emoji_row() {
        let result = GuessResult::score(&w("crane"), &w("slate"));
        assert_eq!(result.emoji(), "⬛⬛🟩⬛🟩");
        assert_eq!(GuessResult::WIN.emoji(), "🟩🟩🟩🟩🟩");
    }
}
