//! Shareable result grid
//!
//! The copy-paste text: a title line plus one emoji row per guess. Always
//! emoji, regardless of the terminal's tile style.

use crate::game::GuessRecord;

/// Build the share text for a finished game
#[must_use]
pub fn share_text(title: &str, history: &[GuessRecord]) -> String {
    let mut lines = Vec::with_capacity(history.len() + 1);
    lines.push(title.to_string());
    lines.extend(history.iter().map(|record| record.result.emoji()));
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{GuessResult, Word};

    fn record(guess: &str, target: &str) -> GuessRecord {
        let guess = Word::new(guess).unwrap();
        let result = GuessResult::score(&guess, &Word::new(target).unwrap());
        GuessRecord::new(guess, result)
    }

    #[test]
    fn share_grid_one_line_per_guess() {
        let history = vec![record("crane", "slate"), record("slate", "slate")];
        let text = share_text("Wordle-T (6) 2/6", &history);

        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "Wordle-T (6) 2/6");
        assert_eq!(lines[1], "⬛⬛🟩⬛🟩");
        assert_eq!(lines[2], "🟩🟩🟩🟩🟩");
    }

    #[test]
    fn share_grid_empty_history_is_title_only() {
        let text = share_text("Wordle-T (6) X/6", &[]);
        assert_eq!(text, "Wordle-T (6) X/6");
    }
}
