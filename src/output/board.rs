//! Board rendering
//!
//! One row per guess, padded with placeholder rows up to the attempt limit
//! so the board always shows the full six slots.

use super::TileStyle;
use crate::core::LetterStatus;
use crate::game::{GuessRecord, MAX_GUESSES};
use colored::Colorize;

/// Render the board rows for the current history
#[must_use]
pub fn board_lines(history: &[GuessRecord], style: TileStyle) -> Vec<String> {
    let mut lines: Vec<String> = history
        .iter()
        .map(|record| {
            record
                .word
                .chars()
                .iter()
                .zip(record.result.statuses())
                .map(|(&ch, &status)| tile(ch, status, style))
                .collect::<Vec<_>>()
                .join(" ")
        })
        .collect();

    for _ in history.len()..MAX_GUESSES {
        lines.push(placeholder_row());
    }

    lines
}

/// Print the board
pub fn print_board(history: &[GuessRecord], style: TileStyle) {
    for line in board_lines(history, style) {
        println!("{line}");
    }
}

fn tile(ch: u8, status: LetterStatus, style: TileStyle) -> String {
    if style == TileStyle::Emoji {
        return status.emoji().to_string();
    }

    let label = format!(" {} ", ch.to_ascii_uppercase() as char);
    match status {
        LetterStatus::Correct => label.white().bold().on_green().to_string(),
        LetterStatus::Present => label.white().bold().on_yellow().to_string(),
        LetterStatus::Absent => label.white().bold().on_bright_black().to_string(),
    }
}

fn placeholder_row() -> String {
    ["[ _ ]"; 5].join("   ")
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
    fn empty_history_renders_six_placeholder_rows() {
        let lines = board_lines(&[], TileStyle::Emoji);
        assert_eq!(lines.len(), MAX_GUESSES);
        assert!(lines.iter().all(|l| l == "[ _ ]   [ _ ]   [ _ ]   [ _ ]   [ _ ]"));
    }

    #[test]
    fn emoji_rows_match_feedback() {
        let history = vec![record("crane", "slate")];
        let lines = board_lines(&history, TileStyle::Emoji);

        assert_eq!(lines[0], "⬛ ⬛ 🟩 ⬛ 🟩");
        assert_eq!(lines.len(), MAX_GUESSES);
        assert!(lines[1].contains("[ _ ]"));
    }

    #[test]
    fn ansi_rows_contain_uppercase_letters() {
        let history = vec![record("crane", "slate")];
        let lines = board_lines(&history, TileStyle::Ansi);

        for letter in ["C", "R", "A", "N", "E"] {
            assert!(lines[0].contains(letter), "missing {letter}");
        }
    }

    #[test]
    fn full_board_has_no_placeholders() {
        let history: Vec<GuessRecord> =
            (0..6).map(|_| record("crane", "slate")).collect();
        let lines = board_lines(&history, TileStyle::Emoji);
        assert_eq!(lines.len(), MAX_GUESSES);
        assert!(lines.iter().all(|l| !l.contains('_')));
    }
}
