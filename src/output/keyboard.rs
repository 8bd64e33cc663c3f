//! QWERTY keyboard heatmap
//!
//! Each key shows the best status seen for that letter so far, using the
//! `LetterStatus` ordering (Absent < Present < Correct).

use super::TileStyle;
use crate::core::LetterStatus;
use crate::game::GuessRecord;
use colored::Colorize;
use rustc_hash::FxHashMap;

const QWERTY_ROWS: [&str; 3] = ["QWERTYUIOP", "ASDFGHJKL", "ZXCVBNM"];

/// Best known status per letter (keyed by lowercase byte)
#[must_use]
pub fn best_statuses(history: &[GuessRecord]) -> FxHashMap<u8, LetterStatus> {
    let mut best: FxHashMap<u8, LetterStatus> = FxHashMap::default();

    for record in history {
        for (&ch, &status) in record.word.chars().iter().zip(record.result.statuses()) {
            best.entry(ch)
                .and_modify(|current| *current = (*current).max(status))
                .or_insert(status);
        }
    }

    best
}

/// Render the three keyboard rows
#[must_use]
pub fn keyboard_lines(history: &[GuessRecord], style: TileStyle) -> Vec<String> {
    let best = best_statuses(history);

    QWERTY_ROWS
        .iter()
        .map(|row| {
            row.chars()
                .map(|key| styled_key(key, best.get(&(key.to_ascii_lowercase() as u8)), style))
                .collect::<Vec<_>>()
                .join(" ")
        })
        .collect()
}

/// Print the keyboard heatmap plus a spacer line
pub fn print_keyboard(history: &[GuessRecord], style: TileStyle) {
    for line in keyboard_lines(history, style) {
        println!("{line}");
    }
    println!();
}

fn styled_key(key: char, status: Option<&LetterStatus>, style: TileStyle) -> String {
    let Some(&status) = status else {
        return key.to_string();
    };

    if style == TileStyle::Emoji {
        return format!("{}{key}", status.emoji());
    }

    match status {
        LetterStatus::Correct => key.to_string().white().on_green().to_string(),
        LetterStatus::Present => key.to_string().white().on_yellow().to_string(),
        LetterStatus::Absent => key.to_string().white().on_bright_black().to_string(),
    }
}
