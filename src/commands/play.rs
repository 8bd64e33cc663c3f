//! Interactive game loop
//!
//! One session per call: draw the board, read guesses, report rejections,
//! and close out with stats and a share grid. The play-again loop lives in
//! `main`.

use crate::game::{MAX_GUESSES, Session, SessionState, TargetMode, select_target};
use crate::output::{TileStyle, print_board, print_keyboard, share_text};
use crate::stats::StatsStore;
use crate::wordlists::WordPools;
use anyhow::{Context, Result};
use chrono::Utc;
use colored::Colorize;
use std::io::{self, IsTerminal, Write};
use std::path::PathBuf;

/// Resolved game options
///
/// One explicit structure instead of loose flags, so every recognized
/// option is enumerated in one place.
#[derive(Debug, Clone, Default)]
pub struct GameConfig {
    pub daily: bool,
    pub seed: Option<u64>,
    pub hard: bool,
    pub emoji: bool,
    pub no_color: bool,
    pub words: Option<PathBuf>,
    pub solutions: Option<PathBuf>,
}

impl GameConfig {
    /// Target selection mode implied by the flags (daily wins over seed)
    #[must_use]
    pub const fn target_mode(&self) -> TargetMode {
        if self.daily {
            TargetMode::Daily
        } else if let Some(seed) = self.seed {
            TargetMode::Seeded(seed)
        } else {
            TargetMode::Random
        }
    }

    /// Word list files to try, explicit paths first, then the conventional
    /// `words.txt` / `solutions.txt` in the working directory
    #[must_use]
    pub fn list_paths(&self) -> Vec<PathBuf> {
        let mut paths = Vec::new();
        if let Some(words) = &self.words {
            paths.push(words.clone());
        }
        if let Some(solutions) = &self.solutions {
            paths.push(solutions.clone());
        }
        for name in ["words.txt", "solutions.txt"] {
            let path = PathBuf::from(name);
            if path.exists() && !paths.contains(&path) {
                paths.push(path);
            }
        }
        paths
    }

    /// Session title, also the first line of the share grid
    #[must_use]
    pub fn title(&self) -> String {
        if self.daily {
            return format!("Wordle-T Daily {}", Utc::now().date_naive());
        }
        let mut title = String::from("Wordle-T (6)");
        if let Some(seed) = self.seed {
            title.push_str(&format!(" [seed {seed}]"));
        }
        title
    }

    /// Emoji tiles when asked for, when color is off, or when piped
    #[must_use]
    pub fn tile_style(&self) -> TileStyle {
        if self.emoji || self.no_color || !io::stdout().is_terminal() {
            TileStyle::Emoji
        } else {
            TileStyle::Ansi
        }
    }
}

/// Play one full session
///
/// Stats persistence is best-effort and never interferes with the game
/// result; an aborted session records nothing.
///
/// # Errors
/// Returns an error if the solution pool is empty or stdin fails mid-game.
pub fn play_one_game(pools: &WordPools, config: &GameConfig, store: &StatsStore) -> Result<()> {
    let style = config.tile_style();
    let target = select_target(pools.solutions(), config.target_mode())
        .context("cannot pick a target word")?;
    let title = config.title();

    println!("{}", title.bold());
    if config.hard {
        println!("Hard mode ON");
    }
    println!("Type a 5-letter word. Enter to submit. Ctrl+C to quit.\n");

    let mut session = Session::new(target, pools, config.hard);

    while !session.is_over() {
        print_board(session.history(), style);
        print_keyboard(session.history(), style);

        let prompt = format!("Guess {}/{MAX_GUESSES}", session.attempts_used() + 1);
        let Some(line) = read_line(&prompt)? else {
            // End of input at the prompt boundary
            session.abort();
            println!("\nBye!");
            break;
        };

        if let Err(rejection) = session.submit(&line) {
            println!("{rejection}\n");
        }
    }

    match session.state() {
        SessionState::Won { attempts } => {
            print_board(session.history(), style);
            print_keyboard(session.history(), style);
            println!(
                "{}",
                format!("✅ You win in {attempts}/{MAX_GUESSES}!")
                    .green()
                    .bold()
            );

            let mut stats = store.load();
            stats.record_win(attempts);
            store.save(&stats);
            print!("{stats}");

            println!("\nShare:");
            println!(
                "{}",
                share_text(&format!("{title} {attempts}/{MAX_GUESSES}"), session.history())
            );
        }
        SessionState::Lost => {
            print_board(session.history(), style);
            print_keyboard(session.history(), style);
            println!(
                "{}",
                format!(
                    "❌ You lose. The word was: {}",
                    session.target().text().to_uppercase()
                )
                .red()
                .bold()
            );

            let mut stats = store.load();
            stats.record_loss();
            store.save(&stats);
            print!("{stats}");

            println!("\nShare:");
            println!(
                "{}",
                share_text(&format!("{title} X/{MAX_GUESSES}"), session.history())
            );
        }
        SessionState::Active | SessionState::Aborted => {}
    }

    Ok(())
}

/// Prompt and read one line; `None` means end of input
///
/// # Errors
/// Returns an error if stdout or stdin fails.
pub fn read_line(prompt: &str) -> Result<Option<String>> {
    print!("{prompt}: ");
    io::stdout().flush().context("cannot flush stdout")?;

    let mut input = String::new();
    let bytes = io::stdin()
        .read_line(&mut input)
        .context("cannot read stdin")?;

    if bytes == 0 {
        return Ok(None);
    }
    Ok(Some(input.trim().to_string()))
}
