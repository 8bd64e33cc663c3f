//! Wordle Terminal - CLI
//!
//! Terminal Wordle with color/emoji tiles, hard mode, daily or seeded
//! puzzles, and a play-again loop that keeps the session open.

use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use wordle_terminal::{
    commands::{GameConfig, play_one_game, read_line},
    stats::StatsStore,
    wordlists::loader::load_pools,
};

#[derive(Parser)]
#[command(
    name = "wordle_terminal",
    about = "Wordle in the terminal: 5 letters, 6 tries, hard mode and shareable grids",
    version,
    author
)]
struct Cli {
    /// Word of the day (deterministic by date)
    #[arg(long)]
    daily: bool,

    /// Random seed for a reproducible game
    #[arg(long)]
    seed: Option<u64>,

    /// Hard mode (guesses must honor revealed hints)
    #[arg(long)]
    hard: bool,

    /// Emoji-only tiles (no ANSI colors)
    #[arg(long)]
    emoji: bool,

    /// Disable ANSI colors
    #[arg(long)]
    no_color: bool,

    /// Path to a custom allowed-guess list (words.txt)
    #[arg(long)]
    words: Option<PathBuf>,

    /// Path to a custom solutions list (solutions.txt)
    #[arg(long)]
    solutions: Option<PathBuf>,
}

impl Cli {
    fn into_config(self) -> GameConfig {
        GameConfig {
            daily: self.daily,
            seed: self.seed,
            hard: self.hard,
            emoji: self.emoji,
            no_color: self.no_color,
            words: self.words,
            solutions: self.solutions,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.no_color || cli.emoji {
        colored::control::set_override(false);
    }

    let config = cli.into_config();
    let pools = load_pools(&config.list_paths()).context("failed to load word lists")?;
    let store = StatsStore::in_home_dir();

    // Keep the terminal alive: play again until the player says no
    loop {
        play_one_game(&pools, &config, &store)?;

        match read_line("\nPlay again? [y/N]")? {
            Some(answer) if matches!(answer.to_lowercase().as_str(), "y" | "yes") => {}
            Some(_) => {
                println!("Okay, gg. 👋");
                break;
            }
            None => {
                println!("\nBye!");
                break;
            }
        }
    }

    Ok(())
}
