//! Wordle Terminal
//!
//! A cozy Wordle clone for the shell: 5 letters, 6 tries, color or emoji
//! tiles, hard mode, daily/seeded/random puzzles, a keyboard heatmap,
//! shareable result grids and tiny local stats.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_terminal::core::{GuessResult, Word};
//!
//! let guess = Word::new("crane").unwrap();
//! let target = Word::new("slate").unwrap();
//!
//! let result = GuessResult::score(&guess, &target);
//! assert!(!result.is_win());
//! ```

// Core domain types
pub mod core;

// Game rules and session state
pub mod game;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Play statistics
pub mod stats;
