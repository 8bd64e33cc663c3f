//! Command implementations

pub mod play;

pub use play::{GameConfig, play_one_game, read_line};
