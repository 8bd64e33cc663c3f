//! Lightweight play statistics
//!
//! A small JSON record in the home directory: games played, wins, streaks
//! and the per-attempt win distribution. Persistence is best-effort — a
//! missing or corrupt file loads as defaults, and save failures are
//! swallowed so they can never spoil a finished game.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::fs;
use std::path::PathBuf;

/// Stats file name in the home directory
const STATS_FILE_NAME: &str = ".wordle_terminal_stats.json";

/// Accumulated play statistics
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Stats {
    pub played: u32,
    pub wins: u32,
    pub current_streak: u32,
    pub max_streak: u32,
    /// Wins keyed by attempt count, "1" through "6"
    pub dist: BTreeMap<String, u32>,
    pub fails: u32,
}

impl Default for Stats {
    fn default() -> Self {
        Self {
            played: 0,
            wins: 0,
            current_streak: 0,
            max_streak: 0,
            dist: (1..=6).map(|i| (i.to_string(), 0)).collect(),
            fails: 0,
        }
    }
}

impl Stats {
    /// Record a win in `attempts` guesses
    pub fn record_win(&mut self, attempts: usize) {
        self.played += 1;
        self.wins += 1;
        self.current_streak += 1;
        self.max_streak = self.max_streak.max(self.current_streak);
        *self.dist.entry(attempts.to_string()).or_insert(0) += 1;
    }

    /// Record a loss (all attempts used)
    pub fn record_loss(&mut self) {
        self.played += 1;
        self.fails += 1;
        self.current_streak = 0;
    }

    fn win_rate_percent(&self) -> u32 {
        if self.played == 0 {
            return 0;
        }
        ((f64::from(self.wins) / f64::from(self.played)) * 100.0).round() as u32
    }
}

impl fmt::Display for Stats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Games: {}  •  Wins: {}  •  Win%: {}  •  Streak: {} (max {})",
            self.played,
            self.wins,
            self.win_rate_percent(),
            self.current_streak,
            self.max_streak
        )?;
        writeln!(f, "Guess distribution:")?;
        for i in 1..=6 {
            let count = self.dist.get(&i.to_string()).copied().unwrap_or(0);
            writeln!(f, " {}: {}", i, "#".repeat(count as usize))?;
        }
        Ok(())
    }
}

/// Where stats live and how they get there
///
/// The store is non-authoritative: every read/write failure degrades to
/// defaults or a no-op.
#[derive(Debug, Clone)]
pub struct StatsStore {
    path: Option<PathBuf>,
}

impl StatsStore {
    /// Store backed by `~/.wordle_terminal_stats.json`
    ///
    /// With no resolvable home directory the store still works, it just
    /// never persists anything.
    #[must_use]
    pub fn in_home_dir() -> Self {
        #[allow(deprecated)] // env::home_dir is fine on the platforms we target
        let path = std::env::home_dir().map(|home| home.join(STATS_FILE_NAME));
        Self { path }
    }

    /// Store backed by an explicit file path
    #[must_use]
    pub const fn at_path(path: PathBuf) -> Self {
        Self { path: Some(path) }
    }

    /// Load stats, degrading to defaults on any failure
    #[must_use]
    pub fn load(&self) -> Stats {
        let Some(path) = &self.path else {
            return Stats::default();
        };
        fs::read_to_string(path)
            .ok()
            .and_then(|content| serde_json::from_str(&content).ok())
            .unwrap_or_default()
    }

    /// Persist stats, ignoring any failure
    pub fn save(&self, stats: &Stats) {
        let Some(path) = &self.path else { return };
        if let Ok(json) = serde_json::to_string_pretty(stats) {
            let _ = fs::write(path, json);
        }
    }
}
