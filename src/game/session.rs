//! Game session state machine
//!
//! A session owns one hidden target and an append-only guess history, and
//! drives the Active → Won | Lost | Aborted lifecycle. Rendering and stats
//! live elsewhere; the session only transitions state.

use super::hard_mode::{HardModeConstraints, HardModeViolation};
use crate::core::{GuessResult, Word, WordError};
use crate::wordlists::WordPools;
use std::fmt;

/// Maximum accepted guesses per session
pub const MAX_GUESSES: usize = 6;

/// One accepted guess and its feedback
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuessRecord {
    pub word: Word,
    pub result: GuessResult,
}

impl GuessRecord {
    #[must_use]
    pub const fn new(word: Word, result: GuessResult) -> Self {
        Self { word, result }
    }
}

/// Session lifecycle state
///
/// `Won`, `Lost` and `Aborted` are terminal: no further guesses accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Active,
    /// Solved; `attempts` is the 1-based count of accepted guesses (1..=6)
    Won { attempts: usize },
    Lost,
    Aborted,
}

/// A rejected guess
///
/// All variants are recoverable: the session stays Active and the attempt
/// is not consumed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuessError {
    /// Not exactly 5 alphabetic characters
    InvalidFormat(WordError),
    /// Well-formed but not in the allowed-guess pool
    NotAllowed,
    /// Hard mode is on and the guess ignores revealed information
    HardMode(HardModeViolation),
    /// Session already reached a terminal state
    SessionOver,
}

impl fmt::Display for GuessError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidFormat(_) => write!(f, "Please enter a valid 5-letter word."),
            Self::NotAllowed => {
                write!(f, "Word not in list (add it to words.txt to allow).")
            }
            Self::HardMode(violation) => write!(f, "{violation}"),
            Self::SessionOver => write!(f, "The game is already over."),
        }
    }
}

impl std::error::Error for GuessError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::InvalidFormat(err) => Some(err),
            Self::HardMode(violation) => Some(violation),
            _ => None,
        }
    }
}

/// One game: a target, a history, and the state machine around them
///
/// The word pools are shared immutably; everything else is owned.
#[derive(Debug)]
pub struct Session<'a> {
    target: Word,
    pools: &'a WordPools,
    hard_mode: bool,
    history: Vec<GuessRecord>,
    state: SessionState,
}

impl<'a> Session<'a> {
    /// Start a new session for `target`
    #[must_use]
    pub const fn new(target: Word, pools: &'a WordPools, hard_mode: bool) -> Self {
        Self {
            target,
            pools,
            hard_mode,
            history: Vec::new(),
            state: SessionState::Active,
        }
    }

    /// Submit one raw guess line
    ///
    /// Checks run in order: well-formed word, allowed-pool membership,
    /// hard-mode constraints (when enabled). Any rejection leaves the
    /// session untouched. An accepted guess is scored, appended to history,
    /// and may transition the session to Won or Lost.
    ///
    /// # Errors
    /// Returns a `GuessError` describing why the guess was rejected.
    ///
    /// # Panics
    /// Will not panic - the `expect()` reads the record just pushed.
    pub fn submit(&mut self, raw: &str) -> Result<&GuessRecord, GuessError> {
        if self.state != SessionState::Active {
            return Err(GuessError::SessionOver);
        }

        let word = Word::new(raw).map_err(GuessError::InvalidFormat)?;

        if !self.pools.is_allowed(&word) {
            return Err(GuessError::NotAllowed);
        }

        if self.hard_mode {
            HardModeConstraints::derive(&self.history)
                .validate(&word)
                .map_err(GuessError::HardMode)?;
        }

        let result = GuessResult::score(&word, &self.target);
        let won = word == self.target;
        self.history.push(GuessRecord::new(word, result));

        if won {
            self.state = SessionState::Won {
                attempts: self.history.len(),
            };
        } else if self.history.len() == MAX_GUESSES {
            self.state = SessionState::Lost;
        }

        Ok(self.history.last().expect("record just pushed"))
    }

    /// Abort an active session (user interrupt or end of input)
    ///
    /// Happens only at the input-wait boundary, so history is never left
    /// half-mutated. Aborting a finished session changes nothing.
    pub fn abort(&mut self) {
        if self.state == SessionState::Active {
            self.state = SessionState::Aborted;
        }
    }

    #[inline]
    #[must_use]
    pub const fn state(&self) -> SessionState {
        self.state
    }

    #[inline]
    #[must_use]
    pub fn history(&self) -> &[GuessRecord] {
        &self.history
    }

    #[inline]
    #[must_use]
    pub const fn target(&self) -> &Word {
        &self.target
    }

    /// Accepted guesses so far
    #[inline]
    #[must_use]
    pub fn attempts_used(&self) -> usize {
        self.history.len()
    }

    #[inline]
    #[must_use]
    pub const fn is_over(&self) -> bool {
        !matches!(self.state, SessionState::Active)
    }
}
