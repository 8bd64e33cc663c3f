//! Target selection
//!
//! Picks the hidden answer for a session: deterministic by calendar date
//! (daily puzzle), deterministic by seed (reproducible games), or uniformly
//! random.

use crate::core::Word;
use chrono::{NaiveDate, Utc};
use std::fmt;

/// How the session's target is chosen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TargetMode {
    /// Same word for everyone on a given UTC date
    Daily,
    /// Same word for a given seed and pool, on every platform
    Seeded(u64),
    /// Uniform random choice
    Random,
}

/// Target selection failure
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TargetError {
    EmptyPool,
}

impl fmt::Display for TargetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyPool => write!(f, "No solution words available"),
        }
    }
}

impl std::error::Error for TargetError {}

/// Anchor date for the daily index; every installation shares it so the
/// same date always maps to the same pool slot.
const DAILY_EPOCH: (i32, u32, u32) = (2021, 6, 19);

/// Select a target from the solution pool
///
/// Pool order matters for the deterministic modes, so the loader keeps it
/// stable (insertion order, duplicates removed).
///
/// # Errors
/// Returns `TargetError::EmptyPool` if the pool has no words.
///
/// # Panics
/// Will not panic - the epoch constant is a valid calendar date.
pub fn select_target(pool: &[Word], mode: TargetMode) -> Result<Word, TargetError> {
    if pool.is_empty() {
        return Err(TargetError::EmptyPool);
    }

    let index = match mode {
        TargetMode::Daily => {
            let (year, month, day) = DAILY_EPOCH;
            let epoch = NaiveDate::from_ymd_opt(year, month, day).expect("valid epoch date");
            daily_index(Utc::now().date_naive(), epoch, pool.len())
        }
        TargetMode::Seeded(seed) => (splitmix64(seed) % pool.len() as u64) as usize,
        TargetMode::Random => {
            use rand::prelude::IndexedRandom;
            // Non-deterministic by design; the other arms stay pinned
            return pool
                .choose(&mut rand::rng())
                .cloned()
                .ok_or(TargetError::EmptyPool);
        }
    };

    Ok(pool[index].clone())
}

/// Whole days since the epoch, wrapped into the pool
///
/// Euclidean remainder keeps the index valid even for clocks set before
/// the epoch.
fn daily_index(today: NaiveDate, epoch: NaiveDate, pool_len: usize) -> usize {
    let days = (today - epoch).num_days();
    days.rem_euclid(pool_len as i64) as usize
}

/// `SplitMix64` step (Steele, Lea & Flood): the pinned generator for seeded
/// games. One output is enough to pick an index, and the constants are
/// fixed here so every build of the game agrees on seed → word.
const fn splitmix64(seed: u64) -> u64 {
    let mut z = seed.wrapping_add(0x9e37_79b9_7f4a_7c15);
    z = (z ^ (z >> 30)).wrapping_mul(0xbf58_476d_1ce4_e5b9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94d0_49bb_1331_11eb);
    z ^ (z >> 31)
}
