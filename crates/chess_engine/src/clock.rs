//! Per-side countdown clock
//!
//! Each side starts with the same number of seconds. The active side loses
//! one second per external tick; there is no increment or delay.
//!
//! # Time Management
//!
//! - The engine never schedules ticks itself. A collaborator calls
//!   [`crate::api::tick`] once per second
//! - Ticks after the game is over are ignored
//! - A side reaching zero loses on time

use crate::constants::{MAX_CLOCK_MINUTES, MIN_CLOCK_MINUTES, SECONDS_PER_TICK};
use crate::error::{ChessEngineError, ChessEngineResult};
use crate::types::Color;
use serde::{Deserialize, Serialize};

/// Remaining time of both sides, in whole seconds
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Clock {
    /// White player's remaining time in seconds
    pub white_remaining: u32,
    /// Black player's remaining time in seconds
    pub black_remaining: u32,
}

impl Clock {
    /// Both sides start with `seconds`
    pub const fn new(seconds: u32) -> Self {
        Self {
            white_remaining: seconds,
            black_remaining: seconds,
        }
    }

    pub fn remaining(&self, color: Color) -> u32 {
        match color {
            Color::White => self.white_remaining,
            Color::Black => self.black_remaining,
        }
    }

    /// Take one tick from `color`; returns `true` once that side is out of time
    pub fn tick(&mut self, color: Color) -> bool {
        let remaining = match color {
            Color::White => &mut self.white_remaining,
            Color::Black => &mut self.black_remaining,
        };
        *remaining = remaining.saturating_sub(SECONDS_PER_TICK);
        *remaining == 0
    }
}

/// Validate a per-side time request in minutes and convert it to seconds
///
/// # Errors
///
/// [`ChessEngineError::InvalidClockInput`] when `minutes` is outside
/// `MIN_CLOCK_MINUTES..=MAX_CLOCK_MINUTES`.
pub fn validate_clock_minutes(minutes: i64) -> ChessEngineResult<u32> {
    if !(MIN_CLOCK_MINUTES..=MAX_CLOCK_MINUTES).contains(&minutes) {
        return Err(ChessEngineError::InvalidClockInput {
            minutes,
            min: MIN_CLOCK_MINUTES,
            max: MAX_CLOCK_MINUTES,
        });
    }
    Ok(minutes as u32 * 60)
}
