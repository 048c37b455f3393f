//! Game lifecycle management
//!
//! Functions for creating games and for the two ways a game ends off the
//! board: running out of time and resigning.

use crate::game_state::GameState;
use crate::status::TerminalState;
use crate::types::Color;
use tracing::info;

/// Create a new game with the initial position and `initial_clock_seconds`
/// on each side
///
/// Use [`crate::validate_clock_minutes`] to turn a user's minutes into seconds.
pub fn new_game(initial_clock_seconds: u32) -> GameState {
    info!(
        "[ENGINE] New game, {}s per side",
        initial_clock_seconds
    );
    GameState::new(initial_clock_seconds)
}

/// Advance the clock of the side to move by one tick
///
/// Ticks after the game is over are ignored. When the side to move runs out
/// of time the game ends with [`TerminalState::Timeout`].
pub fn tick(state: &mut GameState) -> TerminalState {
    if state.is_game_over() {
        return state.status;
    }

    let mover = state.current_player;
    if state.clock.tick(mover) {
        state.status = TerminalState::Timeout {
            winner: mover.opposite(),
        };
        info!("[CLOCK] {} ran out of time", mover);
    }
    state.status
}

/// `color` resigns; the other side wins
///
/// No effect once the game is already over.
pub fn resign(state: &mut GameState, color: Color) -> TerminalState {
    if !state.is_game_over() {
        state.status = TerminalState::Resignation {
            winner: color.opposite(),
        };
        info!("[ENGINE] {} resigned", color);
    }
    state.status
}
