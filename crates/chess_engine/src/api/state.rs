//! Game state queries

use crate::game_state::GameState;
use crate::move_gen::is_king_in_check;
use crate::status::TerminalState;
use crate::types::Color;

/// Whether the king of `color` is currently attacked
pub fn is_in_check(state: &GameState, color: Color) -> bool {
    is_king_in_check(state, color)
}

/// Outcome as of the last applied move or clock tick
pub fn status(state: &GameState) -> TerminalState {
    state.status
}
