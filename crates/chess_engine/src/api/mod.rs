//! Public API for the chess engine
//!
//! The functions collaborators (UI, CLI, network session) call. All of them
//! operate on a caller-owned [`GameState`](crate::game_state::GameState).
//!
//! ## Module Organization
//!
//! - `game` - Game lifecycle (new_game, tick, resign)
//! - `moves` - Move queries and execution (legal_moves, apply_move)
//! - `state` - State queries (is_in_check, status)

mod game;
mod moves;
mod state;

pub use crate::clock::validate_clock_minutes;
pub use game::{new_game, resign, tick};
pub use moves::{apply_move, legal_moves, pieces_with_moves};
pub use state::{is_in_check, status};
