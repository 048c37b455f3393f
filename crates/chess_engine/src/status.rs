//! Terminal state tracking and end-of-game evaluation
//!
//! After every applied move the side to move is evaluated:
//!
//! ## Checkmate / Stalemate
//! - No piece of the side to move has a legal move and its king is attacked:
//!   **checkmate**, the other color wins
//! - No legal move and the king is not attacked: **stalemate**
//!
//! ## Draws
//! - **Fifty-move**: the half-move clock reached
//!   [`RuleOptions::fifty_move_threshold`](crate::game_state::RuleOptions)
//! - **Repetition**: not detected. [`is_draw_by_repetition`] always answers
//!   `false`; positions are not hashed or remembered.
//!
//! Having no legal moves takes precedence over the half-move clock.
//!
//! ## Outside the board
//! - **Timeout**: set by the clock tick when the side to move runs out of time
//! - **Resignation**: set on request of either player

use crate::game_state::GameState;
use crate::move_gen::{has_any_legal_move, is_king_in_check};
use crate::types::Color;
use serde::{Deserialize, Serialize};

/// Reason for a drawn game other than stalemate
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DrawReason {
    /// Half-move clock reached the configured threshold
    FiftyMove,
    /// Position repeated; never produced, see [`is_draw_by_repetition`]
    Repetition,
}

/// Game outcome as seen after the last applied move or clock tick
///
/// Starts as `Ongoing`. Every other variant is terminal: once set, the game
/// rejects further moves and the clock stops.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TerminalState {
    /// Game is still in progress
    #[default]
    Ongoing,

    /// Side to move is in check with no legal move
    Checkmate { winner: Color },

    /// Side to move is not in check but has no legal move
    Stalemate,

    /// Drawn by rule
    Draw(DrawReason),

    /// Loser's clock reached zero
    Timeout { winner: Color },

    /// Loser resigned
    Resignation { winner: Color },
}

impl TerminalState {
    /// Returns `true` for any state other than `Ongoing`
    pub fn is_game_over(&self) -> bool {
        !matches!(self, TerminalState::Ongoing)
    }

    /// The winning color, if the game ended decisively
    pub fn winner(&self) -> Option<Color> {
        match self {
            TerminalState::Checkmate { winner }
            | TerminalState::Timeout { winner }
            | TerminalState::Resignation { winner } => Some(*winner),
            _ => None,
        }
    }

    /// Returns `true` for stalemate and rule draws
    pub fn is_draw(&self) -> bool {
        matches!(self, TerminalState::Stalemate | TerminalState::Draw(_))
    }

    pub fn is_checkmate(&self) -> bool {
        matches!(self, TerminalState::Checkmate { .. })
    }

    pub fn is_timeout(&self) -> bool {
        matches!(self, TerminalState::Timeout { .. })
    }

    /// Human-readable description of the state
    pub fn message(&self) -> &'static str {
        match self {
            TerminalState::Ongoing => "Game in progress",
            TerminalState::Checkmate {
                winner: Color::White,
            } => "White wins by checkmate!",
            TerminalState::Checkmate {
                winner: Color::Black,
            } => "Black wins by checkmate!",
            TerminalState::Stalemate => "Draw by stalemate",
            TerminalState::Draw(DrawReason::FiftyMove) => "Draw by the fifty-move rule",
            TerminalState::Draw(DrawReason::Repetition) => "Draw by repetition",
            TerminalState::Timeout {
                winner: Color::White,
            } => "White wins on time!",
            TerminalState::Timeout {
                winner: Color::Black,
            } => "Black wins on time!",
            TerminalState::Resignation {
                winner: Color::White,
            } => "White wins by resignation",
            TerminalState::Resignation {
                winner: Color::Black,
            } => "Black wins by resignation",
        }
    }
}

/// Evaluate the position for `to_move`
///
/// Scans every piece of `to_move` for a legal move. Without one the result is
/// checkmate or stalemate depending on check. Otherwise the half-move clock and
/// the repetition stub may still end the game in a draw.
pub fn evaluate(state: &GameState, to_move: Color) -> TerminalState {
    if !has_any_legal_move(state, to_move) {
        return if is_king_in_check(state, to_move) {
            TerminalState::Checkmate {
                winner: to_move.opposite(),
            }
        } else {
            TerminalState::Stalemate
        };
    }

    if is_draw_by_repetition(state) {
        return TerminalState::Draw(DrawReason::Repetition);
    }

    if state.half_move_clock >= state.rules.fifty_move_threshold {
        return TerminalState::Draw(DrawReason::FiftyMove);
    }

    TerminalState::Ongoing
}

/// Repetition detection is not implemented: always `false`
///
/// Kept as an explicit hook so callers can see the rule is unsupported rather
/// than silently wrong.
pub fn is_draw_by_repetition(_state: &GameState) -> bool {
    false
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_terminal_state_default() {
        //! Verifies TerminalState defaults to Ongoing
        let state = TerminalState::default();
        assert_eq!(state, TerminalState::Ongoing);
        assert!(!state.is_game_over());
        assert_eq!(state.message(), "Game in progress");
    }

    #[test]
    fn test_all_end_states_are_game_over() {
        let states = [
            TerminalState::Checkmate {
                winner: Color::White,
            },
            TerminalState::Stalemate,
            TerminalState::Draw(DrawReason::FiftyMove),
            TerminalState::Timeout {
                winner: Color::Black,
            },
            TerminalState::Resignation {
                winner: Color::White,
            },
        ];

        for state in states {
            assert!(state.is_game_over(), "{:?} should be game over", state);
        }
    }

    #[test]
    fn test_winner() {
        assert_eq!(
            TerminalState::Checkmate {
                winner: Color::Black
            }
            .winner(),
            Some(Color::Black)
        );
        assert_eq!(
            TerminalState::Timeout {
                winner: Color::White
            }
            .winner(),
            Some(Color::White)
        );
        assert_eq!(TerminalState::Stalemate.winner(), None);
        assert_eq!(TerminalState::Draw(DrawReason::FiftyMove).winner(), None);
        assert_eq!(TerminalState::Ongoing.winner(), None);
    }

    #[test]
    fn test_is_draw() {
        assert!(TerminalState::Stalemate.is_draw());
        assert!(TerminalState::Draw(DrawReason::FiftyMove).is_draw());
        assert!(!TerminalState::Checkmate {
            winner: Color::White
        }
        .is_draw());
        assert!(!TerminalState::Timeout {
            winner: Color::White
        }
        .is_draw());
    }

    #[test]
    fn test_messages() {
        assert_eq!(
            TerminalState::Checkmate {
                winner: Color::White
            }
            .message(),
            "White wins by checkmate!"
        );
        assert_eq!(
            TerminalState::Timeout {
                winner: Color::Black
            }
            .message(),
            "Black wins on time!"
        );
        assert_eq!(TerminalState::Stalemate.message(), "Draw by stalemate");
    }

    #[test]
    fn test_initial_position_is_ongoing() {
        let state = GameState::new(600);
        assert_eq!(evaluate(&state, Color::White), TerminalState::Ongoing);
        assert_eq!(evaluate(&state, Color::Black), TerminalState::Ongoing);
    }

    #[test]
    fn test_repetition_stub_never_triggers() {
        assert!(!is_draw_by_repetition(&GameState::new(60)));
    }
}
