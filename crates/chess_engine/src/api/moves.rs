//! Move queries and move execution
//!
//! [`apply_move`] is the only way the position changes. It validates the
//! request against the legal move list, then runs every side effect of the
//! move as one step so the state is never observed half-updated.

use crate::error::{ChessEngineError, ChessEngineResult};
use crate::game_state::GameState;
use crate::history::MoveRecord;
use crate::move_gen::{generate_legal_moves, is_king_in_check};
use crate::status::{evaluate, TerminalState};
use crate::types::*;
use tracing::{debug, info};

/// Legal moves of the piece on `from`
///
/// Empty for an empty square. Calling this never mutates `state`, so repeated
/// calls return the same list.
pub fn legal_moves(state: &GameState, from: Square) -> Vec<Move> {
    generate_legal_moves(state, from)
}

/// Squares of the side to move holding at least one legal move
pub fn pieces_with_moves(state: &GameState) -> Vec<Square> {
    state
        .board
        .pieces_of(state.current_player)
        .filter(|(from, _)| !generate_legal_moves(state, *from).is_empty())
        .map(|(from, _)| from)
        .collect()
}

/// Play the move `from` -> `to` for the side to move
///
/// Special moves (castling, en passant, double push) are resolved by looking up
/// the matching legal move, so callers only ever pass two squares.
///
/// # Errors
///
/// - [`ChessEngineError::GameOver`] once the game has ended
/// - [`ChessEngineError::EmptySquareSelection`] if `from` holds no piece of the
///   side to move
/// - [`ChessEngineError::IllegalMove`] if `to` is not a legal destination
///
/// # Examples
///
/// ```
/// use chess_engine::{apply_move, new_game, TerminalState};
///
/// let mut state = new_game(300);
/// let e2 = "e2".parse().unwrap();
/// let e4 = "e4".parse().unwrap();
/// assert_eq!(apply_move(&mut state, e2, e4).unwrap(), TerminalState::Ongoing);
/// ```
pub fn apply_move(
    state: &mut GameState,
    from: Square,
    to: Square,
) -> ChessEngineResult<TerminalState> {
    if state.is_game_over() {
        return Err(ChessEngineError::GameOver);
    }

    let color = state.current_player;
    if state.board.color_at(from) != Some(color) {
        return Err(ChessEngineError::EmptySquareSelection {
            square: from,
            color,
        });
    }

    let Some(mv) = generate_legal_moves(state, from)
        .into_iter()
        .find(|mv| mv.to == to)
    else {
        debug!("[ENGINE] Rejected {} for {}", Move::normal(from, to), color);
        return Err(ChessEngineError::IllegalMove { from, to });
    };

    execute(state, mv);
    Ok(state.status)
}

/// Run every side effect of a legal move
fn execute(state: &mut GameState, mv: Move) {
    let color = state.current_player;
    let enemy = color.opposite();
    let Some(piece) = state.board.get(mv.from) else {
        return;
    };

    let change = state.board.play(&mv);

    state.en_passant_target = match mv.kind {
        MoveKind::DoublePush => {
            let skipped_row = (mv.from.row + mv.to.row) / 2;
            Some(Square::new(skipped_row, mv.from.col))
        }
        _ => None,
    };

    match piece.kind {
        PieceKind::King => {
            state.set_king_position(color, mv.to);
            state.castling_mut(color).revoke_all();
        }
        PieceKind::Rook if mv.from.row == color.home_row() => {
            state.castling_mut(color).revoke_for_rook_col(mv.from.col);
        }
        _ => {}
    }

    if let Some(captured) = change.captured {
        if captured.kind == PieceKind::Rook && mv.to.row == enemy.home_row() {
            state.castling_mut(enemy).revoke_for_rook_col(mv.to.col);
        }
    }

    if piece.kind == PieceKind::Pawn || change.captured.is_some() {
        state.half_move_clock = 0;
    } else {
        state.half_move_clock += 1;
    }

    if color == Color::Black {
        state.full_move_number += 1;
    }

    state.current_player = enemy;

    let gives_check = is_king_in_check(state, enemy);
    state.history.add_move(MoveRecord {
        piece,
        from: mv.from,
        to: mv.to,
        captured: change.captured,
        is_castling: mv.is_castle(),
        is_en_passant: mv.is_en_passant(),
        promoted: change.promoted,
        gives_check,
    });

    state.status = evaluate(state, enemy);

    info!(
        "[ENGINE] {} played {} (half-move clock {}, move {})",
        color, mv, state.half_move_clock, state.full_move_number
    );
    if state.status.is_game_over() {
        info!("[ENGINE] Game over: {}", state.status.message());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::new_game;

    fn sq(name: &str) -> Square {
        name.parse().expect("valid square name")
    }

    fn play(state: &mut GameState, from: &str, to: &str) -> TerminalState {
        apply_move(state, sq(from), sq(to)).expect("legal move")
    }

    #[test]
    fn test_double_push_sets_en_passant_target() {
        let mut state = new_game(300);
        play(&mut state, "e2", "e4");

        assert_eq!(state.en_passant_target, Some(Square::new(5, 4)));
        assert_eq!(state.current_player, Color::Black);
        assert_eq!(state.full_move_number, 1);

        play(&mut state, "a7", "a6");
        assert_eq!(state.en_passant_target, None);
        assert_eq!(state.full_move_number, 2);
    }

    #[test]
    fn test_en_passant_capture_removes_passed_pawn() {
        let mut state = new_game(300);
        play(&mut state, "e2", "e4");
        play(&mut state, "a7", "a6");
        play(&mut state, "e4", "e5");
        play(&mut state, "d7", "d5");
        play(&mut state, "e5", "d6");

        assert!(state.board.is_empty(sq("d5")));
        let last = state.history.last_move().expect("recorded");
        assert!(last.is_en_passant);
        assert_eq!(
            last.captured.map(|p| p.kind),
            Some(PieceKind::Pawn)
        );
        assert_eq!(state.half_move_clock, 0);
    }

    #[test]
    fn test_rejects_wrong_side_and_illegal_destination() {
        let mut state = new_game(300);

        assert_eq!(
            apply_move(&mut state, sq("e7"), sq("e5")),
            Err(ChessEngineError::EmptySquareSelection {
                square: sq("e7"),
                color: Color::White
            })
        );
        assert_eq!(
            apply_move(&mut state, sq("e2"), sq("e5")),
            Err(ChessEngineError::IllegalMove {
                from: sq("e2"),
                to: sq("e5")
            })
        );
        assert_eq!(state, new_game(300), "rejected moves leave no trace");
    }

    #[test]
    fn test_half_move_clock_counts_quiet_moves() {
        let mut state = new_game(300);
        play(&mut state, "g1", "f3");
        play(&mut state, "g8", "f6");
        assert_eq!(state.half_move_clock, 2);

        play(&mut state, "e2", "e4");
        assert_eq!(state.half_move_clock, 0);
    }

    #[test]
    fn test_king_move_revokes_both_rights() {
        let mut state = new_game(300);
        play(&mut state, "e2", "e4");
        play(&mut state, "e7", "e5");
        play(&mut state, "e1", "e2");

        assert_eq!(state.white_castling, CastlingRights::NONE);
        assert_eq!(state.king_position(Color::White), sq("e2"));
        assert_eq!(state.black_castling, CastlingRights::ALL);
    }

    #[test]
    fn test_rook_move_revokes_one_right() {
        let mut state = new_game(300);
        play(&mut state, "h2", "h4");
        play(&mut state, "a7", "a5");
        play(&mut state, "h1", "h3");

        assert!(!state.white_castling.king_side);
        assert!(state.white_castling.queen_side);
    }

    #[test]
    fn test_pieces_with_moves_at_start() {
        let state = new_game(300);
        let movable = pieces_with_moves(&state);

        // eight pawns and two knights
        assert_eq!(movable.len(), 10);
        assert!(movable.contains(&sq("b1")));
        assert!(!movable.contains(&sq("a1")));
    }
}
