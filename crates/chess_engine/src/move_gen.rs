//! Move generation
//!
//! Generation happens in two stages:
//!
//! 1. **Pseudo-legal**: each piece kind produces the moves its movement rules
//!    allow on the current board, ignoring whether the own king ends up
//!    attacked (see the per-piece submodules)
//! 2. **Legal**: every pseudo-legal move is tried on a copy of the board; moves
//!    that leave the mover's king attacked are discarded
//!
//! The live [`GameState`] is never touched by either stage.

mod attack;
mod king;
mod knight;
mod pawn;
mod sliding;


pub use attack::{is_king_attacked, is_square_attacked};

use crate::board::Board;
use crate::constants::{BISHOP_DIRS, QUEEN_DIRS, ROOK_DIRS};
use crate::game_state::GameState;
use crate::types::*;

/// Dispatch to the generator for `piece.kind`
///
/// `en_passant` and `castling` are `None` when generating attacks.
pub(crate) fn piece_moves(
    board: &Board,
    from: Square,
    piece: Piece,
    en_passant: Option<Square>,
    castling: Option<CastlingRights>,
    moves: &mut Vec<Move>,
) {
    let color = piece.color;
    match piece.kind {
        PieceKind::Pawn => pawn::generate_pawn_moves(board, from, color, en_passant, moves),
        PieceKind::Knight => knight::generate_knight_moves(board, from, color, moves),
        PieceKind::Bishop => sliding::generate_sliding_moves(board, from, color, &BISHOP_DIRS, moves),
        PieceKind::Rook => sliding::generate_sliding_moves(board, from, color, &ROOK_DIRS, moves),
        PieceKind::Queen => sliding::generate_sliding_moves(board, from, color, &QUEEN_DIRS, moves),
        PieceKind::King => king::generate_king_moves(board, from, color, castling, moves),
    }
}

/// All pseudo-legal moves of the piece on `from`
///
/// Empty if `from` holds no piece.
pub fn generate_pseudo_legal_moves(state: &GameState, from: &Square) -> Vec<Move> {
    let mut moves = Vec::new();
    if let Some(piece) = state.board.get(*from) {
        piece_moves(
            &state.board,
            *from,
            piece,
            state.en_passant_target,
            Some(state.castling(piece.color)),
            &mut moves,
        );
    }
    moves
}

/// All legal moves of the piece on `from`
///
/// A move is legal when, after playing it on a copy of the board, the mover's
/// king is not attacked. When castling through check is forbidden, the king's
/// start square and the square it crosses must not be attacked either.
///
/// Empty if `from` holds no piece. The side to move is not checked here.
pub fn generate_legal_moves(state: &GameState, from: Square) -> Vec<Move> {
    let Some(piece) = state.board.get(from) else {
        return Vec::new();
    };
    let color = piece.color;
    let enemy = color.opposite();

    let mut moves = generate_pseudo_legal_moves(state, &from);
    moves.retain(|mv| {
        if mv.is_castle() && state.rules.forbid_castling_through_check {
            let crossed = Square::new(from.row, (from.col + mv.to.col) / 2);
            if is_square_attacked(&state.board, &from, enemy)
                || is_square_attacked(&state.board, &crossed, enemy)
            {
                return false;
            }
        }

        let mut trial = state.board;
        trial.play(mv);
        let king_square = if piece.kind == PieceKind::King {
            mv.to
        } else {
            state.king_position(color)
        };
        !is_square_attacked(&trial, &king_square, enemy)
    });
    moves
}

/// Whether any piece of `color` has at least one legal move
pub fn has_any_legal_move(state: &GameState, color: Color) -> bool {
    state
        .board
        .pieces_of(color)
        .any(|(from, _)| !generate_legal_moves(state, from).is_empty())
}

/// Whether the king of `color` is currently attacked
pub fn is_king_in_check(state: &GameState, color: Color) -> bool {
    is_king_attacked(&state.board, state.king_position(color), color)
}
