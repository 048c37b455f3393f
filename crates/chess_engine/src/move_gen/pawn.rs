//! Pawn move generation
//!
//! Handles pawn-specific move generation including:
//! - Single and double forward pushes
//! - Diagonal captures
//! - En passant captures onto the skipped square
//! - Promotion (handled during move execution, by destination row)
//!
//! ## Pawn Movement Rules
//!
//! - **Forward push**: one row towards the opponent onto an empty square
//! - **Double push**: from the starting row, if both squares ahead are empty
//! - **Captures**: one square diagonally forward onto an opponent piece
//! - **En passant**: diagonally forward onto the en passant target, removing
//!   the opponent pawn standing beside the capturing pawn

use crate::board::Board;
use crate::types::*;

/// Generate pawn moves from a given square
///
/// # Arguments
///
/// * `board` - Board to generate on
/// * `from` - Square of the pawn
/// * `color` - Color of the pawn
/// * `en_passant` - Current en passant target, if any
/// * `moves` - Output vector to append moves to
pub fn generate_pawn_moves(
    board: &Board,
    from: Square,
    color: Color,
    en_passant: Option<Square>,
    moves: &mut Vec<Move>,
) {
    let dir = color.pawn_direction();

    if let Some(one) = from.offset(dir, 0) {
        if board.is_empty(one) {
            moves.push(Move::normal(from, one));

            if from.row == color.pawn_start_row() {
                if let Some(two) = from.offset(2 * dir, 0) {
                    if board.is_empty(two) {
                        moves.push(Move::new(from, two, MoveKind::DoublePush));
                    }
                }
            }
        }
    }

    for to in pawn_attacks(from, color) {
        if board.is_enemy(to, color) {
            moves.push(Move::normal(from, to));
        } else if en_passant == Some(to) && board.is_empty(to) {
            let victim = Square::new(from.row, to.col);
            let is_passed_pawn = board
                .get(victim)
                .is_some_and(|p| p.kind == PieceKind::Pawn && p.color != color);
            if is_passed_pawn {
                moves.push(Move::new(from, to, MoveKind::EnPassant));
            }
        }
    }
}

/// The (up to two) squares a pawn attacks diagonally forward
pub fn pawn_attacks(from: Square, color: Color) -> impl Iterator<Item = Square> {
    let dir = color.pawn_direction();
    [-1i8, 1]
        .into_iter()
        .filter_map(move |d_col| from.offset(dir, d_col))
}
