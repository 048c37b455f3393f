//! Attack detection and square checking
//!
//! Provides functions to check if squares are under attack and if kings are in check.
//! This module is critical for move legality validation and check detection.
//!
//! ## Algorithm
//!
//! To check if a square is attacked, we iterate through all pieces of the
//! attacking color and generate their moves in "attack mode":
//! - Pawns attack only their two forward diagonals, whether or not the square
//!   is occupied; pushes never attack
//! - Kings attack their eight neighbours; castling never attacks
//! - En passant is not considered an attack on the target square
//!
//! Every other piece attacks exactly the squares it could move to.

use super::{pawn::pawn_attacks, piece_moves};
use crate::board::Board;
use crate::types::*;

/// Check if a square is under attack by pieces of the specified color
///
/// # Arguments
///
/// * `board` - Board to inspect
/// * `square` - Target square
/// * `by_color` - Color of pieces that might attack
///
/// # Examples
///
/// ```rust,ignore
/// // Is e4 attacked by black?
/// let attacked = is_square_attacked(&state.board, &"e4".parse()?, Color::Black);
/// ```
pub fn is_square_attacked(board: &Board, square: &Square, by_color: Color) -> bool {
    let mut scratch = Vec::with_capacity(32);

    for (from, piece) in board.pieces_of(by_color) {
        let hits = match piece.kind {
            PieceKind::Pawn => pawn_attacks(from, by_color).any(|to| to == *square),
            _ => {
                scratch.clear();
                piece_moves(board, from, piece, None, None, &mut scratch);
                scratch.iter().any(|mv| mv.to == *square)
            }
        };
        if hits {
            return true;
        }
    }

    false
}

/// Check if the king of `color` standing on `king_square` is attacked
#[inline]
pub fn is_king_attacked(board: &Board, king_square: Square, color: Color) -> bool {
    is_square_attacked(board, &king_square, color.opposite())
}
