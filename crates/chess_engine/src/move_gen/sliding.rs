//! Sliding piece move generation
//!
//! Common functionality for sliding pieces (bishops, rooks, queens).
//! These pieces move any number of squares along a direction until blocked.
//!
//! ## Algorithm
//!
//! For each direction the ray is walked one square at a time:
//! 1. Empty square: valid move, keep walking
//! 2. Opponent piece: valid capture, stop this ray
//! 3. Own piece: not a move, stop this ray
//! 4. Board edge: stop this ray

use crate::board::Board;
use crate::types::*;

/// Generate moves for a sliding piece along the given directions
///
/// # Arguments
///
/// * `board` - Board to generate on
/// * `from` - Square of the sliding piece
/// * `color` - Color of the moving piece
/// * `dirs` - `(d_row, d_col)` ray directions for the piece type
/// * `moves` - Output vector to append moves to
///
/// # Examples
///
/// ```rust,ignore
/// let mut moves = Vec::new();
/// generate_sliding_moves(&board, Square::new(7, 0), Color::White, &ROOK_DIRS, &mut moves);
/// ```
pub fn generate_sliding_moves(
    board: &Board,
    from: Square,
    color: Color,
    dirs: &[(i8, i8)],
    moves: &mut Vec<Move>,
) {
    for &(d_row, d_col) in dirs {
        let mut current = from;
        while let Some(to) = current.offset(d_row, d_col) {
            match board.color_at(to) {
                None => moves.push(Move::normal(from, to)),
                Some(owner) => {
                    if owner != color {
                        moves.push(Move::normal(from, to));
                    }
                    break;
                }
            }
            current = to;
        }
    }
}
