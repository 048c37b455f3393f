//! Knight move generation
//!
//! Knights move in an L-shape: 2 squares in one direction, then 1 square
//! perpendicular (or vice versa). They jump over pieces, so only the
//! destination matters: it must be empty or hold an opponent piece.

use crate::board::Board;
use crate::constants::KNIGHT_OFFSETS;
use crate::types::*;

/// Generate knight moves from a given square
pub fn generate_knight_moves(board: &Board, from: Square, color: Color, moves: &mut Vec<Move>) {
    for (d_row, d_col) in KNIGHT_OFFSETS {
        if let Some(to) = from.offset(d_row, d_col) {
            if board.color_at(to) != Some(color) {
                moves.push(Move::normal(from, to));
            }
        }
    }
}
