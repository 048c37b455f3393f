//! King move generation
//!
//! Kings move one square in any direction onto an empty or opponent-occupied
//! square. Castling is added on top when castling rights are supplied.
//!
//! ## Castling Conditions
//!
//! For each side whose right is still held:
//! - The king stands unmoved on its home square
//! - The rook stands unmoved on its home square
//! - Every square strictly between king and rook is empty
//!
//! The king then moves two squares towards the rook and the rook lands on the
//! square the king crossed. Whether the king may pass through attacked squares
//! is decided by the legality filter, see
//! [`RuleOptions`](crate::game_state::RuleOptions).

use crate::board::Board;
use crate::constants::{KING_HOME_COL, KING_SIDE_ROOK_COL, QUEEN_DIRS, QUEEN_SIDE_ROOK_COL};
use crate::types::*;

/// Generate king moves from a given square
///
/// `castling` is `None` when generating attacks: a king never attacks by
/// castling.
pub fn generate_king_moves(
    board: &Board,
    from: Square,
    color: Color,
    castling: Option<CastlingRights>,
    moves: &mut Vec<Move>,
) {
    for (d_row, d_col) in QUEEN_DIRS {
        if let Some(to) = from.offset(d_row, d_col) {
            if board.color_at(to) != Some(color) {
                moves.push(Move::normal(from, to));
            }
        }
    }

    if let Some(rights) = castling {
        generate_castling_moves(board, from, color, rights, moves);
    }
}

fn generate_castling_moves(
    board: &Board,
    from: Square,
    color: Color,
    rights: CastlingRights,
    moves: &mut Vec<Move>,
) {
    let row = color.home_row();
    let king_ready = from == Square::new(row, KING_HOME_COL)
        && board
            .get(from)
            .is_some_and(|king| king.kind == PieceKind::King && !king.has_moved);
    if !king_ready {
        return;
    }

    if rights.king_side
        && path_is_clear(board, row, from.col + 1, KING_SIDE_ROOK_COL)
        && rook_is_ready(board, row, KING_SIDE_ROOK_COL, color)
    {
        moves.push(Move::new(
            from,
            Square::new(row, from.col + 2),
            MoveKind::Castle {
                rook_from_col: KING_SIDE_ROOK_COL,
                rook_to_col: from.col + 1,
            },
        ));
    }

    if rights.queen_side
        && path_is_clear(board, row, QUEEN_SIDE_ROOK_COL + 1, from.col)
        && rook_is_ready(board, row, QUEEN_SIDE_ROOK_COL, color)
    {
        moves.push(Move::new(
            from,
            Square::new(row, from.col - 2),
            MoveKind::Castle {
                rook_from_col: QUEEN_SIDE_ROOK_COL,
                rook_to_col: from.col - 1,
            },
        ));
    }
}

/// Every column in `start..end` on `row` is empty
fn path_is_clear(board: &Board, row: u8, start: u8, end: u8) -> bool {
    (start..end).all(|col| board.is_empty(Square::new(row, col)))
}

fn rook_is_ready(board: &Board, row: u8, col: u8, color: Color) -> bool {
    board
        .get(Square::new(row, col))
        .is_some_and(|rook| rook.kind == PieceKind::Rook && rook.color == color && !rook.has_moved)
}
