//! Move history tracking
//!
//! Chronological record of every ply applied to a [`GameState`](crate::game_state::GameState).
//! Each [`MoveRecord`] keeps enough to describe the move afterwards:
//! - Piece moved (kind and color) and its from/to squares
//! - Captured piece, if any (including en passant victims)
//! - Special move flags (castling, en passant, promotion, check)

use crate::types::{Color, Piece, PieceKind, Square};
use serde::{Deserialize, Serialize};

/// One applied ply
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveRecord {
    /// Piece as it stood before moving (a promoted pawn is recorded as a pawn)
    pub piece: Piece,
    pub from: Square,
    pub to: Square,
    pub captured: Option<Piece>,
    pub is_castling: bool,
    pub is_en_passant: bool,
    pub promoted: bool,
    /// The opponent's king was attacked after the move
    pub gives_check: bool,
}

/// Ordered list of applied plies
///
/// Index 0 is White's first move, index 1 Black's reply, and so on.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveHistory {
    moves: Vec<MoveRecord>,
}

impl MoveHistory {
    pub fn add_move(&mut self, record: MoveRecord) {
        self.moves.push(record);
    }

    /// Most recent ply, `None` before the first move
    pub fn last_move(&self) -> Option<&MoveRecord> {
        self.moves.last()
    }

    /// Number of plies played
    pub fn len(&self) -> usize {
        self.moves.len()
    }

    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    pub fn get_move(&self, index: usize) -> Option<&MoveRecord> {
        self.moves.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, MoveRecord> {
        self.moves.iter()
    }

    /// Kinds of the pieces `color` has captured, in capture order
    pub fn captured_by(&self, color: Color) -> Vec<PieceKind> {
        self.moves
            .iter()
            .filter(|record| record.piece.color == color)
            .filter_map(|record| record.captured.map(|piece| piece.kind))
            .collect()
    }
}
