//! Captured pieces summary
//!
//! Derived from the move history and used by the board display.
//!
//! # Material Values
//!
//! Standard chess piece values in pawns:
//! - Pawn: 1
//! - Knight/Bishop: 3
//! - Rook: 5
//! - Queen: 9
//! - King: 0 (cannot be captured)
//!
//! Positive advantage means White is ahead, negative means Black is ahead.

use chess_engine::{Color, MoveHistory, PieceKind};

/// Pieces captured by each side
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CapturedPieces {
    /// Pieces captured by white (black pieces taken)
    pub white_captured: Vec<PieceKind>,
    /// Pieces captured by black (white pieces taken)
    pub black_captured: Vec<PieceKind>,
}

impl CapturedPieces {
    pub fn from_history(history: &MoveHistory) -> Self {
        Self {
            white_captured: history.captured_by(Color::White),
            black_captured: history.captured_by(Color::Black),
        }
    }

    /// Material difference in pawn units
    pub fn material_advantage(&self) -> i32 {
        let white_score: i32 = self.white_captured.iter().map(|p| piece_value(*p)).sum();
        let black_score: i32 = self.black_captured.iter().map(|p| piece_value(*p)).sum();
        white_score - black_score
    }
}

/// Standard material value of a piece kind
pub fn piece_value(kind: PieceKind) -> i32 {
    match kind {
        PieceKind::Pawn => 1,
        PieceKind::Knight | PieceKind::Bishop => 3,
        PieceKind::Rook => 5,
        PieceKind::Queen => 9,
        PieceKind::King => 0,
    }
}
