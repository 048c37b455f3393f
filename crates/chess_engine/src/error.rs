//! Error types for chess engine
//!
//! Provides custom error types for chess engine operations including
//! clock validation, move validation and position construction.

use crate::types::{Color, Square};
use thiserror::Error;

/// Errors that can occur in the chess engine
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ChessEngineError {
    /// Requested per-side time is outside the accepted range
    #[error("Invalid clock input: {minutes} minutes (must be {min}-{max})")]
    InvalidClockInput { minutes: i64, min: i64, max: i64 },

    /// Destination is not among the legal moves of the selected piece
    #[error("Illegal move: {from} to {to}")]
    IllegalMove { from: Square, to: Square },

    /// Source square is empty or holds an opponent piece
    #[error("No {color} piece to move at {square}")]
    EmptySquareSelection { square: Square, color: Color },

    /// The game has already reached a terminal state
    #[error("Game is over, no further moves are accepted")]
    GameOver,

    /// Coordinate text could not be parsed as a square
    #[error("Invalid square: {text:?} (expected a file a-h followed by a rank 1-8)")]
    InvalidSquare { text: String },

    /// Position violates a board invariant
    #[error("Invalid position: {message}")]
    InvalidPosition { message: String },
}

/// Result type alias for chess engine operations
pub type ChessEngineResult<T> = Result<T, ChessEngineError>;
