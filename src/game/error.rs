//! Error types for game module
//!
//! Provides custom error types for the game session: engine rejections,
//! turn ownership in networked play and protocol decoding.

use crate::networking::GameMessage;
use chess_engine::{ChessEngineError, Color, TerminalState};

/// Errors that can occur in game logic
#[derive(Debug, thiserror::Error)]
pub enum GameError {
    /// The engine rejected the request
    #[error(transparent)]
    Engine(#[from] ChessEngineError),

    /// A local move was submitted while the remote peer is to move
    #[error("It is not {local}'s turn")]
    NotLocalTurn { local: Color },

    /// The peer sent a move while the local player is to move
    #[error("Peer moved out of turn: {to_move} is to move")]
    PeerOutOfTurn { to_move: Color },

    /// The peer reported a different outcome than the local engine computed
    #[error("Game state diverged: local {local:?}, remote {remote:?}")]
    StatusMismatch {
        local: TerminalState,
        remote: TerminalState,
    },

    /// The message makes no sense for this session
    #[error("Unexpected message: {message:?}")]
    UnexpectedMessage { message: GameMessage },

    /// Wire encoding or decoding failed
    #[error("Protocol codec error: {0}")]
    Codec(#[from] bincode::Error),
}

/// Result type alias for game operations
pub type GameResult<T> = Result<T, GameError>;
