//! Chess rules engine
//!
//! Move generation, legality checking, move application and end-of-game
//! detection for two-player chess on an 8x8 mailbox board.
//!
//! # Coordinates
//!
//! Squares are `(row, col)` with row 0 the black back rank and row 7 the white
//! back rank; `"e2"` is row 6, col 4.
//!
//! # Example
//!
//! ```
//! use chess_engine::{apply_move, is_in_check, legal_moves, new_game, Color, Square};
//!
//! let mut state = new_game(300);
//! let e2: Square = "e2".parse().unwrap();
//! assert_eq!(legal_moves(&state, e2).len(), 2);
//!
//! apply_move(&mut state, e2, "e4".parse().unwrap()).unwrap();
//! assert!(!is_in_check(&state, Color::Black));
//! ```
//!
//! The engine does no I/O. The clock is driven from outside by calling
//! [`tick`] once per second.

pub mod api;
pub mod board;
pub mod clock;
pub mod constants;
pub mod error;
pub mod game_state;
pub mod history;
pub mod move_gen;
pub mod status;
pub mod types;

pub use api::*;
pub use board::Board;
pub use clock::Clock;
pub use error::{ChessEngineError, ChessEngineResult};
pub use game_state::{GameState, RuleOptions};
pub use history::{MoveHistory, MoveRecord};
pub use status::{DrawReason, TerminalState};
pub use types::{CastlingRights, Color, Move, MoveKind, Piece, PieceKind, Square};
