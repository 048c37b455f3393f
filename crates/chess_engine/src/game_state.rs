//! # Game State - the engine's top-level mutable record
//!
//! `GameState` combines:
//! 1. **Current position** (`board`) and whose turn it is
//! 2. **Cached king squares** (`white_king`, `black_king`), always equal to
//!    where that king actually stands; updated together with the board
//! 3. **Rule bookkeeping**: castling rights, en passant target, half-move clock
//!    and full-move number
//! 4. **Session data**: clock, terminal status and move history
//! 5. **Rule options**: explicit choices for behaviour that varies between
//!    rule sets
//!
//! A state is created once per game, mutated in place by every accepted move,
//! and frozen (apart from being read) once `status` becomes terminal.

use crate::board::Board;
use crate::clock::Clock;
use crate::constants::{
    DEFAULT_FIFTY_MOVE_THRESHOLD, KING_HOME_COL, KING_SIDE_ROOK_COL, QUEEN_SIDE_ROOK_COL,
};
use crate::error::{ChessEngineError, ChessEngineResult};
use crate::history::MoveHistory;
use crate::status::TerminalState;
use crate::types::*;
use serde::{Deserialize, Serialize};

/// Product decisions on rules the engine can play either way
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleOptions {
    /// Half-move clock value that draws the game.
    ///
    /// The default of 50 counts half-moves; standard chess uses 100.
    pub fifty_move_threshold: u32,

    /// Reject castling out of, through or into check.
    ///
    /// Off by default: castling is generated from occupancy and rights only.
    pub forbid_castling_through_check: bool,
}

impl Default for RuleOptions {
    fn default() -> Self {
        Self {
            fifty_move_threshold: DEFAULT_FIFTY_MOVE_THRESHOLD,
            forbid_castling_through_check: false,
        }
    }
}

/// Complete state of one game
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameState {
    pub board: Board,
    pub current_player: Color,

    pub white_king: Square,
    pub black_king: Square,

    pub white_castling: CastlingRights,
    pub black_castling: CastlingRights,

    /// Square a pawn skipped on the previous move; valid for one reply only
    pub en_passant_target: Option<Square>,

    /// Plies since the last pawn move or capture
    pub half_move_clock: u32,
    /// Starts at 1, incremented after Black moves
    pub full_move_number: u32,

    pub clock: Clock,
    pub status: TerminalState,
    pub history: MoveHistory,
    pub rules: RuleOptions,
}

impl GameState {
    /// Standard initial position with `clock_seconds` per side, White to move
    pub fn new(clock_seconds: u32) -> Self {
        Self {
            board: Board::standard(),
            current_player: Color::White,
            white_king: Square::new(Color::White.home_row(), KING_HOME_COL),
            black_king: Square::new(Color::Black.home_row(), KING_HOME_COL),
            white_castling: CastlingRights::ALL,
            black_castling: CastlingRights::ALL,
            en_passant_target: None,
            half_move_clock: 0,
            full_move_number: 1,
            clock: Clock::new(clock_seconds),
            status: TerminalState::Ongoing,
            history: MoveHistory::default(),
            rules: RuleOptions::default(),
        }
    }

    /// Arbitrary position from a list of placements
    ///
    /// Castling rights are granted only where the king and the corresponding
    /// rook stand unmoved on their home squares.
    ///
    /// # Errors
    ///
    /// [`ChessEngineError::InvalidPosition`] unless there is exactly one king
    /// of each color, or if two placements share a square.
    pub fn from_pieces(
        placements: &[(Square, Piece)],
        to_move: Color,
        clock_seconds: u32,
    ) -> ChessEngineResult<Self> {
        let mut board = Board::empty();
        for (square, piece) in placements {
            if !board.is_empty(*square) {
                return Err(ChessEngineError::InvalidPosition {
                    message: format!("two pieces placed on {square}"),
                });
            }
            board.set(*square, Some(*piece));
        }

        let mut kings = [Square::new(0, 0); 2];
        for (slot, color) in Color::ALL.into_iter().enumerate() {
            let count = board.count_kings(color);
            if count != 1 {
                return Err(ChessEngineError::InvalidPosition {
                    message: format!("expected exactly one {color} king, found {count}"),
                });
            }
            if let Some(square) = board.find_king(color) {
                kings[slot] = square;
            }
        }

        let mut state = Self {
            board,
            current_player: to_move,
            white_king: kings[0],
            black_king: kings[1],
            white_castling: CastlingRights::NONE,
            black_castling: CastlingRights::NONE,
            en_passant_target: None,
            half_move_clock: 0,
            full_move_number: 1,
            clock: Clock::new(clock_seconds),
            status: TerminalState::Ongoing,
            history: MoveHistory::default(),
            rules: RuleOptions::default(),
        };
        for color in Color::ALL {
            *state.castling_mut(color) = initial_rights(&state.board, color);
        }
        Ok(state)
    }

    /// Same state with different rule options
    pub fn with_rules(mut self, rules: RuleOptions) -> Self {
        self.rules = rules;
        self
    }

    /// Cached king square of `color`
    #[inline]
    pub fn king_position(&self, color: Color) -> Square {
        match color {
            Color::White => self.white_king,
            Color::Black => self.black_king,
        }
    }

    pub(crate) fn set_king_position(&mut self, color: Color, square: Square) {
        match color {
            Color::White => self.white_king = square,
            Color::Black => self.black_king = square,
        }
    }

    #[inline]
    pub fn castling(&self, color: Color) -> CastlingRights {
        match color {
            Color::White => self.white_castling,
            Color::Black => self.black_castling,
        }
    }

    pub(crate) fn castling_mut(&mut self, color: Color) -> &mut CastlingRights {
        match color {
            Color::White => &mut self.white_castling,
            Color::Black => &mut self.black_castling,
        }
    }

    #[inline]
    pub fn is_game_over(&self) -> bool {
        self.status.is_game_over()
    }
}

fn initial_rights(board: &Board, color: Color) -> CastlingRights {
    let home = color.home_row();
    let unmoved = |col: u8, kind: PieceKind| {
        board
            .get(Square::new(home, col))
            .is_some_and(|p| p.kind == kind && p.color == color && !p.has_moved)
    };
    if !unmoved(KING_HOME_COL, PieceKind::King) {
        return CastlingRights::NONE;
    }
    CastlingRights {
        king_side: unmoved(KING_SIDE_ROOK_COL, PieceKind::Rook),
        queen_side: unmoved(QUEEN_SIDE_ROOK_COL, PieceKind::Rook),
    }
}
