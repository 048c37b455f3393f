//! # Chess Engine Core Types
//!
//! Value types shared by every part of the engine:
//!
//! - [`Color`] and [`PieceKind`] form the closed set of piece identities.
//!   Move generation dispatches on `PieceKind` with a single `match`.
//! - [`Piece`] is what a board cell owns. `has_moved` only matters for kings
//!   and rooks (castling eligibility).
//! - [`Square`] is a `(row, col)` coordinate. Row 0 is Black's back rank and
//!   row 7 is White's, so `"e2"` is row 6, col 4.
//! - [`Move`] is one candidate produced by the move generator. The
//!   [`MoveKind`] carries the side effects the applier must perform
//!   (en passant capture, castling rook hop). Promotion is implicit: any pawn
//!   landing on the far row becomes a queen.

use crate::constants::BOARD_SIZE;
use crate::error::ChessEngineError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The two sides in a chess game
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Color {
    White,
    Black,
}

impl Color {
    /// Both colors, White first
    pub const ALL: [Color; 2] = [Color::White, Color::Black];

    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    /// Row holding this side's king and rooks at the start
    #[inline]
    pub const fn home_row(self) -> u8 {
        match self {
            Color::White => 7,
            Color::Black => 0,
        }
    }

    /// Row delta of a pawn advance
    #[inline]
    pub const fn pawn_direction(self) -> i8 {
        match self {
            Color::White => -1,
            Color::Black => 1,
        }
    }

    /// Row from which a pawn may advance two squares
    #[inline]
    pub const fn pawn_start_row(self) -> u8 {
        match self {
            Color::White => 6,
            Color::Black => 1,
        }
    }

    /// Row on which a pawn of this color promotes
    #[inline]
    pub const fn promotion_row(self) -> u8 {
        self.opposite().home_row()
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::White => write!(f, "white"),
            Color::Black => write!(f, "black"),
        }
    }
}

/// The six piece kinds
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl PieceKind {
    /// Single-letter symbol, uppercase (white convention)
    pub const fn symbol(self) -> char {
        match self {
            PieceKind::Pawn => 'P',
            PieceKind::Knight => 'N',
            PieceKind::Bishop => 'B',
            PieceKind::Rook => 'R',
            PieceKind::Queen => 'Q',
            PieceKind::King => 'K',
        }
    }
}

/// A piece as stored in a board cell
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Piece {
    pub kind: PieceKind,
    pub color: Color,
    /// Set once a king or rook has moved; never reset
    pub has_moved: bool,
}

impl Piece {
    /// An unmoved piece
    pub const fn new(kind: PieceKind, color: Color) -> Self {
        Self {
            kind,
            color,
            has_moved: false,
        }
    }

    /// Board symbol: uppercase for White, lowercase for Black
    pub fn symbol(&self) -> char {
        match self.color {
            Color::White => self.kind.symbol(),
            Color::Black => self.kind.symbol().to_ascii_lowercase(),
        }
    }
}

/// A board coordinate
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Square {
    pub row: u8,
    pub col: u8,
}

impl Square {
    /// Construct a square; both coordinates must be below 8
    #[inline]
    pub const fn new(row: u8, col: u8) -> Self {
        debug_assert!(row < BOARD_SIZE && col < BOARD_SIZE);
        Self { row, col }
    }

    /// Checked constructor for untrusted coordinates
    pub fn try_new(row: i16, col: i16) -> Option<Self> {
        let size = BOARD_SIZE as i16;
        if (0..size).contains(&row) && (0..size).contains(&col) {
            Some(Self {
                row: row as u8,
                col: col as u8,
            })
        } else {
            None
        }
    }

    /// Square reached by moving `(d_row, d_col)`, if it stays on the board
    #[inline]
    pub fn offset(self, d_row: i8, d_col: i8) -> Option<Self> {
        Self::try_new(
            self.row as i16 + d_row as i16,
            self.col as i16 + d_col as i16,
        )
    }

    /// Every square, row by row starting at row 0
    pub fn all() -> impl Iterator<Item = Square> {
        (0..BOARD_SIZE).flat_map(|row| (0..BOARD_SIZE).map(move |col| Square::new(row, col)))
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let file = (b'a' + self.col) as char;
        let rank = BOARD_SIZE - self.row;
        write!(f, "{file}{rank}")
    }
}

impl FromStr for Square {
    type Err = ChessEngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || ChessEngineError::InvalidSquare {
            text: s.to_string(),
        };
        let bytes = s.trim().as_bytes();
        if bytes.len() != 2 {
            return Err(invalid());
        }
        let file = bytes[0].to_ascii_lowercase();
        let rank = bytes[1];
        if !(b'a'..=b'h').contains(&file) || !(b'1'..=b'8').contains(&rank) {
            return Err(invalid());
        }
        Ok(Square::new(BOARD_SIZE - (rank - b'0'), file - b'a'))
    }
}

/// Castling rights of one side
///
/// Rights are only ever revoked, never granted back.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CastlingRights {
    pub king_side: bool,
    pub queen_side: bool,
}

impl CastlingRights {
    pub const ALL: Self = Self {
        king_side: true,
        queen_side: true,
    };

    pub const NONE: Self = Self {
        king_side: false,
        queen_side: false,
    };

    pub fn revoke_all(&mut self) {
        self.king_side = false;
        self.queen_side = false;
    }

    /// Revoke the right belonging to the rook starting on `col`
    pub fn revoke_for_rook_col(&mut self, col: u8) {
        match col {
            crate::constants::QUEEN_SIDE_ROOK_COL => self.queen_side = false,
            crate::constants::KING_SIDE_ROOK_COL => self.king_side = false,
            _ => {}
        }
    }
}

/// Side effect attached to a generated move
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MoveKind {
    /// Plain move or capture
    Normal,
    /// Pawn advance of two rows; creates an en passant target
    DoublePush,
    /// Pawn capture onto the en passant target
    EnPassant,
    /// King moves two columns; the rook hops from `rook_from_col` to `rook_to_col`
    Castle { rook_from_col: u8, rook_to_col: u8 },
}

/// A candidate move produced by the move generator
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    pub from: Square,
    pub to: Square,
    pub kind: MoveKind,
}

impl Move {
    #[inline]
    pub const fn new(from: Square, to: Square, kind: MoveKind) -> Self {
        Self { from, to, kind }
    }

    #[inline]
    pub const fn normal(from: Square, to: Square) -> Self {
        Self::new(from, to, MoveKind::Normal)
    }

    pub fn is_castle(&self) -> bool {
        matches!(self.kind, MoveKind::Castle { .. })
    }

    pub fn is_en_passant(&self) -> bool {
        self.kind == MoveKind::EnPassant
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.from, self.to)
    }
}
