//! Board representation and helper functions
//!
//! Provides the 8x8 mailbox used throughout the engine:
//! - Cell access by [`Square`]
//! - Piece queries by color
//! - The standard initial placement
//!
//! `Board` is `Copy`. The legality filter relies on this: every candidate move
//! is tried on a copy which is dropped afterwards, so a rejected candidate can
//! never leak into the live position.

use crate::constants::BOARD_SIZE;
use crate::types::*;
use std::fmt;

const N: usize = BOARD_SIZE as usize;

/// Back rank layout from col 0 to col 7
const BACK_ROW: [PieceKind; N] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

/// What [`Board::play`] did besides relocating the piece
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BoardChange {
    /// Piece removed from the board, including an en passant victim
    pub captured: Option<Piece>,
    /// A pawn reached the far row and became a queen
    pub promoted: bool,
}

/// 8x8 grid of optional pieces, indexed `[row][col]`
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Board {
    cells: [[Option<Piece>; N]; N],
}

impl Default for Board {
    fn default() -> Self {
        Self::empty()
    }
}

impl Board {
    /// Board with no pieces
    pub const fn empty() -> Self {
        Self {
            cells: [[None; N]; N],
        }
    }

    /// Standard initial placement (Black on rows 0-1, White on rows 6-7)
    pub fn standard() -> Self {
        let mut board = Self::empty();
        for color in Color::ALL {
            let home = color.home_row();
            let pawns = color.pawn_start_row();
            for (col, kind) in BACK_ROW.iter().enumerate() {
                board.set(Square::new(home, col as u8), Some(Piece::new(*kind, color)));
                board.set(
                    Square::new(pawns, col as u8),
                    Some(Piece::new(PieceKind::Pawn, color)),
                );
            }
        }
        board
    }

    /// Piece on a square, if any
    #[inline]
    pub fn get(&self, square: Square) -> Option<Piece> {
        self.cells[square.row as usize][square.col as usize]
    }

    /// Replace the contents of a square
    #[inline]
    pub fn set(&mut self, square: Square, piece: Option<Piece>) {
        self.cells[square.row as usize][square.col as usize] = piece;
    }

    /// Remove and return the piece on a square
    #[inline]
    pub fn take(&mut self, square: Square) -> Option<Piece> {
        self.cells[square.row as usize][square.col as usize].take()
    }

    #[inline]
    pub fn is_empty(&self, square: Square) -> bool {
        self.get(square).is_none()
    }

    /// Color of the piece on a square, if any
    #[inline]
    pub fn color_at(&self, square: Square) -> Option<Color> {
        self.get(square).map(|piece| piece.color)
    }

    /// `true` if the square holds a piece of the opposite color
    #[inline]
    pub fn is_enemy(&self, square: Square, own: Color) -> bool {
        self.color_at(square) == Some(own.opposite())
    }

    /// Perform the board-level effects of a generated move
    ///
    /// Relocates the piece, removes an en passant victim, hops the castling
    /// rook and promotes a pawn landing on the far row to a queen. Kings and
    /// rooks that move are marked `has_moved`. Clocks, rights and turn are the
    /// applier's business, so this is also what the legality filter replays on
    /// its trial copies.
    pub fn play(&mut self, mv: &Move) -> BoardChange {
        let Some(mut piece) = self.take(mv.from) else {
            return BoardChange::default();
        };
        if matches!(piece.kind, PieceKind::King | PieceKind::Rook) {
            piece.has_moved = true;
        }

        let mut captured = self.take(mv.to);
        match mv.kind {
            MoveKind::EnPassant => {
                captured = self.take(Square::new(mv.from.row, mv.to.col));
            }
            MoveKind::Castle {
                rook_from_col,
                rook_to_col,
            } => {
                let rook_from = Square::new(mv.from.row, rook_from_col);
                let rook_to = Square::new(mv.from.row, rook_to_col);
                if let Some(mut rook) = self.take(rook_from) {
                    rook.has_moved = true;
                    self.set(rook_to, Some(rook));
                }
            }
            MoveKind::Normal | MoveKind::DoublePush => {}
        }

        let promoted = piece.kind == PieceKind::Pawn && mv.to.row == piece.color.promotion_row();
        if promoted {
            piece = Piece::new(PieceKind::Queen, piece.color);
        }
        self.set(mv.to, Some(piece));

        BoardChange { captured, promoted }
    }

    /// All occupied squares with their pieces
    pub fn pieces(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        Square::all().filter_map(move |square| self.get(square).map(|piece| (square, piece)))
    }

    /// All squares holding a piece of `color`
    pub fn pieces_of(&self, color: Color) -> impl Iterator<Item = (Square, Piece)> + '_ {
        self.pieces().filter(move |(_, piece)| piece.color == color)
    }

    /// Position of the king of `color`, scanning the board
    pub fn find_king(&self, color: Color) -> Option<Square> {
        self.pieces_of(color)
            .find(|(_, piece)| piece.kind == PieceKind::King)
            .map(|(square, _)| square)
    }

    /// Number of kings of `color` on the board
    pub fn count_kings(&self, color: Color) -> usize {
        self.pieces_of(color)
            .filter(|(_, piece)| piece.kind == PieceKind::King)
            .count()
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f)?;
        for row in 0..BOARD_SIZE {
            for col in 0..BOARD_SIZE {
                let symbol = self
                    .get(Square::new(row, col))
                    .map(|piece| piece.symbol())
                    .unwrap_or('.');
                write!(f, "{symbol}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
