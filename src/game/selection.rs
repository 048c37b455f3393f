//! Selection tracking for the click-to-move interaction

use chess_engine::{Move, Square};

/// The currently selected piece and its legal moves
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Selection {
    pub selected_square: Option<Square>,
    pub possible_moves: Vec<Move>,
}

impl Selection {
    pub fn select(&mut self, square: Square, moves: Vec<Move>) {
        self.selected_square = Some(square);
        self.possible_moves = moves;
    }

    pub fn clear(&mut self) {
        self.selected_square = None;
        self.possible_moves.clear();
    }

    pub fn is_selected(&self) -> bool {
        self.selected_square.is_some()
    }

    /// The listed move landing on `to`, if any
    pub fn move_to(&self, to: Square) -> Option<Move> {
        self.possible_moves.iter().copied().find(|mv| mv.to == to)
    }

    /// Whether `square` is a highlighted destination
    pub fn is_target(&self, square: Square) -> bool {
        self.move_to(square).is_some()
    }
}
