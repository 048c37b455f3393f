//! Game session - one game from first move to result
//!
//! [`GameSession`] owns the engine's [`GameState`] together with the UI-side
//! selection and, for networked play, the color this side controls.
//!
//! # Click interaction
//!
//! | Selection        | Clicked square            | Result                     |
//! |------------------|---------------------------|----------------------------|
//! | none             | own piece                 | select it, list its moves  |
//! | none             | empty or opponent piece   | ignored                    |
//! | piece selected   | listed destination        | move is applied            |
//! | piece selected   | another own piece         | reselect                   |
//! | piece selected   | anything else             | selection cleared          |
//!
//! All clicks are ignored once the game is over.
//!
//! # Networked play
//!
//! Every accepted local move is returned as a [`GameMessage::MoveMade`] for the
//! transport to broadcast. Moves received from the peer go through
//! [`GameSession::handle_message`] and are applied with exactly the same engine
//! call, so both sides converge on the same state.

use crate::game::error::{GameError, GameResult};
use crate::game::selection::Selection;
use crate::networking::GameMessage;
use chess_engine::{
    apply_move, legal_moves, new_game, resign, tick, Color, GameState, Move, RuleOptions, Square,
    TerminalState,
};
use tracing::{debug, info, warn};

/// What a click did
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ClickOutcome {
    /// Nothing changed
    Ignored,
    /// A piece was (re)selected; its legal moves are listed
    Selected { square: Square, moves: Vec<Move> },
    /// The previous selection was dropped
    Cleared,
    /// The selected piece moved
    Moved { mv: Move, status: TerminalState },
}

/// One game with its selection state
#[derive(Clone, Debug)]
pub struct GameSession {
    state: GameState,
    selection: Selection,
    local_color: Option<Color>,
}

impl GameSession {
    /// Hot-seat game: both colors are played locally
    pub fn new(clock_seconds: u32, rules: RuleOptions) -> Self {
        Self {
            state: new_game(clock_seconds).with_rules(rules),
            selection: Selection::default(),
            local_color: None,
        }
    }

    /// Networked game where this side plays `local_color`
    pub fn networked(clock_seconds: u32, rules: RuleOptions, local_color: Color) -> Self {
        Self {
            local_color: Some(local_color),
            ..Self::new(clock_seconds, rules)
        }
    }

    /// Session over an existing position
    pub fn from_state(state: GameState) -> Self {
        Self {
            state,
            selection: Selection::default(),
            local_color: None,
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn local_color(&self) -> Option<Color> {
        self.local_color
    }

    pub fn status(&self) -> TerminalState {
        self.state.status
    }

    pub fn is_game_over(&self) -> bool {
        self.state.is_game_over()
    }

    /// Whether the side to move is played on this side of the connection
    pub fn is_local_turn(&self) -> bool {
        match self.local_color {
            Some(local) => local == self.state.current_player,
            None => true,
        }
    }

    /// Handle a click on `square`
    pub fn click(&mut self, square: Square) -> ClickOutcome {
        if self.is_game_over() || !self.is_local_turn() {
            return ClickOutcome::Ignored;
        }

        if let Some(mv) = self.selection.move_to(square) {
            self.selection.clear();
            return match apply_move(&mut self.state, mv.from, mv.to) {
                Ok(status) => ClickOutcome::Moved { mv, status },
                Err(e) => {
                    warn!("[SESSION] Listed move {} rejected: {}", mv, e);
                    ClickOutcome::Cleared
                }
            };
        }

        if self.state.board.color_at(square) == Some(self.state.current_player) {
            let moves = legal_moves(&self.state, square);
            debug!("[SESSION] Selected {} with {} moves", square, moves.len());
            self.selection.select(square, moves.clone());
            return ClickOutcome::Selected { square, moves };
        }

        if self.selection.is_selected() {
            self.selection.clear();
            debug!("[SESSION] Selection cleared");
            return ClickOutcome::Cleared;
        }

        ClickOutcome::Ignored
    }

    /// Play a local move given as two squares
    ///
    /// Returns the message to broadcast to the peer.
    pub fn submit_move(&mut self, from: Square, to: Square) -> GameResult<GameMessage> {
        if let Some(local) = self.local_color {
            if local != self.state.current_player {
                return Err(GameError::NotLocalTurn { local });
            }
        }

        apply_move(&mut self.state, from, to)?;
        self.selection.clear();
        info!("[SESSION] Local move {}{}", from, to);
        Ok(GameMessage::MoveMade { from, to })
    }

    /// Advance the clock by one second
    pub fn tick(&mut self) -> TerminalState {
        let was_over = self.is_game_over();
        let status = tick(&mut self.state);
        if !was_over && status.is_game_over() {
            self.selection.clear();
        }
        status
    }

    /// `color` resigns
    ///
    /// Returns the message to broadcast to the peer.
    pub fn resign(&mut self, color: Color) -> GameMessage {
        resign(&mut self.state, color);
        self.selection.clear();
        info!("[SESSION] {} resigned", color);
        GameMessage::Resign { color }
    }

    /// Apply a message received from the peer
    ///
    /// # Errors
    ///
    /// - [`GameError::PeerOutOfTurn`] for a peer move while the local side is to move
    /// - [`GameError::Engine`] if the engine rejects the peer's move
    /// - [`GameError::StatusMismatch`] if the peer's reported result differs
    /// - [`GameError::UnexpectedMessage`] for a resignation of the local color
    pub fn handle_message(&mut self, message: GameMessage) -> GameResult<TerminalState> {
        match message {
            GameMessage::MoveMade { from, to } => {
                if self.local_color == Some(self.state.current_player) {
                    return Err(GameError::PeerOutOfTurn {
                        to_move: self.state.current_player,
                    });
                }
                let status = apply_move(&mut self.state, from, to)?;
                self.selection.clear();
                info!("[SESSION] Peer move {}{}", from, to);
                Ok(status)
            }
            GameMessage::Resign { color } => {
                if self.local_color == Some(color) {
                    return Err(GameError::UnexpectedMessage { message });
                }
                let status = resign(&mut self.state, color);
                self.selection.clear();
                info!("[SESSION] Peer ({}) resigned", color);
                Ok(status)
            }
            GameMessage::GameEnd { status } => {
                if status != self.state.status {
                    warn!(
                        "[SESSION] Peer reports {:?}, local result is {:?}",
                        status, self.state.status
                    );
                    return Err(GameError::StatusMismatch {
                        local: self.state.status,
                        remote: status,
                    });
                }
                Ok(status)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sq(name: &str) -> Square {
        name.parse().expect("valid square name")
    }

    fn session() -> GameSession {
        GameSession::new(300, RuleOptions::default())
    }

    #[test]
    fn test_click_selects_own_piece() {
        let mut session = session();
        let outcome = session.click(sq("e2"));

        match outcome {
            ClickOutcome::Selected { square, moves } => {
                assert_eq!(square, sq("e2"));
                assert_eq!(moves.len(), 2);
            }
            other => panic!("expected selection, got {:?}", other),
        }
        assert!(session.selection().is_selected());
    }

    #[test]
    fn test_click_on_empty_square_without_selection_is_ignored() {
        let mut session = session();
        assert_eq!(session.click(sq("e4")), ClickOutcome::Ignored);
        assert_eq!(session.click(sq("e7")), ClickOutcome::Ignored);
    }

    #[test]
    fn test_click_destination_moves() {
        let mut session = session();
        session.click(sq("e2"));
        let outcome = session.click(sq("e4"));

        assert!(matches!(
            outcome,
            ClickOutcome::Moved {
                status: TerminalState::Ongoing,
                ..
            }
        ));
        assert_eq!(session.state().current_player, Color::Black);
        assert!(!session.selection().is_selected());
    }

    #[test]
    fn test_click_other_own_piece_reselects() {
        let mut session = session();
        session.click(sq("e2"));
        let outcome = session.click(sq("g1"));

        assert!(matches!(outcome, ClickOutcome::Selected { .. }));
        assert_eq!(session.selection().selected_square, Some(sq("g1")));
    }

    #[test]
    fn test_click_elsewhere_clears() {
        let mut session = session();
        session.click(sq("e2"));

        assert_eq!(session.click(sq("e5")), ClickOutcome::Cleared);
        assert!(!session.selection().is_selected());
    }

    #[test]
    fn test_networked_rejects_local_move_out_of_turn() {
        let mut session = GameSession::networked(300, RuleOptions::default(), Color::Black);

        assert_eq!(session.click(sq("e2")), ClickOutcome::Ignored);
        assert!(matches!(
            session.submit_move(sq("e2"), sq("e4")),
            Err(GameError::NotLocalTurn {
                local: Color::Black
            })
        ));
    }

    #[test]
    fn test_peer_move_applied_identically() {
        let mut white = GameSession::networked(300, RuleOptions::default(), Color::White);
        let mut black = GameSession::networked(300, RuleOptions::default(), Color::Black);

        let message = white.submit_move(sq("e2"), sq("e4")).expect("legal move");
        black.handle_message(message).expect("peer move");

        assert_eq!(white.state().board, black.state().board);
        assert_eq!(
            white.state().en_passant_target,
            black.state().en_passant_target
        );
    }

    #[test]
    fn test_peer_move_out_of_turn_rejected() {
        let mut white = GameSession::networked(300, RuleOptions::default(), Color::White);
        let result = white.handle_message(GameMessage::MoveMade {
            from: sq("e7"),
            to: sq("e5"),
        });
        assert!(matches!(result, Err(GameError::PeerOutOfTurn { .. })));
    }

    #[test]
    fn test_clicks_ignored_after_resignation() {
        let mut session = session();
        session.resign(Color::White);

        assert!(session.is_game_over());
        assert_eq!(session.click(sq("e2")), ClickOutcome::Ignored);
    }
}
